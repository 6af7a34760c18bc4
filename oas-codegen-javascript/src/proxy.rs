//! The `ModelProxyClass` dispatcher.

use crate::ast::{Class, JsDoc, Method, Stmt, Switch, quote};

pub const PROXY_CLASS: &str = "ModelProxyClass";

/// `ModelProxyClass.createByClassName(className, genericObject)`: one case per
/// model, in the given order, and a default that throws.
pub fn proxy_class<'a>(models: impl IntoIterator<Item = &'a str>) -> Class {
    let switch = models.into_iter().fold(Switch::new("className"), |switch, model| {
        switch.case(
            quote(model),
            vec![Stmt::return_(format!("{}.create(genericObject)", model))],
        )
    });
    let switch = switch.default(vec![Stmt::throw(
        "new Error('Undefined model class: ' + className)",
    )]);

    let create_by_class_name = Method::new("createByClassName")
        .static_()
        .param("className")
        .param("genericObject")
        .doc(
            JsDoc::new()
                .text(Some("Creates the model registered under className from a generic object"))
                .param("string", "className", false, None)
                .param("object", "genericObject", false, None)
                .returns("object"),
        )
        .body([Stmt::Switch(switch)]);

    Class::new(PROXY_CLASS).method(create_by_class_name)
}
