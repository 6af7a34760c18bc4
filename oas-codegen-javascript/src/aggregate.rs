//! The `ApiClient` facade.

use crate::ast::{Class, Field, JsDoc, Method};

pub const API_CLIENT_CLASS: &str = "ApiClient";

/// `<Namespace>Client`
pub fn client_class_name(namespace: &str) -> String {
    format!("{}Client", namespace)
}

/// One static singleton per namespace plus the `ignoreResponse` no-op.
pub fn api_client_class<'a>(namespaces: impl IntoIterator<Item = &'a str>) -> Class {
    let singletons = namespaces.into_iter().map(|namespace| {
        Field::new(namespace)
            .static_()
            .value(format!("new {}()", client_class_name(namespace)))
    });

    Class::new(API_CLIENT_CLASS)
        .doc(JsDoc::new().text(Some("Entry point to every API client")))
        .fields(singletons)
        .method(
            Method::new("ignoreResponse").static_().doc(
                JsDoc::new().text(Some(
                    "Callback for responses the caller intentionally does not handle",
                )),
            ),
        )
}
