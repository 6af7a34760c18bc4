//! ES class builder.

use oas_codegen::{CodeFragment, Renderable};

use super::{JsDoc, Stmt};

/// A class field declaration (`name;`, `static name = value;`).
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    key: String,
    doc: JsDoc,
    is_static: bool,
    value: Option<String>,
}

impl Field {
    /// A field named by an already formatted key (see `property_key`).
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            doc: JsDoc::new(),
            is_static: false,
            value: None,
        }
    }

    pub fn doc(mut self, doc: JsDoc) -> Self {
        self.doc = doc;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let static_kw = if self.is_static { "static " } else { "" };
        let declaration = match &self.value {
            Some(value) => format!("{}{} = {};", static_kw, self.key, value),
            None => format!("{}{};", static_kw, self.key),
        };
        let mut fragments = self.doc.to_fragments();
        fragments.push(CodeFragment::line(declaration));
        fragments
    }
}

/// A class method.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    name: String,
    params: Vec<String>,
    doc: JsDoc,
    is_static: bool,
    body: Vec<Stmt>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            doc: JsDoc::new(),
            is_static: false,
            body: Vec::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.push(name.into());
        self
    }

    pub fn doc(mut self, doc: JsDoc) -> Self {
        self.doc = doc;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn body(mut self, stmts: impl IntoIterator<Item = Stmt>) -> Self {
        self.body.extend(stmts);
        self
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let static_kw = if self.is_static { "static " } else { "" };
        let signature = format!("{}{}({})", static_kw, self.name, self.params.join(", "));

        let mut fragments = self.doc.to_fragments();
        if self.body.is_empty() {
            fragments.push(CodeFragment::line(format!("{} {{}}", signature)));
        } else {
            fragments.push(CodeFragment::block(
                format!("{} {{", signature),
                self.body.to_fragments(),
                Some("}".to_string()),
            ));
        }
        fragments
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Member {
    Field(Field),
    Method(Method),
}

/// Builder for `class Name extends Base { ... }`.
///
/// Members render in insertion order, separated by a blank line.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    name: String,
    extends: Option<String>,
    doc: JsDoc,
    members: Vec<Member>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            doc: JsDoc::new(),
            members: Vec::new(),
        }
    }

    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.extends = Some(base.into());
        self
    }

    pub fn doc(mut self, doc: JsDoc) -> Self {
        self.doc = doc;
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.members.push(Member::Field(field));
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.members.extend(fields.into_iter().map(Member::Field));
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.members.push(Member::Method(method));
        self
    }

    pub fn methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.members.extend(methods.into_iter().map(Member::Method));
        self
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = match &self.extends {
            Some(base) => format!("class {} extends {} {{", self.name, base),
            None => format!("class {} {{", self.name),
        };

        let mut body = Vec::new();
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::blank());
            }
            body.extend(match member {
                Member::Field(field) => field.to_fragments(),
                Member::Method(method) => method.to_fragments(),
            });
        }

        let mut fragments = self.doc.to_fragments();
        fragments.push(CodeFragment::block(header, body, Some("}".to_string())));
        fragments
    }
}
