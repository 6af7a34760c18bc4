//! Promise chain builder (`head.then(x => { ... }).catch(...)`).

use oas_codegen::{CodeFragment, Renderable};

use super::Stmt;

/// A call in a chain.
#[derive(Debug, Clone, PartialEq)]
enum Link {
    /// `.method(param => { body })`
    Callback {
        method: String,
        param: String,
        body: Vec<Stmt>,
    },
    /// `.method(arg)`
    Call { method: String, arg: String },
}

/// Builder for method chains rendered one call per line.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    head: String,
    links: Vec<Link>,
}

impl Chain {
    /// Start a chain at an expression.
    pub fn new(head: impl Into<String>) -> Self {
        Self {
            head: head.into(),
            links: Vec::new(),
        }
    }

    /// Add a call taking a block-bodied arrow function.
    pub fn callback(
        mut self,
        method: impl Into<String>,
        param: impl Into<String>,
        body: Vec<Stmt>,
    ) -> Self {
        self.links.push(Link::Callback {
            method: method.into(),
            param: param.into(),
            body,
        });
        self
    }

    /// Add a call with a single inline argument.
    pub fn call(mut self, method: impl Into<String>, arg: impl Into<String>) -> Self {
        self.links.push(Link::Call {
            method: method.into(),
            arg: arg.into(),
        });
        self
    }
}

impl Renderable for Chain {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.links.is_empty() {
            return vec![CodeFragment::line(format!("{};", self.head))];
        }

        let last = self.links.len() - 1;
        let links = self
            .links
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let end = if i == last { ";" } else { "" };
                match link {
                    Link::Callback {
                        method,
                        param,
                        body,
                    } => CodeFragment::block(
                        format!(".{}({} => {{", method, param),
                        body.to_fragments(),
                        Some(format!("}}){}", end)),
                    ),
                    Link::Call { method, arg } => {
                        CodeFragment::line(format!(".{}({}){}", method, arg, end))
                    }
                }
            })
            .collect();

        vec![
            CodeFragment::line(self.head.clone()),
            CodeFragment::indent(links),
        ]
    }
}
