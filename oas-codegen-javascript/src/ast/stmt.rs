//! Statements used inside generated method bodies.

use oas_codegen::{CodeFragment, Renderable};

/// A JavaScript statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression statement; the `;` is added on render.
    Expr(String),
    /// `const name = value;`
    Const { name: String, value: String },
    /// `return value;` or a bare `return;`
    Return(Option<String>),
    /// `throw value;`
    Throw(String),
    Break,
    Blank,
    If { condition: String, body: Vec<Stmt> },
    Switch(Switch),
    Chain(super::Chain),
}

impl Stmt {
    pub fn expr(expr: impl Into<String>) -> Self {
        Self::Expr(expr.into())
    }

    pub fn const_(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Const {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn return_(value: impl Into<String>) -> Self {
        Self::Return(Some(value.into()))
    }

    pub fn throw(value: impl Into<String>) -> Self {
        Self::Throw(value.into())
    }

    pub fn if_(condition: impl Into<String>, body: Vec<Stmt>) -> Self {
        Self::If {
            condition: condition.into(),
            body,
        }
    }
}

impl Renderable for Stmt {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let fragment = match self {
            Self::Expr(expr) => CodeFragment::line(format!("{};", expr)),
            Self::Const { name, value } => {
                CodeFragment::line(format!("const {} = {};", name, value))
            }
            Self::Return(Some(value)) => CodeFragment::line(format!("return {};", value)),
            Self::Return(None) => CodeFragment::line("return;"),
            Self::Throw(value) => CodeFragment::line(format!("throw {};", value)),
            Self::Break => CodeFragment::line("break;"),
            Self::Blank => CodeFragment::blank(),
            Self::If { condition, body } => CodeFragment::block(
                format!("if ({}) {{", condition),
                body.to_fragments(),
                Some("}".to_string()),
            ),
            Self::Switch(switch) => return switch.to_fragments(),
            Self::Chain(chain) => return chain.to_fragments(),
        };
        vec![fragment]
    }
}

/// One `case label:` of a switch.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub label: String,
    pub body: Vec<Stmt>,
}

/// `switch (subject) { ... }`, cases separated by a blank line.
#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    subject: String,
    cases: Vec<Case>,
    default: Option<Vec<Stmt>>,
}

impl Switch {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            cases: Vec::new(),
            default: None,
        }
    }

    pub fn case(mut self, label: impl Into<String>, body: Vec<Stmt>) -> Self {
        self.cases.push(Case {
            label: label.into(),
            body,
        });
        self
    }

    pub fn default(mut self, body: Vec<Stmt>) -> Self {
        self.default = Some(body);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty() && self.default.is_none()
    }
}

impl Renderable for Switch {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut arms: Vec<(String, &[Stmt])> = self
            .cases
            .iter()
            .map(|case| (format!("case {}:", case.label), case.body.as_slice()))
            .collect();
        if let Some(default) = &self.default {
            arms.push(("default:".to_string(), default.as_slice()));
        }

        let mut body = Vec::new();
        for (i, (label, stmts)) in arms.into_iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::blank());
            }
            body.push(CodeFragment::line(label));
            body.push(CodeFragment::indent(
                stmts.iter().flat_map(Renderable::to_fragments).collect(),
            ));
        }

        vec![CodeFragment::block(
            format!("switch ({}) {{", self.subject),
            body,
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use oas_codegen::CodeBuilder;

    use super::*;

    fn build(stmts: &Vec<Stmt>) -> String {
        let mut builder = CodeBuilder::javascript();
        builder.emit(stmts);
        builder.build()
    }

    #[test]
    fn test_simple_statements() {
        let code = build(&vec![
            Stmt::const_("url", "'/invoices'"),
            Stmt::expr("queryParameters.push('a=1')"),
            Stmt::Blank,
            Stmt::Return(None),
        ]);
        assert_eq!(
            code,
            "const url = '/invoices';\nqueryParameters.push('a=1');\n\nreturn;\n"
        );
    }

    #[test]
    fn test_if_block() {
        let code = build(&vec![Stmt::if_(
            "genericArray === null",
            vec![Stmt::return_("null")],
        )]);
        assert_eq!(code, "if (genericArray === null) {\n\treturn null;\n}\n");
    }

    #[test]
    fn test_switch() {
        let switch = Switch::new("className")
            .case("'Invoice'", vec![Stmt::return_("Invoice.create(genericObject)")])
            .default(vec![Stmt::throw("new Error('Undefined model class: ' + className)")]);

        let code = build(&vec![Stmt::Switch(switch)]);
        assert_eq!(
            code,
            "switch (className) {\n\
             \tcase 'Invoice':\n\
             \t\treturn Invoice.create(genericObject);\n\
             \n\
             \tdefault:\n\
             \t\tthrow new Error('Undefined model class: ' + className);\n\
             }\n"
        );
    }
}
