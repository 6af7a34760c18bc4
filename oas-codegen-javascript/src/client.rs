//! Client methods built from grouped operations.

use indexmap::IndexSet;
use oas_schema::{Error, ParameterLocation, Result, SchemaFragment};
use tracing::warn;

use crate::{
    ast::{Chain, JsDoc, Method, Stmt, Switch, quote},
    naming::JS_NAMING,
    operations::{OperationDefinition, ParameterDefinition},
    resolver::{FragmentKind, ResolvedType, kind, reference_name, resolve},
};

/// Method-scope locals of a generated client method.
const METHOD_LOCALS: &[&str] = &[
    "queryParameters",
    "queryString",
    "url",
    "payload",
    "responseHandler",
];

/// Parameter identifier: a camelCase JavaScript identifier, with reserved
/// words and method locals prefixed by `_`.
pub fn parameter_identifier(name: &str) -> String {
    let identifier = JS_NAMING.parameter_name(name);
    if METHOD_LOCALS.contains(&identifier.as_str()) {
        format!("_{}", identifier)
    } else {
        identifier
    }
}

/// A parameter the method marshals.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientParameter {
    pub identifier: String,
    pub definition: ParameterDefinition,
    pub resolved: ResolvedType,
}

impl ClientParameter {
    fn location(&self) -> ParameterLocation {
        self.definition.location
    }

    fn doc_suffix(&self) -> Option<String> {
        let format = self.resolved.format.as_deref().map(|f| format!("({})", f));
        let description = self.definition.description.as_deref();
        match (format, description) {
            (Some(format), Some(description)) => Some(format!("{} {}", format, description)),
            (Some(format), None) => Some(format),
            (None, description) => description.map(str::to_string),
        }
    }
}

/// How the request body is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    None,
    /// `FormData` built from every `formData` parameter.
    Form,
    /// The named parameter, sent as JSON.
    Json(String),
}

/// How a response body is read and handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Text,
    Json,
    Model(String),
    ModelArray(String),
}

/// One `case` of the status switch.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseBranch {
    pub status: u16,
    pub description: Option<String>,
    pub body: ResponseBody,
    /// JSDoc type of the value passed to the callback.
    pub ty: String,
}

impl ResponseBranch {
    pub fn callback(&self) -> String {
        format!("status{}", self.status)
    }
}

/// Everything needed to write one method of a `<Namespace>ClientBase` class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientMethod {
    pub operation: OperationDefinition,
    pub name: String,
    pub parameters: Vec<ClientParameter>,
    pub payload: Payload,
    pub responses: Vec<ResponseBranch>,
}

impl ClientMethod {
    pub fn build(operation: &OperationDefinition) -> Result<Self> {
        let operation_id = operation.operation_id();

        let mut parameters: Vec<ClientParameter> = Vec::with_capacity(operation.parameters.len());
        for definition in &operation.parameters {
            match definition.location {
                ParameterLocation::Query
                | ParameterLocation::Path
                | ParameterLocation::FormData
                | ParameterLocation::Body => {}
                location => {
                    warn!(
                        operation = %operation_id,
                        parameter = %definition.name,
                        %location,
                        "skipping parameter in unsupported location"
                    );
                    continue;
                }
            }

            let identifier = parameter_identifier(&definition.name);
            if let Some(existing) = parameters
                .iter()
                .find(|p| p.identifier == identifier)
            {
                return Err(Error::duplicate_parameter(
                    &operation_id,
                    identifier,
                    existing.definition.name.as_str(),
                    definition.name.as_str(),
                ));
            }

            let owner = format!("{}.{}", operation_id, definition.name);
            parameters.push(ClientParameter {
                identifier,
                definition: definition.clone(),
                resolved: resolve(&owner, &definition.fragment)?,
            });
        }

        let payload = payload(&operation_id, &parameters)?;

        let mut responses = Vec::with_capacity(operation.responses.len());
        for (status, response) in &operation.responses {
            let Ok(code) = status.parse::<u16>() else {
                warn!(
                    operation = %operation_id,
                    status = %status,
                    "skipping response without a numeric status"
                );
                continue;
            };
            let owner = format!("{} response {}", operation_id, status);
            let (body, ty) = response_body(&owner, response.schema.as_ref())?;
            responses.push(ResponseBranch {
                status: code,
                description: response.description.clone(),
                body,
                ty,
            });
        }

        Ok(Self {
            operation: operation.clone(),
            name: JS_NAMING.method_name(&operation.operation_name),
            parameters,
            payload,
            responses,
        })
    }

    /// `<Namespace><Operation>ResponseHandler`
    pub fn handler_type(&self) -> String {
        format!(
            "{}{}ResponseHandler",
            JS_NAMING.type_name(&self.operation.namespace),
            JS_NAMING.type_name(&self.operation.operation_name)
        )
    }

    /// Models whose `create`/`createArray` the method calls, first use first.
    pub fn models(&self) -> IndexSet<&str> {
        self.responses
            .iter()
            .filter_map(|branch| match &branch.body {
                ResponseBody::Model(model) | ResponseBody::ModelArray(model) => {
                    Some(model.as_str())
                }
                ResponseBody::Text | ResponseBody::Json => None,
            })
            .collect()
    }

    /// `@typedef` of the handler object the caller passes in.
    pub fn handler_typedef(&self) -> JsDoc {
        let title = format!(
            "Callbacks for {} {}",
            self.operation.http_method, self.operation.path
        );
        let doc = JsDoc::new()
            .text(Some(title.as_str()))
            .blank()
            .line(format!("@typedef {{object}} {}", self.handler_type()));

        self.responses
            .iter()
            .fold(doc, |doc, branch| {
                doc.property(
                    &format!("function({})", branch.ty),
                    &format!("[{}]", branch.callback()),
                    branch.description.as_deref(),
                )
            })
            .property(
                "function(Response)",
                "unhandledResponse",
                Some("Any status without a callback"),
            )
            .property("function(Error)", "error", Some("Transport or parsing failure"))
    }

    pub fn method(&self) -> Method {
        let mut doc = JsDoc::new().text(self.operation.summary.as_deref());
        if self.operation.description != self.operation.summary {
            doc = doc.blank().text(self.operation.description.as_deref());
        }
        doc = doc.blank();
        for parameter in &self.parameters {
            doc = doc.param(
                &parameter.resolved.display,
                &parameter.identifier,
                !parameter.definition.required,
                parameter.doc_suffix().as_deref(),
            );
        }
        doc = doc.param(&self.handler_type(), "responseHandler", false, None);

        let method = self
            .parameters
            .iter()
            .fold(Method::new(&self.name), |method, parameter| {
                method.param(&parameter.identifier)
            })
            .param("responseHandler")
            .doc(doc);

        method.body(self.body())
    }

    fn body(&self) -> Vec<Stmt> {
        let mut body = Vec::new();

        let query: Vec<_> = self.located(ParameterLocation::Query).collect();
        if !query.is_empty() {
            body.push(Stmt::const_("queryParameters", "[]"));
            for parameter in &query {
                let id = &parameter.identifier;
                body.push(Stmt::if_(
                    format!(
                        "({id} !== undefined) && ({id} !== null) && ({id} !== '')"
                    ),
                    vec![Stmt::expr(format!(
                        "queryParameters.push({} + encodeURIComponent({}))",
                        quote(&format!("{}=", parameter.definition.name)),
                        id
                    ))],
                ));
            }
            body.push(Stmt::const_(
                "queryString",
                "queryParameters.length ? '?' + queryParameters.join('&') : ''",
            ));
            body.push(Stmt::Blank);
        }

        let mut url = url_expression(&self.operation.path, &self.parameters);
        if !query.is_empty() {
            url.push_str(" + queryString");
        }
        body.push(Stmt::const_("url", url));

        let (payload, payload_type) = match &self.payload {
            Payload::None => ("null".to_string(), "null"),
            Payload::Json(identifier) => (identifier.clone(), "'json'"),
            Payload::Form => {
                body.push(Stmt::Blank);
                body.push(Stmt::const_("payload", "new FormData()"));
                for parameter in self.located(ParameterLocation::FormData) {
                    let id = &parameter.identifier;
                    body.push(Stmt::if_(
                        format!("({id} !== undefined) && ({id} !== null)"),
                        vec![Stmt::expr(format!(
                            "payload.append({}, {})",
                            quote(&parameter.definition.name),
                            id
                        ))],
                    ));
                }
                ("payload".to_string(), "'form'")
            }
        };

        let request = format!(
            "this.executeRequest({}, url, {}, {})",
            quote(self.operation.http_method.as_str()),
            payload,
            payload_type
        );

        body.push(Stmt::Blank);
        body.push(Stmt::Chain(
            Chain::new(request)
                .callback("then", "response", self.dispatch())
                .call("catch", "error => responseHandler.error(error)"),
        ));
        body
    }

    /// Body of the `.then(response => ...)` callback.
    fn dispatch(&self) -> Vec<Stmt> {
        let unhandled = Stmt::expr("responseHandler.unhandledResponse(response)");
        if self.responses.is_empty() {
            return vec![unhandled];
        }

        let switch = self
            .responses
            .iter()
            .fold(Switch::new("response.status"), |switch, branch| {
                switch.case(branch.status.to_string(), case_body(branch))
            });

        vec![Stmt::Switch(switch), Stmt::Blank, unhandled]
    }

    fn located(&self, location: ParameterLocation) -> impl Iterator<Item = &ClientParameter> {
        self.parameters
            .iter()
            .filter(move |parameter| parameter.location() == location)
    }
}

fn case_body(branch: &ResponseBranch) -> Vec<Stmt> {
    let callback = format!("responseHandler.{}", branch.callback());
    let (read, value, argument) = match &branch.body {
        ResponseBody::Text => ("response.text()", "responseText", "responseText".to_string()),
        ResponseBody::Json => ("response.json()", "responseJson", "responseJson".to_string()),
        ResponseBody::Model(model) => (
            "response.json()",
            "responseJson",
            format!("{}.create(responseJson)", model),
        ),
        ResponseBody::ModelArray(model) => (
            "response.json()",
            "responseJson",
            format!("{}.createArray(responseJson)", model),
        ),
    };

    let parse = Chain::new(read)
        .callback(
            "then",
            value,
            vec![Stmt::expr(format!("{}({})", callback, argument))],
        )
        .call("catch", "error => responseHandler.error(error)");

    vec![
        Stmt::if_(callback, vec![Stmt::Chain(parse), Stmt::Return(None)]),
        Stmt::Break,
    ]
}

fn payload(operation_id: &str, parameters: &[ClientParameter]) -> Result<Payload> {
    let mut bodies = parameters
        .iter()
        .filter(|p| p.location() == ParameterLocation::Body);
    let has_form = parameters
        .iter()
        .any(|p| p.location() == ParameterLocation::FormData);

    match (bodies.next(), bodies.next(), has_form) {
        (None, _, false) => Ok(Payload::None),
        (None, _, true) => Ok(Payload::Form),
        (Some(_), Some(_), _) => Err(Error::conflicting_payload(
            operation_id,
            "more than one body parameter",
        )),
        (Some(_), None, true) => Err(Error::conflicting_payload(
            operation_id,
            "formData and body parameters cannot be combined",
        )),
        (Some(body), None, false) => Ok(Payload::Json(body.identifier.clone())),
    }
}

fn response_body(owner: &str, schema: Option<&SchemaFragment>) -> Result<(ResponseBody, String)> {
    let Some(schema) = schema else {
        return Ok((ResponseBody::Text, "string".to_string()));
    };
    let resolved = resolve(owner, schema)?;

    let body = match kind(owner, schema)? {
        FragmentKind::Reference(model) => ResponseBody::Model(model.to_string()),
        FragmentKind::Array(items) => match &items.reference {
            Some(reference) => ResponseBody::ModelArray(reference_name(reference).to_string()),
            None => ResponseBody::Json,
        },
        FragmentKind::String => ResponseBody::Text,
        _ => ResponseBody::Json,
    };
    let ty = match body {
        ResponseBody::Text => "string".to_string(),
        _ => resolved.display,
    };
    Ok((body, ty))
}

/// URL template with `{name}` placeholders replaced by encoded path parameters.
///
/// Placeholders without a matching path parameter stay in the literal.
fn url_expression(template: &str, parameters: &[ClientParameter]) -> String {
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let placeholder = &rest[start + 1..start + len];
        literal.push_str(&rest[..start]);

        let parameter = parameters.iter().find(|p| {
            p.location() == ParameterLocation::Path && p.definition.name == placeholder
        });
        match parameter {
            Some(parameter) => {
                if !literal.is_empty() {
                    parts.push(quote(&literal));
                    literal.clear();
                }
                parts.push(format!(
                    "encodeURIComponent({} ?? '')",
                    parameter.identifier
                ));
            }
            None => literal.push_str(&rest[start..=start + len]),
        }
        rest = &rest[start + len + 1..];
    }

    literal.push_str(rest);
    if !literal.is_empty() || parts.is_empty() {
        parts.push(quote(&literal));
    }
    parts.join(" + ")
}
