//! Grouping of operations into client namespaces.

use indexmap::IndexMap;
use oas_schema::{
    Document, Error, HttpMethod, Operation, Parameter, ParameterLocation, Response, Result,
    SchemaFragment,
};
use tracing::warn;

use crate::naming::JS_NAMING;

/// Delimiter between namespace and operation name in an `operationId`.
pub const OPERATION_ID_DELIMITER: &str = "::";

/// One parameter after path-level parameters have been merged in.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDefinition {
    pub name: String,
    pub location: ParameterLocation,
    pub fragment: SchemaFragment,
    pub required: bool,
    pub description: Option<String>,
}

impl From<&Parameter> for ParameterDefinition {
    fn from(parameter: &Parameter) -> Self {
        Self {
            name: parameter.name.clone(),
            location: parameter.location,
            fragment: parameter.fragment().clone(),
            required: parameter.required,
            description: parameter.description().map(str::to_string),
        }
    }
}

/// A method and path pair with its `operationId` split.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDefinition {
    pub path: String,
    pub http_method: HttpMethod,
    pub namespace: String,
    pub operation_name: String,
    pub parameters: Vec<ParameterDefinition>,
    pub summary: Option<String>,
    pub description: Option<String>,
    /// Status key (`200`, `default`) to response, in document order.
    pub responses: IndexMap<String, Response>,
}

impl OperationDefinition {
    /// `Namespace::OperationName`, as written in the document.
    pub fn operation_id(&self) -> String {
        format!(
            "{}{}{}",
            self.namespace, OPERATION_ID_DELIMITER, self.operation_name
        )
    }
}

/// Operations of one namespace, keyed by operation name.
pub type NamespaceGroup = IndexMap<String, OperationDefinition>;

/// Split `Namespace::OperationName` into its two parts.
pub fn split_operation_id(
    operation_id: Option<&str>,
    method: HttpMethod,
    path: &str,
) -> Result<(String, String)> {
    let operation_id =
        operation_id.ok_or_else(|| Error::missing_operation_id(method.as_str(), path))?;

    let parts: Vec<&str> = operation_id.split(OPERATION_ID_DELIMITER).collect();
    match parts.as_slice() {
        [namespace, name] if !namespace.is_empty() && !name.is_empty() => {
            Ok((namespace.to_string(), name.to_string()))
        }
        _ => Err(Error::malformed_operation_id(
            operation_id,
            method.as_str(),
            path,
        )),
    }
}

/// Single pass over every path and method, in document order.
///
/// Namespaces keep the order in which they are first seen. A second operation
/// with the same name in a namespace replaces the first one. Two spellings of
/// a namespace that share a client class name are rejected.
pub fn group_operations(document: &Document) -> Result<IndexMap<String, NamespaceGroup>> {
    let mut groups: IndexMap<String, NamespaceGroup> = IndexMap::new();
    // Client class name to the namespace spelling that claimed it.
    let mut clients: IndexMap<String, String> = IndexMap::new();

    for (path, item) in &document.paths {
        for (method, operation) in &item.operations {
            let definition = definition(path, *method, operation, &item.parameters)?;

            let client = JS_NAMING.type_name(&definition.namespace);
            let claimed = clients
                .entry(client)
                .or_insert_with(|| definition.namespace.clone());
            if *claimed != definition.namespace {
                return Err(Error::namespace_collision(
                    JS_NAMING.type_name(claimed),
                    claimed.as_str(),
                    definition.namespace.as_str(),
                ));
            }

            let group = groups.entry(definition.namespace.clone()).or_default();
            if let Some(previous) = group.insert(definition.operation_name.clone(), definition) {
                warn!(
                    operation = %previous.operation_id(),
                    method = %previous.http_method,
                    path = %previous.path,
                    "duplicate operationId, keeping the later operation"
                );
            }
        }
    }

    Ok(groups)
}

fn definition(
    path: &str,
    method: HttpMethod,
    operation: &Operation,
    path_parameters: &[Parameter],
) -> Result<OperationDefinition> {
    let (namespace, operation_name) =
        split_operation_id(operation.operation_id.as_deref(), method, path)?;

    Ok(OperationDefinition {
        path: path.to_string(),
        http_method: method,
        namespace,
        operation_name,
        parameters: merge_parameters(path_parameters, &operation.parameters),
        summary: operation.summary.clone(),
        description: operation.description.clone(),
        responses: operation.responses.clone(),
    })
}

/// Path-level parameters first; an operation parameter with the same name and
/// location takes the path-level one's place.
fn merge_parameters(shared: &[Parameter], own: &[Parameter]) -> Vec<ParameterDefinition> {
    let mut merged: Vec<ParameterDefinition> = shared.iter().map(Into::into).collect();
    for parameter in own {
        let parameter = ParameterDefinition::from(parameter);
        match merged
            .iter_mut()
            .find(|p| p.name == parameter.name && p.location == parameter.location)
        {
            Some(existing) => *existing = parameter,
            None => merged.push(parameter),
        }
    }
    merged
}
