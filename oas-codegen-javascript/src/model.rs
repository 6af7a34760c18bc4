//! Model definitions built from named object schemas.

use indexmap::IndexSet;
use oas_runtime::HydrationTable;
use oas_schema::{Error, ObjectSchema, Result, SchemaFragment};

use crate::{
    enums::EnumDefinition,
    order_by::{OrderByConstant, order_by_constants},
    resolver::{ResolvedType, referenced_model, resolve},
};

/// One property, resolved once at build time.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelProperty {
    pub name: String,
    pub fragment: SchemaFragment,
    pub resolved: ResolvedType,
}

impl ModelProperty {
    pub fn description(&self) -> Option<&str> {
        self.fragment.description.as_deref()
    }

    /// Format label plus description, as written after a JSDoc tag.
    pub fn doc_suffix(&self) -> Option<String> {
        let format = self.resolved.format.as_deref().map(|f| format!("({})", f));
        match (format, self.description()) {
            (Some(format), Some(description)) => Some(format!("{} {}", format, description)),
            (Some(format), None) => Some(format),
            (None, description) => description.map(str::to_string),
        }
    }
}

/// Everything the model, base, enum and proxy files need for one model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDefinition {
    pub name: String,
    pub description: Option<String>,
    pub properties: Vec<ModelProperty>,
    pub required: Vec<String>,
    pub enums: Vec<EnumDefinition>,
    pub order_by: Vec<OrderByConstant>,
    /// Other models referenced by properties, first appearance first.
    pub extra_imports: IndexSet<String>,
}

impl ModelDefinition {
    /// Resolve every property of `schema`.
    ///
    /// Fails on the first property that cannot be resolved, before anything is
    /// rendered.
    pub fn build(name: &str, schema: &ObjectSchema) -> Result<Self> {
        if !schema.is_object() {
            return Err(Error::non_object_model(
                name,
                schema.ty.clone().unwrap_or_default(),
            ));
        }

        let mut definition = Self {
            name: name.to_string(),
            description: schema.description.clone(),
            properties: Vec::with_capacity(schema.properties.len()),
            required: schema.required.clone(),
            enums: Vec::new(),
            order_by: Vec::new(),
            extra_imports: IndexSet::new(),
        };

        for (property_name, fragment) in &schema.properties {
            let owner = format!("{}.{}", name, property_name);
            let resolved = resolve(&owner, fragment)?;

            if let Some(values) = enum_source(fragment) {
                definition
                    .enums
                    .push(EnumDefinition::new(name, property_name, values));
            }

            if let Some(model) = referenced_model(fragment).filter(|model| *model != name) {
                definition.extra_imports.insert(model.to_string());
            }

            definition.order_by.extend(order_by_constants(
                property_name,
                fragment.description.as_deref(),
            ));

            definition.properties.push(ModelProperty {
                name: property_name.clone(),
                fragment: fragment.clone(),
                resolved,
            });
        }

        Ok(definition)
    }

    pub fn base_name(&self) -> String {
        format!("{}Base", self.name)
    }

    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|r| r == property)
    }

    /// `(property, tag)` pairs in declaration order; untagged kinds are left out.
    pub fn hydration_table(&self) -> HydrationTable {
        self.properties
            .iter()
            .filter_map(|property| {
                let tag = property.resolved.hydration.clone()?;
                Some((property.name.clone(), tag))
            })
            .collect()
    }
}

/// The `enum` list of a property or of its array items.
fn enum_source(fragment: &SchemaFragment) -> Option<&[String]> {
    let direct = fragment.enum_values.as_deref().filter(|v| !v.is_empty());
    direct.or_else(|| {
        fragment
            .items
            .as_deref()
            .and_then(|items| items.enum_values.as_deref())
            .filter(|v| !v.is_empty())
    })
}
