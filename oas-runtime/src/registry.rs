//! Dispatch from type names to model construction.

use indexmap::IndexMap;

use crate::{HydrationError, HydrationTable, ModelInstance, Result, Value, hydrate};

/// Builds a model from a raw JSON value, using the registry for nested models.
pub type Factory =
    Box<dyn Fn(&serde_json::Value, &FactoryRegistry) -> Result<ModelInstance> + Send + Sync>;

/// Mapping from model name to its construction function.
///
/// This is the runtime counterpart of the generated `ModelProxyClass`: the
/// hydration layer only ever asks it for a name.
#[derive(Default)]
pub struct FactoryRegistry {
    factories: IndexMap<String, Factory>,
}

impl FactoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a construction function. A later registration replaces an
    /// earlier one with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&serde_json::Value, &FactoryRegistry) -> Result<ModelInstance> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
        self
    }

    /// Register a table-driven model class under its own name.
    pub fn register_class(&mut self, class: ModelClass) -> &mut Self {
        let name = class.name().to_string();
        self.register(name, move |generic, registry| class.create(generic, registry))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Build the model registered as `class_name` from `generic`.
    pub fn create_by_class_name(
        &self,
        class_name: &str,
        generic: &serde_json::Value,
    ) -> Result<Value> {
        let factory = self
            .factories
            .get(class_name)
            .ok_or_else(|| HydrationError::UndefinedModelClass(class_name.to_string()))?;
        factory(generic, self).map(Value::Model)
    }
}

impl std::fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("names", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// A model described by its name and hydration table.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelClass {
    name: String,
    table: HydrationTable,
}

impl ModelClass {
    pub fn new(name: impl Into<String>, table: HydrationTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &HydrationTable {
        &self.table
    }

    /// Build one instance from a generic object.
    pub fn create(
        &self,
        generic: &serde_json::Value,
        registry: &FactoryRegistry,
    ) -> Result<ModelInstance> {
        let object = generic.as_object().ok_or_else(|| HydrationError::NotAnObject {
            class_name: self.name.clone(),
        })?;
        let mut instance = ModelInstance::new(&self.name);
        hydrate(&mut instance, &self.table, object, registry)?;
        Ok(instance)
    }

    /// Build one instance per element; `None` (JSON `null`) stays `None`.
    pub fn create_array(
        &self,
        generic: Option<&serde_json::Value>,
        registry: &FactoryRegistry,
    ) -> Result<Option<Vec<ModelInstance>>> {
        let Some(generic) = generic.filter(|value| !value.is_null()) else {
            return Ok(None);
        };
        let elements = generic.as_array().ok_or_else(|| HydrationError::NotASequence {
            class_name: self.name.clone(),
        })?;
        elements
            .iter()
            .map(|element| self.create(element, registry))
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::HydrationTag;

    fn invoice_class() -> ModelClass {
        ModelClass::new(
            "Invoice",
            HydrationTable::new()
                .with("id", HydrationTag::Integer)
                .with("dueDate", HydrationTag::Date)
                .with("total", HydrationTag::Float)
                .with("customer", HydrationTag::model("Customer")),
        )
    }

    fn registry() -> FactoryRegistry {
        let mut registry = FactoryRegistry::new();
        registry
            .register_class(invoice_class())
            .register_class(ModelClass::new(
                "Customer",
                HydrationTable::new().with("name", HydrationTag::String),
            ));
        registry
    }

    #[test]
    fn test_create_array_null_is_none() {
        let registry = registry();
        assert_eq!(invoice_class().create_array(None, &registry).unwrap(), None);
        assert_eq!(
            invoice_class()
                .create_array(Some(&json!(null)), &registry)
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_create_array_empty() {
        let created = invoice_class()
            .create_array(Some(&json!([])), &registry())
            .unwrap();
        assert_eq!(created, Some(Vec::new()));
    }

    #[test]
    fn test_create_array_maps_every_element() {
        let generic = json!([
            { "id": "1", "dueDate": "2024-03-01", "total": "10.5", "customer": { "name": "Ada" } },
            { "id": 2, "total": 3 }
        ]);

        let created = invoice_class()
            .create_array(Some(&generic), &registry())
            .unwrap()
            .unwrap();

        assert_eq!(created.len(), 2);
        assert_eq!(created[0].get("id"), Some(&Value::Integer(1)));
        assert_eq!(
            created[0].get("dueDate").and_then(Value::as_date),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(created[0].get("total"), Some(&Value::Float(10.5)));
        let customer = created[0].get("customer").and_then(Value::as_model).unwrap();
        assert_eq!(customer.get("name").and_then(Value::as_str), Some("Ada"));

        assert_eq!(created[1].get("id"), Some(&Value::Integer(2)));
        assert_eq!(created[1].get("dueDate"), None);
        assert_eq!(created[1].get("total"), Some(&Value::Float(3.0)));
    }

    #[test]
    fn test_create_array_rejects_non_sequence() {
        let err = invoice_class()
            .create_array(Some(&json!({ "id": 1 })), &registry())
            .unwrap_err();
        assert_eq!(
            err,
            HydrationError::NotASequence {
                class_name: "Invoice".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_model_name() {
        let err = registry()
            .create_by_class_name("Refund", &json!({}))
            .unwrap_err();
        assert_eq!(err, HydrationError::UndefinedModelClass("Refund".to_string()));
        assert_eq!(err.to_string(), "Undefined model class: Refund");
    }

    #[test]
    fn test_create_requires_object() {
        let err = invoice_class().create(&json!("1"), &registry()).unwrap_err();
        assert!(matches!(err, HydrationError::NotAnObject { .. }));
    }

    #[test]
    fn test_registration_order() {
        let registry = registry();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["Invoice", "Customer"]);
        assert!(registry.contains("Customer"));
    }
}
