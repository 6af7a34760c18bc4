//! Output layout shared by every builder.

use std::path::{Path, PathBuf};

use oas_core::relative_import;
use oas_schema::OasConfig;

/// Where generated files go, relative to the project root.
///
/// Built once per run from the configuration and passed to every builder;
/// the root itself is supplied when files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationContext {
    models_dir: PathBuf,
    clients_dir: PathBuf,
}

impl GenerationContext {
    pub fn new(models_dir: impl Into<PathBuf>, clients_dir: impl Into<PathBuf>) -> Self {
        Self {
            models_dir: models_dir.into(),
            clients_dir: clients_dir.into(),
        }
    }

    pub fn from_config(config: &OasConfig) -> Self {
        Self::new(config.models_dir(), config.clients_dir())
    }

    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    pub fn clients_dir(&self) -> &Path {
        &self.clients_dir
    }

    /// `<models>/<Name>.js`
    pub fn model_file(&self, name: &str) -> PathBuf {
        self.models_dir.join(format!("{}.js", name))
    }

    /// `<models>/base/<Name>Base.js`
    pub fn model_base_file(&self, name: &str) -> PathBuf {
        self.models_base_dir().join(format!("{}Base.js", name))
    }

    /// `<models>/enum/<EnumName>.js`
    pub fn enum_file(&self, enum_name: &str) -> PathBuf {
        self.models_dir.join("enum").join(format!("{}.js", enum_name))
    }

    /// `<models>/ModelProxyClass.js`
    pub fn model_proxy_file(&self) -> PathBuf {
        self.models_dir.join("ModelProxyClass.js")
    }

    /// Runtime files shared by model bases live next to them.
    pub fn models_base_dir(&self) -> PathBuf {
        self.models_dir.join("base")
    }

    /// `<clients>/<Namespace>Client.js`
    pub fn client_file(&self, namespace: &str) -> PathBuf {
        self.clients_dir.join(format!("{}Client.js", namespace))
    }

    /// `<clients>/base/<Namespace>ClientBase.js`
    pub fn client_base_file(&self, namespace: &str) -> PathBuf {
        self.clients_base_dir()
            .join(format!("{}ClientBase.js", namespace))
    }

    /// Runtime files shared by client bases live next to them.
    pub fn clients_base_dir(&self) -> PathBuf {
        self.clients_dir.join("base")
    }

    /// `<clients>/ApiClient.js`
    pub fn api_client_file(&self) -> PathBuf {
        self.clients_dir.join("ApiClient.js")
    }

    /// Import specifier for `to` as written inside `from`.
    pub fn import_path(&self, from: &Path, to: &Path) -> String {
        relative_import(from, to)
    }
}

impl Default for GenerationContext {
    fn default() -> Self {
        Self::new("src/models", "src/clients")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let ctx = GenerationContext::default();
        assert_eq!(ctx.model_file("Invoice"), Path::new("src/models/Invoice.js"));
        assert_eq!(
            ctx.model_base_file("Invoice"),
            Path::new("src/models/base/InvoiceBase.js")
        );
        assert_eq!(
            ctx.enum_file("InvoiceStatusEnum"),
            Path::new("src/models/enum/InvoiceStatusEnum.js")
        );
        assert_eq!(
            ctx.client_base_file("Billing"),
            Path::new("src/clients/base/BillingClientBase.js")
        );
        assert_eq!(ctx.api_client_file(), Path::new("src/clients/ApiClient.js"));
    }

    #[test]
    fn test_import_path_between_trees() {
        let ctx = GenerationContext::default();
        let from = ctx.client_base_file("Billing");
        assert_eq!(
            ctx.import_path(&from, &ctx.model_file("Invoice")),
            "../../models/Invoice.js"
        );
    }

    #[test]
    fn test_from_config() {
        let config = OasConfig::init("swagger.json").with_models_destination("lib/models");
        let ctx = GenerationContext::from_config(&config);
        assert_eq!(ctx.models_dir(), Path::new("lib/models"));
        assert_eq!(ctx.clients_dir(), Path::new("src/clients"));
    }
}
