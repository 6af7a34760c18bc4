//! Init command report.

use std::path::PathBuf;

use oas_schema::OasConfig;

use super::output::{Output, Report};

/// Report data from writing the configuration.
#[derive(Debug)]
pub struct InitReport {
    /// Path of the written `oas-client.json`.
    pub path: PathBuf,
    pub config: OasConfig,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!(
            "new configuration saved to {}",
            self.path.display()
        ));
        out.newline();
        out.key_value_indented("swaggerUrl", &self.config.swagger_url);
        out.key_value_indented("modelsDestination", &self.config.models_destination);
        out.key_value_indented("clientsDestination", &self.config.clients_destination);
        out.newline();
        out.section("Next steps");
        out.preformatted("  oas-client codegen");
    }
}
