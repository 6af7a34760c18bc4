//! Init operation - write `oas-client.json`.

use std::path::Path;

use eyre::{Result, bail};
use oas_schema::OasConfig;

use crate::reports::InitReport;

/// Options for the init operation.
pub struct InitOptions<'a> {
    pub root: &'a Path,
    pub url: &'a str,
    pub models: Option<&'a str>,
    pub clients: Option<&'a str>,
    /// Replace an existing configuration.
    pub force: bool,
}

/// Execute the init operation.
pub fn init(opts: InitOptions) -> Result<InitReport> {
    let url = opts.url.trim();
    if url.is_empty() {
        bail!("the schema URL must not be empty");
    }

    if OasConfig::exists(opts.root) && !opts.force {
        bail!(
            "'{}' already exists (use --force to overwrite)",
            OasConfig::path(opts.root).display()
        );
    }

    let mut config = OasConfig::init(url);
    if let Some(models) = opts.models {
        config = config.with_models_destination(models);
    }
    if let Some(clients) = opts.clients {
        config = config.with_clients_destination(clients);
    }

    let path = config.save(opts.root)?;

    Ok(InitReport { path, config })
}
