//! Schema acquisition: a local file or an `http(s)` URL.

use std::path::Path;

use oas_schema::{Document, Error, OasConfig, Result};
use tracing::{debug, info};

/// Read and parse the document `config` points at.
///
/// Local locators are resolved against `root`.
pub fn load_document(config: &OasConfig, root: &Path) -> Result<Document> {
    if config.is_remote() {
        fetch(&config.swagger_url)
    } else {
        let path = root.join(&config.swagger_url);
        debug!(path = %path.display(), "reading schema document");
        Document::from_file(&path)
    }
}

fn fetch(url: &str) -> Result<Document> {
    info!(%url, "fetching schema document");

    let response = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .map_err(|e| Error::fetch(url, e.to_string()))?;
    let content = response
        .text()
        .map_err(|e| Error::fetch(url, e.to_string()))?;

    Document::from_source(&content, source_name(url))
}

/// Name used to pick the format and label parse errors: the URL path
/// without its query string.
fn source_name(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or(url)
}
