use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops::{self, InitOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Local path (relative to the project root) or http(s) URL of the document
    pub url: String,

    /// Destination of generated models
    #[arg(long)]
    pub models: Option<String>,

    /// Destination of generated clients
    #[arg(long)]
    pub clients: Option<String>,

    /// Project root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Overwrite an existing oas-client.json
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::init(InitOptions {
            root: &self.root,
            url: &self.url,
            models: self.models.as_deref(),
            clients: self.clients.as_deref(),
            force: self.force,
        })?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
