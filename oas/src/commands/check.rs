use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use oas_schema::OasConfig;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Project root holding oas-client.json (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = OasConfig::open(&self.root).unwrap_or_exit();
        let document = ops::load_document(&config, &self.root).unwrap_or_exit();
        let report = ops::check(&document, &config).unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
