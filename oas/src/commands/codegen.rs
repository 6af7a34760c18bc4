use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use oas_codegen_javascript::{GenerationContext, Generator};
use oas_schema::OasConfig;

use super::UnwrapOrExit;
use crate::{
    ops::{self, CodegenOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CodegenCommand {
    /// Project root holding oas-client.json (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl CodegenCommand {
    pub fn run(&self) -> Result<()> {
        let config = OasConfig::open(&self.root).unwrap_or_exit();
        let document = ops::load_document(&config, &self.root).unwrap_or_exit();

        let generator = Generator::new(&document, GenerationContext::from_config(&config));
        let plan = generator.plan().unwrap_or_exit();

        let report = ops::codegen(
            &document,
            &generator,
            &plan,
            CodegenOptions {
                root: &self.root,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
