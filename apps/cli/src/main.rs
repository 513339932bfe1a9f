//! docsmith CLI — documentation-site configuration resolver.
//!
//! Reads the project's site settings, VERSION file, and hostname override,
//! then emits the resolved configuration for the documentation generator.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
