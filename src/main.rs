use anyhow::Result;
use clap::Parser;
use downsort::cli::{Args, OrganizeCommand, run_cli_with_config};
use downsort::logging::init_tracing;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.config()?;
    run_cli_with_config(OrganizeCommand::from(&args), config)?;
    Ok(())
}
