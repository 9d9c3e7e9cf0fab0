use anyhow::Result;
use budget_manager::cli::Cli;
use budget_manager::logging;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    cli.run()
}
