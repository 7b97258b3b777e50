mod cli;
mod platform;

use anyhow::Result;
use clap::Parser;
use geo_logging::geo_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    platform::initialize_logging(cli.log, cli.log_level);

    platform::run_app(cli).inspect_err(|err| geo_error!("{:#}", err))
}
