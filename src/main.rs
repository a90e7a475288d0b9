use clap::Parser;
use std::process::ExitCode;

use docjump::cli::Cli;
use docjump::logging::init_subscriber;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(target) = cli.log_target()
        && let Err(e) = init_subscriber(target, cli.verbose)
    {
        eprintln!("Warning: {e}");
    }

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
