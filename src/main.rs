use clap::Parser;
use std::process::ExitCode;

use automation_roi::app::{self, Cli};
use automation_roi::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match app::run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
