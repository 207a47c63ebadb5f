//! `a005243` binary.
//!
//! ```bash
//! a005243 write --n 30000
//! a005243 analyze --n 30000 --plot a005243.png
//! a005243 check --n 5000
//! ```

use std::process::ExitCode;

use clap::Parser;
use seq_cli::{commands, logging, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.quiet);

    match commands::run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
