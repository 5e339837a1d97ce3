#![forbid(unsafe_code)]

//! `glaze` binary entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use glaze_studio::{cli, logging, run};

fn main() -> ExitCode {
    logging::init();
    let opts = cli::Opts::parse();

    let mut stdout = io::stdout().lock();
    let result = run::run(&opts, &mut stdout);
    let _ = stdout.flush();
    match result {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("glaze: {err}");
            ExitCode::FAILURE
        }
    }
}
