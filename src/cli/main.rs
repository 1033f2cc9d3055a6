use std::io;

mod cli;
mod colorspace;
mod commands;
mod config;
mod error;
mod output;

use commands::Command;
use config::Config;
use error::{Result, TinctureError};
use output::Output;

type ExitCode = i32;

fn run() -> Result<ExitCode> {
    let app = cli::build_cli();
    let global_matches = app.get_matches();

    if let Some((subcommand, matches)) = global_matches.subcommand() {
        let config = Config::from_matches(matches);
        let command = Command::from_string(subcommand)?;

        let stdout = io::stdout();
        let mut stdout_lock = stdout.lock();
        let mut out = Output::new(&mut stdout_lock);

        command.execute(&mut out, matches, &config)?;
    }

    Ok(0)
}

fn main() {
    env_logger::init();

    let result = run();
    match result {
        Err(TinctureError::StdoutClosed) => {}
        Err(err) => {
            eprintln!("[tincture error]: {err}");
            std::process::exit(1);
        }
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
    }
}
