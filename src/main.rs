//! main.rs
//! Entry point for lsr

use lsr::app;
use lsr::config::Config;
use lsr::utils::cli::{self, CliAction, handle_args};

use log::debug;

use std::io::{self, Write};
use std::process::ExitCode;

/// Exit status for usage errors.
const USAGE_ERROR: u8 = 2;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("LSR_LOG", "warn"))
        .format_timestamp(None)
        .init();

    let flags = match handle_args(std::env::args().skip(1)) {
        CliAction::List(flags) => flags,
        CliAction::Help => {
            cli::print_help();
            return ExitCode::SUCCESS;
        }
        CliAction::Version => {
            cli::print_version();
            return ExitCode::SUCCESS;
        }
        CliAction::Init => {
            let path = Config::default_path();
            return match Config::generate_default(&path) {
                Ok(()) => {
                    println!("Default config generated at {:?}", path);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("lsr: {}", e);
                    ExitCode::FAILURE
                }
            };
        }
        CliAction::Invalid(msg) => {
            eprintln!("lsr: {}", msg);
            cli::print_usage_hint();
            return ExitCode::from(USAGE_ERROR);
        }
    };

    let config = Config::load();
    let listing = flags.into_configuration(config.general());
    debug!("{:?}", listing);

    let output = match app::run(&listing) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("lsr: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    match stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        // the reader went away, e.g. `lsr | head`
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("lsr: write error: {}", e);
            ExitCode::FAILURE
        }
    }
}
