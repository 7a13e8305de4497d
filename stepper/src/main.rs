use std::{env, io, process::ExitCode};

use cli::Mode;
use config::StepperConfig;

mod cli;
mod config;
mod handler;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(exit_code) => exit_code,
        Err(e) => {
            log::error!("{e:?}");
            ExitCode::FAILURE
        }
    }
}

/// `stepper [INPUT|-] [CONFIG]`
///
/// With an input path a single request is read from that file and answered on stdout.
/// Without one, or with `-`, every stdin line is answered until stdin closes.
fn run() -> anyhow::Result<ExitCode> {
    let mut args = env::args().skip(1);

    let mode = Mode::from_arg(args.next());

    let config = match args.next() {
        Some(config_path) => StepperConfig::load(config_path)?,
        None => StepperConfig::default(),
    };

    match mode {
        Mode::File(input_path) => {
            log::info!("answering request from {}", input_path.display());

            let status = cli::run_file(&input_path, io::stdout().lock(), &config)?;
            Ok(ExitCode::from(status))
        }

        Mode::Lines => {
            log::info!("answering requests from stdin, one per line");

            let handled = cli::run_lines(io::stdin().lock(), io::stdout().lock(), &config)?;
            log::info!("stdin closed after {handled} requests");

            Ok(ExitCode::SUCCESS)
        }
    }
}
