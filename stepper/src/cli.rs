use std::{
    fs,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{config::StepperConfig, handler};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Answer a single request read from a file.
    File(PathBuf),

    /// Answer one request per stdin line.
    Lines,
}

impl Mode {
    /// An absent input argument or `-` means line mode.
    pub fn from_arg(input_arg: Option<String>) -> Self {
        match input_arg {
            Some(input_path) if input_path != "-" => Mode::File(PathBuf::from(input_path)),
            _ => Mode::Lines,
        }
    }
}

/// Answers the request stored at `path`. Returns the process exit status, 1 if the request
/// was rejected and 0 otherwise.
pub fn run_file<P, W>(path: P, mut output: W, config: &StepperConfig) -> anyhow::Result<u8>
where
    P: AsRef<Path>,
    W: Write,
{
    let request = fs::read_to_string(path).context("Couldn't read request")?;
    let outcome = handler::handle_request(&request, config);

    writeln!(output, "{}", outcome.to_json(config.pretty)?).context("Couldn't write response")?;

    Ok(u8::from(outcome.is_rejected()))
}

/// Answers every non-empty input line with exactly one output line, rejected requests included.
pub fn run_lines<R, W>(input: R, mut output: W, config: &StepperConfig) -> anyhow::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut handled = 0;

    for line_res in input.lines() {
        let line = line_res.context("Couldn't read request line")?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let response = handler::handle_request(line, config).to_json(false)?;
        writeln!(output, "{response}").context("Couldn't write response")?;
        output.flush().context("Couldn't flush response")?;

        handled += 1;
    }

    Ok(handled)
}
