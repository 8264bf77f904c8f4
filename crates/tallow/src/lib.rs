mod ops;

use std::ffi::OsString;

use clap::{Parser, Subcommand};
use ops::{lower, parse};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parses a Tallow file and prints its syntax tree followed by any syntax errors
    Parse(parse::Args),

    /// Parses a Tallow file and prints the lowered statements and expressions
    Lower(lower::Args),
}

#[derive(Copy, Debug, Clone, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<bool> for ExitStatus {
    fn from(value: bool) -> Self {
        if value {
            ExitStatus::Success
        } else {
            ExitStatus::Error
        }
    }
}

pub fn run_with_args<T, I>(args: I) -> Result<ExitStatus, anyhow::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::parse_from(args);
    match args.command {
        Command::Parse(args) => parse::parse(args, &mut std::io::stdout().lock()),
        Command::Lower(args) => lower::lower(args, &mut std::io::stdout().lock()),
    }
}
