use std::process::ExitCode;

use tallow::{run_with_args, ExitStatus};

fn main() -> Result<ExitCode, anyhow::Error> {
    pretty_env_logger::init();

    let exit_code = match run_with_args(std::env::args_os())? {
        ExitStatus::Success => ExitCode::SUCCESS,
        ExitStatus::Error => ExitCode::FAILURE,
    };
    Ok(exit_code)
}
