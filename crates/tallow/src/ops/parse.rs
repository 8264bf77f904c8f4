use std::io::Write;

use tallow_syntax::SourceFile;

use crate::{ops::Input, ExitStatus};

#[derive(clap::Args)]
pub struct Args {
    #[clap(flatten)]
    input: Input,
}

/// This method is invoked when the executable is run with the `parse` argument. It prints the
/// syntax tree of the input and fails if the input contains syntax errors.
pub fn parse(args: Args, out: &mut dyn Write) -> Result<ExitStatus, anyhow::Error> {
    let text = args.input.read()?;
    let parse = SourceFile::parse(&text);
    write!(out, "{}", parse.debug_dump())?;

    let errors = parse.errors();
    if !errors.is_empty() {
        log::info!("found {} syntax error(s)", errors.len());
    }
    Ok(errors.is_empty().into())
}
