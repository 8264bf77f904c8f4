use std::io::Write;

use tallow_hir::Body;
use tallow_syntax::SourceFile;

use crate::{ops::Input, ExitStatus};

#[derive(clap::Args)]
pub struct Args {
    #[clap(flatten)]
    input: Input,
}

/// This method is invoked when the executable is run with the `lower` argument. The lowered form
/// is printed regardless of syntax errors, with `<missing>` standing in for expressions that could
/// not be parsed, followed by one line per syntax error.
pub fn lower(args: Args, out: &mut dyn Write) -> Result<ExitStatus, anyhow::Error> {
    let text = args.input.read()?;
    let parse = SourceFile::parse(&text);

    let (body, _source_map) = Body::lower(&parse.tree());
    write!(out, "{}", body.pretty_print())?;

    let errors = parse.errors();
    for error in errors {
        writeln!(out, "error {}: {}", error.location(), error)?;
    }
    if !errors.is_empty() {
        log::info!("found {} syntax error(s)", errors.len());
    }
    Ok(errors.is_empty().into())
}
