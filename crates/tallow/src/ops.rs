use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;

pub mod lower;
pub mod parse;

/// Reads the source text to operate on. A path of `-` reads from the standard input.
fn read_source(path: &Path) -> Result<String, anyhow::Error> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("could not read from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("could not read '{}'", path.display()))
    }
}

/// The input file shared by all commands.
#[derive(clap::Args)]
pub struct Input {
    /// Path to the Tallow source file, or `-` to read from stdin
    path: PathBuf,
}

impl Input {
    fn read(&self) -> Result<String, anyhow::Error> {
        log::trace!("reading source from {}", self.path.display());
        read_source(&self.path)
    }
}
