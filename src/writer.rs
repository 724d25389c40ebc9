use crate::error::RedtableResult;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Where converted markup goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget<'a> {
    Stdout,
    File(&'a Path),
}

impl<'a> OutputTarget<'a> {
    pub fn from_option(path: Option<&'a Path>) -> Self {
        match path {
            Some(path) => OutputTarget::File(path),
            None => OutputTarget::Stdout,
        }
    }
}

/// Write markup to a file, replacing it, or to stdout with a trailing newline
pub fn write_output(markup: &str, target: OutputTarget<'_>) -> RedtableResult<()> {
    match target {
        OutputTarget::File(path) => {
            fs::write(path, markup)?;
            tracing::info!(path = %path.display(), bytes = markup.len(), "wrote markup");
        }
        OutputTarget::Stdout => write_markup(&mut std::io::stdout().lock(), markup)?,
    }
    Ok(())
}

/// Print markup to any writer the way stdout receives it
pub fn write_markup<W: Write>(out: &mut W, markup: &str) -> RedtableResult<()> {
    writeln!(out, "{markup}")?;
    out.flush()?;
    Ok(())
}
