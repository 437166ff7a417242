//! Fatal error reporting on stderr.

use crossterm::style::Stylize;
use std::io::{self, Write};

/// Writes `error` and each of its causes, one per line.
pub fn write_error<W: Write>(out: &mut W, error: &anyhow::Error) -> io::Result<()> {
    let mut chain = error.chain();
    if let Some(head) = chain.next() {
        writeln!(out, "{} {head}", "error:".red().bold())?;
    }
    for cause in chain {
        writeln!(out, "{} {cause}", "caused by:".red().bold())?;
    }
    out.flush()
}

pub fn report_error(error: &anyhow::Error) {
    tracing::error!(error = %format!("{error:#}"), "Session failed");
    let stderr = io::stderr();
    let _ = write_error(&mut stderr.lock(), error);
}
