//! Default mode: print the ordered URLs, one per line.

use anyhow::Result;
use std::io::Write;

/// Newline-joined URLs with one trailing newline; an empty list writes nothing.
pub fn run_print<W: Write>(urls: &[String], out: &mut W) -> Result<()> {
    if !urls.is_empty() {
        writeln!(out, "{}", urls.join("\n"))?;
    }
    out.flush()?;
    Ok(())
}
