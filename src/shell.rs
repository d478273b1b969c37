//! Shell
//!
//! Drives a store from a stream of protocol lines.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::protocol::{format_error, format_response, parse_command};
use crate::store::Store;

/// Outcome counts for one shell session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShellSummary {
    /// Commands that succeeded
    pub executed: usize,

    /// Commands that were rejected (parse or state errors)
    pub rejected: usize,
}

/// Read commands from `reader` until EOF, writing one response line each
///
/// Blank lines and lines starting with `#` are skipped. A rejected command
/// prints `ERR ...` and the session continues; only I/O errors abort it.
pub fn run<R, W>(store: &mut Store<String, String>, reader: R, mut writer: W) -> Result<ShellSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = ShellSummary::default();

    for line in reader.lines() {
        execute_line(store, &line?, &mut writer, &mut summary)?;
    }

    writer.flush()?;
    Ok(summary)
}

/// Like [`run`], but writes a `txkv[STATE]> ` prompt before every line
pub fn run_with_prompt<R, W>(
    store: &mut Store<String, String>,
    reader: R,
    mut writer: W,
) -> Result<ShellSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = ShellSummary::default();
    let mut lines = reader.lines();

    loop {
        write!(writer, "txkv[{}]> ", store.state())?;
        writer.flush()?;

        let Some(line) = lines.next() else {
            writeln!(writer)?;
            writer.flush()?;
            return Ok(summary);
        };

        execute_line(store, &line?, &mut writer, &mut summary)?;
    }
}

fn execute_line<W: Write>(
    store: &mut Store<String, String>,
    line: &str,
    writer: &mut W,
    summary: &mut ShellSummary,
) -> Result<()> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(());
    }

    // PUT values keep their surrounding whitespace, so parse the raw line
    let outcome = parse_command(line).and_then(|command| {
        tracing::trace!(?command, "executing");
        store.execute(command)
    });

    match outcome {
        Ok(response) => {
            summary.executed += 1;
            writeln!(writer, "{}", format_response(&response))?;
        }
        Err(e) => {
            summary.rejected += 1;
            tracing::debug!(line = trimmed, error = %e, "command rejected");
            writeln!(writer, "{}", format_error(&e))?;
        }
    }

    Ok(())
}
