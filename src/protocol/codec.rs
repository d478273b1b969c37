//! Protocol codec
//!
//! Parsing and formatting for the text protocol.

use super::{Command, CommandType, Response};
use crate::error::{Result, TxError};

/// Rendered result of a GET on an absent key
///
/// Present values are always rendered quoted, so a stored `(nil)` prints
/// as `"(nil)"`.
pub const NIL: &str = "(nil)";

// =============================================================================
// Command Parsing/Encoding
// =============================================================================

/// Parse one command line
///
/// Keys cannot contain whitespace. The value of a PUT is everything after
/// the single separator following the key, kept verbatim: it may be empty
/// and may carry leading or trailing spaces.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line
        .trim_end_matches(|c: char| c == '\r' || c == '\n')
        .trim_start();
    if line.trim_end().is_empty() {
        return Err(TxError::Protocol("empty command".to_string()));
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim_start()),
        None => (line, ""),
    };

    let ty = CommandType::from_verb(verb)
        .ok_or_else(|| TxError::Protocol(format!("unknown command: {}", verb)))?;

    match ty {
        CommandType::Put => {
            let (key, value) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| usage(ty, "<key> <value>"))?;
            Ok(Command::Put {
                key: key.to_string(),
                value: value.to_string(),
            })
        }
        CommandType::Get => {
            let key = rest.trim_end();
            if key.is_empty() || key.contains(char::is_whitespace) {
                return Err(usage(ty, "<key>"));
            }
            Ok(Command::Get {
                key: key.to_string(),
            })
        }
        _ if !rest.trim_end().is_empty() => Err(usage(ty, "")),
        CommandType::Begin => Ok(Command::Begin),
        CommandType::Commit => Ok(Command::Commit),
        CommandType::Rollback => Ok(Command::Rollback),
        CommandType::Status => Ok(Command::Status),
    }
}

/// Encode a command as a protocol line (without trailing newline)
///
/// Fails for keys that are empty or contain whitespace and for values that
/// span lines, since those would not parse back to the same command.
pub fn encode_command(command: &Command) -> Result<String> {
    let verb = command.command_type().verb();
    match command {
        Command::Put { key, value } => {
            check_key(key)?;
            if value.contains(|c: char| c == '\r' || c == '\n') {
                return Err(TxError::Protocol("value cannot contain line breaks".to_string()));
            }
            Ok(format!("{} {} {}", verb, key, value))
        }
        Command::Get { key } => {
            check_key(key)?;
            Ok(format!("{} {}", verb, key))
        }
        _ => Ok(verb.to_string()),
    }
}

fn check_key(key: &str) -> Result<()> {
    if key.is_empty() || key.contains(char::is_whitespace) {
        return Err(TxError::Protocol(format!("invalid key: {:?}", key)));
    }
    Ok(())
}

fn usage(ty: CommandType, args: &str) -> TxError {
    if args.is_empty() {
        TxError::Protocol(format!("{} takes no arguments", ty))
    } else {
        TxError::Protocol(format!("usage: {} {}", ty, args))
    }
}

// =============================================================================
// Response Formatting
// =============================================================================

/// Render a successful response
pub fn format_response(response: &Response) -> String {
    match response {
        Response::Ok => "OK".to_string(),
        Response::Value(Some(value)) => format!("{:?}", value),
        Response::Value(None) => NIL.to_string(),
        Response::State(state) => state.to_string(),
    }
}

/// Render a rejected command
pub fn format_error(error: &TxError) -> String {
    format!("ERR {}", error)
}
