//! Demo
//!
//! The reference call sequence, replayed against a store.

use std::io::Write;

use crate::error::Result;
use crate::protocol::{encode_command, format_error, format_response, Command};
use crate::store::Store;

/// Reference scenario, one command per step
pub fn script() -> Vec<Command> {
    let put = |key: &str, value: &str| Command::Put {
        key: key.to_string(),
        value: value.to_string(),
    };
    let get = |key: &str| Command::Get {
        key: key.to_string(),
    };

    vec![
        get("A"),
        put("A", "5"),
        Command::Begin,
        put("A", "5"),
        get("A"),
        put("A", "6"),
        Command::Commit,
        get("A"),
        Command::Commit,
        Command::Rollback,
        get("B"),
        Command::Begin,
        put("B", "10"),
        Command::Rollback,
        get("B"),
    ]
}

/// Run [`script`] and write `<command> -> <result>` for every step
pub fn run<W: Write>(store: &mut Store<String, String>, mut writer: W) -> Result<()> {
    for command in script() {
        let line = encode_command(&command)?;
        let rendered = match store.execute(command) {
            Ok(response) => format_response(&response),
            Err(e) => format_error(&e),
        };
        writeln!(writer, "{:<12} -> {}", line, rendered)?;
    }

    writer.flush()?;
    Ok(())
}
