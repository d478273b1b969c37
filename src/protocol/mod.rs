//! Protocol Module
//!
//! Line-oriented text protocol for driving a `Store<String, String>`.
//!
//! ## Request Format
//! One command per line; verbs are case-insensitive.
//! ```text
//! BEGIN
//! PUT <key> <value...>
//! GET <key>
//! COMMIT
//! ROLLBACK
//! STATUS
//! ```
//!
//! ## Response Format
//! - `OK`: lifecycle call or put succeeded
//! - `<value>` / `(nil)`: result of GET
//! - `IDLE` / `IN_TRANSACTION`: result of STATUS
//! - `ERR <message>`: the command was rejected

mod command;
mod response;
mod codec;

pub use command::{Command, CommandType};
pub use response::Response;
pub use codec::{encode_command, format_error, format_response, parse_command, NIL};
