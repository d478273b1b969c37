//! Protocol Tests
//!
//! Tests verify:
//! - Command parsing and its error cases
//! - Command execution against a store
//! - Response formatting
//! - Shell sessions over in-memory readers/writers

use std::io::Cursor;

use txkv::protocol::{
    encode_command, format_error, format_response, parse_command, Command, CommandType, Response,
    NIL,
};
use txkv::{shell, Store, TransactionState, TxError};

fn run_shell(script: &str) -> (Store<String, String>, String, shell::ShellSummary) {
    let mut store = Store::new();
    let mut output = Vec::new();
    let summary = shell::run(&mut store, Cursor::new(script), &mut output).unwrap();
    (store, String::from_utf8(output).unwrap(), summary)
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_parse_lifecycle_commands() {
    assert_eq!(parse_command("BEGIN").unwrap(), Command::Begin);
    assert_eq!(parse_command("commit").unwrap(), Command::Commit);
    assert_eq!(parse_command("  Rollback  ").unwrap(), Command::Rollback);
    assert_eq!(parse_command("status").unwrap(), Command::Status);
}

#[test]
fn test_parse_put_keeps_spaces_in_value() {
    let command = parse_command("put greeting hello there world").unwrap();

    assert_eq!(
        command,
        Command::Put {
            key: "greeting".to_string(),
            value: "hello there world".to_string(),
        }
    );
    assert_eq!(command.command_type(), CommandType::Put);
}

#[test]
fn test_parse_put_value_is_verbatim() {
    let put = |line: &str| match parse_command(line).unwrap() {
        Command::Put { key, value } => (key, value),
        other => panic!("expected PUT, got {:?}", other),
    };

    assert_eq!(put("PUT k   padded"), ("k".to_string(), "  padded".to_string()));
    assert_eq!(put("PUT k trail  "), ("k".to_string(), "trail  ".to_string()));
    assert_eq!(put("PUT k "), ("k".to_string(), String::new()));
    assert_eq!(put("  PUT   k v\r\n"), ("k".to_string(), "v".to_string()));
}

#[test]
fn test_parse_get() {
    assert_eq!(
        parse_command("GET A").unwrap(),
        Command::Get {
            key: "A".to_string()
        }
    );
}

#[test]
fn test_parse_rejects_bad_input() {
    let cases = ["", "   ", "FROB x", "PUT", "PUT onlykey", "GET", "GET a b", "BEGIN now", "COMMIT 1"];

    for case in cases {
        let err = parse_command(case).unwrap_err();
        assert!(
            matches!(err, TxError::Protocol(_)),
            "expected protocol error for {:?}, got {:?}",
            case,
            err
        );
    }
}

#[test]
fn test_encode_command_parses_back() {
    let commands = [
        Command::Begin,
        Command::Put {
            key: "k".to_string(),
            value: "a b".to_string(),
        },
        Command::Put {
            key: "k".to_string(),
            value: "  padded ".to_string(),
        },
        Command::Put {
            key: "k".to_string(),
            value: String::new(),
        },
        Command::Get {
            key: "k".to_string(),
        },
        Command::Commit,
        Command::Rollback,
        Command::Status,
    ];

    for command in commands {
        let line = encode_command(&command).unwrap();
        assert_eq!(parse_command(&line).unwrap(), command);
    }
}

#[test]
fn test_encode_command_rejects_unparseable_input() {
    let bad = [
        Command::Get { key: String::new() },
        Command::Get {
            key: "two words".to_string(),
        },
        Command::Put {
            key: "k".to_string(),
            value: "line\nbreak".to_string(),
        },
    ];

    for command in bad {
        assert!(matches!(encode_command(&command), Err(TxError::Protocol(_))));
    }
}

// =============================================================================
// Execution & Formatting Tests
// =============================================================================

#[test]
fn test_execute_routes_to_store() {
    let mut store: Store<String, String> = Store::new();

    assert_eq!(store.execute(Command::Begin).unwrap(), Response::Ok);
    assert_eq!(
        store.execute(Command::Status).unwrap(),
        Response::State(TransactionState::InTransaction)
    );
    store
        .execute(Command::Put {
            key: "A".to_string(),
            value: "5".to_string(),
        })
        .unwrap();
    assert_eq!(store.execute(Command::Commit).unwrap(), Response::Ok);
    assert_eq!(
        store
            .execute(Command::Get {
                key: "A".to_string()
            })
            .unwrap(),
        Response::Value(Some("5".to_string()))
    );
    assert!(matches!(
        store.execute(Command::Rollback),
        Err(TxError::NoTransactionToRollback)
    ));
}

#[test]
fn test_format_response() {
    assert_eq!(format_response(&Response::Ok), "OK");
    assert_eq!(format_response(&Response::Value(Some("v".to_string()))), "\"v\"");
    assert_eq!(
        format_response(&Response::Value(Some("say \"hi\"".to_string()))),
        r#""say \"hi\"""#
    );
    assert_eq!(format_response(&Response::Value(None)), NIL);
    assert_eq!(format_response(&Response::State(TransactionState::Idle)), "IDLE");
    assert_eq!(
        format_error(&TxError::NoTransactionToCommit),
        "ERR No transaction to commit"
    );
}

// =============================================================================
// Shell Tests
// =============================================================================

#[test]
fn test_shell_session() {
    let script = "\
# stage and commit
BEGIN
PUT A 5
GET A
COMMIT

GET A
STATUS
";
    let (store, output, summary) = run_shell(script);

    assert_eq!(output, "OK\nOK\n\"5\"\nOK\n\"5\"\nIDLE\n");
    assert_eq!(summary.executed, 6);
    assert_eq!(summary.rejected, 0);
    assert_eq!(store.get("A"), Some(&"5".to_string()));
}

#[test]
fn test_shell_continues_after_errors() {
    let script = "PUT A 5\nCOMMIT\nNOPE\nBEGIN\nBEGIN\nROLLBACK\nGET A\n";
    let (store, output, summary) = run_shell(script);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "ERR No transaction in progress",
            "ERR No transaction to commit",
            "ERR Protocol error: unknown command: NOPE",
            "OK",
            "ERR A transaction is already in progress",
            "OK",
            "(nil)",
        ]
    );
    assert_eq!(summary.executed, 3);
    assert_eq!(summary.rejected, 4);
    assert!(store.is_empty());
}

#[test]
fn test_shell_distinguishes_stored_nil_from_absent() {
    let (_store, output, _) = run_shell("BEGIN\nPUT A (nil)\nCOMMIT\nGET A\nGET Z\n");

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[3], "\"(nil)\"");
    assert_eq!(lines[4], NIL);
}

#[test]
fn test_shell_keeps_value_whitespace() {
    let (store, output, _) = run_shell("BEGIN\nPUT A  padded \nCOMMIT\nGET A\n");

    assert_eq!(store.get("A"), Some(&" padded ".to_string()));
    assert_eq!(output.lines().last(), Some("\" padded \""));
}

#[test]
fn test_shell_with_prompt() {
    let mut store = Store::new();
    let mut output = Vec::new();

    let summary = shell::run_with_prompt(&mut store, Cursor::new("BEGIN\nPUT A 1\n"), &mut output).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "txkv[IDLE]> OK\ntxkv[IN_TRANSACTION]> OK\ntxkv[IN_TRANSACTION]> \n"
    );
    assert_eq!(summary.executed, 2);
    assert!(store.is_transaction_active());
}
