//! orgtree - reporting hierarchy CLI
//!
//! Reads and reshapes the manager hierarchy stored in the configured SQLite
//! database. Every command prints JSON on stdout.
//!
//! # Examples
//!
//! ```bash
//! # Print every reporting tree
//! orgtree forest --pretty
//!
//! # Check a move without applying it
//! orgtree validate <user-id> <manager-id>
//!
//! # Move a user (and their reports) under a new manager
//! orgtree assign <user-id> <manager-id> --actor <admin-id>
//! ```

use org_cli::{Cli, run};

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => print_json(&value, pretty, ExitCode::SUCCESS),
        Err(e) => {
            log::error!("{}", e);
            print_json(&e.to_json(), pretty, ExitCode::FAILURE)
        }
    }
}

fn print_json(value: &Value, pretty: bool, code: ExitCode) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            code
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}
