//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `infokeeper_core` linkage and schema bootstrap without Flutter.
//! - Keep output deterministic for quick local sanity checks.

use infokeeper_core::db::migrations::{current_version, latest_version};
use infokeeper_core::db::open_db_in_memory;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("infokeeper_core ping={}", infokeeper_core::ping());
    println!("infokeeper_core version={}", infokeeper_core::core_version());

    let schema = open_db_in_memory()
        .map_err(|err| err.to_string())
        .and_then(|conn| current_version(&conn).map_err(|err| err.to_string()));
    match schema {
        Ok(version) => {
            println!("infokeeper_core schema={version}/{}", latest_version());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("infokeeper_core schema bootstrap failed: {err}");
            ExitCode::FAILURE
        }
    }
}
