//! # Roastery CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only invokes
//! `cli::run()` and turns the outcome into a process exit code.
//!
//! The terminal client stands in for a desktop window. The grid printed by `list` is the
//! table widget, `add`/`edit` flags are the form's inputs, and the colored status lines are
//! the status bar. `shell` keeps one session open so the grid and the row numbers it shows
//! persist between commands, the way a window would.

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
