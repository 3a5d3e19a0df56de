//! # CLI Layer
//!
//! This is **one possible UI client** for roastery, not the application itself.
//! It is the only place that knows about stdout/stderr, exit codes and colors.
//!
//! ## Behaviour
//!
//! - `roastery` with no subcommand lists the grid.
//! - Row numbers printed by `list` are what `edit` selects with. They are 1-based and
//!   refer to the grid as last shown.
//! - Every failure is reported as a status line. One-shot commands then exit non-zero;
//!   the shell keeps going.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap, version string, logging
//! - `commands`: Context wiring and dispatch to the API
//! - `render`: Grid and status message output
//! - `shell`: The interactive session

mod commands;
mod render;
pub mod setup;
mod shell;

pub use commands::run;
