//! # Roastery Architecture
//!
//! Roastery is an inventory library for a coffee retailer that happens to ship with a
//! terminal client. One table of products lives in a local SQLite file; everything else
//! is listing, validating and writing single rows.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints the grid and status messages    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the list view                         │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, form.rs, list_view.rs)       │
//! │  - Validation, form modes, row selection, label lookup      │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait                                        │
//! │  - SqliteStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments and returns `Result<CmdResult>`.
//! It never prints and never exits the process. Failures are values: the client decides
//! how to show them, and none of them is fatal.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user operation
//! - [`form`]: The add/edit form state machine
//! - [`list_view`]: The grid of display rows and row selection
//! - [`validation`]: Ordered field checks for the form
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `CoffeeRecord`, `CoffeeDraft` and the coded enumerations
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod list_view;
pub mod model;
pub mod store;
pub mod validation;
