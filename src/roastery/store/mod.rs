//! # Storage Layer
//!
//! The [`RecordStore`] trait is the one seam between the inventory logic and persistence.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: Production storage in a single SQLite file
//!   - One table, `coffee`, one row per product
//!   - A connection is opened for each call and dropped before it returns
//!   - Every value reaches SQL as a bound parameter
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Same id assignment and error behaviour as the SQLite store
//!
//! ## Table Layout
//!
//! ```text
//! coffee(id INTEGER PRIMARY KEY, variety TEXT, roast_degree INTEGER, ground_bean INTEGER,
//!        taste_description TEXT, price INTEGER, value INTEGER)
//! ```
//!
//! `roast_degree` holds 1..=3 and `ground_bean` 0..=1; `value` is the package volume.

use crate::error::Result;
use crate::model::{CoffeeDraft, CoffeeRecord};

pub mod memory;
pub mod sqlite;

/// Abstract interface for the product table.
///
/// Each write touches exactly one row and is committed before the call returns.
pub trait RecordStore {
    /// All records, ordered by id ascending
    fn list_all(&self) -> Result<Vec<CoffeeRecord>>;

    /// One record by id, or `RoasteryError::NotFound`
    fn fetch_one(&self, id: i64) -> Result<CoffeeRecord>;

    /// Persist a new record and return it with its assigned id
    fn insert(&mut self, draft: &CoffeeDraft) -> Result<CoffeeRecord>;

    /// Overwrite every field except the id. Missing ids are `RoasteryError::NotFound`.
    fn update(&mut self, id: i64, draft: &CoffeeDraft) -> Result<CoffeeRecord>;

    /// Create the table if it does not exist. Returns true when it was created.
    fn ensure_schema(&mut self) -> Result<bool>;
}
