use super::RecordStore;
use crate::error::{RoasteryError, Result};
use crate::model::{CoffeeDraft, CoffeeRecord};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use std::path::PathBuf;
use tracing::{debug, info};

const SELECT_COLUMNS: &str =
    "SELECT id, variety, roast_degree, ground_bean, taste_description, price, value FROM coffee";

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS coffee (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    variety TEXT NOT NULL,
    roast_degree INTEGER NOT NULL CHECK (roast_degree BETWEEN 1 AND 3),
    ground_bean INTEGER NOT NULL CHECK (ground_bean IN (0, 1)),
    taste_description TEXT NOT NULL,
    price INTEGER NOT NULL CHECK (price >= 0),
    value INTEGER NOT NULL CHECK (value > 0)
)";

/// SQLite-backed store. Holds only the file path; connections live for one call.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens an existing database. A missing file is an error, never silently created.
    fn connect(&self) -> Result<Connection> {
        debug!(path = %self.path.display(), "opening connection");
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        Ok(Connection::open_with_flags(&self.path, flags)?)
    }

    fn connect_or_create(&self) -> Result<Connection> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        Ok(Connection::open_with_flags(&self.path, flags)?)
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<CoffeeRecord> {
    Ok(CoffeeRecord {
        id: row.get(0)?,
        variety: row.get(1)?,
        roast_degree: row.get(2)?,
        ground_or_bean: row.get(3)?,
        taste_description: row.get(4)?,
        price: row.get(5)?,
        package_volume: row.get(6)?,
    })
}

impl RecordStore for SqliteStore {
    fn list_all(&self) -> Result<Vec<CoffeeRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY id ASC", SELECT_COLUMNS))?;
        let records = stmt
            .query_map([], record_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(count = records.len(), "listed records");
        Ok(records)
    }

    fn fetch_one(&self, id: i64) -> Result<CoffeeRecord> {
        let conn = self.connect()?;
        conn.query_row(
            &format!("{} WHERE id = ?1", SELECT_COLUMNS),
            params![id],
            record_from_row,
        )
        .optional()?
        .ok_or(RoasteryError::NotFound(id))
    }

    fn insert(&mut self, draft: &CoffeeDraft) -> Result<CoffeeRecord> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO coffee (variety, roast_degree, ground_bean, taste_description, price, value)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                draft.variety,
                draft.roast_degree,
                draft.ground_or_bean,
                draft.taste_description,
                draft.price,
                draft.package_volume,
            ],
        )?;
        let id = conn.last_insert_rowid();
        info!(id, variety = %draft.variety, "inserted record");
        Ok(CoffeeRecord::from_draft(id, draft.clone()))
    }

    fn update(&mut self, id: i64, draft: &CoffeeDraft) -> Result<CoffeeRecord> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE coffee
             SET variety = ?1, roast_degree = ?2, ground_bean = ?3,
                 taste_description = ?4, price = ?5, value = ?6
             WHERE id = ?7",
            params![
                draft.variety,
                draft.roast_degree,
                draft.ground_or_bean,
                draft.taste_description,
                draft.price,
                draft.package_volume,
                id,
            ],
        )?;
        if changed == 0 {
            return Err(RoasteryError::NotFound(id));
        }
        info!(id, variety = %draft.variety, "updated record");
        Ok(CoffeeRecord::from_draft(id, draft.clone()))
    }

    fn ensure_schema(&mut self) -> Result<bool> {
        let conn = self.connect_or_create()?;
        let existed: bool = conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'coffee')",
            [],
            |row| row.get(0),
        )?;
        if !existed {
            conn.execute_batch(CREATE_TABLE)?;
            info!(path = %self.path.display(), "created coffee table");
        }
        Ok(!existed)
    }
}
