//! The product grid.
//!
//! [`ListView`] keeps the rows currently on screen. Every refresh re-reads the whole table
//! and replaces them; there is no incremental update. Coded fields are turned into labels
//! here, so the rendering side only ever sees text.

use crate::error::RoasteryError;
use crate::model::CoffeeRecord;
use crate::store::RecordStore;
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, warn};

pub const COLUMN_HEADERS: [&str; 7] = [
    "ID",
    "Variety",
    "Roast",
    "Ground/Bean",
    "Taste",
    "Price",
    "Volume",
];

/// Refreshing failed; the view was left empty.
#[derive(Error, Debug)]
#[error("could not load records: {0}")]
pub struct DisplayError(#[source] Box<RoasteryError>);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("nothing selected")]
    NothingSelected,

    #[error("multiple rows selected")]
    MultipleRows,

    #[error("selected row is not in the list")]
    OutOfRange,
}

/// One grid row, every cell already rendered to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub id: i64,
    pub variety: String,
    pub roast_degree: &'static str,
    pub ground_or_bean: &'static str,
    pub taste_description: String,
    pub price: String,
    pub package_volume: String,
}

impl DisplayRow {
    pub fn cells(&self) -> [String; 7] {
        [
            self.id.to_string(),
            self.variety.clone(),
            self.roast_degree.to_string(),
            self.ground_or_bean.to_string(),
            self.taste_description.clone(),
            self.price.clone(),
            self.package_volume.clone(),
        ]
    }
}

impl From<&CoffeeRecord> for DisplayRow {
    fn from(record: &CoffeeRecord) -> Self {
        Self {
            id: record.id,
            variety: record.variety.clone(),
            roast_degree: record.roast_degree.label(),
            ground_or_bean: record.ground_or_bean.label(),
            taste_description: record.taste_description.clone(),
            price: record.price.to_string(),
            package_volume: record.package_volume.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ListView {
    rows: Vec<DisplayRow>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    /// Replaces all rows with the current store contents and returns the new row count.
    pub fn refresh<S: RecordStore>(&mut self, store: &S) -> Result<usize, DisplayError> {
        self.rows.clear();
        match store.list_all() {
            Ok(records) => {
                self.rows = records.iter().map(DisplayRow::from).collect();
                debug!(rows = self.rows.len(), "list view refreshed");
                Ok(self.rows.len())
            }
            Err(e) => {
                warn!(error = %e, "list view refresh failed");
                Err(DisplayError(Box::new(e)))
            }
        }
    }

    /// Resolves a selection (0-based row positions, repeats allowed) to the id of exactly
    /// one row.
    pub fn selected_id(&self, positions: &[usize]) -> Result<i64, SelectionError> {
        let distinct: BTreeSet<usize> = positions.iter().copied().collect();
        let mut iter = distinct.into_iter();
        let first = iter.next().ok_or(SelectionError::NothingSelected)?;
        if iter.next().is_some() {
            return Err(SelectionError::MultipleRows);
        }
        self.rows
            .get(first)
            .map(|row| row.id)
            .ok_or(SelectionError::OutOfRange)
    }
}
