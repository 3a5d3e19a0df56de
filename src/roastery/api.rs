//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every roastery operation, whatever the client.
//!
//! It owns two things: the store, and the [`ListView`] currently on screen. Keeping the
//! view here is what makes row selection meaningful across calls: `edit` resolves row
//! numbers against the grid the user last saw, not against a fresh query.
//!
//! ## Responsibilities
//!
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (1-based row numbers from the user → 0-based positions)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! No business logic, no printing.

use crate::commands;
use crate::error::{Result, RoasteryError};
use crate::list_view::{ListView, SelectionError};
use crate::store::RecordStore;
use std::path::PathBuf;

pub struct RoasteryApi<S: RecordStore> {
    store: S,
    view: ListView,
    config_dir: PathBuf,
}

impl<S: RecordStore> RoasteryApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self {
            store,
            view: ListView::new(),
            config_dir,
        }
    }

    /// Re-queries the store and returns the full grid.
    pub fn list(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &mut self.view)
    }

    pub fn add(&mut self, fields: FormFields) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &mut self.view, fields)
    }

    /// Edits the record in the single selected row. `rows` are 1-based, as displayed.
    pub fn edit(
        &mut self,
        rows: &[usize],
        changes: FieldChanges,
    ) -> Result<commands::CmdResult> {
        let positions = row_positions(rows)?;
        commands::edit::run(&mut self.store, &mut self.view, &positions, changes)
    }

    pub fn show(&self, id: i64) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, id)
    }

    pub fn init(&mut self, location: &str) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store, location)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn row_positions(rows: &[usize]) -> Result<Vec<usize>> {
    rows.iter()
        .map(|&n| n.checked_sub(1).ok_or(RoasteryError::from(SelectionError::OutOfRange)))
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::edit::FieldChanges;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::form::FormFields;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GrindForm, RoastDegree};
    use crate::store::memory::InMemoryStore;

    fn api() -> RoasteryApi<InMemoryStore> {
        RoasteryApi::new(InMemoryStore::new(), std::env::temp_dir())
    }

    fn kenya() -> FormFields {
        FormFields {
            variety: "Kenya AA".into(),
            roast_degree: RoastDegree::Medium,
            ground_or_bean: GrindForm::WholeBean,
            taste_description: "Bright, citrus".into(),
            price: "450".into(),
            package_volume: "250".into(),
        }
    }

    #[test]
    fn add_then_list_end_to_end() {
        let mut api = api();
        api.add(kenya()).unwrap();

        let listed = api.list().unwrap().listed_rows;
        assert_eq!(listed.len(), 1);
        assert_eq!(
            listed[0].cells(),
            ["1", "Kenya AA", "Medium", "Whole Bean", "Bright, citrus", "450", "250"]
        );

        let stored = api.store().fetch_one(1).unwrap();
        assert_eq!(stored.price, 450);
        assert_eq!(stored.package_volume, 250);
    }

    #[test]
    fn edit_uses_one_based_rows_of_current_view() {
        let mut api = api();
        api.add(kenya()).unwrap();
        let mut second = kenya();
        second.variety = "Rwanda".into();
        api.add(second).unwrap();

        let changes = FieldChanges {
            variety: Some("Rwanda Bourbon".into()),
            ..Default::default()
        };
        api.edit(&[2], changes).unwrap();
        assert_eq!(api.store().fetch_one(2).unwrap().variety, "Rwanda Bourbon");
        assert_eq!(api.view().rows()[1].variety, "Rwanda Bourbon");
    }

    #[test]
    fn row_zero_is_out_of_range() {
        let mut api = api();
        api.add(kenya()).unwrap();
        let err = api.edit(&[0], FieldChanges::default()).unwrap_err();
        assert!(matches!(
            err,
            RoasteryError::Selection(SelectionError::OutOfRange)
        ));
    }
}
