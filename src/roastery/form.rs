//! The add/edit form.
//!
//! A [`RecordForm`] is opened in one of two modes and never changes mode afterwards.
//! Submitting either fails with the first validation message, leaving the form open with
//! whatever the user typed, or writes the row, refreshes the list and hands back a
//! [`Submitted`] so the caller can close the form.

use crate::error::Result;
use crate::list_view::{DisplayError, ListView};
use crate::model::{CoffeeRecord, GrindForm, RoastDegree};
use crate::store::RecordStore;
use crate::validation::validate;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: i64 },
}

/// Form input as the user typed it. Price and volume stay text until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub variety: String,
    pub roast_degree: RoastDegree,
    pub ground_or_bean: GrindForm,
    pub taste_description: String,
    pub price: String,
    pub package_volume: String,
}

impl From<&CoffeeRecord> for FormFields {
    fn from(record: &CoffeeRecord) -> Self {
        Self {
            variety: record.variety.clone(),
            roast_degree: record.roast_degree,
            ground_or_bean: record.ground_or_bean,
            taste_description: record.taste_description.clone(),
            price: record.price.to_string(),
            package_volume: record.package_volume.to_string(),
        }
    }
}

/// Outcome of a successful submit.
#[derive(Debug)]
pub struct Submitted {
    pub record: CoffeeRecord,
    pub mode: FormMode,
    pub refresh: std::result::Result<usize, DisplayError>,
}

#[derive(Debug)]
pub struct RecordForm {
    mode: FormMode,
    fields: FormFields,
}

impl RecordForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            fields: FormFields::default(),
        }
    }

    pub fn edit<S: RecordStore>(store: &S, id: i64) -> Result<Self> {
        let record = store.fetch_one(id)?;
        Ok(Self {
            mode: FormMode::Edit { id },
            fields: FormFields::from(&record),
        })
    }

    /// Opens edit mode for the single row selected in `view`.
    pub fn for_selection<S: RecordStore>(
        store: &S,
        view: &ListView,
        positions: &[usize],
    ) -> Result<Self> {
        let id = view.selected_id(positions)?;
        Self::edit(store, id)
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn submit<S: RecordStore>(
        &mut self,
        raw: FormFields,
        store: &mut S,
        view: &mut ListView,
    ) -> Result<Submitted> {
        self.fields = raw;
        let draft = validate(&self.fields)?;
        let record = match self.mode {
            FormMode::Create => store.insert(&draft)?,
            FormMode::Edit { id } => store.update(id, &draft)?,
        };
        debug!(id = record.id, mode = ?self.mode, "form submitted");
        let refresh = view.refresh(store);
        Ok(Submitted {
            record,
            mode: self.mode,
            refresh,
        })
    }
}
