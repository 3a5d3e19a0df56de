use super::RecordStore;
use crate::error::{RoasteryError, Result};
use crate::model::{CoffeeDraft, CoffeeRecord};
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug)]
pub struct InMemoryStore {
    records: BTreeMap<i64, CoffeeRecord>,
    next_id: i64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn list_all(&self) -> Result<Vec<CoffeeRecord>> {
        Ok(self.records.values().cloned().collect())
    }

    fn fetch_one(&self, id: i64) -> Result<CoffeeRecord> {
        self.records
            .get(&id)
            .cloned()
            .ok_or(RoasteryError::NotFound(id))
    }

    fn insert(&mut self, draft: &CoffeeDraft) -> Result<CoffeeRecord> {
        let id = self.next_id;
        self.next_id += 1;
        let record = CoffeeRecord::from_draft(id, draft.clone());
        self.records.insert(id, record.clone());
        Ok(record)
    }

    fn update(&mut self, id: i64, draft: &CoffeeDraft) -> Result<CoffeeRecord> {
        let slot = self
            .records
            .get_mut(&id)
            .ok_or(RoasteryError::NotFound(id))?;
        *slot = CoffeeRecord::from_draft(id, draft.clone());
        Ok(slot.clone())
    }

    fn ensure_schema(&mut self) -> Result<bool> {
        Ok(false)
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::model::{GrindForm, RoastDegree};

    pub fn draft(variety: &str, roast: RoastDegree, grind: GrindForm) -> CoffeeDraft {
        CoffeeDraft {
            variety: variety.to_string(),
            roast_degree: roast,
            ground_or_bean: grind,
            taste_description: format!("{} notes", variety),
            price: 300,
            package_volume: 250,
        }
    }

    /// A store pre-filled with three products, ids 1..=3.
    pub fn stocked_store() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for d in [
            draft("Colombia Supremo", RoastDegree::Medium, GrindForm::Ground),
            draft("Sumatra Mandheling", RoastDegree::Strong, GrindForm::WholeBean),
            draft("Guatemala Antigua", RoastDegree::Light, GrindForm::WholeBean),
        ] {
            store.insert(&d).expect("in-memory insert cannot fail");
        }
        store
    }
}
