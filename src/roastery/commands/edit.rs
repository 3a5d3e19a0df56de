use crate::commands::CmdResult;
use crate::error::Result;
use crate::form::{FormFields, RecordForm};
use crate::list_view::ListView;
use crate::model::{GrindForm, RoastDegree};
use crate::store::RecordStore;

use super::add::submitted_result;

/// Field edits on top of the pre-filled form. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct FieldChanges {
    pub variety: Option<String>,
    pub roast_degree: Option<RoastDegree>,
    pub ground_or_bean: Option<GrindForm>,
    pub taste_description: Option<String>,
    pub price: Option<String>,
    pub package_volume: Option<String>,
}

impl FieldChanges {
    pub fn apply(self, mut fields: FormFields) -> FormFields {
        if let Some(v) = self.variety {
            fields.variety = v;
        }
        if let Some(v) = self.roast_degree {
            fields.roast_degree = v;
        }
        if let Some(v) = self.ground_or_bean {
            fields.ground_or_bean = v;
        }
        if let Some(v) = self.taste_description {
            fields.taste_description = v;
        }
        if let Some(v) = self.price {
            fields.price = v;
        }
        if let Some(v) = self.package_volume {
            fields.package_volume = v;
        }
        fields
    }

    /// Fills every field, as the add form needs. Missing selectors take the form defaults.
    pub fn into_fields(self) -> FormFields {
        self.apply(FormFields::default())
    }
}

/// Edits the one record selected in the current view (0-based row positions).
pub fn run<S: RecordStore>(
    store: &mut S,
    view: &mut ListView,
    positions: &[usize],
    changes: FieldChanges,
) -> Result<CmdResult> {
    let mut form = RecordForm::for_selection(store, view, positions)?;
    let fields = changes.apply(form.fields().clone());
    let submitted = form.submit(fields, store, view)?;
    Ok(submitted_result(submitted, view, "Updated"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoasteryError;
    use crate::list_view::SelectionError;
    use crate::store::memory::fixtures::stocked_store;

    #[test]
    fn changes_only_given_fields() {
        let mut store = stocked_store();
        let mut view = ListView::new();
        view.refresh(&store).unwrap();

        let changes = FieldChanges {
            price: Some("410".into()),
            ground_or_bean: Some(GrindForm::Ground),
            ..Default::default()
        };
        let result = run(&mut store, &mut view, &[1], changes).unwrap();

        let record = store.fetch_one(2).unwrap();
        assert_eq!(record.variety, "Sumatra Mandheling");
        assert_eq!(record.price, 410);
        assert_eq!(record.ground_or_bean, GrindForm::Ground);
        assert_eq!(result.messages[0].content, "Updated #2: Sumatra Mandheling");
        assert_eq!(result.listed_rows[1].ground_or_bean, "Ground");
    }

    #[test]
    fn refuses_empty_and_multiple_selection() {
        let mut store = stocked_store();
        let mut view = ListView::new();
        view.refresh(&store).unwrap();

        let err = run(&mut store, &mut view, &[], FieldChanges::default()).unwrap_err();
        assert!(matches!(
            err,
            RoasteryError::Selection(SelectionError::NothingSelected)
        ));

        let err = run(&mut store, &mut view, &[0, 1], FieldChanges::default()).unwrap_err();
        assert!(matches!(
            err,
            RoasteryError::Selection(SelectionError::MultipleRows)
        ));
    }

    #[test]
    fn edit_validates_like_add() {
        let mut store = stocked_store();
        let mut view = ListView::new();
        view.refresh(&store).unwrap();

        let changes = FieldChanges {
            package_volume: Some("0".into()),
            ..Default::default()
        };
        let err = run(&mut store, &mut view, &[0], changes).unwrap_err();
        assert_eq!(err.to_string(), "volume must be a positive integer");
        assert_eq!(store.fetch_one(1).unwrap().package_volume, 250);
    }

    #[test]
    fn into_fields_starts_from_blank_form() {
        let fields = FieldChanges {
            variety: Some("Arabica".into()),
            ..Default::default()
        }
        .into_fields();
        assert_eq!(fields.variety, "Arabica");
        assert_eq!(fields.roast_degree, RoastDegree::Light);
        assert!(fields.price.is_empty());
    }
}
