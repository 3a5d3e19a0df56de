use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::{FormFields, RecordForm, Submitted};
use crate::list_view::ListView;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(
    store: &mut S,
    view: &mut ListView,
    fields: FormFields,
) -> Result<CmdResult> {
    let mut form = RecordForm::create();
    let submitted = form.submit(fields, store, view)?;
    Ok(submitted_result(submitted, view, "Added"))
}

/// Shared by add and edit: success line, refresh warning, and the refreshed grid.
pub(super) fn submitted_result(submitted: Submitted, view: &ListView, verb: &str) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} #{}: {}",
        verb, submitted.record.id, submitted.record.variety
    )));
    if let Err(e) = submitted.refresh {
        result.add_message(CmdMessage::warning(e.to_string()));
    }
    result
        .with_listed_rows(view.rows().to_vec())
        .with_affected_records(vec![submitted.record])
}
