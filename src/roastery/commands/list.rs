use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::list_view::ListView;
use crate::store::RecordStore;

/// Refreshes the view. A failed refresh is reported, not raised: the grid is simply empty.
pub fn run<S: RecordStore>(store: &S, view: &mut ListView) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Err(e) = view.refresh(store) {
        result.add_message(CmdMessage::error(e.to_string()));
    }
    Ok(result.with_listed_rows(view.rows().to_vec()))
}
