use crate::commands::CmdResult;
use crate::error::Result;
use crate::list_view::DisplayRow;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, id: i64) -> Result<CmdResult> {
    let record = store.fetch_one(id)?;
    let row = DisplayRow::from(&record);
    Ok(CmdResult::default()
        .with_listed_rows(vec![row])
        .with_affected_records(vec![record]))
}
