use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &mut S, location: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.ensure_schema()? {
        result.add_message(CmdMessage::success(format!(
            "Initialized coffee table at {}",
            location
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Coffee table already present at {}",
            location
        )));
    }
    Ok(result)
}
