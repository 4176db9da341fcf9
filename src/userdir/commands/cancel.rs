use crate::commands::{messages, CmdMessage, CmdResult};
use crate::error::Result;
use crate::state::DirectoryState;
use crate::store::StorageBackend;

/// Close the form and drop the draft. Never touches the stores.
pub fn run<B: StorageBackend>(state: &mut DirectoryState<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if state.session.cancel() {
        result.add_message(CmdMessage::info(messages(state).cancelled));
    }
    Ok(result)
}
