use crate::commands::{messages, CmdMessage, CmdResult};
use crate::error::{Result, UserdirError};
use crate::model::EditMode;
use crate::state::DirectoryState;
use crate::store::StorageBackend;
use tracing::debug;

/// Validate the open draft and store it.
///
/// A rejected draft is an `Ok` result with an error message and
/// `attention` set; the form stays open for another attempt.
pub fn run<B: StorageBackend>(state: &mut DirectoryState<B>) -> Result<CmdResult> {
    let msgs = messages(state);
    let mode = state.session.mode().ok_or(UserdirError::NoOpenSession)?;
    let mut result = CmdResult::default();

    match state.session.save(&mut state.users) {
        Ok(saved) => {
            let notice = match mode {
                EditMode::Create => msgs.user_added,
                EditMode::Edit => msgs.user_updated,
            };
            result.add_message(CmdMessage::success(format!("{}: {}", notice, saved.username)));
            result.affected_users.push(saved);
        }
        Err(UserdirError::Validation(err)) => {
            debug!(field = %err.field(), "draft rejected");
            result.attention = Some(err.field());
            result.add_message(CmdMessage::error(msgs.validation(&err)));
        }
        Err(e) => return Err(e),
    }

    Ok(result)
}
