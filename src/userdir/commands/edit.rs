use crate::commands::CmdResult;
use crate::error::{Result, UserdirError};
use crate::model::UserId;
use crate::state::DirectoryState;
use crate::store::StorageBackend;

/// Open the "edit user" form on a copy of the stored record.
pub fn run<B: StorageBackend>(state: &mut DirectoryState<B>, id: &UserId) -> Result<CmdResult> {
    let record = state
        .users
        .get(id)
        .cloned()
        .ok_or(UserdirError::UserNotFound(*id))?;
    state.session.begin_edit(&record)?;
    Ok(CmdResult::default().with_affected_users(vec![record]))
}
