use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Field;
use crate::state::DirectoryState;
use crate::store::StorageBackend;

/// Change one field of the open draft. No validation happens here.
pub fn run<B: StorageBackend>(
    state: &mut DirectoryState<B>,
    field: Field,
    value: impl Into<String>,
) -> Result<CmdResult> {
    state.session.update_field(field, value)?;
    let draft = state.session.draft().cloned().into_iter().collect();
    Ok(CmdResult::default().with_affected_users(draft))
}
