use crate::commands::{messages, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::UserId;
use crate::state::DirectoryState;
use crate::store::StorageBackend;

/// Remove each listed record. Unknown ids produce a warning, not an error.
///
/// If the record being edited is deleted, its form is closed as well: there
/// is nothing left for the draft to replace.
pub fn run<B: StorageBackend>(state: &mut DirectoryState<B>, ids: &[UserId]) -> Result<CmdResult> {
    let msgs = messages(state);
    let mut result = CmdResult::default();

    for id in ids {
        let Some(record) = state.users.get(id).cloned() else {
            result.add_message(CmdMessage::warning(format!("{}: {}", msgs.user_missing, id)));
            continue;
        };

        state.users.remove(id)?;

        if state.session.draft().map(|d| d.id) == Some(*id) {
            state.session.cancel();
        }

        result.add_message(CmdMessage::success(format!(
            "{}: {}",
            msgs.user_deleted, record.username
        )));
        result.affected_users.push(record);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, edit, fixtures, MessageLevel};

    #[test]
    fn removes_records() {
        let (mut state, users) = fixtures::state_with(&["alice", "bob", "carol"]);
        let result = run(&mut state, &[users[0].id, users[2].id]).unwrap();

        assert_eq!(result.affected_users.len(), 2);
        assert_eq!(state.users.list(), &[users[1].clone()]);
    }

    #[test]
    fn missing_id_warns() {
        let (mut state, users) = fixtures::state_with(&["alice"]);
        let result = run(&mut state, &[UserId::new()]).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(state.users.list(), users.as_slice());
    }

    #[test]
    fn deleting_edited_record_closes_form() {
        let (mut state, users) = fixtures::state_with(&["alice", "bob"]);
        edit::run(&mut state, &users[0].id).unwrap();

        run(&mut state, &[users[0].id]).unwrap();
        assert!(!state.session.is_open());
    }

    #[test]
    fn unrelated_delete_keeps_create_form() {
        let (mut state, users) = fixtures::state_with(&["alice"]);
        create::run(&mut state).unwrap();

        run(&mut state, &[users[0].id]).unwrap();
        assert!(state.session.is_open());
    }
}
