use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{UserId, UserRecord};
use crate::state::DirectoryState;
use crate::store::StorageBackend;

/// Open a blank "add user" form with a freshly generated id.
pub fn run<B: StorageBackend>(state: &mut DirectoryState<B>) -> Result<CmdResult> {
    let id = UserId::new();
    state.session.begin_create(id)?;
    Ok(CmdResult::default().with_affected_users(vec![UserRecord::empty(id)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use crate::error::UserdirError;
    use crate::model::EditMode;

    #[test]
    fn opens_blank_create_form() {
        let mut state = fixtures::state();
        let result = run(&mut state).unwrap();

        let draft = state.session.draft().unwrap();
        assert_eq!(draft, &result.affected_users[0]);
        assert!(draft.username.is_empty());
        assert_eq!(state.session.mode(), Some(EditMode::Create));
        assert!(state.users.is_empty());
    }

    #[test]
    fn fresh_ids_differ() {
        let mut state = fixtures::state();
        let first = run(&mut state).unwrap().affected_users[0].id;
        state.session.cancel();
        let second = run(&mut state).unwrap().affected_users[0].id;
        assert_ne!(first, second);
    }

    #[test]
    fn refuses_while_form_is_open() {
        let mut state = fixtures::state();
        run(&mut state).unwrap();
        assert!(matches!(run(&mut state), Err(UserdirError::SessionAlreadyOpen)));
    }
}
