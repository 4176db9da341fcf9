use crate::error::{Result, UserdirError};
use crate::model::{UserId, UserRecord};

/// Resolve a user-facing reference to a stored id.
///
/// Accepted forms, tried in order:
/// - a 1-based position in the list (`1`, `2`, ...)
/// - a full UUID
/// - a UUID prefix (dashes ignored) matching exactly one record
///
/// A plain number is always a position, never an id prefix.
pub fn resolve_selector(users: &[UserRecord], selector: &str) -> Result<UserId> {
    let selector = selector.trim();

    if let Ok(position) = selector.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|i| users.get(i))
            .map(|user| user.id)
            .ok_or_else(|| UserdirError::InvalidSelector(selector.to_string()));
    }

    if let Ok(id) = selector.parse::<UserId>() {
        return if users.iter().any(|u| u.id == id) {
            Ok(id)
        } else {
            Err(UserdirError::UserNotFound(id))
        };
    }

    let prefix = selector.replace('-', "").to_ascii_lowercase();
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(UserdirError::InvalidSelector(selector.to_string()));
    }

    let mut matches = users
        .iter()
        .filter(|u| u.id.as_uuid().simple().to_string().starts_with(&prefix));
    match (matches.next(), matches.next()) {
        (Some(user), None) => Ok(user.id),
        (Some(_), Some(_)) => Err(UserdirError::AmbiguousSelector(selector.to_string())),
        (None, _) => Err(UserdirError::InvalidSelector(selector.to_string())),
    }
}

pub fn resolve_selectors<I: AsRef<str>>(users: &[UserRecord], selectors: &[I]) -> Result<Vec<UserId>> {
    selectors
        .iter()
        .map(|s| resolve_selector(users, s.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user_with_id(id: &str) -> UserRecord {
        let id = UserId::from(Uuid::parse_str(id).unwrap());
        UserRecord::new(id, "u", "u@example.com", "1")
    }

    fn users() -> Vec<UserRecord> {
        vec![
            user_with_id("aaaa1111-0000-4000-8000-000000000001"),
            user_with_id("aaaa2222-0000-4000-8000-000000000002"),
            user_with_id("bbbb3333-0000-4000-8000-000000000003"),
        ]
    }

    #[test]
    fn position_selects_in_list_order() {
        let users = users();
        assert_eq!(resolve_selector(&users, "1").unwrap(), users[0].id);
        assert_eq!(resolve_selector(&users, "3").unwrap(), users[2].id);
    }

    #[test]
    fn out_of_range_position_is_not_found() {
        let users = users();
        assert!(resolve_selector(&users, "0").is_err());
        assert!(resolve_selector(&users, "9").is_err());
    }

    #[test]
    fn number_past_the_end_never_matches_an_id_prefix() {
        let users = vec![
            user_with_id("11111111-0000-4000-8000-000000000001"),
            user_with_id("22222222-0000-4000-8000-000000000002"),
            user_with_id("4bbb3333-0000-4000-8000-000000000003"),
        ];
        assert!(matches!(
            resolve_selector(&users, "4"),
            Err(UserdirError::InvalidSelector(s)) if s == "4"
        ));
        assert_eq!(resolve_selector(&users, "3").unwrap(), users[2].id);
        assert_eq!(resolve_selector(&users, "4bbb").unwrap(), users[2].id);
    }

    #[test]
    fn full_uuid_must_exist() {
        let users = users();
        let id = users[1].id.to_string();
        assert_eq!(resolve_selector(&users, &id).unwrap(), users[1].id);

        let stranger = UserId::new().to_string();
        assert!(matches!(
            resolve_selector(&users, &stranger),
            Err(UserdirError::UserNotFound(_))
        ));
    }

    #[test]
    fn unique_prefix_resolves() {
        let users = users();
        assert_eq!(resolve_selector(&users, "bbbb").unwrap(), users[2].id);
        assert_eq!(resolve_selector(&users, "AAAA2").unwrap(), users[1].id);
    }

    #[test]
    fn shared_prefix_is_ambiguous() {
        assert!(matches!(
            resolve_selector(&users(), "aaaa"),
            Err(UserdirError::AmbiguousSelector(_))
        ));
    }

    #[test]
    fn non_hex_is_invalid() {
        assert!(matches!(
            resolve_selector(&users(), "alice"),
            Err(UserdirError::InvalidSelector(_))
        ));
    }

    #[test]
    fn resolves_all_or_fails() {
        let users = users();
        let ids = resolve_selectors(&users, &["1", "bbbb"]).unwrap();
        assert_eq!(ids, vec![users[0].id, users[2].id]);
        assert!(resolve_selectors(&users, &["1", "zz"]).is_err());
    }
}
