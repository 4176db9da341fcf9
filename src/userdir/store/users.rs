use super::backend::{StorageBackend, USERS_KEY};
use crate::error::{Result, UserdirError};
use crate::model::{UserId, UserRecord};
use std::rc::Rc;
use tracing::{debug, warn};

/// The ordered collection of user records.
///
/// Order is meaningful: new records are appended, edited records keep their
/// position. Ids are unique across the collection.
///
/// Every mutation re-serializes the whole collection under [`USERS_KEY`].
/// The write happens on the candidate collection first, so a failed write
/// leaves the in-memory list exactly as it was.
pub struct UserStore<B: StorageBackend> {
    backend: Rc<B>,
    users: Vec<UserRecord>,
}

impl<B: StorageBackend> UserStore<B> {
    /// Load the collection from the backend.
    ///
    /// Missing or unreadable data is treated as an empty directory: a broken
    /// `users` entry must never keep the editor from starting.
    pub fn load(backend: Rc<B>) -> Self {
        let users = match backend.get(USERS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<UserRecord>>(&raw) {
                Ok(users) => dedup_ids(users),
                Err(e) => {
                    warn!(error = %e, "stored users are unparsable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not read stored users, starting empty");
                Vec::new()
            }
        };
        debug!(count = users.len(), "loaded users");
        Self { backend, users }
    }

    pub fn list(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn get(&self, id: &UserId) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == *id)
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn add(&mut self, record: UserRecord) -> Result<()> {
        if self.contains(&record.id) {
            return Err(UserdirError::DuplicateUser(record.id));
        }
        let mut next = self.users.clone();
        next.push(record);
        self.commit(next)
    }

    pub fn update(&mut self, record: UserRecord) -> Result<()> {
        let position = self
            .users
            .iter()
            .position(|u| u.id == record.id)
            .ok_or(UserdirError::UserNotFound(record.id))?;
        let mut next = self.users.clone();
        next[position] = record;
        self.commit(next)
    }

    /// Remove the record with `id`. Returns whether anything was removed;
    /// an unknown id is a no-op and does not touch storage.
    pub fn remove(&mut self, id: &UserId) -> Result<bool> {
        if !self.contains(id) {
            return Ok(false);
        }
        let next: Vec<UserRecord> = self.users.iter().filter(|u| u.id != *id).cloned().collect();
        self.commit(next)?;
        Ok(true)
    }

    fn commit(&mut self, next: Vec<UserRecord>) -> Result<()> {
        let raw = serde_json::to_string(&next).map_err(UserdirError::Serialization)?;
        self.backend.set(USERS_KEY, &raw)?;
        debug!(count = next.len(), "persisted users");
        self.users = next;
        Ok(())
    }
}

/// Hand-edited storage could repeat an id; keep the first occurrence.
fn dedup_ids(users: Vec<UserRecord>) -> Vec<UserRecord> {
    let mut seen = std::collections::HashSet::new();
    let before = users.len();
    let kept: Vec<UserRecord> = users.into_iter().filter(|u| seen.insert(u.id)).collect();
    if kept.len() != before {
        warn!(dropped = before - kept.len(), "dropped users with repeated ids");
    }
    kept
}
