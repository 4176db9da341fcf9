//! # Edit Session
//!
//! The transient state behind the add/edit form. A session is either
//! [`EditSession::Closed`] or [`EditSession::Open`] with a draft and a mode:
//!
//! ```text
//!            begin_create(id)               save() ok
//!   Closed ------------------> Open -------------------> Closed
//!          begin_edit(record)   |  ^        cancel()
//!                               |  |
//!               update_field    +--+  save() failed validation
//! ```
//!
//! The draft is never validated while it is being typed. Validation runs on
//! `save()`, reports the first broken field only, and keeps the session open
//! so the form can point the user at that field and try again.
//!
//! Nothing here outlives one add/edit operation; drafts are never persisted.

use crate::error::{Result, UserdirError};
use crate::model::{EditMode, Field, UserId, UserRecord};
use crate::store::{StorageBackend, UserStore};
use crate::validation::validate;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Closed,
    Open { draft: UserRecord, mode: EditMode },
}

impl EditSession {
    pub fn new() -> Self {
        Self::Closed
    }

    /// Whether the edit form is showing.
    pub fn is_open(&self) -> bool {
        matches!(self, EditSession::Open { .. })
    }

    pub fn draft(&self) -> Option<&UserRecord> {
        match self {
            EditSession::Open { draft, .. } => Some(draft),
            EditSession::Closed => None,
        }
    }

    pub fn mode(&self) -> Option<EditMode> {
        match self {
            EditSession::Open { mode, .. } => Some(*mode),
            EditSession::Closed => None,
        }
    }

    /// Open a blank draft that will be appended on save.
    pub fn begin_create(&mut self, id: UserId) -> Result<()> {
        self.open(UserRecord::empty(id), EditMode::Create)
    }

    /// Open a copy of `record` that will replace it on save.
    pub fn begin_edit(&mut self, record: &UserRecord) -> Result<()> {
        self.open(record.clone(), EditMode::Edit)
    }

    fn open(&mut self, draft: UserRecord, mode: EditMode) -> Result<()> {
        if self.is_open() {
            return Err(UserdirError::SessionAlreadyOpen);
        }
        debug!(id = %draft.id, ?mode, "edit session opened");
        *self = EditSession::Open { draft, mode };
        Ok(())
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        match self {
            EditSession::Open { draft, .. } => {
                draft.set_field(field, value);
                Ok(())
            }
            EditSession::Closed => Err(UserdirError::NoOpenSession),
        }
    }

    /// Discard the draft. Returns whether a session was open.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.is_open();
        if was_open {
            debug!("edit session cancelled");
        }
        *self = EditSession::Closed;
        was_open
    }

    /// Validate the draft and write it to `store`.
    ///
    /// On success the session closes and the saved record is returned. On a
    /// validation error ([`UserdirError::Validation`]) or a store error the
    /// session stays open with the draft intact.
    pub fn save<B: StorageBackend>(&mut self, store: &mut UserStore<B>) -> Result<UserRecord> {
        let (draft, mode) = match self {
            EditSession::Open { draft, mode } => (draft, *mode),
            EditSession::Closed => return Err(UserdirError::NoOpenSession),
        };

        validate(draft)?;

        match mode {
            EditMode::Edit => store.update(draft.clone())?,
            EditMode::Create => store.add(draft.clone())?,
        }

        let saved = draft.clone();
        debug!(id = %saved.id, ?mode, "edit session saved");
        *self = EditSession::Closed;
        Ok(saved)
    }
}
