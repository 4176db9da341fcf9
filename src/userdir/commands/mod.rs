//! # Command Layer
//!
//! Each user intent lives in its own submodule as a plain function over a
//! [`DirectoryState`]. Commands mutate state through the stores and the edit
//! session, then describe what happened in a [`CmdResult`].
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** beyond the storage backend: no stdout, no prompts
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Expected failures are data
//!
//! A save that fails validation is not an `Err`: the session stays open and
//! the result carries an error-level message plus [`CmdResult::attention`],
//! the field the form should focus. `Err` is reserved for things the user
//! cannot fix by editing the draft (unknown ids, storage failures, misuse of
//! the session).
//!
//! User-facing messages are localized with the current display language.
//!
//! ## Command Modules
//!
//! - [`create`]: open a blank draft
//! - [`edit`]: open a draft from an existing record
//! - [`draft`]: change one field of the open draft
//! - [`save`]: validate and store the draft
//! - [`cancel`]: discard the draft
//! - [`delete`]: remove records
//! - [`preferences`]: language and theme
//! - [`config`]: CLI configuration
//! - [`helpers`]: selector resolution

use crate::config::UserdirConfig;
use crate::i18n::Messages;
use crate::model::{Field, UserRecord};
use crate::state::DirectoryState;
use crate::store::StorageBackend;

pub mod cancel;
pub mod config;
pub mod create;
pub mod delete;
pub mod draft;
pub mod edit;
pub mod helpers;
pub mod preferences;
pub mod save;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_users: Vec<UserRecord>,
    /// Field the form should focus after a failed save.
    pub attention: Option<Field>,
    pub config: Option<UserdirConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_users(mut self, users: Vec<UserRecord>) -> Self {
        self.affected_users = users;
        self
    }

    pub fn with_config(mut self, config: UserdirConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when a save was rejected and the draft needs another pass.
    pub fn needs_attention(&self) -> bool {
        self.attention.is_some()
    }
}

/// Message table for the state's current display language.
pub(crate) fn messages<B: StorageBackend>(state: &DirectoryState<B>) -> &'static Messages {
    Messages::for_language(state.prefs.language())
}
