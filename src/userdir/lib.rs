//! # Userdir Architecture
//!
//! Userdir is a small user-directory editor: an ordered list of user records
//! edited through an add/edit form, plus two display preferences (language
//! and theme). It is a **UI-agnostic library** with a thin CLI client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts for form fields, renders       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One method per user intent (create, edit, save, ...)     │
//! │  - Resolves list positions / id prefixes to ids             │
//! │  - snapshot() for re-rendering after every intent           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Drives the edit session and the stores                   │
//! │  - Returns localized, structured CmdResult values           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (session.rs, validation.rs, store/)                   │
//! │  - EditSession state machine, save-time validation          │
//! │  - UserStore / PreferenceStore over a StorageBackend        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Form Lifecycle
//!
//! A record travels from the list into an [`session::EditSession`] draft
//! (blank for "add", a copy for "edit"), gets edited field by field without
//! any checks, and is validated only on save. A failed save reports the
//! first broken field (username, then email, then age) and leaves the draft
//! open; a successful save appends or replaces the record and closes the
//! form. Cancel drops the draft without touching storage.
//!
//! ## No Hidden State
//!
//! All state lives in one explicitly constructed [`state::DirectoryState`],
//! owned by [`api::DirectoryApi`]. Nothing is process-global.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per intent
//! - [`session`]: The edit session state machine
//! - [`validation`]: Save-time checks and the email pattern
//! - [`store`]: Storage backends, the record store, the preference store
//! - [`state`]: The state container and its render snapshot
//! - [`model`]: `UserRecord`, `UserId`, `Field`, `Language`, `Theme`
//! - [`i18n`]: English and Russian message tables
//! - [`config`]: CLI configuration (`config.json`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod i18n;
pub mod model;
pub mod session;
pub mod state;
pub mod store;
pub mod validation;
