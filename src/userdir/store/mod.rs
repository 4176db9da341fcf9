//! # Storage Layer
//!
//! Durable state lives in a tiny key-value store, the same shape as browser
//! local storage: string keys, string values, one entry per concern.
//!
//! ## Layers
//!
//! - [`backend::StorageBackend`]: raw key-value I/O.
//!   - [`fs_backend::FsBackend`]: production, one file per key.
//!   - [`mem_backend::MemBackend`]: testing, nothing touches the disk.
//! - [`users::UserStore`]: the ordered record collection (`users` key).
//! - [`prefs::PreferenceStore`]: language and theme (`language`, `theme` keys).
//!
//! Both stores hold the backend through an `Rc`, so one backend instance
//! serves the whole process. Each store writes only its own keys, so there
//! is no ordering between them beyond "last write wins" per key.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── users          # [{"id": "...", "username": "...", "email": "...", "age": "..."}]
//! ├── language       # en
//! ├── theme          # dark
//! └── config.json    # CLI configuration (see config.rs)
//! ```
//!
//! Reads never fail the process: absent or unparsable entries fall back to
//! an empty collection or the default preference.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod prefs;
pub mod users;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
pub use prefs::{PreferenceDefaults, PreferenceStore};
pub use users::UserStore;
