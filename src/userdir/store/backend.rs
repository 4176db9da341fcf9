use crate::error::Result;

/// Key under which the full user collection is stored (JSON array).
pub const USERS_KEY: &str = "users";
/// Key holding the display language (`en` or `ru`).
pub const LANGUAGE_KEY: &str = "language";
/// Key holding the display theme (`light` or `dark`).
pub const THEME_KEY: &str = "theme";

/// Abstract interface for raw key-value storage.
///
/// This trait handles the "how" of persistence (filesystem vs memory), while
/// the stores built on top of it handle the "what" (record lists,
/// preferences). Values are plain strings; callers own their encoding.
///
/// All methods take `&self`: implementations are either stateless I/O or use
/// interior mutability, which lets several stores share one backend.
pub trait StorageBackend {
    /// Read the value under `key`.
    /// Returns Ok(None) if nothing has been stored there yet.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value under `key`.
    /// MUST be atomic: readers see either the old or the new value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
