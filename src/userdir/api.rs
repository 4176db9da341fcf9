//! # API Facade
//!
//! The single entry point for every userdir operation, whatever the UI.
//! It mirrors the intents a presentation layer can raise: create, edit,
//! delete, change a draft field, save, cancel, set language, set theme.
//!
//! The API:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (list positions and id prefixes to [`UserId`]s)
//! - **Returns structured types** (`Result<CmdResult>`, [`DirectoryView`])
//!
//! It does no business logic and no terminal I/O. After each intent the UI
//! redraws from [`DirectoryApi::snapshot`]; there is no partial update
//! contract.
//!
//! `DirectoryApi<B: StorageBackend>` is generic over storage:
//! - Production: `DirectoryApi<FsBackend>`
//! - Testing: `DirectoryApi<MemBackend>`

use crate::commands;
use crate::config::UserdirConfig;
use crate::error::Result;
use crate::model::{Field, Language, Theme, UserId, UserRecord};
use crate::state::{DirectoryState, DirectoryView};
use crate::store::StorageBackend;
use std::path::PathBuf;

pub struct DirectoryApi<B: StorageBackend> {
    state: DirectoryState<B>,
    config_dir: PathBuf,
}

impl<B: StorageBackend> DirectoryApi<B> {
    /// Load the directory from `backend`, using `config` for preference
    /// fallbacks. `config_dir` is where `config.json` lives.
    pub fn open(backend: B, config: &UserdirConfig, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            state: DirectoryState::load(backend, config.preference_defaults()),
            config_dir: config_dir.into(),
        }
    }

    pub fn snapshot(&self) -> DirectoryView {
        self.state.snapshot()
    }

    pub fn users(&self) -> &[UserRecord] {
        self.state.users.list()
    }

    pub fn language(&self) -> Language {
        self.state.prefs.language()
    }

    pub fn theme(&self) -> Theme {
        self.state.prefs.theme()
    }

    /// The open draft, if the form is showing.
    pub fn draft(&self) -> Option<&UserRecord> {
        self.state.session.draft()
    }

    pub fn resolve(&self, selector: &str) -> Result<UserId> {
        commands::helpers::resolve_selector(self.state.users.list(), selector)
    }

    pub fn resolve_all<I: AsRef<str>>(&self, selectors: &[I]) -> Result<Vec<UserId>> {
        commands::helpers::resolve_selectors(self.state.users.list(), selectors)
    }

    pub fn request_create(&mut self) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.state)
    }

    pub fn request_edit(&mut self, id: &UserId) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.state, id)
    }

    pub fn request_delete(&mut self, ids: &[UserId]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.state, ids)
    }

    pub fn draft_field_changed(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<commands::CmdResult> {
        commands::draft::run(&mut self.state, field, value)
    }

    pub fn request_save(&mut self) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.state)
    }

    pub fn request_cancel(&mut self) -> Result<commands::CmdResult> {
        commands::cancel::run(&mut self.state)
    }

    pub fn set_language(&mut self, language: Language) -> Result<commands::CmdResult> {
        commands::preferences::set_language(&mut self.state, language)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<commands::CmdResult> {
        commands::preferences::set_theme(&mut self.state, theme)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemBackend;
    use crate::store::backend::{THEME_KEY, USERS_KEY};

    fn api() -> DirectoryApi<MemBackend> {
        DirectoryApi::open(MemBackend::new(), &UserdirConfig::default(), "/nonexistent")
    }

    #[test]
    fn create_flow_is_visible_in_snapshot() {
        let mut api = api();
        api.request_create().unwrap();

        let view = api.snapshot();
        let form = view.form.expect("form visible");
        assert!(form.draft.username.is_empty());

        api.draft_field_changed(Field::Username, "alice").unwrap();
        api.draft_field_changed(Field::Email, "alice@example.com").unwrap();
        api.draft_field_changed(Field::Age, "30").unwrap();
        let result = api.request_save().unwrap();
        assert!(!result.needs_attention());

        let view = api.snapshot();
        assert!(view.form.is_none());
        assert_eq!(view.users.len(), 1);
        assert_eq!(view.users[0].username, "alice");
    }

    #[test]
    fn cancel_hides_form() {
        let mut api = api();
        api.request_create().unwrap();
        api.request_cancel().unwrap();
        assert!(api.snapshot().form.is_none());
        assert!(api.users().is_empty());
    }

    #[test]
    fn edit_by_position() {
        let mut api = api();
        api.request_create().unwrap();
        api.draft_field_changed(Field::Username, "alice").unwrap();
        api.draft_field_changed(Field::Email, "alice@example.com").unwrap();
        api.draft_field_changed(Field::Age, "30").unwrap();
        api.request_save().unwrap();

        let id = api.resolve("1").unwrap();
        api.request_edit(&id).unwrap();
        assert_eq!(api.draft().map(|d| d.id), Some(id));
    }

    #[test]
    fn preferences_reach_snapshot() {
        let mut api = api();
        api.set_language(Language::Ru).unwrap();
        api.set_theme(Theme::Dark).unwrap();

        let view = api.snapshot();
        assert_eq!(view.language, Language::Ru);
        assert_eq!(view.theme, Theme::Dark);
    }

    #[test]
    fn seeded_storage_is_loaded() {
        let record = UserRecord::new(UserId::new(), "bob", "bob@example.com", "41");
        let backend = MemBackend::new()
            .with_value(USERS_KEY, &serde_json::to_string(&vec![record.clone()]).unwrap())
            .with_value(THEME_KEY, "dark");
        let api = DirectoryApi::open(backend, &UserdirConfig::default(), "/nonexistent");

        assert_eq!(api.users(), &[record]);
        assert_eq!(api.theme(), Theme::Dark);
    }
}
