use crate::model::{EditMode, Language, Theme, UserRecord};
use crate::session::EditSession;
use crate::store::{PreferenceDefaults, PreferenceStore, StorageBackend, UserStore};
use std::rc::Rc;

/// Everything the editor knows, in one explicitly constructed value.
///
/// There are no process-wide singletons: whoever drives the editor builds a
/// `DirectoryState` once and passes it to the commands.
pub struct DirectoryState<B: StorageBackend> {
    pub users: UserStore<B>,
    pub prefs: PreferenceStore<B>,
    pub session: EditSession,
}

impl<B: StorageBackend> DirectoryState<B> {
    /// Load both stores from `backend`. Starts with no edit in progress.
    pub fn load(backend: B, defaults: PreferenceDefaults) -> Self {
        let backend = Rc::new(backend);
        Self {
            users: UserStore::load(Rc::clone(&backend)),
            prefs: PreferenceStore::load(backend, defaults),
            session: EditSession::new(),
        }
    }

    pub fn snapshot(&self) -> DirectoryView {
        DirectoryView {
            language: self.prefs.language(),
            theme: self.prefs.theme(),
            users: self.users.list().to_vec(),
            form: match &self.session {
                EditSession::Open { draft, mode } => Some(FormView {
                    draft: draft.clone(),
                    mode: *mode,
                }),
                EditSession::Closed => None,
            },
        }
    }
}

/// Render model: what a presentation layer needs to redraw the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryView {
    pub language: Language,
    pub theme: Theme,
    pub users: Vec<UserRecord>,
    /// `Some` while the edit form is visible.
    pub form: Option<FormView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub draft: UserRecord,
    pub mode: EditMode,
}
