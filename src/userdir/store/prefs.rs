use super::backend::{StorageBackend, LANGUAGE_KEY, THEME_KEY};
use crate::error::Result;
use crate::model::{Language, Theme};
use std::rc::Rc;
use std::str::FromStr;
use tracing::{debug, warn};

/// Fallback values used when storage holds no usable preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreferenceDefaults {
    pub language: Language,
    pub theme: Theme,
}

/// Display language and theme. Each slot is independent and persisted
/// under its own key as soon as it changes.
pub struct PreferenceStore<B: StorageBackend> {
    backend: Rc<B>,
    language: Language,
    theme: Theme,
}

impl<B: StorageBackend> PreferenceStore<B> {
    pub fn load(backend: Rc<B>, defaults: PreferenceDefaults) -> Self {
        let language = read_slot(&*backend, LANGUAGE_KEY, defaults.language);
        let theme = read_slot(&*backend, THEME_KEY, defaults.theme);
        Self {
            backend,
            language,
            theme,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.backend.set(LANGUAGE_KEY, language.as_str())?;
        debug!(%language, "language changed");
        self.language = language;
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.backend.set(THEME_KEY, theme.as_str())?;
        debug!(%theme, "theme changed");
        self.theme = theme;
        Ok(())
    }
}

fn read_slot<B, T>(backend: &B, key: &str, default: T) -> T
where
    B: StorageBackend,
    T: FromStr<Err = String>,
{
    match backend.get(key) {
        Ok(Some(raw)) => T::from_str(raw.trim()).unwrap_or_else(|e| {
            warn!(key, error = %e, "ignoring stored preference");
            default
        }),
        Ok(None) => default,
        Err(e) => {
            warn!(key, error = %e, "could not read preference");
            default
        }
    }
}
