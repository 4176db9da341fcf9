use crate::commands::{messages, CmdMessage, CmdResult};
use crate::error::Result;
use crate::i18n::language_name;
use crate::model::{Language, Theme};
use crate::state::DirectoryState;
use crate::store::StorageBackend;

pub fn set_language<B: StorageBackend>(
    state: &mut DirectoryState<B>,
    language: Language,
) -> Result<CmdResult> {
    state.prefs.set_language(language)?;
    let mut result = CmdResult::default();
    // Confirmation is already in the newly selected language.
    result.add_message(CmdMessage::success(format!(
        "{} {}",
        messages(state).select_language,
        language_name(language)
    )));
    Ok(result)
}

pub fn set_theme<B: StorageBackend>(state: &mut DirectoryState<B>, theme: Theme) -> Result<CmdResult> {
    state.prefs.set_theme(theme)?;
    let msgs = messages(state);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} {}",
        msgs.theme,
        msgs.theme_label(theme)
    )));
    Ok(result)
}
