//! Fixed string tables for the two supported display languages.

use crate::model::{EditMode, Field, Language, Theme};
use crate::validation::ValidationError;

pub struct Messages {
    pub incomplete: &'static str,
    pub invalid_email: &'static str,
    pub username: &'static str,
    pub email: &'static str,
    pub age: &'static str,
    pub select_language: &'static str,
    pub theme: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
    pub add_user: &'static str,
    pub edit_user: &'static str,
    pub no_users: &'static str,
    pub user_added: &'static str,
    pub user_updated: &'static str,
    pub user_deleted: &'static str,
    pub user_missing: &'static str,
    pub cancelled: &'static str,
}

static EN: Messages = Messages {
    incomplete: "Please fill out all fields",
    invalid_email: "Invalid email format",
    username: "Username",
    email: "Email",
    age: "Age",
    select_language: "Select Language:",
    theme: "Theme:",
    light: "Light",
    dark: "Dark",
    add_user: "Add User",
    edit_user: "Edit User",
    no_users: "No users yet.",
    user_added: "User added",
    user_updated: "User updated",
    user_deleted: "User deleted",
    user_missing: "No such user",
    cancelled: "Cancelled",
};

static RU: Messages = Messages {
    incomplete: "Пожалуйста, заполните все поля",
    invalid_email: "Неверный формат электронной почты",
    username: "Имя пользователя",
    email: "Электронная почта",
    age: "Возраст",
    select_language: "Выберите язык:",
    theme: "Тема:",
    light: "Светлый",
    dark: "Темный",
    add_user: "Добавить пользователя",
    edit_user: "Редактировать пользователя",
    no_users: "Пользователей пока нет.",
    user_added: "Пользователь добавлен",
    user_updated: "Пользователь обновлен",
    user_deleted: "Пользователь удален",
    user_missing: "Пользователь не найден",
    cancelled: "Отменено",
};

impl Messages {
    pub fn for_language(language: Language) -> &'static Messages {
        match language {
            Language::En => &EN,
            Language::Ru => &RU,
        }
    }

    pub fn field_label(&self, field: Field) -> &'static str {
        match field {
            Field::Username => self.username,
            Field::Email => self.email,
            Field::Age => self.age,
        }
    }

    pub fn theme_label(&self, theme: Theme) -> &'static str {
        match theme {
            Theme::Light => self.light,
            Theme::Dark => self.dark,
        }
    }

    pub fn form_title(&self, mode: EditMode) -> &'static str {
        match mode {
            EditMode::Create => self.add_user,
            EditMode::Edit => self.edit_user,
        }
    }

    /// The alert text shown for a failed save.
    pub fn validation(&self, error: &ValidationError) -> &'static str {
        match error {
            ValidationError::IncompleteField(_) => self.incomplete,
            ValidationError::InvalidEmail => self.invalid_email,
        }
    }
}

/// Human name of a language, always in that language.
pub fn language_name(language: Language) -> &'static str {
    match language {
        Language::En => "English",
        Language::Ru => "Русский",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_follow_language() {
        let en = Messages::for_language(Language::En);
        let ru = Messages::for_language(Language::Ru);

        assert_eq!(
            en.validation(&ValidationError::IncompleteField(Field::Age)),
            "Please fill out all fields"
        );
        assert_eq!(
            ru.validation(&ValidationError::InvalidEmail),
            "Неверный формат электронной почты"
        );
    }

    #[test]
    fn form_title_depends_on_mode() {
        let en = Messages::for_language(Language::En);
        assert_eq!(en.form_title(EditMode::Create), "Add User");
        assert_eq!(en.form_title(EditMode::Edit), "Edit User");
    }
}
