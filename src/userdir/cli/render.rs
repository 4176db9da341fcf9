use super::styles::palette;
use colored::Colorize;
use std::fmt::Write as _;
use unicode_width::UnicodeWidthStr;
use userdir::api::{CmdMessage, MessageLevel};
use userdir::config::UserdirConfig;
use userdir::i18n::{language_name, Messages};
use userdir::model::{Field, UserRecord};
use userdir::state::{DirectoryView, FormView};

const INDEX_HEADER: &str = "#";
const ID_HEADER: &str = "ID";
const COLUMN_GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", format_message(message));
    }
}

pub(super) fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

/// One table line with every cell already padded to its column width.
///
/// Layout (widths, padding) is settled here; styling picks a palette entry
/// per column afterwards, so the two never mix.
#[derive(Debug, PartialEq, Eq)]
struct ListLine {
    index: String,
    id: String,
    username: String,
    email: String,
    age: String,
}

impl ListLine {
    fn cells(&self) -> [&str; 5] {
        [&self.index, &self.id, &self.username, &self.email, &self.age]
    }
}

struct ListLayout {
    header: ListLine,
    rows: Vec<ListLine>,
}

fn layout_list(msgs: &Messages, users: &[UserRecord]) -> ListLayout {
    let header = [INDEX_HEADER, ID_HEADER, msgs.username, msgs.email, msgs.age].map(String::from);
    let rows: Vec<[String; 5]> = users
        .iter()
        .enumerate()
        .map(|(i, u)| {
            [
                format!("{}.", i + 1),
                u.id.short(),
                u.username.clone(),
                u.email.clone(),
                u.age.clone(),
            ]
        })
        .collect();

    let mut widths = header.each_ref().map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    // The last column is never padded.
    let line = |cells: &[String; 5]| ListLine {
        index: pad(&cells[0], widths[0]),
        id: pad(&cells[1], widths[1]),
        username: pad(&cells[2], widths[2]),
        email: pad(&cells[3], widths[3]),
        age: cells[4].clone(),
    };

    ListLayout {
        header: line(&header),
        rows: rows.iter().map(line).collect(),
    }
}

/// The user list as a table, in the view's language and theme.
pub(super) fn render_list(view: &DirectoryView) -> String {
    let msgs = Messages::for_language(view.language);
    let colors = palette(view.theme);

    if view.users.is_empty() {
        return format!("{}\n", colors.muted.apply_to(msgs.no_users));
    }

    let layout = layout_list(msgs, &view.users);
    let mut out = String::new();

    let header: Vec<String> = layout
        .header
        .cells()
        .iter()
        .map(|cell| colors.header.apply_to(cell).to_string())
        .collect();
    let _ = writeln!(out, "{}", header.join(COLUMN_GAP));

    for row in &layout.rows {
        let cells = [
            colors.index.apply_to(&row.index).to_string(),
            colors.muted.apply_to(&row.id).to_string(),
            colors.name.apply_to(&row.username).to_string(),
            colors.text.apply_to(&row.email).to_string(),
            colors.text.apply_to(&row.age).to_string(),
        ];
        let _ = writeln!(out, "{}", cells.join(COLUMN_GAP));
    }
    out
}

/// One user as a card: name on top, then labelled fields.
pub(super) fn render_user(view: &DirectoryView, user: &UserRecord) -> String {
    let msgs = Messages::for_language(view.language);
    let colors = palette(view.theme);

    let mut out = String::new();
    let _ = writeln!(out, "{}", colors.name.apply_to(&user.username));
    let _ = writeln!(out, "{}", colors.muted.apply_to(user.id));
    for field in [Field::Email, Field::Age] {
        let _ = writeln!(
            out,
            "{}: {}",
            colors.header.apply_to(msgs.field_label(field)),
            colors.text.apply_to(user.field(field))
        );
    }
    out
}

pub(super) fn render_form_header(view: &DirectoryView, form: &FormView) -> String {
    let msgs = Messages::for_language(view.language);
    format!(
        "{}\n",
        palette(view.theme).title.apply_to(msgs.form_title(form.mode))
    )
}

pub(super) fn render_language(view: &DirectoryView) -> String {
    let msgs = Messages::for_language(view.language);
    format!(
        "{} {} ({})\n",
        msgs.select_language,
        language_name(view.language),
        view.language
    )
}

pub(super) fn render_theme(view: &DirectoryView) -> String {
    let msgs = Messages::for_language(view.language);
    format!(
        "{} {} ({})\n",
        msgs.theme,
        msgs.theme_label(view.theme),
        view.theme
    )
}

pub(super) fn render_config(config: &UserdirConfig) -> String {
    format!(
        "default-language = {}\ndefault-theme = {}\n",
        config.default_language, config.default_theme
    )
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdir::model::{EditMode, Language, Theme, UserId};

    fn view(language: Language, users: Vec<UserRecord>) -> DirectoryView {
        DirectoryView {
            language,
            theme: Theme::Dark,
            users,
            form: None,
        }
    }

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).to_string()
    }

    #[test]
    fn empty_list_says_so() {
        assert_eq!(plain(&render_list(&view(Language::En, vec![]))), "No users yet.\n");
        assert_eq!(
            plain(&render_list(&view(Language::Ru, vec![]))),
            "Пользователей пока нет.\n"
        );
    }

    #[test]
    fn list_rows_follow_store_order() {
        let users = vec![
            UserRecord::new(UserId::new(), "alice", "alice@example.com", "30"),
            UserRecord::new(UserId::new(), "bob", "bob@example.com", "41"),
        ];
        let out = plain(&render_list(&view(Language::En, users.clone())));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("#"));
        assert!(lines[0].contains("Username"));
        assert!(lines[1].starts_with("1."));
        assert!(lines[1].contains(&users[0].id.short()));
        assert!(lines[1].contains("alice@example.com"));
        assert!(lines[2].starts_with("2."));
        assert!(lines[2].contains("bob"));
    }

    #[test]
    fn columns_align_with_wide_headers() {
        let users = vec![UserRecord::new(UserId::new(), "al", "a@b.cd", "3")];
        let out = plain(&render_list(&view(Language::Ru, users)));
        let lines: Vec<&str> = out.lines().collect();

        let header_email = lines[0].find("Электронная").unwrap();
        let row_email = lines[1].find("a@b.cd").unwrap();
        assert_eq!(
            lines[0][..header_email].width(),
            lines[1][..row_email].width()
        );
    }

    #[test]
    fn layout_pads_every_column_but_the_last() {
        let users = vec![
            UserRecord::new(UserId::new(), "alice", "alice@example.com", "30"),
            UserRecord::new(UserId::new(), "bo", "b@x.io", "7"),
        ];
        let layout = layout_list(Messages::for_language(Language::En), &users);

        assert_eq!(layout.header.username, "Username");
        assert_eq!(layout.header.email, "Email            ");
        assert_eq!(layout.header.age, "Age");
        assert_eq!(layout.rows[1].index, "2.");
        assert_eq!(layout.rows[1].username, "bo      ");
        assert_eq!(layout.rows[1].email, "b@x.io           ");
        assert_eq!(layout.rows[1].age, "7");
        for line in std::iter::once(&layout.header).chain(&layout.rows) {
            assert_eq!(line.id.width(), 8);
        }
    }

    #[test]
    fn user_card_is_localized() {
        let user = UserRecord::new(UserId::new(), "alice", "alice@example.com", "30");
        let out = plain(&render_user(&view(Language::Ru, vec![]), &user));
        assert!(out.starts_with("alice\n"));
        assert!(out.contains("Электронная почта: alice@example.com"));
        assert!(out.contains("Возраст: 30"));
    }

    #[test]
    fn form_header_depends_on_mode() {
        let v = view(Language::En, vec![]);
        let form = FormView {
            draft: UserRecord::empty(UserId::new()),
            mode: EditMode::Edit,
        };
        assert_eq!(plain(&render_form_header(&v, &form)), "Edit User\n");
    }

    #[test]
    fn preference_lines() {
        let v = view(Language::En, vec![]);
        assert_eq!(render_language(&v), "Select Language: English (en)\n");
        assert_eq!(render_theme(&v), "Theme: Dark (dark)\n");
    }
}
