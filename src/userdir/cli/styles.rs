use console::Style;
use once_cell::sync::Lazy;
use userdir::model::Theme;

pub(super) struct Palette {
    pub title: Style,
    pub header: Style,
    pub index: Style,
    pub name: Style,
    pub text: Style,
    pub muted: Style,
}

static LIGHT: Lazy<Palette> = Lazy::new(|| Palette {
    title: Style::new().blue().bold(),
    header: Style::new().black().bold().underlined(),
    index: Style::new().blue(),
    name: Style::new().black().bold(),
    text: Style::new().black(),
    muted: Style::new().color256(244),
});

static DARK: Lazy<Palette> = Lazy::new(|| Palette {
    title: Style::new().cyan().bold(),
    header: Style::new().white().bold().underlined(),
    index: Style::new().yellow(),
    name: Style::new().white().bold(),
    text: Style::new().color256(252),
    muted: Style::new().color256(245).italic(),
});

pub(super) fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}
