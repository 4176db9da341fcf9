use super::form::{complete, FormOutcome, Prompter};
use super::logging::init_tracing;
use super::render::{
    print_messages, render_config, render_language, render_list, render_theme, render_user,
};
use super::setup::{Cli, Commands, FieldArgs};
use clap::Parser;
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use userdir::api::{ConfigAction, DirectoryApi};
use userdir::config::UserdirConfig;
use userdir::error::{Result, UserdirError};
use userdir::model::{Field, Language, Theme};
use userdir::store::FsBackend;

const HOME_ENV: &str = "USERDIR_HOME";

struct AppContext {
    api: DirectoryApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Show { selector }) => handle_show(&ctx, &selector),
        Some(Commands::Add { fields, no_input }) => handle_add(&mut ctx, &fields, no_input),
        Some(Commands::Edit {
            selector,
            fields,
            no_input,
        }) => handle_edit(&mut ctx, &selector, &fields, no_input),
        Some(Commands::Delete { selectors }) => handle_delete(&mut ctx, &selectors),
        Some(Commands::Lang { value }) => handle_lang(&mut ctx, value),
        Some(Commands::Theme { value }) => handle_theme(&mut ctx, value),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(home) = &cli.home {
        return Ok(home.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "userdir", "userdir")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| UserdirError::Store("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    debug!(path = %data_dir.display(), "using data directory");

    let config = UserdirConfig::load(&data_dir)?;
    let backend = FsBackend::new(data_dir.clone());
    let api = DirectoryApi::open(backend, &config, data_dir);

    Ok(AppContext { api })
}

/// Redraw the list from current state, as after any change.
fn rerender(ctx: &AppContext) {
    print!("{}", render_list(&ctx.api.snapshot()));
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    rerender(ctx);
    Ok(())
}

fn handle_show(ctx: &AppContext, selector: &str) -> Result<()> {
    let id = ctx.api.resolve(selector)?;
    let view = ctx.api.snapshot();
    let user = view
        .users
        .iter()
        .find(|u| u.id == id)
        .ok_or(UserdirError::UserNotFound(id))?;
    print!("{}", render_user(&view, user));
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: &FieldArgs, no_input: bool) -> Result<()> {
    ctx.api.request_create()?;
    apply_fields(ctx, fields)?;

    let missing: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|f| fields.get(*f).is_none())
        .collect();
    finish_form(ctx, &missing, no_input)
}

fn handle_edit(
    ctx: &mut AppContext,
    selector: &str,
    fields: &FieldArgs,
    no_input: bool,
) -> Result<()> {
    let id = ctx.api.resolve(selector)?;
    ctx.api.request_edit(&id)?;
    apply_fields(ctx, fields)?;

    // Flags mean "change just these"; no flags means walk the whole form.
    let ask: Vec<Field> = if fields.is_empty() {
        Field::ALL.to_vec()
    } else {
        Vec::new()
    };
    finish_form(ctx, &ask, no_input)
}

fn apply_fields(ctx: &mut AppContext, fields: &FieldArgs) -> Result<()> {
    for (field, value) in fields.provided() {
        ctx.api.draft_field_changed(field, value)?;
    }
    Ok(())
}

fn finish_form(ctx: &mut AppContext, ask_first: &[Field], no_input: bool) -> Result<()> {
    let outcome = if no_input {
        complete::<_, io::StdinLock<'static>, io::Stderr>(&mut ctx.api, None, &[])?
    } else {
        let mut prompter = Prompter::new(io::stdin().lock(), io::stderr());
        complete(&mut ctx.api, Some(&mut prompter), ask_first)?
    };

    match outcome {
        FormOutcome::Saved(result) => {
            print_messages(&result.messages);
            rerender(ctx);
        }
        FormOutcome::Cancelled(result) => print_messages(&result.messages),
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: &[String]) -> Result<()> {
    let ids = ctx.api.resolve_all(selectors)?;
    let result = ctx.api.request_delete(&ids)?;
    print_messages(&result.messages);
    rerender(ctx);
    Ok(())
}

fn handle_lang(ctx: &mut AppContext, value: Option<Language>) -> Result<()> {
    match value {
        None => print!("{}", render_language(&ctx.api.snapshot())),
        Some(language) => {
            let result = ctx.api.set_language(language)?;
            print_messages(&result.messages);
            rerender(ctx);
        }
    }
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, value: Option<Theme>) -> Result<()> {
    match value {
        None => print!("{}", render_theme(&ctx.api.snapshot())),
        Some(theme) => {
            let result = ctx.api.set_theme(theme)?;
            print_messages(&result.messages);
            rerender(ctx);
        }
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
