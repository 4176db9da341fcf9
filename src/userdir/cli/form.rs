//! The add/edit form on a line-oriented terminal.
//!
//! Fields are asked for one at a time. After a rejected save the form asks
//! again for the one field the validator pointed at, then retries, until the
//! save goes through or the user cancels (`:q` or end of input).

use super::render::{format_message, render_form_header};
use std::io::{self, BufRead, Write};
use userdir::api::{CmdResult, DirectoryApi};
use userdir::error::{Result, UserdirError};
use userdir::i18n::Messages;
use userdir::model::Field;
use userdir::store::StorageBackend;

const CANCEL_INPUT: &str = ":q";

pub(super) enum FormOutcome {
    Saved(CmdResult),
    Cancelled(CmdResult),
}

enum Answer {
    Value(String),
    Keep,
    Cancel,
}

/// Line-based question/answer channel. Prompts go to `output`, answers are
/// read from `input`.
pub(super) struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, label: &str, current: &str) -> io::Result<Answer> {
        if current.is_empty() {
            write!(self.output, "{}: ", label)?;
        } else {
            write!(self.output, "{} [{}]: ", label, current)?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(Answer::Cancel);
        }
        let line = line.trim_end_matches(['\n', '\r']);
        Ok(match line {
            CANCEL_INPUT => Answer::Cancel,
            "" => Answer::Keep,
            value => Answer::Value(value.to_string()),
        })
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }
}

/// Drive an already opened form to completion.
///
/// With a prompter, each field in `ask_first` is asked for up front and any
/// rejected field is asked for again. Without one, a rejected save cancels
/// the form and returns the validator's message as the error.
pub(super) fn complete<B, R, W>(
    api: &mut DirectoryApi<B>,
    mut prompter: Option<&mut Prompter<R, W>>,
    ask_first: &[Field],
) -> Result<FormOutcome>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    if let Some(p) = prompter.as_deref_mut() {
        let view = api.snapshot();
        if let Some(form) = &view.form {
            p.say(&render_form_header(&view, form))?;
        }
        for field in ask_first {
            if !ask_field(api, p, *field)? {
                return Ok(FormOutcome::Cancelled(api.request_cancel()?));
            }
        }
    }

    loop {
        let result = api.request_save()?;
        let Some(field) = result.attention else {
            return Ok(FormOutcome::Saved(result));
        };

        let Some(p) = prompter.as_deref_mut() else {
            api.request_cancel()?;
            let reason = result
                .messages
                .first()
                .map(|m| m.content.clone())
                .unwrap_or_else(|| format!("invalid {}", field));
            return Err(UserdirError::Api(reason));
        };

        for message in &result.messages {
            p.say(&format!("{}\n", format_message(message)))?;
        }
        if !ask_field(api, p, field)? {
            return Ok(FormOutcome::Cancelled(api.request_cancel()?));
        }
    }
}

/// Ask for one field and apply the answer. Returns false on cancel.
fn ask_field<B, R, W>(api: &mut DirectoryApi<B>, p: &mut Prompter<R, W>, field: Field) -> Result<bool>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let label = Messages::for_language(api.language()).field_label(field);
    let current = api
        .draft()
        .map(|d| d.field(field).to_string())
        .ok_or(UserdirError::NoOpenSession)?;

    match p.ask(label, &current)? {
        Answer::Value(value) => {
            api.draft_field_changed(field, value)?;
            Ok(true)
        }
        Answer::Keep => Ok(true),
        Answer::Cancel => Ok(false),
    }
}
