//! # Userdir CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/userdir/cli/` and
//! this file only invokes `cli::run()` and handles process termination.
//!
//! - `cli/setup.rs`: clap argument definitions
//! - `cli/commands.rs`: context wiring and per-command handlers
//! - `cli/form.rs`: the interactive add/edit form
//! - `cli/render.rs` + `cli/styles.rs`: themed, localized terminal output
//! - `cli/logging.rs`: tracing subscriber setup

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
