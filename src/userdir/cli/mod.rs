//! # CLI Layer
//!
//! This module is **one possible UI client** for userdir. It is the only
//! place that reads the terminal, prints, or decides exit codes.
//!
//! Every handler follows the same loop: turn arguments into API intents,
//! print the resulting messages, then re-render from `api.snapshot()`.

mod commands;
mod form;
mod logging;
mod render;
mod setup;
mod styles;

pub use commands::run;
