//! repl-router - command routing, flag validation and dispatch for
//! interactive command-line applications.
//!
//! Raw input lines are tokenized into a trigger and flags, matched against
//! registered commands, validated, and handed to handlers as a structured
//! response.

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
