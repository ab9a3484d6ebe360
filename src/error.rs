//! Error types for repl-router.
//!
//! Parse errors are recoverable per input line, registration errors are fatal
//! at startup. Flag validation outcomes are data, not errors.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::commands::flag::InputFlag;

/// Syntax errors raised while tokenizing one input line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line was empty or contained only whitespace.
    #[error("Input is empty")]
    EmptyInput,

    /// A token could not be attached to any flag.
    #[error("Unprocessed flag token: {0}")]
    UnprocessedFlag(String),

    /// The same flag appeared twice in one line.
    #[error("Repeated flag: {}", .0.string_entity())]
    RepeatedFlag(InputFlag),
}

/// Configuration errors raised while wiring routers and commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// Command triggers must be a single word.
    #[error("Trigger '{0}' contains whitespace")]
    TriggerContainsSpaces(String),

    /// Two flags of one command render to the same string entity.
    #[error("Command '{trigger}' registers flag '{flag}' more than once")]
    RepeatedFlagName { trigger: String, flag: String },

    /// The handler for a command does not accept a response.
    #[error("Handler for command '{0}' must accept a response argument")]
    RequiredArgumentNotPassed(String),

    /// Triggers registered more than once.
    #[error("Repeated trigger names: {}", join(.0))]
    RepeatedTriggerName(BTreeSet<String>),

    /// Aliases registered more than once.
    #[error("Repeated alias names: {}", join(.0))]
    RepeatedAliasName(BTreeSet<String>),
}

fn join(names: &BTreeSet<String>) -> String {
    names.iter().cloned().collect::<Vec<_>>().join(", ")
}

/// Main error type for the application layer.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// Configuration errors (invalid config file, unreadable path, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Parse(_) => "Parse Error",
            Self::Registration(_) => "Registration Error",
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
        }
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
