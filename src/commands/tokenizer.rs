//! Tokenizer for raw input lines.
//!
//! Turns one line into an [`InputCommand`]:
//! - The first whitespace-separated token is the trigger, taken as-is
//! - Every following token must be a flag name (`-x` or `--name`)
//! - A flag name followed by a token that does not start with `-` takes it as its value
//! - A flag name followed by another flag, or by the end of input, is a toggle
//!
//! Quotes are not interpreted; they stay in values as literal characters.

use crate::error::ParseError;

use super::command::InputCommand;
use super::flag::{InputFlag, InputFlags, Prefix};

/// Longest dash run accepted on raw input. Triple-dash flags can only be
/// built programmatically.
const MAX_INPUT_DASHES: usize = 2;

/// Parses a raw input line into a trigger and its flags.
pub fn parse(raw: &str) -> Result<InputCommand, ParseError> {
    let mut tokens = raw.split_whitespace().peekable();
    let trigger = tokens.next().ok_or(ParseError::EmptyInput)?;

    let mut input_flags = InputFlags::new();

    while let Some(token) = tokens.next() {
        let (prefix, name) =
            split_flag_token(token).ok_or_else(|| ParseError::UnprocessedFlag(token.to_string()))?;

        // Look ahead: a following non-flag token is this flag's value
        let value = match tokens.peek() {
            Some(next) if !next.starts_with('-') => tokens.next().map(String::from),
            _ => None,
        };

        input_flags
            .try_add(InputFlag::new(name, prefix, value))
            .map_err(ParseError::RepeatedFlag)?;
    }

    Ok(InputCommand::new(trigger, input_flags))
}

/// Splits a flag-name token into its prefix and name.
///
/// Returns `None` if the token is not a syntactically valid flag name. A bare
/// `--` is valid and yields an empty name.
fn split_flag_token(token: &str) -> Option<(Prefix, &str)> {
    let name = token.trim_start_matches('-');
    let dashes = &token[..token.len() - name.len()];

    if token.len() < 2 || dashes.is_empty() || dashes.len() > MAX_INPUT_DASHES {
        return None;
    }

    Prefix::from_dashes(dashes).map(|prefix| (prefix, name))
}
