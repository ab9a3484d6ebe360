//! Response handed to command handlers.
//!
//! A response carries the parsed flags with their validation verdicts, one
//! aggregate [`ResponseStatus`], and mutable access to the application's
//! [`DataBridge`].

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use super::command::Command;
use super::flag::{InputFlags, ValidationStatus};

/// Aggregate verdict over all flags of one dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResponseStatus {
    AllValid,
    UndefinedFlags,
    InvalidValueFlags,
    UndefinedAndInvalidFlags,
}

impl ResponseStatus {
    fn from_flags(saw_undefined: bool, saw_invalid: bool) -> Self {
        match (saw_undefined, saw_invalid) {
            (false, false) => Self::AllValid,
            (true, false) => Self::UndefinedFlags,
            (false, true) => Self::InvalidValueFlags,
            (true, true) => Self::UndefinedAndInvalidFlags,
        }
    }
}

/// Key/value store shared by every handler of one application.
///
/// The application owns a single instance and passes it to each dispatch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataBridge {
    data: HashMap<String, Value>,
}

impl DataBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.data.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    /// Merges `other` into the bridge, overwriting existing keys.
    pub fn update(&mut self, other: impl IntoIterator<Item = (String, Value)>) {
        self.data.extend(other);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// What a handler receives for one dispatched command.
#[derive(Debug)]
pub struct Response<'a> {
    pub status: ResponseStatus,
    pub input_flags: InputFlags,
    pub data: &'a mut DataBridge,
}

/// Validates every flag against `command`, stamps each flag's status, and
/// returns the aggregate verdict.
pub fn build_response(command: &Command, input_flags: &mut InputFlags) -> ResponseStatus {
    if input_flags.is_empty() {
        return ResponseStatus::AllValid;
    }

    if command.flags().is_empty() {
        for flag in input_flags.iter_mut() {
            flag.status = Some(ValidationStatus::Undefined);
        }
        return ResponseStatus::UndefinedFlags;
    }

    let mut saw_undefined = false;
    let mut saw_invalid = false;

    for flag in input_flags.iter_mut() {
        let status = command.validate_input_flag(flag);
        match status {
            ValidationStatus::Undefined => saw_undefined = true,
            ValidationStatus::Invalid => saw_invalid = true,
            ValidationStatus::Valid => {}
        }
        flag.status = Some(status);
    }

    ResponseStatus::from_flags(saw_undefined, saw_invalid)
}
