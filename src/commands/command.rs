//! Declared commands and commands parsed from input.

use std::collections::BTreeSet;

use serde::Serialize;

use super::flag::{Flag, Flags, InputFlag, InputFlags, ValidationStatus};

/// Description used when a command is registered without one.
pub const DEFAULT_DESCRIPTION: &str = "Some useful command";

/// A command a router can dispatch to.
#[derive(Debug, Clone)]
pub struct Command {
    trigger: String,
    description: String,
    aliases: BTreeSet<String>,
    flags: Flags,
}

impl Command {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            description: DEFAULT_DESCRIPTION.to_string(),
            aliases: BTreeSet::new(),
            flags: Flags::new(),
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    pub fn with_flag(mut self, flag: Flag) -> Self {
        self.flags.add(flag);
        self
    }

    pub fn with_flags(mut self, flags: impl IntoIterator<Item = Flag>) -> Self {
        for flag in flags {
            self.flags.add(flag);
        }
        self
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn aliases(&self) -> &BTreeSet<String> {
        &self.aliases
    }

    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    /// Returns true if `trigger` equals this command's trigger or one of its
    /// aliases. Comparison is case-sensitive.
    pub fn matches(&self, trigger: &str) -> bool {
        self.trigger == trigger || self.aliases.contains(trigger)
    }

    /// Validates a parsed flag against the flags this command declares.
    pub fn validate_input_flag(&self, flag: &InputFlag) -> ValidationStatus {
        match self.flags.get_by_entity(&flag.string_entity()) {
            None => ValidationStatus::Undefined,
            Some(declared) if declared.validate(flag.value()) => ValidationStatus::Valid,
            Some(_) => ValidationStatus::Invalid,
        }
    }
}

/// A command as parsed from one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputCommand {
    pub trigger: String,
    pub input_flags: InputFlags,
}

impl InputCommand {
    pub fn new(trigger: impl Into<String>, input_flags: InputFlags) -> Self {
        Self {
            trigger: trigger.into(),
            input_flags,
        }
    }
}
