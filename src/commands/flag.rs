//! Flag definitions and parsed flag values.
//!
//! A [`Flag`] is declared once when a command is registered and describes which
//! values it accepts. An [`InputFlag`] is produced by the tokenizer for every
//! flag found on an input line and carries the validation verdict afterwards.

use std::collections::BTreeSet;
use std::fmt;

use regex::Regex;
use serde::Serialize;

/// Leading dash run of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Prefix {
    /// `-`
    Single,
    /// `--`
    Double,
    /// `---`, only available to flags built programmatically.
    Triple,
}

impl Prefix {
    /// Returns the dash string for this prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "-",
            Self::Double => "--",
            Self::Triple => "---",
        }
    }

    /// Maps a dash run to a prefix.
    pub fn from_dashes(dashes: &str) -> Option<Self> {
        match dashes {
            "-" => Some(Self::Single),
            "--" => Some(Self::Double),
            "---" => Some(Self::Triple),
            _ => None,
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values a declared flag accepts.
#[derive(Debug, Clone)]
pub enum PossibleValues {
    /// The flag is a toggle and takes no value.
    Neither,
    /// Any value, or none at all.
    All,
    /// One of a fixed set of values (case-sensitive).
    Values(BTreeSet<String>),
    /// A value matching the pattern from its first character.
    Pattern(Regex),
}

impl PossibleValues {
    /// Checks a candidate value against the accepted values.
    pub fn accepts(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (Self::Neither, value) => value.is_none(),
            (Self::All, _) => true,
            (Self::Values(values), Some(value)) => values.contains(value),
            (Self::Pattern(regex), Some(value)) => {
                regex.find(value).is_some_and(|m| m.start() == 0)
            }
            (Self::Values(_) | Self::Pattern(_), None) => false,
        }
    }
}

/// A flag a command declares.
///
/// Identity is the rendered string entity (`prefix + name`).
#[derive(Debug, Clone)]
pub struct Flag {
    name: String,
    prefix: Prefix,
    possible_values: PossibleValues,
}

impl Flag {
    /// Creates a `--name` flag that accepts any value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: Prefix::Double,
            possible_values: PossibleValues::All,
        }
    }

    pub fn with_prefix(self, prefix: Prefix) -> Self {
        Self { prefix, ..self }
    }

    /// Restricts the flag to a fixed set of values.
    pub fn with_values<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            possible_values: PossibleValues::Values(values.into_iter().map(Into::into).collect()),
            ..self
        }
    }

    /// Restricts the flag to values matching `pattern`.
    pub fn with_pattern(self, pattern: Regex) -> Self {
        Self {
            possible_values: PossibleValues::Pattern(pattern),
            ..self
        }
    }

    /// Makes the flag a toggle that must not carry a value.
    pub fn toggle(self) -> Self {
        Self {
            possible_values: PossibleValues::Neither,
            ..self
        }
    }

    pub fn possible_values(&self) -> &PossibleValues {
        &self.possible_values
    }

    /// Returns the canonical `prefix + name` form.
    pub fn string_entity(&self) -> String {
        format!("{}{}", self.prefix, self.name)
    }

    /// Checks a candidate value against the flag's possible values.
    pub fn validate(&self, value: Option<&str>) -> bool {
        self.possible_values.accepts(value)
    }
}

impl PartialEq for Flag {
    fn eq(&self, other: &Self) -> bool {
        self.prefix == other.prefix && self.name == other.name
    }
}

impl Eq for Flag {}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.name)
    }
}

/// Flags registered on one command, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Flags(Vec<Flag>);

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, flag: Flag) {
        self.0.push(flag);
    }

    /// Finds a flag by its rendered string entity.
    pub fn get_by_entity(&self, entity: &str) -> Option<&Flag> {
        self.0.iter().find(|f| f.string_entity() == entity)
    }

    /// Returns the first string entity that occurs twice, compared case-insensitively.
    pub fn first_repeated(&self) -> Option<String> {
        let mut seen = BTreeSet::new();
        self.0
            .iter()
            .map(Flag::string_entity)
            .find(|entity| !seen.insert(entity.to_lowercase()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Flag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Flag> for Flags {
    fn from_iter<T: IntoIterator<Item = Flag>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Flags {
    type Item = &'a Flag;
    type IntoIter = std::slice::Iter<'a, Flag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Verdict for one parsed flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationStatus {
    /// Declared on the command and the value is acceptable.
    Valid,
    /// Declared on the command but the value is not acceptable.
    Invalid,
    /// Not declared on the command.
    Undefined,
}

/// A flag as it appeared on an input line.
///
/// Equality compares name and value only; prefix and status are ignored.
#[derive(Debug, Clone, Serialize)]
pub struct InputFlag {
    pub name: String,
    pub prefix: Prefix,
    pub value: Option<String>,
    /// Filled in once the flag has been validated against a command.
    pub status: Option<ValidationStatus>,
}

impl InputFlag {
    pub fn new(name: impl Into<String>, prefix: Prefix, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            prefix,
            value,
            status: None,
        }
    }

    /// Returns the canonical `prefix + name` form.
    pub fn string_entity(&self) -> String {
        format!("{}{}", self.prefix, self.name)
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl PartialEq for InputFlag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}

impl Eq for InputFlag {}

/// Flags parsed from one input line, in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InputFlags(Vec<InputFlag>);

impl InputFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a flag unless one with the same string entity is already present,
    /// in which case the rejected flag is handed back.
    pub fn try_add(&mut self, flag: InputFlag) -> Result<(), InputFlag> {
        let entity = flag.string_entity();
        if self.0.iter().any(|f| f.string_entity() == entity) {
            return Err(flag);
        }
        self.0.push(flag);
        Ok(())
    }

    pub fn get_by_name(&self, name: &str) -> Option<&InputFlag> {
        self.0.iter().find(|f| f.name == name)
    }

    pub fn valid(&self) -> impl Iterator<Item = &InputFlag> {
        self.with_status(ValidationStatus::Valid)
    }

    pub fn invalid(&self) -> impl Iterator<Item = &InputFlag> {
        self.with_status(ValidationStatus::Invalid)
    }

    pub fn undefined(&self) -> impl Iterator<Item = &InputFlag> {
        self.with_status(ValidationStatus::Undefined)
    }

    fn with_status(&self, status: ValidationStatus) -> impl Iterator<Item = &InputFlag> {
        self.0.iter().filter(move |f| f.status == Some(status))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InputFlag> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, InputFlag> {
        self.0.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a InputFlags {
    type Item = &'a InputFlag;
    type IntoIter = std::slice::Iter<'a, InputFlag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
