//! Command routing and dispatch.
//!
//! A [`Router`] owns commands and the handlers bound to them. Input triggers
//! are matched case-sensitively against each command's trigger and aliases.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, warn};

use crate::error::RegistrationError;

use super::command::{Command, InputCommand};
use super::response::{build_response, DataBridge, Response};

type ResponseFn = dyn Fn(&mut Response<'_>);

/// A callback bound to a command.
pub enum Handler {
    /// Receives the structured response.
    Responding(Box<ResponseFn>),
    /// Takes no arguments; rejected at registration.
    Bare(Box<dyn Fn()>),
}

impl Handler {
    pub fn new(f: impl Fn(&mut Response<'_>) + 'static) -> Self {
        Self::Responding(Box::new(f))
    }

    pub fn bare(f: impl Fn() + 'static) -> Self {
        Self::Bare(Box::new(f))
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Responding(_) => f.write_str("Handler::Responding"),
            Self::Bare(_) => f.write_str("Handler::Bare"),
        }
    }
}

/// A registered command together with its handler.
pub struct CommandHandler {
    command: Command,
    handler: Box<ResponseFn>,
}

impl CommandHandler {
    pub fn command(&self) -> &Command {
        &self.command
    }

    fn handle(&self, input: &InputCommand, data: &mut DataBridge) {
        let mut input_flags = input.input_flags.clone();
        let status = build_response(&self.command, &mut input_flags);
        let mut response = Response {
            status,
            input_flags,
            data,
        };
        (self.handler)(&mut response);
    }
}

impl fmt::Debug for CommandHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandHandler")
            .field("command", &self.command)
            .finish_non_exhaustive()
    }
}

/// A named collection of commands and their handlers.
#[derive(Debug, Default)]
pub struct Router {
    title: Option<String>,
    command_handlers: Vec<CommandHandler>,
    triggers: BTreeSet<String>,
    aliases: BTreeSet<String>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Registers `handler` for `command`.
    ///
    /// Aliases that overlap triggers or aliases already on this router are
    /// accepted with a warning; every matching handler fires on dispatch.
    pub fn register(
        &mut self,
        command: Command,
        handler: Handler,
    ) -> Result<(), RegistrationError> {
        let trigger = command.trigger();

        if trigger.chars().any(char::is_whitespace) {
            return Err(RegistrationError::TriggerContainsSpaces(trigger.to_string()));
        }

        if let Some(flag) = command.flags().first_repeated() {
            return Err(RegistrationError::RepeatedFlagName {
                trigger: trigger.to_string(),
                flag,
            });
        }

        let handler = match handler {
            Handler::Responding(f) => f,
            Handler::Bare(_) => {
                return Err(RegistrationError::RequiredArgumentNotPassed(
                    trigger.to_string(),
                ))
            }
        };

        if self.triggers.contains(trigger) {
            return Err(RegistrationError::RepeatedTriggerName(BTreeSet::from([
                trigger.to_string(),
            ])));
        }

        let mut overlapping: BTreeSet<String> = command
            .aliases()
            .iter()
            .filter(|alias| self.triggers.contains(*alias) || self.aliases.contains(*alias))
            .cloned()
            .collect();
        if self.aliases.contains(trigger) {
            overlapping.insert(trigger.to_string());
        }
        if !overlapping.is_empty() {
            warn!(
                trigger = %trigger,
                overlapping = ?overlapping,
                "Command names overlap with names already registered on this router"
            );
        }

        debug!(
            trigger = %trigger,
            aliases = ?command.aliases(),
            flags = command.flags().len(),
            "Registered command"
        );

        self.triggers.insert(trigger.to_string());
        self.aliases.extend(command.aliases().iter().cloned());
        self.command_handlers.push(CommandHandler { command, handler });
        Ok(())
    }

    /// Registers a closure that receives the response.
    pub fn route(
        &mut self,
        command: Command,
        f: impl Fn(&mut Response<'_>) + 'static,
    ) -> Result<(), RegistrationError> {
        self.register(command, Handler::new(f))
    }

    /// Returns true if any registered command answers to `trigger`.
    pub fn handles(&self, trigger: &str) -> bool {
        self.command_handlers
            .iter()
            .any(|ch| ch.command.matches(trigger))
    }

    /// Invokes every handler whose command answers to the input trigger, in
    /// registration order. Returns how many handlers ran.
    pub fn dispatch(&self, input: &InputCommand, data: &mut DataBridge) -> usize {
        let mut invoked = 0;
        for command_handler in &self.command_handlers {
            if command_handler.command.matches(&input.trigger) {
                command_handler.handle(input, data);
                invoked += 1;
            }
        }
        invoked
    }

    pub fn triggers(&self) -> &BTreeSet<String> {
        &self.triggers
    }

    pub fn aliases(&self) -> &BTreeSet<String> {
        &self.aliases
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.command_handlers.iter().map(CommandHandler::command)
    }
}
