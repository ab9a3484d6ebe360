//! Application orchestration.
//!
//! An [`App`] owns the routers, the shared [`DataBridge`] and the built-in
//! exit command. It only exists once every router has passed collision
//! validation, so no input is served before wiring is known to be sound.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::commands::{
    help, parse, suggest, validate_routers, Command, DataBridge, InputCommand, Router,
};
use crate::config::AppConfig;
use crate::error::{AppError, ParseError, Result};

const SYSTEM_ROUTER_TITLE: &str = "System";

/// What happened to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The trigger matched; `handlers` is how many handlers ran.
    Dispatched { handlers: usize },
    /// The exit command was entered.
    Exit,
    /// No router answers to the trigger.
    UnknownCommand {
        trigger: String,
        suggestion: Option<String>,
    },
}

/// Collects routers before validation.
#[derive(Debug, Default)]
pub struct AppBuilder {
    config: AppConfig,
    routers: Vec<Router>,
    data: DataBridge,
}

impl AppBuilder {
    pub fn router(mut self, router: Router) -> Self {
        self.routers.push(router);
        self
    }

    pub fn routers(mut self, routers: impl IntoIterator<Item = Router>) -> Self {
        self.routers.extend(routers);
        self
    }

    /// Seeds the shared data bridge.
    pub fn data(self, data: DataBridge) -> Self {
        Self { data, ..self }
    }

    /// Registers the exit command and validates every router against the others.
    ///
    /// Wiring problems surface as [`AppError::Registration`].
    pub fn build(self) -> Result<App> {
        let mut system = Router::with_title(SYSTEM_ROUTER_TITLE);
        system.route(
            Command::new(self.config.exit_trigger.as_str())
                .with_description(self.config.exit_description.as_str())
                .with_aliases(self.config.exit_aliases.iter().cloned()),
            |_| {},
        )?;

        validate_routers(std::iter::once(&system).chain(&self.routers))?;

        info!(
            routers = self.routers.len(),
            commands = self.routers.iter().map(|r| r.commands().count()).sum::<usize>(),
            "Application wired"
        );

        Ok(App {
            config: self.config,
            system,
            routers: self.routers,
            data: self.data,
        })
    }
}

/// A validated, ready-to-serve application.
#[derive(Debug)]
pub struct App {
    config: AppConfig,
    system: Router,
    routers: Vec<Router>,
    data: DataBridge,
}

impl App {
    pub fn builder(config: AppConfig) -> AppBuilder {
        AppBuilder {
            config,
            ..AppBuilder::default()
        }
    }

    pub fn data(&self) -> &DataBridge {
        &self.data
    }

    /// Every trigger and alias the application answers to.
    pub fn known_triggers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(&self.system)
            .chain(&self.routers)
            .flat_map(|router| router.triggers().iter().chain(router.aliases()))
            .map(String::as_str)
    }

    /// Command listing for every router, the exit command last.
    pub fn help_text(&self) -> String {
        help::render(self.routers.iter().chain(std::iter::once(&self.system)))
    }

    /// Tokenizes and dispatches one input line.
    ///
    /// Syntax problems surface as [`AppError::Parse`] and leave the app usable.
    pub fn process_line(&mut self, line: &str) -> Result<Outcome> {
        let input = parse(line)?;
        Ok(self.dispatch(&input))
    }

    /// Dispatches an already parsed command.
    pub fn dispatch(&mut self, input: &InputCommand) -> Outcome {
        if self.system.handles(&input.trigger) {
            debug!(trigger = %input.trigger, "Exit requested");
            return Outcome::Exit;
        }

        let mut handlers = 0;
        let mut matched = false;
        for router in &self.routers {
            if router.handles(&input.trigger) {
                matched = true;
                handlers += router.dispatch(input, &mut self.data);
            }
        }

        if matched {
            debug!(trigger = %input.trigger, handlers = handlers, "Dispatched");
            return Outcome::Dispatched { handlers };
        }

        let suggestion = suggest(&input.trigger, self.known_triggers());
        debug!(trigger = %input.trigger, suggestion = ?suggestion, "Unknown command");
        Outcome::UnknownCommand {
            trigger: input.trigger.clone(),
            suggestion,
        }
    }

    /// Runs the read-dispatch loop until the exit command or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        if let Some(message) = &self.config.initial_message {
            writeln!(output, "{message}")?;
        }
        if self.config.print_help_on_start {
            writeln!(output, "{}", self.help_text())?;
        }

        let mut line = String::new();
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            match self.process_line(&line) {
                Ok(Outcome::Exit) => break,
                Ok(Outcome::Dispatched { .. }) => {
                    if self.config.repeat_help_after_command {
                        writeln!(output, "{}", self.help_text())?;
                    }
                }
                Ok(Outcome::UnknownCommand {
                    trigger,
                    suggestion,
                }) => writeln!(output, "{}", unknown_command_message(&trigger, suggestion))?,
                Err(AppError::Parse(err)) => {
                    writeln!(output, "{}", parse_error_message(&err))?
                }
                Err(err) => return Err(err),
            }
        }

        writeln!(output, "{}", self.config.farewell_message)?;
        Ok(())
    }
}

fn unknown_command_message(trigger: &str, suggestion: Option<String>) -> String {
    match suggestion {
        Some(candidate) => format!("Unknown command: {trigger}. Did you mean \"{candidate}\"?"),
        None => format!("Unknown command: {trigger}"),
    }
}

fn parse_error_message(err: &ParseError) -> String {
    match err {
        ParseError::EmptyInput => "Empty input, type a command".to_string(),
        ParseError::UnprocessedFlag(token) => {
            format!("Incorrect flag syntax near '{token}'")
        }
        ParseError::RepeatedFlag(flag) => {
            format!("Flag '{}' is given more than once", flag.string_entity())
        }
    }
}
