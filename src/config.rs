//! Configuration management for repl-router applications.
//!
//! Handles loading the REPL's presentation settings and the built-in exit
//! command from a TOML file.

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for one interactive application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prompt printed before each input line.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Printed once when the loop starts.
    #[serde(default)]
    pub initial_message: Option<String>,

    /// Printed once when the loop ends.
    #[serde(default = "default_farewell_message")]
    pub farewell_message: String,

    /// Trigger of the built-in exit command.
    #[serde(default = "default_exit_trigger")]
    pub exit_trigger: String,

    #[serde(default = "default_exit_aliases")]
    pub exit_aliases: Vec<String>,

    #[serde(default = "default_exit_description")]
    pub exit_description: String,

    /// Print the command listing when the loop starts.
    #[serde(default = "default_true")]
    pub print_help_on_start: bool,

    /// Print the command listing again after every dispatched command.
    #[serde(default)]
    pub repeat_help_after_command: bool,
}

fn default_prompt() -> String {
    ">>> ".to_string()
}

fn default_farewell_message() -> String {
    "See you!".to_string()
}

fn default_exit_trigger() -> String {
    "Q".to_string()
}

fn default_exit_aliases() -> Vec<String> {
    vec!["q".to_string()]
}

fn default_exit_description() -> String {
    "Exit the application".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            initial_message: None,
            farewell_message: default_farewell_message(),
            exit_trigger: default_exit_trigger(),
            exit_aliases: default_exit_aliases(),
            exit_description: default_exit_description(),
            print_help_on_start: true,
            repeat_help_after_command: false,
        }
    }
}

impl AppConfig {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("repl-router")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file, or defaults if it does not exist.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            AppError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
prompt = "app> "
initial_message = "Welcome"
farewell_message = "Bye"
exit_trigger = "exit"
exit_aliases = ["quit", "x"]
print_help_on_start = false
repeat_help_after_command = true
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.prompt, "app> ");
        assert_eq!(config.initial_message.as_deref(), Some("Welcome"));
        assert_eq!(config.farewell_message, "Bye");
        assert_eq!(config.exit_trigger, "exit");
        assert_eq!(config.exit_aliases, vec!["quit", "x"]);
        assert_eq!(config.exit_description, "Exit the application");
        assert!(!config.print_help_on_start);
        assert!(config.repeat_help_after_command);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.exit_trigger, "Q");
        assert!(config.print_help_on_start);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "prompt = \"$ \"").unwrap();
        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.prompt, "$ ");
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "prompt = [").unwrap();
        let err = AppConfig::load_from_file(file.path()).unwrap_err();
        assert_eq!(err.category(), "Configuration Error");
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        assert!(AppConfig::default_path().ends_with("repl-router/config.toml"));
    }
}
