//! Command System Module
//!
//! Every surface (CLI, REPL, chat bot) goes through the same registry of
//! named commands. A command takes positional string arguments and returns
//! an output already rendered in every format.

mod intertype;
mod shadow;
mod stats;
mod triads;

pub use intertype::{IntertypeCommand, IntertypesCommand};
pub use shadow::ShadowCommand;
pub use stats::StatsCommand;
pub use triads::TriadsCommand;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::error::TypingError;
use crate::format::{OutputFormat, Report};

/// Output from a command execution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandOutput {
    /// Whether the command succeeded
    pub success: bool,
    /// Machine-readable result
    pub data: Value,
    /// Plain-text form, or `Error: ...` on failure
    pub summary: String,
    /// HTML fragment
    pub html: String,
    pub error: Option<String>,
}

impl CommandOutput {
    /// Render a report in every format.
    pub fn from_report(report: &impl Report) -> Self {
        Self {
            success: true,
            data: report.to_json(),
            summary: report.to_text(),
            html: report.to_html(),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            success: false,
            data: Value::Null,
            summary: format!("Error: {}", error),
            html: format!("<p>Error: {}</p>", html_escape::encode_text(&error)),
            error: Some(error),
        }
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.summary.clone(),
            OutputFormat::Json => format!("{:#}", self.data),
            OutputFormat::Html => self.html.clone(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Usage: {usage}")]
    Usage { command: &'static str, usage: &'static str },

    #[error(transparent)]
    Typing(#[from] TypingError),
}

impl CommandError {
    /// Bad input from the caller, as opposed to a table gap.
    pub fn is_user_error(&self) -> bool {
        match self {
            CommandError::Typing(e) => e.is_user_error(),
            _ => true,
        }
    }
}

/// Trait for commands served by every surface
pub trait Command: Send + Sync {
    /// Unique name, also the REPL keyword
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// e.g. `shadow <ap_type> <subtype>`
    fn usage(&self) -> &'static str;

    /// JSON schema of the positional arguments
    fn parameters(&self) -> Value;

    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError>;
}

/// Checks the argument count against a command's usage.
pub(crate) fn expect_args<'a, const N: usize>(
    command: &dyn Command,
    args: &'a [String],
) -> Result<[&'a str; N], CommandError> {
    let usage = || CommandError::Usage { command: command.name(), usage: command.usage() };
    if args.len() != N {
        return Err(usage());
    }
    let mut out = [""; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.as_str();
    }
    Ok(out)
}

/// Registry of available commands
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { commands: BTreeMap::new() }
    }

    /// Registry with every built-in command
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_instance(ShadowCommand);
        registry.register_instance(IntertypeCommand);
        registry.register_instance(IntertypesCommand);
        registry.register_instance(TriadsCommand);
        registry.register_instance(StatsCommand);
        registry
    }

    pub fn register_instance<C: Command + 'static>(&mut self, command: C) {
        self.commands.insert(command.name(), Arc::new(command));
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(name).cloned()
    }

    /// One usage line per command
    pub fn help_text(&self) -> String {
        self.commands
            .values()
            .map(|c| format!("{:<32} {}", c.usage(), c.description()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn execute(&self, name: &str, args: &[String]) -> Result<CommandOutput, CommandError> {
        let command = self
            .get(&name.to_lowercase())
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
        info!("Command: {}, args={:?}", command.name(), args);
        command.execute(args)
    }

    /// Split a line such as `shadow VFEL 1340` and execute it.
    pub fn dispatch_line(&self, line: &str) -> Result<CommandOutput, CommandError> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or_else(|| CommandError::UnknownCommand(String::new()))?;
        let args: Vec<String> = words.map(String::from).collect();
        self.execute(name, &args)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoCommand;

    impl Command for EchoCommand {
        fn name(&self) -> &'static str { "echo" }
        fn description(&self) -> &'static str { "Echo the arguments" }
        fn usage(&self) -> &'static str { "echo <word>" }
        fn parameters(&self) -> Value { json!({"type": "array"}) }
        fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError> {
            let [word] = expect_args::<1>(self, args)?;
            Ok(CommandOutput {
                success: true,
                data: json!(word),
                summary: word.to_string(),
                html: String::new(),
                error: None,
            })
        }
    }

    #[test]
    fn test_command_registration() {
        let mut registry = CommandRegistry::new();
        registry.register_instance(EchoCommand);
        assert_eq!(registry.command_names(), ["echo"]);
        assert_eq!(registry.dispatch_line("ECHO hi").unwrap().summary, "hi");
    }

    #[test]
    fn test_usage_error() {
        let mut registry = CommandRegistry::new();
        registry.register_instance(EchoCommand);
        let err = registry.dispatch_line("echo a b").unwrap_err();
        assert_eq!(err.to_string(), "Usage: echo <word>");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_defaults() {
        let registry = CommandRegistry::with_defaults();
        assert_eq!(registry.command_names(), ["intertype", "intertypes", "shadow", "stats", "triads"]);
        assert!(matches!(registry.dispatch_line("nope"), Err(CommandError::UnknownCommand(_))));
        assert!(registry.help_text().contains("shadow <ap_type> <subtype>"));
    }

    #[test]
    fn test_failure_output() {
        let output = CommandOutput::failure("Invalid AP type XYZ");
        assert!(!output.success);
        assert_eq!(output.render(OutputFormat::Text), "Error: Invalid AP type XYZ");
    }
}
