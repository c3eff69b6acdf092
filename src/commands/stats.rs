use serde_json::{json, Value};

use super::{Command, CommandError, CommandOutput};
use crate::ap::{ApType, TypingStats};

/// Coverage statistics over a list of typings.
pub struct StatsCommand;

impl Command for StatsCommand {
    fn name(&self) -> &'static str {
        "stats"
    }

    fn description(&self) -> &'static str {
        "Report missing attitudes, missing types and block coverage for a list of AP types"
    }

    fn usage(&self) -> &'static str {
        "stats <ap_type>..."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "array",
            "items": {"type": "string"},
            "description": "AP types separated by spaces or commas"
        })
    }

    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError> {
        let types = args
            .iter()
            .flat_map(|arg| arg.split(','))
            .filter(|s| !s.trim().is_empty())
            .map(ApType::parse)
            .collect::<Result<Vec<_>, _>>()?;
        if types.is_empty() {
            return Err(CommandError::Usage { command: self.name(), usage: self.usage() });
        }
        Ok(CommandOutput::from_report(&TypingStats::from_types(&types)))
    }
}
