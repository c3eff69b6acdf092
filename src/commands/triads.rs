use serde_json::{json, Value};

use super::{Command, CommandError, CommandOutput};
use crate::triads::get_triads;

/// Triads of an Enneagram trifix or Expanded Instincts archetype.
pub struct TriadsCommand;

impl Command for TriadsCommand {
    fn name(&self) -> &'static str {
        "triads"
    }

    fn description(&self) -> &'static str {
        "List triads for an Enneagram trifix or EI archetype"
    }

    fn usage(&self) -> &'static str {
        "triads <trifix | [stacking] archetype>"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "array",
            "items": {"type": "string"},
            "description": "Trifix (e.g. 925) or EI archetype with optional center stacking (e.g. SPI SY-CY-UN)"
        })
    }

    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError> {
        if args.is_empty() {
            return Err(CommandError::Usage { command: self.name(), usage: self.usage() });
        }
        Ok(CommandOutput::from_report(&get_triads(&args.join(" "))?))
    }
}
