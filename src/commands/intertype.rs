use serde_json::{json, Value};

use super::{expect_args, Command, CommandError, CommandOutput};
use crate::ap::{all_relations, relation};

/// Relation between two AP types.
pub struct IntertypeCommand;

impl Command for IntertypeCommand {
    fn name(&self) -> &'static str {
        "intertype"
    }

    fn description(&self) -> &'static str {
        "Show the intertype relation between two AP types"
    }

    fn usage(&self) -> &'static str {
        "intertype <ap_type1> <ap_type2>"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "array",
            "prefixItems": [
                {"name": "ap_type1", "type": "string"},
                {"name": "ap_type2", "type": "string"}
            ]
        })
    }

    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError> {
        let [first, second] = expect_args(self, args)?;
        Ok(CommandOutput::from_report(&relation(first, second)?))
    }
}

/// All 17 relations of one AP type.
pub struct IntertypesCommand;

impl Command for IntertypesCommand {
    fn name(&self) -> &'static str {
        "intertypes"
    }

    fn description(&self) -> &'static str {
        "List all intertype relations of an AP type"
    }

    fn usage(&self) -> &'static str {
        "intertypes <ap_type>"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "array",
            "prefixItems": [{"name": "ap_type", "type": "string"}]
        })
    }

    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError> {
        let [ap_type] = expect_args(self, args)?;
        Ok(CommandOutput::from_report(&all_relations(ap_type)?))
    }
}
