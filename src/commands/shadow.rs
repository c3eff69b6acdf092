use serde_json::{json, Value};

use super::{expect_args, Command, CommandError, CommandOutput};
use crate::ap::derive_shadow_types;

/// Shadow types of an AP type and subtype.
pub struct ShadowCommand;

impl Command for ShadowCommand {
    fn name(&self) -> &'static str {
        "shadow"
    }

    fn description(&self) -> &'static str {
        "List shadow types, if any, for AP type and subtype"
    }

    fn usage(&self) -> &'static str {
        "shadow <ap_type> <subtype>"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "array",
            "prefixItems": [
                {"name": "ap_type", "type": "string", "description": "Any permutation of VLFE, e.g. VFEL"},
                {"name": "subtype", "type": "string", "description": "Four digits 0-4, e.g. 1340"}
            ]
        })
    }

    fn execute(&self, args: &[String]) -> Result<CommandOutput, CommandError> {
        let [ap_type, subtype] = expect_args(self, args)?;
        let sequence = derive_shadow_types(ap_type, subtype)?;
        Ok(CommandOutput::from_report(&sequence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_command() {
        let output = ShadowCommand.execute(&["lfve".into(), "2111".into()]).unwrap();
        assert!(output.success);
        assert!(output.summary.starts_with("Shadow types for LFVE 2111:\n- LFVE: AP type"));
        assert_eq!(output.data["shadow_types"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn test_shadow_command_errors() {
        assert!(matches!(ShadowCommand.execute(&["VFEL".into()]), Err(CommandError::Usage { .. })));
        let err = ShadowCommand.execute(&["VFEX".into(), "1340".into()]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid AP type VFEX");
    }
}
