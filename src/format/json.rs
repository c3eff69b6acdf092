//! JSON views of results, shaped for API clients.

use serde::Serialize;
use serde_json::{json, Value};

use super::text::TextFormatter;
use crate::ap::stats::TypingStats;
use crate::ap::{IntertypeRelations, RelationDescription, ShadowSequence};
use crate::triads::TriadReport;

#[derive(Debug, Serialize)]
pub struct ShadowTypeView {
    pub shadow_type: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ShadowView {
    pub ap_type: String,
    pub subtype: String,
    pub shadow_types: Vec<ShadowTypeView>,
    pub skipped: Vec<String>,
}

impl From<&ShadowSequence> for ShadowView {
    fn from(sequence: &ShadowSequence) -> Self {
        Self {
            ap_type: sequence.ap_type.to_string(),
            subtype: sequence.subtype.to_string(),
            shadow_types: sequence
                .shadow_types
                .iter()
                .map(|s| ShadowTypeView {
                    shadow_type: s.ap_type.to_string(),
                    description: s.description(),
                })
                .collect(),
            skipped: sequence.skipped.iter().map(ToString::to_string).collect(),
        }
    }
}

pub struct JsonFormatter;

impl JsonFormatter {
    pub fn shadow(sequence: &ShadowSequence) -> Value {
        json!(ShadowView::from(sequence))
    }

    pub fn relation(description: &RelationDescription) -> Value {
        json!({
            "ap_type1": description.first,
            "ap_type2": description.second,
            "relation": description.name(),
            "category": description.category.label(),
            "remap": description.remap.to_string(),
            "direction": description.direction,
            "description": description.to_string(),
        })
    }

    pub fn intertypes(relations: &IntertypeRelations) -> Value {
        let rows: Vec<Value> = relations
            .rows
            .iter()
            .map(|row| {
                json!({
                    "relation": row.name,
                    "category": row.category.label(),
                    "ap_types": row.others,
                    "description": TextFormatter::relation_row(&relations.ap_type, row),
                })
            })
            .collect();
        json!({ "ap_type": relations.ap_type, "relations": rows })
    }

    pub fn triads(report: &TriadReport) -> Value {
        json!({
            "canonical": report.canonical,
            "nickname": report.nickname,
            "lines": report.lines(),
            "report": report,
        })
    }

    pub fn stats(stats: &TypingStats) -> Value {
        json!(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ap::{derive_shadow_types, relation};

    #[test]
    fn test_shadow_json_shape() {
        let value = JsonFormatter::shadow(&derive_shadow_types("vfel", "1340").unwrap());
        assert_eq!(value["ap_type"], "VFEL");
        assert_eq!(value["subtype"], "1340");
        assert_eq!(value["shadow_types"][0]["shadow_type"], "VFEL");
        assert_eq!(value["shadow_types"][0]["description"], "AP type");
        assert_eq!(value["shadow_types"].as_array().map(Vec::len), Some(3));
        assert!(value["skipped"].is_array());
    }

    #[test]
    fn test_relation_json() {
        let value = JsonFormatter::relation(&relation("FVLE", "ELVF").unwrap());
        assert_eq!(value["relation"], "Dual");
        assert_eq!(value["category"], "shared sexta");
        assert_eq!(value["remap"], "4321");
        assert_eq!(value["direction"], "mutual");
    }
}
