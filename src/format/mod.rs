//! Output Formatters
//!
//! Results are rendered as plain text, JSON or HTML. The engines never format
//! anything themselves.

pub mod html;
pub mod json;
pub mod text;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ap::stats::TypingStats;
use crate::ap::{IntertypeRelations, RelationDescription, ShadowSequence};
use crate::triads::TriadReport;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

/// A result that can be rendered in every output format.
pub trait Report {
    fn to_text(&self) -> String;
    fn to_json(&self) -> Value;
    fn to_html(&self) -> String;

    fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.to_text(),
            OutputFormat::Json => format!("{:#}", self.to_json()),
            OutputFormat::Html => self.to_html(),
        }
    }
}

impl Report for ShadowSequence {
    fn to_text(&self) -> String {
        TextFormatter::shadow(self)
    }
    fn to_json(&self) -> Value {
        JsonFormatter::shadow(self)
    }
    fn to_html(&self) -> String {
        HtmlFormatter::shadow(self)
    }
}

impl Report for RelationDescription {
    fn to_text(&self) -> String {
        TextFormatter::relation(self)
    }
    fn to_json(&self) -> Value {
        JsonFormatter::relation(self)
    }
    fn to_html(&self) -> String {
        HtmlFormatter::relation(self)
    }
}

impl Report for IntertypeRelations {
    fn to_text(&self) -> String {
        TextFormatter::intertypes(self)
    }
    fn to_json(&self) -> Value {
        JsonFormatter::intertypes(self)
    }
    fn to_html(&self) -> String {
        HtmlFormatter::intertypes(self)
    }
}

impl Report for TriadReport {
    fn to_text(&self) -> String {
        TextFormatter::triads(self)
    }
    fn to_json(&self) -> Value {
        JsonFormatter::triads(self)
    }
    fn to_html(&self) -> String {
        HtmlFormatter::triads(self)
    }
}

impl Report for TypingStats {
    fn to_text(&self) -> String {
        TextFormatter::stats(self)
    }
    fn to_json(&self) -> Value {
        JsonFormatter::stats(self)
    }
    fn to_html(&self) -> String {
        HtmlFormatter::stats(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ap::relation;

    #[test]
    fn test_render_dispatches_on_format() {
        let dual = relation("FVLE", "ELVF").unwrap();
        assert_eq!(dual.render(OutputFormat::Text), "Dual: FVLE <—> ELVF (shared sexta)");
        assert!(dual.render(OutputFormat::Json).contains("\"relation\": \"Dual\""));
        assert_eq!(dual.render(OutputFormat::Html), "<p>Dual: FVLE &lt;—&gt; ELVF (shared sexta)</p>");
    }
}
