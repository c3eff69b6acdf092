//! HTML fragments. Every interpolated value is escaped.

use html_escape::encode_text;

use super::text::TextFormatter;
use crate::ap::stats::TypingStats;
use crate::ap::{IntertypeRelations, RelationDescription, ShadowSequence};
use crate::triads::TriadReport;

fn list<I, S>(title: &str, items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut html = format!("<p>{}</p>\n<ul>\n", encode_text(title));
    for item in items {
        html.push_str(&format!("  <li>{}</li>\n", encode_text(item.as_ref())));
    }
    html.push_str("</ul>");
    html
}

pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn shadow(sequence: &ShadowSequence) -> String {
        list(
            &format!("Shadow types for {} {}:", sequence.ap_type, sequence.subtype),
            sequence.shadow_types.iter().map(|s| s.to_string()),
        )
    }

    pub fn relation(description: &RelationDescription) -> String {
        format!("<p>{}</p>", encode_text(&description.to_string()))
    }

    pub fn intertypes(relations: &IntertypeRelations) -> String {
        list(
            &format!("Intertype relations for {}:", relations.ap_type),
            relations
                .rows
                .iter()
                .map(|row| format!("{}: {}", row.name, TextFormatter::relation_row(&relations.ap_type, row))),
        )
    }

    pub fn triads(report: &TriadReport) -> String {
        let lines = report.lines();
        list(&report.header, lines.iter().skip(1))
    }

    pub fn stats(stats: &TypingStats) -> String {
        let text = TextFormatter::stats(stats);
        list("Typing statistics:", text.lines())
    }
}
