//! Plain-text Formatter
//!
//! The line-per-entry form used by the CLI, the REPL and the chat bot.

use std::fmt;

use crate::ap::intertype::{Direction, RelationDescription, RelationRow, Symmetry};
use crate::ap::stats::TypingStats;
use crate::ap::subtype::SubtypeEntry;
use crate::ap::{IntertypeRelations, Justification, ShadowSequence, ShadowType, Skip};
use crate::triads::TriadReport;

/// `Method 3-2`, `Obscured 4-0`, ...
fn entry_label(entry: &SubtypeEntry) -> String {
    format!("{} {}-{}", entry.category.phase(), entry.source, entry.target)
}

impl fmt::Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Justification::ApType => f.write_str("AP type"),
            Justification::Swap { entry } => {
                write!(f, "{}: {} moves to {}", entry_label(entry), entry.aspect, entry.target)
            }
            Justification::ObscuredSwap { entry, obscured } => write!(
                f,
                "Obscured {}-{}: {} moves to {} ({} obscured)",
                entry.source,
                entry.target,
                entry.aspect,
                entry.target,
                entry_label(obscured)
            ),
            Justification::AlreadyAt { entry, obscured } => {
                write!(f, "{}: {} already at {}", entry_label(entry), entry.aspect, entry.target)?;
                if let Some(obscured) = obscured {
                    write!(f, " ({} obscured)", entry_label(obscured))?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::Accentuated { entry } => write!(f, "Skip {}", entry_label(entry)),
            Skip::ObscuredUnmatched { entry } => write!(f, "Skip {} - no matches", entry_label(entry)),
            Skip::ObscuredAmbiguous { entry, .. } => write!(f, "Skip {} - multiple matches", entry_label(entry)),
            Skip::Resolved { entry } => write!(f, "Skip {} - already resolved", entry_label(entry)),
        }
    }
}

impl fmt::Display for ShadowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.ap_type, self.description())
    }
}

impl ShadowType {
    /// All justifications joined with `; `.
    pub fn description(&self) -> String {
        self.justifications
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for RelationDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from, arrow, to) = match self.direction {
            Direction::Mutual => (self.first, "<—>", self.second),
            Direction::Forward => (self.first, "—>", self.second),
            Direction::Backward => (self.second, "—>", self.first),
        };
        write!(f, "{}: {} {} {} ({})", self.name(), from, arrow, to, self.category)
    }
}

pub struct TextFormatter;

impl TextFormatter {
    pub fn shadow(sequence: &ShadowSequence) -> String {
        let mut lines = vec![format!("Shadow types for {} {}:", sequence.ap_type, sequence.subtype)];
        lines.extend(sequence.shadow_types.iter().map(|s| format!("- {s}")));
        lines.join("\n")
    }

    /// Shadow types followed by the skip log.
    pub fn shadow_verbose(sequence: &ShadowSequence) -> String {
        let mut text = Self::shadow(sequence);
        for skip in &sequence.skipped {
            text.push_str(&format!("\n{skip}"));
        }
        text
    }

    pub fn relation(description: &RelationDescription) -> String {
        description.to_string()
    }

    /// Description of one relation row, without the name.
    pub fn relation_row(ap_type: &impl fmt::Display, row: &RelationRow) -> String {
        let arrow = match row.symmetry {
            Symmetry::Symmetric => "<—>",
            Symmetry::Directed => "—>",
        };
        let path = match row.others.as_slice() {
            [other] => format!("{ap_type} {arrow} {other}"),
            [incoming, outgoing] => format!("{incoming} {arrow} {ap_type} {arrow} {outgoing}"),
            others => others.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "),
        };
        format!("{} ({})", path, row.category)
    }

    pub fn intertypes(relations: &IntertypeRelations) -> String {
        let mut lines = vec![format!("Intertype relations for {}:", relations.ap_type)];
        lines.extend(
            relations
                .rows
                .iter()
                .map(|row| format!("- {}: {}", row.name, Self::relation_row(&relations.ap_type, row))),
        );
        lines.join("\n")
    }

    /// Aligned table, one relation per line.
    pub fn intertypes_table(relations: &IntertypeRelations) -> String {
        relations
            .rows
            .iter()
            .map(|row| {
                let tag = format!("{}:", row.name);
                format!("{:<15} {}", tag, Self::relation_row(&relations.ap_type, row))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn triads(report: &TriadReport) -> String {
        report.lines().join("\n- ")
    }

    pub fn stats(stats: &TypingStats) -> String {
        let joined = |items: Vec<String>| if items.is_empty() { "none".to_string() } else { items.join(", ") };

        let mut lines = vec![
            format!("Typings: {} ({} distinct)", stats.typings, stats.distinct_types.len()),
            format!(
                "Missing attitudes ({}/16 covered): {}",
                stats.attitude_count(),
                joined(stats.missing_attitudes.iter().map(ToString::to_string).collect())
            ),
            format!(
                "Missing types ({}/24): {}",
                stats.missing_types.len(),
                joined(stats.missing_types.iter().map(ToString::to_string).collect())
            ),
        ];
        for block in &stats.blocks {
            let pairs: Vec<String> = block
                .pairs
                .iter()
                .map(|pair| {
                    let orders = if pair.orders.is_empty() { "-".to_string() } else { pair.orders.join("/") };
                    format!("{}-{} {}", pair.positions.0, pair.positions.1, orders)
                })
                .collect();
            lines.push(format!("{} ({}): {}", block.name, block.aspects, pairs.join(", ")));
        }
        lines.push(format!(
            "Block pairs: {}/36 unique, {}/72 directional",
            stats.pair_count, stats.pair_count_directional
        ));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ap::{all_relations, derive_shadow_types, relation, ApType};
    use crate::triads::get_triads;

    #[test]
    fn test_shadow_text() {
        let sequence = derive_shadow_types("VFEL", "1340").unwrap();
        let text = TextFormatter::shadow(&sequence);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Shadow types for VFEL 1340:");
        assert_eq!(lines[1], "- VFEL: AP type");
        assert!(lines[2].starts_with("- VFLE: "));
        assert!(lines[3].starts_with("- VLFE: "));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_skip_log_is_rendered() {
        let sequence = derive_shadow_types("VFEL", "1340").unwrap();
        let text = TextFormatter::shadow_verbose(&sequence);
        assert!(text.contains("Skip Accentuated 1-1"));
    }

    #[test]
    fn test_relation_text() {
        assert_eq!(relation("FVLE", "ELVF").unwrap().to_string(), "Dual: FVLE <—> ELVF (shared sexta)");
        assert_eq!(relation("FVLE", "LEVF").unwrap().to_string(), "Instruction: FVLE —> LEVF (square)");
        assert_eq!(relation("LEVF", "FVLE").unwrap().to_string(), "Instruction: FVLE —> LEVF (square)");
    }

    #[test]
    fn test_intertypes_text() {
        let relations = all_relations("FVLE").unwrap();
        let text = TextFormatter::intertypes(&relations);
        assert!(text.starts_with("Intertype relations for FVLE:\n- Dual: FVLE <—> ELVF (shared sexta)"));
        let table = TextFormatter::intertypes_table(&relations);
        assert_eq!(table.lines().next(), Some("Dual:           FVLE <—> ELVF (shared sexta)"));
        assert!(table.contains("Radiance:       EFVL <—> FVLE <—> VLEF (square)"));
    }

    #[test]
    fn test_triads_text() {
        let text = TextFormatter::triads(&get_triads("592").unwrap());
        assert!(text.starts_with("Triads for 259 trifix (Spineless Saint):\n- Object relation triads"));
    }

    #[test]
    fn test_stats_text() {
        let stats = TypingStats::from_types(&[ApType::parse("VLFE").unwrap()]);
        let text = TextFormatter::stats(&stats);
        assert!(text.contains("Missing attitudes (4/16 covered)"));
        assert!(text.contains("Strategist (V+L): 1-2 VL"));
        assert!(text.ends_with("Block pairs: 6/36 unique, 6/72 directional"));
    }
}
