//! Triad Classifier
//!
//! Groups three codes (an Enneagram trifix or an Expanded Instincts archetype)
//! into the triads of three independent groupings, after checking that the
//! codes cover the three centers once each.

pub mod group;
pub mod enneagram;
pub mod instincts;

use serde::Serialize;

use crate::error::{TypingError, TypingResult};
pub use group::{TriadGroup, TriadTally};

/// Code universe of a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriadDomainKind {
    /// Single digits `1`..`9`.
    Enneagram,
    /// Two-letter instinct codes such as `SY` or `EX`.
    ExpandedInstincts,
}

/// Resonant and dissonant instincts for a center stacking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackingReport {
    pub stacking: String,
    /// Input instincts found in the resonant set, in input order.
    pub resonant: Vec<String>,
    pub most_resonant: [&'static str; 2],
    pub dissonant: Vec<String>,
    pub most_dissonant: [&'static str; 2],
}

impl StackingReport {
    fn listed(codes: &[String]) -> String {
        if codes.is_empty() {
            "none".to_string()
        } else {
            codes.join("/")
        }
    }

    pub fn lines(&self) -> [String; 2] {
        [
            format!(
                "Resonant instincts for {}: {} (most resonant {})",
                self.stacking,
                Self::listed(&self.resonant),
                self.most_resonant.join("/")
            ),
            format!(
                "Dissonant instincts for {}: {} (most dissonant {})",
                self.stacking,
                Self::listed(&self.dissonant),
                self.most_dissonant.join("/")
            ),
        ]
    }
}

/// Result of classifying one combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriadReport {
    pub header: String,
    /// Nickname key: sorted trifix or SUR-INT-PUR archetype.
    pub canonical: String,
    pub nickname: &'static str,
    /// Groupings, most concentrated first.
    pub tallies: Vec<TriadTally>,
    pub stacking: Option<StackingReport>,
}

impl TriadReport {
    /// Header, one summary per grouping, then any stacking lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.header.clone()];
        lines.extend(self.tallies.iter().map(ToString::to_string));
        if let Some(stacking) = &self.stacking {
            lines.extend(stacking.lines());
        }
        lines
    }
}

/// Classify already split codes for a domain.
///
/// A stacking only applies to Expanded Instincts.
pub fn classify_triads(codes: &[&str], domain: TriadDomainKind, stacking: Option<&str>) -> TypingResult<TriadReport> {
    let input = codes.join(" ");
    match domain {
        TriadDomainKind::Enneagram => {
            if stacking.is_some() {
                return Err(TypingError::InvalidTriadInput(input));
            }
            enneagram::classify(codes, &input)
        }
        TriadDomainKind::ExpandedInstincts => instincts::classify(codes, stacking, &input),
    }
}

/// Parse free-form input and classify it.
///
/// Three characters are read as a trifix (`"592"`); anything else as an
/// archetype with an optional leading stacking (`"BG-FD-EX"`, `"SPI SY-CY-UN"`).
pub fn get_triads(input: &str) -> TypingResult<TriadReport> {
    let normalized = input.trim().to_uppercase();
    if normalized.chars().count() == 3 {
        let digits: Vec<String> = normalized.chars().map(String::from).collect();
        let codes: Vec<&str> = digits.iter().map(String::as_str).collect();
        return enneagram::classify(&codes, input);
    }

    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    let (stacking, archetype) = match tokens.as_slice() {
        [archetype] => (None, *archetype),
        [stacking, archetype] => (Some(*stacking), *archetype),
        _ => return Err(TypingError::InvalidTriadInput(input.to_string())),
    };
    let codes: Vec<&str> = archetype.split('-').collect();
    instincts::classify(&codes, stacking, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trifix_592() {
        let report = get_triads("592").unwrap();
        assert_eq!(report.canonical, "259");
        assert_eq!(
            report.lines(),
            [
                "Triads for 259 trifix (Spineless Saint):",
                "Object relation triads: 2x rejection, 1x attachment, 0x frustration",
                "Harmonic triads: 2x positive outlook, 1x competency, 0x reactive",
                "Hornevian triads: 2x withdrawn, 1x superego, 0x assertive",
            ]
        );
    }

    #[test]
    fn test_triple_grouping_comes_first() {
        let report = get_triads("369").unwrap();
        assert_eq!(report.tallies[0].to_string(), "Object relation triads: 3x attachment, 0x frustration, 0x rejection");
    }

    #[test]
    fn test_archetype_lines() {
        let lines = get_triads(" spi sy-cy-un ").unwrap().lines();
        assert_eq!(lines[0], "Triads for SPI SY-UN-CY (Tweaked-out Architect):");
        assert_eq!(lines[4], "Resonant instincts for SPI: none (most resonant SM/EX)");
        assert_eq!(lines[5], "Dissonant instincts for SPI: none (most dissonant FD/SS)");
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(get_triads("12"), Err(TypingError::InvalidTriadInput(_))));
        assert!(matches!(get_triads("SY-CY"), Err(TypingError::InvalidTriadInput(_))));
        assert!(matches!(get_triads("a b c"), Err(TypingError::InvalidTriadInput(_))));
        assert!(matches!(get_triads("123"), Err(TypingError::InvalidCenterDistribution(_))));
        assert!(matches!(get_triads("SY-FD-EX"), Err(TypingError::InvalidCenterDistribution(_))));
    }

    #[test]
    fn test_classify_by_domain() {
        let report = classify_triads(&["FD", "CY", "EX"], TriadDomainKind::ExpandedInstincts, None).unwrap();
        assert_eq!(report.nickname, "Clown Car CEO");
        assert!(classify_triads(&["5", "9", "2"], TriadDomainKind::Enneagram, Some("SIP")).is_err());
    }
}
