//! Expanded Instincts archetypes (one instinct from each of SUR, INT and PUR),
//! with optional center stacking.

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::group::{order_tallies, validate_centers, TriadGroup};
use super::{StackingReport, TriadReport};
use crate::error::{TypingError, TypingResult};

pub const CENTERS: TriadGroup = TriadGroup {
    name: "Centers",
    triads: [("SUR", ["FD", "SY", "SM"]), ("INT", ["AY", "CY", "BG"]), ("PUR", ["SS", "EX", "UN"])],
};

pub const GROUPINGS: [TriadGroup; 3] = [
    TriadGroup {
        name: "Experiential triads",
        triads: [
            ("memorial", ["SM", "BG", "UN"]),
            ("immersion", ["AY", "SS", "FD"]),
            ("distinction", ["SY", "CY", "EX"]),
        ],
    },
    TriadGroup {
        name: "Movement triads",
        triads: [
            ("escaping (yin)", ["SY", "AY", "UN"]),
            ("aligning (neutral)", ["SM", "CY", "SS"]),
            ("directing (yang)", ["FD", "BG", "EX"]),
        ],
    },
    TriadGroup {
        name: "Source triads",
        triads: [
            ("internalizing", ["SY", "BG", "SS"]),
            ("externalizing", ["FD", "CY", "UN"]),
            ("exchanging", ["SM", "AY", "EX"]),
        ],
    },
];

lazy_static! {
    /// Keyed by the archetype in SUR-INT-PUR order.
    static ref NICKNAMES: HashMap<&'static str, &'static str> = [
        ("SY-CY-EX", "Existence Catalog"),
        ("SY-CY-SS", "Center of the Universe"),
        ("SY-CY-UN", "Tweaked-out Architect"),
        ("SY-AY-EX", "Whiny Popstar"),
        ("SY-BG-EX", "Soap Opera"),
        ("SY-AY-SS", "Sex Vortex"),
        ("SY-BG-UN", "Pixelated Dreamscape"),
        ("SY-AY-UN", "Dance, Monkey!"),
        ("SY-BG-SS", "Constant Inner Voice"),
        ("FD-CY-EX", "Clown Car CEO"),
        ("FD-CY-SS", "Rags-to-Riches"),
        ("FD-CY-UN", "Apocalypse Adventurer"),
        ("FD-AY-EX", "Soul Harvester"),
        ("FD-BG-EX", "Social Experiment"),
        ("FD-AY-SS", "Rubberneck Trainwreck"),
        ("FD-BG-UN", "Dazzling Kamikaze"),
        ("FD-AY-UN", "Astral Succubus"),
        ("FD-BG-SS", "Domination Station"),
        ("SM-CY-EX", "NPC Theatre Kid"),
        ("SM-CY-SS", "Kiss The Ring"),
        ("SM-CY-UN", "Spiritual Fuckboi"),
        ("SM-AY-EX", "Doppelgänger"),
        ("SM-BG-EX", "Otherworldly Communion"),
        ("SM-AY-SS", "Tesla Sexbot"),
        ("SM-BG-UN", "Delayed Response Unit"),
        ("SM-AY-UN", "Edgers Anonymous"),
        ("SM-BG-SS", "Perfect Delusion"),
    ]
    .into_iter()
    .collect();

    /// Stacking -> (resonant instincts, most resonant first).
    static ref RESONANT: HashMap<&'static str, [&'static str; 2]> = [
        ("SIP", ["FD", "CY"]),
        ("SPI", ["SM", "EX"]),
        ("IPS", ["AY", "EX"]),
        ("ISP", ["BG", "SY"]),
        ("PSI", ["SS", "SY"]),
        ("PIS", ["UN", "CY"]),
    ]
    .into_iter()
    .collect();

    /// Stacking -> (dissonant instincts, most dissonant first).
    static ref DISSONANT: HashMap<&'static str, [&'static str; 2]> = [
        ("SIP", ["SM", "BG"]),
        ("SPI", ["FD", "SS"]),
        ("IPS", ["UN", "BG"]),
        ("ISP", ["AY", "FD"]),
        ("PSI", ["UN", "SS"]),
        ("PIS", ["AY", "SM"]),
    ]
    .into_iter()
    .collect();
}

/// Single-letter initial of the center holding an instinct.
fn center_initial(code: &str) -> Option<char> {
    CENTERS.triad_of(code).and_then(|center| center.chars().next())
}

/// A stacking must be a permutation of `S`, `I` and `P`.
fn validate_stacking(stacking: &str, input: &str) -> TypingResult<String> {
    let stacking = stacking.trim().to_uppercase();
    let mut letters: Vec<char> = stacking.chars().collect();
    letters.sort_unstable();
    if letters != ['I', 'P', 'S'] {
        return Err(TypingError::InvalidTriadInput(input.to_string()));
    }
    Ok(stacking)
}

/// Classify three instincts, e.g. `["BG", "FD", "EX"]`.
///
/// With a stacking, the archetype is reordered to follow it; without one the
/// stacking is read off the input order.
pub fn classify(codes: &[&str], stacking: Option<&str>, input: &str) -> TypingResult<TriadReport> {
    if codes.len() != 3 {
        return Err(TypingError::InvalidTriadInput(input.to_string()));
    }
    let canonical_codes = validate_centers(&CENTERS, codes, input)?;

    let (stacking, ordered): (String, Vec<&str>) = match stacking {
        Some(stacking) => {
            let stacking = validate_stacking(stacking, input)?;
            let ordered = stacking
                .chars()
                .filter_map(|letter| codes.iter().copied().find(|c| center_initial(c) == Some(letter)))
                .collect();
            (stacking, ordered)
        }
        None => (codes.iter().filter_map(|c| center_initial(c)).collect(), codes.to_vec()),
    };

    let canonical = canonical_codes.join("-");
    let nickname = NICKNAMES
        .get(canonical.as_str())
        .copied()
        .ok_or_else(|| TypingError::UnknownCombination(canonical.clone()))?;

    let resonance = StackingReport::new(&stacking, codes)?;
    let archetype = ordered.join("-");
    let tallies = order_tallies(GROUPINGS.iter().map(|g| g.tally(codes)).collect());

    Ok(TriadReport {
        header: format!("Triads for {stacking} {archetype} ({nickname}):"),
        canonical,
        nickname,
        tallies,
        stacking: Some(resonance),
    })
}

impl StackingReport {
    fn new(stacking: &str, codes: &[&str]) -> TypingResult<Self> {
        let lookup = |table: &HashMap<&'static str, [&'static str; 2]>| {
            table
                .get(stacking)
                .copied()
                .ok_or_else(|| TypingError::UnknownCombination(stacking.to_string()))
        };
        let most_resonant = lookup(&*RESONANT)?;
        let most_dissonant = lookup(&*DISSONANT)?;
        let matching = |table: [&'static str; 2]| -> Vec<String> {
            codes
                .iter()
                .filter(|c| table.iter().any(|t| t == *c))
                .map(|c| c.to_string())
                .collect()
        };
        Ok(Self {
            stacking: stacking.to_string(),
            resonant: matching(most_resonant),
            most_resonant,
            dissonant: matching(most_dissonant),
            most_dissonant,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_archetype_has_a_nickname() {
        for sur in CENTERS.triads[0].1 {
            for int in CENTERS.triads[1].1 {
                for pur in CENTERS.triads[2].1 {
                    let report = classify(&[pur, sur, int], None, "archetype").unwrap();
                    assert_eq!(report.canonical, format!("{sur}-{int}-{pur}"));
                }
            }
        }
        assert_eq!(NICKNAMES.len(), 27);
    }

    #[test]
    fn test_stacking_read_from_input_order() {
        let report = classify(&["BG", "FD", "EX"], None, "BG-FD-EX").unwrap();
        assert_eq!(report.header, "Triads for ISP BG-FD-EX (Social Experiment):");
        let stacking = report.stacking.unwrap();
        assert_eq!(stacking.stacking, "ISP");
        assert_eq!(stacking.resonant, ["BG"]);
        assert_eq!(stacking.dissonant, ["FD"]);
    }

    #[test]
    fn test_explicit_stacking_reorders_archetype() {
        let report = classify(&["SY", "CY", "UN"], Some("spi"), "SPI SY-CY-UN").unwrap();
        assert_eq!(report.header, "Triads for SPI SY-UN-CY (Tweaked-out Architect):");
    }

    #[test]
    fn test_bad_stacking() {
        assert!(matches!(
            classify(&["SY", "CY", "UN"], Some("SSP"), "SSP SY-CY-UN"),
            Err(TypingError::InvalidTriadInput(_))
        ));
    }

    #[test]
    fn test_stacking_tables_cover_all_permutations() {
        assert_eq!(RESONANT.len(), 6);
        assert_eq!(DISSONANT.len(), 6);
        for key in RESONANT.keys() {
            assert!(validate_stacking(key, key).is_ok());
            assert!(DISSONANT.contains_key(key));
        }
    }
}
