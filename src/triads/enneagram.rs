//! Enneagram trifix triads (one type from each of gut, image and head).

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::group::{order_tallies, validate_centers, TriadGroup};
use super::TriadReport;
use crate::error::{TypingError, TypingResult};

pub const CENTERS: TriadGroup = TriadGroup {
    name: "Centers",
    triads: [("gut", ["8", "9", "1"]), ("image", ["2", "3", "4"]), ("head", ["5", "6", "7"])],
};

pub const GROUPINGS: [TriadGroup; 3] = [
    TriadGroup {
        name: "Object relation triads",
        triads: [
            ("frustration", ["1", "4", "7"]),
            ("rejection", ["2", "5", "8"]),
            ("attachment", ["3", "6", "9"]),
        ],
    },
    TriadGroup {
        name: "Harmonic triads",
        triads: [
            ("competency", ["1", "3", "5"]),
            ("positive outlook", ["2", "7", "9"]),
            ("reactive", ["4", "6", "8"]),
        ],
    },
    TriadGroup {
        name: "Hornevian triads",
        triads: [
            ("superego", ["1", "2", "6"]),
            ("assertive", ["3", "7", "8"]),
            ("withdrawn", ["4", "5", "9"]),
        ],
    },
];

lazy_static! {
    /// Keyed by the sorted trifix.
    static ref NICKNAMES: HashMap<&'static str, &'static str> = [
        ("125", "Friendzone/Librarian"),
        ("126", "Ball Buster/OK Boomer"),
        ("127", "Cool Teacher"),
        ("135", "Robo-Celibate"),
        ("136", "Middle Manager"),
        ("137", "Welcome to My Ted Talk"),
        ("145", "Insectoid"),
        ("146", "Big Pain"),
        ("147", "Princess and the Pea"),
        ("258", "Cult Classic"),
        ("259", "Spineless Saint"),
        ("268", "I Want Her To Fly"),
        ("269", "Stockholm Syndrome"),
        ("278", "Smothering Jazz Hands"),
        ("279", "Hippie Burnout"),
        ("358", "American Psycho"),
        ("359", "Flatlined"),
        ("368", "Kyle/Kylie"),
        ("369", "Bermuda Triangle"),
        ("378", "Chad/Stacie"),
        ("379", "DJ"),
        ("458", "Useless Beast"),
        ("459", "Hateful Ghost"),
        ("468", "Public Display of Affliction"),
        ("469", "Whiny Tears"),
        ("478", "Revolving Door Rehab"),
        ("479", "Huh?"),
    ]
    .into_iter()
    .collect();
}

/// Classify three Enneagram types, e.g. `["5", "9", "2"]`.
pub fn classify(codes: &[&str], input: &str) -> TypingResult<TriadReport> {
    if codes.len() != 3 {
        return Err(TypingError::InvalidTriadInput(input.to_string()));
    }
    validate_centers(&CENTERS, codes, input)?;

    let mut sorted: Vec<&str> = codes.to_vec();
    sorted.sort_unstable();
    let canonical = sorted.concat();
    let nickname = NICKNAMES
        .get(canonical.as_str())
        .copied()
        .ok_or_else(|| TypingError::UnknownCombination(canonical.clone()))?;

    let tallies = order_tallies(GROUPINGS.iter().map(|g| g.tally(codes)).collect());
    Ok(TriadReport {
        header: format!("Triads for {canonical} trifix ({nickname}):"),
        canonical,
        nickname,
        tallies,
        stacking: None,
    })
}
