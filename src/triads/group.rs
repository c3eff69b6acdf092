//! Triad groups: a partition of a 9-code domain into 3 named triads of 3.

use serde::Serialize;

use crate::error::{TypingError, TypingResult};

/// A named partition of nine codes into three triads.
#[derive(Debug)]
pub struct TriadGroup {
    pub name: &'static str,
    pub triads: [(&'static str, [&'static str; 3]); 3],
}

impl TriadGroup {
    /// Triad containing a code.
    pub fn triad_of(&self, code: &str) -> Option<&'static str> {
        self.triads
            .iter()
            .find(|(_, members)| members.iter().any(|m| *m == code))
            .map(|(triad, _)| *triad)
    }

    /// Count codes per triad, in declaration order. Codes outside the domain are ignored.
    pub fn tally(&self, codes: &[&str]) -> TriadTally {
        let counts = self
            .triads
            .iter()
            .map(|(triad, members)| {
                let count = codes.iter().filter(|c| members.iter().any(|m| m == *c)).count();
                (*triad, count)
            })
            .collect();
        TriadTally { group: self.name, counts }
    }
}

/// Per-triad counts of one group for one combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriadTally {
    pub group: &'static str,
    pub counts: Vec<(&'static str, usize)>,
}

impl TriadTally {
    pub fn max_count(&self) -> usize {
        self.counts.iter().map(|(_, n)| *n).max().unwrap_or(0)
    }

    /// Counts sorted descending; ties keep declaration order.
    pub fn sorted_counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts = self.counts.clone();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

impl std::fmt::Display for TriadTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: Vec<String> = self
            .sorted_counts()
            .iter()
            .map(|(triad, count)| format!("{count}x {triad}"))
            .collect();
        write!(f, "{}: {}", self.group, counts.join(", "))
    }
}

/// Put a group with a triple first, then groups with a double. Ties keep input order.
pub fn order_tallies(mut tallies: Vec<TriadTally>) -> Vec<TriadTally> {
    tallies.sort_by(|a, b| b.max_count().cmp(&a.max_count()));
    tallies
}

/// Checks that a combination has exactly one code per center.
///
/// Returns the codes reordered by center (canonical order).
pub fn validate_centers<'a>(centers: &TriadGroup, codes: &[&'a str], input: &str) -> TypingResult<Vec<&'a str>> {
    for code in codes {
        if centers.triad_of(code).is_none() {
            return Err(TypingError::InvalidTriadInput(input.to_string()));
        }
    }
    let tally = centers.tally(codes);
    if tally.counts.iter().any(|(_, n)| *n != 1) {
        return Err(TypingError::InvalidCenterDistribution(input.to_string()));
    }
    let canonical = centers
        .triads
        .iter()
        .filter_map(|(_, members)| codes.iter().find(|c| members.iter().any(|m| m == *c)).copied())
        .collect();
    Ok(canonical)
}
