//! Aspects and AP types
//!
//! An AP type is a permutation of the four aspects bound to four ordinal
//! positions (1 = leading ... 4 = weakest). Positions are 1-based everywhere
//! in this crate, matching how the domain writes them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{TypingError, TypingResult};

/// Number of positions in an AP type.
pub const POSITIONS: usize = 4;

/// One of the four cognitive aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Aspect {
    #[serde(rename = "V")]
    Volition,
    #[serde(rename = "L")]
    Logic,
    #[serde(rename = "F")]
    Physics,
    #[serde(rename = "E")]
    Emotion,
}

impl Aspect {
    /// Canonical enumeration order (`V L F E`).
    pub const ALL: [Aspect; POSITIONS] = [Aspect::Volition, Aspect::Logic, Aspect::Physics, Aspect::Emotion];

    pub fn letter(&self) -> char {
        match self {
            Aspect::Volition => 'V',
            Aspect::Logic => 'L',
            Aspect::Physics => 'F',
            Aspect::Emotion => 'E',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Aspect::Volition => "Volition",
            Aspect::Logic => "Logic",
            Aspect::Physics => "Physics",
            Aspect::Emotion => "Emotion",
        }
    }

    pub fn from_letter(c: char) -> Option<Aspect> {
        match c.to_ascii_uppercase() {
            'V' => Some(Aspect::Volition),
            'L' => Some(Aspect::Logic),
            'F' => Some(Aspect::Physics),
            'E' => Some(Aspect::Emotion),
            _ => None,
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A permutation of the four aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ApType([Aspect; POSITIONS]);

impl ApType {
    /// Parse after trimming and uppercasing.
    pub fn parse(input: &str) -> TypingResult<Self> {
        let normalized = input.trim().to_uppercase();
        let invalid = || TypingError::InvalidApType(normalized.clone());

        let mut aspects = [Aspect::Volition; POSITIONS];
        let mut seen = [false; POSITIONS];
        let mut len = 0;
        for c in normalized.chars() {
            if len == POSITIONS {
                return Err(invalid());
            }
            let aspect = Aspect::from_letter(c).ok_or_else(invalid)?;
            let slot = Aspect::ALL.iter().position(|a| *a == aspect).ok_or_else(invalid)?;
            if seen[slot] {
                return Err(invalid());
            }
            seen[slot] = true;
            aspects[len] = aspect;
            len += 1;
        }
        if len != POSITIONS {
            return Err(invalid());
        }
        Ok(Self(aspects))
    }

    /// All 24 permutations, ordered lexicographically by [`Aspect::ALL`] index.
    pub fn all() -> Vec<ApType> {
        let mut types = Vec::with_capacity(24);
        for a in 0..POSITIONS {
            for b in 0..POSITIONS {
                for c in 0..POSITIONS {
                    for d in 0..POSITIONS {
                        let idx = [a, b, c, d];
                        let mut used = [false; POSITIONS];
                        if idx.iter().all(|&i| !std::mem::replace(&mut used[i], true)) {
                            types.push(ApType(idx.map(|i| Aspect::ALL[i])));
                        }
                    }
                }
            }
        }
        types
    }

    pub fn aspects(&self) -> &[Aspect; POSITIONS] {
        &self.0
    }

    /// Aspect at a 1-based position.
    pub fn aspect_at(&self, position: u8) -> Aspect {
        self.0[usize::from(position) - 1]
    }

    /// 1-based position of an aspect. Every aspect is present exactly once.
    pub fn position_of(&self, aspect: Aspect) -> u8 {
        let idx = self.0.iter().position(|a| *a == aspect).unwrap_or_default();
        idx as u8 + 1
    }

    /// Exchange the aspects at two 1-based positions.
    pub fn swap(&mut self, p1: u8, p2: u8) {
        self.0.swap(usize::from(p1) - 1, usize::from(p2) - 1);
    }

    /// Positional remap from `self` to `other`.
    pub fn remap_to(&self, other: &ApType) -> Remap {
        Remap(other.0.map(|aspect| self.position_of(aspect)))
    }

    /// The AP type `other` such that `self.remap_to(&other) == remap`.
    pub fn apply(&self, remap: &Remap) -> ApType {
        ApType(remap.0.map(|p| self.aspect_at(p)))
    }
}

impl fmt::Display for ApType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for aspect in &self.0 {
            write!(f, "{}", aspect.letter())?;
        }
        Ok(())
    }
}

impl FromStr for ApType {
    type Err = TypingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApType::parse(s)
    }
}

impl From<ApType> for String {
    fn from(value: ApType) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for ApType {
    type Error = TypingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ApType::parse(&value)
    }
}

/// Validate an AP type string without keeping the parsed value.
pub fn validate_ap_type(input: &str) -> TypingResult<()> {
    ApType::parse(input).map(|_| ())
}

/// Canonical positional remap between two AP types.
///
/// Digit `i` is the 1-based position in the first type of the aspect found at
/// position `i` of the second type. `1234` is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Remap([u8; POSITIONS]);

impl Remap {
    pub const IDENTITY: Remap = Remap([1, 2, 3, 4]);

    /// Build from literal digits. Callers guarantee a permutation of `1..=4`.
    pub(crate) const fn from_digits(digits: [u8; POSITIONS]) -> Remap {
        Remap(digits)
    }

    pub fn digits(&self) -> &[u8; POSITIONS] {
        &self.0
    }

    /// The remap that undoes this one.
    pub fn inverse(&self) -> Remap {
        let mut inv = [0u8; POSITIONS];
        for (i, &p) in self.0.iter().enumerate() {
            inv[usize::from(p) - 1] = i as u8 + 1;
        }
        Remap(inv)
    }
}

impl FromStr for Remap {
    type Err = TypingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TypingError::UnknownRelation(s.to_string());
        let digits: Vec<u8> = s
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;
        let digits: [u8; POSITIONS] = digits.try_into().map_err(|_| invalid())?;
        let mut seen = [false; POSITIONS];
        for &d in &digits {
            if !(1..=POSITIONS as u8).contains(&d) || std::mem::replace(&mut seen[usize::from(d) - 1], true) {
                return Err(invalid());
            }
        }
        Ok(Remap(digits))
    }
}

impl fmt::Display for Remap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let ap = ApType::parse("  vfel \n").unwrap();
        assert_eq!(ap.to_string(), "VFEL");
        assert_eq!(ap.aspect_at(1), Aspect::Volition);
        assert_eq!(ap.position_of(Aspect::Logic), 4);
    }

    #[test]
    fn test_parse_rejects_non_permutations() {
        for bad in ["ABCD", "VLLE", "VLEFA", "VLE", "", "VL E"] {
            assert!(ApType::parse(bad).is_err(), "{bad} should be rejected");
        }
        assert_eq!(
            ApType::parse("vlle").unwrap_err(),
            TypingError::InvalidApType("VLLE".to_string())
        );
    }

    #[test]
    fn test_all_permutations() {
        let all = ApType::all();
        assert_eq!(all.len(), 24);
        assert_eq!(all[0].to_string(), "VLFE");
        assert_eq!(all[23].to_string(), "EFLV");
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 24);
    }

    #[test]
    fn test_remap_and_apply_are_consistent() {
        let a = ApType::parse("FVLE").unwrap();
        let b = ApType::parse("ELVF").unwrap();
        let remap = a.remap_to(&b);
        assert_eq!(remap.to_string(), "4321");
        assert_eq!(a.apply(&remap), b);
        assert_eq!(a.remap_to(&a), Remap::IDENTITY);
        assert_eq!(b.remap_to(&a), remap.inverse());
    }

    #[test]
    fn test_remap_parse() {
        assert_eq!("2341".parse::<Remap>().unwrap().inverse().to_string(), "4123");
        assert!("1123".parse::<Remap>().is_err());
        assert!("12345".parse::<Remap>().is_err());
        assert!("1205".parse::<Remap>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let ap = ApType::parse("LFVE").unwrap();
        assert_eq!(serde_json::to_string(&ap).unwrap(), "\"LFVE\"");
        let back: ApType = serde_json::from_str("\"lfve\"").unwrap();
        assert_eq!(back, ap);
    }
}
