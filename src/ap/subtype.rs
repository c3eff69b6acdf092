//! Subtype codes and their per-position entries
//!
//! A subtype is four digits in `0..=4`. Digit `i` names the position the
//! aspect at position `i` points at, with `0` meaning it points nowhere.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::types::{ApType, Aspect, POSITIONS};
use crate::error::{TypingError, TypingResult};

/// Four target digits, one per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SubtypeCode([u8; POSITIONS]);

impl SubtypeCode {
    pub fn parse(input: &str) -> TypingResult<Self> {
        let trimmed = input.trim();
        let invalid = || TypingError::InvalidSubtype(trimmed.to_string());

        let digits: Vec<u8> = trimmed
            .chars()
            .map(|c| match c {
                '0'..='4' => Some(c as u8 - b'0'),
                _ => None,
            })
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;
        let digits: [u8; POSITIONS] = digits.try_into().map_err(|_| invalid())?;
        Ok(Self(digits))
    }

    /// Target of the aspect at a 1-based source position.
    pub fn target_of(&self, source: u8) -> u8 {
        self.0[usize::from(source) - 1]
    }

    /// Build the four entries for an AP type, in position order.
    pub fn entries(&self, ap_type: &ApType) -> [SubtypeEntry; POSITIONS] {
        std::array::from_fn(|i| {
            let source = i as u8 + 1;
            SubtypeEntry::new(source, self.target_of(source), ap_type.aspect_at(source))
        })
    }
}

impl fmt::Display for SubtypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl FromStr for SubtypeCode {
    type Err = TypingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubtypeCode::parse(s)
    }
}

impl From<SubtypeCode> for String {
    fn from(value: SubtypeCode) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for SubtypeCode {
    type Error = TypingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SubtypeCode::parse(&value)
    }
}

/// Validate a subtype string without keeping the parsed value.
pub fn validate_subtype(input: &str) -> TypingResult<()> {
    SubtypeCode::parse(input).map(|_| ())
}

/// Classification of a (source, target) pair.
///
/// The swap categories are listed in the order the shadow engine applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Accentuated,
    Obscured,
    Method23,
    Method14,
    Self12,
    Self34,
    Others13,
    Others24,
}

impl Category {
    /// Swap categories in priority order.
    pub const SWAP_ORDER: [Category; 6] = [
        Category::Method23,
        Category::Method14,
        Category::Self12,
        Category::Self34,
        Category::Others13,
        Category::Others24,
    ];

    /// Total over source in `1..=4` and target in `0..=4`.
    pub fn classify(source: u8, target: u8) -> Category {
        debug_assert!((1..=4).contains(&source) && target <= 4);
        if source == target {
            return Category::Accentuated;
        }
        if target == 0 {
            return Category::Obscured;
        }
        match (source.min(target), source.max(target)) {
            (2, 3) => Category::Method23,
            (1, 4) => Category::Method14,
            (1, 2) => Category::Self12,
            (3, 4) => Category::Self34,
            (1, 3) => Category::Others13,
            // only {2, 4} is left among distinct pairs in 1..=4
            _ => Category::Others24,
        }
    }

    /// Phase name used in justifications.
    pub fn phase(&self) -> &'static str {
        match self {
            Category::Accentuated => "Accentuated",
            Category::Obscured => "Obscured",
            Category::Method23 | Category::Method14 => "Method",
            Category::Self12 | Category::Self34 => "Self",
            Category::Others13 | Category::Others24 => "Others",
        }
    }

    pub fn is_swap(&self) -> bool {
        Category::SWAP_ORDER.contains(self)
    }
}

/// One position of a subtype annotation applied to an AP type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubtypeEntry {
    pub source: u8,
    pub target: u8,
    pub aspect: Aspect,
    pub category: Category,
}

impl SubtypeEntry {
    pub fn new(source: u8, target: u8, aspect: Aspect) -> Self {
        Self {
            source,
            target,
            aspect,
            category: Category::classify(source, target),
        }
    }

    /// Stable identifier used to track spent entries.
    pub fn id(&self) -> (u8, u8) {
        (self.source, self.target)
    }
}
