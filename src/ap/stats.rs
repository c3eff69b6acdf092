//! Coverage statistics over a collection of typings
//!
//! Reports which of the 16 attitudes (position + aspect) and which of the 24
//! AP types are missing from a set of typings, and how the three aspect
//! blocks are covered across the 6 position pairs.

use serde::Serialize;

use super::types::{ApType, Aspect, POSITIONS};

/// An aspect at a 1-based position, e.g. `1V`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attitude {
    pub position: u8,
    pub aspect: Aspect,
}

impl std::fmt::Display for Attitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.position, self.aspect)
    }
}

/// A named pair of aspects.
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub name: &'static str,
    pub first: Aspect,
    pub second: Aspect,
}

/// Blocks in report order: each complementary pair listed together.
pub const BLOCKS: [Block; 6] = [
    Block { name: "Strategist", first: Aspect::Volition, second: Aspect::Logic },
    Block { name: "Reactivist", first: Aspect::Physics, second: Aspect::Emotion },
    Block { name: "Experiencer", first: Aspect::Volition, second: Aspect::Physics },
    Block { name: "Evaluator", first: Aspect::Logic, second: Aspect::Emotion },
    Block { name: "Conceptualist", first: Aspect::Volition, second: Aspect::Emotion },
    Block { name: "Realist", first: Aspect::Logic, second: Aspect::Physics },
];

/// Orders in which a block's aspects were seen at one position pair.
#[derive(Debug, Clone, Serialize)]
pub struct PairCoverage {
    pub positions: (u8, u8),
    /// e.g. `["VL", "LV"]`; empty when neither order occurs.
    pub orders: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockCoverage {
    pub name: &'static str,
    pub aspects: String,
    pub pairs: Vec<PairCoverage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TypingStats {
    pub typings: usize,
    pub distinct_types: Vec<ApType>,
    pub missing_attitudes: Vec<Attitude>,
    pub missing_types: Vec<ApType>,
    pub blocks: Vec<BlockCoverage>,
    /// Covered (block, position pair) combinations, out of 36.
    pub pair_count: usize,
    /// Covered ordered combinations, out of 72.
    pub pair_count_directional: usize,
}

impl TypingStats {
    pub fn from_types(types: &[ApType]) -> Self {
        let mut distinct_types: Vec<ApType> = Vec::new();
        for ap in types {
            if !distinct_types.contains(ap) {
                distinct_types.push(*ap);
            }
        }

        let mut missing_attitudes = Vec::new();
        for position in 1..=POSITIONS as u8 {
            for aspect in Aspect::ALL {
                if !distinct_types.iter().any(|t| t.aspect_at(position) == aspect) {
                    missing_attitudes.push(Attitude { position, aspect });
                }
            }
        }

        let missing_types = ApType::all()
            .into_iter()
            .filter(|t| !distinct_types.contains(t))
            .collect();

        let mut pair_count = 0;
        let mut pair_count_directional = 0;
        let blocks = BLOCKS
            .iter()
            .map(|block| {
                let mut pairs = Vec::new();
                for i in 1..=POSITIONS as u8 {
                    for j in i + 1..=POSITIONS as u8 {
                        let mut orders = Vec::new();
                        for (a, b) in [(block.first, block.second), (block.second, block.first)] {
                            if distinct_types.iter().any(|t| t.aspect_at(i) == a && t.aspect_at(j) == b) {
                                orders.push(format!("{a}{b}"));
                            }
                        }
                        if !orders.is_empty() {
                            pair_count += 1;
                            pair_count_directional += orders.len();
                        }
                        pairs.push(PairCoverage { positions: (i, j), orders });
                    }
                }
                BlockCoverage {
                    name: block.name,
                    aspects: format!("{}+{}", block.first, block.second),
                    pairs,
                }
            })
            .collect();

        Self {
            typings: types.len(),
            distinct_types,
            missing_attitudes,
            missing_types,
            blocks,
            pair_count,
            pair_count_directional,
        }
    }

    /// Attitudes covered out of 16.
    pub fn attitude_count(&self) -> usize {
        POSITIONS * POSITIONS - self.missing_attitudes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(list: &[&str]) -> Vec<ApType> {
        list.iter().map(|s| ApType::parse(s).unwrap()).collect()
    }

    #[test]
    fn test_empty_set_misses_everything() {
        let stats = TypingStats::from_types(&[]);
        assert_eq!(stats.missing_attitudes.len(), 16);
        assert_eq!(stats.missing_types.len(), 24);
        assert_eq!(stats.pair_count, 0);
        assert_eq!(stats.attitude_count(), 0);
    }

    #[test]
    fn test_duplicates_count_once() {
        let stats = TypingStats::from_types(&types(&["FVEL", "FVEL", "VLFE"]));
        assert_eq!(stats.typings, 3);
        assert_eq!(stats.distinct_types.len(), 2);
        assert_eq!(stats.missing_types.len(), 22);
        // positions 1,2,3,4 each get two distinct aspects
        assert_eq!(stats.attitude_count(), 8);
    }

    #[test]
    fn test_block_pairs() {
        let stats = TypingStats::from_types(&types(&["VLFE"]));
        let strategist = &stats.blocks[0];
        assert_eq!(strategist.aspects, "V+L");
        assert_eq!(strategist.pairs[0].positions, (1, 2));
        assert_eq!(strategist.pairs[0].orders, ["VL"]);
        // one type fills exactly one ordered pair per position pair
        assert_eq!(stats.pair_count, 6);
        assert_eq!(stats.pair_count_directional, 6);
    }
}
