//! Shadow-type derivation
//!
//! Applies a fixed, prioritized sequence of swaps to a working copy of an AP
//! type, driven by the subtype entries:
//!
//! 1. Obscured: an entry pointing nowhere pulls in the single other entry that
//!    points at its position. Zero or several candidates skip the entry.
//! 2. Method (2-3, then 1-4), Self (1-2, then 3-4), Others (1-3, then 2-4).
//!
//! Each swap moves the entry's aspect from wherever it currently is to the
//! entry's target. Entries consumed by the obscured phase are spent. The
//! result keeps the first-seen order of each distinct permutation; revisits
//! and no-op swaps extend the justification of the existing entry.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use super::subtype::{Category, SubtypeCode, SubtypeEntry};
use super::types::ApType;
use crate::error::TypingResult;

/// Why a permutation appears in a shadow sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Justification {
    /// The input AP type itself.
    ApType,
    /// A swap triggered by a Method/Self/Others entry.
    Swap { entry: SubtypeEntry },
    /// A swap that resolved an obscured entry.
    ObscuredSwap { entry: SubtypeEntry, obscured: SubtypeEntry },
    /// The entry's aspect was already at its target.
    AlreadyAt {
        entry: SubtypeEntry,
        obscured: Option<SubtypeEntry>,
    },
}

/// An entry that did not trigger a swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Skip {
    Accentuated { entry: SubtypeEntry },
    /// Nothing points at the obscured position.
    ObscuredUnmatched { entry: SubtypeEntry },
    /// Several entries point at the obscured position.
    ObscuredAmbiguous {
        entry: SubtypeEntry,
        candidates: Vec<SubtypeEntry>,
    },
    /// Already consumed by the obscured phase.
    Resolved { entry: SubtypeEntry },
}

/// One distinct permutation and every justification that reached it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowType {
    pub ap_type: ApType,
    pub justifications: Vec<Justification>,
}

/// Ordered, deduplicated result of a derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowSequence {
    pub ap_type: ApType,
    pub subtype: SubtypeCode,
    pub shadow_types: Vec<ShadowType>,
    pub skipped: Vec<Skip>,
}

impl ShadowSequence {
    /// Derive the shadow sequence for validated inputs.
    pub fn derive(ap_type: ApType, subtype: SubtypeCode) -> Self {
        let entries = subtype.entries(&ap_type);
        let mut engine = ShadowEngine::new(ap_type, subtype);

        for entry in entries.iter().filter(|e| e.category == Category::Accentuated) {
            engine.skip(Skip::Accentuated { entry: *entry });
        }

        for obscured in entries.iter().filter(|e| e.category == Category::Obscured) {
            let candidates: Vec<SubtypeEntry> = entries
                .iter()
                .filter(|other| other.source != obscured.source && other.target == obscured.source)
                .copied()
                .collect();
            match candidates.len() {
                0 => engine.skip(Skip::ObscuredUnmatched { entry: *obscured }),
                1 => {
                    let other = candidates[0];
                    engine.swap(&other, Some(obscured));
                    engine.resolved.insert(other.id());
                }
                _ => engine.skip(Skip::ObscuredAmbiguous {
                    entry: *obscured,
                    candidates,
                }),
            }
        }

        for category in Category::SWAP_ORDER {
            for entry in entries.iter().filter(|e| e.category == category) {
                if engine.resolved.contains(&entry.id()) {
                    engine.skip(Skip::Resolved { entry: *entry });
                } else {
                    engine.swap(entry, None);
                }
            }
        }

        engine.finish()
    }

    /// Permutations in first-seen order.
    pub fn keys(&self) -> Vec<ApType> {
        self.shadow_types.iter().map(|s| s.ap_type).collect()
    }

    pub fn get(&self, ap_type: &ApType) -> Option<&ShadowType> {
        self.shadow_types.iter().find(|s| s.ap_type == *ap_type)
    }

    pub fn len(&self) -> usize {
        self.shadow_types.len()
    }

    /// Always false: the input AP type is the first entry.
    pub fn is_empty(&self) -> bool {
        self.shadow_types.is_empty()
    }
}

/// Working state of one derivation.
struct ShadowEngine {
    working: ApType,
    sequence: ShadowSequence,
    resolved: HashSet<(u8, u8)>,
}

impl ShadowEngine {
    fn new(ap_type: ApType, subtype: SubtypeCode) -> Self {
        Self {
            working: ap_type,
            sequence: ShadowSequence {
                ap_type,
                subtype,
                shadow_types: vec![ShadowType {
                    ap_type,
                    justifications: vec![Justification::ApType],
                }],
                skipped: Vec::new(),
            },
            resolved: HashSet::new(),
        }
    }

    fn swap(&mut self, entry: &SubtypeEntry, obscured: Option<&SubtypeEntry>) {
        let current = self.working.position_of(entry.aspect);
        if current == entry.target {
            debug!(
                "{} {}-{}: {} already at {} in {}",
                entry.category.phase(), entry.source, entry.target, entry.aspect, entry.target, self.working
            );
            self.record(Justification::AlreadyAt {
                entry: *entry,
                obscured: obscured.copied(),
            });
            return;
        }

        self.working.swap(current, entry.target);
        debug!(
            "Swap {} {}-{}: {}",
            entry.category.phase(), entry.source, entry.target, self.working
        );
        let justification = match obscured {
            Some(obscured) => Justification::ObscuredSwap {
                entry: *entry,
                obscured: *obscured,
            },
            None => Justification::Swap { entry: *entry },
        };
        self.record(justification);
    }

    fn record(&mut self, justification: Justification) {
        let working = self.working;
        match self
            .sequence
            .shadow_types
            .iter_mut()
            .find(|s| s.ap_type == working)
        {
            Some(existing) => existing.justifications.push(justification),
            None => self.sequence.shadow_types.push(ShadowType {
                ap_type: working,
                justifications: vec![justification],
            }),
        }
    }

    fn skip(&mut self, skip: Skip) {
        debug!("Skip {:?}", skip);
        self.sequence.skipped.push(skip);
    }

    fn finish(self) -> ShadowSequence {
        self.sequence
    }
}

/// Validate both inputs and derive the shadow sequence.
pub fn derive_shadow_types(ap_type: &str, subtype: &str) -> TypingResult<ShadowSequence> {
    let ap_type = ApType::parse(ap_type)?;
    let subtype = SubtypeCode::parse(subtype)?;
    Ok(ShadowSequence::derive(ap_type, subtype))
}
