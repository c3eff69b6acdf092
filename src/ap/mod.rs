//! AP Typing Module
//!
//! Aspects, AP types and subtype codes, plus the calculators built on them:
//! shadow types, intertype relations and typing coverage statistics.

pub mod types;
pub mod subtype;
pub mod shadow;
pub mod intertype;
pub mod stats;

pub use types::{validate_ap_type, ApType, Aspect, Remap};
pub use subtype::{validate_subtype, Category, SubtypeCode, SubtypeEntry};
pub use shadow::{derive_shadow_types, Justification, ShadowSequence, ShadowType, Skip};
pub use intertype::{all_relations, relation, Direction, IntertypeRelations, RelationCategory, RelationDescription};
pub use stats::TypingStats;
