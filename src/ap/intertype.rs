//! Intertype relations
//!
//! Seventeen named relations cover the 24 positional remaps between two AP
//! types. Fourteen relations own one remap; Radiance, Suffocation and the four
//! directed triangular/square relations own two each.

use lazy_static::lazy_static;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use super::types::{ApType, Remap};
use crate::error::{TypingError, TypingResult};

/// Category label of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationCategory {
    SharedSexta,
    Square,
    Triangular,
    Linear,
    OpposedSexta,
    OpposedSextaSquare,
}

impl RelationCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RelationCategory::SharedSexta => "shared sexta",
            RelationCategory::Square => "square",
            RelationCategory::Triangular => "triangular",
            RelationCategory::Linear => "linear",
            RelationCategory::OpposedSexta => "opposed sexta",
            RelationCategory::OpposedSextaSquare => "opposed sexta, square",
        }
    }
}

impl fmt::Display for RelationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a relation reads the same from both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Symmetry {
    Symmetric,
    /// First remap is the incoming side, second the outgoing side.
    Directed,
}

/// A named relation and the remaps that realise it.
#[derive(Debug)]
pub struct Relation {
    pub name: &'static str,
    pub category: RelationCategory,
    pub symmetry: Symmetry,
    pub remaps: &'static [Remap],
}

const fn r(digits: [u8; 4]) -> Remap {
    Remap::from_digits(digits)
}

/// Relations in presentation order.
pub static RELATIONS: [Relation; 17] = [
    Relation { name: "Dual", category: RelationCategory::SharedSexta, symmetry: Symmetry::Symmetric, remaps: &[r([4, 3, 2, 1])] },
    Relation { name: "Identical", category: RelationCategory::SharedSexta, symmetry: Symmetry::Symmetric, remaps: &[r([1, 2, 3, 4])] },
    Relation { name: "Solution", category: RelationCategory::SharedSexta, symmetry: Symmetry::Symmetric, remaps: &[r([4, 2, 3, 1])] },
    Relation { name: "Sister", category: RelationCategory::SharedSexta, symmetry: Symmetry::Symmetric, remaps: &[r([1, 3, 2, 4])] },
    Relation { name: "Radiance", category: RelationCategory::Square, symmetry: Symmetry::Symmetric, remaps: &[r([4, 1, 2, 3]), r([2, 3, 4, 1])] },
    Relation { name: "Instruction", category: RelationCategory::Square, symmetry: Symmetry::Directed, remaps: &[r([4, 3, 1, 2]), r([3, 4, 2, 1])] },
    Relation { name: "Invention", category: RelationCategory::Triangular, symmetry: Symmetry::Directed, remaps: &[r([1, 3, 4, 2]), r([1, 4, 2, 3])] },
    Relation { name: "Assistance", category: RelationCategory::Triangular, symmetry: Symmetry::Directed, remaps: &[r([4, 2, 1, 3]), r([3, 2, 4, 1])] },
    Relation { name: "Enhancement", category: RelationCategory::Triangular, symmetry: Symmetry::Directed, remaps: &[r([4, 1, 3, 2]), r([2, 4, 3, 1])] },
    Relation { name: "Regulation", category: RelationCategory::Triangular, symmetry: Symmetry::Directed, remaps: &[r([2, 3, 1, 4]), r([3, 1, 2, 4])] },
    Relation { name: "Near-Identical", category: RelationCategory::Linear, symmetry: Symmetry::Symmetric, remaps: &[r([2, 1, 3, 4])] },
    Relation { name: "Cousin", category: RelationCategory::Linear, symmetry: Symmetry::Symmetric, remaps: &[r([1, 2, 4, 3])] },
    Relation { name: "Customary", category: RelationCategory::Linear, symmetry: Symmetry::Symmetric, remaps: &[r([1, 4, 3, 2])] },
    Relation { name: "Specificity", category: RelationCategory::Linear, symmetry: Symmetry::Symmetric, remaps: &[r([3, 2, 1, 4])] },
    Relation { name: "Faux-Identical", category: RelationCategory::OpposedSexta, symmetry: Symmetry::Symmetric, remaps: &[r([2, 1, 4, 3])] },
    Relation { name: "Suffocation", category: RelationCategory::OpposedSextaSquare, symmetry: Symmetry::Symmetric, remaps: &[r([2, 4, 1, 3]), r([3, 1, 4, 2])] },
    Relation { name: "Conflict", category: RelationCategory::OpposedSexta, symmetry: Symmetry::Symmetric, remaps: &[r([3, 4, 1, 2])] },
];

lazy_static! {
    /// Remap -> (relation, index of the remap within the relation).
    static ref REMAP_TABLE: HashMap<Remap, (&'static Relation, usize)> = {
        let mut table = HashMap::new();
        for relation in RELATIONS.iter() {
            for (side, remap) in relation.remaps.iter().enumerate() {
                table.insert(*remap, (relation, side));
            }
        }
        table
    };
}

/// Reading direction of a relation between two given types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `first <—> second`
    Mutual,
    /// `first —> second`
    Forward,
    /// `second —> first`
    Backward,
}

/// The relation between two specific AP types.
#[derive(Debug, Clone, Serialize)]
pub struct RelationDescription {
    #[serde(serialize_with = "serialize_relation_name")]
    pub relation: &'static Relation,
    pub category: RelationCategory,
    #[serde(serialize_with = "serialize_display")]
    pub remap: Remap,
    pub direction: Direction,
    pub first: ApType,
    pub second: ApType,
}

impl RelationDescription {
    pub fn name(&self) -> &'static str {
        self.relation.name
    }
}

fn serialize_relation_name<S: Serializer>(relation: &&'static Relation, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(relation.name)
}

fn serialize_display<S: Serializer>(value: &Remap, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}

/// Look up the relation for an already validated pair.
pub fn relation_between(first: ApType, second: ApType) -> TypingResult<RelationDescription> {
    let remap = first.remap_to(&second);
    let (relation, side) = REMAP_TABLE
        .get(&remap)
        .copied()
        .ok_or_else(|| TypingError::UnknownRelation(remap.to_string()))?;

    let direction = match (relation.symmetry, side) {
        (Symmetry::Symmetric, _) => Direction::Mutual,
        (Symmetry::Directed, 0) => Direction::Backward,
        (Symmetry::Directed, _) => Direction::Forward,
    };

    Ok(RelationDescription {
        relation,
        category: relation.category,
        remap,
        direction,
        first,
        second,
    })
}

/// Validate both AP types and describe their relation.
pub fn relation(first: &str, second: &str) -> TypingResult<RelationDescription> {
    let first = ApType::parse(first)?;
    let second = ApType::parse(second)?;
    relation_between(first, second)
}

/// One row of the all-relations listing.
#[derive(Debug, Clone, Serialize)]
pub struct RelationRow {
    pub name: &'static str,
    pub category: RelationCategory,
    pub symmetry: Symmetry,
    /// Other side of each remap, in table order.
    pub others: Vec<ApType>,
}

/// All 17 relations of one AP type.
#[derive(Debug, Clone, Serialize)]
pub struct IntertypeRelations {
    pub ap_type: ApType,
    pub rows: Vec<RelationRow>,
}

impl IntertypeRelations {
    pub fn for_type(ap_type: ApType) -> Self {
        let rows = RELATIONS
            .iter()
            .map(|relation| RelationRow {
                name: relation.name,
                category: relation.category,
                symmetry: relation.symmetry,
                others: relation.remaps.iter().map(|remap| ap_type.apply(remap)).collect(),
            })
            .collect();
        Self { ap_type, rows }
    }

    pub fn get(&self, name: &str) -> Option<&RelationRow> {
        self.rows.iter().find(|row| row.name == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Validate an AP type and list its relations.
pub fn all_relations(ap_type: &str) -> TypingResult<IntertypeRelations> {
    Ok(IntertypeRelations::for_type(ApType::parse(ap_type)?))
}
