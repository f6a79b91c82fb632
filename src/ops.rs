//! Public entry points (§6, §10.5): four convenience functions plus the
//! shared `boolean_op` dispatcher they're built on, mirroring `geo`'s
//! `OpType` enum and `BooleanOps::boolean_op` (`geo/src/algorithm/bool_ops/mod.rs`).

use std::str::FromStr;

use crate::error::OpError;
use crate::geometry::Polygon;
use crate::sweep;

/// The four Boolean operations this crate supports (§1, §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Intersection,
    Union,
    Difference,
    Xor,
}

impl FromStr for Operation {
    type Err = OpError;

    /// Parses an operation code the way an external driver (out of this
    /// crate's scope, §1) would after reading one from a file or the
    /// command line. This is the one place [`OpError::InvalidOperation`]
    /// (§7) is actually reachable, since [`Operation`] itself is a closed
    /// four-variant enum.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.to_ascii_lowercase().as_str() {
            "intersection" | "and" => Ok(Operation::Intersection),
            "union" | "or" => Ok(Operation::Union),
            "difference" | "subtract" | "not" => Ok(Operation::Difference),
            "xor" => Ok(Operation::Xor),
            _ => Err(OpError::InvalidOperation),
        }
    }
}

/// Compute `operation` on `subject` and `clip`, returning a new [`Polygon`].
pub fn boolean_op(subject: &Polygon, clip: &Polygon, operation: Operation) -> Polygon {
    sweep::compute(subject, clip, operation)
}

pub fn intersection(subject: &Polygon, clip: &Polygon) -> Polygon {
    boolean_op(subject, clip, Operation::Intersection)
}

pub fn union(subject: &Polygon, clip: &Polygon) -> Polygon {
    boolean_op(subject, clip, Operation::Union)
}

pub fn difference(subject: &Polygon, clip: &Polygon) -> Polygon {
    boolean_op(subject, clip, Operation::Difference)
}

pub fn xor(subject: &Polygon, clip: &Polygon) -> Polygon {
    boolean_op(subject, clip, Operation::Xor)
}
