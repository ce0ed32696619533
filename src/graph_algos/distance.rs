use super::Cost;

use std::fmt;
use serde::{Serialize, Serializer};


/// Minimum cumulative weight from the start node
/// `Infinite` marks a node with no path from the start.
/// Ordering puts every finite distance below `Infinite`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(Cost),
    Infinite,
}

impl Distance {

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(&self) -> Option<Cost> {
        match self {
            Distance::Finite(w) => Some(*w),
            Distance::Infinite => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{w}"),
            Distance::Infinite => f.write_str("inf"),
        }
    }
}

// JSON has no infinity literal
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(w) => serializer.serialize_u128(*w),
            Distance::Infinite => serializer.serialize_str("Infinity"),
        }
    }
}
