//! Measurement axes and their positional wire keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reputation dimension the service rates sites on.
///
/// Each axis travels as an integer-keyed entry of a result record. Keys `1`
/// and `2` (vendor reliability, privacy) are deprecated upstream and have no
/// variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Trustworthiness,
    ChildSafety,
}

impl Axis {
    /// Every axis the parser reads.
    pub const ALL: [Axis; 2] = [Axis::Trustworthiness, Axis::ChildSafety];

    /// Key of this axis inside a per-host result record.
    pub fn wire_key(&self) -> &'static str {
        match self {
            Self::Trustworthiness => "0",
            Self::ChildSafety => "4",
        }
    }

    /// Inverse of [`Axis::wire_key`]. Deprecated and unknown keys map to `None`.
    pub fn from_wire_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|axis| axis.wire_key() == key)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trustworthiness => "trustworthiness",
            Self::ChildSafety => "child safety",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
