use serde::{Deserialize, Serialize};

/// One reputation/confidence pair, kept exactly as the service reported it.
///
/// Both values are nominally 0-100 but are not clamped or validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Component {
    /// Higher is better.
    pub reputation: i32,

    /// The service's certainty in `reputation`.
    pub confidence: i32,
}

impl Component {
    pub fn new(reputation: i32, confidence: i32) -> Self {
        Self {
            reputation,
            confidence,
        }
    }

    /// Both values at or above their thresholds.
    pub fn meets(&self, threshold: i32, min_confidence: i32) -> bool {
        self.reputation >= threshold && self.confidence >= min_confidence
    }
}
