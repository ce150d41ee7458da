//! Solo-round performance commentary.
//!
//! Solo rounds have no opponent to beat, so the result screen grades the
//! round by how many pair attempts it took relative to the pair count.

use serde::{Deserialize, Serialize};

/// Grade for a finished solo round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Performance {
    /// One attempt per pair.
    Perfect,
    /// At most 1.5 attempts per pair.
    Excellent,
    /// At most 2 attempts per pair.
    Great,
    /// At most 3 attempts per pair.
    Good,
    KeepPracticing,
}

impl Performance {
    /// Grade a round from its pair count and resolved attempts.
    #[must_use]
    pub fn assess(num_pairs: u8, attempts: u32) -> Self {
        let pairs = u64::from(num_pairs);
        let attempts = u64::from(attempts);

        // Compare attempts / pairs against thresholds in integer halves.
        if attempts <= pairs {
            Performance::Perfect
        } else if attempts * 2 <= pairs * 3 {
            Performance::Excellent
        } else if attempts <= pairs * 2 {
            Performance::Great
        } else if attempts <= pairs * 3 {
            Performance::Good
        } else {
            Performance::KeepPracticing
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Performance::Perfect => "Perfect memory! Not a single miss.",
            Performance::Excellent => "Excellent! Barely a wasted flip.",
            Performance::Great => "Great job!",
            Performance::Good => "Good work. Try for fewer turns next time.",
            Performance::KeepPracticing => "Keep practicing!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(Performance::assess(6, 6), Performance::Perfect);
        assert_eq!(Performance::assess(6, 9), Performance::Excellent);
        assert_eq!(Performance::assess(6, 10), Performance::Great);
        assert_eq!(Performance::assess(6, 12), Performance::Great);
        assert_eq!(Performance::assess(6, 18), Performance::Good);
        assert_eq!(Performance::assess(6, 19), Performance::KeepPracticing);
    }

    #[test]
    fn test_every_grade_has_message() {
        for grade in [
            Performance::Perfect,
            Performance::Excellent,
            Performance::Great,
            Performance::Good,
            Performance::KeepPracticing,
        ] {
            assert!(!grade.message().is_empty());
        }
    }
}
