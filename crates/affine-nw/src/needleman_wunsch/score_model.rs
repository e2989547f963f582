//! Scoring scheme for the aligner.

use distances::{number::Float, Number};

/// Rewards for aligned symbols and costs for gaps.
///
/// Aligned symbols earn the identity score when they are equal and the
/// substitution score otherwise. A gap of length `k` costs
/// `gap_open + gap_extend * (k - 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreModel<T: Float> {
    /// The score for aligning two equal symbols.
    identity: T,
    /// The score for aligning two different symbols.
    substitution: T,
    /// The cost of the first position of a gap.
    gap_open: T,
    /// The cost of every further position of a gap.
    gap_extend: T,
}

impl<T: Float> Default for ScoreModel<T> {
    /// Identity 5, substitution -4, gap opening 10 and gap extension 0.5.
    fn default() -> Self {
        let two = T::ONE + T::ONE;
        let five = two + two + T::ONE;
        Self::new(five, -(two + two), five + five, T::ONE / two)
    }
}

impl<T: Float> ScoreModel<T> {
    /// Create a new scoring scheme.
    ///
    /// # Arguments
    ///
    /// * `identity`: The score for aligning two equal symbols.
    /// * `substitution`: The score for aligning two different symbols.
    /// * `gap_open`: The cost of opening a gap.
    /// * `gap_extend`: The cost of extending a gap by one position.
    #[must_use]
    pub const fn new(identity: T, substitution: T, gap_open: T, gap_extend: T) -> Self {
        Self {
            identity,
            substitution,
            gap_open,
            gap_extend,
        }
    }

    /// The score for aligning two equal symbols.
    pub const fn identity(&self) -> T {
        self.identity
    }

    /// The score for aligning two different symbols.
    pub const fn substitution(&self) -> T {
        self.substitution
    }

    /// The cost of opening a gap.
    pub const fn gap_open(&self) -> T {
        self.gap_open
    }

    /// The cost of extending a gap by one position.
    pub const fn gap_extend(&self) -> T {
        self.gap_extend
    }

    /// The score for aligning symbol `a` with symbol `b`.
    pub fn identity_score(&self, a: u8, b: u8) -> T {
        if a == b {
            self.identity
        } else {
            self.substitution
        }
    }

    /// The cost of a single gap of the given length.
    ///
    /// A length of zero is charged like a length of one.
    pub fn gap_cost(&self, length: usize) -> T {
        let extensions = length.saturating_sub(1);
        self.gap_open + self.gap_extend * <T as Number>::from(extensions)
    }
}
