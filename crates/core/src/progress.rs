//! Step-completion percentage for installation jobs.

use std::fmt;

/// Completion percentage, always within `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Progress(u8);

impl Progress {
    pub const COMPLETE: Self = Self(100);

    /// Percentage of `completed` over `total`, rounded half-up and then clamped to 100.
    ///
    /// A job that declares no steps reports 0.
    #[must_use]
    pub fn from_counts(completed: usize, total: usize) -> Self {
        if total == 0 {
            return Self(0);
        }

        // round(100k / n) for non-negative values == floor((200k + n) / 2n)
        let completed = completed as u128;
        let total = total as u128;
        let rounded = (200 * completed + total) / (2 * total);
        Self(rounded.min(100) as u8)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// True only at exactly 100.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self == Self::COMPLETE
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
