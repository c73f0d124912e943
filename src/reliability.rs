//! Reliability tiers for automatic decryptions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How trustworthy an automatic decryption is, by share of recognised words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Reliability {
    /// Under 20% of the words were recognised.
    NotReliableAtAll,
    /// 20% to 39%.
    VeryUnreliable,
    /// 40% to 59%.
    Unreliable,
    /// 60% to 79%.
    Reliable,
    /// 80% and above.
    VeryReliable,
}

impl Reliability {
    /// Classifies a rounded percentage. Each tier includes its lower bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarcrypt::Reliability;
    ///
    /// assert_eq!(Reliability::from_percent(80), Reliability::VeryReliable);
    /// assert_eq!(Reliability::from_percent(79), Reliability::Reliable);
    /// assert_eq!(Reliability::from_percent(0), Reliability::NotReliableAtAll);
    /// ```
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            80.. => Reliability::VeryReliable,
            60..=79 => Reliability::Reliable,
            40..=59 => Reliability::Unreliable,
            20..=39 => Reliability::VeryUnreliable,
            _ => Reliability::NotReliableAtAll,
        }
    }

    /// Human-readable label for the tier.
    pub fn label(self) -> &'static str {
        match self {
            Reliability::VeryReliable => "Very reliable",
            Reliability::Reliable => "Reliable",
            Reliability::Unreliable => "Unreliable",
            Reliability::VeryUnreliable => "Very unreliable",
            Reliability::NotReliableAtAll => "Not reliable at all",
        }
    }
}

impl fmt::Display for Reliability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Share of `valid` among `total`, as a percentage rounded half to even.
///
/// Returns 0 when `total` is 0.
pub(crate) fn percent(valid: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (valid as f64 / total as f64 * 100.0).round_ties_even() as u32
}
