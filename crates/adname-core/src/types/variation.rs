use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{AdNameError, Result};

/// Variation marker of a creative: `V00` for the baseline, `V01`, `V02`, ...
/// for numbered alternates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variation {
    /// No variation (`V00`).
    Baseline,
    /// Numbered alternate, always at least 1.
    Numbered(NonZeroU32),
}

impl Variation {
    /// Creates a numbered variation.
    ///
    /// # Errors
    ///
    /// Returns `AdNameError::InvalidVariation` for zero.
    pub fn numbered(n: u32) -> Result<Self> {
        NonZeroU32::new(n)
            .map(Self::Numbered)
            .ok_or(AdNameError::InvalidVariation)
    }

    /// Returns `true` for a numbered alternate.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Numbered(_))
    }

    /// The variation number, if enabled.
    #[must_use]
    pub fn number(self) -> Option<u32> {
        match self {
            Self::Baseline => None,
            Self::Numbered(n) => Some(n.get()),
        }
    }
}

impl fmt::Display for Variation {
    /// Zero-padded to two digits; wider numbers are written in full.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Baseline => write!(f, "V00"),
            Self::Numbered(n) => write!(f, "V{:02}", n.get()),
        }
    }
}
