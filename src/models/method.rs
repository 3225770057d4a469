//! Weighting methods for the Elixhauser comorbidity index
//!
//! Three published weighting schemes are supported. The string boundary is
//! `FromStr`; anything outside the three exact identifiers is rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// Weighting scheme used to collapse the comorbidity indicators into a score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreMethod {
    /// van Walraven et al. (2009) in-hospital mortality weights
    #[default]
    #[serde(rename = "van_walraven")]
    VanWalraven,
    /// SID 30-indicator weights (includes a cardiac arrhythmia extension)
    #[serde(rename = "sid_30")]
    Sid30,
    /// SID 29-indicator weights (no cardiac arrhythmia term defined)
    #[serde(rename = "sid_29")]
    Sid29,
}

impl ScoreMethod {
    /// Get the canonical identifier for this method
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::VanWalraven => "van_walraven",
            Self::Sid30 => "sid_30",
            Self::Sid29 => "sid_29",
        }
    }

    /// Get all supported methods
    #[must_use]
    pub fn all() -> Vec<Self> {
        vec![Self::VanWalraven, Self::Sid30, Self::Sid29]
    }
}

impl FromStr for ScoreMethod {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "van_walraven" => Ok(Self::VanWalraven),
            "sid_30" => Ok(Self::Sid30),
            "sid_29" => Ok(Self::Sid29),
            _ => Err(ScoreError::InvalidArgument(format!(
                "unknown scoring method '{s}': expected one of van_walraven, sid_30, sid_29"
            ))),
        }
    }
}

impl fmt::Display for ScoreMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}
