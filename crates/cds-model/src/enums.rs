//! Type-safe enumerations shared across the decision engines.
//!
//! Triage levels, wards, rule severities, and report flags are represented
//! as strings at the service boundary; these enums give them compile-time
//! shape plus stable string forms for rendering and parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Severity attached to a symptom keyword rule.
///
/// The weight feeds the aggregate severity score of a symptom assessment:
/// Critical counts 10, Medium 5, Low 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleSeverity {
    Low,
    Medium,
    Critical,
}

impl RuleSeverity {
    /// Contribution of one matched rule to the aggregate severity score.
    pub fn weight(&self) -> u32 {
        match self {
            RuleSeverity::Low => 1,
            RuleSeverity::Medium => 5,
            RuleSeverity::Critical => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleSeverity::Low => "Low",
            RuleSeverity::Medium => "Medium",
            RuleSeverity::Critical => "Critical",
        }
    }
}

impl fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleSeverity {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RuleSeverity::Low),
            "medium" => Ok(RuleSeverity::Medium),
            "critical" => Ok(RuleSeverity::Critical),
            _ => Err(ModelError::UnknownRuleSeverity(s.to_string())),
        }
    }
}

/// Patient triage tier driving bed allocation and escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriageLevel {
    /// Ambulatory; never consumes a bed.
    Normal,
    /// Admitted to a General ward bed when one is free.
    Serious,
    /// Admitted to ICU, falling back to General when ICU is full.
    Critical,
}

impl TriageLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriageLevel::Normal => "Normal",
            TriageLevel::Serious => "Serious",
            TriageLevel::Critical => "Critical",
        }
    }

    /// Ward tried first for this tier; `None` when no bed is required.
    pub fn preferred_ward(&self) -> Option<Ward> {
        match self {
            TriageLevel::Normal => None,
            TriageLevel::Serious => Some(Ward::General),
            TriageLevel::Critical => Some(Ward::Icu),
        }
    }

    /// Ward tried when the preferred ward is full.
    ///
    /// Only Critical falls back (ICU -> General). Serious deliberately has
    /// no fallback ward.
    pub fn fallback_ward(&self) -> Option<Ward> {
        match self {
            TriageLevel::Critical => Some(Ward::General),
            TriageLevel::Normal | TriageLevel::Serious => None,
        }
    }
}

impl fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TriageLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(TriageLevel::Normal),
            "serious" => Ok(TriageLevel::Serious),
            "critical" => Ok(TriageLevel::Critical),
            _ => Err(ModelError::UnknownTriageLevel(s.to_string())),
        }
    }
}

/// Bed grouping with distinct allocation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ward {
    General,
    Icu,
}

impl Ward {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ward::General => "General",
            Ward::Icu => "ICU",
        }
    }
}

impl fmt::Display for Ward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ward {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(Ward::General),
            "icu" => Ok(Ward::Icu),
            _ => Err(ModelError::UnknownWard(s.to_string())),
        }
    }
}

/// Age-band flag appended to a treatment report.
///
/// Pediatric and geriatric are orthogonal to the protocol branch taken; a
/// report can in principle carry neither or either (never both, since the
/// age bands do not overlap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeFlag {
    /// Age under 12.
    Pediatric,
    /// Age over 65.
    Geriatric,
}

impl AgeFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeFlag::Pediatric => "Pediatric",
            AgeFlag::Geriatric => "Geriatric",
        }
    }
}

impl fmt::Display for AgeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
