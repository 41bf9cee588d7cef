//! Patient attributes consumed by the treatment protocol generator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Patient attributes relevant to protocol generation.
///
/// Owned by the surrounding patient-record store; this is the call-scoped
/// projection the engines work with. Allergies are stored lower-cased so
/// substring checks never have to renormalize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub age: u32,
    pub weight_kg: f64,
    pub allergies: BTreeSet<String>,
}

impl PatientProfile {
    pub fn new(age: u32, weight_kg: f64) -> Self {
        Self {
            age,
            weight_kg,
            allergies: BTreeSet::new(),
        }
    }

    /// Build a profile from the record store's comma-separated allergy text.
    ///
    /// Entries are trimmed, lower-cased, and empty fragments dropped, so a
    /// trailing comma cannot produce an entry that matches every drug name.
    pub fn with_allergy_text(age: u32, weight_kg: f64, allergy_text: &str) -> Self {
        let allergies = allergy_text
            .split(',')
            .map(|entry| entry.trim().to_lowercase())
            .filter(|entry| !entry.is_empty())
            .collect();
        Self {
            age,
            weight_kg,
            allergies,
        }
    }

    /// Pediatric band: age under 12.
    pub fn is_pediatric(&self) -> bool {
        self.age < 12
    }

    /// Geriatric band: age over 65.
    pub fn is_geriatric(&self) -> bool {
        self.age > 65
    }

    /// True when a stored allergy conflicts with the candidate drug.
    ///
    /// Containment is checked in both directions: an entry that is a
    /// substring of the drug name conflicts, and so does an entry that
    /// contains the drug name. Short entries therefore over-match.
    pub fn has_allergy_conflict(&self, drug: &str) -> bool {
        let drug = drug.to_lowercase();
        self.allergies
            .iter()
            .any(|entry| drug.contains(entry.as_str()) || entry.contains(drug.as_str()))
    }

    /// Allergy list for report headers, or "none" when empty.
    pub fn allergy_summary(&self) -> String {
        if self.allergies.is_empty() {
            "none".to_string()
        } else {
            self.allergies
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

impl Default for PatientProfile {
    /// Fallback profile used when no patient record is attached to a
    /// consultation: 30 years, 70 kg, no known allergies.
    fn default() -> Self {
        Self::new(30, 70.0)
    }
}
