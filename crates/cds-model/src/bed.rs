//! Bed inventory value types and allocation outcomes.

use serde::{Deserialize, Serialize};

use crate::enums::Ward;

/// One physical bed.
///
/// Occupancy is carried solely by `occupant`: a bed is occupied iff an
/// occupant id is set, so the occupied/occupant invariant cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bed {
    pub number: String,
    pub ward: Ward,
    pub occupant: Option<String>,
}

impl Bed {
    pub fn new(number: impl Into<String>, ward: Ward) -> Self {
        Self {
            number: number.into(),
            ward,
            occupant: None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// Reference to an allocated bed, handed back to the admissions caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedRef {
    pub number: String,
    pub ward: Ward,
}

/// Result of one allocation attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum AllocationOutcome {
    /// A bed was found and marked occupied.
    Assigned { bed: BedRef },
    /// No free bed in the preferred ward (nor the fallback ward, where one
    /// applies). Inventory is left untouched.
    NoCapacity,
    /// Normal-severity admissions never consume a bed.
    NotRequired,
}

impl AllocationOutcome {
    pub fn is_assigned(&self) -> bool {
        matches!(self, AllocationOutcome::Assigned { .. })
    }

    pub fn assigned_bed(&self) -> Option<&BedRef> {
        match self {
            AllocationOutcome::Assigned { bed } => Some(bed),
            AllocationOutcome::NoCapacity | AllocationOutcome::NotRequired => None,
        }
    }
}

/// Occupancy counts for one ward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusRow {
    pub ward: Ward,
    pub total: usize,
    pub occupied: usize,
    pub free: usize,
}

/// Point-in-time occupancy summary across wards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WardCensus {
    pub rows: Vec<CensusRow>,
}

impl WardCensus {
    pub fn total_beds(&self) -> usize {
        self.rows.iter().map(|row| row.total).sum()
    }

    pub fn total_free(&self) -> usize {
        self.rows.iter().map(|row| row.free).sum()
    }

    pub fn total_occupied(&self) -> usize {
        self.rows.iter().map(|row| row.occupied).sum()
    }
}
