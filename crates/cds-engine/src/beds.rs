//! Bed allocation over shared inventory.
//!
//! The one stateful engine: beds are shared mutable state, so the
//! find-free-then-mark sequence runs under a single lock acquisition. Two
//! concurrent admissions targeting the same ward can never both observe
//! the same bed as free.

use std::sync::{Mutex, MutexGuard};

use tracing::warn;

use cds_model::{AllocationOutcome, Bed, BedRef, CensusRow, TriageLevel, Ward, WardCensus};

/// Shared bed inventory with lock-guarded allocation.
#[derive(Debug)]
pub struct BedInventory {
    beds: Mutex<Vec<Bed>>,
}

impl BedInventory {
    pub fn new(beds: Vec<Bed>) -> Self {
        Self {
            beds: Mutex::new(beds),
        }
    }

    /// The standard 20-bed plan: B-01..B-15 General, B-16..B-20 ICU.
    pub fn standard_layout() -> Self {
        let beds = (1..=20)
            .map(|number| {
                let ward = if number <= 15 { Ward::General } else { Ward::Icu };
                Bed::new(format!("B-{number:02}"), ward)
            })
            .collect();
        Self::new(beds)
    }

    /// Allocate a bed for an admission at the given triage level.
    ///
    /// Normal never consumes a bed. Serious targets General with no
    /// fallback; Critical targets ICU and falls back to General. On
    /// success the chosen bed is marked occupied before the lock is
    /// dropped; on failure the inventory is left untouched.
    pub fn assign(&self, level: TriageLevel, patient_id: &str) -> AllocationOutcome {
        let Some(preferred) = level.preferred_ward() else {
            return AllocationOutcome::NotRequired;
        };
        let mut beds = self.lock();
        if let Some(bed) = claim(&mut beds, preferred, patient_id) {
            return AllocationOutcome::Assigned { bed };
        }
        if let Some(fallback) = level.fallback_ward()
            && let Some(bed) = claim(&mut beds, fallback, patient_id)
        {
            return AllocationOutcome::Assigned { bed };
        }
        AllocationOutcome::NoCapacity
    }

    /// Release a bed by number.
    ///
    /// Idempotent on a bed that is already free. Unknown numbers are
    /// logged and ignored.
    pub fn release(&self, bed_number: &str) {
        let mut beds = self.lock();
        match beds.iter_mut().find(|bed| bed.number == bed_number) {
            Some(bed) => bed.occupant = None,
            None => warn!(bed_number, "release requested for unknown bed"),
        }
    }

    /// Occupancy summary per ward, General first.
    pub fn census(&self) -> WardCensus {
        let beds = self.lock();
        let rows = [Ward::General, Ward::Icu]
            .into_iter()
            .map(|ward| {
                let total = beds.iter().filter(|bed| bed.ward == ward).count();
                let occupied = beds
                    .iter()
                    .filter(|bed| bed.ward == ward && bed.is_occupied())
                    .count();
                CensusRow {
                    ward,
                    total,
                    occupied,
                    free: total - occupied,
                }
            })
            .collect();
        WardCensus { rows }
    }

    /// Point-in-time copy of the inventory.
    pub fn snapshot(&self) -> Vec<Bed> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Bed>> {
        // Occupancy mutations are single field assignments, so data behind
        // a poisoned lock is still consistent.
        self.beds
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn claim(beds: &mut [Bed], ward: Ward, patient_id: &str) -> Option<BedRef> {
    let bed = beds
        .iter_mut()
        .find(|bed| bed.ward == ward && !bed.is_occupied())?;
    bed.occupant = Some(patient_id.to_string());
    Some(BedRef {
        number: bed.number.clone(),
        ward: bed.ward,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_ward_split() {
        let census = BedInventory::standard_layout().census();
        assert_eq!(census.rows[0].ward, Ward::General);
        assert_eq!(census.rows[0].total, 15);
        assert_eq!(census.rows[1].ward, Ward::Icu);
        assert_eq!(census.rows[1].total, 5);
        assert_eq!(census.total_free(), 20);
    }

    #[test]
    fn test_normal_admission_never_consumes_a_bed() {
        let inventory = BedInventory::standard_layout();
        let outcome = inventory.assign(TriageLevel::Normal, "pat-1");
        assert_eq!(outcome, AllocationOutcome::NotRequired);
        assert_eq!(inventory.census().total_occupied(), 0);
    }

    #[test]
    fn test_release_is_idempotent() {
        let inventory = BedInventory::new(vec![Bed::new("B-01", Ward::General)]);
        let outcome = inventory.assign(TriageLevel::Serious, "pat-1");
        let bed = outcome.assigned_bed().expect("bed assigned").clone();
        inventory.release(&bed.number);
        inventory.release(&bed.number);
        assert_eq!(inventory.census().total_occupied(), 0);
        // Unknown bed numbers are ignored.
        inventory.release("B-99");
    }
}
