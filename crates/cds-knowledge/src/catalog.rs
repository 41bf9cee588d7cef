//! The fixed condition catalog.
//!
//! Nineteen named conditions, immutable at runtime. The order carries no
//! clinical meaning, but the position is used as an addressing scheme by the
//! image classifier, so the list must never be reordered or resized without
//! treating it as a breaking change.

/// Ordered catalog of detectable conditions.
pub const CONDITION_CATALOG: &[&str] = &[
    "No Abnormalities Detected",
    "Viral Pneumonia",
    "Bacterial Pneumonia",
    "COVID-19 Indicators Present",
    "Tuberculosis Suspected",
    "Lung Opacity",
    "Pleural Effusion",
    "Infiltration",
    "Atelectasis",
    "Pneumothorax",
    "Cardiomegaly",
    "Fracture - Hairline",
    "Fracture - Compound",
    "Soft Tissue Injury",
    "Dislocation",
    "Benign Tumor",
    "Malignant Tumor Suspected (Immediate Biopsy Required)",
    "Hernia",
    "Fibrosis",
];

/// Number of catalog entries.
pub fn condition_count() -> usize {
    CONDITION_CATALOG.len()
}

/// Condition name at `index`, reduced modulo the catalog length.
///
/// Index arithmetic in callers is allowed to overflow the catalog; the
/// reduction here keeps every lookup in bounds.
pub fn condition_at(index: usize) -> &'static str {
    CONDITION_CATALOG[index % CONDITION_CATALOG.len()]
}
