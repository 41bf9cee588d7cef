//! Branch builders: one protocol bundle per `ProtocolTag`.
//!
//! Each branch declares at most one substitutable drug class; a detected
//! allergy conflict swaps the drug in the rendered text and records exactly
//! one warning for it.

use tracing::debug;

use cds_model::{AgeFlag, PatientProfile, TreatmentReport};

use crate::dispatch::ProtocolTag;

/// Generate the structured treatment report for a condition.
///
/// Total over all inputs: unrecognized condition names take the generic
/// specialist-referral branch.
pub fn generate(condition: &str, profile: &PatientProfile) -> TreatmentReport {
    let tag = ProtocolTag::for_condition(condition);
    let lowered = condition.to_lowercase();

    let mut warnings: Vec<String> = Vec::new();
    let mut follow_up: Option<String> = None;

    let protocol = match tag {
        ProtocolTag::NoTreatment => {
            follow_up = Some("Routine annual check-up recommended.".to_string());
            "No medication required. Maintain healthy lifestyle.".to_string()
        }
        ProtocolTag::ViralPneumonia => {
            follow_up = Some("Monitor SpO2. Hospitalize if < 92%.".to_string());
            "**Supportive Care:** Rest, Hydration, Antipyretics.\n\
             - **Oseltamivir (Tamiflu):** 75mg BID for 5 days (if within 48hr of onset).\n\
             - **Paracetamol:** 500mg q6h PRN fever."
                .to_string()
        }
        ProtocolTag::BacterialPneumonia => {
            let drug = if profile.has_allergy_conflict("penicillin")
                || profile.has_allergy_conflict("amoxicillin")
            {
                warnings
                    .push("Patient allergic to Penicillin; substituted with Fluoroquinolone.".to_string());
                "Levofloxacin (Levaquin)"
            } else {
                "Amoxicillin-Clavulanate (Augmentin)"
            };
            // Weight-banded dosing for children, fixed dose otherwise.
            let dosage = if profile.is_pediatric() {
                "45mg/kg/day"
            } else {
                "875/125mg"
            };
            follow_up = Some("Repeat Chest X-Ray in 4-6 weeks to ensure resolution.".to_string());
            format!(
                "**Antibiotic Therapy:**\n\
                 - **{drug} {dosage}** BID for 7-10 days.\n\
                 - **Azithromycin** 500mg on Day 1, then 250mg daily (Days 2-5)."
            )
        }
        ProtocolTag::Covid => {
            let mut text = "**Isolation Protocol (5-10 Days)**\n\
                 - **Paxlovid (Nirmatrelvir/Ritonavir):** 300/100mg BID for 5 days (if high risk).\n\
                 - **Symptomatic:** Acetaminophen 500mg q6h PRN fever/pain."
                .to_string();
            if lowered.contains("critical") || profile.is_geriatric() {
                text.push_str(
                    "\n- **Dexamethasone:** 6mg daily for up to 10 days (if requiring O2).",
                );
            }
            follow_up = Some("Monitor for Long-COVID symptoms.".to_string());
            text
        }
        ProtocolTag::Tuberculosis => {
            warnings.push(
                "Monitor Liver Function Tests (LFTs) monthly due to hepatotoxicity risk."
                    .to_string(),
            );
            follow_up = Some("Contact Tracing required for family members.".to_string());
            "**Intensive Phase (2 Months):**\n\
             - Isoniazid (INH), Rifampicin (RIF), Pyrazinamide (PZA), Ethambutol (EMB).\n\
             **Continuation Phase (4 Months):**\n\
             - Isoniazid + Rifampicin daily."
                .to_string()
        }
        ProtocolTag::PleuralEffusion => {
            follow_up = Some(
                "Investigate underlying cause (Heart Failure, Infection, Malignancy).".to_string(),
            );
            "**Therapeutic Thoracentesis** may be required if symptomatic.\n\
             - **Diuretics:** Furosemide 20-40mg daily (if transudative/heart failure related).\n\
             - **Incentive Spirometry:** 10 breaths every hour while awake."
                .to_string()
        }
        ProtocolTag::Pneumothorax => {
            warnings.push("Avoid air travel and scuba diving until full resolution.".to_string());
            follow_up = Some("CT Chest recommended to rule out bullae.".to_string());
            "**Immediate Action:** High-flow Oxygen.\n\
             - **Small (<2cm):** Observation and repeat X-ray in 4-6 hours.\n\
             - **Large/Symptomatic:** Needle Decompression or Tube Thoracostomy (Chest Tube)."
                .to_string()
        }
        ProtocolTag::HeartFailure => {
            let ace = if profile.has_allergy_conflict("ace inhibitor")
                || profile.has_allergy_conflict("lisinopril")
            {
                warnings.push("ACE Inhibitor allergy; substituted with ARB.".to_string());
                "Losartan (ARB)"
            } else {
                "Lisinopril"
            };
            follow_up = Some("Echocardiogram required to assess Ejection Fraction.".to_string());
            format!(
                "**Heart Failure Management:**\n\
                 - **Furosemide (Lasix):** 40mg daily (titrate to fluid status).\n\
                 - **{ace}:** 10mg daily (check BP/Renal function).\n\
                 - **Beta-Blocker (Carvedilol):** 3.125mg BID."
            )
        }
        ProtocolTag::Orthopedic => {
            let analgesic = if profile.has_allergy_conflict("nsaid")
                || profile.has_allergy_conflict("ibuprofen")
            {
                warnings.push("NSAID allergy; using Opioid analgesic (use cautiously).".to_string());
                "Tramadol"
            } else {
                "Ibuprofen"
            };
            let mut text = format!(
                "**Orthopedic Protocol:**\n\
                 - Immobilization (Cast/Splint) immediately.\n\
                 - **Pain Control:** {analgesic} 400mg q6h PRN pain.\n\
                 - **Calcium + Vit D:** 1000mg/800IU daily for bone healing."
            );
            if lowered.contains("compound") {
                text.push_str("\n- **Antibiotic Prophylaxis:** Cefazolin 2g IV q8h.");
            }
            follow_up = Some(
                "Orthopedic consult for potential Open Reduction Internal Fixation (ORIF)."
                    .to_string(),
            );
            text
        }
        ProtocolTag::SoftTissue => "**R.I.C.E. Protocol:** Rest, Ice, Compression, Elevation.\n\
             - **Naproxen:** 500mg BID for 5-7 days for inflammation.\n\
             - **Physical Therapy:** Referral after acute phase (1 week)."
            .to_string(),
        ProtocolTag::Hernia => {
            warnings.push(
                "Watch for signs of strangulation (severe pain, vomiting) - Surgical Emergency."
                    .to_string(),
            );
            "**Conservative Management:**\n\
             - Avoid heavy lifting and straining.\n\
             - Stool softeners (Docusate 100mg daily) to prevent straining.\n\
             - Surgical Consultation for elective repair."
                .to_string()
        }
        ProtocolTag::Fibrosis => {
            follow_up = Some("High-Resolution CT (HRCT) needed for sub-typing.".to_string());
            "**Antifibrotic Therapy (Specialist Only):**\n\
             - Consider Pirfenidone or Nintedanib.\n\
             - Pulmonary Rehabilitation program.\n\
             - Supplemental Oxygen if hypoxic on exertion."
                .to_string()
        }
        ProtocolTag::Oncology => {
            warnings.push("Urgent Referral Required - 2 Week Wait Pathway.".to_string());
            "**Oncology Protocol:**\n\
             - **DO NOT BIOPSY** without surgical planning.\n\
             - PET-CT Scan for staging.\n\
             - Multi-disciplinary team meeting (MDT) referral."
                .to_string()
        }
        ProtocolTag::GeneralReferral => {
            debug!(condition, "no dedicated protocol branch; using specialist referral");
            "Condition requires specialist evaluation. Symptomatic management advised.".to_string()
        }
    };

    let mut flags = Vec::new();
    if profile.is_pediatric() {
        flags.push(AgeFlag::Pediatric);
    }
    if profile.is_geriatric() {
        flags.push(AgeFlag::Geriatric);
    }

    TreatmentReport {
        condition: condition.to_string(),
        profile: profile.clone(),
        protocol,
        follow_up,
        warnings,
        flags,
    }
}
