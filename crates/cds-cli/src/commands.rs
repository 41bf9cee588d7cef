//! Subcommand implementations.

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info};

use cds_engine::{
    BedInventory, FixedClassifier, ImageConditionClassifier, ImageFinding, SymptomRuleEngine,
    UnavailableClassifier, run_consultation,
};
use cds_knowledge::CONDITION_CATALOG;
use cds_model::{AllocationOutcome, PatientProfile, TriageLevel};
use cds_protocol::{generate, render_report};

use cds_cli::logging::redact_value;

use crate::cli::{AdmitArgs, ClassifyArgs, ConsultArgs, ProfileArgs, ProtocolArgs, SymptomArgs};
use crate::summary::{apply_table_style, print_census};

pub fn run_conditions() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Index", "Condition"]);
    apply_table_style(&mut table);
    for (index, condition) in CONDITION_CATALOG.iter().enumerate() {
        table.add_row(vec![index.to_string(), (*condition).to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_symptoms(args: &SymptomArgs) -> Result<()> {
    debug!(text = redact_value(&args.text), "evaluating symptom report");
    let assessment = SymptomRuleEngine::new().evaluate(&args.text);
    info!(
        matches = assessment.matches.len(),
        score = assessment.score,
        urgent = assessment.is_urgent(),
        "symptom assessment complete"
    );
    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        println!("{}", assessment.render_advisory());
    }
    Ok(())
}

pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let bytes = read_image(&args.image)?;
    let finding = classify_bytes(&bytes, args.top_class);
    println!("Condition:  {}", finding.condition_label());
    println!("Confidence: {}", finding.confidence_label());
    Ok(())
}

pub fn run_protocol(args: &ProtocolArgs) -> Result<()> {
    let profile = profile_from_args(&args.profile);
    let report = generate(&args.condition, &profile);
    println!("{}", render_report(&report));
    Ok(())
}

pub fn run_consult(args: &ConsultArgs) -> Result<()> {
    let bytes = read_image(&args.image)?;
    let profile = profile_from_args(&args.profile);
    let report = match args.top_class {
        Some(index) => run_consultation(
            &ImageConditionClassifier::new(FixedClassifier(index)),
            &bytes,
            &profile,
        ),
        None => run_consultation(
            &ImageConditionClassifier::new(UnavailableClassifier),
            &bytes,
            &profile,
        ),
    };
    println!("Condition: {} ({})", report.condition, report.confidence);
    println!();
    println!("{}", report.plan);
    Ok(())
}

pub fn run_admit(args: &AdmitArgs) -> Result<()> {
    let inventory = BedInventory::standard_layout();
    for (index, severity) in args.severities.iter().enumerate() {
        let patient_id = format!("PAT-{:03}", index + 1);
        let level = TriageLevel::from(*severity);
        let outcome = inventory.assign(level, &patient_id);
        match outcome {
            AllocationOutcome::Assigned { bed } => {
                println!("{patient_id} ({level}): assigned {} ({})", bed.number, bed.ward);
            }
            AllocationOutcome::NoCapacity => {
                println!("{patient_id} ({level}): no capacity");
            }
            AllocationOutcome::NotRequired => {
                println!("{patient_id} ({level}): no bed required");
            }
        }
    }
    println!();
    print_census(&inventory.census());
    Ok(())
}

fn read_image(path: &std::path::Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read image {}", path.display()))
}

fn classify_bytes(bytes: &[u8], top_class: Option<u32>) -> ImageFinding {
    match top_class {
        Some(index) => ImageConditionClassifier::new(FixedClassifier(index)).classify(bytes),
        None => ImageConditionClassifier::new(UnavailableClassifier).classify(bytes),
    }
}

fn profile_from_args(args: &ProfileArgs) -> PatientProfile {
    PatientProfile::with_allergy_text(args.age, args.weight, &args.allergies)
}
