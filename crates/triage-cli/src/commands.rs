//! Command implementations.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use triage_cli::logging::redact_value;
use triage_engine::triage;
use triage_model::{Outcome, PatientRecord, RawPatientRecord};

use crate::cli::TriageArgs;

const PAYLOAD_SCHEMA: &str = "colo-triage.outcome";
const PAYLOAD_SCHEMA_VERSION: u32 = 1;

/// Outcome payload written for downstream audit consumers.
#[derive(Debug, Serialize)]
pub struct OutcomePayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub outcome: Outcome,
}

impl OutcomePayload {
    fn new(outcome: Outcome) -> Self {
        OutcomePayload {
            schema: PAYLOAD_SCHEMA,
            schema_version: PAYLOAD_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            outcome,
        }
    }
}

/// Result of one triage run, for the summary printer.
pub struct TriageRunResult {
    pub record: PatientRecord,
    pub outcome: Outcome,
    pub output_path: Option<PathBuf>,
}

pub fn run_triage(args: &TriageArgs) -> Result<TriageRunResult> {
    let text = read_record_text(&args.record)?;
    debug!(record = redact_value(&text), "record received");

    let raw: RawPatientRecord =
        serde_json::from_str(&text).context("record is not valid JSON")?;
    let record = PatientRecord::from_raw(raw).context("record failed validation")?;
    let outcome = triage(&record);
    info!(
        rule = %outcome.rule,
        follow_up = outcome.follow_up,
        "recommendation generated"
    );

    let mut output_path = None;
    if args.json || args.output.is_some() {
        let payload = OutcomePayload::new(outcome.clone());
        let json = serde_json::to_string_pretty(&payload)?;
        if let Some(path) = &args.output {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            output_path = Some(path.clone());
        }
        if args.json {
            println!("{json}");
        }
    }

    Ok(TriageRunResult {
        record,
        outcome,
        output_path,
    })
}

fn read_record_text(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read record from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}
