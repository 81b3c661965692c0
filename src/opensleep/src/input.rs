use std::{fs, path::Path};

use anyhow::Context;
use chrono::{DateTime, FixedOffset, Utc};
use opensleep_types::{Sample, SleepStage};
use serde::Deserialize;

/// HealthKit `HKCategoryValueSleepAnalysis` raw values. `1` (asleep,
/// unspecified) has no stage of its own and is left out.
pub const HEALTHKIT_STAGE_CODES: &[(i64, SleepStage)] = &[
    (0, SleepStage::InBed),
    (2, SleepStage::Awake),
    (3, SleepStage::AsleepCore),
    (4, SleepStage::AsleepDeep),
    (5, SleepStage::AsleepREM),
];

pub fn stage_from_healthkit_code(code: i64) -> SleepStage {
    HEALTHKIT_STAGE_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|&(_, stage)| stage)
        .unwrap_or(SleepStage::Unknown)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StageValue {
    Code(i64),
    Name(String),
}

impl StageValue {
    fn stage(&self) -> SleepStage {
        match self {
            StageValue::Code(code) => stage_from_healthkit_code(*code),
            StageValue::Name(name) => SleepStage::from_name(name),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SampleRecord {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    #[serde(alias = "value")]
    stage: StageValue,
    #[serde(default, alias = "source")]
    source_id: String,
}

/// Parses an exported JSON array of samples.
pub fn parse_samples(json: &str) -> anyhow::Result<Vec<Sample>> {
    let records: Vec<SampleRecord> =
        serde_json::from_str(json).context("Failed to parse sample list")?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Sample::new(
                record.start.with_timezone(&Utc),
                record.end.with_timezone(&Utc),
                record.stage.stage(),
                record.source_id,
            )
            .with_context(|| format!("Sample #{} is malformed", index))
        })
        .collect()
}

pub fn load_samples(path: impl AsRef<Path>) -> anyhow::Result<Vec<Sample>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read samples from {}", path.display()))?;

    let samples = parse_samples(&json)?;
    info!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}
