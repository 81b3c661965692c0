use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::{SleepError, SleepStage};

/// One raw interval reported by a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSample")]
pub struct Sample {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub stage: SleepStage,
    pub source_id: String,
}

#[derive(Deserialize)]
struct RawSample {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    stage: SleepStage,
    #[serde(default, alias = "source")]
    source_id: String,
}

impl Sample {
    pub fn new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        stage: SleepStage,
        source_id: impl Into<String>,
    ) -> Result<Self, SleepError> {
        let sample = Self {
            start,
            end,
            stage,
            source_id: source_id.into(),
        };
        sample.validate()?;
        Ok(sample)
    }

    /// Fields are public, so anything built by hand goes through this before
    /// being analyzed.
    pub fn validate(&self) -> Result<(), SleepError> {
        if self.end < self.start {
            return Err(SleepError::InvalidSample {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

impl TryFrom<RawSample> for Sample {
    type Error = SleepError;

    fn try_from(raw: RawSample) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end, raw.stage, raw.source_id)
    }
}
