use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::{Sample, SleepStage};

/// Contiguous span of samples merged by the segmenter.
///
/// `stage` is the stage of the sample that opened the period, later stage
/// changes inside the same span are not reflected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub stage: SleepStage,
}

impl SleepPeriod {
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Turns the period back into a sample so it can be fed to the segmenter again.
    pub fn to_sample(&self, source_id: impl Into<String>) -> Sample {
        Sample {
            start: self.start,
            end: self.end,
            stage: self.stage,
            source_id: source_id.into(),
        }
    }
}
