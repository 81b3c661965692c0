use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SleepError {
    #[error("invalid sample: end {end} is before start {start}")]
    InvalidSample {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}
