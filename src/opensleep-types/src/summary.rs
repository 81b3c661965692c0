use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepSummary {
    NoSleep,
    Window {
        sleep_start: DateTime<Utc>,
        wake_time: DateTime<Utc>,
    },
}

impl SleepSummary {
    pub fn sleep_start(&self) -> Option<DateTime<Utc>> {
        match self {
            SleepSummary::NoSleep => None,
            SleepSummary::Window { sleep_start, .. } => Some(*sleep_start),
        }
    }

    pub fn wake_time(&self) -> Option<DateTime<Utc>> {
        match self {
            SleepSummary::NoSleep => None,
            SleepSummary::Window { wake_time, .. } => Some(*wake_time),
        }
    }
}
