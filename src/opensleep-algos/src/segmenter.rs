use chrono::{DateTime, Duration, TimeDelta, Utc};
use opensleep_types::{Sample, SleepError, SleepPeriod, SleepStage, SleepSummary};

/// Longest silence between two samples that still belongs to the same period.
pub const DEFAULT_GAP_TOLERANCE: Duration = Duration::minutes(30);
/// Shorter periods are dropped.
pub const DEFAULT_MIN_SLEEP_DURATION: Duration = Duration::minutes(30);

/// Merges raw samples into sleep periods.
///
/// Samples are scanned in start order. A period stays open as long as the
/// next sample starts no later than `gap_tolerance` after the current one
/// ends, whatever its stage. Periods shorter than `min_sleep_duration` are
/// discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SleepSegmenter {
    pub gap_tolerance: TimeDelta,
    pub min_sleep_duration: TimeDelta,
}

#[derive(Clone, Copy, Debug)]
struct OpenPeriod {
    start: DateTime<Utc>,
    stage: SleepStage,
}

impl Default for SleepSegmenter {
    fn default() -> Self {
        Self {
            gap_tolerance: DEFAULT_GAP_TOLERANCE,
            min_sleep_duration: DEFAULT_MIN_SLEEP_DURATION,
        }
    }
}

impl SleepSegmenter {
    pub fn new(gap_tolerance: TimeDelta, min_sleep_duration: TimeDelta) -> Self {
        Self {
            gap_tolerance,
            min_sleep_duration,
        }
    }

    pub fn analyze_sleep_periods(
        &self,
        samples: &[Sample],
    ) -> Result<Vec<SleepPeriod>, SleepError> {
        for sample in samples {
            sample.validate()?;
        }

        let mut sorted = samples.iter().collect::<Vec<_>>();
        // stable, equal starts keep input order
        sorted.sort_by_key(|sample| sample.start);

        let mut periods = Vec::new();
        let mut open: Option<OpenPeriod> = None;

        for (index, sample) in sorted.iter().enumerate() {
            let period = *open.get_or_insert(OpenPeriod {
                start: sample.start,
                stage: sample.stage,
            });

            // The last sample never closes a period through its gap.
            let gap = sorted
                .get(index + 1)
                .map(|next| next.start - sample.end)
                .unwrap_or_default();

            if gap > self.gap_tolerance {
                trace!(
                    "Gap of {}s after {}, closing period",
                    gap.num_seconds(),
                    sample.end
                );
                self.close(period, sample.end, &mut periods);
                open = None;
            }
        }

        if let (Some(period), Some(last)) = (open, sorted.last()) {
            self.close(period, last.end, &mut periods);
        }

        Ok(periods)
    }

    fn close(&self, period: OpenPeriod, end: DateTime<Utc>, periods: &mut Vec<SleepPeriod>) {
        let duration = end - period.start;
        if duration < self.min_sleep_duration || duration <= TimeDelta::zero() {
            debug!(
                "Dropping period {} - {}: {}s is below the minimum",
                period.start,
                end,
                duration.num_seconds()
            );
            return;
        }

        periods.push(SleepPeriod {
            start: period.start,
            end,
            stage: period.stage,
        });
    }

    /// First sleep start and the end of the last period to start.
    pub fn sleep_summary(periods: &[SleepPeriod]) -> SleepSummary {
        let mut sorted = periods.to_vec();
        sorted.sort_by_key(|period| period.start);

        match (sorted.first(), sorted.last()) {
            (Some(first), Some(last)) => SleepSummary::Window {
                sleep_start: first.start,
                wake_time: last.end,
            },
            _ => SleepSummary::NoSleep,
        }
    }
}
