use opensleep_types::{Sample, SleepError, SleepStage, StageTotals};

/// Which data sources are trusted when summing stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SourceFilter {
    #[default]
    Any,
    Prefix(String),
}

impl SourceFilter {
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::Prefix(prefix.into())
    }

    pub fn matches(&self, sample: &Sample) -> bool {
        match self {
            SourceFilter::Any => true,
            SourceFilter::Prefix(prefix) => sample.source_id.starts_with(prefix.as_str()),
        }
    }
}

pub struct StageAggregator;

impl StageAggregator {
    /// Sums sample durations per stage over the samples accepted by
    /// `source_filter`. Every retained awake sample counts as one awakening.
    pub fn aggregate_stages<F>(
        samples: &[Sample],
        source_filter: F,
    ) -> Result<StageTotals, SleepError>
    where
        F: Fn(&Sample) -> bool,
    {
        for sample in samples {
            sample.validate()?;
        }

        let mut totals = StageTotals::default();
        let mut skipped = 0_usize;

        for sample in samples {
            if !source_filter(sample) {
                skipped += 1;
                continue;
            }

            if let Some(bucket) = totals.get_mut(sample.stage) {
                *bucket += sample.duration();
            }

            if sample.stage == SleepStage::Awake {
                totals.awakenings += 1;
            }
        }

        if skipped > 0 {
            debug!("Skipped {} of {} samples by source", skipped, samples.len());
        }

        Ok(totals)
    }

    pub fn aggregate_all(samples: &[Sample]) -> Result<StageTotals, SleepError> {
        Self::aggregate_stages(samples, |_| true)
    }
}
