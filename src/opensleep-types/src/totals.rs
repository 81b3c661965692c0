use chrono::TimeDelta;

use crate::SleepStage;

/// Time accumulated per stage plus the number of awake intervals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageTotals {
    pub in_bed: TimeDelta,
    pub core: TimeDelta,
    pub deep: TimeDelta,
    pub rem: TimeDelta,
    pub awake: TimeDelta,
    pub awakenings: u32,
}

impl StageTotals {
    pub fn get(&self, stage: SleepStage) -> Option<TimeDelta> {
        match stage {
            SleepStage::InBed => Some(self.in_bed),
            SleepStage::AsleepCore => Some(self.core),
            SleepStage::AsleepDeep => Some(self.deep),
            SleepStage::AsleepREM => Some(self.rem),
            SleepStage::Awake => Some(self.awake),
            SleepStage::Unknown => None,
        }
    }

    pub fn get_mut(&mut self, stage: SleepStage) -> Option<&mut TimeDelta> {
        match stage {
            SleepStage::InBed => Some(&mut self.in_bed),
            SleepStage::AsleepCore => Some(&mut self.core),
            SleepStage::AsleepDeep => Some(&mut self.deep),
            SleepStage::AsleepREM => Some(&mut self.rem),
            SleepStage::Awake => Some(&mut self.awake),
            SleepStage::Unknown => None,
        }
    }

    /// Bucket of `stage` in seconds, `0.0` for stages without a bucket.
    pub fn seconds(&self, stage: SleepStage) -> f64 {
        self.get(stage)
            .map(|delta| delta.num_milliseconds() as f64 / 1000.0)
            .unwrap_or_default()
    }

    /// Sum of every bucket.
    pub fn total(&self) -> TimeDelta {
        self.in_bed + self.core + self.deep + self.rem + self.awake
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use crate::{SleepStage, StageTotals};

    #[test]
    fn default_is_all_zero() {
        let totals = StageTotals::default();
        assert_eq!(totals.total(), TimeDelta::zero());
        assert_eq!(totals.awakenings, 0);
        assert_eq!(totals.seconds(SleepStage::InBed), 0.0);
    }

    #[test]
    fn unknown_has_no_bucket() {
        let mut totals = StageTotals::default();
        assert!(totals.get(SleepStage::Unknown).is_none());
        assert!(totals.get_mut(SleepStage::Unknown).is_none());
        assert_eq!(totals.seconds(SleepStage::Unknown), 0.0);
    }

    #[test]
    fn seconds_reads_matching_bucket() {
        let totals = StageTotals {
            rem: TimeDelta::minutes(90),
            deep: TimeDelta::milliseconds(1500),
            ..Default::default()
        };
        assert_eq!(totals.seconds(SleepStage::AsleepREM), 5400.0);
        assert_eq!(totals.seconds(SleepStage::AsleepDeep), 1.5);
    }
}
