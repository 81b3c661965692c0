use std::fmt::Display;

use chrono::TimeDelta;
use opensleep_types::StageTotals;

use crate::helpers::{
    format_hm::FormatHM,
    time_math::{hours_f64, round_float, seconds_f64},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyBand {
    Low,
    Fair,
    Good,
    Excellent,
}

impl EfficiencyBand {
    /// Bands are half open, a boundary value belongs to the higher band.
    pub fn from_percent(percent: f64) -> Self {
        if percent < 65.0 {
            EfficiencyBand::Low
        } else if percent < 80.0 {
            EfficiencyBand::Fair
        } else if percent < 90.0 {
            EfficiencyBand::Good
        } else {
            EfficiencyBand::Excellent
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EfficiencyBand::Low => "low",
            EfficiencyBand::Fair => "fair",
            EfficiencyBand::Good => "good",
            EfficiencyBand::Excellent => "excellent",
        }
    }
}

impl Display for EfficiencyBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Metrics derived from [`StageTotals`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepMetrics {
    /// REM + deep + core, in bed and awake time excluded.
    pub total_sleep: TimeDelta,
    /// Percentage of in bed time spent asleep, `None` without in bed samples.
    pub efficiency: Option<f64>,
    pub awakenings: u32,
}

impl SleepMetrics {
    pub fn new(totals: &StageTotals) -> Self {
        let total_sleep = totals.rem + totals.deep + totals.core;
        let in_bed_seconds = seconds_f64(totals.in_bed);

        let efficiency = if in_bed_seconds > 0.0 {
            Some(100.0 * seconds_f64(total_sleep) / in_bed_seconds)
        } else {
            None
        };

        Self {
            total_sleep,
            efficiency,
            awakenings: totals.awakenings,
        }
    }

    pub fn total_sleep_seconds(&self) -> f64 {
        seconds_f64(self.total_sleep)
    }

    pub fn efficiency_band(&self) -> Option<EfficiencyBand> {
        self.efficiency.map(EfficiencyBand::from_percent)
    }
}

impl Display for SleepMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let (Some(efficiency), Some(band)) = (self.efficiency, self.efficiency_band()) {
            f.write_fmt(format_args!(
                "Sleep efficiency: {:.1}% ({})\n",
                round_float(efficiency),
                band
            ))?;
        }
        f.write_fmt(format_args!(
            "Total sleep: {:.1} hrs ({})\nAwakenings: {}",
            hours_f64(self.total_sleep),
            self.total_sleep.format_hm(),
            self.awakenings
        ))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use opensleep_types::StageTotals;

    use super::{EfficiencyBand, SleepMetrics};

    #[test]
    fn efficiency_from_totals() {
        let totals = StageTotals {
            in_bed: TimeDelta::hours(8),
            rem: TimeDelta::hours(2),
            deep: TimeDelta::hours(1),
            core: TimeDelta::hours(4),
            awake: TimeDelta::minutes(40),
            awakenings: 3,
        };

        let metrics = SleepMetrics::new(&totals);
        assert_eq!(metrics.total_sleep_seconds(), 25200.0);
        assert_eq!(metrics.efficiency, Some(87.5));
        assert_eq!(metrics.efficiency_band(), Some(EfficiencyBand::Good));
        assert_eq!(metrics.awakenings, 3);
    }

    #[test]
    fn no_efficiency_without_in_bed_time() {
        let totals = StageTotals {
            core: TimeDelta::hours(6),
            ..Default::default()
        };

        let metrics = SleepMetrics::new(&totals);
        assert_eq!(metrics.total_sleep, TimeDelta::hours(6));
        assert_eq!(metrics.efficiency, None);
        assert_eq!(metrics.efficiency_band(), None);
    }

    #[test]
    fn empty_totals() {
        let metrics = SleepMetrics::new(&StageTotals::default());
        assert_eq!(metrics.total_sleep, TimeDelta::zero());
        assert_eq!(metrics.efficiency, None);
        assert_eq!(metrics.awakenings, 0);
    }

    #[test]
    fn band_boundaries_belong_to_higher_band() {
        assert_eq!(EfficiencyBand::from_percent(0.0), EfficiencyBand::Low);
        assert_eq!(EfficiencyBand::from_percent(64.99), EfficiencyBand::Low);
        assert_eq!(EfficiencyBand::from_percent(65.0), EfficiencyBand::Fair);
        assert_eq!(EfficiencyBand::from_percent(79.99), EfficiencyBand::Fair);
        assert_eq!(EfficiencyBand::from_percent(80.0), EfficiencyBand::Good);
        assert_eq!(EfficiencyBand::from_percent(89.99), EfficiencyBand::Good);
        assert_eq!(EfficiencyBand::from_percent(90.0), EfficiencyBand::Excellent);
        assert_eq!(EfficiencyBand::from_percent(100.0), EfficiencyBand::Excellent);
    }

    #[test]
    fn efficiency_above_hundred_is_excellent() {
        // overlapping sources can report more sleep than time in bed
        let totals = StageTotals {
            in_bed: TimeDelta::hours(6),
            core: TimeDelta::hours(7),
            ..Default::default()
        };

        let metrics = SleepMetrics::new(&totals);
        assert_eq!(metrics.efficiency_band(), Some(EfficiencyBand::Excellent));
    }

    #[test]
    fn display_includes_efficiency_when_known() {
        let totals = StageTotals {
            in_bed: TimeDelta::hours(8),
            core: TimeDelta::hours(7),
            awakenings: 2,
            ..Default::default()
        };

        let text = SleepMetrics::new(&totals).to_string();
        assert_eq!(
            text,
            "Sleep efficiency: 87.5% (good)\nTotal sleep: 7.0 hrs (07:00)\nAwakenings: 2"
        );

        let text = SleepMetrics::new(&StageTotals::default()).to_string();
        assert_eq!(text, "Total sleep: 0.0 hrs (00:00)\nAwakenings: 0");
    }
}
