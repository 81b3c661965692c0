use std::fmt::{Display, Write as _};

use chrono::{DateTime, TimeZone, Utc};
use opensleep_algos::{
    SleepMetrics, SleepSegmenter, SourceFilter, StageAggregator,
    helpers::{format_hm::FormatHM, time_math::hours_f64},
};
use opensleep_types::{Sample, SleepError, SleepPeriod, SleepStage, SleepSummary, StageTotals};
use serde::Serialize;

/// Everything shown for one day of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct SleepReport {
    pub periods: Vec<SleepPeriod>,
    pub summary: SleepSummary,
    pub totals: StageTotals,
    pub metrics: SleepMetrics,
}

#[derive(Serialize)]
struct ReportJson<'a> {
    sleep_start: Option<DateTime<Utc>>,
    wake_time: Option<DateTime<Utc>>,
    periods: &'a [SleepPeriod],
    in_bed_seconds: f64,
    rem_seconds: f64,
    deep_seconds: f64,
    core_seconds: f64,
    awake_seconds: f64,
    total_sleep_seconds: f64,
    efficiency_percent: Option<f64>,
    efficiency_band: Option<&'static str>,
    awakenings: u32,
}

const STAGE_ROWS: [(&str, SleepStage); 5] = [
    ("In Bed", SleepStage::InBed),
    ("REM", SleepStage::AsleepREM),
    ("Deep", SleepStage::AsleepDeep),
    ("Core", SleepStage::AsleepCore),
    ("Awake", SleepStage::Awake),
];

impl SleepReport {
    /// Stage totals only use samples accepted by `source_filter`, periods are
    /// segmented from every sample.
    pub fn build(
        samples: &[Sample],
        segmenter: &SleepSegmenter,
        source_filter: &SourceFilter,
    ) -> Result<Self, SleepError> {
        let totals =
            StageAggregator::aggregate_stages(samples, |sample| source_filter.matches(sample))?;
        let periods = segmenter.analyze_sleep_periods(samples)?;
        let summary = SleepSegmenter::sleep_summary(&periods);

        Ok(Self {
            metrics: SleepMetrics::new(&totals),
            periods,
            summary,
            totals,
        })
    }

    pub fn render<Tz: TimeZone>(&self, tz: &Tz) -> String {
        let mut out = String::new();

        match self.summary {
            SleepSummary::Window {
                sleep_start,
                wake_time,
            } => {
                let _ = writeln!(
                    out,
                    "Sleep time: {}",
                    sleep_start.with_timezone(tz).format_hm()
                );
                let _ = writeln!(out, "Wake time: {}", wake_time.with_timezone(tz).format_hm());
            }
            SleepSummary::NoSleep => {
                let _ = writeln!(out, "No sleep periods detected");
            }
        }

        for (title, stage) in STAGE_ROWS {
            let time = self.totals.get(stage).unwrap_or_default();
            let _ = writeln!(
                out,
                "{}: {:.1} hrs ({})",
                title,
                hours_f64(time),
                time.format_hm()
            );
        }

        let _ = write!(out, "{}", self.metrics);
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let seconds = |stage| self.totals.seconds(stage);
        let json = ReportJson {
            sleep_start: self.summary.sleep_start(),
            wake_time: self.summary.wake_time(),
            periods: &self.periods,
            in_bed_seconds: seconds(SleepStage::InBed),
            rem_seconds: seconds(SleepStage::AsleepREM),
            deep_seconds: seconds(SleepStage::AsleepDeep),
            core_seconds: seconds(SleepStage::AsleepCore),
            awake_seconds: seconds(SleepStage::Awake),
            total_sleep_seconds: self.metrics.total_sleep_seconds(),
            efficiency_percent: self.metrics.efficiency,
            efficiency_band: self.metrics.efficiency_band().map(|band| band.label()),
            awakenings: self.metrics.awakenings,
        };

        serde_json::to_string_pretty(&json)
    }
}

impl Display for SleepReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&Utc))
    }
}
