use std::fmt::Write as _;

use chrono::{DateTime, TimeZone, Utc};
use opensleep_algos::helpers::time_math::hours_f64;
use opensleep_types::{Sample, SleepPeriod};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

fn format_time<Tz: TimeZone>(time: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.with_timezone(tz).format(DATE_FORMAT).to_string()
}

/// Samples in chronological order, one block per sample.
pub fn render_samples<Tz: TimeZone>(samples: &[Sample], tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut sorted = samples.iter().collect::<Vec<_>>();
    sorted.sort_by_key(|sample| sample.start);

    let mut out = String::new();
    for sample in sorted {
        let _ = writeln!(out, "{}", sample.stage.label());
        let _ = writeln!(out, "  Start: {}", format_time(&sample.start, tz));
        let _ = writeln!(out, "  End: {}", format_time(&sample.end, tz));
        let _ = writeln!(out, "  Duration: {:.1} hours", hours_f64(sample.duration()));
    }
    out
}

pub fn render_periods<Tz: TimeZone>(periods: &[SleepPeriod], tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    for period in periods {
        let _ = writeln!(
            out,
            "{} - {} {:.1} hours ({})",
            format_time(&period.start, tz),
            format_time(&period.end, tz),
            hours_f64(period.duration()),
            period.stage.label()
        );
    }
    out
}
