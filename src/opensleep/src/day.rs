use anyhow::anyhow;
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use opensleep_types::Sample;

/// One calendar day, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayWindow {
    pub fn local(date: NaiveDate) -> anyhow::Result<Self> {
        Self::in_zone(date, &Local)
    }

    /// Local midnight of `date` up to local midnight of the next day, so the
    /// window is 23 or 25 hours long on DST changes.
    pub fn in_zone<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> anyhow::Result<Self> {
        let next = date
            .succ_opt()
            .ok_or_else(|| anyhow!("No day after {}", date))?;

        Ok(Self {
            start: Self::midnight(date, tz)?,
            end: Self::midnight(next, tz)?,
        })
    }

    fn midnight<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> anyhow::Result<DateTime<Utc>> {
        tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
            .earliest()
            .map(|time| time.with_timezone(&Utc))
            .ok_or_else(|| anyhow!("Midnight of {} does not exist in this timezone", date))
    }

    pub fn contains(&self, time: &DateTime<Utc>) -> bool {
        self.start <= *time && *time < self.end
    }

    /// Samples starting inside the window.
    pub fn filter(&self, samples: &[Sample]) -> Vec<Sample> {
        samples
            .iter()
            .filter(|sample| self.contains(&sample.start))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
    use opensleep_types::{Sample, SleepStage};

    use super::DayWindow;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn utc_window_is_one_day() {
        let window = DayWindow::in_zone(date(), &Utc).unwrap();
        assert_eq!(window.start, Utc.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn offset_window_is_shifted() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let window = DayWindow::in_zone(date(), &tokyo).unwrap();
        assert_eq!(window.start, Utc.with_ymd_and_hms(2025, 3, 13, 15, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2025, 3, 14, 15, 0, 0).unwrap());
    }

    #[test]
    fn start_is_inclusive_end_is_exclusive() {
        let window = DayWindow::in_zone(date(), &Utc).unwrap();
        assert!(window.contains(&window.start));
        assert!(!window.contains(&window.end));
    }

    #[test]
    fn filter_keeps_samples_starting_inside() {
        let window = DayWindow::in_zone(date(), &Utc).unwrap();
        let at = |d, h| Utc.with_ymd_and_hms(2025, 3, d, h, 0, 0).unwrap();
        let samples = vec![
            Sample::new(at(13, 23), at(14, 1), SleepStage::AsleepCore, "a").unwrap(),
            Sample::new(at(14, 0), at(14, 2), SleepStage::AsleepDeep, "a").unwrap(),
            Sample::new(at(14, 23), at(15, 6), SleepStage::AsleepREM, "a").unwrap(),
            Sample::new(at(15, 0), at(15, 1), SleepStage::Awake, "a").unwrap(),
        ];

        let kept = window.filter(&samples);
        assert_eq!(kept, samples[1..3].to_vec());
    }
}
