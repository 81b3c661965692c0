use chrono::{DateTime, TimeDelta, TimeZone, Timelike as _};

pub trait FormatHM {
    fn format_hm(&self) -> String;
}

/// Elapsed time, hours are not wrapped at midnight.
impl FormatHM for TimeDelta {
    fn format_hm(&self) -> String {
        let total_minutes = self.num_minutes();
        format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
    }
}

/// Wall clock time in the timezone of the value.
impl<Tz: TimeZone> FormatHM for DateTime<Tz> {
    fn format_hm(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }
}
