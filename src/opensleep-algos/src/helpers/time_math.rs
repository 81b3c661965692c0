use chrono::TimeDelta;

pub fn seconds_f64(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / 1000.0
}

pub fn hours_f64(delta: TimeDelta) -> f64 {
    seconds_f64(delta) / 3600.0
}

pub fn round_float(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
