#[macro_use]
extern crate log;

mod input;
pub use input::{HEALTHKIT_STAGE_CODES, load_samples, parse_samples, stage_from_healthkit_code};

mod day;
pub use day::DayWindow;

mod report;
pub use report::SleepReport;

pub mod listing;

pub mod algo {
    pub use opensleep_algos::*;
}

pub mod types {
    pub use opensleep_types::*;
}
