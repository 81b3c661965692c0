mod error;
pub use error::SleepError;

mod stage;
pub use stage::SleepStage;

mod sample;
pub use sample::Sample;

mod period;
pub use period::SleepPeriod;

mod totals;
pub use totals::StageTotals;

mod summary;
pub use summary::SleepSummary;
