#[macro_use]
extern crate log;

pub(crate) mod segmenter;
pub use segmenter::{DEFAULT_GAP_TOLERANCE, DEFAULT_MIN_SLEEP_DURATION, SleepSegmenter};

pub(crate) mod aggregator;
pub use aggregator::{SourceFilter, StageAggregator};

pub(crate) mod metrics;
pub use metrics::{EfficiencyBand, SleepMetrics};

pub mod helpers;

