use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Sleep state reported by a single sample.
///
/// Names coming from exporters are mapped through [`SleepStage::NAMES`];
/// anything not listed there becomes [`SleepStage::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum SleepStage {
    InBed,
    AsleepCore,
    AsleepDeep,
    AsleepREM,
    Awake,
    Unknown,
}

impl SleepStage {
    pub const NAMES: &'static [(&'static str, SleepStage)] = &[
        ("inBed", SleepStage::InBed),
        ("asleepCore", SleepStage::AsleepCore),
        ("asleepDeep", SleepStage::AsleepDeep),
        ("asleepREM", SleepStage::AsleepREM),
        ("awake", SleepStage::Awake),
        ("unknown", SleepStage::Unknown),
        ("HKCategoryValueSleepAnalysisInBed", SleepStage::InBed),
        ("HKCategoryValueSleepAnalysisAsleepCore", SleepStage::AsleepCore),
        ("HKCategoryValueSleepAnalysisAsleepDeep", SleepStage::AsleepDeep),
        ("HKCategoryValueSleepAnalysisAsleepREM", SleepStage::AsleepREM),
        ("HKCategoryValueSleepAnalysisAwake", SleepStage::Awake),
    ];

    pub fn from_name(name: &str) -> SleepStage {
        Self::NAMES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|&(_, stage)| stage)
            .unwrap_or(SleepStage::Unknown)
    }

    /// Canonical name, the first entry of [`Self::NAMES`] for this stage.
    pub fn name(self) -> &'static str {
        match self {
            SleepStage::InBed => "inBed",
            SleepStage::AsleepCore => "asleepCore",
            SleepStage::AsleepDeep => "asleepDeep",
            SleepStage::AsleepREM => "asleepREM",
            SleepStage::Awake => "awake",
            SleepStage::Unknown => "unknown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SleepStage::InBed => "In Bed",
            SleepStage::AsleepCore => "Core Sleep",
            SleepStage::AsleepDeep => "Deep Sleep",
            SleepStage::AsleepREM => "REM Sleep",
            SleepStage::Awake => "Awake",
            SleepStage::Unknown => "Unknown",
        }
    }

    pub fn is_asleep(self) -> bool {
        matches!(
            self,
            SleepStage::AsleepCore | SleepStage::AsleepDeep | SleepStage::AsleepREM
        )
    }
}

impl FromStr for SleepStage {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for SleepStage {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<SleepStage> for &'static str {
    fn from(value: SleepStage) -> Self {
        value.name()
    }
}

impl Display for SleepStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
