//! Run modes of the data-assimilation demo.
//!
//! Every timing is attributed to one of three run patterns. The coupler log
//! calls them categories 1..3, the model log tags them `da_demo`,
//! `da_ensmean_demo` and `da_ensgather_demo`.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    Individual,
    EnsMean,
    EnsGather,
}

impl RunMode {
    /// Report order.
    pub const ALL: [RunMode; 3] = [RunMode::Individual, RunMode::EnsMean, RunMode::EnsGather];

    pub fn index(self) -> usize {
        match self {
            RunMode::Individual => 0,
            RunMode::EnsMean => 1,
            RunMode::EnsGather => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RunMode::Individual => "individual",
            RunMode::EnsMean => "ensmean",
            RunMode::EnsGather => "ensgather",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
