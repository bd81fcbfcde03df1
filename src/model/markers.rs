use crate::mode::RunMode;

/// Which accumulator of a mode a marker feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    CcplAll,
    CcplGrids,
    CcplFields,
    CcplTotal,
    ModeTotal,
}

#[derive(Debug, Clone, Copy)]
pub struct ModelMarker {
    pub phrase: &'static str,
    pub mode: RunMode,
    pub slot: Slot,
}

const fn marker(phrase: &'static str, mode: RunMode, slot: Slot) -> ModelMarker {
    ModelMarker { phrase, mode, slot }
}

use RunMode::{EnsGather, EnsMean, Individual};
use Slot::{CcplAll, CcplFields, CcplGrids, CcplTotal, ModeTotal};

pub static MARKERS: [ModelMarker; 15] = [
    marker("[CCPL <da_demo>] ccpl time all", Individual, CcplAll),
    marker("[CCPL <da_demo>] ccpl time grids", Individual, CcplGrids),
    marker("[CCPL <da_demo>] ccpl time fields", Individual, CcplFields),
    marker("[CCPL <da_demo>] total time", Individual, CcplTotal),
    marker("individual total time", Individual, ModeTotal),
    marker("[CCPL <da_ensmean_demo>] ccpl time all", EnsMean, CcplAll),
    marker("[CCPL <da_ensmean_demo>] ccpl time grids", EnsMean, CcplGrids),
    marker("[CCPL <da_ensmean_demo>] ccpl time fields", EnsMean, CcplFields),
    marker("[CCPL <da_ensmean_demo>] total time", EnsMean, CcplTotal),
    marker("ensmean total time", EnsMean, ModeTotal),
    marker("[CCPL <da_ensgather_demo>] ccpl time all", EnsGather, CcplAll),
    marker("[CCPL <da_ensgather_demo>] ccpl time grids", EnsGather, CcplGrids),
    marker("[CCPL <da_ensgather_demo>] ccpl time fields", EnsGather, CcplFields),
    marker("[CCPL <da_ensgather_demo>] total time", EnsGather, CcplTotal),
    marker("ensgather total time", EnsGather, ModeTotal),
];

/// First marker (in table order) contained in `line`.
pub fn match_marker(line: &str) -> Option<&'static ModelMarker> {
    MARKERS.iter().find(|m| line.contains(m.phrase))
}
