//! Model timing aggregation over `model_output_time.out`.
//!
//! Each run mode reports its wall time (`<mode> total time: x`) plus the
//! coupler's own view of that run (`[CCPL <tag>] total time: x`, and the
//! finer `ccpl time all|grids|fields`). The mode total double-counts coupler
//! bookkeeping, so the reported figure is
//! `mean(mode total) - mean(CCPL total) + mean(CCPL all)`.

pub mod markers;

pub use markers::{Slot, match_marker};

use crate::error::{Result, TimingError};
use crate::extract::{after_last_colon, parse_number};
use crate::mode::RunMode;
use crate::stats::{Accumulator, ResultRow};
use serde::Serialize;
use std::collections::BTreeMap;

pub const FILE_NAME: &str = "model_output_time.out";
pub const LABEL: &str = "CCPL_intial";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModeTally {
    pub ccpl_all: Accumulator,
    pub ccpl_grids: Accumulator,
    pub ccpl_fields: Accumulator,
    pub ccpl_total: Accumulator,
    pub mode_total: Accumulator,
}

impl ModeTally {
    fn slot_mut(&mut self, slot: Slot) -> &mut Accumulator {
        match slot {
            Slot::CcplAll => &mut self.ccpl_all,
            Slot::CcplGrids => &mut self.ccpl_grids,
            Slot::CcplFields => &mut self.ccpl_fields,
            Slot::CcplTotal => &mut self.ccpl_total,
            Slot::ModeTotal => &mut self.mode_total,
        }
    }

    /// Mode total corrected for coupler overhead.
    pub fn corrected(&self, mode: RunMode) -> Result<f64> {
        let total = self.mode_total.mean(&format!("{} total time", mode))?;
        let ccpl_total = self.ccpl_total.mean(&format!("CCPL {} total time", mode))?;
        let ccpl_all = self.ccpl_all.mean(&format!("CCPL {} ccpl time all", mode))?;
        Ok(total - ccpl_total + ccpl_all)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelTally {
    pub modes: [ModeTally; 3],
}

impl ModelTally {
    pub fn get(&self, mode: RunMode) -> &ModeTally {
        &self.modes[mode.index()]
    }
}

/// Accumulate every marker line of a model log. All values count.
pub fn scan(text: &str) -> Result<ModelTally> {
    let mut tally = ModelTally::default();

    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;
        let Some(m) = match_marker(line) else {
            continue;
        };

        let token = after_last_colon(line);
        let value = parse_number(token).ok_or_else(|| TimingError::MarkerParse {
            line_no: lno,
            marker: m.phrase,
            value: token.trim().to_string(),
            line: line.to_string(),
        })?;

        tracing::debug!(line = lno, mode = %m.mode, slot = ?m.slot, value, "model marker");
        tally.modes[m.mode.index()].slot_mut(m.slot).add_sample(value);
    }

    for mode in RunMode::ALL {
        let t = tally.get(mode);
        tracing::info!(
            mode = %mode,
            ccpl_all = t.ccpl_all.count,
            ccpl_total = t.ccpl_total.count,
            mode_total = t.mode_total.count,
            "model sample counts"
        );
    }
    Ok(tally)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeCounts {
    pub ccpl_all: u64,
    pub ccpl_grids: u64,
    pub ccpl_fields: u64,
    pub ccpl_total: u64,
    pub mode_total: u64,
}

impl From<&ModeTally> for ModeCounts {
    fn from(t: &ModeTally) -> Self {
        Self {
            ccpl_all: t.ccpl_all.count,
            ccpl_grids: t.ccpl_grids.count,
            ccpl_fields: t.ccpl_fields.count,
            ccpl_total: t.ccpl_total.count,
            mode_total: t.mode_total.count,
        }
    }
}

/// Corrected totals per run mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelReport {
    pub label: &'static str,
    /// Corrected totals in `RunMode::ALL` order.
    pub values: Vec<f64>,
    pub counts: BTreeMap<RunMode, ModeCounts>,
    #[serde(skip)]
    tally: ModelTally,
}

impl ModelReport {
    pub fn from_tally(tally: ModelTally) -> Result<Self> {
        let mut values = Vec::with_capacity(RunMode::ALL.len());
        let mut counts = BTreeMap::new();
        for mode in RunMode::ALL {
            let t = tally.get(mode);
            values.push(t.corrected(mode)?);
            counts.insert(mode, ModeCounts::from(t));
        }
        Ok(Self {
            label: LABEL,
            values,
            counts,
            tally,
        })
    }

    pub fn row(&self) -> ResultRow {
        self.values
            .iter()
            .fold(ResultRow::new(self.label), |row, v| row.value(*v))
    }

    /// Per-mode detail rows: counts and means of every marker plus the
    /// corrected total.
    pub fn breakdown(&self) -> Result<Vec<ResultRow>> {
        let mut rows = Vec::with_capacity(RunMode::ALL.len());
        for (mode, corrected) in RunMode::ALL.into_iter().zip(&self.values) {
            let t = self.tally.get(mode);
            let row = ResultRow::new(breakdown_label(mode))
                .count(t.ccpl_all.count)
                .value(t.ccpl_all.mean(&format!("CCPL {} ccpl time all", mode))?)
                .value(t.ccpl_grids.mean(&format!("CCPL {} ccpl time grids", mode))?)
                .value(t.ccpl_fields.mean(&format!("CCPL {} ccpl time fields", mode))?)
                .count(t.ccpl_total.count)
                .value(t.ccpl_total.mean(&format!("CCPL {} total time", mode))?)
                .count(t.mode_total.count)
                .value(*corrected);
            rows.push(row);
        }
        Ok(rows)
    }
}

fn breakdown_label(mode: RunMode) -> &'static str {
    match mode {
        RunMode::Individual => "Model individual",
        RunMode::EnsMean => "Model ensmean   ",
        RunMode::EnsGather => "Model ensgather ",
    }
}
