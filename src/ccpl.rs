//! Coupler timing aggregation over `ccpl_output_time.out`.
//!
//! The coupler reports the cost of each ensemble procedure phase as
//! `... <phrase> (<seconds>)`. Every phase is attributed to a run mode; one
//! phase per mode doubles as the run counter, so a mode's average is the sum
//! of all its phases divided by the number of runs.

use crate::error::{Result, TimingError};
use crate::extract::{ParenExtractor, parse_number};
use crate::mode::RunMode;
use crate::stats::{Accumulator, ResultRow};
use serde::Serialize;
use std::collections::BTreeMap;

pub const FILE_NAME: &str = "ccpl_output_time.out";
pub const LABEL: &str = "CCPL_run";

#[derive(Debug, Clone, Copy)]
pub struct CcplMarker {
    pub phrase: &'static str,
    pub mode: RunMode,
    /// Whether a match counts one run of `mode`.
    pub counts: bool,
}

const fn marker(phrase: &'static str, mode: RunMode, counts: bool) -> CcplMarker {
    CcplMarker {
        phrase,
        mode,
        counts,
    }
}

pub static MARKERS: [CcplMarker; 12] = [
    marker(
        "Ensemble_procedures_inst::run: individual run copy in",
        RunMode::Individual,
        true,
    ),
    marker(
        "Ensemble_procedures_inst::run: individual run copy out",
        RunMode::Individual,
        false,
    ),
    marker(
        "TIME in External_procedures_inst before run do ocn_da_demo_individual run",
        RunMode::Individual,
        false,
    ),
    marker(
        "TIME in External_procedures_inst after run do ocn_da_demo_individual run",
        RunMode::Individual,
        false,
    ),
    marker(
        "TIME in Ensemble_procedures_inst::run: ensemble run before run do ocn_da_demo_ensmean run",
        RunMode::EnsMean,
        false,
    ),
    marker(
        "TIME in Ensemble_procedures_inst::run: ensemble run after run do ocn_da_demo_ensmean run",
        RunMode::EnsMean,
        false,
    ),
    marker(
        "TIME in External_procedures_inst before run do ocn_da_demo_ensmean run",
        RunMode::EnsMean,
        true,
    ),
    marker(
        "TIME in External_procedures_inst after run do ocn_da_demo_ensmean run",
        RunMode::EnsMean,
        false,
    ),
    marker(
        "TIME in Ensemble_procedures_inst::run: ensemble run before run do ocn_da_demo_ensgather run",
        RunMode::EnsGather,
        false,
    ),
    marker(
        "TIME in Ensemble_procedures_inst::run: ensemble run after run do ocn_da_demo_ensgather run",
        RunMode::EnsGather,
        false,
    ),
    marker(
        "TIME in External_procedures_inst before run do ocn_da_demo_ensgather run",
        RunMode::EnsGather,
        false,
    ),
    marker(
        "TIME in External_procedures_inst after run do ocn_da_demo_ensgather run",
        RunMode::EnsGather,
        true,
    ),
];

/// First marker (in table order) contained in `line`.
pub fn match_marker(line: &str) -> Option<&'static CcplMarker> {
    MARKERS.iter().find(|m| line.contains(m.phrase))
}

/// Per-mode accumulators, indexed by `RunMode::index`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CcplTally {
    pub modes: [Accumulator; 3],
}

impl CcplTally {
    pub fn get(&self, mode: RunMode) -> &Accumulator {
        &self.modes[mode.index()]
    }

    fn get_mut(&mut self, mode: RunMode) -> &mut Accumulator {
        &mut self.modes[mode.index()]
    }
}

/// Accumulate every marker line of a coupler log.
///
/// Only strictly positive values are taken; anything else is dropped from
/// both the sum and the run count.
pub fn scan(text: &str) -> Result<CcplTally> {
    let extractor = ParenExtractor::new();
    let mut tally = CcplTally::default();

    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;
        let Some(m) = match_marker(line) else {
            continue;
        };

        let token = extractor.last_group(line).unwrap_or_default();
        let value = parse_number(token).ok_or_else(|| TimingError::MarkerParse {
            line_no: lno,
            marker: m.phrase,
            value: token.to_string(),
            line: line.to_string(),
        })?;

        if value.is_nan() || value <= 0.0 {
            tracing::warn!(line = lno, marker = m.phrase, value, "dropping non-positive timing");
            continue;
        }

        tracing::debug!(line = lno, mode = %m.mode, value, counts = m.counts, "ccpl marker");
        let acc = tally.get_mut(m.mode);
        if m.counts {
            acc.add_sample(value);
        } else {
            acc.add(value);
        }
    }

    tracing::info!(
        individual = tally.get(RunMode::Individual).count,
        ensmean = tally.get(RunMode::EnsMean).count,
        ensgather = tally.get(RunMode::EnsGather).count,
        "ccpl run counts"
    );
    Ok(tally)
}

/// Averaged coupler cost per run mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CcplReport {
    pub label: &'static str,
    /// Means in `RunMode::ALL` order.
    pub values: Vec<f64>,
    pub counts: BTreeMap<RunMode, u64>,
}

impl CcplReport {
    pub fn from_tally(tally: &CcplTally) -> Result<Self> {
        let mut values = Vec::with_capacity(RunMode::ALL.len());
        let mut counts = BTreeMap::new();
        for mode in RunMode::ALL {
            let acc = tally.get(mode);
            values.push(acc.mean(&format!("ccpl {} runs", mode))?);
            counts.insert(mode, acc.count);
        }
        Ok(Self {
            label: LABEL,
            values,
            counts,
        })
    }

    pub fn row(&self) -> ResultRow {
        self.values
            .iter()
            .fold(ResultRow::new(self.label), |row, v| row.value(*v))
    }
}
