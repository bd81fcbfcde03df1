//! Running sums, averages and the printed result row.

use crate::error::{Result, TimingError};
use serde::Serialize;
use std::fmt;

/// Running (sum, count) pair for one marker or category.
///
/// `add` only grows the sum; `add_sample` also counts the value. The
/// coupler log relies on the split: several markers feed one category sum
/// while a single marker defines how many runs were observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Accumulator {
    pub sum: f64,
    pub count: u64,
}

impl Accumulator {
    pub fn add(&mut self, value: f64) {
        self.sum += value;
    }

    pub fn add_sample(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Arithmetic mean; `name` identifies the accumulator in the error.
    pub fn mean(&self, name: &str) -> Result<f64> {
        if self.count == 0 {
            return Err(TimingError::DegenerateAverage {
                accumulator: name.to_string(),
            });
        }
        Ok(self.sum / self.count as f64)
    }
}

/// Fixed-point rendering used for every printed timing.
pub fn fixed6(value: f64) -> String {
    format!("{:.6}", value)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Count(u64),
    Value(f64),
}

/// A labelled row printed as `label ['1.000000', 2, ...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub label: String,
    pub cells: Vec<Cell>,
}

impl ResultRow {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            cells: Vec::new(),
        }
    }

    pub fn value(mut self, v: f64) -> Self {
        self.cells.push(Cell::Value(v));
        self
    }

    pub fn count(mut self, n: u64) -> Self {
        self.cells.push(Cell::Count(n));
        self
    }
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.label)?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match cell {
                Cell::Count(n) => write!(f, "{}", n)?,
                Cell::Value(v) => write!(f, "'{}'", fixed6(*v))?,
            }
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mean_divides_sum_by_count() {
        let mut acc = Accumulator::default();
        acc.add_sample(1.5);
        acc.add_sample(2.5);
        acc.add(10.0);
        assert_eq!(acc.count, 2);
        assert_eq!(acc.mean("x").unwrap(), 7.0);
    }

    #[test]
    fn mean_without_samples_is_degenerate() {
        let mut acc = Accumulator::default();
        acc.add(3.0);
        match acc.mean("individual") {
            Err(TimingError::DegenerateAverage { accumulator }) => {
                assert_eq!(accumulator, "individual")
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn fixed6_pads_and_rounds() {
        assert_eq!(fixed6(2.0), "2.000000");
        assert_eq!(fixed6(1.0 / 3.0), "0.333333");
        assert_eq!(fixed6(2.0 / 3.0), "0.666667");
        assert_eq!(fixed6(-0.5), "-0.500000");
    }

    #[test]
    fn row_renders_like_a_list_literal() {
        let row = ResultRow::new("CCPL_run").value(2.0).count(3).value(0.25);
        assert_eq!(row.to_string(), "CCPL_run ['2.000000', 3, '0.250000']");
        assert_eq!(ResultRow::new("empty").to_string(), "empty []");
    }
}
