//! Domain errors for the timing aggregators.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimingError>;

#[derive(Debug, Error)]
pub enum TimingError {
    /// Input log cannot be opened or read.
    #[error("cannot read input log {}: {source}", path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line matched a marker but carried no parsable number.
    #[error("line {line_no}: marker {marker:?} has unparsable value {value:?} in {line:?}")]
    MarkerParse {
        line_no: usize,
        marker: &'static str,
        value: String,
        line: String,
    },

    /// An average was requested over zero samples.
    #[error("no samples for {accumulator}; cannot compute an average")]
    DegenerateAverage { accumulator: String },
}
