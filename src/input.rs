//! Input layout of a results tree and log loading.
//!
//! Logs live at `<results_dir>/<grid_info>/<proc>/<file>`, where the grid
//! label and processor configuration are used verbatim as path segments.

use crate::error::{Result, TimingError};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_RESULTS_DIR: &str = "./results";

#[derive(Debug, Clone)]
pub struct RunDir {
    pub results_dir: PathBuf,
    pub grid_info: String,
    pub proc: String,
}

impl RunDir {
    pub fn new(results_dir: impl Into<PathBuf>, grid_info: &str, proc: &str) -> Self {
        Self {
            results_dir: results_dir.into(),
            grid_info: grid_info.to_string(),
            proc: proc.to_string(),
        }
    }

    pub fn log_path(&self, file_name: &str) -> PathBuf {
        self.results_dir
            .join(&self.grid_info)
            .join(&self.proc)
            .join(file_name)
    }
}

/// Read a whole log into memory; the handle is closed before scanning starts.
pub fn read_log(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| TimingError::MissingInput {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), lines = text.lines().count(), "read log");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn log_path_joins_segments_verbatim() {
        let dir = RunDir::new(DEFAULT_RESULTS_DIR, "10km", "1000_10");
        assert_eq!(
            dir.log_path("ccpl_output_time.out"),
            PathBuf::from("./results/10km/1000_10/ccpl_output_time.out")
        );
    }

    #[test]
    fn missing_file_is_missing_input() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("absent.out");
        match read_log(&path) {
            Err(TimingError::MissingInput { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn reads_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("log.out");
        fs::write(&path, "a\nb\n").unwrap();
        assert_eq!(read_log(&path).unwrap(), "a\nb\n");
    }
}
