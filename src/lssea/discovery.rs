//! Input-file discovery
//!
//! Report files follow the `lssea*log` naming convention of the collection
//! tooling. Discovery is a plain directory listing filtered on that
//! convention and sorted by file name, so batch output order is stable
//! across runs.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// File-name prefix of a collected report.
pub const REPORT_PREFIX: &str = "lssea";
/// File-name suffix of a collected report.
pub const REPORT_SUFFIX: &str = "log";

/// Errors while enumerating the input directory
#[derive(Debug)]
pub enum DiscoveryError {
    DirectoryUnreadable(String),
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryError::DirectoryUnreadable(msg) => {
                write!(f, "Cannot read input directory: {}", msg)
            }
        }
    }
}

impl std::error::Error for DiscoveryError {}

/// List the report files in `dir`, sorted by file name.
///
/// An empty result is not an error; only a directory that cannot be listed
/// is.
pub fn find_report_files(dir: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    let entries = fs::read_dir(dir)
        .map_err(|e| DiscoveryError::DirectoryUnreadable(format!("{}: {}", dir.display(), e)))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| DiscoveryError::DirectoryUnreadable(format!("{}: {}", dir.display(), e)))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with(REPORT_PREFIX) && name.ends_with(REPORT_SUFFIX) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_is_an_error() {
        let result = find_report_files(Path::new("definitely/not/a/real/dir"));
        assert!(result.is_err());
    }

    #[test]
    fn test_fixture_directory_is_filtered_and_sorted() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
        let files = find_report_files(&dir).unwrap();

        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        // Only lssea*log files qualify, in name order; the stray notes file
        // in the fixture directory must not appear.
        assert_eq!(names, vec!["lssea_vios1a.log", "lssea_vios2b.log"]);
    }
}
