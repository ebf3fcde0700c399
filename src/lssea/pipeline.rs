//! Batch pipeline: directory of reports to an aggregated configuration
//!
//! Files are processed strictly sequentially in sorted-name order. A file
//! that cannot be read is reported and skipped; the batch carries on. The
//! only batch-fatal failure is writing the aggregated output.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::lssea::discovery::{find_report_files, DiscoveryError, REPORT_PREFIX, REPORT_SUFFIX};
use crate::lssea::model::HostConfig;
use crate::lssea::report::parse_report;

/// Errors during batch extraction
#[derive(Debug)]
pub enum PipelineError {
    Discovery(DiscoveryError),
    Encode(String),
    OutputWrite(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Discovery(err) => write!(f, "{}", err),
            PipelineError::Encode(msg) => write!(f, "Cannot encode configuration: {}", msg),
            PipelineError::OutputWrite(msg) => write!(f, "Cannot write output: {}", msg),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<DiscoveryError> for PipelineError {
    fn from(err: DiscoveryError) -> Self {
        PipelineError::Discovery(err)
    }
}

/// Runs extraction over a directory of report files
pub struct ExtractionPipeline {
    /// Suppress per-file progress lines (used by tests and by callers that
    /// do their own reporting).
    quiet: bool,
}

impl ExtractionPipeline {
    pub fn new() -> Self {
        ExtractionPipeline { quiet: false }
    }

    pub fn quiet() -> Self {
        ExtractionPipeline { quiet: true }
    }

    /// Discover and parse every report under `dir`, in sorted-name order.
    ///
    /// Unreadable files are reported to stderr and skipped; their
    /// contribution is simply missing from the result.
    pub fn run(&self, dir: &Path) -> Result<Vec<HostConfig>, PipelineError> {
        let files = find_report_files(dir)?;

        if !self.quiet {
            println!(
                "Found {} {}*{} file(s):",
                files.len(),
                REPORT_PREFIX,
                REPORT_SUFFIX
            );
            println!("{}", "-".repeat(50));
        }

        let mut configs = Vec::new();
        for path in &files {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());

            if !self.quiet {
                println!("Processing: {}", name);
            }

            // Permissive decoding: a report with stray non-UTF-8 bytes is
            // still parsed, with the bad sequences replaced.
            let text = match fs::read(path) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(e) => {
                    eprintln!("Error reading file {}: {}", path.display(), e);
                    continue;
                }
            };

            let config = parse_report(&text);
            if !self.quiet {
                println!(
                    "  Hostname: {}",
                    config.hostname.as_deref().unwrap_or("not found")
                );
                println!("  SEA sections found: {}", config.sea_sections.len());
                println!();
            }
            configs.push(config);
        }

        Ok(configs)
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Persist an extracted batch as pretty-printed JSON.
pub fn write_json(configs: &[HostConfig], path: &Path) -> Result<(), PipelineError> {
    let json =
        serde_json::to_string_pretty(configs).map_err(|e| PipelineError::Encode(e.to_string()))?;
    fs::write(path, json)
        .map_err(|e| PipelineError::OutputWrite(format!("{}: {}", path.display(), e)))
}

/// Load a previously persisted batch.
pub fn read_json(path: &Path) -> Result<Vec<HostConfig>, PipelineError> {
    let text = fs::read_to_string(path)
        .map_err(|e| PipelineError::OutputWrite(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&text).map_err(|e| PipelineError::Encode(e.to_string()))
}
