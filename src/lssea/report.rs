//! File-level orchestration: full report text to one `HostConfig`
//!
//! The whole file is split into lines once; the hostname extractor runs
//! first, then the SEA section parser is invoked repeatedly until the
//! cursor reaches the end. Stray lines between blocks are skipped one at a
//! time, so a report with no SEA blocks at all simply yields an empty list.

use crate::lssea::model::HostConfig;
use crate::lssea::parser::{extract_hostname, parse_sea_section};

/// Parse a complete lssea report into a `HostConfig`.
///
/// Never fails: every irregularity in the text degrades to an absent or
/// empty field.
pub fn parse_report(text: &str) -> HostConfig {
    let lines: Vec<&str> = text.lines().collect();

    let hostname = extract_hostname(&lines);

    let mut sea_sections = Vec::new();
    let mut cursor = 0;
    while cursor < lines.len() {
        if lines[cursor].trim().starts_with("SEA :") {
            match parse_sea_section(&lines, cursor) {
                Some((record, next)) => {
                    sea_sections.push(record);
                    cursor = next;
                }
                // An indented or name-less pseudo-header; step past it.
                None => cursor += 1,
            }
        } else {
            cursor += 1;
        }
    }

    HostConfig {
        hostname,
        sea_sections,
    }
}
