//! Section scanners for the lssea report format
//!
//! The report has no formal grammar: it is a whitespace-delimited text dump
//! whose section markers drift between firmware versions. Parsing therefore
//! works as a single forward-only cursor over the line sequence:
//!
//! 1. Seek a `SEA :` header line and capture the adapter name
//! 2. Consume the `key: value` property lines that follow
//! 3. Scan ahead for the ETHERCHANNEL / REAL ADAPTERS / VIRTUAL ADAPTERS
//!    markers, in that fixed order, delegating to a sub-section scanner for
//!    each marker found
//!
//! Every function here takes the full line slice plus a start index and
//! returns the parsed fragment together with the index just past what it
//! consumed. Absence of a header or of an optional sub-section is a normal
//! outcome, reported as `None` or an empty list, never as an error. There is
//! no hidden state, so re-parsing from the same index always yields the same
//! result.
//!
//! Marker scans are bounded at the next `SEA :` header. The scan never
//! consumes lines; a missing marker leaves the cursor where it was, so a
//! block with no REAL ADAPTERS section cannot steal the section belonging
//! to the block after it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lssea::model::{AdapterRef, EtherchannelGroup, PropertyMap, SeaRecord};

/// Marker line preceding the host identifier.
const HOSTNAME_MARKER: &str = "VIOS hostname:";

/// Raw prefix that opens a SEA block.
const SEA_HEADER_PREFIX: &str = "SEA :";

/// Captures the adapter name out of a `SEA : entN` header, tolerating
/// whitespace drift around the colon.
static SEA_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"SEA\s*:\s*(\S+)").unwrap());

const ETHERCHANNEL_MARKER: &str = "ETHERCHANNEL";
const REAL_ADAPTERS_MARKER: &str = "REAL ADAPTERS";
const VIRTUAL_ADAPTERS_MARKER: &str = "VIRTUAL ADAPTERS";
const NO_CONTROL_CHANNEL: &str = "NO CONTROL CHANNEL";

/// Adapter names in the report follow the `entN` convention; anything else
/// on an adapter row is a column header or stray text.
const ADAPTER_PREFIX: &str = "ent";

/// Separator rows under column headers are runs of dashes.
const SEPARATOR_PREFIX: &str = "-------";

/// Extract the host identifier from a report's lines.
///
/// The identifier is the first non-blank line after a line that, trimmed,
/// equals `VIOS hostname:`. Only the first marker is honored; a marker at
/// end of file or followed by a blank line yields `None`.
pub fn extract_hostname(lines: &[&str]) -> Option<String> {
    let at = lines.iter().position(|line| line.trim() == HOSTNAME_MARKER)?;
    let next = lines.get(at + 1)?.trim();
    if next.is_empty() {
        return None;
    }
    Some(next.to_string())
}

/// Locate and parse the next SEA block at or after `start`.
///
/// Returns the parsed record and the index just past the consumed block, or
/// `None` (with no lines consumed) when no further header exists.
pub fn parse_sea_section(lines: &[&str], start: usize) -> Option<(SeaRecord, usize)> {
    let (sea_name, cursor) = seek_header(lines, start)?;

    let (properties, mut cursor) = consume_properties(lines, cursor);

    // Sub-section markers may only be claimed ahead of the next SEA header.
    let block_end = next_header_index(lines, cursor);

    let mut etherchannel = None;
    if let Some(at) = find_marker(lines, cursor, block_end, ETHERCHANNEL_MARKER) {
        let (group, next) = parse_etherchannel(lines, at);
        etherchannel = Some(group);
        cursor = next;
    }

    let mut real_adapters = Vec::new();
    if let Some(at) = find_marker(lines, cursor, block_end, REAL_ADAPTERS_MARKER) {
        let stops = [VIRTUAL_ADAPTERS_MARKER, "+--", NO_CONTROL_CHANNEL];
        let (adapters, next) = parse_adapter_rows(lines, at, &stops);
        real_adapters = adapters;
        cursor = next;
    }

    let mut virtual_adapters = Vec::new();
    if let Some(at) = find_marker(lines, cursor, block_end, VIRTUAL_ADAPTERS_MARKER) {
        let stops = ["+--", NO_CONTROL_CHANNEL];
        let (adapters, next) = parse_adapter_rows(lines, at, &stops);
        virtual_adapters = adapters;
        cursor = next;
    }

    let record = SeaRecord {
        sea_name,
        properties,
        etherchannel,
        real_adapters,
        virtual_adapters,
    };
    Some((record, cursor))
}

/// Advance to the next `SEA :` header line and capture its adapter name.
///
/// A header line whose name token is missing is not a block at all and is
/// skipped over.
fn seek_header(lines: &[&str], start: usize) -> Option<(String, usize)> {
    for i in start..lines.len() {
        if !lines[i].starts_with(SEA_HEADER_PREFIX) {
            continue;
        }
        if let Some(caps) = SEA_HEADER.captures(lines[i]) {
            return Some((caps[1].to_string(), i + 1));
        }
    }
    None
}

/// Consume the `key: value` lines directly under a SEA header.
///
/// Splits on the first colon only, so values containing colons stay whole.
/// Stops at the next SEA header, a `+--` divider, a blank line, or a
/// sub-section marker. Lines that match none of the patterns are skipped
/// with the cursor still advancing.
fn consume_properties(lines: &[&str], start: usize) -> (PropertyMap, usize) {
    let mut properties = PropertyMap::new();
    let mut cursor = start;
    while cursor < lines.len() {
        let line = lines[cursor].trim();
        if line.starts_with(SEA_HEADER_PREFIX)
            || line.starts_with("+--")
            || line.is_empty()
            || is_section_marker(line)
        {
            break;
        }
        if !line.starts_with('+') {
            if let Some((key, value)) = line.split_once(':') {
                properties.insert(key.trim(), value.trim());
            }
        }
        cursor += 1;
    }
    (properties, cursor)
}

fn is_section_marker(line: &str) -> bool {
    line.starts_with(ETHERCHANNEL_MARKER)
        || line.starts_with(REAL_ADAPTERS_MARKER)
        || line.starts_with(VIRTUAL_ADAPTERS_MARKER)
}

/// Index of the next raw `SEA :` header at or after `start`, or the end of
/// the line sequence.
fn next_header_index(lines: &[&str], start: usize) -> usize {
    lines[start..]
        .iter()
        .position(|line| line.starts_with(SEA_HEADER_PREFIX))
        .map(|offset| start + offset)
        .unwrap_or(lines.len())
}

/// Look for a marker substring within `[start, end)` without consuming
/// anything.
fn find_marker(lines: &[&str], start: usize, end: usize, marker: &str) -> Option<usize> {
    (start..end.min(lines.len())).find(|&i| lines[i].contains(marker))
}

/// Parse the adapter list of an ETHERCHANNEL sub-section, starting at its
/// marker line. Only the adapter name column matters here; the group's
/// members are listed one per row.
fn parse_etherchannel(lines: &[&str], start: usize) -> (EtherchannelGroup, usize) {
    let mut cursor = skip_column_headers(lines, start + 1);

    let mut adapters = Vec::new();
    while cursor < lines.len() {
        let line = lines[cursor].trim();
        if line.is_empty()
            || line.starts_with(REAL_ADAPTERS_MARKER)
            || line.starts_with(VIRTUAL_ADAPTERS_MARKER)
            || line.starts_with("+--")
        {
            break;
        }
        if !line.starts_with(SEPARATOR_PREFIX) {
            if let Some(first) = line.split_whitespace().next() {
                if first.starts_with(ADAPTER_PREFIX) {
                    adapters.push(first.to_string());
                }
            }
        }
        cursor += 1;
    }

    (EtherchannelGroup { adapters }, cursor)
}

/// Parse the rows of a REAL ADAPTERS or VIRTUAL ADAPTERS sub-section,
/// starting at its marker line.
///
/// A row counts as an adapter only if it has at least three whitespace
/// separated tokens and its first token carries the `ent` prefix; the third
/// token is the hardware path. Anything else is skipped, cursor still
/// advancing.
fn parse_adapter_rows(lines: &[&str], start: usize, stops: &[&str]) -> (Vec<AdapterRef>, usize) {
    let mut cursor = skip_column_headers(lines, start + 1);

    let mut adapters = Vec::new();
    while cursor < lines.len() {
        let line = lines[cursor].trim();
        if line.is_empty() || stops.iter().any(|stop| line.starts_with(stop)) {
            break;
        }
        if !line.starts_with(SEPARATOR_PREFIX) {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() >= 3 && tokens[0].starts_with(ADAPTER_PREFIX) {
                adapters.push(AdapterRef {
                    adapter_name: tokens[0].to_string(),
                    hardware_path: tokens[2].to_string(),
                });
            }
        }
        cursor += 1;
    }

    (adapters, cursor)
}

/// Skip the `adapter ...` column-header line and dashed separator rows that
/// open every sub-section.
fn skip_column_headers(lines: &[&str], mut cursor: usize) -> usize {
    while cursor < lines.len()
        && (lines[cursor].starts_with(SEPARATOR_PREFIX) || lines[cursor].starts_with("adapter"))
    {
        cursor += 1;
    }
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        text.lines().collect()
    }

    #[test]
    fn test_extract_hostname() {
        let input = lines("some noise\nVIOS hostname:\nvios1a\nmore noise");
        assert_eq!(extract_hostname(&input), Some("vios1a".to_string()));
    }

    #[test]
    fn test_extract_hostname_trims_whitespace() {
        let input = lines("  VIOS hostname:  \n   vios1a   ");
        assert_eq!(extract_hostname(&input), Some("vios1a".to_string()));
    }

    #[test]
    fn test_extract_hostname_missing_marker() {
        let input = lines("nothing here\nat all");
        assert_eq!(extract_hostname(&input), None);
    }

    #[test]
    fn test_extract_hostname_marker_at_end_of_file() {
        let input = lines("VIOS hostname:");
        assert_eq!(extract_hostname(&input), None);
    }

    #[test]
    fn test_extract_hostname_blank_follower_does_not_rescan() {
        // Only the first marker counts, even when its follower is blank.
        let input = lines("VIOS hostname:\n\nVIOS hostname:\nvios2b");
        assert_eq!(extract_hostname(&input), None);
    }

    #[test]
    fn test_parse_sea_section_no_header_leaves_offset_unchanged() {
        let input = lines("just\nsome\nlines");
        assert!(parse_sea_section(&input, 0).is_none());
    }

    #[test]
    fn test_parse_sea_section_header_without_name_is_skipped() {
        let input = lines("SEA :\nSEA : ent5\nState : PRIMARY");
        let (record, _) = parse_sea_section(&input, 0).unwrap();
        assert_eq!(record.sea_name, "ent5");
        assert_eq!(record.properties.get("State"), Some("PRIMARY"));
    }

    #[test]
    fn test_properties_split_on_first_colon_only() {
        let input = lines("SEA : ent5\nTime stamp : 2024-01-01 10:30:00");
        let (record, _) = parse_sea_section(&input, 0).unwrap();
        assert_eq!(record.properties.get("Time stamp"), Some("2024-01-01 10:30:00"));
    }

    #[test]
    fn test_properties_preserve_order_and_overwrite_duplicates() {
        let input = lines("SEA : ent5\nState : PRIMARY\nPriority : 1\nState : BACKUP");
        let (record, _) = parse_sea_section(&input, 0).unwrap();
        let keys: Vec<&str> = record.properties.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["State", "Priority"]);
        assert_eq!(record.properties.get("State"), Some("BACKUP"));
    }

    #[test]
    fn test_zero_property_lines_is_not_an_error() {
        let input = lines("SEA : ent5\n\nleftover");
        let (record, cursor) = parse_sea_section(&input, 0).unwrap();
        assert!(record.properties.is_empty());
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_properties_stop_at_divider() {
        let input = lines("SEA : ent5\nState : PRIMARY\n+--------+\nIgnored : yes");
        let (record, _) = parse_sea_section(&input, 0).unwrap();
        assert_eq!(record.properties.len(), 1);
        assert_eq!(record.properties.get("Ignored"), None);
    }

    #[test]
    fn test_non_property_lines_are_skipped_silently() {
        let input = lines("SEA : ent5\nState : PRIMARY\nnot a property line\nPriority : 1\n");
        let (record, _) = parse_sea_section(&input, 0).unwrap();
        assert_eq!(record.properties.len(), 2);
        assert_eq!(record.properties.get("Priority"), Some("1"));
    }

    #[test]
    fn test_etherchannel_collects_ent_rows_only() {
        let input = lines(
            "SEA : ent5\n\nETHERCHANNEL\nadapter\n-------\nent0\nent1\nfcs0\n\ntrailing",
        );
        let (record, _) = parse_sea_section(&input, 0).unwrap();
        let group = record.etherchannel.unwrap();
        assert_eq!(group.adapters, vec!["ent0", "ent1"]);
    }

    #[test]
    fn test_missing_etherchannel_is_none() {
        let input = lines("SEA : ent5\nState : PRIMARY\n\nREAL ADAPTERS\nent0 ok U78CB-P1-C6-T1");
        let (record, _) = parse_sea_section(&input, 0).unwrap();
        assert!(record.etherchannel.is_none());
        assert_eq!(record.real_adapters.len(), 1);
    }

    #[test]
    fn test_adapter_row_with_two_tokens_is_excluded() {
        let input = lines("SEA : ent5\n\nREAL ADAPTERS\nent0 Available\nent1 ok U78CB-P1-C6-T2");
        let (record, _) = parse_sea_section(&input, 0).unwrap();
        assert_eq!(record.real_adapters.len(), 1);
        assert_eq!(record.real_adapters[0].adapter_name, "ent1");
        assert_eq!(record.real_adapters[0].hardware_path, "U78CB-P1-C6-T2");
    }

    #[test]
    fn test_adapter_row_without_ent_prefix_is_excluded() {
        let input = lines("SEA : ent5\n\nVIRTUAL ADAPTERS\nfcs0 ok U78CB-P1-C6-T3");
        let (record, _) = parse_sea_section(&input, 0).unwrap();
        assert!(record.virtual_adapters.is_empty());
    }

    #[test]
    fn test_adapter_rows_stop_at_no_control_channel() {
        let input = lines(
            "SEA : ent5\n\nREAL ADAPTERS\nent0 ok U78CB-P1-C6-T1\nNO CONTROL CHANNEL\nent1 ok U78CB-P1-C6-T2",
        );
        let (record, _) = parse_sea_section(&input, 0).unwrap();
        assert_eq!(record.real_adapters.len(), 1);
    }

    #[test]
    fn test_marker_scan_is_bounded_by_next_header() {
        // The first block has no REAL ADAPTERS section; the one belonging
        // to the next block must not be attached to it.
        let input = lines(
            "SEA : ent5\nState : PRIMARY\n\nSEA : ent8\n\nREAL ADAPTERS\nent0 ok U78CB-P1-C6-T1",
        );
        let (first, cursor) = parse_sea_section(&input, 0).unwrap();
        assert!(first.real_adapters.is_empty());
        assert!(first.etherchannel.is_none());

        let (second, _) = parse_sea_section(&input, cursor).unwrap();
        assert_eq!(second.sea_name, "ent8");
        assert_eq!(second.real_adapters.len(), 1);
    }

    #[test]
    fn test_reparse_from_same_offset_is_identical() {
        let input = lines(
            "SEA : ent5\nState : PRIMARY\n\nETHERCHANNEL\nent0\n\nREAL ADAPTERS\nent1 ok U78CB-P1-C6-T1",
        );
        let first = parse_sea_section(&input, 0).unwrap();
        let second = parse_sea_section(&input, 0).unwrap();
        assert_eq!(first, second);
    }
}
