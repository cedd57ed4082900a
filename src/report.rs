//! CSV report writers for the two aggregate outputs.
//!
//! Rows are emitted in the iteration order of the count maps, which is
//! first-encounter order. The writers create or truncate their output file
//! and flush before returning.

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::AppError;

/// One row of the tag counts report.
#[derive(Debug, Serialize)]
struct TagCountRow<'a> {
    #[serde(rename = "Tag")]
    tag: &'a str,
    #[serde(rename = "Count")]
    count: u64,
}

/// One row of the port/protocol counts report.
#[derive(Debug, Serialize)]
struct PortProtocolRow<'a> {
    #[serde(rename = "Port")]
    port: &'a str,
    #[serde(rename = "Protocol")]
    protocol: &'a str,
    #[serde(rename = "Count")]
    count: u64,
}

/// Write the `Tag,Count` report.
pub fn write_tag_counts(path: &Path, tag_counts: &IndexMap<String, u64>) -> Result<(), AppError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| AppError::Io(format!("cannot create {}: {e}", path.display())))?;
    // Explicit header so an empty map still produces a well-formed report.
    writer.write_record(["Tag", "Count"])?;
    for (tag, count) in tag_counts {
        writer.serialize(TagCountRow { tag, count: *count })?;
    }
    writer.flush()?;
    tracing::info!(rows = tag_counts.len(), path = %path.display(), "tag counts written");
    Ok(())
}

/// Write the `Port,Protocol,Count` report.
pub fn write_port_protocol_counts(
    path: &Path,
    port_protocol_counts: &IndexMap<(String, String), u64>,
) -> Result<(), AppError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| AppError::Io(format!("cannot create {}: {e}", path.display())))?;
    writer.write_record(["Port", "Protocol", "Count"])?;
    for ((port, protocol), count) in port_protocol_counts {
        writer.serialize(PortProtocolRow {
            port,
            protocol,
            count: *count,
        })?;
    }
    writer.flush()?;
    tracing::info!(
        rows = port_protocol_counts.len(),
        path = %path.display(),
        "port/protocol counts written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tag_counts_header_and_rows_in_map_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tag_counts.csv");

        let mut counts = IndexMap::new();
        counts.insert("web".to_string(), 3);
        counts.insert("Unknown tagged".to_string(), 1);
        write_tag_counts(&path, &counts).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["Tag,Count", "web,3", "Unknown tagged,1"]);
    }

    #[test]
    fn test_port_protocol_counts_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("port_protocol_counts.csv");

        let mut counts = IndexMap::new();
        counts.insert(("443".to_string(), "tcp".to_string()), 3);
        counts.insert(("53".to_string(), "udp".to_string()), 2);
        write_port_protocol_counts(&path, &counts).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["Port,Protocol,Count", "443,tcp,3", "53,udp,2"]);
    }

    #[test]
    fn test_empty_map_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tag_counts.csv");
        write_tag_counts(&path, &IndexMap::new()).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim(), "Tag,Count");
    }

    #[test]
    fn test_tag_counts_round_trip_through_csv_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tag_counts.csv");

        let mut counts = IndexMap::new();
        counts.insert("web".to_string(), 7);
        counts.insert("mail".to_string(), 2);
        counts.insert("Unknown tagged".to_string(), 5);
        write_tag_counts(&path, &counts).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let reparsed: HashSet<(String, u64)> = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].to_string(), r[1].parse().unwrap())
            })
            .collect();
        let expected: HashSet<(String, u64)> =
            counts.iter().map(|(t, c)| (t.clone(), *c)).collect();
        assert_eq!(reparsed, expected);
    }
}
