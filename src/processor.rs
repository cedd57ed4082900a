//! Flow log processor: single-pass parse, classification, and aggregation.
//!
//! Streams the log line by line, decodes each line into a [`FlowRecord`],
//! translates the protocol number, resolves the tag via the lookup table,
//! and accumulates the two count maps. Lines that are not valid version-2
//! records are logged and skipped; they touch no counter.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use indexmap::IndexMap;

use crate::config::{
    MAX_FLOW_LOG_BYTES, MIN_RECORD_FIELDS, SUPPORTED_LOG_VERSION, UNTAGGED_SENTINEL,
};
use crate::error::AppError;
use crate::lookup::LookupTable;
use crate::protocol;

/// Why a log line was rejected. Non-fatal: the processor logs and moves on.
#[derive(Debug, PartialEq)]
pub enum RecordError {
    /// Fewer than [`MIN_RECORD_FIELDS`] whitespace-separated fields.
    TooFewFields(usize),
    /// Version field is not the supported literal "2".
    UnsupportedVersion(String),
}

/// One version-2 flow log line, decomposed into its positional fields.
///
/// Only `version`, `dstport`, and `protocol_number` drive the aggregation;
/// the remaining fields are captured for completeness. `action` and
/// `log_status` are optional because a minimal valid record carries 12
/// fields and those two sit at positions 13 and 14.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowRecord {
    pub version: String,
    pub account_id: String,
    pub interface_id: String,
    pub src_addr: String,
    pub dst_addr: String,
    pub dstport: String,
    pub srcport: String,
    pub protocol_number: String,
    pub packets: String,
    pub bytes: String,
    pub start_time: String,
    pub end_time: String,
    pub action: Option<String>,
    pub log_status: Option<String>,
}

impl FlowRecord {
    /// Parse one log line. Fields are split on arbitrary whitespace and
    /// lowercased; `dstport` and `protocol_number` are the classification
    /// inputs downstream.
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_RECORD_FIELDS {
            return Err(RecordError::TooFewFields(fields.len()));
        }

        let version = fields[0].to_lowercase();
        if version != SUPPORTED_LOG_VERSION {
            return Err(RecordError::UnsupportedVersion(version));
        }

        Ok(Self {
            version,
            account_id: fields[1].to_lowercase(),
            interface_id: fields[2].to_lowercase(),
            src_addr: fields[3].to_lowercase(),
            dst_addr: fields[4].to_lowercase(),
            dstport: fields[5].to_lowercase(),
            srcport: fields[6].to_lowercase(),
            protocol_number: fields[7].to_lowercase(),
            packets: fields[8].to_lowercase(),
            bytes: fields[9].to_lowercase(),
            start_time: fields[10].to_lowercase(),
            end_time: fields[11].to_lowercase(),
            action: fields.get(12).map(|f| f.to_lowercase()),
            log_status: fields.get(13).map(|f| f.to_lowercase()),
        })
    }
}

/// Aggregation result of one processing run.
#[derive(Debug, Default)]
pub struct FlowSummary {
    /// Occurrences per tag, including the untagged sentinel. First-encounter
    /// order.
    pub tag_counts: IndexMap<String, u64>,
    /// Occurrences per (destination port, protocol name) pair.
    pub port_protocol_counts: IndexMap<(String, String), u64>,
    /// Records whose (port, protocol) had no lookup entry.
    pub untagged_count: u64,
}

impl FlowSummary {
    /// Total records that passed validation and were counted.
    pub fn accepted_records(&self) -> u64 {
        self.tag_counts.values().sum()
    }

    fn record(&mut self, record: &FlowRecord, lookup: &LookupTable) {
        let proto_name = protocol::protocol_name(&record.protocol_number);
        let key = (record.dstport.clone(), proto_name.to_string());

        let tag = match lookup.get(&key) {
            Some(tag) => tag.clone(),
            None => {
                self.untagged_count += 1;
                UNTAGGED_SENTINEL.to_string()
            }
        };

        *self.tag_counts.entry(tag).or_insert(0) += 1;
        *self.port_protocol_counts.entry(key).or_insert(0) += 1;
    }
}

/// Process a flow log file against the lookup table.
///
/// Fails with [`AppError::InputTooLarge`] before reading any line if the
/// file exceeds [`MAX_FLOW_LOG_BYTES`]. Invalid lines are skipped with a
/// `warn!` diagnostic and never abort the run.
pub fn process_flow_log(path: &Path, lookup: &LookupTable) -> Result<FlowSummary, AppError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| AppError::Io(format!("cannot stat flow log {}: {e}", path.display())))?;
    if metadata.len() > MAX_FLOW_LOG_BYTES {
        return Err(AppError::InputTooLarge(format!(
            "flow log is {} bytes, limit is {MAX_FLOW_LOG_BYTES}",
            metadata.len()
        )));
    }

    let file = File::open(path)
        .map_err(|e| AppError::Io(format!("cannot open flow log {}: {e}", path.display())))?;
    let reader = BufReader::new(file);

    let mut summary = FlowSummary::default();
    let mut skipped: u64 = 0;

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match FlowRecord::parse(&line) {
            Ok(record) => summary.record(&record, lookup),
            Err(RecordError::TooFewFields(n)) => {
                skipped += 1;
                tracing::warn!(line = line_idx + 1, fields = n, "skipping invalid log line");
            }
            Err(RecordError::UnsupportedVersion(v)) => {
                skipped += 1;
                tracing::warn!(
                    line = line_idx + 1,
                    version = %v,
                    "skipping line with unsupported log version"
                );
            }
        }
    }

    tracing::info!(
        accepted = summary.accepted_records(),
        skipped,
        untagged = summary.untagged_count,
        "flow log processed"
    );
    Ok(summary)
}
