//! Centralized runtime constants and path conventions for flowtag.
//!
//! All limits and fixed file names are collected here so they can be found
//! and adjusted in a single place rather than scattered across modules.

use std::path::{Path, PathBuf};

/// Maximum number of (port, protocol) → tag mappings accepted from the
/// lookup table. Exceeding this aborts the run.
pub const MAX_LOOKUP_ENTRIES: usize = 10_000;

/// Maximum flow log file size in bytes (10 MiB). Checked against file
/// metadata before any line is read.
pub const MAX_FLOW_LOG_BYTES: u64 = 10 * 1024 * 1024;

/// Minimum whitespace-separated fields for a line to count as a record.
pub const MIN_RECORD_FIELDS: usize = 12;

/// The only flow log format version this tool processes.
pub const SUPPORTED_LOG_VERSION: &str = "2";

/// Sentinel tag for records whose (port, protocol) has no lookup entry.
pub const UNTAGGED_SENTINEL: &str = "Unknown tagged";

/// Input/output file locations, resolved relative to a base directory.
///
/// The layout is fixed by convention (no flags):
/// `<base>/input/{lookup_table.csv,flow_logs.txt}` and
/// `<base>/output/{tag_counts.csv,port_protocol_counts.csv}`.
#[derive(Debug, Clone, PartialEq)]
pub struct RunPaths {
    pub lookup_table: PathBuf,
    pub flow_log: PathBuf,
    pub output_dir: PathBuf,
    pub tag_counts: PathBuf,
    pub port_protocol_counts: PathBuf,
}

impl RunPaths {
    /// Resolve all pipeline paths under `base`.
    pub fn resolve(base: &Path) -> Self {
        let input = base.join("input");
        let output = base.join("output");
        Self {
            lookup_table: input.join("lookup_table.csv"),
            flow_log: input.join("flow_logs.txt"),
            tag_counts: output.join("tag_counts.csv"),
            port_protocol_counts: output.join("port_protocol_counts.csv"),
            output_dir: output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_match_contract() {
        const _: () = assert!(MAX_LOOKUP_ENTRIES == 10_000);
        const _: () = assert!(MAX_FLOW_LOG_BYTES == 10 * 1024 * 1024);
        const _: () = assert!(MIN_RECORD_FIELDS == 12);
    }

    #[test]
    fn test_paths_resolve_under_base() {
        let paths = RunPaths::resolve(Path::new("/data/run1"));
        assert_eq!(
            paths.lookup_table,
            PathBuf::from("/data/run1/input/lookup_table.csv")
        );
        assert_eq!(
            paths.flow_log,
            PathBuf::from("/data/run1/input/flow_logs.txt")
        );
        assert_eq!(paths.output_dir, PathBuf::from("/data/run1/output"));
        assert_eq!(
            paths.tag_counts,
            PathBuf::from("/data/run1/output/tag_counts.csv")
        );
        assert_eq!(
            paths.port_protocol_counts,
            PathBuf::from("/data/run1/output/port_protocol_counts.csv")
        );
    }
}
