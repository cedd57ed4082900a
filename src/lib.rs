//! flowtag: classifies network flow log records via a (port, protocol) → tag
//! lookup table and produces two CSV count reports.
//!
//! - [`lookup`] — lookup table loader
//! - [`processor`] — single-pass flow log parse + aggregation
//! - [`protocol`] — fixed protocol-number → name table
//! - [`report`] — CSV report writers
//! - [`config`] — limits and fixed path conventions
//! - [`error`] — unified [`AppError`]

pub mod config;
pub mod error;
pub mod lookup;
pub mod processor;
pub mod protocol;
pub mod report;

use std::path::Path;

use config::RunPaths;
use error::AppError;
pub use processor::FlowSummary;

/// Run the whole pipeline under `base`: load the lookup table, process the
/// flow log, write both reports. Sequential, single-threaded; fails fast on
/// the first fatal error.
pub fn run(base: &Path) -> Result<FlowSummary, AppError> {
    let paths = RunPaths::resolve(base);

    let lookup = lookup::load_lookup_table(&paths.lookup_table)?;
    let summary = processor::process_flow_log(&paths.flow_log, &lookup)?;

    std::fs::create_dir_all(&paths.output_dir).map_err(|e| {
        AppError::Io(format!(
            "cannot create output directory {}: {e}",
            paths.output_dir.display()
        ))
    })?;
    report::write_tag_counts(&paths.tag_counts, &summary.tag_counts)?;
    report::write_port_protocol_counts(&paths.port_protocol_counts, &summary.port_protocol_counts)?;

    tracing::info!(
        accepted = summary.accepted_records(),
        untagged = summary.untagged_count,
        "run complete, reports written to {}",
        paths.output_dir.display()
    );
    Ok(summary)
}
