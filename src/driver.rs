//! End-to-end run: load the baseline, stream the candidate, report

use std::io::Read;
use std::path::Path;

use log::debug;

use crate::config::Config;
use crate::diff::{DiffAggregator, StreamingComparator, SummaryStats};
use crate::error::Result;
use crate::output::OutputFormatter;
use crate::parser::{open_file, TableLoader};

/// Options that only affect how a run is reported
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Skip per-event lines and print only the summary
    pub stats_only: bool,
}

/// Compare `candidate` against `baseline`, writing every event to `output`
/// as it is produced and the summary at the end.
///
/// A load failure happens before anything is written. A read failure stops
/// the run after the events already written, and no summary is written.
pub fn run_diff<B: Read, C: Read>(
    config: &Config,
    baseline: B,
    candidate: C,
    output: &mut dyn OutputFormatter,
    options: RunOptions,
) -> Result<SummaryStats> {
    let table = TableLoader::new(*config).load(baseline)?;
    let mut aggregator = DiffAggregator::new();

    let stream = StreamingComparator::new(&table, candidate, config)?;
    for event in stream {
        let event = event?;
        aggregator.observe(&event);
        if !options.stats_only {
            output.write_event(&event)?;
        }
    }

    let stats = aggregator.finish();
    debug!(
        "Diff complete: {} added, {} removed, {} changed fields",
        stats.added_count,
        stats.removed_count,
        stats.modified_field_counts.len()
    );
    output.write_summary(&stats)?;
    Ok(stats)
}

/// Open both files and run [`run_diff`].
///
/// Both files are opened before the baseline is read, so a bad path fails
/// without reading either file.
pub fn run_files(
    config: &Config,
    baseline: &Path,
    candidate: &Path,
    output: &mut dyn OutputFormatter,
    options: RunOptions,
) -> Result<SummaryStats> {
    let baseline_reader = open_file(baseline)?;
    let candidate_reader = open_file(candidate)?;
    debug!(
        "Comparing {} against {}",
        candidate.display(),
        baseline.display()
    );
    run_diff(config, baseline_reader, candidate_reader, output, options)
}
