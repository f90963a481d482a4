//! Merging candidate solution files into one best output per instance.
//!
//! Each [`MergeRecord`] names an instance file, candidate solution files in
//! priority order and a destination. Records are independent: a failure is
//! reported against its record id and the batch continues.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use towerplan_core::select_best;

use crate::{FsError, file_exists, read_instance, read_solution, write_solution};

/// One instance and the candidate outputs to merge for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRecord {
    /// Identifier used when reporting, e.g. `small/001`.
    pub id: String,
    /// Instance file.
    pub instance: Utf8PathBuf,
    /// Candidate solution files; missing files are skipped.
    pub candidates: Vec<Utf8PathBuf>,
    /// Where the best candidate is written.
    ///
    /// The destination may also appear among the candidates, in which case
    /// its current contents compete with the others.
    pub destination: Utf8PathBuf,
}

/// The candidate chosen for a record.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// Candidate file that won.
    pub best: Utf8PathBuf,
    /// Its penalty.
    pub penalty: f64,
}

/// Errors that fail a single record.
#[derive(Debug, Error)]
pub enum MergeError {
    /// None of the candidate files exist.
    #[error("no candidate solutions found for {instance}")]
    NoCandidates {
        /// Instance file the record refers to.
        instance: Utf8PathBuf,
    },
    /// Reading, parsing or writing a file failed.
    #[error(transparent)]
    Fs(#[from] FsError),
}

/// Results of [`merge_records`], in input order.
#[derive(Debug, Default)]
pub struct MergeReport {
    /// Records merged successfully, keyed by id.
    pub merged: Vec<(String, MergeOutcome)>,
    /// Records that failed, keyed by id.
    pub failed: Vec<(String, MergeError)>,
}

impl MergeReport {
    /// Whether every record merged.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Merge one record, writing the lowest-penalty candidate to its destination.
///
/// Every existing candidate must parse and be valid for the instance; one bad
/// candidate fails the whole record and nothing is written. Ties keep the
/// earliest candidate.
///
/// # Errors
/// Returns [`MergeError::NoCandidates`] when no candidate file exists and
/// [`MergeError::Fs`] for any read, parse or write failure.
pub fn merge_record(record: &MergeRecord) -> Result<MergeOutcome, MergeError> {
    let instance = read_instance(&record.instance)?;

    let mut paths: Vec<&Utf8Path> = Vec::with_capacity(record.candidates.len());
    let mut solutions = Vec::with_capacity(record.candidates.len());
    for candidate in &record.candidates {
        if !file_exists(candidate)? {
            log::debug!("{}: skipping missing candidate {candidate}", record.id);
            continue;
        }
        solutions.push(read_solution(candidate, &instance)?);
        paths.push(candidate);
    }

    let Some(best) = select_best(&solutions) else {
        return Err(MergeError::NoCandidates {
            instance: record.instance.clone(),
        });
    };
    let best_path = paths
        .get(best.index)
        .copied()
        .unwrap_or(record.destination.as_path());

    write_solution(&record.destination, best.solution)?;
    log::info!(
        "{}: best {best_path} (penalty {})",
        record.id,
        best.penalty
    );
    Ok(MergeOutcome {
        best: best_path.to_path_buf(),
        penalty: best.penalty,
    })
}

/// Merge every record in turn, collecting failures instead of stopping.
#[must_use]
pub fn merge_records(records: &[MergeRecord]) -> MergeReport {
    let mut report = MergeReport::default();
    for record in records {
        match merge_record(record) {
            Ok(outcome) => report.merged.push((record.id.clone(), outcome)),
            Err(err) => {
                log::warn!("{} merge failed: {err}", record.id);
                report.failed.push((record.id.clone(), err));
            }
        }
    }
    report
}
