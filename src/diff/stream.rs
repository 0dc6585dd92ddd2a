//! Streaming comparison of a candidate file against the baseline table

use std::io::Read;

use csv::StringRecord;
use log::debug;
use rustc_hash::FxHashSet;

use crate::config::Config;
use crate::error::ReadError;
use crate::model::{Header, IdColumn, Table};
use crate::parser::{delimited_reader, read_header};

use super::{diff_fields, DiffEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Reading candidate rows
    Streaming,
    /// Walking baseline rows for identifiers never seen
    Removed { next: usize },
    Done,
}

/// Walks a candidate file once, yielding a [`DiffEvent`] per differing row.
///
/// Candidate rows are read into a single reused buffer, so anything an event
/// needs is copied out before the next read. Once the candidate is exhausted
/// the baseline is walked in file order and each identifier the candidate
/// never mentioned is reported as removed. The first error ends the sequence.
pub struct StreamingComparator<'a, R: Read> {
    baseline: &'a Table,
    reader: csv::Reader<R>,
    header: Option<Header>,
    id_column: IdColumn,
    record: StringRecord,
    position: usize,
    seen: FxHashSet<String>,
    phase: Phase,
}

impl<'a, R: Read> StreamingComparator<'a, R> {
    /// Open the candidate stream, reading its header if the config expects one
    pub fn new(baseline: &'a Table, candidate: R, config: &Config) -> Result<Self, ReadError> {
        let mut reader = delimited_reader(config, candidate);
        let header = if config.has_header() {
            let header = read_header(&mut reader)
                .map_err(|e| ReadError::from_csv(e, 0))?
                .ok_or(ReadError::HeaderMissing)?;
            Some(header)
        } else {
            None
        };

        Ok(Self {
            baseline,
            reader,
            header,
            id_column: config.id_column(),
            record: StringRecord::new(),
            position: 0,
            seen: FxHashSet::default(),
            phase: Phase::Streaming,
        })
    }

    /// Classify the row in the read buffer
    fn compare_current(&mut self) -> Result<Option<DiffEvent>, ReadError> {
        let row_number = self.position;
        let id = self
            .id_column
            .extract(&self.record)
            .ok_or(ReadError::IdFieldOutOfRange {
                row: row_number,
                width: self.record.len(),
                column: self.id_column.number(),
            })?;
        self.seen.insert(id.to_string());

        let Some(idx) = self.baseline.row_index(id) else {
            return Ok(Some(DiffEvent::Added {
                id: id.to_string(),
                row_number,
            }));
        };

        let left = &self.baseline.rows()[idx];
        if left.width() != self.record.len() {
            return Ok(Some(DiffEvent::Incompatible {
                left_row_number: idx + 1,
                right_row_number: row_number,
                id: id.to_string(),
                left_width: left.width(),
                right_width: self.record.len(),
            }));
        }

        let field_changes = diff_fields(
            left.record(),
            &self.record,
            self.baseline.header(),
            self.header.as_ref(),
        );
        if field_changes.is_empty() {
            return Ok(None);
        }
        Ok(Some(DiffEvent::Modified {
            left_row_number: idx + 1,
            right_row_number: row_number,
            id: id.to_string(),
            field_changes,
        }))
    }

    /// Next removed row at or after `next`, with the position to resume from
    fn next_removed(&self, mut next: usize) -> (Option<DiffEvent>, usize) {
        let rows = self.baseline.rows();
        while next < rows.len() {
            let idx = next;
            next += 1;
            let Some(id) = self.baseline.row_id(&rows[idx]) else {
                continue;
            };
            // Earlier duplicates are unreachable and never reported
            if self.baseline.row_index(id) != Some(idx) || self.seen.contains(id) {
                continue;
            }
            return (
                Some(DiffEvent::Removed {
                    id: id.to_string(),
                    row_number: idx + 1,
                }),
                next,
            );
        }
        (None, next)
    }
}

impl<R: Read> Iterator for StreamingComparator<'_, R> {
    type Item = Result<DiffEvent, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Streaming => match self.reader.read_record(&mut self.record) {
                    Ok(true) => {
                        self.position += 1;
                        match self.compare_current() {
                            Ok(Some(event)) => return Some(Ok(event)),
                            Ok(None) => {}
                            Err(err) => {
                                self.phase = Phase::Done;
                                return Some(Err(err));
                            }
                        }
                    }
                    Ok(false) => {
                        debug!(
                            "Read {} candidate records ({} distinct IDs)",
                            self.position,
                            self.seen.len()
                        );
                        self.phase = Phase::Removed { next: 0 };
                    }
                    Err(err) => {
                        self.phase = Phase::Done;
                        return Some(Err(ReadError::from_csv(err, self.position + 1)));
                    }
                },
                Phase::Removed { next } => {
                    let (event, next) = self.next_removed(next);
                    match event {
                        Some(event) => {
                            self.phase = Phase::Removed { next };
                            return Some(Ok(event));
                        }
                        None => self.phase = Phase::Done,
                    }
                }
                Phase::Done => return None,
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for StreamingComparator<'_, R> {}
