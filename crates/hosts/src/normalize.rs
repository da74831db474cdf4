//! Canonical ordering and deduplication of host records.
//!
//! Deduplication only sees equal records when they are already grouped by
//! sort key, so [`dedupe`] accepts nothing but a [`Sorted`] sequence. The
//! result is [`Normalized`], the only form the CSV writer and the config
//! renderer are handed by the pipeline.

use crate::record::HostRecord;
use std::ops::Deref;

/// Records in canonical order: `hostname`, then `host`, then `priority`.
///
/// Ties keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sorted(Vec<HostRecord>);

/// Records in canonical order with duplicates removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized(Vec<HostRecord>);

impl Sorted {
    pub fn into_inner(self) -> Vec<HostRecord> {
        self.0
    }
}

impl Deref for Sorted {
    type Target = [HostRecord];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Normalized {
    pub fn into_inner(self) -> Vec<HostRecord> {
        self.0
    }
}

impl Deref for Normalized {
    type Target = [HostRecord];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Normalized {
    type Item = &'a HostRecord;
    type IntoIter = std::slice::Iter<'a, HostRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Stable sort by `(hostname, host, priority)`.
pub fn sort(mut records: Vec<HostRecord>) -> Sorted {
    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    Sorted(records)
}

/// Removes structural duplicates from a sorted sequence.
///
/// Equal records share their sort key, so they always fall in the same run
/// of equal keys. Inside a run a record is dropped when it equals an earlier
/// record of that run; for adjacent duplicates this is plain adjacent dedup.
/// The first occurrence survives and relative order is kept.
pub fn dedupe(sorted: Sorted) -> Normalized {
    let mut kept: Vec<HostRecord> = Vec::with_capacity(sorted.0.len());
    let mut run_start = 0;

    for record in sorted.0 {
        if kept
            .last()
            .is_some_and(|last| last.sort_key() != record.sort_key())
        {
            run_start = kept.len();
        }

        if kept[run_start..].contains(&record) {
            tracing::trace!(host = %record.host, hostname = %record.hostname, "dropping duplicate");
            continue;
        }

        kept.push(record);
    }

    Normalized(kept)
}

/// `dedupe(sort(records))`.
pub fn normalize(records: Vec<HostRecord>) -> Normalized {
    dedupe(sort(records))
}
