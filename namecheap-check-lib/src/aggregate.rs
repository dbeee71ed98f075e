//! Batch result aggregation.
//!
//! Folds the per-batch parse output into one [`AggregateResult`]: errors
//! are concatenated in batch order, results are deduplicated by domain
//! (first occurrence wins) and split into available/taken lists sorted
//! ascending by domain name.

use crate::types::{AggregateResult, BatchResponse, DomainEntry};
use std::collections::HashSet;

/// Merge batch responses into the final aggregate.
///
/// Within a single query the registrar reports identical fields for a
/// repeated domain, so which duplicate survives is immaterial; should the
/// flags ever disagree across batches, the first occurrence wins and later
/// ones are dropped unseen.
pub fn merge_batches<I>(batches: I) -> AggregateResult
where
    I: IntoIterator<Item = BatchResponse>,
{
    let mut errors = Vec::new();
    let mut available = Vec::new();
    let mut taken = Vec::new();
    let mut seen = HashSet::new();

    for batch in batches {
        errors.extend(batch.errors);

        for result in batch.results {
            if !seen.insert(result.domain.clone()) {
                continue;
            }

            let entry = DomainEntry {
                domain: result.domain,
                premium: result.premium,
            };
            if result.available {
                available.push(entry);
            } else {
                taken.push(entry);
            }
        }
    }

    available.sort_by(|a, b| a.domain.cmp(&b.domain));
    taken.sort_by(|a, b| a.domain.cmp(&b.domain));

    AggregateResult {
        errors,
        available,
        taken,
    }
}
