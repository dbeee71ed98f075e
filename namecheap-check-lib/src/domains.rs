//! Domain list building.
//!
//! Collects raw domain names from a comma-separated string and/or a text
//! file, normalizes them, and deduplicates while preserving first-seen
//! order. The resulting list is what the client partitions into batches.

use crate::error::CheckError;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Build the final, ordered, deduplicated domain list from both sources.
///
/// The comma-separated list comes first, then the file contents, matching
/// the order the inputs were given. Case is preserved as provided; the
/// dedup key is the lower-cased name, so case-varying repeats collapse to
/// the first spelling seen.
///
/// # Errors
///
/// Returns [`CheckError::File`] when the file cannot be opened or read,
/// and [`CheckError::Input`] when neither source yields any domain.
pub fn collect_domains(list: Option<&str>, file: Option<&Path>) -> Result<Vec<String>, CheckError> {
    let mut domains = Vec::new();

    if let Some(list) = list {
        domains.extend(parse_domain_list(list));
    }

    if let Some(path) = file {
        domains.extend(read_domains_file(path)?);
    }

    let domains = dedupe_domains(domains);

    if domains.is_empty() {
        return Err(CheckError::input("no domains provided"));
    }

    Ok(domains)
}

/// Split a comma-separated domain list, trimming each piece and dropping
/// empty results.
pub fn parse_domain_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read domains from a file, one per line.
///
/// Blank lines and lines whose first non-whitespace character is `#` are
/// skipped; only the first whitespace-delimited token of each remaining
/// line is kept, so trailing annotations are ignored.
pub fn read_domains_file(path: &Path) -> Result<Vec<String>, CheckError> {
    let file = File::open(path).map_err(|e| {
        CheckError::file_error(path.to_string_lossy(), format!("{}", e))
    })?;
    let reader = BufReader::new(file);

    let mut domains = Vec::new();
    for line in reader.lines() {
        let line =
            line.map_err(|e| CheckError::file_error(path.to_string_lossy(), format!("{}", e)))?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(token) = trimmed.split_whitespace().next() {
            domains.push(token.to_string());
        }
    }

    Ok(domains)
}

/// Deduplicate preserving first occurrence.
///
/// The key is lower-cased so `Example.COM` and `example.com` count as the
/// same domain; the first spelling seen is the one kept.
pub fn dedupe_domains(domains: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    domains
        .into_iter()
        .filter(|domain| seen.insert(domain.to_lowercase()))
        .collect()
}
