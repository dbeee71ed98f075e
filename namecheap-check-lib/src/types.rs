//! Core data types for batched availability checking.
//!
//! This module defines all the main data structures used throughout the
//! library: per-domain results, per-batch parse output, the final aggregate,
//! and the client options.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{PRODUCTION_API_URL, SANDBOX_API_URL};

/// Result of a single domain's availability check, as reported by one
/// `DomainCheckResult` element in the API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// The domain name that was checked, lower-cased by the parser
    pub domain: String,

    /// Whether the domain is available for registration
    pub available: bool,

    /// Whether the registrar flags the domain as premium-priced
    pub premium: bool,
}

/// Parsed content of one API response (one batch of up to 50 domains).
///
/// A malformed response still produces a `BatchResponse`: the parse failure
/// becomes an entry in `errors` and `results` stays empty. This is the one
/// place in the pipeline where a failure degrades instead of aborting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResponse {
    /// `Error` element texts in document order
    pub errors: Vec<String>,

    /// One entry per `DomainCheckResult` element, sorted ascending by domain
    pub results: Vec<CheckResult>,
}

/// A domain listed in the final aggregate, with its premium flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEntry {
    pub domain: String,
    pub premium: bool,
}

/// Combined outcome of a whole availability run.
///
/// `errors` preserves batch order and is never deduplicated or sorted;
/// `available` and `taken` each contain one entry per unique domain,
/// sorted ascending by domain name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Error messages across all batches, concatenated in batch order
    pub errors: Vec<String>,

    /// Domains reported available, sorted ascending
    pub available: Vec<DomainEntry>,

    /// Domains reported taken, sorted ascending
    pub taken: Vec<DomainEntry>,
}

impl AggregateResult {
    /// Total number of unique domains with a result.
    pub fn result_count(&self) -> usize {
        self.available.len() + self.taken.len()
    }
}

/// Options for an availability run.
///
/// Credentials are deliberately separate (see [`crate::Credentials`]);
/// these options cover endpoint selection and transport behavior.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Use the sandbox endpoint instead of production
    pub sandbox: bool,

    /// Timeout applied to every HTTP request (ipify and each batch)
    /// Default: 20 seconds
    pub timeout: Duration,

    /// Annotate premium names in text output
    pub show_premium: bool,

    /// Disable TLS certificate verification (not recommended)
    pub insecure: bool,

    /// Explicit base URL override; takes precedence over `sandbox`.
    /// Mainly useful for pointing the client at a local proxy or test server.
    pub base_url: Option<String>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            sandbox: false,
            timeout: Duration::from_secs(20),
            show_premium: true,
            insecure: false,
            base_url: None,
        }
    }
}

impl CheckOptions {
    /// Select the sandbox endpoint.
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable the premium annotation in text output.
    pub fn with_show_premium(mut self, show_premium: bool) -> Self {
        self.show_premium = show_premium;
        self
    }

    /// Disable TLS certificate verification.
    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Override the API base URL entirely.
    pub fn with_base_url<U: Into<String>>(mut self, base_url: U) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Resolve the effective API base URL.
    pub fn endpoint(&self) -> &str {
        if let Some(url) = &self.base_url {
            url
        } else if self.sandbox {
            SANDBOX_API_URL
        } else {
            PRODUCTION_API_URL
        }
    }
}
