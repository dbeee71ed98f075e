//! # Namecheap Check Library
//!
//! A small, focused library for checking domain availability in bulk against
//! the Namecheap XML API.
//!
//! The pipeline is deliberately simple and sequential: build a deduplicated
//! domain list, send one HTTP GET per batch of up to 50 domains, parse each
//! XML response, and merge everything into a sorted aggregate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use namecheap_check_lib::{AvailabilityClient, CheckOptions, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::new("apiuser", "apikey");
//!     let client =
//!         AvailabilityClient::new(credentials, "203.0.113.7", CheckOptions::default())?;
//!
//!     let domains = vec!["example.com".to_string(), "example.org".to_string()];
//!     let result = client.check(&domains).await?;
//!
//!     for entry in &result.available {
//!         println!("available: {}", entry.domain);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior notes
//!
//! - **Fail-fast transport**: any network failure or timeout aborts the
//!   whole run; there are no retries and no partial results.
//! - **Soft parse errors**: malformed XML from the registrar is recorded as
//!   an error string in the aggregate rather than raised.
//! - **No ambient state**: credentials and endpoint selection are explicit
//!   values passed to the client.

// Re-export main public API types and functions
pub use aggregate::merge_batches;
pub use client::{AvailabilityClient, CHECK_COMMAND, MAX_DOMAINS_PER_REQUEST};
pub use config::{load_env_config, Credentials, EnvConfig, PRODUCTION_API_URL, SANDBOX_API_URL};
pub use domains::{collect_domains, dedupe_domains, parse_domain_list, read_domains_file};
pub use error::CheckError;
pub use ip::{get_public_ip, get_public_ip_from, IP_DETECTION_URL};
pub use parse::parse_check_response;
pub use types::{AggregateResult, BatchResponse, CheckOptions, CheckResult, DomainEntry};

// Internal modules - these are not part of the public API
mod aggregate;
mod client;
mod config;
mod domains;
mod error;
mod ip;
mod parse;
mod types;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, CheckError>;

// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
