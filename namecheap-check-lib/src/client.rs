//! Availability client implementation.
//!
//! This module provides the primary `AvailabilityClient` struct that
//! partitions the domain list into API-sized batches, performs one HTTP GET
//! per batch, and folds the parsed responses into an aggregate.

use crate::aggregate::merge_batches;
use crate::config::Credentials;
use crate::error::CheckError;
use crate::parse::parse_check_response;
use crate::types::{AggregateResult, CheckOptions};
use std::time::Duration;

/// The API accepts at most this many domains per `domains.check` request.
pub const MAX_DOMAINS_PER_REQUEST: usize = 50;

/// Command identifier sent with every request.
pub const CHECK_COMMAND: &str = "namecheap.domains.check";

/// Client for batched availability checks against the registrar API.
///
/// Batches run strictly one after another: each response is fully read and
/// parsed before the next request starts. Any transport failure aborts the
/// whole run without partial results; only malformed XML degrades softly,
/// inside the parser.
///
/// # Example
///
/// ```rust,no_run
/// use namecheap_check_lib::{AvailabilityClient, CheckOptions, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Credentials::new("apiuser", "apikey");
///     let client =
///         AvailabilityClient::new(credentials, "203.0.113.7", CheckOptions::default())?;
///     let result = client.check(&["example.com".to_string()]).await?;
///
///     println!("available: {}", result.available.len());
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct AvailabilityClient {
    /// HTTP client shared by all batch requests
    http_client: reqwest::Client,
    /// API credentials
    credentials: Credentials,
    /// Client IP registered with every request
    client_ip: String,
    /// Endpoint and transport options
    options: CheckOptions,
}

impl AvailabilityClient {
    /// Create a new client.
    ///
    /// `client_ip` must already be resolved; when the caller has no
    /// configured value it detects one first (see [`crate::get_public_ip`]).
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Credentials`] when the API user or key is
    /// missing, and [`CheckError::Network`] when the HTTP client cannot
    /// be constructed.
    pub fn new<I: Into<String>>(
        credentials: Credentials,
        client_ip: I,
        options: CheckOptions,
    ) -> Result<Self, CheckError> {
        credentials.validate()?;

        let http_client = reqwest::Client::builder()
            // Backstop above the per-request timeout enforced in check()
            .timeout(options.timeout + Duration::from_secs(2))
            .danger_accept_invalid_certs(options.insecure)
            .build()
            .map_err(|e| {
                CheckError::network_with_source("Failed to create HTTP client", e.to_string())
            })?;

        Ok(Self {
            http_client,
            credentials,
            client_ip: client_ip.into(),
            options,
        })
    }

    /// Check availability of every domain in `domains`.
    ///
    /// Domains are sent in consecutive chunks of at most
    /// [`MAX_DOMAINS_PER_REQUEST`], in the order given. The returned
    /// aggregate deduplicates by domain (first occurrence wins) and sorts
    /// the available/taken lists ascending by name.
    ///
    /// # Errors
    ///
    /// Fails fast on the first transport problem: [`CheckError::Timeout`]
    /// when a request exceeds the configured timeout, otherwise
    /// [`CheckError::Network`]. No partial results are returned.
    pub async fn check(&self, domains: &[String]) -> Result<AggregateResult, CheckError> {
        let mut batches = Vec::new();

        for chunk in domains.chunks(MAX_DOMAINS_PER_REQUEST) {
            let body = self.fetch_batch(chunk).await?;
            batches.push(parse_check_response(&body));
        }

        Ok(merge_batches(batches))
    }

    /// The options this client was created with.
    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Perform one batch request and return the raw response body.
    async fn fetch_batch(&self, chunk: &[String]) -> Result<String, CheckError> {
        let params = self.query_params(chunk);

        match tokio::time::timeout(self.options.timeout, self.request_batch(&params)).await {
            Ok(result) => result,
            Err(_) => Err(CheckError::timeout(
                "availability request",
                self.options.timeout,
            )),
        }
    }

    /// Send the GET and read the body, without the outer timeout.
    async fn request_batch(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<String, CheckError> {
        let response = self
            .http_client
            .get(self.options.endpoint())
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckError::network(format!(
                "API request failed with HTTP {}",
                status
            )));
        }

        Ok(response.text().await?)
    }

    /// Build the query parameters for one chunk.
    ///
    /// The domain list is joined with commas, case as provided; URL
    /// encoding happens in the HTTP layer.
    fn query_params(&self, chunk: &[String]) -> Vec<(&'static str, String)> {
        vec![
            ("ApiUser", self.credentials.api_user.clone()),
            ("ApiKey", self.credentials.api_key.clone()),
            ("UserName", self.credentials.username().to_string()),
            ("ClientIp", self.client_ip.clone()),
            ("Command", CHECK_COMMAND.to_string()),
            ("DomainList", chunk.join(",")),
        ]
    }
}
