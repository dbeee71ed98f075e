//! Public IP detection.
//!
//! The API requires the caller's public IP with every request. When no
//! `--client-ip` flag or env value is supplied, the CLI detects it through
//! ipify before the first batch.

use crate::error::CheckError;
use std::time::Duration;

/// Third-party endpoint returning the caller's public IP as plain text.
pub const IP_DETECTION_URL: &str = "https://api.ipify.org";

/// Detect the public IP of this machine via ipify.
///
/// # Errors
///
/// Returns [`CheckError::Timeout`] when the request exceeds `timeout`,
/// otherwise [`CheckError::Network`] for any transport or HTTP failure.
pub async fn get_public_ip(timeout: Duration, insecure: bool) -> Result<String, CheckError> {
    get_public_ip_from(IP_DETECTION_URL, timeout, insecure).await
}

/// Detect the public IP from a specific endpoint.
///
/// Split out from [`get_public_ip`] so the detection flow can be exercised
/// against a local test server.
pub async fn get_public_ip_from(
    url: &str,
    timeout: Duration,
    insecure: bool,
) -> Result<String, CheckError> {
    let client = reqwest::Client::builder()
        .timeout(timeout + Duration::from_secs(2))
        .danger_accept_invalid_certs(insecure)
        .build()
        .map_err(|e| {
            CheckError::network_with_source("Failed to create HTTP client", e.to_string())
        })?;

    match tokio::time::timeout(timeout, fetch_ip(&client, url)).await {
        Ok(result) => result,
        Err(_) => Err(CheckError::timeout("public IP detection", timeout)),
    }
}

async fn fetch_ip(client: &reqwest::Client, url: &str) -> Result<String, CheckError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CheckError::network(format!(
            "IP detection failed with HTTP {}",
            status
        )));
    }

    Ok(response.text().await?.trim().to_string())
}
