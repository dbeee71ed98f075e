//! API response parsing.
//!
//! The registrar answers every request with an XML document. Two element
//! kinds matter: `Error` (text content is a human-readable message) and
//! `DomainCheckResult` (attributes carry the per-domain verdict). Matching
//! is namespace-agnostic: only the local tag name is compared, so the
//! response namespace prefix (or lack of one) is irrelevant.

use crate::types::{BatchResponse, CheckResult};

/// Parse one API response body into a [`BatchResponse`].
///
/// This function never fails: a document that does not parse as XML is
/// converted into a response with a single `XML parse error: ...` entry and
/// no results, so one bad batch cannot abort the rest of the run.
pub fn parse_check_response(xml: &str) -> BatchResponse {
    let document = match roxmltree::Document::parse(xml) {
        Ok(document) => document,
        Err(e) => {
            return BatchResponse {
                errors: vec![format!("XML parse error: {}", e)],
                results: Vec::new(),
            }
        }
    };

    let mut errors = Vec::new();
    for node in document.descendants() {
        if node.is_element() && node.tag_name().name() == "Error" {
            if let Some(text) = node.text() {
                let text = text.trim();
                if !text.is_empty() {
                    errors.push(text.to_string());
                }
            }
        }
    }

    let mut results = Vec::new();
    for node in document.descendants() {
        if node.is_element() && node.tag_name().name() == "DomainCheckResult" {
            results.push(CheckResult {
                domain: node.attribute("Domain").unwrap_or("").to_lowercase(),
                available: bool_attr(&node, "Available"),
                premium: bool_attr(&node, "IsPremiumName"),
            });
        }
    }

    // Sorted here so a single batch is already in final presentation order.
    results.sort_by(|a, b| a.domain.cmp(&b.domain));

    BatchResponse { errors, results }
}

/// Read a boolean-like attribute: missing values default to false, and only
/// a case-insensitive `"true"` counts as true.
fn bool_attr(node: &roxmltree::Node, name: &str) -> bool {
    node.attribute(name)
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
