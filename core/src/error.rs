//! The single failure kind for todo round-trips.
//!
//! # Design
//! Transport failures, non-2xx statuses, and serde failures in either
//! direction all collapse into [`RequestFailed`]. Callers never branch on
//! what went wrong — the policy everywhere is log and move on — so the
//! detail survives only in the display string.

use thiserror::Error;

/// Any failed todo API round-trip.
#[derive(Debug, Clone, Error)]
#[error("request failed: {0}")]
pub struct RequestFailed(String);

impl RequestFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    pub(crate) fn status(status: u16, body: &str) -> Self {
        if body.is_empty() {
            Self(format!("HTTP {status}"))
        } else {
            Self(format!("HTTP {status}: {body}"))
        }
    }

    pub(crate) fn encode(err: serde_json::Error) -> Self {
        Self(format!("could not encode request body: {err}"))
    }

    pub(crate) fn decode(err: serde_json::Error) -> Self {
        Self(format!("could not decode response body: {err}"))
    }
}
