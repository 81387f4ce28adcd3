// crates/mercado-client/src/transcript.rs
// ============================================================================
// Module: Exchange Transcript
// Description: Shared capture of every exchange a client performs.
// Purpose: Let suites write the full request/response history as an artifact.
// Dependencies: serde
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

/// One recorded request/response exchange.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeRecord {
    /// 1-based position of this exchange in the client's history.
    pub sequence: u64,
    /// HTTP method of the request.
    pub method: String,
    /// Fully resolved request URL.
    pub url: String,
    /// JSON request body, when one was sent.
    pub request_body: Option<Value>,
    /// Response status code; 0 when the send itself failed.
    pub status: u16,
    /// Raw response body text.
    pub response_body: String,
    /// Failure message when the exchange did not meet its expectations.
    pub failure: Option<String>,
}

/// Append-only exchange history shared across spec handles.
#[derive(Debug, Clone, Default)]
pub(crate) struct Transcript {
    /// Recorded exchanges in send order.
    entries: Arc<Mutex<Vec<ExchangeRecord>>>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded exchanges.
    pub(crate) fn snapshot(&self) -> Vec<ExchangeRecord> {
        self.entries.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Appends one exchange, assigning the next sequence number.
    pub(crate) fn record(
        &self,
        method: &str,
        url: &str,
        request_body: Option<Value>,
        status: u16,
        response_body: &str,
        failure: Option<String>,
    ) {
        let Ok(mut guard) = self.entries.lock() else {
            return;
        };
        let sequence = u64::try_from(guard.len()).unwrap_or(u64::MAX).saturating_add(1);
        guard.push(ExchangeRecord {
            sequence,
            method: method.to_string(),
            url: url.to_string(),
            request_body,
            status,
            response_body: response_body.to_string(),
            failure,
        });
    }
}
