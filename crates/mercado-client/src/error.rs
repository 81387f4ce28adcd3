// crates/mercado-client/src/error.rs
// ============================================================================
// Module: Mercado Client Errors
// Description: Failure taxonomy for one HTTP exchange.
// Purpose: Surface transport and assertion failures through one type.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! A single enum covers client construction, request building, transport,
//! expectation violations, and body decoding. Transport failures are not
//! distinguished from assertion failures at the case boundary; callers
//! treat any variant as a failed exchange.

use thiserror::Error;

/// Errors produced while executing one declared exchange.
///
/// # Invariants
/// - Variants are stable for error classification.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Build(String),
    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    Body(String),
    /// The request could not be sent or the response could not be read.
    #[error("http request failed: {0}")]
    Transport(String),
    /// The response status did not match the declared expectation.
    #[error("expected status {expected}, got {actual}")]
    StatusMismatch {
        /// Declared status code.
        expected: u16,
        /// Observed status code.
        actual: u16,
    },
    /// The response body did not contain a declared fragment.
    #[error("response body missing fragment {fragment:?}")]
    BodyFragmentMissing {
        /// Fragment that was expected as a substring.
        fragment: String,
    },
    /// The response body could not be decoded into the requested type.
    #[error("response body decode failed: {0}")]
    Decode(String),
}
