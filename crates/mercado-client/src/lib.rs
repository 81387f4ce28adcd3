// crates/mercado-client/src/lib.rs
// ============================================================================
// Module: Mercado Client
// Description: Fluent HTTP-assertion client for black-box API suites.
// Purpose: Build requests, declare response expectations, and capture transcripts.
// Dependencies: reqwest, serde
// ============================================================================

//! ## Overview
//! A thin assertion layer over `reqwest`: a suite declares a request with
//! chained expectations (exact status, body substrings) and the client
//! evaluates them when the response arrives, returning the decoded body to
//! the caller. Every exchange is appended to a shared transcript for
//! artifact capture.
//!
//! There is deliberately no retry and no backoff: one send per exchange,
//! and transport failures surface through the same error type as assertion
//! failures.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod error;
mod spec;
mod transcript;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use error::ClientError;
pub use reqwest::StatusCode;
pub use spec::ApiClient;
pub use spec::ApiSpec;
pub use spec::Exchange;
pub use transcript::ExchangeRecord;
