// crates/mercado-client/src/spec.rs
// ============================================================================
// Module: API Spec
// Description: Fluent request builder with declarative response expectations.
// Purpose: Issue one HTTP call, assert on the response, and return its body.
// Dependencies: reqwest, serde
// ============================================================================

//! ## Overview
//! `ApiClient` owns the base URL and the `reqwest` client; `ApiSpec` is the
//! per-call builder. Expectations are declared up front and evaluated after
//! the response arrives: the status check runs first, then body fragments
//! in declaration order, and the first violation fails the exchange.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;
use crate::transcript::Transcript;

// ============================================================================
// SECTION: Client
// ============================================================================

/// HTTP assertion client bound to one service base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base URL without a trailing slash; rooted paths append directly.
    base_url: String,
    /// Shared `reqwest` client with the suite timeout applied.
    http: Client,
    /// Exchange history shared by every spec issued from this client.
    transcript: Transcript,
}

impl ApiClient {
    /// Creates a client for a base URL with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] when the underlying HTTP client cannot
    /// be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ClientError::Build(err.to_string()))?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self {
            base_url,
            http,
            transcript: Transcript::new(),
        })
    }

    /// Returns the base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a snapshot of every exchange performed so far.
    #[must_use]
    pub fn transcript(&self) -> Vec<crate::transcript::ExchangeRecord> {
        self.transcript.snapshot()
    }

    /// Starts a new spec against this client.
    #[must_use]
    pub fn spec(&self) -> ApiSpec<'_> {
        ApiSpec {
            client: self,
            method: Method::GET,
            path: "/".to_string(),
            body: None,
            body_error: None,
            expected_status: None,
            expected_fragments: Vec::new(),
        }
    }
}

// ============================================================================
// SECTION: Spec Builder
// ============================================================================

/// One declared exchange: method, path, optional body, and expectations.
#[derive(Debug)]
pub struct ApiSpec<'client> {
    /// Client issuing the exchange.
    client: &'client ApiClient,
    /// HTTP method for the request.
    method: Method,
    /// Rooted resource path appended to the base URL.
    path: String,
    /// Serialized JSON body, when one was attached.
    body: Option<Value>,
    /// Body serialization failure, surfaced at send time.
    body_error: Option<String>,
    /// Exact status expectation, when declared.
    expected_status: Option<StatusCode>,
    /// Substring expectations on the raw response body, in declaration order.
    expected_fragments: Vec<String>,
}

impl ApiSpec<'_> {
    /// Declares a GET request for a rooted path.
    #[must_use]
    pub fn get(mut self, path: impl Into<String>) -> Self {
        self.method = Method::GET;
        self.path = path.into();
        self
    }

    /// Declares a POST request for a rooted path.
    #[must_use]
    pub fn post(mut self, path: impl Into<String>) -> Self {
        self.method = Method::POST;
        self.path = path.into();
        self
    }

    /// Declares a PUT request for a rooted path.
    #[must_use]
    pub fn put(mut self, path: impl Into<String>) -> Self {
        self.method = Method::PUT;
        self.path = path.into();
        self
    }

    /// Declares a DELETE request for a rooted path.
    #[must_use]
    pub fn delete(mut self, path: impl Into<String>) -> Self {
        self.method = Method::DELETE;
        self.path = path.into();
        self
    }

    /// Attaches a JSON request body.
    #[must_use]
    pub fn with_body<T: Serialize>(mut self, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.body = Some(value),
            Err(err) => self.body_error = Some(err.to_string()),
        }
        self
    }

    /// Declares the exact status code the response must carry.
    #[must_use]
    pub fn expect_status(mut self, status: StatusCode) -> Self {
        self.expected_status = Some(status);
        self
    }

    /// Declares a substring the raw response body must contain.
    #[must_use]
    pub fn expect_body_contains(mut self, fragment: impl Into<String>) -> Self {
        self.expected_fragments.push(fragment.into());
        self
    }

    /// Sends the request and evaluates the declared expectations.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the body could not be serialized, the
    /// send failed, or an expectation was violated. The exchange is recorded
    /// in the transcript in every outcome.
    pub async fn send(self) -> Result<Exchange, ClientError> {
        if let Some(message) = self.body_error {
            return Err(ClientError::Body(message));
        }
        let url = format!("{}{}", self.client.base_url, self.path);
        let mut request = self.client.http.request(self.method.clone(), &url);
        if let Some(body) = &self.body {
            request = request.json(body);
        }
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let message = format!("send failed: {err}");
                self.client.transcript.record(
                    self.method.as_str(),
                    &url,
                    self.body,
                    0,
                    "",
                    Some(message.clone()),
                );
                return Err(ClientError::Transport(message));
            }
        };
        let status = response.status();
        let body_text = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                let message = format!("response read failed: {err}");
                self.client.transcript.record(
                    self.method.as_str(),
                    &url,
                    self.body,
                    status.as_u16(),
                    "",
                    Some(message.clone()),
                );
                return Err(ClientError::Transport(message));
            }
        };
        let verdict = evaluate(self.expected_status, &self.expected_fragments, status, &body_text);
        let failure = verdict.as_ref().err().map(ToString::to_string);
        self.client.transcript.record(
            self.method.as_str(),
            &url,
            self.body,
            status.as_u16(),
            &body_text,
            failure,
        );
        verdict?;
        Ok(Exchange {
            status,
            body: body_text,
        })
    }

    /// Sends the request and decodes the response body into a type.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] for any [`Self::send`] failure, or
    /// [`ClientError::Decode`] when the body does not decode into `T`.
    pub async fn send_typed<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        let exchange = self.send().await?;
        serde_json::from_str(&exchange.body).map_err(|err| ClientError::Decode(err.to_string()))
    }
}

// ============================================================================
// SECTION: Exchange Result
// ============================================================================

/// Completed exchange that met every declared expectation.
#[derive(Debug, Clone)]
pub struct Exchange {
    /// Observed response status.
    pub status: StatusCode,
    /// Raw response body text.
    pub body: String,
}

/// Evaluates declared expectations against an observed response.
///
/// The status check runs first; fragments are checked in declaration order
/// and the first missing fragment wins.
fn evaluate(
    expected_status: Option<StatusCode>,
    fragments: &[String],
    status: StatusCode,
    body: &str,
) -> Result<(), ClientError> {
    if let Some(expected) = expected_status {
        if status != expected {
            return Err(ClientError::StatusMismatch {
                expected: expected.as_u16(),
                actual: status.as_u16(),
            });
        }
    }
    for fragment in fragments {
        if !body.contains(fragment.as_str()) {
            return Err(ClientError::BodyFragmentMissing {
                fragment: fragment.clone(),
            });
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
