// system-tests/tests/helpers/readiness.rs
// ============================================================================
// Module: Readiness Helpers
// Description: Readiness probes for the grocery-store service.
// Purpose: Ensure the target answers before suites start, without arbitrary sleeps.
// Dependencies: mercado-client, tokio
// ============================================================================

use std::time::Duration;
use std::time::Instant;

use mercado_client::ApiClient;
use mercado_client::StatusCode;
use mercado_contract::routes;
use tokio::time::sleep;

/// Polls the market listing until the service responds or timeout expires.
pub async fn wait_for_service_ready(
    client: &ApiClient,
    timeout: Duration,
) -> Result<(), String> {
    let start = Instant::now();
    let mut attempts = 0u32;
    loop {
        attempts = attempts.saturating_add(1);
        let probe =
            client.spec().get(routes::markets()).expect_status(StatusCode::OK).send().await;
        match probe {
            Ok(_) => return Ok(()),
            Err(err) => {
                if start.elapsed() > timeout {
                    return Err(format!(
                        "service readiness timeout after {attempts} attempts: {err}"
                    ));
                }
                sleep(Duration::from_millis(50)).await;
            }
        }
    }
}
