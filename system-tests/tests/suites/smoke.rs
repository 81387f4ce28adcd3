// system-tests/tests/suites/smoke.rs
// ============================================================================
// Module: Smoke Tests
// Description: Fast reachability checks for the grocery-store surface.
// Purpose: Catch a dead target or broken creation path before the full suite.
// Dependencies: system-tests helpers
// ============================================================================

//! Smoke coverage for Mercado QA system-tests.

use std::time::Duration;

use mercado_client::StatusCode;
use mercado_contract::Market;
use mercado_contract::NewMarket;
use mercado_contract::routes;
use mercado_fixtures::FixturePool;

use crate::helpers::artifacts::SuiteReporter;
use crate::helpers::harness::TestTarget;
use crate::helpers::readiness::wait_for_service_ready;

/// Per-request timeout for smoke probes.
const SMOKE_TIMEOUT: Duration = Duration::from_secs(10);

/// Readiness budget; generous because free-tier deployments spin up slowly.
const READY_TIMEOUT: Duration = Duration::from_secs(60);

#[tokio::test(flavor = "multi_thread")]
async fn service_answers_market_listing() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = SuiteReporter::new("service_answers_market_listing")?;
    let target = TestTarget::resolve()?;
    let client = target.client(SMOKE_TIMEOUT)?;
    wait_for_service_ready(&client, READY_TIMEOUT).await?;

    client.spec().get(routes::markets()).expect_status(StatusCode::OK).send().await?;

    reporter.artifacts().write_json("exchange_transcript.json", &client.transcript())?;
    reporter.finish(
        "pass",
        vec!["market listing answered with 200".to_string()],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "exchange_transcript.json".to_string(),
        ],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn created_market_echoes_submitted_fields() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = SuiteReporter::new("created_market_echoes_submitted_fields")?;
    let target = TestTarget::resolve()?;
    let client = target.client(SMOKE_TIMEOUT)?;
    wait_for_service_ready(&client, READY_TIMEOUT).await?;
    let mut fixtures = FixturePool::from_entropy();

    let body = NewMarket {
        name: fixtures.company_name(),
        tax_id: fixtures.tax_id(),
        address: fixtures.street_address(),
    };
    let market: Market = client
        .spec()
        .post(routes::markets())
        .with_body(&body)
        .expect_status(StatusCode::CREATED)
        .expect_body_contains(body.name.clone())
        .send_typed()
        .await?;
    if market.name != body.name {
        return Err(
            format!("stored name {:?} differs from submitted {:?}", market.name, body.name).into()
        );
    }

    reporter.artifacts().write_json("exchange_transcript.json", &client.transcript())?;
    reporter.finish(
        "pass",
        vec!["market creation echoed the submitted fields".to_string()],
        vec![
            "summary.json".to_string(),
            "summary.md".to_string(),
            "exchange_transcript.json".to_string(),
        ],
    )?;
    Ok(())
}
