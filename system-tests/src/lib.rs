// system-tests/src/lib.rs
// ============================================================================
// Module: Mercado QA System Tests Library
// Description: Shared configuration for system test scenarios.
// Purpose: Provide common utilities for Mercado QA system-test binaries.
// Dependencies: std, url
// ============================================================================

//! ## Overview
//! This crate hosts the shared configuration used by the Mercado QA
//! system-test binaries in `system-tests/tests`. Suites target either a
//! live deployment (via environment configuration) or an in-process stub
//! of the grocery-store service.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
