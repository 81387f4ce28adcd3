// crates/mercado-contract/src/lib.rs
// ============================================================================
// Module: Mercado Contract
// Description: Typed wire contract for the grocery-store QA API.
// Purpose: Provide entities, identifiers, and resource paths with stable wire forms.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! This crate defines the wire contract consumed by the Mercado QA suite:
//! strongly typed identifiers, value types with construction-boundary
//! invariants, request/response entities, and resource-path builders.
//! Field names serialize to the Portuguese forms the remote service speaks
//! (`nome`, `cnpj`, `endereco`, `valor`).

// ============================================================================
// SECTION: Modules
// ============================================================================

mod entities;
mod error;
mod identifiers;
pub mod routes;
mod values;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use entities::Market;
pub use entities::NewMarket;
pub use entities::NewProduct;
pub use entities::Product;
pub use error::ContractError;
pub use identifiers::MarketId;
pub use identifiers::ProductId;
pub use routes::ProductCategory;
pub use values::Money;
pub use values::TaxId;
