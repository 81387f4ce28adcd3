// crates/mercado-contract/src/entities.rs
// ============================================================================
// Module: Mercado Entities
// Description: Request and response bodies for markets and products.
// Purpose: Keep the Portuguese wire field names behind typed Rust structs.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Creation bodies (`NewMarket`, `NewProduct`) carry no identifier; the
//! service assigns one and echoes the stored row back (`Market`, `Product`).
//! Products are structurally identical across the fruit, vegetable, and
//! sweet categories.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::identifiers::MarketId;
use crate::identifiers::ProductId;
use crate::values::Money;
use crate::values::TaxId;

// ============================================================================
// SECTION: Market Bodies
// ============================================================================

/// Market creation/replacement body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMarket {
    /// Market display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Market tax id (CNPJ, 14 digits).
    #[serde(rename = "cnpj")]
    pub tax_id: TaxId,
    /// Market street address.
    #[serde(rename = "endereco")]
    pub address: String,
}

/// Market row as stored by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    /// Service-assigned identifier.
    pub id: MarketId,
    /// Market display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Market tax id (CNPJ, 14 digits).
    #[serde(rename = "cnpj")]
    pub tax_id: TaxId,
    /// Market street address.
    #[serde(rename = "endereco")]
    pub address: String,
}

// ============================================================================
// SECTION: Product Bodies
// ============================================================================

/// Product creation body, shared by every category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    /// Product display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Product price.
    #[serde(rename = "valor")]
    pub price: Money,
}

/// Product row as stored by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Service-assigned identifier.
    pub id: ProductId,
    /// Product display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Product price.
    #[serde(rename = "valor")]
    pub price: Money,
}

// ============================================================================
// SECTION: Tests
// ============================================================================
