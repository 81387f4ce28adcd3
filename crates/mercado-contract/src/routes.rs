// crates/mercado-contract/src/routes.rs
// ============================================================================
// Module: Mercado Routes
// Description: Resource-path construction for the grocery-store API.
// Purpose: Keep every request path derived from one set of builders.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Paths are rooted (leading slash) and joined onto a base URL by the
//! client. Product routes nest under a market and a category-specific
//! segment (`hortifruit` for fruits and vegetables, `padaria` for sweets).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use crate::identifiers::MarketId;
use crate::identifiers::ProductId;

// ============================================================================
// SECTION: Product Categories
// ============================================================================

/// Product category, selecting the nested resource path for a product call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    /// Fruits under the hortifruit section.
    Fruit,
    /// Vegetables under the hortifruit section.
    Vegetable,
    /// Sweets under the bakery section.
    Sweet,
}

impl ProductCategory {
    /// Returns the nested path segment for this category.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Fruit => "produtos/hortifruit/frutas",
            Self::Vegetable => "produtos/hortifruit/legumes",
            Self::Sweet => "produtos/padaria/doces",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Fruit => "fruit",
            Self::Vegetable => "vegetable",
            Self::Sweet => "sweet",
        };
        f.write_str(label)
    }
}

// ============================================================================
// SECTION: Path Builders
// ============================================================================

/// Returns the market collection path.
#[must_use]
pub const fn markets() -> &'static str {
    "/mercado"
}

/// Returns the detail path for one market.
#[must_use]
pub fn market(id: MarketId) -> String {
    format!("/mercado/{id}")
}

/// Returns the path listing every product under a market.
#[must_use]
pub fn market_products(id: MarketId) -> String {
    format!("/mercado/{id}/produtos")
}

/// Returns the collection path for one product category under a market.
#[must_use]
pub fn products(id: MarketId, category: ProductCategory) -> String {
    format!("/mercado/{id}/{}", category.path_segment())
}

/// Returns the detail path for one product under a market.
#[must_use]
pub fn product(id: MarketId, category: ProductCategory, product_id: ProductId) -> String {
    format!("/mercado/{id}/{}/{product_id}", category.path_segment())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
