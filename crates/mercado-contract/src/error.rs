// crates/mercado-contract/src/error.rs
// ============================================================================
// Module: Mercado Contract Errors
// Description: Validation errors for contract value types.
// Purpose: Reject schema-invalid values at construction boundaries.
// Dependencies: thiserror
// ============================================================================

use thiserror::Error;

/// Contract validation errors.
///
/// # Invariants
/// - Variants are stable for error classification.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Tax id is not exactly 14 ASCII digits.
    #[error("invalid tax id {raw:?}: expected exactly 14 digits")]
    InvalidTaxId {
        /// Rejected input.
        raw: String,
    },
    /// Amount is not a decimal with two fraction digits.
    #[error("invalid amount {raw:?}: expected <digits>.<two digits>")]
    InvalidMoney {
        /// Rejected input.
        raw: String,
    },
}
