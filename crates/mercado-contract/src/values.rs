// crates/mercado-contract/src/values.rs
// ============================================================================
// Module: Mercado Value Types
// Description: Wire value types with construction-boundary invariants.
// Purpose: Keep tax ids and monetary amounts schema-valid by construction.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The remote service accepts a CNPJ-style tax id (exactly 14 ASCII digits)
//! and decimal-formatted monetary amounts. Both are modeled as validated
//! string newtypes so invalid values cannot reach the wire; the string wire
//! form for amounts matches what the service's original clients submit.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ContractError;

/// Modulus bounding a raw seed to 14 decimal digits.
const TAX_ID_MODULUS: u128 = 100_000_000_000_000;

// ============================================================================
// SECTION: Tax Id
// ============================================================================

/// Market tax id (CNPJ).
///
/// # Invariants
/// - Exactly 14 ASCII digits; enforced at every construction boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaxId(String);

impl TaxId {
    /// Parses a tax id from raw input.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidTaxId`] when the input is not exactly
    /// 14 ASCII digits.
    pub fn new(raw: impl Into<String>) -> Result<Self, ContractError> {
        let raw = raw.into();
        if raw.len() == 14 && raw.bytes().all(|byte| byte.is_ascii_digit()) {
            Ok(Self(raw))
        } else {
            Err(ContractError::InvalidTaxId {
                raw,
            })
        }
    }

    /// Builds a tax id from a raw numeric seed, reduced to 14 digits.
    ///
    /// Total constructor for generators: any seed maps onto a valid,
    /// zero-padded tax id.
    #[must_use]
    pub fn from_raw_digits(raw: u128) -> Self {
        Self(format!("{:014}", raw % TAX_ID_MODULUS))
    }

    /// Returns the tax id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaxId {
    type Error = ContractError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaxId> for String {
    fn from(value: TaxId) -> Self {
        value.0
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// SECTION: Money
// ============================================================================

/// Decimal-formatted monetary amount.
///
/// # Invariants
/// - Wire form is `<digits>.<two digits>`; enforced at every construction
///   boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(String);

impl Money {
    /// Builds an amount from a cent count. Total constructor for generators.
    #[must_use]
    pub fn from_cents(cents: u64) -> Self {
        Self(format!("{}.{:02}", cents / 100, cents % 100))
    }

    /// Parses an amount from raw input.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidMoney`] when the input is not a
    /// decimal amount with exactly two fraction digits.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ContractError> {
        let raw = raw.into();
        let valid = raw.split_once('.').is_some_and(|(whole, fraction)| {
            !whole.is_empty()
                && whole.bytes().all(|byte| byte.is_ascii_digit())
                && fraction.len() == 2
                && fraction.bytes().all(|byte| byte.is_ascii_digit())
        });
        if valid {
            Ok(Self(raw))
        } else {
            Err(ContractError::InvalidMoney {
                raw,
            })
        }
    }

    /// Returns the amount as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Money {
    type Error = ContractError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Money> for String {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
