// crates/mercado-fixtures/src/lib.rs
// ============================================================================
// Module: Mercado Fixtures
// Description: Randomized, schema-valid fixture values for the QA suite.
// Purpose: Produce request-body values that never collide across cases.
// Dependencies: mercado-contract, rand
// ============================================================================

//! ## Overview
//! Fixture values are drawn from small static pools with a pseudo-random
//! generator. `from_entropy` seeds from the OS for suite runs; `with_seed`
//! pins the sequence for deterministic unit tests. Market names carry a
//! random numeric suffix so successive fixtures stay distinct against the
//! shared remote store.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod pools;

// ============================================================================
// SECTION: Imports
// ============================================================================

use mercado_contract::Money;
use mercado_contract::TaxId;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Exclusive upper bound for the raw tax-id seed (14 decimal digits).
const TAX_ID_BOUND: u128 = 100_000_000_000_000;

/// Price bounds in cents; keeps generated amounts realistic for groceries.
const PRICE_CENTS_RANGE: std::ops::Range<u64> = 100..10_000;

// ============================================================================
// SECTION: Fixture Pool
// ============================================================================

/// Randomized fixture source shared by a suite run.
#[derive(Debug)]
pub struct FixturePool {
    /// Pseudo-random generator backing every draw.
    rng: SmallRng,
}

impl FixturePool {
    /// Creates a pool seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a pool with a pinned seed for deterministic sequences.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Draws a market company name with a collision-avoiding suffix.
    pub fn company_name(&mut self) -> String {
        let prefix = self.pick(pools::COMPANY_PREFIXES);
        let surname = self.pick(pools::SURNAMES);
        let suffix = self.rng.gen_range(1000..10_000_u32);
        format!("{prefix} {surname} {suffix}")
    }

    /// Draws a uniformly random 14-digit tax id.
    pub fn tax_id(&mut self) -> TaxId {
        TaxId::from_raw_digits(self.rng.gen_range(0..TAX_ID_BOUND))
    }

    /// Draws a street address sentence with a house number.
    pub fn street_address(&mut self) -> String {
        let street_type = self.pick(pools::STREET_TYPES);
        let surname = self.pick(pools::SURNAMES);
        let number = self.rng.gen_range(1..2000_u32);
        let district = self.pick(pools::DISTRICTS);
        format!("{street_type} {surname}, {number} - {district}")
    }

    /// Draws a fruit product name.
    pub fn fruit_name(&mut self) -> String {
        self.pick(pools::FRUITS).to_string()
    }

    /// Draws a vegetable product name.
    pub fn vegetable_name(&mut self) -> String {
        self.pick(pools::VEGETABLES).to_string()
    }

    /// Draws a sweet product name.
    pub fn sweet_name(&mut self) -> String {
        self.pick(pools::SWEETS).to_string()
    }

    /// Draws a decimal price within the grocery range.
    pub fn price(&mut self) -> Money {
        Money::from_cents(self.rng.gen_range(PRICE_CENTS_RANGE))
    }

    /// Picks one entry from a non-empty static pool.
    fn pick(&mut self, pool: &[&'static str]) -> &'static str {
        pool[self.rng.gen_range(0..pool.len())]
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
