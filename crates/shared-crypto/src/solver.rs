//! # Solver Tier Configuration
//!
//! The discrete-log solver and the range prover run against precomputed
//! tables, one per supported bit-width. Each tier bounds the solver's
//! attempts; a tier that exhausts its budget fails rather than running
//! unbounded.

use serde::{Deserialize, Serialize};

/// One precomputed solver tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverTier {
    /// Bit-width this tier covers.
    pub bits: u8,
    /// Precomputed table size (number of stored points).
    pub table_size: u32,
    /// Kangaroo herd width parameter.
    pub herd_width: u32,
    /// Distinguished-point rarity parameter.
    pub rarity: u32,
    /// Upper bound on solver attempts before reporting exhaustion.
    pub max_attempts: u32,
}

impl SolverTier {
    /// Largest amount representable within this tier's bit-width.
    #[must_use]
    pub fn max_amount(&self) -> u64 {
        if self.bits >= 64 {
            u64::MAX
        } else {
            (1u64 << self.bits) - 1
        }
    }
}

/// The full tier table. Defaults mirror the production tables shipped with
/// the wallet's native solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverTierConfig {
    /// Tiers ordered by ascending bit-width.
    pub tiers: Vec<SolverTier>,
}

impl SolverTierConfig {
    /// Find the tier for an exact bit-width.
    #[must_use]
    pub fn tier_for_bits(&self, bits: u8) -> Option<&SolverTier> {
        self.tiers.iter().find(|t| t.bits == bits)
    }

    /// Find the smallest tier whose range bound covers `amount`.
    #[must_use]
    pub fn tier_for_amount(&self, amount: u64) -> Option<&SolverTier> {
        self.tiers.iter().find(|t| amount <= t.max_amount())
    }

    /// Supported bit-widths, ascending.
    #[must_use]
    pub fn supported_bits(&self) -> Vec<u8> {
        self.tiers.iter().map(|t| t.bits).collect()
    }
}

impl Default for SolverTierConfig {
    fn default() -> Self {
        Self {
            tiers: vec![
                SolverTier {
                    bits: 16,
                    table_size: 8_000,
                    herd_width: 8,
                    rarity: 64,
                    max_attempts: 20,
                },
                SolverTier {
                    bits: 32,
                    table_size: 4_000,
                    herd_width: 2_048,
                    rarity: 128,
                    max_attempts: 40,
                },
                SolverTier {
                    bits: 48,
                    table_size: 40_000,
                    herd_width: 65_536,
                    rarity: 128,
                    max_attempts: 1_000,
                },
            ],
        }
    }
}
