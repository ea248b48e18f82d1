// Mixed-radix indexing of configurations.
//
// Digit i has radix limit_i + 1; the first pile is the most significant digit,
// so index(c) = Σ c[i] · Π_{j>i}(limit_j + 1).

use crate::error::{NimError, Result};
use crate::limits::PileLimits;
use crate::state::Configuration;
use crate::types::StateIndex;

/// Bijection between in-bounds configurations and `[0, total_states)`.
#[derive(Debug, Clone)]
pub struct Indexer {
    limits: PileLimits,
    total_states: usize,
}

impl Indexer {
    /// Fails with `TooLarge` when `total_states` does not fit in a `usize`.
    pub fn new(limits: PileLimits) -> Result<Self> {
        let raw = limits.raw_state_count();
        let total_states = usize::try_from(raw).map_err(|_| NimError::TooLarge {
            states: raw,
            max: usize::MAX as u128,
        })?;
        Ok(Self { limits, total_states })
    }

    #[inline]
    pub fn limits(&self) -> &PileLimits {
        &self.limits
    }

    #[inline]
    pub fn total_states(&self) -> usize {
        self.total_states
    }

    pub fn encode(&self, config: &Configuration) -> Result<StateIndex> {
        let limits = self.limits.as_slice();
        if config.len() != limits.len() {
            return Err(NimError::InvalidLength { expected: limits.len(), got: config.len() });
        }

        let mut n: StateIndex = 0;
        let mut multiplier: usize = 1;
        for (pile, (&value, &limit)) in config.piles().iter().zip(limits).enumerate().rev() {
            if value > limit {
                return Err(NimError::PileOutOfRange { pile, value, limit });
            }
            n += usize::from(value) * multiplier;
            multiplier *= usize::from(limit) + 1;
        }
        Ok(n)
    }

    pub fn decode(&self, index: StateIndex) -> Result<Configuration> {
        if index >= self.total_states {
            return Err(NimError::IndexOutOfRange { index, total: self.total_states });
        }

        let limits = self.limits.as_slice();
        let mut piles = vec![0u8; limits.len()];
        let mut n = index;
        for (slot, &limit) in piles.iter_mut().zip(limits).rev() {
            let base = usize::from(limit) + 1;
            *slot = u8::try_from(n % base)
                .unwrap_or_else(|e| panic!("digit of index {index} exceeds a pile limit: {e}"));
            n /= base;
        }
        debug_assert_eq!(n, 0, "index {index} left a non-zero carry");
        Ok(Configuration::new(piles))
    }
}
