use crate::error::{NimError, Result};
use crate::state::Configuration;
use crate::types::Pile;

/// Per-pile upper bounds, which are also the starting configuration.
///
/// Limits are kept sorted ascending. Reordering the bounds leaves the set of
/// drawable multisets unchanged, and with sorted bounds the ascending sort of
/// any in-bounds configuration stays in bounds, so every canonical
/// configuration has an encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PileLimits {
    limits: Vec<Pile>,
}

impl PileLimits {
    pub fn new(mut limits: Vec<Pile>) -> Result<Self> {
        if limits.is_empty() {
            return Err(NimError::InvalidBounds {
                reason: "at least one pile is required".to_string(),
            });
        }
        if let Some(pile) = limits.iter().position(|&l| l == 0) {
            return Err(NimError::InvalidBounds {
                reason: format!("pile {pile} has limit 0; each pile limit must be >= 1"),
            });
        }
        limits.sort_unstable();
        Ok(Self { limits })
    }

    #[inline]
    pub fn as_slice(&self) -> &[Pile] {
        &self.limits
    }

    #[inline]
    pub fn pile_count(&self) -> usize {
        self.limits.len()
    }

    /// Radix of each digit position: `limit + 1`.
    #[inline]
    pub fn radices(&self) -> impl Iterator<Item = usize> + '_ {
        self.limits.iter().map(|&l| usize::from(l) + 1)
    }

    /// `Π(limit_i + 1)`, saturating at `u128::MAX`.
    pub fn raw_state_count(&self) -> u128 {
        self.limits
            .iter()
            .fold(1u128, |acc, &l| acc.saturating_mul(u128::from(l) + 1))
    }

    /// Full piles: the position the game starts from.
    #[inline]
    pub fn start(&self) -> Configuration {
        Configuration::new(self.limits.clone())
    }
}
