use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NimError, Result};
use crate::types::{Move, Pile};

/// Token counts per pile, in pile order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    piles: Vec<Pile>,
}

impl Configuration {
    #[inline]
    pub fn new(piles: Vec<Pile>) -> Self {
        Self { piles }
    }

    #[inline]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    /// Sum of all piles. Strictly decreases with every move.
    #[inline]
    pub fn total_tokens(&self) -> u32 {
        self.piles.iter().map(|&p| u32::from(p)).sum()
    }

    /// No tokens left, so no legal move exists.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.piles.iter().all(|&p| p == 0)
    }

    #[inline]
    pub(crate) fn sort_ascending(&mut self) {
        self.piles.sort_unstable();
    }

    /// Returns ordered legal moves.
    /// Order: by pile index ascending, then by amount ascending.
    pub fn legal_moves(&self) -> Vec<Move> {
        let n = self.total_tokens() as usize;
        let mut moves = Vec::with_capacity(n);
        for (pile, &tokens) in self.piles.iter().enumerate() {
            for amount in 1..=tokens {
                moves.push(Move { pile, amount });
            }
        }
        moves
    }

    /// Apply a move without canonicalising the result.
    pub fn apply(&self, mv: Move) -> Result<Configuration> {
        let Some(&tokens) = self.piles.get(mv.pile) else {
            return Err(NimError::IllegalMove { pile: mv.pile, amount: mv.amount });
        };
        if mv.amount == 0 || mv.amount > tokens {
            return Err(NimError::IllegalMove { pile: mv.pile, amount: mv.amount });
        }
        let mut next = self.clone();
        next.piles[mv.pile] = tokens - mv.amount;
        Ok(next)
    }
}

/// Compact rendering with empty piles shown as a space, e.g. ` 23`.
impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &p in &self.piles {
            if p == 0 {
                f.write_str(" ")?;
            } else {
                write!(f, "{p}")?;
            }
        }
        Ok(())
    }
}

/// Free-function forms of the configuration API.
#[inline]
pub fn legal_moves(config: &Configuration) -> Vec<Move> {
    config.legal_moves()
}

#[inline]
pub fn apply_move(config: &Configuration, mv: Move) -> Result<Configuration> {
    config.apply(mv)
}

#[inline]
pub fn is_terminal(config: &Configuration) -> bool {
    config.is_terminal()
}
