use std::collections::BTreeSet;

use crate::canon::canonicalize;
use crate::error::{NimError, Result};
use crate::limits::PileLimits;
use crate::state::Configuration;
use crate::types::{Position, StateIndex};

use super::graph::{GameGraph, StateRecord};
use super::retro::RetroStats;

/// Read-only lookups over a classified graph.
impl GameGraph {
    #[inline]
    pub fn limits(&self) -> &PileLimits {
        self.indexer.limits()
    }

    /// Raw encodings, canonical or not.
    #[inline]
    pub fn total_states(&self) -> usize {
        self.indexer.total_states()
    }

    /// Number of canonical states materialised.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Classification counters; `None` until `evaluate` has run.
    #[inline]
    pub fn retro_stats(&self) -> Option<RetroStats> {
        self.retro
    }

    pub fn record(&self, index: StateIndex) -> Result<&StateRecord> {
        self.records.get(&index).ok_or(NimError::NotFound { index })
    }

    /// All records in ascending index order.
    pub fn records(&self) -> impl Iterator<Item = (StateIndex, &StateRecord)> + '_ {
        self.records.iter().map(|(&idx, rec)| (idx, rec))
    }

    pub fn position_of(&self, index: StateIndex) -> Result<Position> {
        self.record(index).map(|r| r.position)
    }

    pub fn reachable_from(&self, index: StateIndex) -> Result<&BTreeSet<StateIndex>> {
        self.record(index).map(|r| &r.reachable)
    }

    pub fn piles_of(&self, index: StateIndex) -> Result<&Configuration> {
        self.record(index).map(|r| &r.piles)
    }

    /// Canonical index of any in-bounds configuration, in any pile order.
    pub fn index_of(&self, config: &Configuration) -> Result<StateIndex> {
        let index = self.indexer.encode(&canonicalize(config))?;
        self.record(index).map(|_| index)
    }

    /// The full-piles starting position.
    pub fn start_index(&self) -> Result<StateIndex> {
        self.index_of(&self.limits().start())
    }

    pub fn start_position(&self) -> Result<Position> {
        self.position_of(self.start_index()?)
    }

    /// Reachable Loss states: the moves that keep a winning mover winning.
    /// Empty for Loss states and for the terminal state.
    pub fn winning_moves(&self, index: StateIndex) -> Result<Vec<StateIndex>> {
        let mut out = Vec::new();
        for &child in self.reachable_from(index)? {
            if self.position_of(child)?.is_loss() {
                out.push(child);
            }
        }
        Ok(out)
    }

    /// Loss states two moves ahead (one move per player) of `index`.
    ///
    /// Meant for Loss states: after the opponent moves out of a Loss state,
    /// these are the states the player should steer back into.
    pub fn safe_targets(&self, index: StateIndex) -> Result<BTreeSet<StateIndex>> {
        let mut targets = BTreeSet::new();
        for &after_one in self.reachable_from(index)? {
            for &after_two in self.reachable_from(after_one)? {
                if self.position_of(after_two)?.is_loss() {
                    targets.insert(after_two);
                }
            }
        }
        Ok(targets)
    }

    /// Loss records in ascending index order.
    pub fn loss_states(&self) -> impl Iterator<Item = (StateIndex, &StateRecord)> + '_ {
        self.records().filter(|(_, rec)| rec.position.is_loss())
    }
}
