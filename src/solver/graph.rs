// Exhaustive move-graph construction over canonical configurations.
//
// Every raw index 0..total_states is decoded and canonicalised; the record map
// keyed by canonical index doubles as the visited set. Newly seen
// configurations are expanded through an explicit worklist, which also
// materialises move targets on first sight.

use std::collections::{BTreeMap, BTreeSet};
use std::hash::BuildHasherDefault;
use std::time::{Duration, Instant};

use hashbrown::HashMap as HbHashMap;
use indicatif::{ProgressBar, ProgressStyle};

use crate::canon::canonicalize;
use crate::error::{NimError, Result};
use crate::index::Indexer;
use crate::limits::PileLimits;
use crate::state::Configuration;
use crate::types::{Position, StateIndex};

use super::retro::RetroStats;
use super::BuildOptions;

type FastHasher = BuildHasherDefault<ahash::AHasher>;
type FastMap = HbHashMap<StateIndex, StateRecord, FastHasher>;

/// Spinner refresh cadence, in raw indices.
const PROGRESS_STRIDE: usize = 1 << 12;

/// One canonical configuration and its outgoing moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRecord {
    pub piles: Configuration,
    /// Canonical indices reachable by one legal move. Moves landing on the
    /// same canonical target collapse into one entry.
    pub reachable: BTreeSet<StateIndex>,
    pub position: Position,
}

impl StateRecord {
    #[inline]
    fn new(piles: Configuration) -> Self {
        Self { piles, reachable: BTreeSet::new(), position: Position::Unknown }
    }
}

/// Complete map from canonical state index to its record.
/// Built once by `build_graph`, classified once by `retro::evaluate`.
#[derive(Debug, Clone)]
pub struct GameGraph {
    pub(crate) indexer: Indexer,
    pub(crate) records: BTreeMap<StateIndex, StateRecord>,
    pub(crate) retro: Option<RetroStats>,
}

/// Counters reported after enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub raw_states: usize,
    pub canonical_states: usize,
    pub edges: usize,
}

impl GameGraph {
    pub fn stats(&self) -> BuildStats {
        BuildStats {
            raw_states: self.indexer.total_states(),
            canonical_states: self.records.len(),
            edges: self.records.values().map(|r| r.reachable.len()).sum(),
        }
    }
}

/// Index of the canonical successor of `piles` after removing `amount` from `pile`.
/// `piles` must be canonical and the move legal; anything else is a builder defect.
#[inline]
fn successor_index(indexer: &Indexer, piles: &Configuration, pile: usize, amount: u8) -> StateIndex {
    let mut next = piles.piles().to_vec();
    debug_assert!(amount >= 1 && amount <= next[pile], "illegal move generated");
    next[pile] -= amount;
    let next = canonicalize(&Configuration::new(next));
    debug_assert!(next.total_tokens() < piles.total_tokens());
    indexer
        .encode(&next)
        .unwrap_or_else(|e| panic!("canonical successor {next:?} of {piles:?} is not encodable: {e}"))
}

fn spinner(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] enumerate {spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Enumerate every canonical configuration drawable from `limits` and its move edges.
/// Positions are left `Unknown`.
pub fn build_graph(limits: &PileLimits, options: &BuildOptions) -> Result<GameGraph> {
    let raw = limits.raw_state_count();
    if let Some(max) = options.max_states {
        if raw > u128::from(max) {
            return Err(NimError::TooLarge { states: raw, max: u128::from(max) });
        }
    }
    let indexer = Indexer::new(limits.clone())?;
    let total = indexer.total_states();

    let pb = spinner(options.progress);
    pb.set_message(format!("starting (raw states = {total})"));
    let started = Instant::now();

    let mut records: FastMap = FastMap::with_hasher(FastHasher::default());
    let mut pending: Vec<StateIndex> = Vec::new();

    for raw_index in 0..total {
        if raw_index % PROGRESS_STRIDE == 0 {
            pb.set_message(format!("raw {raw_index}/{total} canonical {}", records.len()));
        }

        let config = indexer
            .decode(raw_index)
            .unwrap_or_else(|e| panic!("in-range index {raw_index} failed to decode: {e}"));
        let canon = canonicalize(&config);
        let key = indexer
            .encode(&canon)
            .unwrap_or_else(|e| panic!("canonical form {canon:?} is not encodable: {e}"));
        if records.contains_key(&key) {
            continue;
        }
        records.insert(key, StateRecord::new(canon));
        pending.push(key);

        while let Some(idx) = pending.pop() {
            let piles = records[&idx].piles.clone();
            let mut reachable = BTreeSet::new();
            for mv in piles.legal_moves() {
                let target = successor_index(&indexer, &piles, mv.pile, mv.amount);
                reachable.insert(target);
                if !records.contains_key(&target) {
                    let target_piles = indexer
                        .decode(target)
                        .unwrap_or_else(|e| panic!("successor index {target} failed to decode: {e}"));
                    records.insert(target, StateRecord::new(target_piles));
                    pending.push(target);
                }
            }
            if let Some(rec) = records.get_mut(&idx) {
                rec.reachable = reachable;
            }
        }
    }

    pb.finish_and_clear();
    let graph = GameGraph {
        indexer,
        records: records.into_iter().collect(),
        retro: None,
    };
    if options.verbose {
        let stats = graph.stats();
        eprintln!(
            "[graph] enumeration done: raw={} canonical={} edges={} elapsed_ms={}",
            stats.raw_states,
            stats.canonical_states,
            stats.edges,
            started.elapsed().as_millis()
        );
    }
    Ok(graph)
}
