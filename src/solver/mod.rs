use std::time::Instant;

use crate::error::Result;
use crate::limits::PileLimits;

pub mod graph;
pub mod query;
pub mod retro;

pub use graph::{build_graph, BuildStats, GameGraph, StateRecord};
pub use retro::{evaluate, RetroStats};

/// Raw-encoding cap applied when the caller does not pick one.
pub const DEFAULT_MAX_STATES: u64 = 50_000_000;

#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Fail with `TooLarge` before enumerating when `Π(limit + 1)` exceeds this.
    pub max_states: Option<u64>,
    /// Show an enumeration spinner on stderr.
    pub progress: bool,
    /// Log `[graph]` and `[retro]` summary lines on stderr.
    pub verbose: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_states: Some(DEFAULT_MAX_STATES),
            progress: false,
            verbose: false,
        }
    }
}

/// Build the move graph and classify every state.
pub fn analyze(limits: &PileLimits, options: &BuildOptions) -> Result<GameGraph> {
    let mut graph = build_graph(limits, options)?;
    let started = Instant::now();
    let stats = evaluate(&mut graph);
    if options.verbose {
        eprintln!(
            "[retro] classified layers={} wins={} losses={} elapsed_ms={}",
            stats.layers,
            stats.wins,
            stats.losses,
            started.elapsed().as_millis()
        );
    }
    Ok(graph)
}
