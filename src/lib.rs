#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod error;
pub mod limits;
pub mod state;
pub mod index;
pub mod canon;

pub mod solver;
pub mod report;

// Re-exports: stable minimal API surface for external callers
pub use crate::canon::{canonicalize, is_canonical};
pub use crate::error::NimError;
pub use crate::index::Indexer;
pub use crate::limits::PileLimits;
pub use crate::solver::{
    analyze, build_graph, evaluate, BuildOptions, GameGraph, RetroStats, StateRecord, DEFAULT_MAX_STATES,
};
pub use crate::state::{apply_move, is_terminal, legal_moves, Configuration};
pub use crate::types::{Move, Pile, Position, StateIndex};
