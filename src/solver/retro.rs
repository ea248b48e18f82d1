// Retrograde classification by token-count layer (0 -> max).
//
// Every move strictly lowers the token total, so all children of a state in
// layer t live in layers < t and are classified before it. Index order is not
// used: canonicalisation can move a successor above its parent in index space.

use crate::types::{Position, StateIndex};

use super::graph::GameGraph;

/// Counters reported after classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetroStats {
    pub layers: usize,
    pub wins: usize,
    pub losses: usize,
}

/// Bucket canonical states by total token count.
fn token_layers(graph: &GameGraph) -> Vec<Vec<StateIndex>> {
    let max_tokens: usize = graph
        .indexer
        .limits()
        .as_slice()
        .iter()
        .map(|&l| usize::from(l))
        .sum();
    let mut layers: Vec<Vec<StateIndex>> = vec![Vec::new(); max_tokens + 1];
    for (&idx, rec) in &graph.records {
        layers[rec.piles.total_tokens() as usize].push(idx);
    }
    layers
}

/// Misère base case plus the inductive rule: Win iff some child is Loss.
fn classify(graph: &GameGraph, idx: StateIndex) -> Position {
    let rec = &graph.records[&idx];
    if rec.piles.is_terminal() {
        // The opponent took the last token.
        return Position::Win;
    }
    let mut any_loss = false;
    for child in &rec.reachable {
        match graph.records.get(child).map(|c| c.position) {
            Some(Position::Loss) => {
                any_loss = true;
                break;
            }
            Some(Position::Win) => {}
            Some(Position::Unknown) | None => panic!(
                "retrograde order violated: child {child} of {idx} ({}) is unclassified",
                rec.piles
            ),
        }
    }
    if any_loss {
        Position::Win
    } else {
        Position::Loss
    }
}

/// Fill in `position` for every record of a freshly built graph.
/// The counters are also kept on the graph (`GameGraph::retro_stats`).
pub fn evaluate(graph: &mut GameGraph) -> RetroStats {
    let layers = token_layers(graph);
    let mut stats = RetroStats { layers: layers.len(), ..RetroStats::default() };

    for layer in &layers {
        // States within one layer never point at each other.
        let computed: Vec<(StateIndex, Position)> =
            layer.iter().map(|&idx| (idx, classify(graph, idx))).collect();
        for (idx, position) in computed {
            match position {
                Position::Win => stats.wins += 1,
                Position::Loss => stats.losses += 1,
                Position::Unknown => {}
            }
            if let Some(rec) = graph.records.get_mut(&idx) {
                rec.position = position;
            }
        }
    }

    graph.retro = Some(stats);
    stats
}
