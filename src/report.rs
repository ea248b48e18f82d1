// Cheat-sheet rendering of Loss positions: plain text and JSONL.
//
// Both walk Loss states in ascending index order, so output is deterministic
// for a given set of limits.

use std::io::Write;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::solver::GameGraph;
use crate::state::Configuration;
use crate::types::StateIndex;

#[derive(Debug, Serialize)]
struct LossLine<'a> {
    index: StateIndex,
    piles: &'a Configuration,
    tokens: u32,
    targets: Vec<StateIndex>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub lines: u64,
    pub sha256_hex: String,
}

pub fn write_text(graph: &GameGraph, out: &mut dyn Write) -> Result<()> {
    write!(out, "P-Positions of Misere Nim with starting piles ")?;
    for p in graph.limits().as_slice() {
        write!(out, "{p} ")?;
    }
    writeln!(out, "\n")?;

    if graph.start_position()?.is_win() {
        writeln!(out, "The starting player will win. Follow the cheat sheet below.")?;
        writeln!(out, "Put the game into a state on the list to win")?;
        writeln!(
            out,
            "After you and your opponent have moved, the game will be in one of the states indexed by 'Targets'\n"
        )?;
    } else {
        writeln!(out, "The starting player will lose.")?;
        writeln!(
            out,
            "Hope that the starting player messes up by NOT choosing one of the states in the list below."
        )?;
    }

    for (index, rec) in graph.loss_states() {
        write!(out, "N={index},\t{},\tTargets= ", rec.piles)?;
        for target in graph.safe_targets(index)? {
            write!(out, "{target} ")?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// One JSON object per Loss state. Returns the line count and a SHA-256 of the bytes written.
pub fn write_jsonl(graph: &GameGraph, out: &mut dyn Write) -> Result<ReportOutcome> {
    let mut hasher = Sha256::new();
    let mut lines: u64 = 0;

    for (index, rec) in graph.loss_states() {
        let line = LossLine {
            index,
            piles: &rec.piles,
            tokens: rec.piles.total_tokens(),
            targets: graph.safe_targets(index)?.into_iter().collect(),
        };
        let bytes = serde_json::to_vec(&line)?;
        out.write_all(&bytes)?;
        out.write_all(b"\n")?;
        hasher.update(&bytes);
        hasher.update(b"\n");
        lines += 1;
    }
    out.flush()?;

    Ok(ReportOutcome {
        lines,
        sha256_hex: hex::encode(hasher.finalize()),
    })
}
