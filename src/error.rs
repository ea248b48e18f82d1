use thiserror::Error;

use crate::types::StateIndex;

/// Error type for limit validation, indexing, queries and report output.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NimError {
    #[error("invalid pile limits: {reason}")]
    InvalidBounds { reason: String },

    #[error("configuration has {got} piles, expected {expected}")]
    InvalidLength { expected: usize, got: usize },

    #[error("pile {pile} holds {value} tokens, limit is {limit}")]
    PileOutOfRange { pile: usize, value: u8, limit: u8 },

    #[error("state index {index} outside [0, {total})")]
    IndexOutOfRange { index: StateIndex, total: usize },

    #[error("state index {index} was never materialised")]
    NotFound { index: StateIndex },

    #[error("state space of {states} raw encodings exceeds the limit of {max}")]
    TooLarge { states: u128, max: u128 },

    #[error("illegal move: remove {amount} from pile {pile}")]
    IllegalMove { pile: usize, amount: u8 },

    #[error("report write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("report serialisation failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NimError>;
