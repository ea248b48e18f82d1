use serde::{Deserialize, Serialize};

/// Dense mixed-radix index of a configuration, in `[0, total_states)`.
pub type StateIndex = usize;

/// Token count of a single pile.
pub type Pile = u8;

/// Outcome for the player about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Position {
    #[default]
    Unknown,
    /// P-position: the mover loses against optimal play.
    Loss,
    /// N-position: the mover can force a win.
    Win,
}

impl Position {
    #[inline]
    pub fn is_loss(self) -> bool {
        self == Position::Loss
    }

    #[inline]
    pub fn is_win(self) -> bool {
        self == Position::Win
    }
}

/// Remove `amount` tokens from pile `pile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub pile: usize,
    pub amount: Pile,
}
