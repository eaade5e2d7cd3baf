#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use scoring::*;
pub use session::*;
pub use slot::*;
pub use tile::*;
pub use types::*;
pub use words::*;

mod engine;
mod error;
mod generator;
mod layout;
mod scoring;
mod session;
mod slot;
mod tile;
mod types;
mod words;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Number of tiles offered, raised to the word length when smaller.
    pub pool_size: usize,
    pub decoys: DecoyPolicy,
    pub scoring: ScoreSchedule,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            decoys: Default::default(),
            scoring: Default::default(),
        }
    }
}

/// Result of a tile move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Changed,
    /// The move completed the word and it was right.
    Solved { score: u32 },
    /// The move completed the word, it was wrong and the slots were cleared.
    Rejected,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Incomplete,
    Correct { score: u32 },
    Incorrect,
    AlreadySolved,
}

impl Verdict {
    pub const fn has_update(self) -> bool {
        use Verdict::*;
        match self {
            Incomplete => false,
            Correct { .. } => true,
            Incorrect => true,
            AlreadySolved => false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HintOutcome {
    Filled {
        slot: SlotId,
        tile: TileId,
        outcome: MoveOutcome,
    },
    NoEmptySlot,
    /// Every tile with the needed letter is already placed elsewhere.
    NoMatchingTile,
}

impl HintOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Filled { .. })
    }
}
