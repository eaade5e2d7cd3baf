use serde::{Deserialize, Serialize};

use crate::*;

/// Whether a tile spells part of the target word or is there to mislead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileOrigin {
    WordLetter,
    Decoy,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    Available,
    Placed(SlotId),
}

impl TileState {
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl Default for TileState {
    fn default() -> Self {
        Self::Available
    }
}

/// One draggable letter of a round's pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterTile {
    pub id: TileId,
    pub letter: Letter,
    pub origin: TileOrigin,
    pub state: TileState,
}

impl LetterTile {
    pub const fn new(id: TileId, letter: Letter, origin: TileOrigin) -> Self {
        Self {
            id,
            letter,
            origin,
            state: TileState::Available,
        }
    }

    pub const fn placed_slot(&self) -> Option<SlotId> {
        match self.state {
            TileState::Available => None,
            TileState::Placed(slot) => Some(slot),
        }
    }
}
