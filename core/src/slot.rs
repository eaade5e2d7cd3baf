use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// One position of the word template that a tile can be dropped into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlankSlot {
    pub id: SlotId,
    pub index: usize,
    pub expected: Letter,
    pub occupant: Option<TileId>,
}

impl BlankSlot {
    pub const fn is_filled(&self) -> bool {
        self.occupant.is_some()
    }
}

/// Builds the empty, ordered slot sequence for `word`.
pub fn build_slots(word: &Word) -> Vec<BlankSlot> {
    word.letters()
        .iter()
        .enumerate()
        .map(|(index, &expected)| BlankSlot {
            id: SlotId(index as u16),
            index,
            expected,
            occupant: None,
        })
        .collect()
}
