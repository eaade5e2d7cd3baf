use alloc::string::String;
use alloc::vec::Vec;
use core::mem;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    InProgress,
    Solved { score: u32 },
}

impl RoundState {
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Notification for the presentation layer, queued by the round and drained with [`Round::take_events`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    Placed { tile: TileId, slot: SlotId },
    Removed { tile: TileId, slot: SlotId },
    Reset,
    HintUsed { slot: SlotId, letter: Letter },
    RoundSuccess { score: u32 },
    RoundFailed,
}

/// State of one attempt at spelling a word: the slot template, the tile pool and the hints spent so far.
///
/// Operations with a valid id but a violated precondition (tile already placed, slot already filled, round already
/// solved) are no-ops, since drag gestures can deliver duplicate or late drops.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRound")]
pub struct Round {
    word: Word,
    slots: Vec<BlankSlot>,
    tiles: Vec<LetterTile>,
    scoring: ScoreSchedule,
    hints_used: u32,
    failed_attempts: u32,
    state: RoundState,
    #[serde(skip)]
    events: Vec<RoundEvent>,
}

#[derive(Deserialize)]
struct RawRound {
    word: Word,
    slots: Vec<BlankSlot>,
    tiles: Vec<LetterTile>,
    scoring: ScoreSchedule,
    hints_used: u32,
    failed_attempts: u32,
    state: RoundState,
}

impl TryFrom<RawRound> for Round {
    type Error = GameError;

    fn try_from(raw: RawRound) -> Result<Self> {
        check_pool(&raw.word, &raw.tiles)?;

        let template = build_slots(&raw.word);
        let slots_match = raw.slots.len() == template.len()
            && raw
                .slots
                .iter()
                .zip(&template)
                .all(|(slot, blank)| BlankSlot { occupant: None, ..*slot } == *blank);

        let round = Self {
            word: raw.word,
            slots: raw.slots,
            tiles: raw.tiles,
            scoring: raw.scoring,
            hints_used: raw.hints_used,
            failed_attempts: raw.failed_attempts,
            state: raw.state,
            events: Vec::new(),
        };
        if !slots_match || !round.is_consistent() {
            log::warn!("Rejecting saved round for {}", round.word);
            return Err(GameError::InvalidRound);
        }

        let solved_board = round.is_full() && round.word.matches(round.placed_letters());
        if round.state.is_solved() && !solved_board {
            log::warn!("Rejecting saved round for {}: solved without the word in place", round.word);
            return Err(GameError::InvalidRound);
        }
        Ok(round)
    }
}

/// Tile ids must be `0..tiles.len()` in order and every word letter must be present as often as the word uses it.
fn check_pool(word: &Word, tiles: &[LetterTile]) -> Result<()> {
    let dense = tiles
        .iter()
        .enumerate()
        .all(|(i, tile)| tile.id.to_index() == i);
    let covered = word.letters().iter().all(|&letter| {
        tiles.iter().filter(|tile| tile.letter == letter).count() >= word.count_of(letter)
    });
    if !dense || !covered || tiles.len() > MAX_POOL_SIZE {
        return Err(GameError::InvalidPool);
    }
    Ok(())
}

impl Round {
    /// Starts a round with a freshly generated random pool.
    pub fn new(word: Word, config: &RoundConfig, seed: u64) -> Self {
        let generator = RandomPoolGenerator::new(seed, config.decoys);
        Self::with_generator(word, config.pool_size, config.scoring.clone(), generator)
    }

    pub fn with_generator<G: PoolGenerator>(
        word: Word,
        pool_size: usize,
        scoring: ScoreSchedule,
        generator: G,
    ) -> Self {
        let tiles = generator.generate(&word, pool_size);
        Self::from_parts(word, tiles, scoring)
    }

    /// Starts a round over an existing pool, e.g. one restored from storage.
    ///
    /// Tile ids must be `0..tiles.len()` in order and the pool must hold every letter of the word as many times
    /// as the word uses it. Placements are discarded.
    pub fn from_tiles(word: Word, mut tiles: Vec<LetterTile>, scoring: ScoreSchedule) -> Result<Self> {
        check_pool(&word, &tiles)?;

        for tile in &mut tiles {
            tile.state = TileState::Available;
        }
        Ok(Self::from_parts(word, tiles, scoring))
    }

    fn from_parts(word: Word, tiles: Vec<LetterTile>, scoring: ScoreSchedule) -> Self {
        log::debug!("New round for {} with {} tiles", word, tiles.len());
        Self {
            slots: build_slots(&word),
            word,
            tiles,
            scoring,
            hints_used: 0,
            failed_attempts: 0,
            state: Default::default(),
            events: Vec::new(),
        }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn slots(&self) -> &[BlankSlot] {
        &self.slots
    }

    pub fn tiles(&self) -> &[LetterTile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&LetterTile> {
        self.tiles.get(id.to_index())
    }

    pub fn slot(&self, id: SlotId) -> Option<&BlankSlot> {
        self.slots.get(id.to_index())
    }

    pub fn available_tiles(&self) -> impl Iterator<Item = &LetterTile> {
        self.tiles.iter().filter(|tile| tile.state.is_available())
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Score awarded for this round, `None` until solved.
    pub fn score(&self) -> Option<u32> {
        match self.state {
            RoundState::InProgress => None,
            RoundState::Solved { score } => Some(score),
        }
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    pub fn scoring(&self) -> &ScoreSchedule {
        &self.scoring
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_filled()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(BlankSlot::is_filled)
    }

    /// Letters currently in the slots, `_` for empty ones.
    pub fn guess(&self) -> String {
        self.slots
            .iter()
            .map(|slot| match slot.occupant {
                Some(tile) => self.tiles[tile.to_index()].letter.as_char(),
                None => '_',
            })
            .collect()
    }

    fn placed_letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.slots
            .iter()
            .filter_map(|slot| slot.occupant.map(|tile| self.tiles[tile.to_index()].letter))
    }

    /// Drains queued notifications in the order they happened.
    pub fn take_events(&mut self) -> Vec<RoundEvent> {
        mem::take(&mut self.events)
    }

    /// Moves an available tile into an empty slot. Completing the word validates it right away.
    pub fn place_tile(&mut self, tile: TileId, slot: SlotId) -> Result<MoveOutcome> {
        self.validate_tile(tile)?;
        self.validate_slot(slot)?;
        Ok(self.place(tile, slot))
    }

    fn place(&mut self, tile: TileId, slot: SlotId) -> MoveOutcome {
        if self.state.is_solved() {
            return MoveOutcome::NoChange;
        }

        let tile_state = self.tiles[tile.to_index()].state;
        let occupant = self.slots[slot.to_index()].occupant;
        if !tile_state.is_available() || occupant.is_some() {
            log::trace!(
                "Ignoring drop of {} on {} (tile {:?}, slot holds {:?})",
                tile,
                slot,
                tile_state,
                occupant
            );
            return MoveOutcome::NoChange;
        }

        self.tiles[tile.to_index()].state = TileState::Placed(slot);
        self.slots[slot.to_index()].occupant = Some(tile);
        self.events.push(RoundEvent::Placed { tile, slot });

        if !self.is_full() {
            return MoveOutcome::Changed;
        }

        match self.validate() {
            Verdict::Correct { score } => MoveOutcome::Solved { score },
            Verdict::Incorrect => MoveOutcome::Rejected,
            Verdict::Incomplete | Verdict::AlreadySolved => MoveOutcome::Changed,
        }
    }

    /// Sends the tile in `slot` back to the pool.
    pub fn remove_tile(&mut self, slot: SlotId) -> Result<MoveOutcome> {
        self.validate_slot(slot)?;

        if self.state.is_solved() {
            return Ok(MoveOutcome::NoChange);
        }

        let Some(tile) = self.slots[slot.to_index()].occupant.take() else {
            return Ok(MoveOutcome::NoChange);
        };
        self.tiles[tile.to_index()].state = TileState::Available;
        self.events.push(RoundEvent::Removed { tile, slot });

        Ok(MoveOutcome::Changed)
    }

    /// Clears every slot, keeping the same pool.
    pub fn reset(&mut self) -> MoveOutcome {
        if self.state.is_solved() || self.filled_count() == 0 {
            return MoveOutcome::NoChange;
        }

        self.clear_placements();
        self.events.push(RoundEvent::Reset);
        MoveOutcome::Changed
    }

    fn clear_placements(&mut self) {
        for slot in &mut self.slots {
            slot.occupant = None;
        }
        for tile in &mut self.tiles {
            tile.state = TileState::Available;
        }
    }

    /// Explicit check of the current placement, same as what a completing drop triggers.
    pub fn submit(&mut self) -> Verdict {
        self.validate()
    }

    /// Compares the slots against the word.
    ///
    /// A correct word solves the round and awards the hint-adjusted score exactly once. A wrong one counts a failed
    /// attempt and resets the slots so the same pool can be retried.
    pub fn validate(&mut self) -> Verdict {
        if self.state.is_solved() {
            return Verdict::AlreadySolved;
        }
        if !self.is_full() {
            return Verdict::Incomplete;
        }

        if self.word.matches(self.placed_letters()) {
            let score = self
                .scoring
                .score_for_hints_used(self.word.len(), self.hints_used);
            self.state = RoundState::Solved { score };
            self.events.push(RoundEvent::RoundSuccess { score });
            log::debug!(
                "Solved {} with {} hints for {} points",
                self.word,
                self.hints_used,
                score
            );
            Verdict::Correct { score }
        } else {
            log::debug!("Wrong guess {} for {}", self.guess(), self.word);
            self.failed_attempts += 1;
            self.events.push(RoundEvent::RoundFailed);
            self.clear_placements();
            Verdict::Incorrect
        }
    }

    /// Fills the first empty slot with a matching available tile and counts a hint.
    pub fn use_hint(&mut self) -> HintOutcome {
        if self.state.is_solved() {
            return HintOutcome::NoEmptySlot;
        }

        let Some(slot) = self.slots.iter().find(|slot| !slot.is_filled()).copied() else {
            return HintOutcome::NoEmptySlot;
        };

        let matching = |tile: &&LetterTile| tile.state.is_available() && tile.letter == slot.expected;
        let tile = self
            .tiles
            .iter()
            .filter(matching)
            .find(|tile| tile.origin == TileOrigin::WordLetter)
            .or_else(|| self.tiles.iter().find(matching))
            .map(|tile| tile.id);
        let Some(tile) = tile else {
            log::warn!("No available {} tile for hint on {}", slot.expected, slot.id);
            return HintOutcome::NoMatchingTile;
        };

        self.hints_used += 1;
        self.events.push(RoundEvent::HintUsed {
            slot: slot.id,
            letter: slot.expected,
        });
        let outcome = self.place(tile, slot.id);

        HintOutcome::Filled {
            slot: slot.id,
            tile,
            outcome,
        }
    }

    /// Checks that slot occupancy and tile states describe the same placement.
    pub fn is_consistent(&self) -> bool {
        let placed = self
            .tiles
            .iter()
            .filter(|tile| !tile.state.is_available())
            .count();
        let tiles_agree = self.tiles.iter().all(|tile| match tile.placed_slot() {
            None => true,
            Some(slot) => self
                .slot(slot)
                .is_some_and(|slot| slot.occupant == Some(tile.id)),
        });
        let slots_agree = self.slots.iter().all(|slot| match slot.occupant {
            None => true,
            Some(tile) => self
                .tile(tile)
                .is_some_and(|tile| tile.state == TileState::Placed(slot.id)),
        });

        self.slots.len() == self.word.len()
            && placed == self.filled_count()
            && tiles_agree
            && slots_agree
    }

    fn validate_tile(&self, tile: TileId) -> Result<()> {
        if tile.to_index() < self.tiles.len() {
            Ok(())
        } else {
            Err(GameError::UnknownTile)
        }
    }

    fn validate_slot(&self, slot: SlotId) -> Result<()> {
        if slot.to_index() < self.slots.len() {
            Ok(())
        } else {
            Err(GameError::UnknownSlot)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    /// Round over a fixed pool: the word letters in order followed by `decoys`.
    fn round(word: &str, decoys: &str) -> Round {
        let word = Word::parse(word).unwrap();
        let word_tiles = word.letters().iter().map(|&l| (l, TileOrigin::WordLetter));
        let decoy_tiles = decoys
            .chars()
            .map(|c| (Letter::new(c).unwrap(), TileOrigin::Decoy));
        let tiles = word_tiles
            .chain(decoy_tiles)
            .enumerate()
            .map(|(i, (letter, origin))| LetterTile::new(TileId(i as u16), letter, origin))
            .collect();
        Round::from_tiles(word, tiles, ScoreSchedule::default()).unwrap()
    }

    /// Places the tiles at `tile_ids` into slots `0..`.
    fn spell(round: &mut Round, tile_ids: &[u16]) -> MoveOutcome {
        let mut last = MoveOutcome::NoChange;
        for (slot, &tile) in tile_ids.iter().enumerate() {
            last = round.place_tile(TileId(tile), SlotId(slot as u16)).unwrap();
        }
        last
    }

    #[test]
    fn spelling_the_word_solves_with_full_score() {
        let mut round = round("crab", "DSBQ");

        let outcome = spell(&mut round, &[0, 1, 2, 3]);

        assert_eq!(outcome, MoveOutcome::Solved { score: 40 });
        assert_eq!(round.state(), RoundState::Solved { score: 40 });
        assert_eq!(round.score(), Some(score_for_hints_used(4, 0)));
        assert!(round.take_events().ends_with(&[
            RoundEvent::Placed {
                tile: TileId(3),
                slot: SlotId(3)
            },
            RoundEvent::RoundSuccess { score: 40 },
        ]));
    }

    #[test]
    fn decoy_with_same_letter_counts_as_correct() {
        let mut round = round("crab", "B");

        assert_eq!(
            spell(&mut round, &[0, 1, 2, 4]),
            MoveOutcome::Solved { score: 40 }
        );
    }

    #[test]
    fn wrong_order_is_rejected_and_resets() {
        let mut round = round("crab", "XYZ");
        let pool_before: Vec<_> = round.tiles().iter().map(|t| (t.id, t.letter)).collect();

        let outcome = spell(&mut round, &[0, 1, 3, 2]);

        assert_eq!(outcome, MoveOutcome::Rejected);
        assert!(!round.is_solved());
        assert_eq!(round.failed_attempts(), 1);
        assert!(round.slots().iter().all(|slot| !slot.is_filled()));
        assert!(round.tiles().iter().all(|tile| tile.state.is_available()));
        let pool_after: Vec<_> = round.tiles().iter().map(|t| (t.id, t.letter)).collect();
        assert_eq!(pool_before, pool_after);
        assert_eq!(round.take_events().last(), Some(&RoundEvent::RoundFailed));
    }

    #[test]
    fn placing_twice_is_a_no_op() {
        let mut round = round("eel", "AB");
        round.place_tile(TileId(0), SlotId(0)).unwrap();
        let snapshot = round.clone();

        let outcome = round.place_tile(TileId(0), SlotId(0)).unwrap();

        assert_eq!(outcome, MoveOutcome::NoChange);
        assert_eq!(round, snapshot);
    }

    #[test]
    fn filled_slot_keeps_its_occupant() {
        let mut round = round("eel", "AB");
        round.place_tile(TileId(3), SlotId(0)).unwrap();

        let outcome = round.place_tile(TileId(0), SlotId(0)).unwrap();

        assert_eq!(outcome, MoveOutcome::NoChange);
        assert_eq!(round.slot(SlotId(0)).unwrap().occupant, Some(TileId(3)));
        assert!(round.tile(TileId(0)).unwrap().state.is_available());
        assert!(round.is_consistent());
    }

    #[test]
    fn placed_tile_cannot_move_without_removal() {
        let mut round = round("eel", "AB");
        round.place_tile(TileId(0), SlotId(0)).unwrap();

        assert_eq!(
            round.place_tile(TileId(0), SlotId(1)).unwrap(),
            MoveOutcome::NoChange
        );
        assert!(!round.slot(SlotId(1)).unwrap().is_filled());
    }

    #[test]
    fn remove_returns_tile_to_pool() {
        let mut round = round("eel", "AB");
        round.place_tile(TileId(4), SlotId(2)).unwrap();

        assert_eq!(round.remove_tile(SlotId(2)).unwrap(), MoveOutcome::Changed);
        assert_eq!(round.remove_tile(SlotId(2)).unwrap(), MoveOutcome::NoChange);
        assert!(round.tile(TileId(4)).unwrap().state.is_available());
        assert_eq!(
            round.take_events(),
            vec![
                RoundEvent::Placed {
                    tile: TileId(4),
                    slot: SlotId(2)
                },
                RoundEvent::Removed {
                    tile: TileId(4),
                    slot: SlotId(2)
                },
            ]
        );
    }

    #[test]
    fn reset_restores_availability_and_keeps_pool() {
        let mut round = round("shark", "MNOP");
        round.place_tile(TileId(7), SlotId(0)).unwrap();
        round.place_tile(TileId(1), SlotId(1)).unwrap();
        let pool_before: Vec<_> = round.tiles().iter().map(|t| (t.id, t.letter)).collect();

        assert_eq!(round.reset(), MoveOutcome::Changed);

        assert!(round.tiles().iter().all(|tile| tile.state.is_available()));
        assert!(round.slots().iter().all(|slot| !slot.is_filled()));
        let pool_after: Vec<_> = round.tiles().iter().map(|t| (t.id, t.letter)).collect();
        assert_eq!(pool_before, pool_after);
        assert_eq!(round.reset(), MoveOutcome::NoChange);
    }

    #[test]
    fn validate_is_idempotent_after_success() {
        let mut round = round("ray", "");
        spell(&mut round, &[0, 1, 2]);
        round.take_events();

        assert_eq!(round.validate(), Verdict::AlreadySolved);
        assert_eq!(round.submit(), Verdict::AlreadySolved);
        assert_eq!(round.score(), Some(30));
        assert!(round.take_events().is_empty());
    }

    #[test]
    fn solved_round_ignores_further_moves() {
        let mut round = round("ray", "Q");
        spell(&mut round, &[0, 1, 2]);
        let snapshot = round.clone();

        assert_eq!(round.remove_tile(SlotId(0)).unwrap(), MoveOutcome::NoChange);
        assert_eq!(round.reset(), MoveOutcome::NoChange);
        assert_eq!(round.use_hint(), HintOutcome::NoEmptySlot);
        assert_eq!(round, snapshot);
    }

    #[test]
    fn submit_on_incomplete_word_changes_nothing() {
        let mut round = round("crab", "");
        round.place_tile(TileId(0), SlotId(0)).unwrap();

        assert_eq!(round.submit(), Verdict::Incomplete);
        assert_eq!(round.filled_count(), 1);
        assert_eq!(round.failed_attempts(), 0);
    }

    #[test]
    fn refilling_a_cleared_slot_completes_the_word() {
        let mut round = round("crab", "");
        spell(&mut round, &[0, 1, 2]);
        round.remove_tile(SlotId(1)).unwrap();
        round.place_tile(TileId(3), SlotId(3)).unwrap();
        assert_eq!(round.guess(), "C_AB");
        round.place_tile(TileId(1), SlotId(1)).unwrap();
        assert!(round.is_solved());
    }

    #[test]
    fn hints_fill_first_empty_slot_and_reduce_score() {
        let mut round = round("crab", "RAXY");
        round.place_tile(TileId(0), SlotId(0)).unwrap();

        let first = round.use_hint();
        assert_eq!(
            first,
            HintOutcome::Filled {
                slot: SlotId(1),
                tile: TileId(1),
                outcome: MoveOutcome::Changed
            }
        );
        round.use_hint();
        assert_eq!(round.guess(), "CRA_");
        assert_eq!(round.hints_used(), 2);

        let outcome = round.place_tile(TileId(3), SlotId(3)).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Solved {
                score: score_for_hints_used(4, 2)
            }
        );
    }

    #[test]
    fn completing_hint_validates() {
        let mut round = round("ray", "");
        round.place_tile(TileId(0), SlotId(0)).unwrap();
        round.place_tile(TileId(1), SlotId(1)).unwrap();

        let outcome = round.use_hint();

        assert_eq!(
            outcome,
            HintOutcome::Filled {
                slot: SlotId(2),
                tile: TileId(2),
                outcome: MoveOutcome::Solved { score: 15 }
            }
        );
        let events = round.take_events();
        assert!(events.contains(&RoundEvent::HintUsed {
            slot: SlotId(2),
            letter: Letter::new('Y').unwrap()
        }));
    }

    #[test]
    fn hint_without_available_tile_is_reported() {
        let mut round = round("crab", "");
        // the only C sits in the wrong slot
        round.place_tile(TileId(0), SlotId(1)).unwrap();

        assert_eq!(round.use_hint(), HintOutcome::NoMatchingTile);
        assert_eq!(round.hints_used(), 0);
        assert!(round.is_consistent());
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut round = round("cod", "");
        assert_eq!(
            round.place_tile(TileId(3), SlotId(0)),
            Err(GameError::UnknownTile)
        );
        assert_eq!(
            round.place_tile(TileId(0), SlotId(3)),
            Err(GameError::UnknownSlot)
        );
        assert_eq!(round.remove_tile(SlotId(9)), Err(GameError::UnknownSlot));
    }

    #[test]
    fn from_tiles_rejects_pool_missing_letters() {
        let word = Word::parse("eel").unwrap();
        let tiles = "ELX"
            .chars()
            .enumerate()
            .map(|(i, c)| LetterTile::new(TileId(i as u16), Letter::new(c).unwrap(), TileOrigin::Decoy))
            .collect();
        assert_eq!(
            Round::from_tiles(word, tiles, ScoreSchedule::default()),
            Err(GameError::InvalidPool)
        );
    }

    #[test]
    fn random_input_keeps_slots_and_tiles_in_sync() {
        use rand::prelude::*;

        let config = RoundConfig::default();
        for seed in 0..20 {
            let word = Word::parse("octopus").unwrap();
            let mut round = Round::new(word, &config, seed);
            let mut rng = SmallRng::seed_from_u64(seed);
            let tiles = round.tiles().len() as u16;
            let slots = round.slots().len() as u16;

            for _ in 0..500 {
                match rng.random_range(0..10) {
                    0..=5 => {
                        let tile = TileId(rng.random_range(0..tiles));
                        let slot = SlotId(rng.random_range(0..slots));
                        round.place_tile(tile, slot).unwrap();
                    }
                    6..=7 => {
                        round.remove_tile(SlotId(rng.random_range(0..slots))).unwrap();
                    }
                    8 => {
                        round.use_hint();
                    }
                    _ => {
                        round.reset();
                    }
                }
                assert!(round.is_consistent());
                if round.is_solved() {
                    break;
                }
            }
        }
    }

    #[test]
    fn round_survives_serialization_without_events() {
        let mut round = round("kelp", "AB");
        round.place_tile(TileId(0), SlotId(0)).unwrap();

        let json = serde_json::to_string(&round).unwrap();
        let restored: Round = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.guess(), "K___");
        assert!(restored.is_consistent());
        assert!(restored.clone().take_events().is_empty());
    }

    #[test]
    fn restoring_rejects_dangling_occupant() {
        let round = round("crab", "XY");
        let json = serde_json::to_string(&round)
            .unwrap()
            .replacen(r#""occupant":null"#, r#""occupant":99"#, 1);

        let restored = serde_json::from_str::<Round>(&json);

        assert!(restored.is_err());
    }

    #[test]
    fn restoring_rejects_slots_for_another_word() {
        let round = round("crab", "BS");
        let json = serde_json::to_string(&round)
            .unwrap()
            .replace(r#""word":"CRAB""#, r#""word":"CRABS""#);

        assert!(serde_json::from_str::<Round>(&json).is_err());
    }

    #[test]
    fn restoring_rejects_solved_state_on_empty_board() {
        let round = round("ray", "");
        let json = serde_json::to_string(&round)
            .unwrap()
            .replace(r#""state":"InProgress""#, r#""state":{"Solved":{"score":30}}"#);

        assert!(serde_json::from_str::<Round>(&json).is_err());
    }

    #[test]
    fn restoring_keeps_solved_round() {
        let mut round = round("ray", "Q");
        spell(&mut round, &[0, 1, 2]);

        let json = serde_json::to_string(&round).unwrap();
        let restored: Round = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.score(), Some(30));
        assert_eq!(restored.guess(), "RAY");
    }
}
