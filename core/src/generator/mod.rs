use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

/// Pool size used when nothing else is configured.
pub const DEFAULT_POOL_SIZE: usize = 15;

/// Upper bound on pool size so tile ids stay small.
pub const MAX_POOL_SIZE: usize = 256;

/// High-frequency English letters, used for plausible-looking decoys.
pub const COMMON_LETTERS: [Letter; 10] = letters(*b"ETAOINSRHL");

/// Last-resort decoy set when a tier cannot produce a letter.
pub const BASIC_LETTERS: [Letter; 10] = letters(*b"AEIOUSTRNL");

const fn letters<const N: usize>(ascii: [u8; N]) -> [Letter; N] {
    let mut out = [Letter::A; N];
    let mut i = 0;
    while i < N {
        out[i] = match Letter::new(ascii[i] as char) {
            Some(letter) => letter,
            None => panic!("not an ASCII letter"),
        };
        i += 1;
    }
    out
}

pub trait PoolGenerator {
    /// Produces exactly `max(pool_size, word.len())` tiles (bounded by [`MAX_POOL_SIZE`]) covering every
    /// letter of `word`.
    fn generate(self, word: &Word, pool_size: usize) -> Vec<LetterTile>;
}

/// Where a decoy letter is drawn from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecoyTier {
    /// Another copy of a letter already in the word.
    WordRepeat,
    /// A letter one or two places away from a word letter, e.g. `B`/`D` around `C`.
    NearAlphabet,
    /// One of [`COMMON_LETTERS`].
    Common,
    /// Any letter.
    Uniform,
}

impl DecoyTier {
    pub const ALL: [DecoyTier; 4] = [
        Self::WordRepeat,
        Self::NearAlphabet,
        Self::Common,
        Self::Uniform,
    ];
}

/// Relative weights of each [`DecoyTier`] and the repeat cap applied to decoys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoyPolicy {
    pub word_repeat: u32,
    pub near_alphabet: u32,
    pub common: u32,
    pub uniform: u32,
    /// Decoys never push a letter above this many copies, word letters are exempt.
    pub max_repeats: u8,
}

impl DecoyPolicy {
    pub const fn weight(&self, tier: DecoyTier) -> u32 {
        match tier {
            DecoyTier::WordRepeat => self.word_repeat,
            DecoyTier::NearAlphabet => self.near_alphabet,
            DecoyTier::Common => self.common,
            DecoyTier::Uniform => self.uniform,
        }
    }

    /// How many tiles of `letter` the pool may hold for `word`.
    pub fn repeat_limit(&self, word: &Word, letter: Letter) -> usize {
        usize::from(self.max_repeats).max(word.count_of(letter))
    }
}

impl Default for DecoyPolicy {
    fn default() -> Self {
        Self {
            word_repeat: 30,
            near_alphabet: 35,
            common: 25,
            uniform: 10,
            max_repeats: 3,
        }
    }
}

/// Pool size actually produced for `word` when `requested` tiles are asked for.
pub fn effective_pool_size(word: &Word, requested: usize) -> usize {
    if requested < word.len() {
        log::warn!(
            "Pool size {} too small for a {} letter word, expanding",
            requested,
            word.len()
        );
        word.len()
    } else if requested > MAX_POOL_SIZE {
        log::warn!(
            "Pool size {} exceeds the maximum, clamping to {}",
            requested,
            MAX_POOL_SIZE
        );
        MAX_POOL_SIZE
    } else {
        requested
    }
}
