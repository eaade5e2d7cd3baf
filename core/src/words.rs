use alloc::vec::Vec;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Word list shipped with the game, ocean and jungle themed.
pub const BUILTIN_WORDS: &[&str] = &[
    // easy
    "bear", "clam", "crab", "duck", "fish", "frog", "kelp", "lion", "reef", "sand", "seal", "ship",
    "tree", "tusk", "vine", "wave",
    // medium
    "anchor", "coral", "jaguar", "jungle", "lizard", "monkey", "otter", "parrot", "shark", "snake",
    "sponge", "squid", "tiger", "turtle", "whale",
    // hard
    "anemone", "chameleon", "crocodile", "dolphin", "elephant", "gorilla", "jellyfish", "lobster",
    "octopus", "penguin", "rainforest", "seahorse", "starfish",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Bucket a word falls into, by length.
    pub fn for_word(word: &Word) -> Self {
        match word.len() {
            0..=4 => Self::Easy,
            5..=6 => Self::Medium,
            _ => Self::Hard,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    const fn bucket(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

/// Words grouped by [`Difficulty`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WordBank {
    buckets: [Vec<Word>; 3],
}

impl WordBank {
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_WORDS.iter().copied())
    }

    /// Builds a bank from raw lines. Blank lines and `#` comments are ignored, invalid words are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bank = Self::default();
        for line in words {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match Word::parse(line) {
                Ok(word) => bank.insert(word),
                Err(err) => log::warn!("Skipping word list entry {:?}: {}", line, err),
            }
        }
        bank
    }

    /// Adds `word` to its bucket unless already present.
    pub fn insert(&mut self, word: Word) {
        let bucket = &mut self.buckets[Difficulty::for_word(&word).bucket()];
        if !bucket.contains(&word) {
            bucket.push(word);
        }
    }

    pub fn words(&self, difficulty: Difficulty) -> &[Word] {
        &self.buckets[difficulty.bucket()]
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Random word of the given difficulty, avoiding `previous` whenever the bucket has anything else.
    pub fn pick<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        rng: &mut R,
        previous: Option<&Word>,
    ) -> Result<Word> {
        let words = self.words(difficulty);
        let fresh: Vec<&Word> = words
            .iter()
            .filter(|&word| Some(word) != previous)
            .collect();
        let picked = match fresh.choose(rng) {
            Some(&word) => word,
            None => words.choose(rng).ok_or(GameError::NoWords(difficulty))?,
        };
        Ok(picked.clone())
    }
}
