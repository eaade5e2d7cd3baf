use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Number of letters in the playable alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Longest word a round accepts.
pub const MAX_WORD_LEN: usize = 32;

/// Single uppercase ASCII letter, `A` through `Z`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    pub const A: Letter = Letter(b'A');
    pub const Z: Letter = Letter(b'Z');

    /// Accepts either case, stores uppercase.
    pub const fn new(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self((c as u8).to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Letter at `index` in the alphabet, `0` being `A`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Self(b'A' + index))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0 - b'A'
    }

    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Moves `delta` positions along the alphabet, `None` when that leaves `A..=Z`.
    pub fn offset(self, delta: i8) -> Option<Self> {
        let index = self.index().checked_add_signed(delta)?;
        Self::from_index(index)
    }

    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN).map(|i| Self(b'A' + i))
    }
}

impl TryFrom<char> for Letter {
    type Error = GameError;

    fn try_from(c: char) -> Result<Self> {
        Self::new(c).ok_or(GameError::InvalidLetter(c))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Target word of a round, never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(Vec<Letter>);

impl Word {
    pub fn parse(text: &str) -> Result<Self> {
        let letters = text
            .chars()
            .map(Letter::try_from)
            .collect::<Result<Vec<_>>>()?;
        if letters.is_empty() {
            return Err(GameError::EmptyWord);
        }
        if letters.len() > MAX_WORD_LEN {
            return Err(GameError::WordTooLong);
        }
        Ok(Self(letters))
    }

    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// How many times `letter` occurs in the word.
    pub fn count_of(&self, letter: Letter) -> usize {
        self.0.iter().filter(|&&l| l == letter).count()
    }

    /// Case-insensitive comparison against an arbitrary guess.
    pub fn matches<I: IntoIterator<Item = Letter>>(&self, guess: I) -> bool {
        self.0.iter().copied().eq(guess)
    }
}

impl TryFrom<String> for Word {
    type Error = GameError;

    fn try_from(text: String) -> Result<Self> {
        Self::parse(&text)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0.into_iter().map(Letter::as_char).collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|letter| write!(f, "{letter}"))
    }
}

/// Identifies a tile within one round's pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u16);

/// Identifies a blank slot within one round, equal to its position in the word.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId(pub u16);

pub trait ToIndex {
    fn to_index(self) -> usize;
}

impl ToIndex for TileId {
    fn to_index(self) -> usize {
        self.0.into()
    }
}

impl ToIndex for SlotId {
    fn to_index(self) -> usize {
        self.0.into()
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_{}", self.0)
    }
}
