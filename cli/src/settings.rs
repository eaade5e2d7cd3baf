use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use letterdrop_core::{Difficulty, SessionConfig, WordBank};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of the optional TOML settings file.
///
/// ```toml
/// seed = 42
/// words = "words.txt"
///
/// [game]
/// difficulty = "medium"
/// max_rounds = 10
///
/// [game.round]
/// pool_size = 15
///
/// [game.round.scoring]
/// per_letter = 10
/// tiers = [100, 50, 25]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    pub seed: Option<u64>,
    pub words: Option<PathBuf>,
    pub game: SessionConfig,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// Command line values that take precedence over the settings file.
#[derive(Args, Debug, Default)]
pub(crate) struct Overrides {
    /// Word list file, one word per line
    #[arg(short, long)]
    pub words: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub difficulty: Option<DifficultyArg>,
    /// Stop after this many rounds
    #[arg(short, long)]
    pub rounds: Option<u32>,
    /// Number of letter tiles offered per round
    #[arg(long)]
    pub pool_size: Option<usize>,
    /// Seed for word and tile selection, random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid settings in {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(words) = &overrides.words {
            self.words = Some(words.clone());
        }
        if let Some(difficulty) = overrides.difficulty {
            self.game.difficulty = difficulty.into();
        }
        if let Some(rounds) = overrides.rounds {
            self.game.max_rounds = Some(rounds);
        }
        if let Some(pool_size) = overrides.pool_size {
            self.game.round.pool_size = pool_size;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
    }

    pub fn word_bank(&self) -> Result<WordBank> {
        let Some(path) = &self.words else {
            return Ok(WordBank::builtin());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read word list {}", path.display()))?;
        let bank = WordBank::from_words(text.lines());
        log::info!("Loaded {} words from {}", bank.len(), path.display());
        anyhow::ensure!(!bank.is_empty(), "word list {} has no usable words", path.display());
        Ok(bank)
    }
}
