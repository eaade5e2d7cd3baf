use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Hint penalty schedule.
///
/// A solved word is worth `per_letter * word_len` points, scaled by the percentage in `tiers[hints_used]`. Hint
/// counts past the end of `tiers` use the last tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScoreSchedule")]
pub struct ScoreSchedule {
    per_letter: u32,
    tiers: Vec<u8>,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawScoreSchedule {
    per_letter: u32,
    tiers: Vec<u8>,
}

impl Default for RawScoreSchedule {
    fn default() -> Self {
        let ScoreSchedule { per_letter, tiers } = ScoreSchedule::default();
        Self { per_letter, tiers }
    }
}

impl TryFrom<RawScoreSchedule> for ScoreSchedule {
    type Error = GameError;

    fn try_from(raw: RawScoreSchedule) -> Result<Self> {
        Self::new(raw.per_letter, raw.tiers)
    }
}

impl ScoreSchedule {
    pub fn new(per_letter: u32, tiers: Vec<u8>) -> Result<Self> {
        let non_increasing = tiers.windows(2).all(|pair| pair[0] >= pair[1]);
        let in_range = tiers.iter().all(|&pct| pct <= 100);
        if tiers.is_empty() || !non_increasing || !in_range {
            return Err(GameError::InvalidScoreTiers);
        }
        Ok(Self { per_letter, tiers })
    }

    pub fn per_letter(&self) -> u32 {
        self.per_letter
    }

    pub fn tiers(&self) -> &[u8] {
        &self.tiers
    }

    /// Points for solving a `word_len` letter word after `hints_used` hints.
    pub fn score_for_hints_used(&self, word_len: usize, hints_used: u32) -> u32 {
        let tier = usize::try_from(hints_used)
            .unwrap_or(usize::MAX)
            .min(self.tiers.len() - 1);
        let full = self
            .per_letter
            .saturating_mul(u32::try_from(word_len).unwrap_or(u32::MAX));
        let pct = u32::from(self.tiers[tier]);
        // full * pct can overflow u32
        (u64::from(full) * u64::from(pct) / 100) as u32
    }
}

impl Default for ScoreSchedule {
    fn default() -> Self {
        Self {
            per_letter: 10,
            tiers: vec![100, 50, 25],
        }
    }
}

/// [`ScoreSchedule::score_for_hints_used`] with the default schedule.
pub fn score_for_hints_used(word_len: usize, hints_used: u32) -> u32 {
    ScoreSchedule::default().score_for_hints_used(word_len, hints_used)
}
