use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub round: RoundConfig,
    pub difficulty: Difficulty,
    /// Session ends after this many rounds, `None` plays forever.
    pub max_rounds: Option<u32>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionProgress {
    NextRound,
    Finished,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub rounds_played: u32,
    pub solved: u32,
    pub skipped: u32,
    pub hints_used: u32,
    pub total_score: u64,
}

/// Sequence of rounds with aggregate progress.
///
/// The session never touches round internals: the UI plays the current round through [`GameSession::round_mut`]
/// and then asks the session to advance or skip. Each round is derived from the session seed and round number, so a
/// serialized session resumes with the same words and pools.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    config: SessionConfig,
    bank: WordBank,
    seed: u64,
    round_number: u32,
    round: Round,
    summary: SessionSummary,
    finished: bool,
}

impl GameSession {
    /// Fails with [`GameError::NoRounds`] for a round limit of zero.
    pub fn new(config: SessionConfig, bank: WordBank, seed: u64) -> Result<Self> {
        if config.max_rounds == Some(0) {
            return Err(GameError::NoRounds);
        }
        let round = start_round(&config, &bank, seed, 0, None)?;
        Ok(Self {
            config,
            bank,
            seed,
            round_number: 0,
            round,
            summary: Default::default(),
            finished: false,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn round_mut(&mut self) -> &mut Round {
        &mut self.round
    }

    /// 1-based number of the current round.
    pub fn round_number(&self) -> u32 {
        self.round_number + 1
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// Takes effect from the next round.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Banks the solved round's score and starts the next one.
    pub fn advance(&mut self) -> Result<SessionProgress> {
        self.check_not_finished()?;
        let Some(score) = self.round.score() else {
            return Err(GameError::RoundInProgress);
        };

        self.summary.solved += 1;
        self.summary.total_score += u64::from(score);
        self.next_round()
    }

    /// Abandons the current round. A solved round is banked as with [`GameSession::advance`].
    pub fn skip(&mut self) -> Result<SessionProgress> {
        self.check_not_finished()?;
        if self.round.is_solved() {
            return self.advance();
        }

        log::debug!("Skipping {}", self.round.word());
        self.summary.skipped += 1;
        self.next_round()
    }

    /// Ends the session, the current round is left unscored.
    pub fn quit(&mut self) -> SessionSummary {
        if !self.finished {
            self.close_round();
            self.finished = true;
        }
        self.summary
    }

    fn next_round(&mut self) -> Result<SessionProgress> {
        self.close_round();

        let next = self.round_number + 1;
        if self.config.max_rounds.is_some_and(|max| next >= max) {
            log::info!("Session finished after {} rounds", self.summary.rounds_played);
            self.finished = true;
            return Ok(SessionProgress::Finished);
        }

        self.round = start_round(
            &self.config,
            &self.bank,
            self.seed,
            next,
            Some(self.round.word()),
        )?;
        self.round_number = next;
        Ok(SessionProgress::NextRound)
    }

    fn close_round(&mut self) {
        self.summary.rounds_played += 1;
        self.summary.hints_used += self.round.hints_used();
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.finished {
            Err(GameError::SessionOver)
        } else {
            Ok(())
        }
    }
}

fn start_round(
    config: &SessionConfig,
    bank: &WordBank,
    seed: u64,
    round_number: u32,
    previous: Option<&Word>,
) -> Result<Round> {
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(u64::from(round_number)));
    let word = bank.pick(config.difficulty, &mut rng, previous)?;
    Ok(Round::new(word, &config.round, rng.random()))
}
