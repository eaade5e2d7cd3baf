use rand::distr::weighted::WeightedIndex;
use rand::prelude::*;

use super::*;

const NEAR_OFFSETS: [i8; 4] = [-2, -1, 1, 2];

/// Generation strategy that keeps every word letter and fills the rest with decoys drawn according to a
/// [`DecoyPolicy`], then shuffles the lot.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomPoolGenerator {
    seed: u64,
    policy: DecoyPolicy,
}

impl RandomPoolGenerator {
    pub fn new(seed: u64, policy: DecoyPolicy) -> Self {
        Self { seed, policy }
    }
}

impl PoolGenerator for RandomPoolGenerator {
    fn generate(self, word: &Word, pool_size: usize) -> Vec<LetterTile> {
        let pool_size = effective_pool_size(word, pool_size);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut counts = LetterCounts::default();
        let mut letters: Vec<(Letter, TileOrigin)> = Vec::with_capacity(pool_size);

        for &letter in word.letters() {
            counts.add(letter);
            letters.push((letter, TileOrigin::WordLetter));
        }

        let tiers = WeightedIndex::new(DecoyTier::ALL.map(|tier| self.policy.weight(tier))).ok();
        if tiers.is_none() && letters.len() < pool_size {
            log::warn!("Decoy policy has no usable weights, using uniform decoys");
        }

        let picker = DecoyPicker {
            policy: &self.policy,
            word,
        };
        while letters.len() < pool_size {
            let tier = match &tiers {
                Some(dist) => DecoyTier::ALL[dist.sample(&mut rng)],
                None => DecoyTier::Uniform,
            };
            let letter = picker
                .draw(tier, &counts, &mut rng)
                .unwrap_or_else(|| {
                    log::trace!("Decoy tier {:?} came up empty, using basic letters", tier);
                    picker.fallback(&counts, &mut rng)
                });
            counts.add(letter);
            letters.push((letter, TileOrigin::Decoy));
        }

        letters.shuffle(&mut rng);

        letters
            .into_iter()
            .enumerate()
            .map(|(i, (letter, origin))| LetterTile::new(TileId(i as u16), letter, origin))
            .collect()
    }
}

#[derive(Debug, Default)]
struct LetterCounts([usize; ALPHABET_LEN as usize]);

impl LetterCounts {
    fn add(&mut self, letter: Letter) {
        self.0[usize::from(letter.index())] += 1;
    }

    fn get(&self, letter: Letter) -> usize {
        self.0[usize::from(letter.index())]
    }
}

struct DecoyPicker<'a> {
    policy: &'a DecoyPolicy,
    word: &'a Word,
}

impl DecoyPicker<'_> {
    fn has_room(&self, counts: &LetterCounts, letter: Letter) -> bool {
        counts.get(letter) < self.policy.repeat_limit(self.word, letter)
    }

    fn draw<R: Rng + ?Sized>(
        &self,
        tier: DecoyTier,
        counts: &LetterCounts,
        rng: &mut R,
    ) -> Option<Letter> {
        let candidate = match tier {
            DecoyTier::WordRepeat => {
                let mut repeatable: Vec<Letter> = Vec::with_capacity(self.word.len());
                for &letter in self.word.letters() {
                    if !repeatable.contains(&letter) && self.has_room(counts, letter) {
                        repeatable.push(letter);
                    }
                }
                repeatable.choose(rng).copied()?
            }
            DecoyTier::NearAlphabet => {
                let anchor = *self.word.letters().choose(rng)?;
                let delta = *NEAR_OFFSETS.choose(rng)?;
                anchor.offset(delta)?
            }
            DecoyTier::Common => *COMMON_LETTERS.choose(rng)?,
            DecoyTier::Uniform => Letter::from_index(rng.random_range(0..ALPHABET_LEN))?,
        };

        self.has_room(counts, candidate).then_some(candidate)
    }

    fn fallback<R: Rng + ?Sized>(&self, counts: &LetterCounts, rng: &mut R) -> Letter {
        let basic: Vec<Letter> = BASIC_LETTERS
            .into_iter()
            .filter(|&letter| self.has_room(counts, letter))
            .collect();
        if let Some(&letter) = basic.choose(rng) {
            return letter;
        }

        let any: Vec<Letter> = Letter::all()
            .filter(|&letter| self.has_room(counts, letter))
            .collect();
        if let Some(&letter) = any.choose(rng) {
            return letter;
        }

        // every letter is at its cap, the pool is larger than the caps allow
        Letter::from_index(rng.random_range(0..ALPHABET_LEN)).unwrap_or(Letter::A)
    }
}
