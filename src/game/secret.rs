//! Where a game's secret comes from

use crate::core::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Draws the secret for each new game
pub trait SecretSource {
    /// Pick a secret from `answers`, or `None` if there is nothing to pick
    fn draw(&mut self, answers: &[Word]) -> Option<Word>;
}

impl<T: SecretSource + ?Sized> SecretSource for Box<T> {
    fn draw(&mut self, answers: &[Word]) -> Option<Word> {
        (**self).draw(answers)
    }
}

/// Uniform random draw from the answer list
#[derive(Debug, Clone)]
pub struct RandomSecret {
    rng: StdRng,
}

impl RandomSecret {
    /// Seed from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of secrets
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SecretSource for RandomSecret {
    fn draw(&mut self, answers: &[Word]) -> Option<Word> {
        answers.choose(&mut self.rng).cloned()
    }
}

/// The same secret every game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSecret(pub Word);

impl SecretSource for FixedSecret {
    fn draw(&mut self, answers: &[Word]) -> Option<Word> {
        (!answers.is_empty()).then(|| self.0.clone())
    }
}
