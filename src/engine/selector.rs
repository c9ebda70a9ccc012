use std::rc::Rc;

use rand::Rng;
use rand::seq::index;

use crate::error::ConfigurationError;
use crate::words::VerbRecord;

/// Serves a fixed random subset of the word list, one verb at a time,
/// without repeats.
#[derive(Clone, Debug)]
pub struct VerbSelector {
    remaining: Vec<Rc<VerbRecord>>,
    used: Vec<Rc<VerbRecord>>,
    max_game: usize,
}

impl VerbSelector {
    /// Sample `max_game` distinct entries of `all_verbs`. The sample is fixed
    /// for the lifetime of the selector.
    pub fn new<R: Rng + ?Sized>(
        all_verbs: &[Rc<VerbRecord>],
        max_game: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigurationError> {
        if max_game == 0 {
            return Err(ConfigurationError::NonPositiveSize);
        }
        if max_game > all_verbs.len() {
            return Err(ConfigurationError::SizeExceedsWordList {
                requested: max_game,
                available: all_verbs.len(),
            });
        }

        let remaining = index::sample(rng, all_verbs.len(), max_game)
            .into_iter()
            .map(|i| Rc::clone(&all_verbs[i]))
            .collect();

        Ok(Self {
            remaining,
            used: Vec::with_capacity(max_game),
            max_game,
        })
    }

    /// Take the next verb from the end of the pool. `None` once every sampled
    /// verb has been served.
    pub fn next_verb(&mut self) -> Option<Rc<VerbRecord>> {
        let verb = self.remaining.pop()?;
        self.used.push(Rc::clone(&verb));
        Some(verb)
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    pub fn max_game(&self) -> usize {
        self.max_game
    }

}
