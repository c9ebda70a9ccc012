use std::rc::Rc;

use rand::Rng;

use crate::engine::{ScoreTracker, VerbSelector};
use crate::error::ConfigurationError;
use crate::session::machine::SessionPhase;
use crate::words::VerbRecord;

/// Everything one play-through needs. Only the state machine mutates it.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub(super) selector: VerbSelector,
    pub(super) score: ScoreTracker,
    pub(super) current: Option<Rc<VerbRecord>>,
    pub(super) phase: SessionPhase,
}

impl SessionState {
    pub(super) fn new<R: Rng + ?Sized>(
        all_verbs: &[Rc<VerbRecord>],
        max_game: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            selector: VerbSelector::new(all_verbs, max_game, rng)?,
            score: ScoreTracker::new(),
            current: None,
            phase: SessionPhase::Presentation,
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn current_verb(&self) -> Option<&Rc<VerbRecord>> {
        self.current.as_ref()
    }

    pub fn remaining_count(&self) -> usize {
        self.selector.remaining_count()
    }

    pub fn used_count(&self) -> usize {
        self.selector.used_count()
    }

    pub fn max_game(&self) -> usize {
        self.selector.max_game()
    }
}
