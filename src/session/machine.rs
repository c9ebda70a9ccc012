use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::engine::Grade;
use crate::error::{ConfigurationError, SessionError};
use crate::session::state::SessionState;
use crate::words::VerbRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Presentation,
    Game,
    Success,
    Failed,
    Conclusion,
}

/// Inbound events from the front end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Start,
    Submit { preterite: String, perfect: String },
    Next,
    /// The time limit ran out; treated as a wrong answer.
    Timeout,
    Quit,
    Reset,
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::Start => "start",
            SessionEvent::Submit { .. } => "submit",
            SessionEvent::Next => "next",
            SessionEvent::Timeout => "timeout",
            SessionEvent::Quit => "quit",
            SessionEvent::Reset => "reset",
        }
    }
}

/// What the front end should render. Each variant carries exactly the data
/// its page needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayRequest {
    Presentation,
    Game {
        infinitive: String,
        remaining: usize,
        score: u32,
    },
    Success {
        verb: Rc<VerbRecord>,
    },
    Failed {
        verb: Rc<VerbRecord>,
    },
    Conclusion {
        score: u32,
        grade: Grade,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Show(DisplayRequest),
    Exit,
}

pub struct SessionStateMachine<R: Rng = SmallRng> {
    all_verbs: Vec<Rc<VerbRecord>>,
    max_game: usize,
    rng: R,
    state: SessionState,
}

impl SessionStateMachine<SmallRng> {
    pub fn from_entropy(
        all_verbs: &[Rc<VerbRecord>],
        max_game: usize,
    ) -> Result<Self, ConfigurationError> {
        Self::new(all_verbs, max_game, SmallRng::from_entropy())
    }
}

impl<R: Rng> SessionStateMachine<R> {
    pub fn new(
        all_verbs: &[Rc<VerbRecord>],
        max_game: usize,
        mut rng: R,
    ) -> Result<Self, ConfigurationError> {
        let state = SessionState::new(all_verbs, max_game, &mut rng)?;
        log::info!("new session: {max_game} of {} verbs", all_verbs.len());
        Ok(Self {
            all_verbs: all_verbs.to_vec(),
            max_game,
            rng,
            state,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn max_game(&self) -> usize {
        self.max_game
    }

    /// The page for the current phase.
    pub fn display(&self) -> DisplayRequest {
        let score = self.state.score.score();
        match (self.state.phase, &self.state.current) {
            (SessionPhase::Game, Some(verb)) => DisplayRequest::Game {
                infinitive: verb.infinitive.clone(),
                remaining: self.state.selector.remaining_count(),
                score,
            },
            (SessionPhase::Success, Some(verb)) => DisplayRequest::Success {
                verb: Rc::clone(verb),
            },
            (SessionPhase::Failed, Some(verb)) => DisplayRequest::Failed {
                verb: Rc::clone(verb),
            },
            (SessionPhase::Conclusion, _) => DisplayRequest::Conclusion {
                score,
                grade: Grade::for_score(score),
            },
            _ => DisplayRequest::Presentation,
        }
    }

    /// Apply one event. Rejected events leave the session untouched.
    pub fn handle(&mut self, event: SessionEvent) -> Result<Step, SessionError> {
        let from = self.state.phase;
        match (from, event) {
            (_, SessionEvent::Quit) => {
                log::info!("quit requested on {from:?} page");
                return Ok(Step::Exit);
            }
            (_, SessionEvent::Reset) => self.reset()?,
            (SessionPhase::Presentation, SessionEvent::Start) => {
                let verb = self
                    .state
                    .selector
                    .next_verb()
                    .ok_or(SessionError::EmptySession)?;
                self.state.current = Some(verb);
                self.state.phase = SessionPhase::Game;
            }
            (SessionPhase::Game, SessionEvent::Submit { preterite, perfect }) => {
                self.resolve(&preterite, &perfect);
            }
            (SessionPhase::Game, SessionEvent::Timeout) => {
                log::info!("time limit expired");
                self.state.phase = SessionPhase::Failed;
            }
            (SessionPhase::Success | SessionPhase::Failed, SessionEvent::Next) => {
                match self.state.selector.next_verb() {
                    Some(verb) => {
                        self.state.current = Some(verb);
                        self.state.phase = SessionPhase::Game;
                    }
                    None => {
                        self.state.current = None;
                        self.state.phase = SessionPhase::Conclusion;
                        log::info!(
                            "session finished with {}/{}",
                            self.state.score.score(),
                            self.max_game
                        );
                    }
                }
            }
            (phase, event) => {
                return Err(SessionError::InvalidTransition {
                    phase,
                    event: event.name(),
                });
            }
        }
        log::debug!("{from:?} -> {:?}", self.state.phase);
        Ok(Step::Show(self.display()))
    }

    pub fn start(&mut self) -> Result<Step, SessionError> {
        self.handle(SessionEvent::Start)
    }

    pub fn submit(&mut self, preterite: &str, perfect: &str) -> Result<Step, SessionError> {
        self.handle(SessionEvent::Submit {
            preterite: preterite.to_string(),
            perfect: perfect.to_string(),
        })
    }

    pub fn next(&mut self) -> Result<Step, SessionError> {
        self.handle(SessionEvent::Next)
    }

    pub fn timeout(&mut self) -> Result<Step, SessionError> {
        self.handle(SessionEvent::Timeout)
    }

    /// Replace the whole session with a freshly sampled one. The new state is
    /// built before it is swapped in, so a failure leaves the old one intact.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        let fresh = SessionState::new(&self.all_verbs, self.max_game, &mut self.rng)?;
        self.state = fresh;
        log::info!("session reset: {} verbs drawn", self.max_game);
        Ok(())
    }

    fn resolve(&mut self, preterite: &str, perfect: &str) {
        let correct = self
            .state
            .current
            .as_ref()
            .is_some_and(|verb| verb.matches(preterite, perfect));
        if correct {
            self.state.score.increment();
            self.state.phase = SessionPhase::Success;
        } else {
            self.state.phase = SessionPhase::Failed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::{WordList, WordSource};

    const LIST: &str = "\
gehen geht ging ist gegangen A1
lesen liest las hat gelesen A1
fahren fährt fuhr ist gefahren A2
helfen hilft half hat geholfen A1
";

    fn verbs() -> Vec<Rc<VerbRecord>> {
        WordList::parse(WordSource::Bundled("test".into()), LIST)
            .unwrap()
            .verbs()
            .to_vec()
    }

    fn machine(max_game: usize, seed: u64) -> SessionStateMachine {
        SessionStateMachine::new(&verbs(), max_game, SmallRng::seed_from_u64(seed)).unwrap()
    }

    fn current(m: &SessionStateMachine) -> Rc<VerbRecord> {
        Rc::clone(m.state().current_verb().unwrap())
    }

    #[test]
    fn starts_on_presentation() {
        let m = machine(3, 1);
        assert_eq!(m.phase(), SessionPhase::Presentation);
        assert_eq!(m.display(), DisplayRequest::Presentation);
        assert_eq!(m.state().score(), 0);
        assert_eq!(m.state().remaining_count(), 3);
    }

    #[test]
    fn rejects_bad_configuration() {
        assert!(matches!(
            SessionStateMachine::new(&verbs(), 0, SmallRng::seed_from_u64(1)),
            Err(ConfigurationError::NonPositiveSize)
        ));
        assert!(matches!(
            SessionStateMachine::new(&verbs(), 5, SmallRng::seed_from_u64(1)),
            Err(ConfigurationError::SizeExceedsWordList { .. })
        ));
    }

    #[test]
    fn start_shows_first_verb() {
        let mut m = machine(3, 2);
        let step = m.start().unwrap();
        let verb = current(&m);
        assert_eq!(
            step,
            Step::Show(DisplayRequest::Game {
                infinitive: verb.infinitive.clone(),
                remaining: 2,
                score: 0,
            })
        );
        assert_eq!(m.phase(), SessionPhase::Game);
    }

    #[test]
    fn exact_answer_succeeds_and_scores() {
        let mut m = machine(3, 3);
        m.start().unwrap();
        let verb = current(&m);
        let step = m.submit(&verb.preterite, &verb.perfect).unwrap();
        assert_eq!(
            step,
            Step::Show(DisplayRequest::Success {
                verb: Rc::clone(&verb)
            })
        );
        assert_eq!(m.state().score(), 1);
    }

    #[test]
    fn any_mismatch_fails_without_scoring() {
        let mut m = machine(4, 4);
        m.start().unwrap();
        for attempt in 0..4 {
            let verb = current(&m);
            let (preterite, perfect) = match attempt {
                0 => (format!("{} ", verb.preterite), verb.perfect.clone()),
                1 => (verb.preterite.clone(), format!("{} ", verb.perfect)),
                2 => (verb.preterite.to_uppercase(), verb.perfect.clone()),
                _ => (verb.preterite.clone(), String::new()),
            };
            let step = m.submit(&preterite, &perfect).unwrap();
            assert_eq!(step, Step::Show(DisplayRequest::Failed { verb }));
            assert_eq!(m.state().score(), 0);
            m.next().unwrap();
        }
        assert_eq!(m.phase(), SessionPhase::Conclusion);
    }

    #[test]
    fn timeout_counts_as_a_miss() {
        let mut m = machine(2, 5);
        m.start().unwrap();
        let verb = current(&m);
        let step = m.timeout().unwrap();
        assert_eq!(step, Step::Show(DisplayRequest::Failed { verb }));
        assert_eq!(m.state().score(), 0);
    }

    #[test]
    fn last_verb_leads_to_conclusion() {
        let mut m = machine(2, 6);
        m.start().unwrap();
        m.timeout().unwrap();
        assert!(matches!(
            m.next().unwrap(),
            Step::Show(DisplayRequest::Game { remaining: 0, .. })
        ));
        let verb = current(&m);
        m.submit(&verb.preterite, &verb.perfect).unwrap();
        assert_eq!(m.state().used_count(), 2);
        assert_eq!(
            m.next().unwrap(),
            Step::Show(DisplayRequest::Conclusion {
                score: 1,
                grade: Grade::Alien,
            })
        );
        assert_eq!(m.phase(), SessionPhase::Conclusion);
        assert!(m.state().current_verb().is_none());
    }

    #[test]
    fn invalid_events_are_rejected_without_side_effects() {
        let mut m = machine(2, 7);
        assert_eq!(
            m.next(),
            Err(SessionError::InvalidTransition {
                phase: SessionPhase::Presentation,
                event: "next",
            })
        );
        assert!(m.submit("a", "b").is_err());
        assert!(m.timeout().is_err());
        assert_eq!(m.state().remaining_count(), 2);

        m.start().unwrap();
        assert!(m.start().is_err());
        assert!(m.next().is_err());

        m.timeout().unwrap();
        assert!(m.timeout().is_err());
        assert!(m.submit("a", "b").is_err());
        assert_eq!(m.phase(), SessionPhase::Failed);
    }

    #[test]
    fn conclusion_only_accepts_quit_and_reset() {
        let mut m = machine(1, 8);
        m.start().unwrap();
        m.timeout().unwrap();
        m.next().unwrap();
        assert_eq!(m.phase(), SessionPhase::Conclusion);
        for event in [
            SessionEvent::Start,
            SessionEvent::Next,
            SessionEvent::Timeout,
            SessionEvent::Submit {
                preterite: String::new(),
                perfect: String::new(),
            },
        ] {
            assert!(m.handle(event).is_err());
        }
        assert_eq!(m.handle(SessionEvent::Quit), Ok(Step::Exit));
    }

    #[test]
    fn reset_from_every_phase_gives_fresh_session() {
        let drive: [fn(&mut SessionStateMachine); 5] = [
            |_| {},
            |m| {
                m.start().unwrap();
            },
            |m| {
                m.start().unwrap();
                let v = current(m);
                m.submit(&v.preterite, &v.perfect).unwrap();
            },
            |m| {
                m.start().unwrap();
                m.timeout().unwrap();
            },
            |m| {
                m.start().unwrap();
                for _ in 0..3 {
                    let v = current(m);
                    m.submit(&v.preterite, &v.perfect).unwrap();
                    m.next().unwrap();
                }
            },
        ];
        for (seed, setup) in drive.into_iter().enumerate() {
            let mut m = machine(3, seed as u64);
            setup(&mut m);
            let step = m.handle(SessionEvent::Reset).unwrap();
            assert_eq!(step, Step::Show(DisplayRequest::Presentation));
            assert_eq!(m.phase(), SessionPhase::Presentation);
            assert_eq!(m.state().score(), 0);
            assert_eq!(m.state().remaining_count(), 3);
            assert_eq!(m.state().used_count(), 0);
            assert!(m.state().current_verb().is_none());
        }
    }

    fn play_out(m: &mut SessionStateMachine) -> Vec<String> {
        m.start().unwrap();
        let mut drawn = Vec::new();
        while m.phase() != SessionPhase::Conclusion {
            drawn.push(current(m).infinitive.clone());
            m.timeout().unwrap();
            m.next().unwrap();
        }
        drawn
    }

    #[test]
    fn reset_draws_a_new_sample() {
        let content: String = (0..50)
            .map(|i| format!("v{i}en v{i}t v{i}te hat gev{i}t B1\n"))
            .collect();
        let list = WordList::parse(WordSource::Bundled("generated".into()), &content).unwrap();
        let mut m =
            SessionStateMachine::new(list.verbs(), 5, SmallRng::seed_from_u64(21)).unwrap();

        let before = play_out(&mut m);
        assert_eq!(before.len(), 5);

        let mut changed = false;
        for _ in 0..5 {
            m.reset().unwrap();
            let after = play_out(&mut m);
            assert_eq!(after.len(), 5);
            changed |= after != before;
        }
        assert!(changed, "every reset replayed {before:?}");
    }

    #[test]
    fn quit_is_accepted_everywhere() {
        let mut m = machine(2, 9);
        assert_eq!(m.handle(SessionEvent::Quit), Ok(Step::Exit));
        m.start().unwrap();
        assert_eq!(m.handle(SessionEvent::Quit), Ok(Step::Exit));
        assert_eq!(m.phase(), SessionPhase::Game);
    }
}
