use std::time::Instant;

use anyhow::Result;

use verbdrill::config::Config;
use verbdrill::session::{Countdown, DisplayRequest, SessionEvent, SessionStateMachine, Step};
use verbdrill::words::WordList;

use crate::ui::components::quiz_card::AnswerField;
use crate::ui::text_field::TextField;
use crate::ui::theme::Theme;

/// Front-end state around one quiz session: the page on screen, the answer
/// fields and the countdown for the current verb.
pub struct App {
    pub session: SessionStateMachine,
    pub page: DisplayRequest,
    pub preterite: TextField,
    pub perfect: TextField,
    pub focus: AnswerField,
    pub countdown: Countdown,
    pub config: Config,
    pub theme: &'static Theme,
    pub source: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, words: &WordList, theme: &'static Theme) -> Result<Self> {
        let session = SessionStateMachine::from_entropy(words.verbs(), config.questions)?;
        let page = session.display();
        Ok(Self {
            session,
            page,
            preterite: TextField::new(),
            perfect: TextField::new(),
            focus: AnswerField::Preterite,
            countdown: Countdown::new(config.time_limit()),
            config,
            theme,
            source: words.source().to_string(),
            should_quit: false,
        })
    }

    pub fn dispatch(&mut self, event: SessionEvent) {
        self.dispatch_at(event, Instant::now());
    }

    /// Feed one event to the session and switch to whatever page it asks for.
    /// Rejected events are logged and otherwise ignored.
    pub fn dispatch_at(&mut self, event: SessionEvent, now: Instant) {
        match self.session.handle(event) {
            Ok(Step::Show(request)) => self.show(request, now),
            Ok(Step::Exit) => self.should_quit = true,
            Err(e) => log::warn!("ignored event: {e}"),
        }
    }

    pub fn submit_answers(&mut self) {
        self.submit_answers_at(Instant::now());
    }

    /// An answer that arrives after the deadline is a timeout, whether or not
    /// a tick has fired since.
    pub fn submit_answers_at(&mut self, now: Instant) {
        if self.countdown.poll(now) {
            return self.dispatch_at(SessionEvent::Timeout, now);
        }
        let event = SessionEvent::Submit {
            preterite: self.preterite.value().to_string(),
            perfect: self.perfect.value().to_string(),
        };
        self.dispatch_at(event, now);
    }

    /// Fire the time-out once the countdown for the current verb runs out.
    pub fn tick(&mut self, now: Instant) {
        if self.countdown.poll(now) {
            self.dispatch_at(SessionEvent::Timeout, now);
        }
    }

    pub fn switch_field(&mut self) {
        self.focus = self.focus.other();
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            AnswerField::Preterite => &mut self.preterite,
            AnswerField::Perfect => &mut self.perfect,
        }
    }

    fn show(&mut self, request: DisplayRequest, now: Instant) {
        if let DisplayRequest::Game { .. } = request {
            self.preterite.clear();
            self.perfect.clear();
            self.focus = AnswerField::Preterite;
            self.countdown.arm(now);
        } else {
            self.countdown.cancel();
        }
        self.page = request;
    }
}
