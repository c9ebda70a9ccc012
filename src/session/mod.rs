pub mod machine;
pub mod state;
pub mod timer;

pub use machine::{DisplayRequest, SessionEvent, SessionPhase, SessionStateMachine, Step};
pub use state::SessionState;
pub use timer::Countdown;
