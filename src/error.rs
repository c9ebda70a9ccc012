use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::session::machine::SessionPhase;

/// Invalid construction parameters. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("session size must be at least 1")]
    NonPositiveSize,
    #[error("session size {requested} exceeds the {available} verbs in the word list")]
    SizeExceedsWordList { requested: usize, available: usize },
    #[error("word list {0} is not a .txt file")]
    BadWordListPath(PathBuf),
    #[error("bundled word list {0} is missing")]
    MissingBundledList(String),
}

/// Why a single word-list line could not be turned into a verb record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected 6 tokens, found {0}")]
    TokenCount(usize),
    #[error("{0:?} is not a German infinitive")]
    NotInfinitive(String),
    #[error("auxiliary {0:?} is neither \"hat\" nor \"ist\"")]
    BadAuxiliary(String),
    #[error("level {0:?} is not one of A1, A2, B1, B2, C1, C2")]
    BadLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Rejected candidate entry for the word-list append command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("data length is incorrect: {0}")]
    WrongFieldCount(String),
    #[error("{0:?} and its tenses are already in the word list")]
    DuplicateVerb(String),
    #[error("first field {0:?} is not a German infinitive")]
    NotInfinitive(String),
    #[error("auxiliary in {0:?} is incorrect")]
    BadAuxiliary(String),
    #[error("level {0:?} is incorrect")]
    BadLevel(String),
}

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to access word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigurationError),
    #[error("{path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no verb left to start the session with")]
    EmptySession,
    #[error("event {event} is not accepted on the {phase:?} page")]
    InvalidTransition {
        phase: SessionPhase,
        event: &'static str,
    },
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
