// Library target holds the quiz core so the binary, integration tests and
// benchmarks share one module tree. Terminal code lives with the binary.

pub mod config;
pub mod engine;
pub mod error;
pub mod session;
pub mod words;
