//
// lib.rs
// textsync
//
// Library entry that re-exports modules so the `check` binary and any
// external users can access CLI parsing, marker matching, and the
// comparison engine.
//
// Public crate interface: re-export modules used by the binary and tests.
pub mod cli;
pub mod engine;
pub mod error;
pub mod marker;
pub mod utils;

pub use cli::{build_config, Args};
pub use engine::{check, Config};
pub use error::{CheckError, Result};
pub use marker::Marker;
