//! Snapshot-based acceptance harness.
//!
//! Fixtures are configuration files in a directory. Each one is paired with
//! a JSON snapshot of the attributes its resources should have once
//! applied. The harness runs in one of two modes, selected by
//! `TF_TEST_RECORD`:
//!
//! - **replay** (default): apply each fixture and check the resulting state
//!   against its snapshot; `"set()"` only asserts a non-empty value
//! - **record**: apply, destroy and re-apply each fixture, rewriting its
//!   snapshot from what was observed
//!
//! The system under test is reached through a [`Driver`].
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use attrgen_acceptance::{Driver, RunMode, State, discover_fixtures, plan, run};
//!
//! struct Noop;
//!
//! impl Driver for Noop {
//!     type Error = std::io::Error;
//!
//!     fn apply(&mut self, _config: &str) -> Result<State, Self::Error> {
//!         Ok(State::new())
//!     }
//!
//!     fn destroy(&mut self, _config: &str) -> Result<State, Self::Error> {
//!         Ok(State::new())
//!     }
//! }
//!
//! let fixtures = discover_fixtures(Path::new("tests/fixtures"))?;
//! let steps = plan(&fixtures, RunMode::from_env()?)?;
//! run(&mut Noop, &steps)?;
//! # Ok::<(), attrgen_acceptance::HarnessError>(())
//! ```

pub mod check;
pub mod errors;
pub mod fixture;
pub mod mode;
pub mod snapshot;
pub mod steps;

pub use check::{Check, checks, verify_all};
pub use errors::HarnessError;
pub use fixture::{Fixture, discover_fixtures};
pub use mode::{RECORD_ENV, RunMode};
pub use snapshot::{PRESENT_ONLY, Snapshot, State};
pub use steps::{Action, Driver, Step, plan, run};
