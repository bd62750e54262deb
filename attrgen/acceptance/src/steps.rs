//! Step planning and execution.
//!
//! In replay mode every fixture becomes one [`Step::Check`]. In record
//! mode every fixture that applies cleanly becomes three steps:
//!
//! 1. apply and record the observed state
//! 2. destroy and record again
//! 3. apply once more and record, marking values that changed since the
//!    previous recording as present-only
//!
//! The third pass is what turns generated identifiers and timestamps into
//! `"set()"` entries.

use std::path::PathBuf;

use regex::Regex;
use tracing::debug;

use crate::check::{Check, checks, verify_all};
use crate::errors::HarnessError;
use crate::fixture::Fixture;
use crate::mode::RunMode;
use crate::snapshot::{Snapshot, State};

/// The live system under test.
pub trait Driver {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Applies `config` and reports the resulting state.
    fn apply(&mut self, config: &str) -> Result<State, Self::Error>;

    /// Destroys what `config` created and reports the state observed just
    /// before destruction.
    fn destroy(&mut self, config: &str) -> Result<State, Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Apply,
    Destroy,
}

#[derive(Debug, Clone)]
pub enum Step {
    /// Apply and check the result against a saved snapshot.
    Check {
        config: String,
        expect_error: Option<Regex>,
        checks: Vec<Check>,
    },
    /// Run `action` and save the observed state.
    Record {
        action: Action,
        config: String,
        snapshot_path: PathBuf,
    },
    /// Apply and save the observed state diffed against the saved snapshot.
    DiffRecord {
        config: String,
        snapshot_path: PathBuf,
    },
}

/// Turns fixtures into steps for `mode`.
///
/// Replay mode reads each fixture's snapshot up front, so a malformed
/// snapshot fails here rather than mid-run.
pub fn plan(fixtures: &[Fixture], mode: RunMode) -> Result<Vec<Step>, HarnessError> {
    let mut steps = Vec::new();
    for fixture in fixtures {
        match mode {
            RunMode::Replay => {
                let snapshot = Snapshot::load(&fixture.snapshot_path)?;
                steps.push(Step::Check {
                    config: fixture.config.clone(),
                    expect_error: fixture.expect_error.clone(),
                    checks: checks(&snapshot),
                });
            }
            RunMode::Record => {
                if fixture.expect_error.is_some() {
                    debug!(fixture = %fixture.config_path.display(), "skipping error fixture");
                    continue;
                }
                let record = |action| Step::Record {
                    action,
                    config: fixture.config.clone(),
                    snapshot_path: fixture.snapshot_path.clone(),
                };
                steps.push(record(Action::Apply));
                steps.push(record(Action::Destroy));
                steps.push(Step::DiffRecord {
                    config: fixture.config.clone(),
                    snapshot_path: fixture.snapshot_path.clone(),
                });
            }
        }
    }
    Ok(steps)
}

/// Executes `steps` in order, stopping at the first failure.
pub fn run<D: Driver>(driver: &mut D, steps: &[Step]) -> Result<(), HarnessError> {
    for (index, step) in steps.iter().enumerate() {
        debug!(step = index, "running step");
        match step {
            Step::Check {
                config,
                expect_error,
                checks,
            } => run_check(driver, config, expect_error.as_ref(), checks)?,
            Step::Record {
                action,
                config,
                snapshot_path,
            } => {
                let state = match action {
                    Action::Apply => driver.apply(config),
                    Action::Destroy => driver.destroy(config),
                }
                .map_err(driver_error)?;
                Snapshot::from_state(&state).save(snapshot_path)?;
            }
            Step::DiffRecord {
                config,
                snapshot_path,
            } => {
                let state = driver.apply(config).map_err(driver_error)?;
                let old = Snapshot::load(snapshot_path)?;
                Snapshot::diff(&old, &state).save(snapshot_path)?;
            }
        }
    }
    Ok(())
}

fn run_check<D: Driver>(
    driver: &mut D,
    config: &str,
    expect_error: Option<&Regex>,
    checks: &[Check],
) -> Result<(), HarnessError> {
    match (driver.apply(config), expect_error) {
        (Ok(state), None) => verify_all(checks, &state),
        (Err(e), None) => Err(driver_error(e)),
        (Ok(_), Some(pattern)) => Err(HarnessError::MissingError {
            pattern: pattern.to_string(),
        }),
        (Err(e), Some(pattern)) => {
            let message = e.to_string();
            if pattern.is_match(&message) {
                debug!(%message, "got expected error");
                Ok(())
            } else {
                Err(HarnessError::UnexpectedError {
                    pattern: pattern.to_string(),
                    message,
                })
            }
        }
    }
}

fn driver_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> HarnessError {
    HarnessError::Driver(Box::new(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    struct Failing;

    impl Driver for Failing {
        type Error = std::io::Error;

        fn apply(&mut self, _config: &str) -> Result<State, Self::Error> {
            Err(std::io::Error::other("connection refused"))
        }

        fn destroy(&mut self, _config: &str) -> Result<State, Self::Error> {
            Ok(State::new())
        }
    }

    fn fixture(name: &str, expect_error: Option<&str>) -> Fixture {
        Fixture {
            config_path: PathBuf::from(format!("fixtures/{name}.tf")),
            snapshot_path: PathBuf::from(format!("fixtures/{name}.json")),
            config: format!("resource \"kv\" \"{name}\" {{}}"),
            expect_error: expect_error.map(|p| Regex::new(p).unwrap()),
        }
    }

    #[test]
    fn replay_plans_one_check_per_fixture() {
        let fixtures = [fixture("a", None), fixture("b", Some("invalid"))];

        let steps = plan(&fixtures, RunMode::Replay).unwrap();

        assert_eq!(steps.len(), 2);
        assert!(matches!(&steps[0], Step::Check { expect_error: None, checks, .. } if checks.is_empty()));
        assert!(matches!(&steps[1], Step::Check { expect_error: Some(_), .. }));
    }

    #[test]
    fn record_plans_three_steps_and_skips_error_fixtures() {
        let fixtures = [fixture("a", None), fixture("b", Some("invalid"))];

        let steps = plan(&fixtures, RunMode::Record).unwrap();

        assert_eq!(steps.len(), 3);
        assert!(matches!(&steps[0], Step::Record { action: Action::Apply, .. }));
        assert!(matches!(&steps[1], Step::Record { action: Action::Destroy, .. }));
        assert!(matches!(&steps[2], Step::DiffRecord { snapshot_path, .. }
            if snapshot_path == &PathBuf::from("fixtures/a.json")));
    }

    #[test]
    #[traced_test]
    fn driver_failure_stops_the_run() {
        let steps = plan(&[fixture("a", None), fixture("b", None)], RunMode::Replay).unwrap();

        let err = run(&mut Failing, &steps).unwrap_err();

        assert!(matches!(err, HarnessError::Driver(_)));
        assert!(err.to_string().contains("connection refused"));
        assert!(logs_contain("running step"));
    }
}
