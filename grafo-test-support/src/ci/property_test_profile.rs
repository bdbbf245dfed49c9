//! Environment-driven knobs shared by grafo's property suites.
//!
//! `PROPTEST_CASES` scales every suite, `GRAFO_PBT_FORK` runs cases in
//! subprocesses, and `GRAFO_PBT_CONCURRENCY_REPS` sets how many rayon workers
//! the concurrent read-only analysis property fans out to.

use std::{env, str::FromStr};

/// Environment variable overriding the number of cases per property.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable enabling forked proptest execution.
pub const GRAFO_PBT_FORK_ENV_KEY: &str = "GRAFO_PBT_FORK";
/// Environment variable overriding the concurrent-analysis repetition count.
pub const GRAFO_PBT_CONCURRENCY_REPS_ENV_KEY: &str = "GRAFO_PBT_CONCURRENCY_REPS";

/// Repetitions used by the concurrency property when no override is set.
pub const DEFAULT_CONCURRENCY_REPETITIONS: usize = 8;

/// Run settings for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyTestProfile {
    cases: u32,
    fork: bool,
    concurrency_repetitions: usize,
}

impl PropertyTestProfile {
    /// Reads the profile from the environment.
    ///
    /// `default_cases` applies when `PROPTEST_CASES` is unset. Forking is off
    /// and the concurrency property runs
    /// [`DEFAULT_CONCURRENCY_REPETITIONS`] times unless overridden. An
    /// override that does not parse, or is zero, logs a warning and is
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use grafo_test_support::ci::property_test_profile::PropertyTestProfile;
    ///
    /// let profile = PropertyTestProfile::load(64);
    /// assert!(profile.cases() > 0);
    /// assert!(profile.concurrency_repetitions() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        Self {
            cases: positive_override(PROPTEST_CASES_ENV_KEY).unwrap_or(default_cases),
            fork: switch_override(GRAFO_PBT_FORK_ENV_KEY).unwrap_or(false),
            concurrency_repetitions: positive_override(GRAFO_PBT_CONCURRENCY_REPS_ENV_KEY)
                .unwrap_or(DEFAULT_CONCURRENCY_REPETITIONS),
        }
    }

    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    #[must_use]
    #[rustfmt::skip]
    pub fn fork(&self) -> bool { self.fork }

    /// Parallel repetitions per input for the concurrent analysis property.
    #[must_use]
    #[rustfmt::skip]
    pub fn concurrency_repetitions(&self) -> usize { self.concurrency_repetitions }
}

fn ignored(key: &'static str, raw: &str, reason: &str) {
    tracing::warn!(env = key, raw, reason, "ignoring property-test override");
}

fn positive_override<T>(key: &'static str) -> Option<T>
where
    T: FromStr + Default + PartialEq,
{
    let raw = env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) if value != T::default() => Some(value),
        Ok(_) => {
            ignored(key, &raw, "must be greater than zero");
            None
        }
        Err(_) => {
            ignored(key, &raw, "not an unsigned integer");
            None
        }
    }
}

fn switch_override(key: &'static str) -> Option<bool> {
    let raw = env::var(key).ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            ignored(key, &raw, "not a boolean switch");
            None
        }
    }
}
