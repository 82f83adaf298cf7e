//! Environment overrides for property-test runs.
//!
//! CI raises the case count for nightly sweeps and can isolate each case in a
//! forked process; local runs keep the per-suite defaults.

use std::env;

use thiserror::Error;

/// Case count override, shared with proptest's own variable name.
pub const CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Fork override for suites that need per-case process isolation.
pub const FORK_ENV_KEY: &str = "WINDROW_PBT_FORK";

/// Why an override was ignored.
#[derive(Debug, Error, PartialEq, Eq)]
enum OverrideError {
    #[error("not a positive integer")]
    Cases,
    #[error("expected one of true/false, 1/0, yes/no, on/off")]
    Flag,
}

/// Resolved settings for a property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the overrides, falling back to the given defaults for any
    /// variable that is unset or malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use windrow_test_support::proptest_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: resolve(CASES_ENV_KEY, default_cases, parse_cases),
            fork: resolve(FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn resolve<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, OverrideError>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(
            env = key,
            raw = %raw,
            %error,
            "ignoring property-test override"
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|&cases| cases > 0)
        .ok_or(OverrideError::Cases)
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::Flag),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, PoisonError};

    use rstest::rstest;

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Sets or clears one variable for the guard's lifetime.
    struct ScopedVar {
        key: &'static str,
        previous: Option<String>,
    }

    impl ScopedVar {
        fn new(key: &'static str, value: Option<&str>) -> Self {
            let previous = env::var(key).ok();
            apply(key, value);
            Self { key, previous }
        }
    }

    impl Drop for ScopedVar {
        fn drop(&mut self) {
            apply(self.key, self.previous.as_deref());
        }
    }

    fn apply(key: &str, value: Option<&str>) {
        // SAFETY: every test touching the environment holds ENV_LOCK.
        unsafe {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }

    fn load_with(
        cases: Option<&str>,
        fork: Option<&str>,
        default_fork: bool,
    ) -> ProptestRunProfile {
        let _lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let _cases = ScopedVar::new(CASES_ENV_KEY, cases);
        let _fork = ScopedVar::new(FORK_ENV_KEY, fork);
        ProptestRunProfile::load(48, default_fork)
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let profile = load_with(None, None, false);
        assert_eq!(profile, ProptestRunProfile { cases: 48, fork: false });
    }

    #[rstest]
    #[case::single("1", 1)]
    #[case::padded(" 512 ", 512)]
    #[case::zero("0", 48)]
    #[case::negative("-3", 48)]
    #[case::word("many", 48)]
    fn case_overrides(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(load_with(Some(raw), None, false).cases(), expected);
    }

    #[rstest]
    #[case("yes", false, true)]
    #[case("ON", false, true)]
    #[case("0", true, false)]
    #[case("False", true, false)]
    #[case("sometimes", true, true)]
    #[case("", false, false)]
    fn fork_overrides(#[case] raw: &str, #[case] default: bool, #[case] expected: bool) {
        assert_eq!(load_with(None, Some(raw), default).fork(), expected);
    }
}
