//! Runtime settings read from the environment.

use std::path::PathBuf;
use std::time::Duration;

use roster_utils::pagination::DEFAULT_WINDOW_RADIUS;
use roster_utils::parse::PAGE_SIZE_OPTIONS;

use crate::error::ConfigError;

/// How rendered views are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Initial rows per page for every table.
    pub page_size: usize,
    /// Pages shown on each side of the current page.
    pub window_radius: usize,
    /// Artificial latency added by the sample store to every fetch.
    pub fetch_latency: Duration,
    /// Upper bound on a single fetch; `None` waits forever.
    pub fetch_timeout: Option<Duration>,
    pub sample_users: usize,
    pub sample_test_series: usize,
    /// Directory holding `users.json` and `test_series.json`; replaces the
    /// generated sample records when set.
    pub fixture_dir: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: 10,
            window_radius: DEFAULT_WINDOW_RADIUS,
            fetch_latency: Duration::ZERO,
            fetch_timeout: None,
            sample_users: 47,
            sample_test_series: 23,
            fixture_dir: None,
            output: OutputFormat::Text,
        }
    }
}

impl Settings {
    /// Read settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let page_size = parse_or("ROSTER_PAGE_SIZE", &lookup, defaults.page_size)?;
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            return Err(ConfigError::UnsupportedPageSize(page_size));
        }

        let window_radius = parse_or("ROSTER_WINDOW_RADIUS", &lookup, defaults.window_radius)?;
        let latency_ms = parse_or("ROSTER_FETCH_LATENCY_MS", &lookup, 0_u64)?;
        let timeout_ms = parse_or("ROSTER_FETCH_TIMEOUT_MS", &lookup, 0_u64)?;
        let sample_users = parse_or("ROSTER_SAMPLE_USERS", &lookup, defaults.sample_users)?;
        let sample_test_series = parse_or(
            "ROSTER_SAMPLE_TEST_SERIES",
            &lookup,
            defaults.sample_test_series,
        )?;

        let fixture_dir = lookup("ROSTER_FIXTURE_DIR")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let output = match lookup("ROSTER_OUTPUT") {
            None => defaults.output,
            Some(raw) if raw.eq_ignore_ascii_case("text") => OutputFormat::Text,
            Some(raw) if raw.eq_ignore_ascii_case("json") => OutputFormat::Json,
            Some(raw) => {
                return Err(ConfigError::InvalidValue {
                    key: "ROSTER_OUTPUT",
                    value: raw,
                });
            }
        };

        Ok(Self {
            page_size,
            window_radius,
            fetch_latency: Duration::from_millis(latency_ms),
            fetch_timeout: (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms)),
            sample_users,
            sample_test_series,
            fixture_dir,
            output,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[])).expect("defaults");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.window_radius, 2);
    }

    #[test]
    fn values_are_parsed() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("ROSTER_PAGE_SIZE", "20"),
            ("ROSTER_WINDOW_RADIUS", "1"),
            ("ROSTER_FETCH_LATENCY_MS", "250"),
            ("ROSTER_FETCH_TIMEOUT_MS", "2000"),
            ("ROSTER_OUTPUT", "JSON"),
            ("ROSTER_FIXTURE_DIR", " /srv/roster "),
        ]))
        .expect("valid settings");
        assert_eq!(settings.fixture_dir, Some(PathBuf::from("/srv/roster")));
        assert_eq!(settings.page_size, 20);
        assert_eq!(settings.window_radius, 1);
        assert_eq!(settings.fetch_latency, Duration::from_millis(250));
        assert_eq!(settings.fetch_timeout, Some(Duration::from_secs(2)));
        assert_eq!(settings.output, OutputFormat::Json);
    }

    #[test]
    fn unsupported_page_size_is_rejected() {
        let err = Settings::from_lookup(lookup_from(&[("ROSTER_PAGE_SIZE", "7")]))
            .expect_err("7 is not offered");
        assert_eq!(err, ConfigError::UnsupportedPageSize(7));
    }

    #[test]
    fn garbage_values_name_their_key() {
        let err = Settings::from_lookup(lookup_from(&[("ROSTER_WINDOW_RADIUS", "-1")]))
            .expect_err("negative radius");
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "ROSTER_WINDOW_RADIUS",
                value: "-1".to_owned(),
            }
        );
    }
}
