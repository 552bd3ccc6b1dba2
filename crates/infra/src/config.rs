use std::str::FromStr;
use tracing::{info, warn};

const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_REMINDER_COUNT_JOB_INTERVAL_SECS: u64 = 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. When missing the in-memory
    /// repositories are used instead.
    pub database_url: Option<String>,
    /// Size of the Postgres connection pool
    pub database_max_connections: u32,
    /// How often the job reconciling the cached reminder counts
    /// of `Person`s runs.
    pub reminder_count_job_interval_secs: u64,
}

impl Config {
    pub fn new() -> Self {
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => Some(url),
            _ => {
                info!("Did not find DATABASE_URL environment variable. Going to use in-memory storage.");
                None
            }
        };
        let database_max_connections =
            parse_env_or("DATABASE_MAX_CONNECTIONS", DEFAULT_DATABASE_MAX_CONNECTIONS);
        let reminder_count_job_interval_secs = parse_env_or(
            "REMINDER_COUNT_JOB_INTERVAL_SECS",
            DEFAULT_REMINDER_COUNT_JOB_INTERVAL_SECS,
        );

        Self {
            database_url,
            database_max_connections,
            reminder_count_job_interval_secs,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_env_or<T: FromStr + std::fmt::Display + Copy>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(value) => parse_or(key, &value, default),
        Err(_) => default,
    }
}

fn parse_or<T: FromStr + std::fmt::Display + Copy>(key: &str, value: &str, default: T) -> T {
    match value.trim().parse::<T>() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(
                "The given {}: {} is not valid, falling back to the default: {}.",
                key, value, default
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_on_invalid_values() {
        assert_eq!(parse_or("PORT", "8080", 5000_u32), 8080);
        assert_eq!(parse_or("PORT", " 42 ", 5000_u32), 42);
        assert_eq!(parse_or("PORT", "abc", 5000_u32), 5000);
        assert_eq!(parse_or("PORT", "-1", 5000_u64), 5000);
    }
}
