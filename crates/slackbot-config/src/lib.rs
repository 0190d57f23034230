//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, ConfigError};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// Slack options.
    pub slack: ApiSlackConfig,
}

#[derive(Debug, Clone)]
pub struct ApiSlackConfig {
    /// Slack API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// Slack Web API root URL.
    pub root_url: String,
    /// Slack bot token.
    pub bot_token: String,
}

#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Sentry URL.
    pub url: String,
    /// Traces sample rate (between 0 and 1) for Sentry
    pub traces_sample_rate: f32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
    /// Slack signing secret.
    pub signing_secret: String,
    /// Disable webhook signature verification.
    pub disable_webhook_signature: bool,
    /// Accepted clock drift for request timestamps (in seconds).
    pub signature_tolerance: u64,
    /// Maximum webhook body size (in bytes).
    pub max_body_size: usize,
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot name.
    pub name: String,
    /// API options.
    pub api: ApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Sentry options.
    pub sentry: SentryConfig,
    /// Server options.
    pub server: ServerConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, ConfigError> {
        Ok(Config {
            name: env_to_str("BOT_NAME", "slackbot"),
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("BOT_API_DRIVER", "slack"))?,
                slack: ApiSlackConfig {
                    connect_timeout: env_to_u64("BOT_API_SLACK_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("BOT_API_SLACK_ROOT_URL", "https://slack.com/api"),
                    bot_token: env_to_str("SLACK_BOT_TOKEN", ""),
                },
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("BOT_LOGGING_USE_BUNYAN", false),
            },
            sentry: SentryConfig {
                url: env_to_str("BOT_SENTRY_URL", ""),
                traces_sample_rate: env_to_f32("BOT_SENTRY_TRACES_SAMPLE_RATE", 0.0),
            },
            server: ServerConfig {
                bind_ip: env_to_str("BOT_SERVER_BIND_IP", "0.0.0.0"),
                bind_port: env_to_u16("BOT_SERVER_BIND_PORT", 8080),
                workers_count: env_to_optional_u16("BOT_SERVER_WORKERS_COUNT", None),
                signing_secret: env_to_str("SLACK_SIGNING_SECRET", ""),
                disable_webhook_signature: env_to_bool(
                    "BOT_SERVER_DISABLE_WEBHOOK_SIGNATURE",
                    false,
                ),
                signature_tolerance: env_to_u64("BOT_SERVER_SIGNATURE_TOLERANCE", 300),
                max_body_size: env_to_usize("BOT_SERVER_MAX_BODY_SIZE", 1024 * 1024),
            },
            version,
        })
    }

    pub fn from_env_no_version() -> Result<Self, ConfigError> {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_numeric_values_use_defaults() {
        assert_eq!(env_to_u16("SLACKBOT_TEST_UNSET_U16", 8080), 8080);
        assert_eq!(env_to_optional_u16("SLACKBOT_TEST_UNSET_OPT", None), None);
        assert_eq!(env_to_usize("SLACKBOT_TEST_UNSET_USIZE", 12), 12);
        assert!(!env_to_bool("SLACKBOT_TEST_UNSET_BOOL", false));
    }

    #[test]
    fn unparsable_numeric_values_use_defaults() {
        env::set_var("SLACKBOT_TEST_BAD_PORT", "not-a-port");
        assert_eq!(env_to_u16("SLACKBOT_TEST_BAD_PORT", 8080), 8080);
        env::set_var("SLACKBOT_TEST_GOOD_PORT", "9090");
        assert_eq!(env_to_u16("SLACKBOT_TEST_GOOD_PORT", 8080), 9090);
    }
}
