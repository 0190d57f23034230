//! Validation utilities.

use std::fmt::Write;

use slackbot_config::{ApiDriver, Config};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "BOT_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "BOT_SERVER_BIND_PORT");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Env. vars which are not required to start, but without which requests will fail.
fn collect_missing_credentials(config: &Config) -> Vec<&'static str> {
    let mut missing = vec![];

    if config.api.driver == ApiDriver::Slack && config.api.slack.bot_token.is_empty() {
        missing.push("SLACK_BOT_TOKEN");
    }
    if !config.server.disable_webhook_signature && config.server.signing_secret.is_empty() {
        missing.push("SLACK_SIGNING_SECRET");
    }

    missing
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    for name in collect_missing_credentials(config) {
        warn!(
            env_var = name,
            message = "Missing env. var., requests will fail until it is set"
        );
    }

    validate_env_vars(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn base_config() -> Config {
        let mut config = Config::from_env_no_version().unwrap();
        config.api.driver = ApiDriver::Slack;
        config.api.slack.bot_token = "xoxb-token".into();
        config.server.signing_secret = "secret".into();
        config.server.disable_webhook_signature = false;
        config.server.bind_ip = "0.0.0.0".into();
        config.server.bind_port = 8080;
        config
    }

    #[test]
    fn test_validate_env_vars() {
        let mut config = base_config();
        assert!(validate_env_vars(&config).is_ok());

        config.server.bind_ip = String::new();
        config.server.bind_port = 0;
        match validate_env_vars(&config) {
            Err(ValidationError::EnvVarsError { errors }) => {
                assert!(errors.contains("BOT_SERVER_BIND_IP"));
                assert!(errors.contains("BOT_SERVER_BIND_PORT"));
            }
            Ok(()) => panic!("validation should fail"),
        }
    }

    #[test]
    fn test_missing_credentials_are_not_fatal() {
        let mut config = base_config();
        config.api.slack.bot_token = String::new();
        config.server.signing_secret = String::new();

        assert!(validate_configuration(&config).is_ok());
        assert_eq!(
            collect_missing_credentials(&config),
            vec!["SLACK_BOT_TOKEN", "SLACK_SIGNING_SECRET"]
        );
    }

    #[test]
    fn test_missing_credentials_depend_on_drivers() {
        let mut config = base_config();
        config.api.driver = ApiDriver::Null;
        config.api.slack.bot_token = String::new();
        config.server.disable_webhook_signature = true;
        config.server.signing_secret = String::new();

        assert_eq!(collect_missing_credentials(&config), Vec::<&str>::new());
    }
}
