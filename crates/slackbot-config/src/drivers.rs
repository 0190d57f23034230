use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid driver kind: {kind}")]
    InvalidDriverKind { kind: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiDriver {
    Null,
    Slack,
}

impl FromStr for ApiDriver {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "null" => Ok(Self::Null),
            "slack" => Ok(Self::Slack),
            _ => Err(ConfigError::InvalidDriverKind { kind: s.into() }),
        }
    }
}
