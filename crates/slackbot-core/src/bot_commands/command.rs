use thiserror::Error;

/// Command error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Mention without any command token.
    #[error("Incomplete command in mention '{}'", text)]
    IncompleteCommand { text: String },
}

/// Command result.
pub type CommandResult<T> = core::result::Result<T, CommandError>;

/// Command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Answer with "pong".
    Ping,
    /// Answer with "ping".
    Pong,
    /// Answer with the current channel name.
    Where,
    /// Answer with the list of visible channels.
    Channels,
    /// Anything else, ignored.
    Unknown(String),
}

impl Command {
    /// Map a command token to a command.
    ///
    /// Matching is exact and case-sensitive.
    pub fn from_token(token: &str) -> Self {
        match token {
            "ping" => Self::Ping,
            "pong" => Self::Pong,
            "where" => Self::Where,
            "channels" => Self::Channels,
            other => Self::Unknown(other.into()),
        }
    }
}

/// Command execution result.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommandExecutionResult {
    /// Actions.
    pub result_actions: Vec<ResultAction>,
}

impl CommandExecutionResult {
    /// Create builder instance.
    pub fn builder() -> CommandExecutionResultBuilder {
        CommandExecutionResultBuilder::default()
    }
}

/// Command execution result builder.
#[derive(Debug, Default)]
pub struct CommandExecutionResultBuilder {
    result_actions: Vec<ResultAction>,
}

impl CommandExecutionResultBuilder {
    /// Add result action.
    pub fn with_action(mut self, action: ResultAction) -> Self {
        self.result_actions.push(action);
        self
    }

    /// Build execution result.
    pub fn build(self) -> CommandExecutionResult {
        CommandExecutionResult {
            result_actions: self.result_actions,
        }
    }
}

/// Result action.
#[derive(Debug, PartialEq, Eq)]
pub enum ResultAction {
    /// Post a message in the mention channel.
    PostMessage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token() {
        assert_eq!(Command::from_token("ping"), Command::Ping);
        assert_eq!(Command::from_token("pong"), Command::Pong);
        assert_eq!(Command::from_token("where"), Command::Where);
        assert_eq!(Command::from_token("channels"), Command::Channels);
        assert_eq!(
            Command::from_token("PING"),
            Command::Unknown("PING".into())
        );
        assert_eq!(Command::from_token(""), Command::Unknown("".into()));
    }
}
