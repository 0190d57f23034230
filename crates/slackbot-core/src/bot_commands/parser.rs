use super::command::{Command, CommandError, CommandResult};

/// Command parser.
pub struct CommandParser;

impl CommandParser {
    /// Parse the command carried by an app mention.
    ///
    /// The text is expected as `<@BOT> <command> [ignored...]` and is split
    /// on single spaces, so consecutive spaces produce empty tokens.
    pub fn parse_mention(text: &str) -> CommandResult<Command> {
        let mut tokens = text.split(' ');
        let _mention = tokens.next();

        tokens
            .next()
            .map(Command::from_token)
            .ok_or_else(|| CommandError::IncompleteCommand { text: text.into() })
    }
}
