//! The chat-facing shell around the roller: prefix handling and command dispatch.

use crate::error::RollError;
use crate::parse::{self, split_words, Word};
use crate::roll::{self, Roller, DEFAULT_MAX_ROLLS};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Command {
    Roll,
    Commands,
    Functions,
}

impl Command {
    pub const ALL: &'static [Self] = &[Self::Roll, Self::Commands, Self::Functions];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Roll => "roll",
            Self::Commands => "commands",
            Self::Functions => "functions",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = RollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "roll" => Self::Roll,
            "commands" | "list_command" | "list_commands" => Self::Commands,
            "functions" => Self::Functions,
            _ => return Err(RollError::UnknownCommand(s.to_owned())),
        })
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BotConfig {
    /// Messages not starting with this are ignored.
    pub prefix: char,
    /// Most dice a single roll may draw; `None` for no limit.
    pub max_rolls: Option<usize>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: '!',
            max_rolls: Some(DEFAULT_MAX_ROLLS),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Bot {
    config: BotConfig,
}

impl Bot {
    pub fn new(config: BotConfig) -> Self {
        Self { config }
    }

    /// Replies to a message, or returns `None` if it isn't addressed to the bot.
    pub fn handle<R: Roller>(&self, message: &str, roller: R) -> Option<String> {
        let content = message.trim_start().strip_prefix(self.config.prefix)?;
        Some(self.dispatch(&split_words(content), roller))
    }

    /// Runs the command named by the first word with the rest as its arguments.
    pub fn dispatch<R: Roller>(&self, words: &[Word<'_>], roller: R) -> String {
        let (verb, args) = match words.split_first() {
            Some((verb, args)) => (verb.as_str(), args),
            None => ("", words),
        };
        tracing::debug!(verb, args = args.len(), "dispatching command");
        match verb.parse() {
            Ok(Command::Roll) => self.roll(args, roller),
            Ok(Command::Commands) => self.commands(),
            Ok(Command::Functions) => self.functions(),
            Err(why) => why.to_string(),
        }
    }

    pub fn roll<R: Roller>(&self, args: &[Word<'_>], roller: R) -> String {
        let result = parse::parse(args)
            .and_then(|tokens| roll::eval(&tokens, roller, self.config.max_rolls));
        match result {
            Ok(reply) if reply.is_empty() => {
                format!("Nothing to roll. Try `{}roll 2d20k1h + 5`", self.config.prefix)
            }
            Ok(reply) => reply,
            Err(why) => {
                tracing::debug!(%why, "roll rejected");
                why.to_string()
            }
        }
    }

    fn commands(&self) -> String {
        let list: String = Command::ALL
            .iter()
            .map(|c| format!("\n\t{}{}", self.config.prefix, c))
            .collect();
        format!("You can use the following commands:{}", list)
    }

    fn functions(&self) -> String {
        format!(
            "I am a simple dice rolling bot! Try `{}roll 3d8 + 2d6` or `{}roll \"to hit\" 2d20k1h + 5`.",
            self.config.prefix, self.config.prefix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::ScriptedRoller;
    use pretty_assertions::assert_eq;

    fn roller() -> ScriptedRoller {
        ScriptedRoller::new(&[14, 1, 10, 12, 7])
    }

    fn reply(message: &str) -> Option<String> {
        Bot::default().handle(message, roller())
    }

    #[test]
    fn test_command_from_str() {
        assert_eq!("roll".parse(), Ok(Command::Roll));
        assert_eq!("list_command".parse(), Ok(Command::Commands));
        assert_eq!("list_commands".parse(), Ok(Command::Commands));
        assert_eq!("commands".parse(), Ok(Command::Commands));
        assert_eq!("functions".parse(), Ok(Command::Functions));
        assert_eq!(
            "Roll".parse::<Command>(),
            Err(RollError::UnknownCommand("Roll".into()))
        );
    }

    #[test]
    fn test_handle_roll() {
        assert_eq!(reply("!roll d20").as_deref(), Some("(**14**) "));
        assert_eq!(
            reply("!roll d20 + 8").as_deref(),
            Some("(**14**) + 8 (sum = 22)")
        );
    }

    #[test]
    fn test_handle_roll_with_quotes() {
        assert_eq!(
            reply(r#"!roll "to hit AC 20" d20 + 8"#).as_deref(),
            Some("to hit AC 20 (**14**) + 8 (sum = 22)")
        );
        assert_eq!(
            reply(r#"!roll "d20" + 8"#).as_deref(),
            Some("(**14**) + 8 (sum = 22)")
        );
    }

    #[test]
    fn test_handle_ignores_unprefixed() {
        assert_eq!(reply("roll d20"), None);
        assert_eq!(reply(""), None);
    }

    #[test]
    fn test_handle_unknown_command() {
        assert_eq!(reply("!dance").as_deref(), Some("I don't understand `dance`"));
        assert_eq!(reply("!").as_deref(), Some("I don't understand ``"));
    }

    #[test]
    fn test_handle_errors_are_replies() {
        assert_eq!(reply("!roll 0d6").as_deref(), Some("`0d6` rolls no dice"));
        assert_eq!(reply("!roll 2000d6").as_deref(), Some("too many dice rolled"));
        assert_eq!(reply("!roll").as_deref(), Some("Nothing to roll. Try `!roll 2d20k1h + 5`"));
    }

    #[test]
    fn test_handle_commands() {
        assert_eq!(
            reply("!list_command").as_deref(),
            Some("You can use the following commands:\n\t!roll\n\t!commands\n\t!functions")
        );
    }

    #[test]
    fn test_custom_prefix() {
        let bot = Bot::new(BotConfig {
            prefix: '/',
            max_rolls: None,
        });
        assert_eq!(bot.handle("!roll d20", roller()), None);
        assert_eq!(bot.handle("/roll d20", roller()).as_deref(), Some("(**14**) "));
        assert_eq!(bot.handle("/roll 2000d6", roller()).map(|r| r.trim_end().ends_with(')')), Some(true));
        assert_eq!(
            bot.handle("/roll 99999999999d6", roller()).as_deref(),
            Some("too many dice rolled")
        );
    }
}
