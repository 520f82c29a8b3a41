//! Command vocabulary
//!
//! The closed set of symbolic actions a command list can hold, plus the two
//! ways of turning text into a tag:
//! - [`Command::from_str`] is the strict, operator-facing parse
//! - [`Command::parse_lenient`] is the codec's parse and never fails

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One tag from the fixed vocabulary.
///
/// Declaration order matters: the lenient parser falls back to the first
/// variant and accepts ordinals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveForward,
    MoveBackward,
    StopMotors,
    Wait,
    TurnRight,
    TurnLeft,
    LedOn,
    LedOff,
    GetTemperature,
    GetLight,
    PlayBeep,
    March,
    /// Terminator sentinel, not an executable action
    Done,
}

/// Error returned by the strict parser
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Invalid command token {token:?}. Valid inputs are: {}", Command::vocabulary())]
    InvalidCommandToken { token: String },
}

/// Outcome of a lenient parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LenientParse {
    /// Token named a tag
    Recognized(Command),
    /// Token was unrecognised and replaced by [`Command::FALLBACK`]
    Fallback(Command),
}

impl LenientParse {
    /// The resolved tag, whichever way it was obtained
    pub fn command(self) -> Command {
        match self {
            LenientParse::Recognized(cmd) | LenientParse::Fallback(cmd) => cmd,
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, LenientParse::Fallback(_))
    }
}

impl Command {
    /// Every tag in declaration order
    pub const ALL: [Command; 13] = [
        Command::MoveForward,
        Command::MoveBackward,
        Command::StopMotors,
        Command::Wait,
        Command::TurnRight,
        Command::TurnLeft,
        Command::LedOn,
        Command::LedOff,
        Command::GetTemperature,
        Command::GetLight,
        Command::PlayBeep,
        Command::March,
        Command::Done,
    ];

    /// Tag substituted for unrecognised persisted tokens
    pub const FALLBACK: Command = Command::MoveForward;

    /// Canonical name, used for display and persistence
    pub fn name(self) -> &'static str {
        match self {
            Command::MoveForward => "MoveForward",
            Command::MoveBackward => "MoveBackward",
            Command::StopMotors => "StopMotors",
            Command::Wait => "Wait",
            Command::TurnRight => "TurnRight",
            Command::TurnLeft => "TurnLeft",
            Command::LedOn => "LedOn",
            Command::LedOff => "LedOff",
            Command::GetTemperature => "GetTemperature",
            Command::GetLight => "GetLight",
            Command::PlayBeep => "PlayBeep",
            Command::March => "March",
            Command::Done => "Done",
        }
    }

    /// Older files spell the temperature query without its suffix
    fn legacy_alias(self) -> Option<&'static str> {
        match self {
            Command::GetTemperature => Some("GetTemp"),
            _ => None,
        }
    }

    pub fn is_terminator(self) -> bool {
        self == Command::Done
    }

    /// Comma-separated list of every valid token, for prompts and errors
    pub fn vocabulary() -> String {
        Self::ALL
            .iter()
            .map(|cmd| cmd.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parse a persisted token.
    ///
    /// Accepts canonical names and legacy aliases (case-insensitive, surrounding
    /// whitespace ignored) and decimal ordinals. Anything else resolves to
    /// [`Command::FALLBACK`]; callers are expected to report that case.
    pub fn parse_lenient(token: &str) -> LenientParse {
        let trimmed = token.trim();

        if let Ok(cmd) = trimmed.parse::<Command>() {
            return LenientParse::Recognized(cmd);
        }

        if let Some(cmd) = Self::ALL
            .iter()
            .copied()
            .find(|cmd| matches!(cmd.legacy_alias(), Some(alias) if alias.eq_ignore_ascii_case(trimmed)))
        {
            return LenientParse::Recognized(cmd);
        }

        if let Some(cmd) = trimmed
            .parse::<usize>()
            .ok()
            .and_then(|ordinal| Self::ALL.get(ordinal).copied())
        {
            return LenientParse::Recognized(cmd);
        }

        LenientParse::Fallback(Self::FALLBACK)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Exact case-insensitive match against a canonical name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|cmd| cmd.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseCommandError::InvalidCommandToken {
                token: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_parse_is_case_insensitive() {
        assert_eq!("moveforward".parse::<Command>(), Ok(Command::MoveForward));
        assert_eq!("LEDON".parse::<Command>(), Ok(Command::LedOn));
        assert_eq!("  Done ".parse::<Command>(), Ok(Command::Done));
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        let err = "Jump".parse::<Command>().unwrap_err();
        assert_eq!(
            err,
            ParseCommandError::InvalidCommandToken {
                token: "Jump".into()
            }
        );
        // The message carries the full vocabulary for the re-prompt
        assert!(err.to_string().contains("GetTemperature"));
    }

    #[test]
    fn test_strict_parse_rejects_alias_and_ordinal() {
        assert!("GetTemp".parse::<Command>().is_err());
        assert!("3".parse::<Command>().is_err());
    }

    #[test]
    fn test_lenient_parse_accepts_aliases_and_ordinals() {
        assert_eq!(
            Command::parse_lenient(" GETTEMP"),
            LenientParse::Recognized(Command::GetTemperature)
        );
        assert_eq!(
            Command::parse_lenient("3"),
            LenientParse::Recognized(Command::Wait)
        );
        assert_eq!(
            Command::parse_lenient(" done"),
            LenientParse::Recognized(Command::Done)
        );
    }

    #[test]
    fn test_lenient_parse_falls_back_to_first_tag() {
        let parsed = Command::parse_lenient("Jump");
        assert!(parsed.is_fallback());
        assert_eq!(parsed.command(), Command::MoveForward);

        assert!(Command::parse_lenient("").is_fallback());
        assert!(Command::parse_lenient("13").is_fallback());
    }

    #[test]
    fn test_vocabulary_order() {
        assert_eq!(Command::ALL[0], Command::FALLBACK);
        assert_eq!(Command::ALL[12], Command::Done);
        assert!(Command::vocabulary().starts_with("MoveForward, MoveBackward"));
    }
}
