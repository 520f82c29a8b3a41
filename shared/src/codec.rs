//! Flat-file codec for the command bank
//!
//! The bank is stored as exactly eight newline-terminated lines:
//! ```text
//! line 1-4: steps of slots 1-4, joined with ", "   e.g. "MoveForward, Wait, Done"
//! line 5-8: names of slots 1-4
//! ```
//!
//! The layout is positional and carries no version or checksum.

use crate::bank::{CommandBank, Slot};
use crate::command::{Command, LenientParse};
use crate::limits::SLOT_COUNT;
use crate::list::CommandList;
use thiserror::Error;

/// Number of lines in a persisted bank
pub const LINE_COUNT: usize = SLOT_COUNT * 2;

/// Errors that can occur during encoding/decoding.
///
/// Every decode error means the persisted bank is corrupt and must not replace
/// the live one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Corrupt command file: expected {} lines, found {found}", LINE_COUNT)]
    MissingLines { found: usize },

    #[error("Corrupt command file: expected {} lines, found {found}", LINE_COUNT)]
    ExtraLines { found: usize },

    #[error("Corrupt command file: unrecognised command {token:?} on line {line}")]
    UnknownToken { line: usize, token: String },

    #[error("Name of slot {slot} contains a line break and cannot be stored")]
    MultilineName { slot: Slot },
}

/// How the decoder treats tokens outside the vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenPolicy {
    /// Substitute [`Command::FALLBACK`] and report it (legacy behaviour)
    #[default]
    Lenient,
    /// Reject the whole file
    Strict,
}

/// An unrecognised token that was replaced during a lenient decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFallback {
    pub slot: Slot,
    /// 1-based line in the file
    pub line: usize,
    /// Position of the step within its list
    pub step: usize,
    pub token: String,
    pub substituted: Command,
}

/// A decoded bank plus any fallbacks that went into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBank {
    pub bank: CommandBank,
    pub fallbacks: Vec<TokenFallback>,
}

/// Encode a bank into its eight-line text form
pub fn encode(bank: &CommandBank) -> Result<String, CodecError> {
    let mut out = String::new();

    for (_, list) in bank.iter() {
        out.push_str(&list.render_steps());
        out.push('\n');
    }

    for (slot, list) in bank.iter() {
        if list.name.contains(['\n', '\r']) {
            return Err(CodecError::MultilineName { slot });
        }
        out.push_str(&list.name);
        out.push('\n');
    }

    Ok(out)
}

/// Decode the eight-line text form into a bank
pub fn decode(text: &str, policy: TokenPolicy) -> Result<DecodedBank, CodecError> {
    let lines: Vec<&str> = text.lines().collect();

    if lines.len() < LINE_COUNT {
        return Err(CodecError::MissingLines { found: lines.len() });
    }
    if lines.len() > LINE_COUNT {
        return Err(CodecError::ExtraLines { found: lines.len() });
    }

    let mut fallbacks = Vec::new();
    let mut lists: [CommandList; SLOT_COUNT] = Default::default();

    for (slot, list) in Slot::all().zip(lists.iter_mut()) {
        let step_line = slot.index();
        let name_line = slot.index() + SLOT_COUNT;

        let mut steps = Vec::new();
        for (step, token) in lines[step_line].split(',').enumerate() {
            match Command::parse_lenient(token) {
                LenientParse::Recognized(cmd) => steps.push(cmd),
                LenientParse::Fallback(cmd) => {
                    if policy == TokenPolicy::Strict {
                        return Err(CodecError::UnknownToken {
                            line: step_line + 1,
                            token: token.trim().to_string(),
                        });
                    }
                    fallbacks.push(TokenFallback {
                        slot,
                        line: step_line + 1,
                        step,
                        token: token.trim().to_string(),
                        substituted: cmd,
                    });
                    steps.push(cmd);
                }
            }
        }

        *list = CommandList::new(lines[name_line], steps);
    }

    Ok(DecodedBank {
        bank: CommandBank::from_lists(lists),
        fallbacks,
    })
}
