//! Rover Shared Program Types
//!
//! This crate provides the user-programming data model shared by the rover
//! console: the command vocabulary, named command lists, the four-slot bank,
//! execution parameters and the flat-file codec for the bank.

pub mod bank;
pub mod codec;
pub mod command;
pub mod list;
pub mod params;

// Re-export commonly used types at crate root
pub use bank::{CommandBank, Slot, SlotOutOfRange};
pub use codec::{CodecError, DecodedBank, TokenFallback, TokenPolicy};
pub use command::{Command, LenientParse, ParseCommandError};
pub use list::{BuildProgress, CommandList, ListBuilder};
pub use params::{Clamped, ExecutionParameters, PreconditionError};

/// Fixed limits of the programming model
pub mod limits {
    /// Number of command lists in the bank
    pub const SLOT_COUNT: usize = 4;

    /// Name given to unused slots
    pub const PLACEHOLDER_NAME: &str = "---";

    /// Separator between steps when a list is rendered on one line
    pub const STEP_SEPARATOR: &str = ", ";

    /// Upper bound for the drive output magnitude
    pub const MOTOR_SPEED_MAX: i32 = 100;

    /// Upper bound for each indicator channel
    pub const LED_LEVEL_MAX: i32 = 255;

    /// Waits at or above this need operator confirmation
    pub const LONG_WAIT_CONFIRM_MS: u64 = 10_000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_bank_roundtrips_through_codec() {
        let bank = CommandBank::new();
        let text = codec::encode(&bank).expect("encode failed");
        assert_eq!(text, "Done\nDone\nDone\nDone\n---\n---\n---\n---\n");

        let decoded = codec::decode(&text, TokenPolicy::Strict).expect("decode failed");
        assert_eq!(decoded.bank, bank);
    }

    #[test]
    fn test_limits() {
        assert_eq!(codec::LINE_COUNT, limits::SLOT_COUNT * 2);
        assert_eq!(CommandList::default().name, limits::PLACEHOLDER_NAME);
    }
}
