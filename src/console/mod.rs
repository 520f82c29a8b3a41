//! Operator console
//!
//! The operator trait, the stdin/stdout console and the validated prompt
//! helpers the menus are built from.

pub mod prompts;
mod stdio;
mod traits;

#[cfg(test)]
pub mod scripted;

pub use stdio::StdConsole;
pub use traits::Operator;

use thiserror::Error;

/// Operator input reached end of file
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Operator input closed")]
pub struct InputClosed;
