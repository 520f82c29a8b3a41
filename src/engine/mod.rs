//! Command execution engine
//!
//! This module handles:
//! - Checking execution parameters before anything moves
//! - Dispatching each step of a command list to its handler
//! - Reporting sensor readings back to the operator
//! - Repeating whole passes until the operator declines

mod executor;
pub mod handlers;

pub use executor::{ExecutionError, ExecutionReport, Executor};

use std::fmt;

/// Tone frequency used by every beep
pub const TONE_HZ: u32 = 361;

/// Legacy multiplier applied to the wait when holding a PlayBeep tone
pub const LEGACY_BEEP_HOLD_SCALE: u64 = 1000;

/// Indicator colour shown while marching
pub const MARCH_COLOR: (i32, i32, i32) = (0, 255, 0);

/// Fixed behaviour of the engine that is not part of the execution parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Frequency for PlayBeep, March and the chimes
    pub tone_hz: u32,
    /// PlayBeep holds the tone for `wait_ms * beep_hold_scale`
    pub beep_hold_scale: u64,
    /// Indicator colour set before a march
    pub march_color: (i32, i32, i32),
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tone_hz: TONE_HZ,
            beep_hold_scale: LEGACY_BEEP_HOLD_SCALE,
            march_color: MARCH_COLOR,
        }
    }
}

/// A value reported by a sensor query step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorReading {
    /// Degrees Celsius
    Temperature(f64),
    /// Mean of the left and right light sensors
    Light(i32),
}

impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorReading::Temperature(celsius) => write!(f, "Ambient temperature: {:.2}", celsius),
            SensorReading::Light(level) => write!(f, "Light sensor readout: {:02}", level),
        }
    }
}

/// Result of dispatching a single step
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Actuation finished
    Completed { message: String },
    /// A sensor was queried
    Reading(SensorReading),
    /// The terminator was reached; dispatch continues regardless
    EndOfCommands,
}

impl StepOutcome {
    pub fn completed(message: impl Into<String>) -> Self {
        StepOutcome::Completed {
            message: message.into(),
        }
    }
}
