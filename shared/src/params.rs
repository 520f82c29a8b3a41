//! Execution parameters shared by every command list

use crate::limits;
use thiserror::Error;

/// Speed, brightness and wait applied uniformly to whichever list runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecutionParameters {
    /// Drive output magnitude, 0..=100
    pub motor_speed: i32,
    /// Indicator level for `LedOn`, 0..=255
    pub led_brightness: i32,
    /// Hold time for motion, waits and tones
    pub wait_ms: u64,
}

/// Why a list may not run with the current parameters
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("Motor speed has not been set or is zero")]
    MotorSpeedZero,

    #[error("Wait time has not been set or is zero")]
    WaitZero,
}

/// Result of normalising a raw operator value into range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clamped<T> {
    InRange(T),
    Raised(T),
    Lowered(T),
}

impl<T: Copy> Clamped<T> {
    pub fn value(self) -> T {
        match self {
            Clamped::InRange(v) | Clamped::Raised(v) | Clamped::Lowered(v) => v,
        }
    }

    pub fn was_adjusted(self) -> bool {
        !matches!(self, Clamped::InRange(_))
    }
}

fn clamp_i64(raw: i64, min: i32, max: i32) -> Clamped<i32> {
    if raw > max as i64 {
        Clamped::Lowered(max)
    } else if raw < min as i64 {
        Clamped::Raised(min)
    } else {
        Clamped::InRange(raw as i32)
    }
}

impl ExecutionParameters {
    pub fn new(motor_speed: i32, led_brightness: i32, wait_ms: u64) -> Self {
        Self {
            motor_speed,
            led_brightness,
            wait_ms,
        }
    }

    /// Clamp an operator-entered speed into 0..=100
    pub fn clamp_motor_speed(raw: i64) -> Clamped<i32> {
        clamp_i64(raw, 0, limits::MOTOR_SPEED_MAX)
    }

    /// Clamp an operator-entered brightness into 0..=255
    pub fn clamp_led_brightness(raw: i64) -> Clamped<i32> {
        clamp_i64(raw, 0, limits::LED_LEVEL_MAX)
    }

    /// Negative waits become zero
    pub fn clamp_wait_ms(raw: i64) -> Clamped<u64> {
        if raw < 0 {
            Clamped::Raised(0)
        } else {
            Clamped::InRange(raw as u64)
        }
    }

    /// Waits this long are confirmed with the operator before being accepted
    pub fn is_long_wait(wait_ms: u64) -> bool {
        wait_ms >= limits::LONG_WAIT_CONFIRM_MS
    }

    /// Check that a list may be executed with these parameters
    pub fn ensure_runnable(&self) -> Result<(), PreconditionError> {
        if self.motor_speed == 0 {
            return Err(PreconditionError::MotorSpeedZero);
        }
        if self.wait_ms == 0 {
            return Err(PreconditionError::WaitZero);
        }
        Ok(())
    }
}
