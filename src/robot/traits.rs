//! Robot trait abstraction for pluggable actuator/sensor backends

use anyhow::Result;
use async_trait::async_trait;

/// Actuators, sensors and the blocking delay of a small mobile robot.
///
/// Calls are issued strictly one after another. `delay` suspends the caller
/// for the full duration; nothing else is dispatched meanwhile.
#[async_trait]
pub trait RobotInterface: Send {
    /// Attempt to connect, returning whether the robot answered
    async fn connect(&mut self) -> Result<bool>;

    /// Release the robot
    async fn disconnect(&mut self) -> Result<()>;

    /// Set both drive outputs, each in -100..=100
    async fn set_drive_outputs(&mut self, left: i32, right: i32) -> Result<()>;

    /// Set the indicator colour, each channel in 0..=255
    async fn set_indicator(&mut self, red: i32, green: i32, blue: i32) -> Result<()>;

    /// Start a tone at the given frequency
    async fn emit_tone(&mut self, frequency_hz: u32) -> Result<()>;

    async fn stop_tone(&mut self) -> Result<()>;

    /// Block for the given number of milliseconds
    async fn delay(&mut self, milliseconds: u64) -> Result<()>;

    /// Ambient temperature in degrees Celsius
    async fn read_temperature(&mut self) -> Result<f64>;

    async fn read_left_light(&mut self) -> Result<i32>;

    async fn read_right_light(&mut self) -> Result<i32>;

    /// Human-readable name for this robot backend
    fn name(&self) -> &'static str;
}
