//! Robot double that records every call instead of actuating

use crate::robot::traits::RobotInterface;
use anyhow::{bail, Result};
use async_trait::async_trait;

/// One call made against the robot interface
#[derive(Debug, Clone, PartialEq)]
pub enum RobotCall {
    Connect,
    Disconnect,
    Drive(i32, i32),
    Indicator(i32, i32, i32),
    ToneOn(u32),
    ToneOff,
    Delay(u64),
    ReadTemperature,
    ReadLeftLight,
    ReadRightLight,
}

impl RobotCall {
    /// Calls that change the robot's outputs or block
    pub fn is_actuation(&self) -> bool {
        !matches!(
            self,
            RobotCall::ReadTemperature | RobotCall::ReadLeftLight | RobotCall::ReadRightLight
        )
    }
}

#[derive(Debug, Default)]
pub struct RecordingRobot {
    pub calls: Vec<RobotCall>,
    pub temperature_c: f64,
    pub left_light: i32,
    pub right_light: i32,
    /// Refuse to connect
    pub unreachable: bool,
    /// Fail the n-th call (0-based) once with an error
    pub fail_at: Option<usize>,
}

impl RecordingRobot {
    pub fn new() -> Self {
        Self {
            temperature_c: 22.0,
            left_light: 100,
            right_light: 50,
            ..Default::default()
        }
    }

    fn record(&mut self, call: RobotCall) -> Result<()> {
        if self.fail_at == Some(self.calls.len()) {
            self.fail_at = None;
            bail!("injected failure on {:?}", call);
        }
        self.calls.push(call);
        Ok(())
    }
}

#[async_trait]
impl RobotInterface for RecordingRobot {
    async fn connect(&mut self) -> Result<bool> {
        self.record(RobotCall::Connect)?;
        Ok(!self.unreachable)
    }

    async fn disconnect(&mut self) -> Result<()> {
        self.record(RobotCall::Disconnect)
    }

    async fn set_drive_outputs(&mut self, left: i32, right: i32) -> Result<()> {
        self.record(RobotCall::Drive(left, right))
    }

    async fn set_indicator(&mut self, red: i32, green: i32, blue: i32) -> Result<()> {
        self.record(RobotCall::Indicator(red, green, blue))
    }

    async fn emit_tone(&mut self, frequency_hz: u32) -> Result<()> {
        self.record(RobotCall::ToneOn(frequency_hz))
    }

    async fn stop_tone(&mut self) -> Result<()> {
        self.record(RobotCall::ToneOff)
    }

    async fn delay(&mut self, milliseconds: u64) -> Result<()> {
        self.record(RobotCall::Delay(milliseconds))
    }

    async fn read_temperature(&mut self) -> Result<f64> {
        self.record(RobotCall::ReadTemperature)?;
        Ok(self.temperature_c)
    }

    async fn read_left_light(&mut self) -> Result<i32> {
        self.record(RobotCall::ReadLeftLight)?;
        Ok(self.left_light)
    }

    async fn read_right_light(&mut self) -> Result<i32> {
        self.record(RobotCall::ReadRightLight)?;
        Ok(self.right_light)
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
