//! In-process robot used when no hardware is attached

use crate::robot::traits::RobotInterface;
use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::time::{sleep, Duration};
use tracing::{debug, info};

/// Fixed sensor values and timing behaviour of the simulation
#[derive(Debug, Clone)]
pub struct SimulatedRobotConfig {
    /// Reported ambient temperature
    pub temperature_c: f64,
    /// Reported left light level
    pub left_light: i32,
    /// Reported right light level
    pub right_light: i32,
    /// Sleep for real on `delay`; otherwise delays only advance the clock
    pub realtime: bool,
}

impl Default for SimulatedRobotConfig {
    fn default() -> Self {
        Self {
            temperature_c: 21.5,
            left_light: 120,
            right_light: 136,
            realtime: true,
        }
    }
}

/// Simulated robot that logs every actuator call
#[derive(Debug)]
pub struct SimulatedRobot {
    config: SimulatedRobotConfig,
    connected: bool,
    drive: (i32, i32),
    indicator: (i32, i32, i32),
    tone_hz: Option<u32>,
    /// Milliseconds spent in `delay`
    elapsed_ms: u64,
}

impl SimulatedRobot {
    pub fn new(config: SimulatedRobotConfig) -> Self {
        Self {
            config,
            connected: false,
            drive: (0, 0),
            indicator: (0, 0, 0),
            tone_hz: None,
            elapsed_ms: 0,
        }
    }

    /// Total time spent in `delay`
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    fn ensure_connected(&self) -> Result<()> {
        if !self.connected {
            bail!("Simulated robot is not connected");
        }
        Ok(())
    }
}

#[async_trait]
impl RobotInterface for SimulatedRobot {
    async fn connect(&mut self) -> Result<bool> {
        self.connected = true;
        info!("[ROBOT] Simulated robot connected");
        Ok(true)
    }

    async fn disconnect(&mut self) -> Result<()> {
        self.drive = (0, 0);
        self.indicator = (0, 0, 0);
        self.tone_hz = None;
        self.connected = false;
        info!("[ROBOT] Simulated robot disconnected");
        Ok(())
    }

    async fn set_drive_outputs(&mut self, left: i32, right: i32) -> Result<()> {
        self.ensure_connected()?;
        self.drive = (left, right);
        debug!("[ROBOT] Drive outputs: left={} right={}", left, right);
        Ok(())
    }

    async fn set_indicator(&mut self, red: i32, green: i32, blue: i32) -> Result<()> {
        self.ensure_connected()?;
        self.indicator = (red, green, blue);
        debug!("[ROBOT] Indicator: ({}, {}, {})", red, green, blue);
        Ok(())
    }

    async fn emit_tone(&mut self, frequency_hz: u32) -> Result<()> {
        self.ensure_connected()?;
        self.tone_hz = Some(frequency_hz);
        debug!("[ROBOT] Tone on: {}Hz", frequency_hz);
        Ok(())
    }

    async fn stop_tone(&mut self) -> Result<()> {
        self.ensure_connected()?;
        self.tone_hz = None;
        debug!("[ROBOT] Tone off");
        Ok(())
    }

    async fn delay(&mut self, milliseconds: u64) -> Result<()> {
        debug!("[ROBOT] Delay {}ms", milliseconds);
        if self.config.realtime {
            sleep(Duration::from_millis(milliseconds)).await;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(milliseconds);
        Ok(())
    }

    async fn read_temperature(&mut self) -> Result<f64> {
        self.ensure_connected()?;
        Ok(self.config.temperature_c)
    }

    async fn read_left_light(&mut self) -> Result<i32> {
        self.ensure_connected()?;
        Ok(self.config.left_light)
    }

    async fn read_right_light(&mut self) -> Result<i32> {
        self.ensure_connected()?;
        Ok(self.config.right_light)
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

#[cfg(test)]
impl SimulatedRobot {
    pub fn drive(&self) -> (i32, i32) {
        self.drive
    }

    pub fn indicator(&self) -> (i32, i32, i32) {
        self.indicator
    }

    pub fn tone(&self) -> Option<u32> {
        self.tone_hz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_robot() -> SimulatedRobot {
        SimulatedRobot::new(SimulatedRobotConfig {
            realtime: false,
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_actuators_require_connection() {
        let mut robot = instant_robot();
        assert!(robot.set_drive_outputs(10, 10).await.is_err());

        assert!(robot.connect().await.unwrap());
        robot.set_drive_outputs(10, -10).await.unwrap();
        assert_eq!(robot.drive(), (10, -10));
    }

    #[tokio::test]
    async fn test_disconnect_resets_outputs() {
        let mut robot = instant_robot();
        robot.connect().await.unwrap();
        robot.set_indicator(1, 2, 3).await.unwrap();
        robot.emit_tone(361).await.unwrap();

        robot.disconnect().await.unwrap();

        assert_eq!(robot.indicator(), (0, 0, 0));
        assert_eq!(robot.tone(), None);
    }

    #[tokio::test]
    async fn test_delay_advances_clock() {
        let mut robot = instant_robot();
        robot.delay(250).await.unwrap();
        robot.delay(250).await.unwrap();
        assert_eq!(robot.elapsed_ms(), 500);
    }

    #[tokio::test]
    async fn test_sensor_readings() {
        let mut robot = instant_robot();
        robot.connect().await.unwrap();
        assert_eq!(robot.read_temperature().await.unwrap(), 21.5);
        assert_eq!(robot.read_left_light().await.unwrap(), 120);
        assert_eq!(robot.read_right_light().await.unwrap(), 136);
    }
}
