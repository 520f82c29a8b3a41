//! Sensor query handlers. These never actuate.

use super::HandlerContext;
use crate::engine::{SensorReading, StepOutcome};
use crate::robot::RobotInterface;
use anyhow::Result;

/// Handle GetTemperature
pub async fn handle_get_temperature(
    _ctx: &HandlerContext,
    robot: &mut dyn RobotInterface,
) -> Result<StepOutcome> {
    let celsius = robot.read_temperature().await?;
    Ok(StepOutcome::Reading(SensorReading::Temperature(celsius)))
}

/// Handle GetLight: the mean of both light sensors
pub async fn handle_get_light(
    _ctx: &HandlerContext,
    robot: &mut dyn RobotInterface,
) -> Result<StepOutcome> {
    let left = robot.read_left_light().await?;
    let right = robot.read_right_light().await?;
    Ok(StepOutcome::Reading(SensorReading::Light((left + right) / 2)))
}
