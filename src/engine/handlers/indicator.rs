//! Indicator LED handlers

use super::HandlerContext;
use crate::engine::StepOutcome;
use crate::robot::RobotInterface;
use anyhow::Result;

/// Handle LedOn: white at the configured brightness.
///
/// Brightness is passed through as given; range checks happen when the
/// parameters are set.
pub async fn handle_led_on(
    ctx: &HandlerContext,
    robot: &mut dyn RobotInterface,
) -> Result<StepOutcome> {
    let level = ctx.params.led_brightness;
    robot.set_indicator(level, level, level).await?;
    Ok(StepOutcome::completed(format!("LED on at {}", level)))
}

/// Handle LedOff
pub async fn handle_led_off(
    _ctx: &HandlerContext,
    robot: &mut dyn RobotInterface,
) -> Result<StepOutcome> {
    robot.set_indicator(0, 0, 0).await?;
    Ok(StepOutcome::completed("LED off"))
}
