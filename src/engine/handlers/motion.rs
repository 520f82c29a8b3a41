//! Drive and wait handlers

use super::HandlerContext;
use crate::engine::StepOutcome;
use crate::robot::RobotInterface;
use anyhow::Result;

/// Set both outputs and hold them for the configured wait
async fn drive_and_hold(
    ctx: &HandlerContext,
    robot: &mut dyn RobotInterface,
    left: i32,
    right: i32,
) -> Result<()> {
    robot.set_drive_outputs(left, right).await?;
    robot.delay(ctx.params.wait_ms).await
}

/// Handle MoveForward
pub async fn handle_move_forward(
    ctx: &HandlerContext,
    robot: &mut dyn RobotInterface,
) -> Result<StepOutcome> {
    let speed = ctx.params.motor_speed;
    drive_and_hold(ctx, robot, speed, speed).await?;
    Ok(StepOutcome::completed(format!(
        "Moved forward at {} for {}ms",
        speed, ctx.params.wait_ms
    )))
}

/// Handle MoveBackward
pub async fn handle_move_backward(
    ctx: &HandlerContext,
    robot: &mut dyn RobotInterface,
) -> Result<StepOutcome> {
    let speed = ctx.params.motor_speed;
    drive_and_hold(ctx, robot, -speed, -speed).await?;
    Ok(StepOutcome::completed(format!(
        "Moved backward at {} for {}ms",
        speed, ctx.params.wait_ms
    )))
}

/// Handle TurnRight: left wheel forward, right wheel back
pub async fn handle_turn_right(
    ctx: &HandlerContext,
    robot: &mut dyn RobotInterface,
) -> Result<StepOutcome> {
    let speed = ctx.params.motor_speed;
    drive_and_hold(ctx, robot, speed, -speed).await?;
    Ok(StepOutcome::completed(format!(
        "Turned right for {}ms",
        ctx.params.wait_ms
    )))
}

/// Handle TurnLeft: left wheel back, right wheel forward
pub async fn handle_turn_left(
    ctx: &HandlerContext,
    robot: &mut dyn RobotInterface,
) -> Result<StepOutcome> {
    let speed = ctx.params.motor_speed;
    drive_and_hold(ctx, robot, -speed, speed).await?;
    Ok(StepOutcome::completed(format!(
        "Turned left for {}ms",
        ctx.params.wait_ms
    )))
}

/// Handle StopMotors. No hold afterwards.
pub async fn handle_stop_motors(
    _ctx: &HandlerContext,
    robot: &mut dyn RobotInterface,
) -> Result<StepOutcome> {
    robot.set_drive_outputs(0, 0).await?;
    Ok(StepOutcome::completed("Motors stopped"))
}

/// Handle Wait: a pure delay, outputs untouched
pub async fn handle_wait(
    ctx: &HandlerContext,
    robot: &mut dyn RobotInterface,
) -> Result<StepOutcome> {
    robot.delay(ctx.params.wait_ms).await?;
    Ok(StepOutcome::completed(format!(
        "Waited {}ms",
        ctx.params.wait_ms
    )))
}
