//! Tone handlers and the confirmation jingles

use super::HandlerContext;
use crate::engine::StepOutcome;
use crate::robot::RobotInterface;
use anyhow::Result;

/// Repetitions of the tone/drive pulse in a march
const MARCH_PULSES: u64 = 4;

/// Handle PlayBeep: tone held for the wait times the configured scale
pub async fn handle_play_beep(
    ctx: &HandlerContext,
    robot: &mut dyn RobotInterface,
) -> Result<StepOutcome> {
    let hold_ms = ctx
        .params
        .wait_ms
        .saturating_mul(ctx.config.beep_hold_scale);

    robot.emit_tone(ctx.config.tone_hz).await?;
    robot.delay(hold_ms).await?;
    robot.stop_tone().await?;

    Ok(StepOutcome::completed(format!(
        "Beeped at {}Hz for {}ms",
        ctx.config.tone_hz, hold_ms
    )))
}

/// Handle March: indicator to the active colour, then four pulses of tone and
/// forward drive, each on and off for a quarter of the wait
pub async fn handle_march(
    ctx: &HandlerContext,
    robot: &mut dyn RobotInterface,
) -> Result<StepOutcome> {
    let (red, green, blue) = ctx.config.march_color;
    let speed = ctx.params.motor_speed;
    let pulse_ms = ctx.params.wait_ms / MARCH_PULSES;

    robot.set_indicator(red, green, blue).await?;
    for _ in 0..MARCH_PULSES {
        robot.emit_tone(ctx.config.tone_hz).await?;
        robot.set_drive_outputs(speed, speed).await?;
        robot.delay(pulse_ms).await?;
        robot.stop_tone().await?;
        robot.set_drive_outputs(0, 0).await?;
        robot.delay(pulse_ms).await?;
    }

    Ok(StepOutcome::completed(format!(
        "Marched {} steps of {}ms",
        MARCH_PULSES, pulse_ms
    )))
}

/// Three short beeps, played when the robot connects
pub async fn play_triplet_beep(
    robot: &mut dyn RobotInterface,
    frequency_hz: u32,
    unit_ms: u64,
) -> Result<()> {
    for _ in 0..3 {
        robot.emit_tone(frequency_hz).await?;
        robot.delay(unit_ms * 3 / 12).await?;
        robot.stop_tone().await?;
        robot.delay(unit_ms / 12).await?;
    }
    Ok(())
}

/// "OK" in morse (--- -.-), played after a list finishes; ends on green
pub async fn play_ok_chime(
    robot: &mut dyn RobotInterface,
    frequency_hz: u32,
    unit_ms: u64,
) -> Result<()> {
    let dash = unit_ms * 3 / 12;
    let dot = unit_ms / 12;
    let gap = unit_ms / 12;

    for _ in 0..3 {
        robot.emit_tone(frequency_hz).await?;
        robot.delay(dash).await?;
        robot.stop_tone().await?;
        robot.delay(gap).await?;
    }
    robot.delay(gap).await?;
    for hold in [dash, dot, dash] {
        robot.emit_tone(frequency_hz).await?;
        robot.delay(hold).await?;
        robot.stop_tone().await?;
        robot.delay(gap).await?;
    }

    robot.set_indicator(0, 255, 0).await
}
