//! Connect and disconnect handshakes

use crate::config::CONNECT_ATTEMPTS;
use crate::console::{prompts, Operator};
use crate::engine::handlers::play_triplet_beep;
use crate::robot::RobotInterface;
use anyhow::Result;
use tracing::{info, warn};

/// Indicator colour shown once the robot answers
const CONNECTED_COLOR: (i32, i32, i32) = (0, 255, 0);

/// Frequency and unit of the triplet beep played on connect
const CONNECT_BEEP_HZ: u32 = 500;
const CONNECT_BEEP_UNIT_MS: u64 = 500;

/// Try to reach the robot, up to `CONNECT_ATTEMPTS` times.
///
/// On success the indicator turns green and the robot beeps three times.
/// Returns whether the robot is now connected.
pub async fn connect_robot(
    robot: &mut dyn RobotInterface,
    operator: &mut dyn Operator,
) -> Result<bool> {
    prompts::header(operator, "Connect").await?;

    for attempt in 1..=CONNECT_ATTEMPTS {
        operator.say("Connecting...").await?;

        let connected = match robot.connect().await {
            Ok(connected) => connected,
            Err(e) => {
                warn!("[ROBOT] Connect attempt {} failed: {:#}", attempt, e);
                false
            }
        };

        if connected {
            info!("[ROBOT] Connected to {} robot", robot.name());
            let (red, green, blue) = CONNECTED_COLOR;
            robot.set_indicator(red, green, blue).await?;
            play_triplet_beep(robot, CONNECT_BEEP_HZ, CONNECT_BEEP_UNIT_MS).await?;
            operator.say("Connected.").await?;
            prompts::continue_prompt(operator).await?;
            return Ok(true);
        }

        let left = CONNECT_ATTEMPTS - attempt;
        operator.say("Could not connect.").await?;
        if left == 0 {
            break;
        }
        let retry = prompts::ask_bool(
            operator,
            &format!("Try again? You may attempt {} more time(s). [Y/N]", left),
        )
        .await?;
        if !retry {
            break;
        }
    }

    warn!("[ROBOT] Giving up on connecting to {} robot", robot.name());
    prompts::continue_prompt(operator).await?;
    Ok(false)
}

/// Confirm, then disconnect. Returns whether the robot is still connected.
pub async fn disconnect_robot(
    robot: &mut dyn RobotInterface,
    operator: &mut dyn Operator,
) -> Result<bool> {
    prompts::header(operator, "Disconnect").await?;
    if !prompts::ask_bool(operator, "Are you sure you want to disconnect? [Y/N]").await? {
        return Ok(true);
    }

    robot.disconnect().await?;
    info!("[ROBOT] Disconnected from {} robot", robot.name());
    operator.say("Disconnected.").await?;
    prompts::continue_prompt(operator).await?;
    Ok(false)
}
