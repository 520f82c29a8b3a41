//! Execution parameter prompts

use crate::console::{prompts, Operator};
use anyhow::Result;
use rover_shared::{Clamped, ExecutionParameters};
use tracing::info;

async fn report_adjustment<T: Copy + std::fmt::Display>(
    operator: &mut dyn Operator,
    clamped: Clamped<T>,
) -> Result<T> {
    if clamped.was_adjusted() {
        operator
            .say(&format!(
                "Input out of range: setting value to {}.",
                clamped.value()
            ))
            .await?;
    }
    Ok(clamped.value())
}

/// Ask for speed, brightness and wait.
///
/// Out-of-range values are clamped with a notice; waits of ten seconds or
/// more must be confirmed or re-entered.
pub async fn ask_parameters(operator: &mut dyn Operator) -> Result<ExecutionParameters> {
    prompts::header(operator, "Command Parameters").await?;

    let raw = prompts::ask_integer(operator, "Enter motor speed [0-100]:").await?;
    let motor_speed =
        report_adjustment(operator, ExecutionParameters::clamp_motor_speed(raw)).await?;

    let raw = prompts::ask_integer(operator, "Enter LED brightness [0-255]:").await?;
    let led_brightness =
        report_adjustment(operator, ExecutionParameters::clamp_led_brightness(raw)).await?;

    let wait_ms = loop {
        let raw = prompts::ask_integer(operator, "Enter wait time [ms]:").await?;
        let wait_ms = report_adjustment(operator, ExecutionParameters::clamp_wait_ms(raw)).await?;

        if !ExecutionParameters::is_long_wait(wait_ms)
            || prompts::ask_bool(
                operator,
                "Are you sure you'd like to set wait to 10 seconds or more? [Y/N]",
            )
            .await?
        {
            break wait_ms;
        }
    };

    let params = ExecutionParameters::new(motor_speed, led_brightness, wait_ms);
    info!(
        "Parameters set: speed={} brightness={} wait={}ms",
        params.motor_speed, params.led_brightness, params.wait_ms
    );
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::scripted::ScriptedOperator;

    #[tokio::test]
    async fn test_in_range_values() {
        let mut op = ScriptedOperator::new(["50", "100", "200"]);
        let params = ask_parameters(&mut op).await.unwrap();
        assert_eq!(params, ExecutionParameters::new(50, 100, 200));
        assert!(!op.saw("out of range"));
    }

    #[tokio::test]
    async fn test_values_are_clamped() {
        let mut op = ScriptedOperator::new(["150", "-4", "-10"]);
        let params = ask_parameters(&mut op).await.unwrap();
        assert_eq!(params, ExecutionParameters::new(100, 0, 0));
        assert!(op.saw("Input out of range: setting value to 100."));
        assert!(op.saw("Input out of range: setting value to 0."));
    }

    #[tokio::test]
    async fn test_long_wait_needs_confirmation() {
        // Declined once, re-entered, then a confirmed long wait
        let mut op = ScriptedOperator::new(["20", "30", "15000", "n", "12000", "y"]);
        let params = ask_parameters(&mut op).await.unwrap();
        assert_eq!(params.wait_ms, 12_000);
        assert_eq!(op.remaining(), 0);
    }
}
