//! Command executor - checks parameters and dispatches command lists

use super::handlers::{self, HandlerContext};
use super::{EngineConfig, SensorReading, StepOutcome};
use crate::console::{prompts, Operator};
use crate::robot::RobotInterface;
use rover_shared::{Command, CommandList, ExecutionParameters, PreconditionError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why an execution stopped early
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// Parameters not set; nothing was sent to the robot
    #[error("Command parameters have not been set or are invalid: {0}")]
    PreconditionUnmet(#[from] PreconditionError),

    /// A robot call failed part way through a pass
    #[error("Robot failed while executing {command}: {message}")]
    Robot { command: Command, message: String },

    /// The operator could not be reached (usually closed input)
    #[error(transparent)]
    Operator(anyhow::Error),
}

/// Summary of a finished execution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionReport {
    /// Complete passes over the list
    pub passes: u32,
    /// Steps dispatched across all passes, `Done` included
    pub steps_dispatched: usize,
    /// Every sensor value reported, in order
    pub readings: Vec<SensorReading>,
}

/// Executes command lists against a robot
#[derive(Debug, Clone, Default)]
pub struct Executor {
    config: EngineConfig,
}

impl Executor {
    /// Create a new command executor
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run a list until the operator stops asking for repeats.
    ///
    /// Refuses to start, without touching the robot, unless motor speed and
    /// wait are both non-zero. Every step is dispatched on every pass,
    /// including steps after a non-final `Done`.
    pub async fn execute(
        &self,
        robot: &mut dyn RobotInterface,
        operator: &mut dyn Operator,
        list: &CommandList,
        params: &ExecutionParameters,
    ) -> Result<ExecutionReport, ExecutionError> {
        if let Err(e) = params.ensure_runnable() {
            warn!("[ENGINE] Refusing to execute \"{}\": {}", list.name, e);
            return Err(e.into());
        }

        info!(
            "[ENGINE] Executing list \"{}\" ({} steps) speed={} brightness={} wait={}ms",
            list.name,
            list.len(),
            params.motor_speed,
            params.led_brightness,
            params.wait_ms
        );

        self.show_overview(operator, list)
            .await
            .map_err(ExecutionError::Operator)?;

        let mut report = ExecutionReport::default();
        loop {
            self.run_pass(robot, operator, list, params, &mut report)
                .await?;
            report.passes += 1;

            operator.say("").await.map_err(ExecutionError::Operator)?;
            let repeat =
                prompts::ask_bool(operator, "Would you like to repeat the command list? [Y/N]")
                    .await
                    .map_err(ExecutionError::Operator)?;

            if !repeat {
                break;
            }
            debug!("[ENGINE] Repeating \"{}\"", list.name);
        }

        info!(
            "[ENGINE] Finished \"{}\": {} pass(es), {} step(s)",
            list.name, report.passes, report.steps_dispatched
        );
        Ok(report)
    }

    /// Dispatch every step of the list once
    pub async fn run_pass(
        &self,
        robot: &mut dyn RobotInterface,
        operator: &mut dyn Operator,
        list: &CommandList,
        params: &ExecutionParameters,
        report: &mut ExecutionReport,
    ) -> Result<(), ExecutionError> {
        let ctx = HandlerContext {
            params: *params,
            config: self.config,
        };

        for &command in &list.steps {
            debug!("[ENGINE] Executing command \"{}\"", command);

            let outcome = self
                .dispatch(&ctx, robot, command)
                .await
                .map_err(|e| ExecutionError::Robot {
                    command,
                    message: format!("{:#}", e),
                })?;
            report.steps_dispatched += 1;

            let shown = match outcome {
                StepOutcome::Completed { message } => {
                    debug!("[ENGINE]   {}", message);
                    format!("Executing command \"{}\"", command)
                }
                StepOutcome::Reading(reading) => {
                    info!("[ENGINE]   {}", reading);
                    report.readings.push(reading);
                    reading.to_string()
                }
                StepOutcome::EndOfCommands => "End of commands.".to_string(),
            };
            operator
                .say(&shown)
                .await
                .map_err(ExecutionError::Operator)?;
        }

        Ok(())
    }

    /// Dispatch a single step to its handler
    pub async fn dispatch(
        &self,
        ctx: &HandlerContext,
        robot: &mut dyn RobotInterface,
        command: Command,
    ) -> anyhow::Result<StepOutcome> {
        match command {
            Command::MoveForward => handlers::handle_move_forward(ctx, robot).await,
            Command::MoveBackward => handlers::handle_move_backward(ctx, robot).await,
            Command::StopMotors => handlers::handle_stop_motors(ctx, robot).await,
            Command::Wait => handlers::handle_wait(ctx, robot).await,
            Command::TurnRight => handlers::handle_turn_right(ctx, robot).await,
            Command::TurnLeft => handlers::handle_turn_left(ctx, robot).await,
            Command::LedOn => handlers::handle_led_on(ctx, robot).await,
            Command::LedOff => handlers::handle_led_off(ctx, robot).await,
            Command::GetTemperature => handlers::handle_get_temperature(ctx, robot).await,
            Command::GetLight => handlers::handle_get_light(ctx, robot).await,
            Command::PlayBeep => handlers::handle_play_beep(ctx, robot).await,
            Command::March => handlers::handle_march(ctx, robot).await,
            Command::Done => Ok(StepOutcome::EndOfCommands),
        }
    }

    async fn show_overview(
        &self,
        operator: &mut dyn Operator,
        list: &CommandList,
    ) -> anyhow::Result<()> {
        prompts::header(operator, "Execute Command List").await?;
        operator
            .say(&format!(
                "The robot is about to execute the command list \"{}\".",
                list.name
            ))
            .await?;
        operator.say("Overview of command list:").await?;
        operator.say("").await?;
        operator.say(&list.render_steps()).await?;
        prompts::continue_prompt(operator).await
    }
}
