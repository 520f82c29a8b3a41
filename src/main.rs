mod config;
mod console;
mod engine;
mod robot;
mod session;

use config::ConsoleConfig;
use console::{prompts, InputClosed, Operator, StdConsole};
use robot::{RobotInterface, SimulatedRobot};
use session::Session;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing; stdout belongs to the operator
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = ConsoleConfig::from_env()?;
    info!("Rover console starting");
    info!("  Command bank: {}", config.data_path.display());
    info!("  Token policy: {:?}", config.token_policy);
    if config.engine.beep_hold_scale != engine::LEGACY_BEEP_HOLD_SCALE {
        info!("  Beep hold scale: {}", config.engine.beep_hold_scale);
    }

    let robot = SimulatedRobot::new(config.robot.clone());
    let mut session = Session::new(config, robot, StdConsole::new());

    welcome(session.operator_mut()).await?;

    match session.run().await {
        Ok(()) => closing(session.operator_mut()).await?,
        Err(e) if e.downcast_ref::<InputClosed>().is_some() => {
            warn!("Operator input closed, ending session");
            if session.state().robot_connected {
                session.robot_mut().disconnect().await?;
            }
        }
        Err(e) => return Err(e),
    }

    info!(
        "Rover console stopped after {}ms of robot time",
        session.robot().elapsed_ms()
    );
    Ok(())
}

async fn welcome(operator: &mut dyn Operator) -> Result<()> {
    prompts::header(operator, "Rover Control").await?;
    operator
        .say("This application lets you program a rover with lists of simple commands.")
        .await?;
    prompts::continue_prompt(operator).await
}

async fn closing(operator: &mut dyn Operator) -> Result<()> {
    prompts::header(operator, "Goodbye").await?;
    operator
        .say("Thank you for using the rover console.")
        .await
}
