//! Main and User Programming menus

use super::{
    ask_parameters, build_list, connect_robot, disconnect_robot, load_bank, save_bank,
    LoadOutcome, SaveOutcome, Session,
};
use crate::config::CHIME_UNIT_MS;
use crate::console::{prompts, Operator};
use crate::engine::handlers::play_ok_chime;
use crate::engine::ExecutionError;
use crate::robot::RobotInterface;
use anyhow::Result;
use rover_shared::Slot;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    Connect,
    UserProgramming,
    Disconnect,
    Quit,
}

impl MainChoice {
    const ALL: [MainChoice; 4] = [
        MainChoice::Connect,
        MainChoice::UserProgramming,
        MainChoice::Disconnect,
        MainChoice::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MainChoice::Connect => "Connect Robot",
            MainChoice::UserProgramming => "User Programming",
            MainChoice::Disconnect => "Disconnect Robot",
            MainChoice::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProgrammingChoice {
    SetParameters,
    CreateList,
    ViewList,
    ExecuteList,
    Save,
    Load,
    Quit,
}

impl ProgrammingChoice {
    const ALL: [ProgrammingChoice; 7] = [
        ProgrammingChoice::SetParameters,
        ProgrammingChoice::CreateList,
        ProgrammingChoice::ViewList,
        ProgrammingChoice::ExecuteList,
        ProgrammingChoice::Save,
        ProgrammingChoice::Load,
        ProgrammingChoice::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            ProgrammingChoice::SetParameters => "Set Command Parameters",
            ProgrammingChoice::CreateList => "Create Command List",
            ProgrammingChoice::ViewList => "View Command List",
            ProgrammingChoice::ExecuteList => "Execute Command List",
            ProgrammingChoice::Save => "Save Command List",
            ProgrammingChoice::Load => "Load Command List",
            ProgrammingChoice::Quit => "Quit",
        }
    }
}

const NOT_CONNECTED: &str = "The robot is not connected. Please connect first.";

impl<R: RobotInterface, O: Operator> Session<R, O> {
    /// Run the main menu until the operator quits.
    ///
    /// Quitting is refused while the robot is connected.
    pub async fn run(&mut self) -> Result<()> {
        let options: Vec<String> = MainChoice::ALL
            .iter()
            .map(|c| c.label().to_string())
            .collect();

        loop {
            let choice = prompts::ask_menu(
                &mut self.operator,
                "Main Menu",
                "Please select a menu option.",
                &options,
            )
            .await?
            .map(|i| MainChoice::ALL[i]);

            let Some(choice) = choice else {
                prompts::error_message(&mut self.operator, "Please select a listed option.")
                    .await?;
                continue;
            };

            match choice {
                MainChoice::Connect if self.state.robot_connected => {
                    self.operator
                        .say("The robot is already connected.")
                        .await?;
                    prompts::continue_prompt(&mut self.operator).await?;
                }
                MainChoice::Connect => {
                    self.state.robot_connected =
                        connect_robot(&mut self.robot, &mut self.operator).await?;
                }
                MainChoice::UserProgramming | MainChoice::Disconnect
                    if !self.state.robot_connected =>
                {
                    self.operator.say(NOT_CONNECTED).await?;
                    prompts::continue_prompt(&mut self.operator).await?;
                }
                MainChoice::UserProgramming => self.user_programming().await?,
                MainChoice::Disconnect => {
                    self.state.robot_connected =
                        disconnect_robot(&mut self.robot, &mut self.operator).await?;
                }
                MainChoice::Quit if self.state.robot_connected => {
                    self.operator
                        .say("Please disconnect the robot before exiting.")
                        .await?;
                    prompts::continue_prompt(&mut self.operator).await?;
                }
                MainChoice::Quit => {
                    info!("Operator quit the session");
                    return Ok(());
                }
            }
        }
    }

    /// The User Programming menu. State persists between visits.
    async fn user_programming(&mut self) -> Result<()> {
        let options: Vec<String> = ProgrammingChoice::ALL
            .iter()
            .map(|c| c.label().to_string())
            .collect();

        loop {
            let choice = prompts::ask_menu(
                &mut self.operator,
                "User Programming",
                "Please select a menu option.",
                &options,
            )
            .await?
            .map(|i| ProgrammingChoice::ALL[i]);

            let Some(choice) = choice else {
                prompts::error_message(&mut self.operator, "Please select a listed option.")
                    .await?;
                continue;
            };

            match choice {
                ProgrammingChoice::SetParameters => {
                    self.state.params = ask_parameters(&mut self.operator).await?;
                }
                ProgrammingChoice::CreateList => self.create_list().await?,
                ProgrammingChoice::ViewList => self.view_list().await?,
                ProgrammingChoice::ExecuteList => self.execute_list().await?,
                ProgrammingChoice::Save => {
                    let outcome =
                        save_bank(&mut self.operator, &self.state.bank, &self.config.data_path)
                            .await?;
                    if outcome == SaveOutcome::Declined {
                        info!("Save declined by operator");
                    }
                }
                ProgrammingChoice::Load => {
                    let outcome = load_bank(
                        &mut self.operator,
                        &mut self.state,
                        &self.config.data_path,
                        self.config.token_policy,
                    )
                    .await?;
                    match outcome {
                        LoadOutcome::Loaded { fallbacks } if fallbacks > 0 => {
                            warn!("Loaded bank with {} substituted command(s)", fallbacks);
                        }
                        LoadOutcome::Declined => info!("Load declined by operator"),
                        _ => {}
                    }
                }
                ProgrammingChoice::Quit => return Ok(()),
            }
        }
    }

    /// Offer the four slots by name plus Quit. Unknown keys re-show the menu.
    async fn select_slot(&mut self, title: &str, intro: &str) -> Result<Option<Slot>> {
        let mut options: Vec<String> = self.state.bank.names().map(str::to_string).collect();
        options.push("Quit".to_string());

        loop {
            let picked = prompts::ask_menu(&mut self.operator, title, intro, &options).await?;
            match picked {
                Some(i) if i + 1 == options.len() => return Ok(None),
                Some(i) => return Ok(Slot::new(i).ok()),
                None => continue,
            }
        }
    }

    async fn create_list(&mut self) -> Result<()> {
        loop {
            let Some(slot) = self
                .select_slot("Create New List", "Please select a list to overwrite.")
                .await?
            else {
                return Ok(());
            };

            let list = build_list(&mut self.operator).await?;
            info!("Stored list \"{}\" in slot {}", list.name, slot);
            self.state.bank.replace(slot, list);
            prompts::continue_prompt(&mut self.operator).await?;
        }
    }

    async fn view_list(&mut self) -> Result<()> {
        loop {
            let Some(slot) = self
                .select_slot("View Command List", "Please select a list to view.")
                .await?
            else {
                return Ok(());
            };

            let list = self.state.bank.get(slot);
            let steps = list.render_steps();
            self.operator.say("").await?;
            self.operator
                .say("This list contains the commands:")
                .await?;
            self.operator.say("").await?;
            self.operator.say(&steps).await?;
            prompts::continue_prompt(&mut self.operator).await?;
        }
    }

    async fn execute_list(&mut self) -> Result<()> {
        loop {
            let Some(slot) = self
                .select_slot("Execute Command List", "Please select a list to execute.")
                .await?
            else {
                return Ok(());
            };

            let result = self
                .executor
                .execute(
                    &mut self.robot,
                    &mut self.operator,
                    self.state.bank.get(slot),
                    &self.state.params,
                )
                .await;

            match result {
                Ok(report) => {
                    info!(
                        "Slot {} finished after {} pass(es) with {} reading(s)",
                        slot,
                        report.passes,
                        report.readings.len()
                    );
                    prompts::continue_prompt(&mut self.operator).await?;
                    if self.config.completion_chime {
                        let tone_hz = self.executor.config().tone_hz;
                        if let Err(e) = play_ok_chime(&mut self.robot, tone_hz, CHIME_UNIT_MS).await
                        {
                            warn!("[ROBOT] Completion chime failed: {:#}", e);
                        }
                    }
                }
                Err(ExecutionError::PreconditionUnmet(_)) => {
                    self.operator
                        .say("Command parameters have not been set or are invalid. Please reset parameters.")
                        .await?;
                    prompts::continue_prompt(&mut self.operator).await?;
                }
                Err(e @ ExecutionError::Robot { .. }) => {
                    error!("[ENGINE] {}", e);
                    self.operator
                        .say(&format!("Execution stopped: {}", e))
                        .await?;
                    prompts::continue_prompt(&mut self.operator).await?;
                }
                Err(ExecutionError::Operator(e)) => return Err(e),
            }
        }
    }
}
