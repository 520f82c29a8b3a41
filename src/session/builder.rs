//! Interactive command list builder

use crate::console::{prompts, Operator};
use anyhow::Result;
use rover_shared::{BuildProgress, Command, CommandList, ListBuilder};
use tracing::info;

/// Collect tags until the operator enters `Done`, then ask for a name.
///
/// The name is free text: it may be empty or repeat another slot's name.
pub async fn build_list(operator: &mut dyn Operator) -> Result<CommandList> {
    prompts::header(operator, "New Command List").await?;
    operator.say("Valid Commands Are:").await?;
    operator.say(&Command::vocabulary()).await?;
    operator
        .say("Enter command \"Done\" to finish the list.")
        .await?;

    let mut builder = ListBuilder::new();
    loop {
        let command =
            prompts::ask_command(operator, "Enter a command to add to the list:").await?;
        if builder.push(command) == BuildProgress::Finished {
            break;
        }
    }

    let name = operator
        .ask("Enter a name for this command list:")
        .await?;
    let list = builder.finish(name);

    operator.say("").await?;
    operator
        .say(&format!("Creating list \"{}\" of inputs:", list.name))
        .await?;
    operator.say(&list.render_steps()).await?;

    info!("Built list \"{}\" with {} steps", list.name, list.len());
    Ok(list)
}
