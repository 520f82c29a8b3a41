//! Validated prompts
//!
//! Every helper re-prompts until the operator gives acceptable input; only a
//! closed input stream ends the loop with an error.

use super::Operator;
use anyhow::Result;
use rover_shared::Command;

/// Clear a line and print a centred title
pub async fn header(operator: &mut dyn Operator, title: &str) -> Result<()> {
    operator.say("").await?;
    operator.say(&format!("\t\t{}", title)).await?;
    operator.say("").await
}

pub async fn continue_prompt(operator: &mut dyn Operator) -> Result<()> {
    operator.say("").await?;
    operator.ask("Press Enter to continue.").await?;
    Ok(())
}

pub async fn error_message(operator: &mut dyn Operator, extra: &str) -> Result<()> {
    operator.say(&format!("Invalid input. {}", extra)).await
}

/// Ask until the input parses as an integer
pub async fn ask_integer(operator: &mut dyn Operator, prompt: &str) -> Result<i64> {
    loop {
        let input = operator.ask(prompt).await?;
        match input.trim().parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => error_message(operator, "Please enter a whole number.").await?,
        }
    }
}

/// Ask a yes/no question; only the first character counts
pub async fn ask_bool(operator: &mut dyn Operator, prompt: &str) -> Result<bool> {
    loop {
        let input = operator.ask(prompt).await?;
        match input.trim().chars().next() {
            Some('Y' | 'y') => return Ok(true),
            Some('N' | 'n') => return Ok(false),
            _ => error_message(operator, "Valid inputs are Y or N.").await?,
        }
    }
}

/// Ask until the input names a command tag (case-insensitive)
pub async fn ask_command(operator: &mut dyn Operator, prompt: &str) -> Result<Command> {
    loop {
        let input = operator.ask(prompt).await?;
        match input.parse::<Command>() {
            Ok(command) => return Ok(command),
            Err(_) => {
                error_message(
                    operator,
                    &format!("Valid inputs are: {}", Command::vocabulary()),
                )
                .await?
            }
        }
    }
}

/// Map a menu key to a 0-based option index.
///
/// `1..=count` and `a..` select by position; `q` selects the last option,
/// which is always the way out of a menu.
pub fn menu_index(key: char, count: usize) -> Option<usize> {
    let key = key.to_ascii_lowercase();
    let index = match key {
        'q' => return count.checked_sub(1),
        '1'..='9' => key as usize - '1' as usize,
        'a'..='p' => key as usize - 'a' as usize,
        _ => return None,
    };
    (index < count).then_some(index)
}

/// Show numbered options and read one selection. Unknown keys return `None`.
pub async fn ask_menu(
    operator: &mut dyn Operator,
    title: &str,
    intro: &str,
    options: &[String],
) -> Result<Option<usize>> {
    header(operator, title).await?;
    operator.say(intro).await?;
    operator.say("").await?;
    for (i, option) in options.iter().enumerate() {
        operator.say(&format!("{}. {}", i + 1, option)).await?;
    }

    let input = operator.ask("").await?;
    Ok(input
        .trim()
        .chars()
        .next()
        .and_then(|key| menu_index(key, options.len())))
}
