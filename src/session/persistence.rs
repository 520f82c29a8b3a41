//! Saving and loading the command bank
//!
//! Both directions ask for confirmation first. Failures are shown to the
//! operator and leave the in-memory bank exactly as it was.

use super::SessionState;
use crate::console::{prompts, Operator};
use anyhow::{Context, Result};
use rover_shared::{codec, CommandBank, DecodedBank, TokenPolicy};
use std::path::Path;
use tracing::{error, info, warn};

/// What a save request ended in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Declined,
    Failed,
}

/// What a load request ended in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Bank replaced; `fallbacks` tokens were substituted
    Loaded { fallbacks: usize },
    Declined,
    Failed,
}

/// Encode the bank and replace the file at `path`, creating its directory
pub async fn write_bank_file(path: &Path, bank: &CommandBank) -> Result<()> {
    let text = codec::encode(bank)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to replace {}", path.display()));
        }
    }

    tokio::fs::write(path, &text)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("[STORE] Wrote command bank to {}", path.display());
    Ok(())
}

/// Read and decode the file at `path`
pub async fn read_bank_file(path: &Path, policy: TokenPolicy) -> Result<DecodedBank> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let decoded = codec::decode(&text, policy)?;
    for fallback in &decoded.fallbacks {
        warn!(
            "[STORE] Unrecognised command {:?} on line {} of {} loaded as {}",
            fallback.token,
            fallback.line,
            path.display(),
            fallback.substituted
        );
    }

    info!("[STORE] Read command bank from {}", path.display());
    Ok(decoded)
}

/// Confirm with the operator, then overwrite the saved bank
pub async fn save_bank(
    operator: &mut dyn Operator,
    bank: &CommandBank,
    path: &Path,
) -> Result<SaveOutcome> {
    prompts::header(operator, "Saving Commands List").await?;
    operator
        .say("You are about to overwrite your saved command list.")
        .await?;
    if !prompts::ask_bool(operator, "Would you like to continue? [Y/N]").await? {
        return Ok(SaveOutcome::Declined);
    }

    let outcome = match write_bank_file(path, bank).await {
        Ok(_) => {
            for (_, list) in bank.iter() {
                operator
                    .say(&format!("Wrote command list \"{}\".", list.render_steps()))
                    .await?;
            }
            for name in bank.names() {
                operator
                    .say(&format!("Wrote command name \"{}\".", name))
                    .await?;
            }
            operator.say("Write complete.").await?;
            SaveOutcome::Saved
        }
        Err(e) => {
            error!("[STORE] Save failed: {:#}", e);
            operator.say(&format!("Save failed: {:#}", e)).await?;
            SaveOutcome::Failed
        }
    };

    prompts::continue_prompt(operator).await?;
    Ok(outcome)
}

/// Confirm with the operator, then replace the live bank from disk
pub async fn load_bank(
    operator: &mut dyn Operator,
    state: &mut SessionState,
    path: &Path,
    policy: TokenPolicy,
) -> Result<LoadOutcome> {
    prompts::header(operator, "Loading Commands List").await?;
    operator
        .say("You are about to overwrite your current command list.")
        .await?;
    if !prompts::ask_bool(operator, "Would you like to continue? [Y/N]").await? {
        return Ok(LoadOutcome::Declined);
    }

    let outcome = match read_bank_file(path, policy).await {
        Ok(decoded) => {
            for fallback in &decoded.fallbacks {
                operator
                    .say(&format!(
                        "Warning: unrecognised command \"{}\" in list {} was loaded as {}.",
                        fallback.token, fallback.slot, fallback.substituted
                    ))
                    .await?;
            }
            for (slot, list) in decoded.bank.iter() {
                operator
                    .say(&format!(
                        "Built list {} \"{}\": {}",
                        slot,
                        list.name,
                        list.render_steps()
                    ))
                    .await?;
            }
            operator.say("Read complete.").await?;

            let fallbacks = decoded.fallbacks.len();
            state.bank = decoded.bank;
            LoadOutcome::Loaded { fallbacks }
        }
        Err(e) => {
            error!("[STORE] Load failed: {:#}", e);
            operator
                .say(&format!(
                    "Load failed: {:#}. Your current command lists were left unchanged.",
                    e
                ))
                .await?;
            LoadOutcome::Failed
        }
    };

    prompts::continue_prompt(operator).await?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::scripted::ScriptedOperator;
    use rover_shared::{CodecError, Command, CommandList, Slot};
    use tempfile::TempDir;

    fn sample_bank() -> CommandBank {
        CommandBank::from_lists([
            CommandList::new("square", vec![Command::MoveForward, Command::TurnRight, Command::Done]),
            CommandList::new("blink", vec![Command::LedOn, Command::Wait, Command::LedOff, Command::Done]),
            CommandList::default(),
            CommandList::new("probe", vec![Command::GetLight, Command::GetTemperature, Command::Done]),
        ])
    }

    #[tokio::test]
    async fn test_write_then_read_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Data").join("Commands.txt");

        write_bank_file(&path, &sample_bank()).await.unwrap();
        let decoded = read_bank_file(&path, TokenPolicy::Strict).await.unwrap();

        assert_eq!(decoded.bank, sample_bank());
    }

    #[tokio::test]
    async fn test_write_replaces_previous_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Commands.txt");
        std::fs::write(&path, "old\nstuff\nthat\nis\nmuch\nlonger\nthan\neight\nlines\n").unwrap();

        write_bank_file(&path, &CommandBank::new()).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 8);
    }

    #[tokio::test]
    async fn test_save_declined_leaves_disk_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Commands.txt");
        let mut op = ScriptedOperator::new(["n"]);

        let outcome = save_bank(&mut op, &sample_bank(), &path).await.unwrap();

        assert_eq!(outcome, SaveOutcome::Declined);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_save_confirmed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Commands.txt");
        let mut op = ScriptedOperator::new(["y", ""]);

        let outcome = save_bank(&mut op, &sample_bank(), &path).await.unwrap();

        assert_eq!(outcome, SaveOutcome::Saved);
        assert!(op.saw("Wrote command list \"MoveForward, TurnRight, Done\"."));
        assert!(op.saw("Wrote command name \"probe\"."));
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("MoveForward, TurnRight, Done\n"));
    }

    #[tokio::test]
    async fn test_load_replaces_bank() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Commands.txt");
        write_bank_file(&path, &sample_bank()).await.unwrap();

        let mut state = SessionState::default();
        let mut op = ScriptedOperator::new(["y", ""]);
        let outcome = load_bank(&mut op, &mut state, &path, TokenPolicy::Lenient)
            .await
            .unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded { fallbacks: 0 });
        assert_eq!(state.bank, sample_bank());
    }

    #[tokio::test]
    async fn test_load_short_file_keeps_bank() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Commands.txt");
        std::fs::write(&path, "Done\nDone\nDone\nDone\nonly-one-name\n").unwrap();

        let mut state = SessionState {
            bank: sample_bank(),
            ..Default::default()
        };
        let mut op = ScriptedOperator::new(["y", ""]);
        let outcome = load_bank(&mut op, &mut state, &path, TokenPolicy::Lenient)
            .await
            .unwrap();

        assert!(matches!(outcome, LoadOutcome::Failed));
        assert_eq!(state.bank, sample_bank());
        assert!(op.saw("left unchanged"));

        let err = read_bank_file(&path, TokenPolicy::Lenient).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<CodecError>(),
            Some(&CodecError::MissingLines { found: 5 })
        );
    }

    #[tokio::test]
    async fn test_load_missing_file_keeps_bank() {
        let dir = TempDir::new().unwrap();
        let mut state = SessionState {
            bank: sample_bank(),
            ..Default::default()
        };
        let mut op = ScriptedOperator::new(["y", ""]);

        let outcome = load_bank(&mut op, &mut state, &dir.path().join("nope.txt"), TokenPolicy::Lenient)
            .await
            .unwrap();

        assert!(matches!(outcome, LoadOutcome::Failed));
        assert_eq!(state.bank, sample_bank());
    }

    #[tokio::test]
    async fn test_load_declined_keeps_bank() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Commands.txt");
        write_bank_file(&path, &CommandBank::new()).await.unwrap();

        let mut state = SessionState {
            bank: sample_bank(),
            ..Default::default()
        };
        let mut op = ScriptedOperator::new(["n"]);
        let outcome = load_bank(&mut op, &mut state, &path, TokenPolicy::Lenient)
            .await
            .unwrap();

        assert_eq!(outcome, LoadOutcome::Declined);
        assert_eq!(state.bank, sample_bank());
    }

    #[tokio::test]
    async fn test_load_reports_fallbacks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Commands.txt");
        std::fs::write(&path, "Wait, Hover, Done\nDone\nDone\nDone\na\nb\nc\nd\n").unwrap();

        let mut state = SessionState::default();
        let mut op = ScriptedOperator::new(["y", ""]);
        let outcome = load_bank(&mut op, &mut state, &path, TokenPolicy::Lenient)
            .await
            .unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded { fallbacks: 1 });
        assert_eq!(
            state.bank.get(Slot::new(0).unwrap()).steps,
            vec![Command::Wait, Command::MoveForward, Command::Done]
        );
        assert!(op.saw("unrecognised command \"Hover\" in list #1 was loaded as MoveForward"));
    }

    #[tokio::test]
    async fn test_strict_policy_rejects_unknown_tokens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Commands.txt");
        std::fs::write(&path, "Wait, Hover, Done\nDone\nDone\nDone\na\nb\nc\nd\n").unwrap();

        let mut state = SessionState::default();
        let mut op = ScriptedOperator::new(["y", ""]);
        let outcome = load_bank(&mut op, &mut state, &path, TokenPolicy::Strict)
            .await
            .unwrap();

        assert!(matches!(outcome, LoadOutcome::Failed));
        assert_eq!(state.bank, CommandBank::new());
    }
}
