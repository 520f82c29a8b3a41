//! Command lists and the incremental list builder

use crate::command::Command;
use crate::limits;
use std::fmt;

/// A named, ordered sequence of command tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandList {
    pub name: String,
    pub steps: Vec<Command>,
}

impl Default for CommandList {
    /// Placeholder list: a single `Done` step named `---`
    fn default() -> Self {
        Self {
            name: limits::PLACEHOLDER_NAME.to_string(),
            steps: vec![Command::Done],
        }
    }
}

impl CommandList {
    /// Create a list from an explicit name and step sequence.
    ///
    /// No terminator check is made: a `Done` that is not the final step is kept
    /// exactly where it is.
    pub fn new(name: impl Into<String>, steps: Vec<Command>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Whether the list is still the untouched placeholder
    pub fn is_placeholder(&self) -> bool {
        *self == Self::default()
    }

    /// Steps joined with `", "`, the same rendering the codec persists
    pub fn render_steps(&self) -> String {
        self.steps
            .iter()
            .map(|cmd| cmd.name())
            .collect::<Vec<_>>()
            .join(limits::STEP_SEPARATOR)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for CommandList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\": {}", self.name, self.render_steps())
    }
}

/// Whether the builder wants more input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildProgress {
    /// Keep collecting tags
    Collecting,
    /// A `Done` has been appended; prompt for the name next
    Finished,
}

/// Accumulates tags until the first `Done`
#[derive(Debug, Default, Clone)]
pub struct ListBuilder {
    steps: Vec<Command>,
}

impl ListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tag. `Done` is appended too and ends collection.
    pub fn push(&mut self, command: Command) -> BuildProgress {
        self.steps.push(command);
        self.progress()
    }

    pub fn progress(&self) -> BuildProgress {
        if self.steps.iter().any(|cmd| cmd.is_terminator()) {
            BuildProgress::Finished
        } else {
            BuildProgress::Collecting
        }
    }

    pub fn steps(&self) -> &[Command] {
        &self.steps
    }

    /// Name the collected steps
    pub fn finish(self, name: impl Into<String>) -> CommandList {
        CommandList::new(name, self.steps)
    }
}
