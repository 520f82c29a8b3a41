//! The fixed four-slot command bank

use crate::limits::SLOT_COUNT;
use crate::list::CommandList;
use std::fmt;
use thiserror::Error;

/// Validated position in the bank (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(usize);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Slot {0} out of range (bank has {} slots)", SLOT_COUNT)]
pub struct SlotOutOfRange(pub usize);

impl Slot {
    /// Every slot in positional order
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..SLOT_COUNT).map(Slot)
    }

    pub fn new(index: usize) -> Result<Self, SlotOutOfRange> {
        if index < SLOT_COUNT {
            Ok(Slot(index))
        } else {
            Err(SlotOutOfRange(index))
        }
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// 1-based number shown in menus
    pub fn number(self) -> usize {
        self.0 + 1
    }
}

impl TryFrom<usize> for Slot {
    type Error = SlotOutOfRange;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Slot::new(index)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.number())
    }
}

/// Exactly [`SLOT_COUNT`] command lists with positional identity
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandBank {
    slots: [CommandList; SLOT_COUNT],
}

impl CommandBank {
    /// A bank with every slot at the placeholder list
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lists(slots: [CommandList; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    pub fn get(&self, slot: Slot) -> &CommandList {
        &self.slots[slot.index()]
    }

    /// Overwrite a whole slot, returning its previous list
    pub fn replace(&mut self, slot: Slot, list: CommandList) -> CommandList {
        std::mem::replace(&mut self.slots[slot.index()], list)
    }

    /// Slots paired with their lists, in order
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &CommandList)> {
        Slot::all().zip(self.slots.iter())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|list| list.name.as_str())
    }

    pub fn lists(&self) -> &[CommandList; SLOT_COUNT] {
        &self.slots
    }
}
