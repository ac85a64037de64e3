//! Parsed commands and their execution against a [`SimulationState`].

use std::fmt;

use log::trace;
use satchel_foundation::{ItemStack, ItemStackArg, ItemType, MetaOption, RemoveArg, Result};
use satchel_inventory::{GameFlag, SimulationState};

use crate::code_block::CodeBlock;

/// Why a line did not produce an executable command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CmdErr {
    /// The line is a command.
    #[default]
    None,
    /// No command keyword matched.
    Ast,
    /// A keyword matched but the rest of the line did not.
    Guess,
    /// Unknown super command.
    Parse,
    /// The command parsed but failed to run.
    Execute,
}

impl fmt::Display for CmdErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Ast => "unknown command",
            Self::Guess => "malformed command",
            Self::Parse => "unknown super command",
            Self::Execute => "execution error",
        };
        f.write_str(name)
    }
}

/// Trials that strip the inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trial {
    /// Eventide Island.
    Eventide,
    /// Trial of the Sword.
    TrialOfTheSword,
}

impl Trial {
    /// Parses a trial name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "eventide" => Some(Self::Eventide),
            "tots" => Some(Self::TrialOfTheSword),
            _ => None,
        }
    }
}

/// What a command does.
///
/// Slot numbers are stored 1-based as written; swap indices are 0-based.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandKind {
    /// Empty line or comment.
    Nop,
    /// A line that did not parse, with messages for the user.
    Hint {
        /// Why.
        cmd_err: CmdErr,
        /// Error messages followed by usage.
        messages: Vec<String>,
    },
    /// `initialize <stacks>`
    Initialize(Vec<ItemStackArg>),
    /// `initialize gamedata <stacks>`
    InitGameData(Vec<ItemStackArg>),
    /// `get <stacks>`
    Add(Vec<ItemStackArg>),
    /// `remove <stacks> [from slot N]`, `eat ...`
    Remove {
        /// What to remove.
        stacks: Vec<RemoveArg>,
        /// 1-based start slot.
        slot: usize,
        /// Eating treats food as stackable.
        eat: bool,
    },
    /// `dnp <stacks> [from slot N]`
    DropAndPickUp {
        /// What to drop and pick back up.
        stacks: Vec<RemoveArg>,
        /// 1-based start slot.
        slot: usize,
    },
    /// `remove all <type>`
    RemoveAll(Vec<ItemType>),
    /// `equip <item> [in slot N]`
    Equip {
        /// The item.
        stack: ItemStack,
        /// 1-based occurrence.
        slot: usize,
    },
    /// `unequip <item> [in slot N]`
    Unequip {
        /// The item.
        stack: ItemStack,
        /// 1-based occurrence, or none for the first equipped one.
        slot: Option<usize>,
    },
    /// `unequip all <type>`
    UnequipAll(Vec<ItemType>),
    /// `shoot [N] arrows`
    Shoot(i32),
    /// `write <meta> to <item> [in slot N]`
    Write {
        /// The item.
        stack: ItemStack,
        /// 1-based occurrence.
        slot: usize,
        /// Fields to overwrite.
        meta: MetaOption,
    },
    /// `!swap I J`
    Swap(usize, usize),
    /// `!sort material`
    SortMaterial,
    /// `!add slot <stacks> from slot N`
    AddSlot {
        /// What to insert.
        stacks: Vec<ItemStackArg>,
        /// 1-based insertion slot.
        slot: usize,
    },
    /// `enter|exit|leave <trial>`
    Trial {
        /// Which trial.
        trial: Trial,
        /// Entering or leaving.
        active: bool,
    },
    /// `save [as <name>]`
    Save(Option<String>),
    /// `reload [<name>]`
    Reload(Option<String>),
    /// `use <name>`
    UseSave(String),
    /// `break N slots [with <stacks> [from slot M]]`
    BreakSlots {
        /// Slots to break.
        count: i64,
        /// Removed after breaking.
        stacks: Vec<RemoveArg>,
        /// 1-based start slot for the removal.
        slot: usize,
    },
    /// `close game`
    CloseGame,
    /// `sync gamedata`
    SyncGameData,
    /// `has [not] N <flag>`
    SetFlag {
        /// The flag.
        flag: GameFlag,
        /// New value.
        value: i32,
    },
}

/// A parsed line: what it does plus how to highlight it.
#[derive(Clone, Debug)]
pub struct Command {
    kind: CommandKind,
    code_blocks: Vec<CodeBlock>,
}

impl Command {
    /// Creates a command.
    #[must_use]
    pub fn new(kind: CommandKind, code_blocks: Vec<CodeBlock>) -> Self {
        Self { kind, code_blocks }
    }

    /// A command that does nothing.
    #[must_use]
    pub fn nop() -> Self {
        Self::new(CommandKind::Nop, Vec::new())
    }

    /// A hint command.
    #[must_use]
    pub fn hint(cmd_err: CmdErr, messages: Vec<String>, code_blocks: Vec<CodeBlock>) -> Self {
        Self::new(CommandKind::Hint { cmd_err, messages }, code_blocks)
    }

    /// What the command does.
    #[must_use]
    pub fn kind(&self) -> &CommandKind {
        &self.kind
    }

    /// Highlighting, ordered by start offset.
    #[must_use]
    pub fn code_blocks(&self) -> &[CodeBlock] {
        &self.code_blocks
    }

    /// Why the line is not executable, or `CmdErr::None`.
    #[must_use]
    pub fn cmd_err(&self) -> CmdErr {
        match &self.kind {
            CommandKind::Hint { cmd_err, .. } => *cmd_err,
            _ => CmdErr::None,
        }
    }

    /// Hint messages. Empty for executable commands.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        match &self.kind {
            CommandKind::Hint { messages, .. } => messages,
            _ => &[],
        }
    }

    /// Semantic equality. Code blocks and hint messages are ignored.
    #[must_use]
    pub fn equals(&self, other: &Command) -> bool {
        match (&self.kind, &other.kind) {
            (CommandKind::Hint { cmd_err: a, .. }, CommandKind::Hint { cmd_err: b, .. }) => a == b,
            (a, b) => a == b,
        }
    }

    /// Runs the command.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` when shooting arrows that game data has no
    /// slot for.
    pub fn execute(&self, state: &mut SimulationState) -> Result<()> {
        trace!("execute {:?}", self.kind);
        match &self.kind {
            CommandKind::Nop | CommandKind::Hint { .. } => {}
            CommandKind::Initialize(stacks) => state.initialize(ItemStackArg::expand_all(stacks)),
            CommandKind::InitGameData(stacks) => {
                state.init_game_data(ItemStackArg::expand_all(stacks));
            }
            CommandKind::Add(stacks) => state.obtain(ItemStackArg::expand_all(stacks)),
            CommandKind::Remove { stacks, slot, eat } => {
                let start = slot.saturating_sub(1);
                for arg in stacks {
                    if *eat {
                        state.eat(&arg.stack, arg.amount, start);
                    } else {
                        state.remove(&arg.stack, arg.amount, start);
                    }
                }
            }
            CommandKind::DropAndPickUp { stacks, slot } => {
                let start = slot.saturating_sub(1);
                for arg in stacks {
                    state.drop_and_pick_up(&arg.stack, arg.amount, start);
                }
            }
            CommandKind::RemoveAll(types) => state.remove_all(types),
            CommandKind::Equip { stack, slot } => state.equip(stack.item(), slot.saturating_sub(1)),
            CommandKind::Unequip { stack, slot } => {
                state.unequip(stack.item(), slot.map(|s| s.saturating_sub(1)));
            }
            CommandKind::UnequipAll(types) => state.unequip_all(types),
            CommandKind::Shoot(count) => state.shoot_arrow(*count)?,
            CommandKind::Write { stack, slot, meta } => {
                state.write_metadata(stack, slot.saturating_sub(1), meta);
            }
            CommandKind::Swap(i, j) => state.swap_slots(*i, *j),
            CommandKind::SortMaterial => state.sort_material(),
            CommandKind::AddSlot { stacks, slot } => {
                state.insert_slots(slot.saturating_sub(1), ItemStackArg::expand_all(stacks));
            }
            CommandKind::Trial { active, .. } => state.set_trial(*active),
            CommandKind::Save(name) => state.save(name.as_deref()),
            CommandKind::Reload(name) => {
                state.reload(name.as_deref());
            }
            CommandKind::UseSave(name) => state.use_save_for_next_reload(name),
            CommandKind::BreakSlots { count, stacks, slot } => {
                state.break_slots(*count);
                let start = slot.saturating_sub(1);
                for arg in stacks {
                    state.remove(&arg.stack, arg.amount, start);
                }
            }
            CommandKind::CloseGame => state.close_game(),
            CommandKind::SyncGameData => state.sync_game_data(),
            CommandKind::SetFlag { flag, value } => state.set_flag(*flag, *value),
        }
        Ok(())
    }
}

impl PartialEq for Command {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
