use std::path::{Path, PathBuf};

use log::info;

use crate::engine::PaintEngine;
use crate::error::PaintResult;

/// Menu actions the front end can ask of the engine.
///
/// Confirmation for destructive actions (New, Clear) happens in the UI before
/// the command is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a new drawing
    New,
    /// Wipe the current drawing
    Clear,
    /// Export to the configured path
    Save,
    /// Export to a chosen path
    SaveAs(PathBuf),
    Undo,
}

/// What a successfully executed command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Cleared,
    Saved(PathBuf),
    Unchanged,
}

impl Command {
    /// Whether the UI must ask the user before executing this command
    pub fn needs_confirmation(&self) -> bool {
        matches!(self, Self::New | Self::Clear)
    }

    pub fn confirmation_prompt(&self) -> Option<&'static str> {
        match self {
            Self::New => Some("Start a new drawing? Any unsaved changes will be lost."),
            Self::Clear => Some("Clear the entire drawing?"),
            _ => None,
        }
    }

    pub fn execute(&self, engine: &mut PaintEngine, export_path: &Path) -> PaintResult<CommandOutcome> {
        info!("Executing command: {self:?}");
        match self {
            Self::New | Self::Clear => {
                engine.clear();
                Ok(CommandOutcome::Cleared)
            }
            Self::Save => {
                engine.save_png(export_path)?;
                Ok(CommandOutcome::Saved(export_path.to_path_buf()))
            }
            Self::SaveAs(path) => {
                engine.save_png(path)?;
                Ok(CommandOutcome::Saved(path.clone()))
            }
            Self::Undo => engine.undo().map(|()| CommandOutcome::Unchanged),
        }
    }
}
