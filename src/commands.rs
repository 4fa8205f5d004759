//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the window
    Redraw,
    /// Refresh the window title from the status line
    UpdateTitle,
    /// Execute multiple commands
    Batch(Vec<Cmd>),

    // File dialogs
    /// Show native open file dialog
    ShowOpenFileDialog {
        /// Starting directory for the dialog
        start_dir: Option<PathBuf>,
    },
    /// Show native save file dialog
    ShowSaveFileDialog {
        /// Suggested file path (for pre-filling name/directory)
        suggested_path: Option<PathBuf>,
    },

    // === Application Commands ===
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Redraw plus a title refresh, used whenever the status line changes
    pub fn redraw_with_status() -> Self {
        Cmd::Batch(vec![Cmd::Redraw, Cmd::UpdateTitle])
    }

    /// Check if this command (or any batched one) asks to quit
    pub fn is_quit(&self) -> bool {
        match self {
            Cmd::Quit => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.is_quit()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_quit() {
        assert!(Cmd::Quit.is_quit());
        assert!(Cmd::Batch(vec![Cmd::Redraw, Cmd::Quit]).is_quit());
        assert!(!Cmd::redraw_with_status().is_quit());
        assert!(!Cmd::Redraw.is_quit());
    }
}
