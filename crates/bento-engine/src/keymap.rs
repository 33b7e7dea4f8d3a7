#![forbid(unsafe_code)]

//! Keyboard bindings for editor commands.
//!
//! The bindings are fixed: Backspace/Delete removes the selection, the
//! platform modifier (Ctrl or Cmd) + `z` undoes, and the same with Shift
//! redoes. Shifted `z` may arrive as uppercase depending on the host, so
//! the match is case-insensitive.

use bento_core::{KeyCode, KeyEvent};

/// High-level commands the keyboard can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Undo,
    Redo,
    DeleteSelected,
}

/// Resolves key events to editor commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keymap;

impl Keymap {
    /// Map a key event to a command, or `None` if unbound.
    #[must_use]
    pub fn resolve(&self, key: &KeyEvent) -> Option<EditorCommand> {
        match key.code {
            KeyCode::Backspace | KeyCode::Delete => Some(EditorCommand::DeleteSelected),
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'z') && key.platform_modifier() => {
                if key.shift() {
                    Some(EditorCommand::Redo)
                } else {
                    Some(EditorCommand::Undo)
                }
            }
            _ => None,
        }
    }
}
