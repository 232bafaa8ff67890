//! Keyboard Input Module
//!
//! The editor reacts to a handful of keys only. Key names follow the DOM
//! `KeyboardEvent.key` values so a web host can pass them straight through.

/// Keys the editor understands, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorKey {
    Delete,
    Backspace,
    Escape,
    /// Catch-all for unhandled keys
    Unknown,
}

/// What a key press asks the editor to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Remove the selected item
    RemoveSelected,
    /// Leave detail mode and clear the selection
    Exit,
}

impl EditorKey {
    /// Map a DOM key name (`"Delete"`, `"Backspace"`, `"Escape"`).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Delete" | "Del" => EditorKey::Delete,
            "Backspace" => EditorKey::Backspace,
            "Escape" | "Esc" => EditorKey::Escape,
            _ => EditorKey::Unknown,
        }
    }

    pub fn command(self) -> Option<KeyCommand> {
        match self {
            EditorKey::Delete | EditorKey::Backspace => Some(KeyCommand::RemoveSelected),
            EditorKey::Escape => Some(KeyCommand::Exit),
            EditorKey::Unknown => None,
        }
    }
}
