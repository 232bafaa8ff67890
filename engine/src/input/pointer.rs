//! Pointer Input Module
//!
//! Pointer gesture events in device pixels plus the catalog drag-transfer
//! payload. Decoupled from any windowing or DOM types.

use glam::Vec2;

use crate::scene::{ItemId, ItemKind};

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Additional buttons (4, 5, ...)
    Other(u16),
}

/// Stage of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer event as delivered by the host UI.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    /// Device pixel position
    pub position: Vec2,
    pub button: MouseButton,
    /// Item the host UI already resolved under the pointer, if any
    pub target: Option<ItemId>,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, position: Vec2) -> Self {
        Self {
            phase,
            position,
            button: MouseButton::Left,
            target: None,
        }
    }

    pub fn down(position: Vec2) -> Self {
        Self::new(PointerPhase::Down, position)
    }

    pub fn moved(position: Vec2) -> Self {
        Self::new(PointerPhase::Move, position)
    }

    pub fn up(position: Vec2) -> Self {
        Self::new(PointerPhase::Up, position)
    }

    pub fn cancel(position: Vec2) -> Self {
        Self::new(PointerPhase::Cancel, position)
    }

    pub fn on(mut self, target: ItemId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// Up and cancel both end a drag.
    pub fn is_release(&self) -> bool {
        matches!(self.phase, PointerPhase::Up | PointerPhase::Cancel)
    }
}

/// Drag-transfer payload for catalog → canvas drops: the item-type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPayload {
    pub kind: ItemKind,
}

impl DragPayload {
    /// Parse a payload string such as `"book"`. Unknown tags yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let tag = raw.trim().to_ascii_lowercase();
        ItemKind::from_tag(&tag).map(|kind| Self { kind })
    }
}
