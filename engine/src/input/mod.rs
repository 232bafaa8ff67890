//! Input Module
//!
//! Platform-agnostic input types for the editor: pointer gestures, the
//! catalog drag payload, and the few keys the editor binds.
//!
//! # Example
//!
//! ```rust,ignore
//! use furnish_engine::input::{EditorKey, PointerEvent};
//!
//! editor.handle_pointer(&ctx, PointerEvent::down(pos).on(id));
//! editor.handle_pointer(&ctx, PointerEvent::moved(next));
//! editor.handle_pointer(&ctx, PointerEvent::up(next));
//!
//! editor.handle_key(EditorKey::from_name("Escape"));
//! ```

pub mod keyboard;
pub mod pointer;

pub use keyboard::{EditorKey, KeyCommand};
pub use pointer::{DragPayload, MouseButton, PointerEvent, PointerPhase};
