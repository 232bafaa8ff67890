//! Furnish Engine Library
//!
//! Drag-to-place furniture editing for a room-design surface. Turns 2D
//! pointer input into valid 3D placements with rotation-aware collision,
//! transactional drag-with-revert, bounded undo, and batch arrangement of
//! small items on a host surface. Rendering is left to the host
//! application.
//!
//! # Modules
//!
//! - [`world`] - Snap grid and placement containers (room floor, host surface)
//! - [`physics`] - Effective footprints and collision
//! - [`camera`] - Pointer raycasting against placement planes
//! - [`scene`] - Placed items, catalog seam, persisted document
//! - [`editor`] - Drag sessions, undo, arrangements, motion feedback and the [`Editor`] facade
//! - [`input`] - Pointer, keyboard and drag-payload types
//! - [`config`] - Tunable policy parameters
//!
//! # Example
//!
//! ```ignore
//! use furnish_engine::{Editor, EditorConfig, ItemKind, PointerEvent};
//! use glam::Vec3;
//!
//! let mut editor = Editor::new(EditorConfig::default());
//! let desk = editor.add_item(ItemKind::Desk, Vec3::new(1.5, 0.0, 1.2)).unwrap();
//!
//! // Drag it; an invalid drop snaps back to where it started
//! editor.handle_pointer(&ctx, &PointerEvent::down(pointer).on(desk.clone()));
//! editor.handle_pointer(&ctx, &PointerEvent::moved(next));
//! editor.handle_pointer(&ctx, &PointerEvent::up(next));
//!
//! editor.undo();
//! ```

pub mod camera;
pub mod config;
pub mod editor;
pub mod error;
pub mod input;
pub mod physics;
pub mod scene;
pub mod world;

// Re-export the types most callers touch
pub use camera::{CameraState, CanvasRect, RaycastContext};
pub use config::EditorConfig;
pub use editor::{
    Arrangement, DragOutcome, Editor, OrbitControls, PlacementFeedback, PointerResponse,
};
pub use error::{ConfigError, DragError, ImportError};
pub use input::{DragPayload, EditorKey, PointerEvent, PointerPhase};
pub use scene::{BookOrientation, ItemId, ItemKind, PlacedItem, Scene, SizeClass};
pub use world::{RoomDimensions, SnapGrid};
