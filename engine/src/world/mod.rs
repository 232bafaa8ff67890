//! World Module
//!
//! World-space placement rules: grid snapping and container clamping.
//!
//! ## Coordinates
//! - 1 unit = 1 meter (SI units)
//! - The room floor is centered on the origin at Y = 0
//! - An item's `position.y` is the height of its base

pub mod container;
pub mod grid;

pub use container::{ContainerBounds, RoomDimensions};
pub use grid::{SnapGrid, snap_to_grid, snap_value};
