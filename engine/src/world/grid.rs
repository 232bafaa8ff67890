//! Snap Grid Module
//!
//! Quantizes continuous floor coordinates to a grid whose cell size depends
//! on the item's size class.
//!
//! ## Cell Sizes
//! - Small items (books, decor) use a 1cm cell, which is effectively
//!   continuous placement on a shelf.
//! - Large items (furniture) use the room's grid size, 25cm by default.
//! - 1 unit = 1 meter (SI units)

use glam::{Vec2, Vec3};

use crate::config::SnapPolicy;
use crate::scene::SizeClass;

/// Grid snapping for floor-plane (x, z) coordinates.
///
/// Y is never snapped; vertical placement comes from the target plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapGrid {
    /// Small grid cell size
    pub small_cell: f32,
    /// Large grid cell size (user-configurable room grid)
    pub large_cell: f32,
    /// Grid snapping on/off
    pub enabled: bool,
}

impl Default for SnapGrid {
    fn default() -> Self {
        Self::from_policy(&SnapPolicy::default())
    }
}

impl SnapGrid {
    /// Create a grid with explicit cell sizes and snapping enabled.
    pub fn new(small_cell: f32, large_cell: f32) -> Self {
        Self {
            small_cell,
            large_cell,
            enabled: true,
        }
    }

    /// Build a grid from the configured policy.
    pub fn from_policy(policy: &SnapPolicy) -> Self {
        Self {
            small_cell: policy.small_cell,
            large_cell: policy.large_cell,
            enabled: policy.enabled,
        }
    }

    /// Cell size used for the given size class.
    pub fn cell_for(&self, class: SizeClass) -> f32 {
        match class {
            SizeClass::Small => self.small_cell,
            SizeClass::Large => self.large_cell,
        }
    }

    /// Snap one coordinate to the nearest multiple of the class cell.
    ///
    /// Idempotent: snapping an already-snapped value returns it unchanged.
    pub fn snap_value(&self, value: f32, class: SizeClass) -> f32 {
        if !self.enabled {
            return value;
        }
        snap_value(value, self.cell_for(class))
    }

    /// Snap an (x, z) floor coordinate.
    pub fn snap_xz(&self, xz: Vec2, class: SizeClass) -> Vec2 {
        Vec2::new(self.snap_value(xz.x, class), self.snap_value(xz.y, class))
    }

    /// Snap a world position. Only X and Z are snapped; Y is preserved.
    pub fn snap_to_grid(&self, pos: Vec3, class: SizeClass) -> Vec3 {
        Vec3::new(
            self.snap_value(pos.x, class),
            pos.y,
            self.snap_value(pos.z, class),
        )
    }
}

/// Standalone snap of one value to a cell size.
///
/// A non-positive or non-finite cell leaves the value untouched.
pub fn snap_value(value: f32, cell: f32) -> f32 {
    if !(cell.is_finite() && cell > 0.0) {
        return value;
    }
    (value / cell).round() * cell
}

/// Standalone function to snap a position to a grid.
///
/// Useful when you don't have a SnapGrid but need basic snapping.
pub fn snap_to_grid(pos: Vec3, cell: f32) -> Vec3 {
    Vec3::new(snap_value(pos.x, cell), pos.y, snap_value(pos.z, cell))
}
