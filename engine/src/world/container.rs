//! Placement Container Module
//!
//! The active placement container is either the room floor or, in detail
//! edit mode, the footprint of a single host item. Both are axis-aligned
//! rectangles on the floor plane and are clamped against the same way.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Room extents in meters. The floor is centered on the world origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    /// Extent along X
    pub width: f32,
    /// Extent along Z
    pub depth: f32,
    /// Ceiling height
    pub height: f32,
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self {
            width: 5.0,
            depth: 4.0,
            height: 2.8,
        }
    }
}

impl RoomDimensions {
    pub fn new(width: f32, depth: f32, height: f32) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// Floor footprint as a container.
    pub fn floor(&self) -> ContainerBounds {
        ContainerBounds::from_center(Vec2::ZERO, Vec2::new(self.width, self.depth))
    }

    /// True when every extent is a positive finite number.
    pub fn is_valid(&self) -> bool {
        [self.width, self.depth, self.height]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// Axis-aligned rectangle on the floor plane. `x` maps to world X, `y` to world Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl ContainerBounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle of the given full size centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Clamp a candidate (x, z) so a footprint of `half_extent` stays inside.
    ///
    /// When the footprint is wider than the container on an axis the item is
    /// centered on that axis.
    pub fn clamp(&self, candidate: Vec2, half_extent: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(candidate.x, self.min.x + half_extent.x, self.max.x - half_extent.x),
            clamp_axis(candidate.y, self.min.y + half_extent.y, self.max.y - half_extent.y),
        )
    }

    /// True when a footprint of `half_extent` at `center` lies fully inside.
    ///
    /// `tolerance` absorbs float noise from snapping.
    pub fn contains(&self, center: Vec2, half_extent: Vec2, tolerance: f32) -> bool {
        let fits_axis = |c: f32, h: f32, lo: f32, hi: f32| {
            if h * 2.0 > hi - lo {
                (c - (lo + hi) * 0.5).abs() <= tolerance
            } else {
                c - h >= lo - tolerance && c + h <= hi + tolerance
            }
        };
        fits_axis(center.x, half_extent.x, self.min.x, self.max.x)
            && fits_axis(center.y, half_extent.y, self.min.y, self.max.y)
    }
}

fn clamp_axis(value: f32, lo: f32, hi: f32) -> f32 {
    if lo > hi {
        (lo + hi) * 0.5
    } else {
        value.clamp(lo, hi)
    }
}
