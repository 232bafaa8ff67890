//! Bounds Resolver
//!
//! Converts an item's nominal footprint and yaw into the axis-aligned
//! "effective" box used for clamping and collision.
//!
//! # Approximation
//!
//! The rotated footprint is projected onto the world axes:
//!
//! ```text
//! eff_width = w·|cos θ| + d·|sin θ|
//! eff_depth = w·|sin θ| + d·|cos θ|
//! ```
//!
//! This is the AABB of the rotated rectangle, not an oriented-box test. At
//! 45° it over-reports overlap; full OBB–OBB separating-axis testing would
//! be needed for tight packing of rotated furniture.

use glam::{Vec2, Vec3};

use super::collision::Aabb;
use crate::config::ShrinkPolicy;
use crate::scene::{PlacedItem, SizeClass};

/// Shrink-adjusted, rotation-projected extents of an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveFootprint {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl EffectiveFootprint {
    /// Half extents on the floor plane (x, z).
    pub fn half_xz(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.depth * 0.5)
    }

    /// Box for an item whose base center sits at `position`.
    pub fn aabb_at(&self, position: Vec3) -> Aabb {
        Aabb::new(
            Vec3::new(position.x - self.width * 0.5, position.y, position.z - self.depth * 0.5),
            Vec3::new(
                position.x + self.width * 0.5,
                position.y + self.height,
                position.z + self.depth * 0.5,
            ),
        )
    }
}

impl ShrinkPolicy {
    /// Shrink factor for a size class.
    pub fn factor(&self, class: SizeClass) -> f32 {
        match class {
            SizeClass::Small => self.small,
            SizeClass::Large => self.large,
        }
    }
}

/// Rotation-projected (width, depth) of a footprint, without shrink.
pub fn projected_footprint(dimensions: Vec3, yaw_degrees: f32) -> Vec2 {
    let (sin, cos) = yaw_degrees.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    Vec2::new(
        dimensions.x * cos + dimensions.z * sin,
        dimensions.x * sin + dimensions.z * cos,
    )
}

/// Effective footprint from raw parameters. Pure.
pub fn resolve_footprint(
    dimensions: Vec3,
    yaw_degrees: f32,
    class: SizeClass,
    policy: &ShrinkPolicy,
) -> EffectiveFootprint {
    let projected = projected_footprint(dimensions, yaw_degrees);
    let factor = policy.factor(class);
    EffectiveFootprint {
        width: projected.x * factor,
        height: dimensions.y * factor,
        depth: projected.y * factor,
    }
}

/// Effective footprint of a placed item.
pub fn item_footprint(item: &PlacedItem, policy: &ShrinkPolicy) -> EffectiveFootprint {
    resolve_footprint(item.scaled_dimensions(), item.rotation(), item.size_class(), policy)
}

/// Effective box of an item at an arbitrary position.
pub fn item_aabb_at(item: &PlacedItem, position: Vec3, policy: &ShrinkPolicy) -> Aabb {
    item_footprint(item, policy).aabb_at(position)
}

/// Nominal projected box of an item, used for picking and host surfaces.
pub fn item_nominal_aabb(item: &PlacedItem) -> Aabb {
    let projected = projected_footprint(item.scaled_dimensions(), item.rotation());
    EffectiveFootprint {
        width: projected.x,
        height: item.scaled_dimensions().y,
        depth: projected.y,
    }
    .aabb_at(item.position)
}
