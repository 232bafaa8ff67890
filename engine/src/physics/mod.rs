//! Physics module
//!
//! Spatial rules for placed items. No dynamics: items never move on their
//! own, they are only tested for overlap.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! # Submodules
//!
//! - [`bounds`] - Rotation-projected, shrink-adjusted effective footprints
//! - [`collision`] - Box overlap with size-class exemptions, ray-box picking

pub mod bounds;
pub mod collision;

pub use bounds::{
    EffectiveFootprint, item_aabb_at, item_footprint, item_nominal_aabb, projected_footprint,
    resolve_footprint,
};
pub use collision::{Aabb, CollisionIndex, ray_aabb_intersect};
