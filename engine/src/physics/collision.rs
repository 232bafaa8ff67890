//! Collision detection module
//!
//! Box overlap between placed items, plus ray-box picking.
//!
//! # Exemptions
//!
//! - An item never collides with itself.
//! - In detail edit mode the host item is ignored: small items sit on it.
//! - Two small-class items never collide, wherever they are. Books and
//!   decor may touch or interpenetrate freely.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for pointer picking: entry and exit times are
//! computed per axis and the ray hits when the latest entry precedes the
//! earliest exit.
//!
//! # Example
//!
//! ```ignore
//! use furnish_engine::physics::collision::CollisionIndex;
//!
//! let index = CollisionIndex::new(&config.shrink);
//! let host = scene.surface_for(&candidate).map(|host| &host.id);
//! if index.collides(&candidate, live_position, scene.items(), host) {
//!     // preview styling: red outline
//! }
//! ```

use glam::Vec3;

use super::bounds::item_aabb_at;
use crate::config::ShrinkPolicy;
use crate::scene::{ItemId, PlacedItem, SizeClass};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Strict overlap on all three axes. Boxes that only touch do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }
}

/// Performs ray-AABB intersection using the slab method.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (normalized)
/// * `aabb` - Box to test
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the nearest intersection (t >= 0)
/// * `None` - No intersection, or the box is behind the origin
pub fn ray_aabb_intersect(ray_origin: Vec3, ray_dir: Vec3, aabb: &Aabb) -> Option<f32> {
    // Near-zero components get a huge inverse so the slab spans everything
    let inv = |d: f32| if d.abs() > 1e-10 { 1.0 / d } else { f32::MAX * d.signum() };
    let inv_dir = Vec3::new(inv(ray_dir.x), inv(ray_dir.y), inv(ray_dir.z));

    let t1 = (aabb.min - ray_origin) * inv_dir;
    let t2 = (aabb.max - ray_origin) * inv_dir;

    let t_min = t1.min(t2).max_element();
    let t_max = t1.max(t2).min_element();

    if t_max >= t_min && t_max >= 0.0 {
        // Origin inside the box hits the exit face
        Some(if t_min >= 0.0 { t_min } else { t_max })
    } else {
        None
    }
}

/// Candidate-versus-scene overlap test over effective boxes.
///
/// Brute force over all items; the scenes this serves hold tens of items.
#[derive(Debug, Clone, Copy)]
pub struct CollisionIndex<'a> {
    policy: &'a ShrinkPolicy,
}

impl<'a> CollisionIndex<'a> {
    pub fn new(policy: &'a ShrinkPolicy) -> Self {
        Self { policy }
    }

    /// Whether a pair is exempt from collision regardless of geometry.
    pub fn pair_exempt(a: SizeClass, b: SizeClass) -> bool {
        a == SizeClass::Small && b == SizeClass::Small
    }

    /// First item the candidate would overlap at `position`, if any.
    ///
    /// The candidate itself (matched by id) and `exempt_host` are skipped.
    pub fn first_collision<'s>(
        &self,
        candidate: &PlacedItem,
        position: Vec3,
        items: &'s [PlacedItem],
        exempt_host: Option<&ItemId>,
    ) -> Option<&'s PlacedItem> {
        let candidate_box = item_aabb_at(candidate, position, self.policy);
        items.iter().find(|other| {
            if other.id == candidate.id || exempt_host == Some(&other.id) {
                return false;
            }
            if Self::pair_exempt(candidate.size_class(), other.size_class()) {
                return false;
            }
            let other_box = item_aabb_at(other, other.position, self.policy);
            candidate_box.overlaps(&other_box)
        })
    }

    /// Collision verdict for a candidate at `position`.
    pub fn collides(
        &self,
        candidate: &PlacedItem,
        position: Vec3,
        items: &[PlacedItem],
        exempt_host: Option<&ItemId>,
    ) -> bool {
        self.first_collision(candidate, position, items, exempt_host)
            .is_some()
    }

    /// Every overlapping pair of ids in a scene, each pair reported once.
    pub fn overlapping_pairs(&self, items: &[PlacedItem]) -> Vec<(ItemId, ItemId)> {
        let mut pairs = Vec::new();
        for (i, a) in items.iter().enumerate() {
            let a_box = item_aabb_at(a, a.position, self.policy);
            for b in &items[i + 1..] {
                if Self::pair_exempt(a.size_class(), b.size_class()) {
                    continue;
                }
                if a_box.overlaps(&item_aabb_at(b, b.position, self.policy)) {
                    pairs.push((a.id.clone(), b.id.clone()));
                }
            }
        }
        pairs
    }
}
