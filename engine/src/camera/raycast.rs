//! Raycast Module
//!
//! Converts a pointer position on the canvas into a world-space point on a
//! target plane. Camera state is passed in explicitly through a
//! [`RaycastContext`]; nothing here reads global renderer state.

use glam::{Vec2, Vec3};

use crate::physics::{item_nominal_aabb, ray_aabb_intersect};
use crate::scene::{ItemId, PlacedItem};

/// Rays closer to parallel than this never hit a plane.
const PARALLEL_EPSILON: f32 = 1e-4;

/// Perspective camera state supplied by the renderer each event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// Camera position in world space
    pub position: Vec3,
    /// Point the camera is looking at
    pub target: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 4.0, 6.0),
            target: Vec3::ZERO,
            fov_y: 50f32.to_radians(),
        }
    }
}

/// The renderer canvas' bounding rectangle in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CanvasRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Device pixel coordinate to normalized device coordinates (-1..1, +Y up).
    pub fn to_ndc(&self, pointer: Vec2) -> Vec2 {
        let width = self.width.max(1.0);
        let height = self.height.max(1.0);
        Vec2::new(
            (pointer.x - self.left) / width * 2.0 - 1.0,
            1.0 - (pointer.y - self.top) / height * 2.0,
        )
    }
}

/// Everything needed to turn a pointer into a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastContext {
    pub camera: CameraState,
    pub canvas: CanvasRect,
}

impl RaycastContext {
    pub fn new(camera: CameraState, canvas: CanvasRect) -> Self {
        Self { camera, canvas }
    }

    /// World-space ray through a device pixel.
    pub fn pointer_ray(&self, pointer: Vec2) -> Ray {
        let ndc = self.canvas.to_ndc(pointer);
        let direction = ray_direction(&self.camera, ndc, self.canvas.aspect_ratio());
        Ray::new(self.camera.position, direction)
    }
}

/// A half-line in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Normalized direction
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersection with the horizontal plane `y = height`. The returned
    /// point's `y` is exactly `height`.
    pub fn intersect_horizontal(&self, height: f32) -> Option<Vec3> {
        self.intersect_plane(Vec3::new(0.0, height, 0.0), Vec3::Y)
            .map(|hit| Vec3::new(hit.x, height, hit.z))
    }

    /// Intersection with the plane through `point` with `normal`.
    ///
    /// Returns `None` when the ray is parallel to the plane or the hit lies
    /// behind the origin.
    pub fn intersect_plane(&self, point: Vec3, normal: Vec3) -> Option<Vec3> {
        let denom = self.direction.dot(normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = (point - self.origin).dot(normal) / denom;
        if t < 0.0 {
            return None;
        }
        Some(self.at(t))
    }
}

/// Ray direction through normalized device coordinates.
pub fn ray_direction(camera: &CameraState, ndc: Vec2, aspect_ratio: f32) -> Vec3 {
    let forward = (camera.target - camera.position).normalize_or_zero();
    let half_fov = (camera.fov_y * 0.5).tan();

    // Looking straight up or down - use world X as the right vector
    let (right, up) = if forward.y.abs() > 0.999 {
        let right = Vec3::X;
        (right, right.cross(forward).normalize())
    } else {
        let right = forward.cross(Vec3::Y).normalize();
        (right, right.cross(forward))
    };

    (forward + right * ndc.x * half_fov * aspect_ratio + up * ndc.y * half_fov).normalize()
}

/// Discrete support heights of a host item: its base, evenly spaced
/// internal shelves, and its top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShelfLevels {
    /// Host base center
    pub center: Vec3,
    /// Host height
    pub height: f32,
    /// Number of intervals between base and top
    pub intervals: u32,
}

impl ShelfLevels {
    pub fn for_host(host: &PlacedItem, intervals: u32) -> Self {
        Self {
            center: host.position,
            height: host.scaled_dimensions().y,
            intervals: intervals.max(1),
        }
    }

    /// Level heights from base to top, inclusive.
    pub fn levels(&self) -> impl Iterator<Item = f32> + '_ {
        let step = self.height / self.intervals as f32;
        (0..=self.intervals).map(move |i| self.center.y + step * i as f32)
    }

    /// Level closest to `aim_height`.
    pub fn nearest(&self, aim_height: f32) -> f32 {
        self.levels()
            .min_by(|a, b| {
                (a - aim_height)
                    .abs()
                    .total_cmp(&(b - aim_height).abs())
            })
            .unwrap_or(self.center.y)
    }

    /// Height the user aimed at: the pointer ray against the vertical plane
    /// through the host center, facing the camera.
    pub fn aim_height(&self, ray: &Ray) -> Option<f32> {
        let to_camera = ray.origin - self.center;
        let normal = Vec3::new(to_camera.x, 0.0, to_camera.z)
            .try_normalize()
            .unwrap_or(Vec3::Z);
        ray.intersect_plane(self.center, normal).map(|hit| hit.y)
    }
}

/// Which plane a pointer is resolved against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlaneTarget {
    /// Horizontal plane at a fixed height (the dragged item's current y)
    Horizontal { height: f32 },
    /// The nearest shelf of a host; `fallback` is used when the aim misses
    Shelf { levels: ShelfLevels, fallback: f32 },
}

/// Resolve a pointer to a world point on the target plane.
pub fn raycast_pointer(ctx: &RaycastContext, pointer: Vec2, target: &PlaneTarget) -> Option<Vec3> {
    let ray = ctx.pointer_ray(pointer);
    match target {
        PlaneTarget::Horizontal { height } => ray.intersect_horizontal(*height),
        PlaneTarget::Shelf { levels, fallback } => {
            let aim = levels.aim_height(&ray).unwrap_or(*fallback);
            let level = levels.nearest(aim);
            ray.intersect_horizontal(level)
        }
    }
}

/// Nearest item under the pointer, tested against nominal projected boxes.
pub fn pick_item<'a>(
    ctx: &RaycastContext,
    pointer: Vec2,
    items: impl IntoIterator<Item = &'a PlacedItem>,
) -> Option<ItemId> {
    let ray = ctx.pointer_ray(pointer);
    items
        .into_iter()
        .filter_map(|item| {
            ray_aabb_intersect(ray.origin, ray.direction, &item_nominal_aabb(item))
                .map(|t| (t, item))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, item)| item.id.clone())
}
