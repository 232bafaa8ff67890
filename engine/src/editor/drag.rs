//! Drag Session - transactional pointer drag
//!
//! One pointer drag moves one item. The session:
//! - Captures the item's start position on pointer-down
//! - On every pointer-move: raycast → snap → clamp → write the live
//!   position → collision check for preview styling only
//! - On release: commits if the live position is valid, otherwise restores
//!   the start position exactly
//!
//! Camera suspension and the shared dragging flag are handled by the
//! [`Editor`](super::Editor) that owns the session.

use glam::{Vec2, Vec3};

use crate::camera::{PlaneTarget, RaycastContext, ShelfLevels, raycast_pointer};
use crate::config::EditorConfig;
use crate::error::DragError;
use crate::physics::{CollisionIndex, item_footprint};
use crate::scene::{ItemId, PlacedItem, Scene};

/// Slack for container checks after snapping.
const CONTAINER_TOLERANCE: f32 = 1e-4;

/// The live state of an active drag.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDrag {
    /// Dragged item
    pub item: ItemId,
    /// Position captured at pointer-down, restored on revert
    pub start_position: Vec3,
    /// Whether the live position currently collides (preview styling)
    pub colliding: bool,
}

/// Result of one pointer-move.
#[derive(Debug, Clone, PartialEq)]
pub struct DragPreview {
    pub item: ItemId,
    /// Live position written to the item
    pub position: Vec3,
    pub colliding: bool,
}

/// How a drag ended.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// The item stays where it was dropped
    Committed { item: ItemId, position: Vec3 },
    /// The drop was invalid; the item is back at its start position
    Reverted { item: ItemId, position: Vec3 },
}

impl DragOutcome {
    pub fn item(&self) -> &ItemId {
        match self {
            DragOutcome::Committed { item, .. } | DragOutcome::Reverted { item, .. } => item,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, DragOutcome::Committed { .. })
    }
}

/// Drag state machine: Idle → Active → {Committed | Reverted} → Idle.
#[derive(Debug, Default)]
pub struct DragSession {
    active: Option<ActiveDrag>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    /// Collision-preview flag for one item.
    pub fn is_colliding(&self, id: &ItemId) -> bool {
        self.active
            .as_ref()
            .is_some_and(|drag| &drag.item == id && drag.colliding)
    }

    /// Start dragging `id`. Only one session may be active at a time.
    pub fn begin(&mut self, scene: &Scene, id: &ItemId) -> Result<(), DragError> {
        if self.active.is_some() {
            return Err(DragError::AlreadyActive);
        }
        let item = scene
            .item(id)
            .ok_or_else(|| DragError::UnknownItem(id.clone()))?;
        tracing::debug!(item = %id, x = item.position.x, z = item.position.z, "drag started");
        self.active = Some(ActiveDrag {
            item: id.clone(),
            start_position: item.position,
            colliding: false,
        });
        Ok(())
    }

    /// Process one pointer-move to completion.
    ///
    /// Returns `None` when idle, when the item vanished, or when the pointer
    /// ray misses the target plane (the item keeps its last live position).
    pub fn update(
        &mut self,
        scene: &mut Scene,
        ctx: &RaycastContext,
        pointer: Vec2,
        config: &EditorConfig,
    ) -> Option<DragPreview> {
        let drag = self.active.as_mut()?;
        let item = scene.item(&drag.item)?;

        let target = plane_target(scene, item, config);
        let hit = raycast_pointer(ctx, pointer, &target)?;
        let position = settle_position(scene, item, hit, config);

        let colliding = collides_at(scene, item, position, config);

        scene.item_mut(&drag.item)?.position = position;
        drag.colliding = colliding;
        tracing::trace!(
            item = %drag.item,
            x = position.x,
            y = position.y,
            z = position.z,
            colliding,
            "drag moved"
        );

        Some(DragPreview {
            item: drag.item.clone(),
            position,
            colliding,
        })
    }

    /// Finish on pointer-up or pointer-cancel: commit or revert.
    ///
    /// Returns `None` if no session was active or its item is gone.
    pub fn end(&mut self, scene: &mut Scene, config: &EditorConfig) -> Option<DragOutcome> {
        let drag = self.active.take()?;
        let item = scene.item(&drag.item)?;
        let position = item.position;

        if placement_valid(scene, item, position, config) {
            tracing::info!(
                item = %drag.item,
                x = position.x,
                y = position.y,
                z = position.z,
                "placement committed"
            );
            Some(DragOutcome::Committed {
                item: drag.item,
                position,
            })
        } else {
            scene.item_mut(&drag.item)?.position = drag.start_position;
            tracing::info!(
                item = %drag.item,
                x = drag.start_position.x,
                z = drag.start_position.z,
                "invalid placement reverted"
            );
            Some(DragOutcome::Reverted {
                item: drag.item,
                position: drag.start_position,
            })
        }
    }
}

/// Plane a pointer is resolved against for this item.
///
/// Small items in detail mode drop onto the nearest host shelf; everything
/// else slides on the horizontal plane at its current height.
pub(crate) fn plane_target(
    scene: &Scene,
    item: &PlacedItem,
    config: &EditorConfig,
) -> PlaneTarget {
    match scene.surface_for(item) {
        Some(host) => PlaneTarget::Shelf {
            levels: ShelfLevels::for_host(host, config.shelf_levels),
            fallback: item.position.y,
        },
        None => PlaneTarget::Horizontal {
            height: item.position.y,
        },
    }
}

/// Snap then clamp a raw plane hit for `item`.
pub(crate) fn settle_position(
    scene: &Scene,
    item: &PlacedItem,
    hit: Vec3,
    config: &EditorConfig,
) -> Vec3 {
    let snapped = scene
        .grid()
        .snap_xz(Vec2::new(hit.x, hit.z), item.size_class());
    let half = item_footprint(item, &config.shrink).half_xz();
    let clamped = scene.container_for(item).clamp(snapped, half);
    Vec3::new(clamped.x, hit.y, clamped.y)
}

/// Collision verdict for `item` at `position` against the rest of the scene.
pub(crate) fn collides_at(
    scene: &Scene,
    item: &PlacedItem,
    position: Vec3,
    config: &EditorConfig,
) -> bool {
    let host = scene.surface_for(item).map(|host| &host.id);
    CollisionIndex::new(&config.shrink).collides(item, position, scene.items(), host)
}

/// Final verdict: inside the container and free of collisions.
pub(crate) fn placement_valid(
    scene: &Scene,
    item: &PlacedItem,
    position: Vec3,
    config: &EditorConfig,
) -> bool {
    let half = item_footprint(item, &config.shrink).half_xz();
    let inside = scene.container_for(item).contains(
        Vec2::new(position.x, position.z),
        half,
        CONTAINER_TOLERANCE,
    );
    inside && !collides_at(scene, item, position, config)
}
