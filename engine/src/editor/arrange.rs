//! Arrangement Planner
//!
//! Batch layouts for the small items sitting on or near a host surface
//! (usually books on a bookshelf). Planning is pure: [`ArrangementPlanner::plan`]
//! reads the scene and returns an [`ArrangementPlan`]; the caller snapshots
//! for undo and then applies it. Plans only move and reorient items; they
//! never touch dimensions or color and skip collision checks entirely.
//!
//! All layouts work in world axes. A rotated host keeps its world-axis
//! footprint box and the items are laid out along world X.

use std::fmt;

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::config::{ArrangementConfig, ShrinkPolicy};
use crate::physics::{item_footprint, projected_footprint};
use crate::scene::{BookOrientation, ItemId, ItemKind, PlacedItem, Scene};
use crate::world::ContainerBounds;

/// The five batch layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arrangement {
    /// Upright, packed left to right from the host's left edge
    Row,
    /// Flat, piled from the host's base upward with slight jitter
    Stack,
    /// Faceout centerpiece flanked by upright items alternating right/left
    Shrine,
    /// Every member moved to the host's center depth
    Align,
    /// Members redistributed at equal x intervals across the host
    SpaceEvenly,
}

impl Arrangement {
    pub const ALL: [Arrangement; 5] = [
        Arrangement::Row,
        Arrangement::Stack,
        Arrangement::Shrine,
        Arrangement::Align,
        Arrangement::SpaceEvenly,
    ];
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Arrangement::Row => "row",
            Arrangement::Stack => "stack",
            Arrangement::Shrine => "shrine",
            Arrangement::Align => "align",
            Arrangement::SpaceEvenly => "space-evenly",
        };
        f.write_str(name)
    }
}

/// New transform for one member.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub item: ItemId,
    pub position: Vec3,
    /// Only applied to books
    pub orientation: Option<BookOrientation>,
}

/// A computed layout, not yet applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrangementPlan {
    pub arrangement: Arrangement,
    pub host: ItemId,
    pub placements: Vec<Placement>,
}

/// Summary of an applied plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrangeReport {
    pub arrangement: Arrangement,
    pub host: ItemId,
    pub moved: usize,
}

impl ArrangementPlan {
    /// Write every placement into the scene.
    pub fn apply(self, scene: &mut Scene) -> ArrangeReport {
        let mut moved = 0;
        for placement in &self.placements {
            let Some(item) = scene.item_mut(&placement.item) else {
                continue;
            };
            item.position = placement.position;
            if let Some(orientation) = placement.orientation {
                item.set_orientation(orientation);
            }
            moved += 1;
        }
        tracing::info!(
            arrangement = %self.arrangement,
            host = %self.host,
            moved,
            "arrangement applied"
        );
        ArrangeReport {
            arrangement: self.arrangement,
            host: self.host,
            moved,
        }
    }
}

/// Computes arrangement plans around a host item.
#[derive(Clone, Copy, Debug)]
pub struct ArrangementPlanner<'a> {
    config: &'a ArrangementConfig,
    shrink: &'a ShrinkPolicy,
}

impl<'a> ArrangementPlanner<'a> {
    pub fn new(config: &'a ArrangementConfig, shrink: &'a ShrinkPolicy) -> Self {
        Self { config, shrink }
    }

    /// The host arrangements run against: the detail-mode host, else the
    /// current selection.
    pub fn host_for(scene: &Scene) -> Option<&PlacedItem> {
        scene
            .host()
            .or_else(|| scene.selected_id().and_then(|id| scene.item(id)))
    }

    /// Small items whose centers fall within the host's effective footprint
    /// plus slack, in scene order.
    pub fn members<'s>(&self, scene: &'s Scene, host: &PlacedItem) -> Vec<&'s PlacedItem> {
        let reach =
            item_footprint(host, self.shrink).half_xz() + Vec2::splat(self.config.proximity_slack);
        scene
            .items()
            .iter()
            .filter(|item| item.id != host.id && item.is_small())
            .filter(|item| {
                (item.position.x - host.position.x).abs() <= reach.x
                    && (item.position.z - host.position.z).abs() <= reach.y
            })
            .collect()
    }

    /// Plan `arrangement` for the current host. `None` when there is no host
    /// or nothing to move.
    pub fn plan<R: Rng + ?Sized>(
        &self,
        scene: &Scene,
        arrangement: Arrangement,
        rng: &mut R,
    ) -> Option<ArrangementPlan> {
        let host = Self::host_for(scene)?;
        let members = self.members(scene, host);
        if members.is_empty() {
            tracing::debug!(arrangement = %arrangement, host = %host.id, "nothing to arrange");
            return None;
        }

        let placements = match arrangement {
            Arrangement::Row => self.row(host, &members),
            Arrangement::Stack => self.stack(host, &members, rng),
            Arrangement::Shrine => self.shrine(host, &members),
            Arrangement::Align => align(host, &members),
            Arrangement::SpaceEvenly => self.space_evenly(host, &members),
        };
        if placements.is_empty() {
            return None;
        }
        Some(ArrangementPlan {
            arrangement,
            host: host.id.clone(),
            placements,
        })
    }

    fn row(&self, host: &PlacedItem, members: &[&PlacedItem]) -> Vec<Placement> {
        let bounds = host_footprint(host);
        let mut cursor = bounds.min.x;

        members
            .iter()
            .map(|item| {
                let extent = extent_x(item, BookOrientation::Upright);
                let x = cursor + extent * 0.5;
                cursor += extent + self.config.row_gap;
                Placement {
                    item: item.id.clone(),
                    position: Vec3::new(x, host.position.y, host.position.z),
                    orientation: Some(BookOrientation::Upright),
                }
            })
            .collect()
    }

    fn stack<R: Rng + ?Sized>(
        &self,
        host: &PlacedItem,
        members: &[&PlacedItem],
        rng: &mut R,
    ) -> Vec<Placement> {
        let jitter = self.config.stack_jitter.abs();
        let mut cursor = host.position.y;

        members
            .iter()
            .map(|item| {
                let offset = Vec2::new(
                    rng.random_range(-jitter..=jitter),
                    rng.random_range(-jitter..=jitter),
                );
                let position =
                    Vec3::new(host.position.x + offset.x, cursor, host.position.z + offset.y);
                cursor += flat_thickness(item) + self.config.stack_gap;
                Placement {
                    item: item.id.clone(),
                    position,
                    orientation: Some(BookOrientation::Flat),
                }
            })
            .collect()
    }

    fn shrine(&self, host: &PlacedItem, members: &[&PlacedItem]) -> Vec<Placement> {
        let eligible: Vec<&PlacedItem> = members
            .iter()
            .copied()
            .filter(|item| item.kind() != ItemKind::BookStack && !item.kind().is_decor())
            .take(self.config.shrine_max)
            .collect();
        let Some((centerpiece, flanks)) = eligible.split_first() else {
            return Vec::new();
        };

        let base_y = centerpiece.position.y;
        let gap = self.config.shrine_gap;
        let mut placements = Vec::with_capacity(eligible.len());
        placements.push(Placement {
            item: centerpiece.id.clone(),
            position: Vec3::new(
                host.position.x,
                base_y + self.config.shrine_raise,
                host.position.z + self.config.shrine_forward,
            ),
            orientation: Some(BookOrientation::Faceout),
        });

        let half = extent_x(centerpiece, BookOrientation::Faceout) * 0.5;
        let mut right = host.position.x + half + gap;
        let mut left = host.position.x - half - gap;
        for (i, item) in flanks.iter().enumerate() {
            let extent = extent_x(item, BookOrientation::Upright);
            let x = if i % 2 == 0 {
                let x = right + extent * 0.5;
                right += extent + gap;
                x
            } else {
                let x = left - extent * 0.5;
                left -= extent + gap;
                x
            };
            placements.push(Placement {
                item: item.id.clone(),
                position: Vec3::new(x, base_y, host.position.z),
                orientation: Some(BookOrientation::Upright),
            });
        }
        placements
    }

    fn space_evenly(&self, host: &PlacedItem, members: &[&PlacedItem]) -> Vec<Placement> {
        let bounds = host_footprint(host);
        let mut lo = bounds.min.x + self.config.edge_margin;
        let mut hi = bounds.max.x - self.config.edge_margin;
        if lo > hi {
            lo = host.position.x;
            hi = host.position.x;
        }

        let mut sorted = members.to_vec();
        sorted.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));

        let count = sorted.len();
        sorted
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                let x = if count == 1 {
                    (lo + hi) * 0.5
                } else {
                    lo + (hi - lo) * i as f32 / (count - 1) as f32
                };
                Placement {
                    item: item.id.clone(),
                    position: Vec3::new(x, item.position.y, item.position.z),
                    orientation: None,
                }
            })
            .collect()
    }
}

fn align(host: &PlacedItem, members: &[&PlacedItem]) -> Vec<Placement> {
    members
        .iter()
        .map(|item| Placement {
            item: item.id.clone(),
            position: Vec3::new(item.position.x, item.position.y, host.position.z),
            orientation: None,
        })
        .collect()
}

/// The host's nominal world-axis footprint.
fn host_footprint(host: &PlacedItem) -> ContainerBounds {
    let size = projected_footprint(host.scaled_dimensions(), host.rotation());
    ContainerBounds::from_center(Vec2::new(host.position.x, host.position.z), size)
}

/// Width an item occupies along X in the given orientation.
///
/// Upright books show their spine (width); faceout books show their cover
/// (depth). Other items use their projected footprint.
fn extent_x(item: &PlacedItem, orientation: BookOrientation) -> f32 {
    let dims = item.scaled_dimensions();
    if item.kind().is_book() {
        match orientation {
            BookOrientation::Upright => dims.x,
            BookOrientation::Faceout => dims.z,
            BookOrientation::Flat => dims.y,
        }
    } else {
        projected_footprint(dims, item.rotation()).x
    }
}

/// Vertical thickness of an item lying flat.
fn flat_thickness(item: &PlacedItem) -> f32 {
    let dims = item.scaled_dimensions();
    if item.kind().is_book() { dims.x } else { dims.y }
}
