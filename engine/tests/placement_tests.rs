//! Placement Tests - Footprints, Snapping, Clamping and Collision
//!
//! Exercises the pure placement rules through the public API.

use furnish_engine::camera::{CameraState, CanvasRect, RaycastContext, pick_item};
use furnish_engine::config::ShrinkPolicy;
use furnish_engine::physics::{CollisionIndex, item_footprint, resolve_footprint};
use furnish_engine::scene::{ItemId, ItemKind, PlacedItem, SizeClass};
use furnish_engine::world::{RoomDimensions, SnapGrid};
use glam::{Vec2, Vec3};

fn item(id: &str, kind: ItemKind, position: Vec3, dims: Vec3) -> PlacedItem {
    PlacedItem::new(ItemId::from(id), kind, id, position, dims, "#ffffff")
}

#[test]
fn test_quarter_turn_swaps_footprint_axes() {
    let policy = ShrinkPolicy::default();
    let straight = resolve_footprint(Vec3::new(1.2, 0.75, 0.6), 0.0, SizeClass::Large, &policy);
    let turned = resolve_footprint(Vec3::new(1.2, 0.75, 0.6), 90.0, SizeClass::Large, &policy);
    assert!((straight.width - 1.14).abs() < 1e-4);
    assert!((turned.width - straight.depth).abs() < 1e-4);
    assert!((turned.depth - straight.width).abs() < 1e-4);
    assert!((turned.height - 0.7125).abs() < 1e-4);
}

#[test]
fn test_diagonal_footprint_grows() {
    let policy = ShrinkPolicy::default();
    let square = resolve_footprint(Vec3::new(1.0, 1.0, 1.0), 45.0, SizeClass::Large, &policy);
    assert!((square.width - 0.95 * std::f32::consts::SQRT_2).abs() < 1e-4);
}

#[test]
fn test_snapping_is_idempotent_per_class() {
    let grid = SnapGrid::default();
    for value in [-2.37_f32, -0.01, 0.0, 0.126, 1.874, 2.49] {
        for class in [SizeClass::Small, SizeClass::Large] {
            let once = grid.snap_value(value, class);
            assert_eq!(grid.snap_value(once, class), once);
        }
    }
    assert!((grid.snap_value(1.37, SizeClass::Large) - 1.25).abs() < 1e-6);
    assert!((grid.snap_value(1.374, SizeClass::Small) - 1.37).abs() < 1e-6);
}

#[test]
fn test_clamp_keeps_footprint_inside_room() {
    let policy = ShrinkPolicy::default();
    let wardrobe = item("w", ItemKind::Wardrobe, Vec3::ZERO, Vec3::new(1.0, 2.0, 0.6));
    let half = item_footprint(&wardrobe, &policy).half_xz();
    let floor = RoomDimensions::default().floor();

    for candidate in [Vec2::new(9.0, 9.0), Vec2::new(-9.0, 0.3), Vec2::new(0.1, -7.0)] {
        let clamped = floor.clamp(candidate, half);
        assert!(floor.contains(clamped, half, 1e-5), "{clamped:?} escaped");
    }
}

#[test]
fn test_collision_policy_by_size_class() {
    let policy = ShrinkPolicy::default();
    let index = CollisionIndex::new(&policy);
    let items = vec![
        item("bed", ItemKind::Bed, Vec3::ZERO, Vec3::new(1.6, 0.5, 2.0)),
        item("book-a", ItemKind::Book, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.03, 0.22, 0.15)),
    ];

    // Small on small never collides, even fully overlapping
    let book_b = item("book-b", ItemKind::Book, Vec3::ZERO, Vec3::new(0.03, 0.22, 0.15));
    assert!(!index.collides(&book_b, Vec3::new(2.0, 0.0, 0.0), &items, None));

    // Small against large does
    assert!(index.collides(&book_b, Vec3::new(0.0, 0.1, 0.0), &items, None));

    // Unless the large item is the detail host
    assert!(!index.collides(&book_b, Vec3::new(0.0, 0.1, 0.0), &items, Some(&ItemId::from("bed"))));

    // Resting on top is not an overlap
    assert!(!index.collides(&book_b, Vec3::new(0.0, 0.5, 0.0), &items, None));
}

#[test]
fn test_desk_beside_bed_is_clear() {
    let policy = ShrinkPolicy::default();
    let index = CollisionIndex::new(&policy);
    let bed = item("bed", ItemKind::Bed, Vec3::ZERO, Vec3::new(1.6, 0.5, 2.0));
    let desk = item("desk", ItemKind::Desk, Vec3::new(1.5, 0.0, 1.2), Vec3::new(1.2, 0.75, 0.6));
    let items = vec![bed, desk.clone()];

    assert!(!index.collides(&desk, desk.position, &items, None));
    assert!(index.collides(&desk, Vec3::ZERO, &items, None));
    assert!(index.overlapping_pairs(&items).is_empty());
}

#[test]
fn test_pick_nearest_item() {
    let ctx = RaycastContext::new(
        CameraState {
            position: Vec3::new(0.0, 10.0, 0.0),
            target: Vec3::ZERO,
            fov_y: std::f32::consts::FRAC_PI_2,
        },
        CanvasRect::new(0.0, 0.0, 1000.0, 1000.0),
    );
    let items = vec![
        item("shelf", ItemKind::Bookshelf, Vec3::ZERO, Vec3::new(0.8, 1.8, 0.3)),
        item("book", ItemKind::Book, Vec3::new(0.0, 1.8, 0.0), Vec3::new(0.03, 0.22, 0.15)),
    ];
    // The book sits on top of the shelf and is closer to the camera
    assert_eq!(pick_item(&ctx, Vec2::new(500.0, 500.0), &items), Some(ItemId::from("book")));
    assert_eq!(pick_item(&ctx, Vec2::new(515.0, 500.0), &items), Some(ItemId::from("shelf")));
    assert_eq!(pick_item(&ctx, Vec2::new(900.0, 900.0), &items), None);
}
