//! Drag Tests - Transactional Drag, Undo and Persistence
//!
//! Drives the editor through the same pointer stream a host UI would send,
//! using a top-down camera where pixel (500 + 50x, 500 + 50z) lands on floor
//! point (x, z).

use furnish_engine::camera::{CameraState, CanvasRect, RaycastContext};
use furnish_engine::editor::{DragOutcome, Editor, PointerResponse, Tilt};
use furnish_engine::error::ImportError;
use furnish_engine::input::PointerEvent;
use furnish_engine::scene::{EditMode, ItemId, ItemKind};
use glam::{Vec2, Vec3};

const BED_AND_DESK: &str = r##"{
    "room": { "width": 5.0, "depth": 4.0, "height": 2.8 },
    "gridSize": 0.25,
    "items": [
        { "id": "bed", "type": "bed", "name": "Bed",
          "position": [0.0, 0.0, 0.0], "rotation": 0.0,
          "dimensions": [1.6, 0.5, 2.0], "color": "#c8b8a0" },
        { "id": "desk", "type": "desk", "name": "Desk",
          "position": [1.5, 0.0, 1.2], "rotation": 0.0,
          "dimensions": [1.2, 0.75, 0.6], "color": "#a0522d" }
    ]
}"##;

fn top_down() -> RaycastContext {
    RaycastContext::new(
        CameraState {
            position: Vec3::new(0.0, 10.0, 0.0),
            target: Vec3::ZERO,
            fov_y: std::f32::consts::FRAC_PI_2,
        },
        CanvasRect::new(0.0, 0.0, 1000.0, 1000.0),
    )
}

fn px(x: f32, z: f32) -> Vec2 {
    Vec2::new(500.0 + 50.0 * x, 500.0 + 50.0 * z)
}

fn bed_and_desk() -> Editor {
    let mut editor = Editor::default().with_seed(3);
    editor.import_room(BED_AND_DESK).unwrap();
    editor
}

fn desk() -> ItemId {
    ItemId::from("desk")
}

// ============================================================================
// Commit / revert
// ============================================================================

#[test]
fn test_colliding_drop_reverts_to_start() {
    let mut editor = bed_and_desk();
    let ctx = top_down();
    let start = editor.item(&desk()).unwrap().position;

    // No UI-supplied target: the pointer picks the desk
    let response = editor.handle_pointer(&ctx, &PointerEvent::down(px(1.5, 1.2)));
    assert_eq!(response, PointerResponse::Started(desk()));
    assert!(editor.is_dragging());
    assert_eq!(editor.selection().map(|s| s.id), Some(desk()));

    match editor.handle_pointer(&ctx, &PointerEvent::moved(px(0.0, 0.0))) {
        PointerResponse::Preview(preview) => assert!(preview.colliding),
        other => panic!("expected preview, got {other:?}"),
    }
    assert!(editor.is_colliding(&desk()));
    assert!(!editor.is_colliding(&ItemId::from("bed")));

    let response = editor.handle_pointer(&ctx, &PointerEvent::up(px(0.0, 0.0)));
    assert_eq!(
        response,
        PointerResponse::Finished(DragOutcome::Reverted {
            item: desk(),
            position: start
        })
    );
    assert_eq!(editor.item(&desk()).unwrap().position, start);
    assert_eq!(editor.item(&ItemId::from("bed")).unwrap().position, Vec3::ZERO);
    assert!(!editor.is_dragging());
    assert!(!editor.is_colliding(&desk()));
}

#[test]
fn test_valid_drop_commits_and_undo_restores() {
    let mut editor = bed_and_desk();
    let ctx = top_down();
    assert!(!editor.can_undo());

    editor.handle_pointer(&ctx, &PointerEvent::down(px(1.5, 1.2)).on(desk()));
    editor.handle_pointer(&ctx, &PointerEvent::moved(px(-1.0, 0.4)));
    editor.handle_pointer(&ctx, &PointerEvent::moved(px(-1.55, -1.45)));
    let response = editor.handle_pointer(&ctx, &PointerEvent::cancel(px(-1.55, -1.45)));

    let PointerResponse::Finished(outcome) = response else {
        panic!("expected the drag to finish");
    };
    assert!(outcome.is_committed());
    let placed = editor.item(&desk()).unwrap().position;
    assert!((placed.x + 1.5).abs() < 1e-4);
    assert!((placed.z + 1.5).abs() < 1e-4);

    // One snapshot for the whole drag, not one per move
    assert_eq!(editor.undo_depth(), 1);
    assert!(editor.undo());
    assert_eq!(editor.item(&desk()).unwrap().position, Vec3::new(1.5, 0.0, 1.2));
    assert!(!editor.can_undo());
}

#[test]
fn test_drag_clamps_to_room_walls() {
    let mut editor = bed_and_desk();
    let ctx = top_down();
    editor.handle_pointer(&ctx, &PointerEvent::down(px(1.5, 1.2)).on(desk()));
    editor.handle_pointer(&ctx, &PointerEvent::moved(px(4.5, 3.5)));
    editor.handle_pointer(&ctx, &PointerEvent::up(px(4.5, 3.5)));

    let placed = editor.item(&desk()).unwrap().position;
    assert!((placed.x - (2.5 - 0.57)).abs() < 1e-4);
    assert!((placed.z - (2.0 - 0.285)).abs() < 1e-4);
}

#[test]
fn test_only_one_drag_at_a_time() {
    let mut editor = bed_and_desk();
    let ctx = top_down();
    editor.handle_pointer(&ctx, &PointerEvent::down(px(1.5, 1.2)).on(desk()));

    let second =
        editor.handle_pointer(&ctx, &PointerEvent::down(px(0.0, 0.0)).on(ItemId::from("bed")));
    assert_eq!(second, PointerResponse::Ignored);
    assert_eq!(editor.drag_session().active().map(|d| d.item.clone()), Some(desk()));
}

#[test]
fn test_pointer_down_on_empty_floor_clears_selection() {
    let mut editor = bed_and_desk();
    let ctx = top_down();
    editor.select(Some(desk()));
    let response = editor.handle_pointer(&ctx, &PointerEvent::down(px(-2.0, -1.8)));
    assert_eq!(response, PointerResponse::Ignored);
    assert!(editor.selection().is_none());
    assert!(!editor.is_dragging());
}

#[test]
fn test_window_release_finalizes_active_session() {
    let mut editor = bed_and_desk();
    let ctx = top_down();
    let start = editor.item(&desk()).unwrap().position;

    editor.pointer_down(&ctx, px(1.5, 1.2), Some(desk()));
    editor.pointer_move(&ctx, px(0.2, 0.1));
    // The owning element went away; only the window listener fires
    let outcome = editor.on_window_pointer_release();

    assert!(matches!(outcome, Some(DragOutcome::Reverted { .. })));
    assert_eq!(editor.item(&desk()).unwrap().position, start);
    assert!(!editor.is_dragging());
    assert!(editor.on_window_pointer_release().is_none());
}

#[test]
fn test_undo_refused_mid_drag() {
    let mut editor = bed_and_desk();
    let ctx = top_down();
    editor.pointer_down(&ctx, px(1.5, 1.2), Some(desk()));
    assert!(editor.can_undo());
    assert!(!editor.undo());
    assert!(editor.is_dragging());
}

#[test]
fn test_tilt_follows_drag() {
    let mut editor = bed_and_desk();
    let ctx = top_down();
    editor.pointer_down(&ctx, px(1.5, 1.2), Some(desk()));
    editor.tick_frame(1.0 / 60.0);

    let mut tilt = Tilt::default();
    for step in 1..=10 {
        editor.pointer_move(&ctx, px(1.5, 1.2 - 0.25 * step as f32));
        tilt = editor.tick_frame(1.0 / 60.0);
    }
    // Moving toward -Z pitches backward
    assert!(tilt.pitch < 0.0);
    // Tilt never reaches the authoritative transform
    assert_eq!(editor.item(&desk()).unwrap().rotation(), 0.0);
}

// ============================================================================
// Catalog drops and detail mode
// ============================================================================

#[test]
fn test_catalog_drop_lands_on_nearest_shelf() {
    let mut editor = Editor::default().with_seed(11);
    let shelf = editor.add_item(ItemKind::Bookshelf, Vec3::new(0.0, 0.0, -1.5)).unwrap();
    assert!(editor.enter_detail(&shelf));

    // Looking down at the middle of the shelf from the front
    let ctx = RaycastContext::new(
        CameraState {
            position: Vec3::new(0.0, 2.5, 1.0),
            target: Vec3::new(0.0, 0.9, -1.5),
            fov_y: 50f32.to_radians(),
        },
        CanvasRect::new(0.0, 0.0, 1000.0, 1000.0),
    );
    let book = editor.drop_from_catalog(&ctx, "book", Vec2::new(500.0, 500.0)).unwrap();

    let placed = editor.item(&book).unwrap();
    assert_eq!(placed.kind(), ItemKind::Book);
    assert!((placed.position.y - 0.9).abs() < 1e-5);
    assert!(placed.position.x.abs() < 1e-3);
    assert!((placed.position.z + 1.5).abs() < 1e-3);
    assert_eq!(editor.selection().map(|s| s.id), Some(book));
}

#[test]
fn test_unknown_payload_is_ignored() {
    let mut editor = Editor::default();
    assert!(editor.drop_from_catalog(&top_down(), "spaceship", px(0.0, 0.0)).is_none());
    assert!(!editor.can_undo());
}

#[test]
fn test_removing_host_leaves_detail_mode() {
    let mut editor = Editor::default().with_seed(5);
    let shelf = editor.add_item(ItemKind::Bookshelf, Vec3::ZERO).unwrap();
    editor.enter_detail(&shelf);
    editor.select(Some(shelf.clone()));
    assert!(editor.remove_selected().is_some());
    assert_eq!(editor.mode(), &EditMode::Room);

    // Undo brings the shelf back but not the mode
    assert!(editor.undo());
    assert!(editor.item(&shelf).is_some());
    assert_eq!(editor.mode(), &EditMode::Room);
}

// ============================================================================
// Undo bound and persistence
// ============================================================================

#[test]
fn test_undo_history_is_bounded() {
    let mut editor = Editor::default().with_seed(9);
    for i in 0..25 {
        editor.add_item(ItemKind::Candle, Vec3::new(-2.0 + i as f32 * 0.1, 0.0, 0.0));
    }
    assert_eq!(editor.undo_depth(), 20);
    let mut undone = 0;
    while editor.undo() {
        undone += 1;
    }
    assert_eq!(undone, 20);
    assert_eq!(editor.scene().len(), 5);
}

#[test]
fn test_export_import_round_trip() {
    let mut editor = Editor::default().with_seed(4);
    editor.add_item(ItemKind::Bed, Vec3::ZERO);
    let desk = editor.add_item(ItemKind::Desk, Vec3::new(1.5, 0.0, 1.2)).unwrap();
    editor.set_rotation(&desk, 90.0);
    editor.add_item(ItemKind::Book, Vec3::new(-2.0, 0.0, -1.5));

    let json = editor.export_room().unwrap();
    let mut restored = Editor::default();
    restored.import_room(&json).unwrap();

    assert_eq!(restored.scene().items(), editor.scene().items());
    assert_eq!(restored.scene().room(), editor.scene().room());
    assert!(!restored.can_undo());
}

#[test]
fn test_malformed_import_changes_nothing() {
    let mut editor = bed_and_desk();
    editor.set_color(&desk(), "#000000");
    let before = editor.scene().items().to_vec();
    let depth = editor.undo_depth();

    let err = editor.import_room(r#"{ "items": [] }"#).unwrap_err();
    assert!(matches!(err, ImportError::MissingField("room")));
    assert!(editor.import_room("not json").is_err());

    assert_eq!(editor.scene().items(), before.as_slice());
    assert_eq!(editor.undo_depth(), depth);
}
