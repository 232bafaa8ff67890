//! Editor Module
//!
//! The UI-facing surface of the placement engine. [`Editor`] owns the scene,
//! the undo history and the single drag session, and routes pointer and
//! keyboard input through them. Rendering, camera orbit and audio live in
//! the host application and are reached through the [`OrbitControls`] and
//! [`PlacementFeedback`] traits.
//!
//! Every discrete mutating action snapshots the scene before it mutates.
//! A drag is snapshotted once, on pointer-down, never per pointer-move.

pub mod arrange;
pub mod drag;
pub mod motion;
pub mod undo;

pub use arrange::{ArrangeReport, Arrangement, ArrangementPlan, ArrangementPlanner, Placement};
pub use drag::{ActiveDrag, DragOutcome, DragPreview, DragSession};
pub use motion::{MotionFeedback, Tilt};
pub use undo::{Snapshot, UndoManager};

use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::camera::{RaycastContext, pick_item, raycast_pointer};
use crate::config::EditorConfig;
use crate::error::ImportError;
use crate::input::{DragPayload, EditorKey, KeyCommand, MouseButton, PointerEvent, PointerPhase};
use crate::scene::{
    BookOrientation, BookStyle, BuiltinCatalog, Catalog, EditMode, ItemId, ItemKind, PlacedItem,
    RoomDocument, Scene, Selection,
};
use crate::world::{RoomDimensions, SnapGrid};

/// Spine colors handed out to new books.
const SPINE_PALETTE: [&str; 8] = [
    "#8b0000", "#1f3a5f", "#2e5e3a", "#6b4226", "#4b0082", "#b8860b", "#2f4f4f", "#7f1734",
];

/// Range of the random size variant given to new books.
const BOOK_SIZE_VARIANT: std::ops::RangeInclusive<f32> = 0.9..=1.1;

// ============================================================================
// COLLABORATOR SEAMS
// ============================================================================

/// Camera orbit/pan/zoom owned by the renderer. Disabled for the duration of
/// a drag.
pub trait OrbitControls {
    fn set_enabled(&mut self, enabled: bool);
}

/// Receives a signal whenever a drag commits (e.g. to play a sound).
pub trait PlacementFeedback {
    fn placement_succeeded(&mut self, item: &ItemId);
}

/// Orbit controls for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedOrbit;

impl OrbitControls for DetachedOrbit {
    fn set_enabled(&mut self, _enabled: bool) {}
}

/// Feedback sink that ignores every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentFeedback;

impl PlacementFeedback for SilentFeedback {
    fn placement_succeeded(&mut self, _item: &ItemId) {}
}

/// What a pointer event did.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerResponse {
    /// Nothing happened
    Ignored,
    /// A drag started on this item
    Started(ItemId),
    /// The dragged item moved
    Preview(DragPreview),
    /// The drag ended
    Finished(DragOutcome),
}

// ============================================================================
// EDITOR
// ============================================================================

/// Room editor: scene + undo + drag session + collaborators.
pub struct Editor {
    config: EditorConfig,
    scene: Scene,
    undo: UndoManager,
    drag: DragSession,
    motion: MotionFeedback,
    /// Shared dragging flag; camera orbit is suspended while set
    dragging: bool,
    orbit: Box<dyn OrbitControls>,
    feedback: Box<dyn PlacementFeedback>,
    catalog: Box<dyn Catalog>,
    rng: StdRng,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            scene: Scene::new(RoomDimensions::default(), SnapGrid::from_policy(&config.snap)),
            undo: UndoManager::new(config.undo_limit),
            drag: DragSession::new(),
            motion: MotionFeedback::new(config.motion),
            dragging: false,
            orbit: Box::new(DetachedOrbit),
            feedback: Box::new(SilentFeedback),
            catalog: Box::new(BuiltinCatalog),
            rng: StdRng::from_os_rng(),
            config,
        }
    }

    pub fn with_room(mut self, room: RoomDimensions) -> Self {
        self.scene.set_room(room);
        self
    }

    pub fn with_orbit_controls(mut self, orbit: Box<dyn OrbitControls>) -> Self {
        self.orbit = orbit;
        self
    }

    pub fn with_feedback(mut self, feedback: Box<dyn PlacementFeedback>) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn with_catalog(mut self, catalog: Box<dyn Catalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Deterministic randomness for book attributes and stack jitter.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn item(&self, id: &ItemId) -> Option<&PlacedItem> {
        self.scene.item(id)
    }

    pub fn selection(&self) -> Option<Selection> {
        self.scene.selection()
    }

    pub fn mode(&self) -> &EditMode {
        self.scene.mode()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn drag_session(&self) -> &DragSession {
        &self.drag
    }

    /// Collision-preview flag: set only on the dragged item while its live
    /// position collides.
    pub fn is_colliding(&self, id: &ItemId) -> bool {
        self.drag.is_colliding(id)
    }

    // ------------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------------

    pub fn handle_pointer(
        &mut self,
        ctx: &RaycastContext,
        event: &PointerEvent,
    ) -> PointerResponse {
        match event.phase {
            PointerPhase::Down => {
                if event.button != MouseButton::Left {
                    return PointerResponse::Ignored;
                }
                match self.pointer_down(ctx, event.position, event.target.clone()) {
                    Some(id) => PointerResponse::Started(id),
                    None => PointerResponse::Ignored,
                }
            }
            PointerPhase::Move => self
                .pointer_move(ctx, event.position)
                .map_or(PointerResponse::Ignored, PointerResponse::Preview),
            PointerPhase::Up | PointerPhase::Cancel => self
                .pointer_up()
                .map_or(PointerResponse::Ignored, PointerResponse::Finished),
        }
    }

    /// Start dragging `target`, or whatever item is under the pointer.
    ///
    /// Pointer-down on empty space clears the selection. Refused while a
    /// drag is already in progress.
    pub fn pointer_down(
        &mut self,
        ctx: &RaycastContext,
        pointer: Vec2,
        target: Option<ItemId>,
    ) -> Option<ItemId> {
        if self.dragging {
            tracing::warn!("pointer-down ignored: drag already in progress");
            return None;
        }

        let host = self.scene.host_id().cloned();
        let target = target.or_else(|| {
            let pickable = self
                .scene
                .items()
                .iter()
                .filter(|item| Some(&item.id) != host.as_ref());
            pick_item(ctx, pointer, pickable)
        });
        let Some(id) = target else {
            self.scene.select(None);
            return None;
        };

        if let Err(err) = self.drag.begin(&self.scene, &id) {
            tracing::warn!(item = %id, error = %err, "drag refused");
            return None;
        }
        // begin() leaves the scene untouched, so this still captures the
        // pre-drag state
        self.undo.snapshot(&self.scene);

        self.dragging = true;
        self.orbit.set_enabled(false);
        self.scene.select(Some(id.clone()));
        self.motion.reset();
        Some(id)
    }

    pub fn pointer_move(&mut self, ctx: &RaycastContext, pointer: Vec2) -> Option<DragPreview> {
        self.drag.update(&mut self.scene, ctx, pointer, &self.config)
    }

    /// Pointer-up and pointer-cancel: commit or revert the active drag.
    pub fn pointer_up(&mut self) -> Option<DragOutcome> {
        if !self.drag.is_active() && !self.dragging {
            return None;
        }
        let outcome = self.drag.end(&mut self.scene, &self.config);
        self.release_drag_flag();
        if let Some(DragOutcome::Committed { item, .. }) = &outcome {
            self.feedback.placement_succeeded(item);
        }
        outcome
    }

    pub fn pointer_cancel(&mut self) -> Option<DragOutcome> {
        self.pointer_up()
    }

    /// Window-level release listener. Finalizes a session whose owning UI
    /// element never delivered its pointer-up, and always clears the
    /// dragging flag.
    pub fn on_window_pointer_release(&mut self) -> Option<DragOutcome> {
        if self.drag.is_active() {
            return self.pointer_up();
        }
        if self.dragging {
            tracing::debug!("cleared orphaned dragging flag");
        }
        self.release_drag_flag();
        None
    }

    fn release_drag_flag(&mut self) {
        self.dragging = false;
        self.orbit.set_enabled(true);
    }

    /// Advance the presentational drag tilt by one frame.
    pub fn tick_frame(&mut self, dt: f32) -> Tilt {
        let live = self
            .drag
            .active()
            .and_then(|drag| self.scene.item(&drag.item))
            .map(|item| item.position);
        self.motion.tick(live, dt)
    }

    // ------------------------------------------------------------------------
    // Keyboard input
    // ------------------------------------------------------------------------

    /// Returns whether the key changed anything.
    pub fn handle_key(&mut self, key: EditorKey) -> bool {
        if self.dragging {
            return false;
        }
        match key.command() {
            Some(KeyCommand::RemoveSelected) => self.remove_selected().is_some(),
            Some(KeyCommand::Exit) => {
                let had_selection = self.scene.selected_id().is_some();
                self.scene.select(None);
                self.scene.exit_detail() || had_selection
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------------
    // Adding and removing items
    // ------------------------------------------------------------------------

    /// Add a catalog item at `position`, clamped into its container.
    /// Refused when the clamped position collides.
    pub fn add_item(&mut self, kind: ItemKind, position: Vec3) -> Option<ItemId> {
        if self.dragging {
            return None;
        }
        let mut item = self.new_item(kind)?;
        item.position = position;
        item.position = self.scene.clamped_position(&item, &self.config.shrink);
        if drag::collides_at(&self.scene, &item, item.position, &self.config) {
            tracing::info!(
                kind = kind.tag(),
                x = item.position.x,
                z = item.position.z,
                "add refused: collides"
            );
            return None;
        }
        let id = item.id.clone();

        self.undo.snapshot(&self.scene);
        self.scene.add(item);
        tracing::info!(item = %id, kind = kind.tag(), "item added");
        Some(id)
    }

    /// Catalog → canvas drop. Resolves the pointer the same way a drag
    /// update would and adds the new item there.
    ///
    /// Unknown payloads and pointers that miss the target plane are
    /// ignored. A drop that would collide is refused.
    pub fn drop_from_catalog(
        &mut self,
        ctx: &RaycastContext,
        payload: &str,
        pointer: Vec2,
    ) -> Option<ItemId> {
        if self.dragging {
            return None;
        }
        let Some(DragPayload { kind }) = DragPayload::parse(payload) else {
            tracing::debug!(payload, "unknown drop payload");
            return None;
        };
        let mut item = self.new_item(kind)?;
        let base = self.scene.surface_for(&item).map_or(0.0, |host| host.position.y);
        item.position.y = base;

        let target = drag::plane_target(&self.scene, &item, &self.config);
        let hit = raycast_pointer(ctx, pointer, &target)?;
        let position = drag::settle_position(&self.scene, &item, hit, &self.config);
        if !drag::placement_valid(&self.scene, &item, position, &self.config) {
            tracing::info!(kind = kind.tag(), x = position.x, z = position.z, "drop refused");
            return None;
        }
        item.position = position;
        let id = item.id.clone();

        self.undo.snapshot(&self.scene);
        self.scene.add(item);
        self.scene.select(Some(id.clone()));
        tracing::info!(
            item = %id,
            kind = kind.tag(),
            x = position.x,
            y = position.y,
            z = position.z,
            "item dropped"
        );
        Some(id)
    }

    /// Build a new item from the catalog. Books get a random size variant
    /// and spine color.
    fn new_item(&mut self, kind: ItemKind) -> Option<PlacedItem> {
        let entry = self.catalog.entry(kind)?;
        let item = PlacedItem::new(
            ItemId::generate(),
            entry.kind,
            entry.name,
            Vec3::ZERO,
            entry.dimensions,
            entry.color,
        );
        if !kind.is_book() {
            return Some(item);
        }
        let spine = SPINE_PALETTE[self.rng.random_range(0..SPINE_PALETTE.len())];
        let size_variant = self.rng.random_range(BOOK_SIZE_VARIANT);
        Some(item.with_book_style(BookStyle {
            orientation: BookOrientation::Upright,
            spine_color: Some(spine.to_string()),
            size_variant,
        }))
    }

    /// Remove the selected item. Ignored while dragging.
    pub fn remove_selected(&mut self) -> Option<PlacedItem> {
        let id = self.scene.selected_id()?.clone();
        self.remove_item(&id)
    }

    pub fn remove_item(&mut self, id: &ItemId) -> Option<PlacedItem> {
        if self.dragging || !self.scene.contains(id) {
            return None;
        }
        self.undo.snapshot(&self.scene);
        let removed = self.scene.remove(id);
        tracing::info!(item = %id, "item removed");
        removed
    }

    /// Select an item (or clear with `None`).
    pub fn select(&mut self, id: Option<ItemId>) {
        tracing::debug!(item = ?id, "selection changed");
        self.scene.select(id);
    }

    // ------------------------------------------------------------------------
    // Property setters
    // ------------------------------------------------------------------------

    /// Snapshot, then apply `edit` to one item. Refused while dragging.
    fn edit_item(&mut self, id: &ItemId, edit: impl FnOnce(&mut PlacedItem)) -> bool {
        if self.dragging || !self.scene.contains(id) {
            return false;
        }
        self.undo.snapshot(&self.scene);
        match self.scene.item_mut(id) {
            Some(item) => {
                edit(item);
                true
            }
            None => false,
        }
    }

    /// Apply a geometric edit to a copy of the item, clamp the copy into its
    /// container and keep it only if it lands free of collisions.
    fn edit_placement(&mut self, id: &ItemId, edit: impl FnOnce(&mut PlacedItem)) -> bool {
        if self.dragging {
            return false;
        }
        let Some(mut candidate) = self.scene.item(id).cloned() else {
            return false;
        };
        edit(&mut candidate);
        candidate.position = self.scene.clamped_position(&candidate, &self.config.shrink);
        if drag::collides_at(&self.scene, &candidate, candidate.position, &self.config) {
            tracing::info!(item = %id, "edit refused: collides");
            return false;
        }
        self.edit_item(id, |item| *item = candidate)
    }

    pub fn set_position(&mut self, id: &ItemId, position: Vec3) -> bool {
        if !position.is_finite() {
            return false;
        }
        self.edit_placement(id, |item| item.position = position)
    }

    pub fn set_rotation(&mut self, id: &ItemId, degrees: f32) -> bool {
        if !degrees.is_finite() {
            return false;
        }
        self.edit_placement(id, |item| item.set_rotation(degrees))
    }

    /// Change nominal dimensions. Every component must be positive.
    pub fn set_dimensions(&mut self, id: &ItemId, dimensions: Vec3) -> bool {
        if !(dimensions.is_finite() && dimensions.min_element() > 0.0) {
            return false;
        }
        self.edit_placement(id, |item| item.dimensions = dimensions)
    }

    pub fn set_color(&mut self, id: &ItemId, color: impl Into<String>) -> bool {
        let color = color.into();
        self.edit_item(id, |item| item.color = color)
    }

    /// Books only.
    pub fn set_orientation(&mut self, id: &ItemId, orientation: BookOrientation) -> bool {
        if !self.is_book(id) {
            return false;
        }
        self.edit_item(id, |item| item.set_orientation(orientation))
    }

    /// Books only.
    pub fn set_spine_color(&mut self, id: &ItemId, color: impl Into<String>) -> bool {
        if !self.is_book(id) {
            return false;
        }
        let color = color.into();
        self.edit_item(id, |item| {
            if let Some(book) = item.book.as_mut() {
                book.spine_color = Some(color);
            }
        })
    }

    fn is_book(&self, id: &ItemId) -> bool {
        self.scene.item(id).is_some_and(|item| item.book.is_some())
    }

    /// Change the large-class grid cell.
    pub fn set_grid_size(&mut self, cell: f32) -> bool {
        if !(cell.is_finite() && cell > 0.0) {
            return false;
        }
        self.scene.grid_mut().large_cell = cell;
        true
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.scene.grid_mut().enabled = enabled;
    }

    // ------------------------------------------------------------------------
    // Modes
    // ------------------------------------------------------------------------

    /// Enter detail editing on `host`. Refused while dragging.
    pub fn enter_detail(&mut self, host: &ItemId) -> bool {
        !self.dragging && self.scene.enter_detail(host)
    }

    pub fn exit_detail(&mut self) -> bool {
        !self.dragging && self.scene.exit_detail()
    }

    // ------------------------------------------------------------------------
    // Undo
    // ------------------------------------------------------------------------

    /// Restore the most recent snapshot. Refused while dragging; a no-op on
    /// an empty history.
    pub fn undo(&mut self) -> bool {
        if self.dragging {
            tracing::debug!("undo ignored during drag");
            return false;
        }
        self.undo.undo(&mut self.scene)
    }

    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    // ------------------------------------------------------------------------
    // Arrangement
    // ------------------------------------------------------------------------

    /// Run one arrangement against the detail host (or the selection).
    /// Nothing is snapshotted when there is nothing to move.
    pub fn arrange(&mut self, arrangement: Arrangement) -> Option<ArrangeReport> {
        if self.dragging {
            return None;
        }
        let planner = ArrangementPlanner::new(&self.config.arrangement, &self.config.shrink);
        let plan = planner.plan(&self.scene, arrangement, &mut self.rng)?;
        self.undo.snapshot(&self.scene);
        Some(plan.apply(&mut self.scene))
    }

    pub fn arrange_row(&mut self) -> Option<ArrangeReport> {
        self.arrange(Arrangement::Row)
    }

    pub fn arrange_stack(&mut self) -> Option<ArrangeReport> {
        self.arrange(Arrangement::Stack)
    }

    pub fn arrange_shrine(&mut self) -> Option<ArrangeReport> {
        self.arrange(Arrangement::Shrine)
    }

    pub fn align_items(&mut self) -> Option<ArrangeReport> {
        self.arrange(Arrangement::Align)
    }

    pub fn space_evenly(&mut self) -> Option<ArrangeReport> {
        self.arrange(Arrangement::SpaceEvenly)
    }

    // ------------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------------

    pub fn export_room(&self) -> Result<String, serde_json::Error> {
        let document = RoomDocument::capture(
            self.scene.room(),
            self.scene.grid().large_cell,
            self.scene.items(),
        );
        let json = document.to_json()?;
        tracing::info!(items = self.scene.len(), "room exported");
        Ok(json)
    }

    /// Replace the whole room from a persisted document, all or nothing.
    ///
    /// Success clears the selection, detail mode and the undo history.
    pub fn import_room(&mut self, json: &str) -> Result<(), ImportError> {
        if self.dragging {
            return Err(ImportError::DragInProgress);
        }
        let parsed = RoomDocument::parse(json).and_then(RoomDocument::into_scene_parts);
        let (room, grid_size, items) = match parsed {
            Ok(parts) => parts,
            Err(err) => {
                tracing::warn!(error = %err, "room import rejected");
                return Err(err);
            }
        };

        let count = items.len();
        self.scene.set_room(room);
        self.scene.grid_mut().large_cell = grid_size.unwrap_or(self.config.snap.large_cell);
        self.scene.replace_items(items);
        self.scene.select(None);
        self.scene.exit_detail();
        self.undo.clear();
        tracing::info!(items = count, width = room.width, depth = room.depth, "room imported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        orbit: Vec<bool>,
        placed: Vec<ItemId>,
    }

    struct RecordingOrbit(Rc<RefCell<Recorder>>);
    struct RecordingFeedback(Rc<RefCell<Recorder>>);

    impl OrbitControls for RecordingOrbit {
        fn set_enabled(&mut self, enabled: bool) {
            self.0.borrow_mut().orbit.push(enabled);
        }
    }

    impl PlacementFeedback for RecordingFeedback {
        fn placement_succeeded(&mut self, item: &ItemId) {
            self.0.borrow_mut().placed.push(item.clone());
        }
    }

    fn editor_with_recorder() -> (Editor, Rc<RefCell<Recorder>>) {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let editor = Editor::default()
            .with_seed(1)
            .with_orbit_controls(Box::new(RecordingOrbit(recorder.clone())))
            .with_feedback(Box::new(RecordingFeedback(recorder.clone())));
        (editor, recorder)
    }

    #[test]
    fn test_add_item_snapshots_and_clamps() {
        let mut editor = Editor::default().with_seed(1);
        let id = editor.add_item(ItemKind::Desk, Vec3::new(9.0, 0.0, 0.0)).unwrap();
        assert!(editor.can_undo());
        let x = editor.item(&id).unwrap().position.x;
        assert!((x - 1.93).abs() < 1e-4);

        assert!(editor.undo());
        assert!(editor.scene().is_empty());
    }

    #[test]
    fn test_new_books_get_decorative_attributes() {
        let mut editor = Editor::default().with_seed(42);
        let id = editor.add_item(ItemKind::Book, Vec3::ZERO).unwrap();
        let book = editor.item(&id).unwrap().book.clone().unwrap();
        assert!((0.9..=1.1).contains(&book.size_variant));
        assert!(SPINE_PALETTE.contains(&book.spine_color.as_deref().unwrap()));
    }

    #[test]
    fn test_keyboard_delete_and_escape() {
        let mut editor = Editor::default().with_seed(1);
        let shelf = editor.add_item(ItemKind::Bookshelf, Vec3::ZERO).unwrap();
        editor.select(Some(shelf.clone()));
        editor.enter_detail(&shelf);

        assert!(editor.handle_key(EditorKey::Escape));
        assert_eq!(editor.mode(), &EditMode::Room);
        assert!(editor.selection().is_none());

        editor.select(Some(shelf.clone()));
        assert!(editor.handle_key(EditorKey::Backspace));
        assert!(editor.scene().is_empty());
        assert!(!editor.handle_key(EditorKey::Unknown));
    }

    #[test]
    fn test_setters_snapshot_and_validate() {
        let mut editor = Editor::default().with_seed(1);
        let desk = editor.add_item(ItemKind::Desk, Vec3::ZERO).unwrap();
        let depth = editor.undo_depth();

        assert!(editor.set_color(&desk, "#ffffff"));
        assert!(!editor.set_dimensions(&desk, Vec3::new(1.0, -1.0, 1.0)));
        assert!(!editor.set_orientation(&desk, BookOrientation::Flat));
        assert_eq!(editor.undo_depth(), depth + 1);

        assert!(editor.undo());
        assert_eq!(editor.item(&desk).unwrap().color, "#a0522d");
    }

    /// Bed at the origin with a desk just past its foot.
    fn editor_with_bed_and_desk() -> (Editor, ItemId, ItemId) {
        let mut editor = Editor::default().with_seed(3);
        let bed = editor.add_item(ItemKind::Bed, Vec3::ZERO).unwrap();
        let desk = editor.add_item(ItemKind::Desk, Vec3::new(0.0, 0.0, 1.5)).unwrap();
        (editor, bed, desk)
    }

    #[test]
    fn test_add_item_refuses_overlap() {
        let (mut editor, _, _) = editor_with_bed_and_desk();
        let depth = editor.undo_depth();
        assert!(editor.add_item(ItemKind::Wardrobe, Vec3::ZERO).is_none());
        assert_eq!(editor.scene().len(), 2);
        assert_eq!(editor.undo_depth(), depth);
    }

    #[test]
    fn test_set_position_refuses_overlap() {
        let (mut editor, _, desk) = editor_with_bed_and_desk();
        let depth = editor.undo_depth();
        assert!(!editor.set_position(&desk, Vec3::new(0.3, 0.0, 0.3)));
        assert_eq!(editor.item(&desk).unwrap().position, Vec3::new(0.0, 0.0, 1.5));
        assert_eq!(editor.undo_depth(), depth);

        assert!(editor.set_position(&desk, Vec3::new(1.5, 0.0, 1.5)));
        assert_eq!(editor.undo_depth(), depth + 1);
    }

    #[test]
    fn test_set_rotation_refuses_overlap() {
        let (mut editor, _, desk) = editor_with_bed_and_desk();
        let depth = editor.undo_depth();
        // Turned sideways the desk reaches back into the bed
        assert!(!editor.set_rotation(&desk, 90.0));
        assert_eq!(editor.item(&desk).unwrap().rotation(), 0.0);
        assert_eq!(editor.undo_depth(), depth);
    }

    #[test]
    fn test_set_dimensions_refuses_overlap() {
        let (mut editor, _, desk) = editor_with_bed_and_desk();
        let depth = editor.undo_depth();
        assert!(!editor.set_dimensions(&desk, Vec3::new(1.2, 0.75, 1.4)));
        assert_eq!(editor.item(&desk).unwrap().dimensions, Vec3::new(1.2, 0.75, 0.6));
        assert_eq!(editor.undo_depth(), depth);
        let index = crate::physics::CollisionIndex::new(&editor.config().shrink);
        assert!(index.overlapping_pairs(editor.scene().items()).is_empty());
    }

    #[test]
    fn test_detail_mode_only_binds_small_items_to_host() {
        let mut editor = Editor::default().with_seed(8);
        let shelf = editor.add_item(ItemKind::Bookshelf, Vec3::new(0.0, 0.0, -1.5)).unwrap();
        assert!(editor.enter_detail(&shelf));

        let wardrobe = editor.add_item(ItemKind::Wardrobe, Vec3::new(-1.5, 0.0, 1.0)).unwrap();
        let position = editor.item(&wardrobe).unwrap().position;
        assert_eq!(position, Vec3::new(-1.5, 0.0, 1.0));

        let book = editor.add_item(ItemKind::Book, Vec3::new(2.0, 0.9, -1.5)).unwrap();
        let position = editor.item(&book).unwrap().position;
        assert!(position.x <= 0.4);
        assert_eq!(position.y, 0.9);
    }

    #[test]
    fn test_orphaned_drag_flag_recovers() {
        let (mut editor, recorder) = editor_with_recorder();
        editor.dragging = true;
        assert!(editor.on_window_pointer_release().is_none());
        assert!(!editor.is_dragging());
        assert_eq!(recorder.borrow().orbit.last(), Some(&true));
    }

    #[test]
    fn test_import_refused_while_dragging() {
        let mut editor = Editor::default();
        editor.dragging = true;
        assert!(matches!(
            editor.import_room(r#"{"room":{"width":5,"depth":4,"height":2.8},"items":[]}"#),
            Err(ImportError::DragInProgress)
        ));
    }

    #[test]
    fn test_feedback_on_commit_only() {
        use crate::camera::{CameraState, CanvasRect};

        let (mut editor, recorder) = editor_with_recorder();
        let desk = editor.add_item(ItemKind::Desk, Vec3::new(-1.5, 0.0, -1.5)).unwrap();
        let ctx = RaycastContext::new(
            CameraState {
                position: Vec3::new(0.0, 10.0, 0.0),
                target: Vec3::ZERO,
                fov_y: std::f32::consts::FRAC_PI_2,
            },
            CanvasRect::new(0.0, 0.0, 1000.0, 1000.0),
        );

        assert_eq!(editor.pointer_down(&ctx, Vec2::new(425.0, 425.0), None), Some(desk.clone()));
        assert!(editor.is_dragging());
        assert_eq!(recorder.borrow().orbit, vec![false]);

        editor.pointer_move(&ctx, Vec2::new(575.0, 575.0));
        let outcome = editor.pointer_up().unwrap();
        assert!(outcome.is_committed());
        assert_eq!(recorder.borrow().placed, vec![desk]);
        assert_eq!(recorder.borrow().orbit, vec![false, true]);
    }
}
