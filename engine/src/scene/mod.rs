//! Scene Module
//!
//! The live item collection and the editing context around it: room
//! extents, snap grid, edit mode and selection. Single writer, no locking.

pub mod catalog;
pub mod document;
pub mod item;

pub use catalog::{BuiltinCatalog, Catalog, CatalogEntry};
pub use document::{ItemRecord, RoomDocument, RoomRecord};
pub use item::{
    BookOrientation, BookStyle, ItemId, ItemKind, PlacedItem, SizeClass, normalize_degrees,
};

use glam::{Vec2, Vec3};

use crate::config::ShrinkPolicy;
use crate::physics::{item_footprint, projected_footprint};
use crate::world::{ContainerBounds, RoomDimensions, SnapGrid};

/// Which container placements are clamped to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Whole room floor
    #[default]
    Room,
    /// Detail editing on one host item's surface
    Detail { host: ItemId },
}

/// Current selection as exposed to the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub id: ItemId,
    pub kind: ItemKind,
}

/// The placed-item collection plus its editing context.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    items: Vec<PlacedItem>,
    room: RoomDimensions,
    grid: SnapGrid,
    mode: EditMode,
    selection: Option<ItemId>,
}

impl Scene {
    pub fn new(room: RoomDimensions, grid: SnapGrid) -> Self {
        Self {
            items: Vec::new(),
            room,
            grid,
            mode: EditMode::Room,
            selection: None,
        }
    }

    /// Items in placement order.
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: &ItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut PlacedItem> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.item(id).is_some()
    }

    /// Append an item. Refused when the id is already taken.
    pub fn add(&mut self, item: PlacedItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove an item, dropping selection and detail mode that referenced it.
    pub fn remove(&mut self, id: &ItemId) -> Option<PlacedItem> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        let removed = self.items.remove(index);
        self.drop_dangling_references();
        Some(removed)
    }

    /// Replace the whole collection (undo restore, import).
    pub fn replace_items(&mut self, items: Vec<PlacedItem>) {
        self.items = items;
        self.drop_dangling_references();
    }

    pub fn room(&self) -> RoomDimensions {
        self.room
    }

    pub fn set_room(&mut self, room: RoomDimensions) {
        self.room = room;
    }

    pub fn grid(&self) -> &SnapGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut SnapGrid {
        &mut self.grid
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    /// Host item id while in detail mode.
    pub fn host_id(&self) -> Option<&ItemId> {
        match &self.mode {
            EditMode::Detail { host } => Some(host),
            EditMode::Room => None,
        }
    }

    pub fn host(&self) -> Option<&PlacedItem> {
        self.host_id().and_then(|id| self.item(id))
    }

    /// Enter detail mode on `host`. Refused for unknown ids.
    pub fn enter_detail(&mut self, host: &ItemId) -> bool {
        if !self.contains(host) {
            return false;
        }
        tracing::debug!(host = %host, "entering detail mode");
        self.mode = EditMode::Detail { host: host.clone() };
        true
    }

    /// Back to room mode. Returns whether detail mode was active.
    pub fn exit_detail(&mut self) -> bool {
        let was_detail = matches!(self.mode, EditMode::Detail { .. });
        if was_detail {
            tracing::debug!("leaving detail mode");
        }
        self.mode = EditMode::Room;
        was_detail
    }

    pub fn selection(&self) -> Option<Selection> {
        let id = self.selection.as_ref()?;
        self.item(id).map(|item| Selection {
            id: id.clone(),
            kind: item.kind(),
        })
    }

    pub fn selected_id(&self) -> Option<&ItemId> {
        self.selection.as_ref()
    }

    /// Select an item, or clear with `None`. Unknown ids clear the selection.
    pub fn select(&mut self, id: Option<ItemId>) {
        self.selection = id.filter(|id| self.contains(id));
    }

    /// Host surface `item` is placed on: the detail host, for small items
    /// other than the host. Furniture stays on the room floor.
    pub fn surface_for(&self, item: &PlacedItem) -> Option<&PlacedItem> {
        self.host().filter(|host| host.id != item.id && item.is_small())
    }

    /// Container an item is clamped to: its host surface's nominal projected
    /// footprint, otherwise the room floor.
    pub fn container_for(&self, item: &PlacedItem) -> ContainerBounds {
        match self.surface_for(item) {
            Some(host) => {
                let size = projected_footprint(host.scaled_dimensions(), host.rotation());
                ContainerBounds::from_center(Vec2::new(host.position.x, host.position.z), size)
            }
            None => self.room.floor(),
        }
    }

    /// `item`'s position clamped into its container, height unchanged.
    pub fn clamped_position(&self, item: &PlacedItem, shrink: &ShrinkPolicy) -> Vec3 {
        let half = item_footprint(item, shrink).half_xz();
        let clamped = self
            .container_for(item)
            .clamp(Vec2::new(item.position.x, item.position.z), half);
        Vec3::new(clamped.x, item.position.y, clamped.y)
    }

    fn drop_dangling_references(&mut self) {
        let selection_gone = self.selection.as_ref().is_some_and(|id| !self.contains(id));
        if selection_gone {
            self.selection = None;
        }
        let host_gone = self.host_id().is_some_and(|host| !self.contains(host));
        if host_gone {
            self.mode = EditMode::Room;
        }
    }
}
