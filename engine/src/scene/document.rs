//! Persisted room document
//!
//! JSON shape shared with the persistence layer:
//!
//! ```json
//! {
//!   "room": { "width": 5.0, "depth": 4.0, "height": 2.8 },
//!   "gridSize": 0.25,
//!   "items": [
//!     { "id": "…", "type": "book", "name": "Book",
//!       "position": [0.0, 0.9, -1.5], "rotation": 0.0,
//!       "dimensions": [0.03, 0.22, 0.15], "color": "#2f4f4f",
//!       "orientation": "upright", "spineColor": "#aa3333", "sizeVariant": 1.05 }
//!   ]
//! }
//! ```
//!
//! Import is all-or-nothing: the document is parsed and validated in full
//! before anything is handed back to the caller.

use std::collections::HashSet;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::item::{BookOrientation, BookStyle, ItemId, ItemKind, PlacedItem};
use crate::error::ImportError;
use crate::world::RoomDimensions;

/// Room block of the document.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
}

/// One persisted item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub name: String,
    pub position: [f32; 3],
    #[serde(default)]
    pub rotation: f32,
    pub dimensions: [f32; 3],
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<BookOrientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spine_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_variant: Option<f32>,
}

/// The whole persisted document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDocument {
    pub room: RoomRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<f32>,
    pub items: Vec<ItemRecord>,
}

impl From<&PlacedItem> for ItemRecord {
    fn from(item: &PlacedItem) -> Self {
        let book = item.book.as_ref();
        Self {
            id: item.id.to_string(),
            kind: item.kind(),
            name: item.name.clone(),
            position: item.position.to_array(),
            rotation: item.rotation(),
            dimensions: item.dimensions.to_array(),
            color: item.color.clone(),
            orientation: book.map(|b| b.orientation),
            spine_color: book.and_then(|b| b.spine_color.clone()),
            size_variant: book.map(|b| b.size_variant),
        }
    }
}

impl ItemRecord {
    /// Validate and convert into a live item.
    pub fn into_item(self) -> Result<PlacedItem, ImportError> {
        let invalid = |reason: &str| ImportError::InvalidItem {
            id: self.id.clone(),
            reason: reason.to_string(),
        };
        if self.id.is_empty() {
            return Err(invalid("empty id"));
        }
        if !self.position.iter().all(|v| v.is_finite()) || !self.rotation.is_finite() {
            return Err(invalid("non-finite transform"));
        }
        if !self.dimensions.iter().all(|v| v.is_finite() && *v > 0.0) {
            return Err(invalid("dimensions must be positive"));
        }
        if let Some(variant) = self.size_variant {
            if !(variant.is_finite() && variant > 0.0) {
                return Err(invalid("sizeVariant must be positive"));
            }
        }

        let name = if self.name.is_empty() {
            self.kind.tag().to_string()
        } else {
            self.name
        };
        let item = PlacedItem::new(
            ItemId::new(self.id),
            self.kind,
            name,
            Vec3::from_array(self.position),
            Vec3::from_array(self.dimensions),
            self.color,
        )
        .with_rotation(self.rotation)
        .with_book_style(BookStyle {
            orientation: self.orientation.unwrap_or_default(),
            spine_color: self.spine_color,
            size_variant: self.size_variant.unwrap_or(1.0),
        });
        Ok(item)
    }
}

impl RoomDocument {
    /// Capture the current room and items.
    pub fn capture(room: RoomDimensions, grid_size: f32, items: &[PlacedItem]) -> Self {
        Self {
            room: RoomRecord {
                width: room.width,
                depth: room.depth,
                height: room.height,
            },
            grid_size: Some(grid_size),
            items: items.iter().map(ItemRecord::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a document, reporting missing top-level fields by name.
    pub fn parse(json: &str) -> Result<Self, ImportError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let object = value.as_object().ok_or(ImportError::NotAnObject)?;
        for field in ["room", "items"] {
            if !object.contains_key(field) {
                return Err(ImportError::MissingField(field));
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Validate the whole document into live state, all or nothing.
    pub fn into_scene_parts(
        self,
    ) -> Result<(RoomDimensions, Option<f32>, Vec<PlacedItem>), ImportError> {
        let room = RoomDimensions::new(self.room.width, self.room.depth, self.room.height);
        if !room.is_valid() {
            return Err(ImportError::InvalidRoom(format!(
                "extents must be positive, got {} x {} x {}",
                room.width, room.depth, room.height
            )));
        }
        if let Some(grid) = self.grid_size {
            if !(grid.is_finite() && grid > 0.0) {
                return Err(ImportError::InvalidRoom(format!(
                    "gridSize must be positive, got {grid}"
                )));
            }
        }

        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(self.items.len());
        for record in self.items {
            if !seen.insert(record.id.clone()) {
                return Err(ImportError::DuplicateId(record.id));
            }
            items.push(record.into_item()?);
        }
        Ok((room, self.grid_size, items))
    }
}
