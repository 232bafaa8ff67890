//! Placed Items
//!
//! The unit of the scene: one piece of furniture or one small decorative
//! object, with its transform, nominal dimensions and material.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Unique item identifier. New items get a v4 UUID; imported documents may
/// carry any non-empty string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id for a newly added item.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Size class. Governs collision exemption, snap granularity and footprint
/// shrink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// Books and decor: near-continuous snapping, never collide with each other
    Small,
    /// Furniture: coarse grid, strict non-overlap
    Large,
}

/// Item category tag. Serialized as the document's `type` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    // Furniture
    Bed,
    Sofa,
    Armchair,
    Chair,
    Desk,
    Table,
    Bookshelf,
    Wardrobe,
    Dresser,
    Nightstand,
    TvStand,

    // Small objects
    Book,
    BookStack,
    Decor,
    Plant,
    Lamp,
    Frame,
    Candle,
    Figurine,
}

impl ItemKind {
    /// Every kind, furniture first.
    pub const ALL: [ItemKind; 19] = [
        ItemKind::Bed,
        ItemKind::Sofa,
        ItemKind::Armchair,
        ItemKind::Chair,
        ItemKind::Desk,
        ItemKind::Table,
        ItemKind::Bookshelf,
        ItemKind::Wardrobe,
        ItemKind::Dresser,
        ItemKind::Nightstand,
        ItemKind::TvStand,
        ItemKind::Book,
        ItemKind::BookStack,
        ItemKind::Decor,
        ItemKind::Plant,
        ItemKind::Lamp,
        ItemKind::Frame,
        ItemKind::Candle,
        ItemKind::Figurine,
    ];

    /// Size class is a pure function of the kind.
    pub fn size_class(self) -> SizeClass {
        match self {
            ItemKind::Book
            | ItemKind::BookStack
            | ItemKind::Decor
            | ItemKind::Plant
            | ItemKind::Lamp
            | ItemKind::Frame
            | ItemKind::Candle
            | ItemKind::Figurine => SizeClass::Small,
            _ => SizeClass::Large,
        }
    }

    /// Book-like items carry an orientation and spine decoration.
    pub fn is_book(self) -> bool {
        matches!(self, ItemKind::Book)
    }

    /// Purely ornamental objects, skipped by the shrine arrangement.
    pub fn is_decor(self) -> bool {
        matches!(
            self,
            ItemKind::Decor | ItemKind::Plant | ItemKind::Candle | ItemKind::Lamp
        )
    }

    /// Tag used in documents and drag-transfer payloads.
    pub fn tag(self) -> &'static str {
        match self {
            ItemKind::Bed => "bed",
            ItemKind::Sofa => "sofa",
            ItemKind::Armchair => "armchair",
            ItemKind::Chair => "chair",
            ItemKind::Desk => "desk",
            ItemKind::Table => "table",
            ItemKind::Bookshelf => "bookshelf",
            ItemKind::Wardrobe => "wardrobe",
            ItemKind::Dresser => "dresser",
            ItemKind::Nightstand => "nightstand",
            ItemKind::TvStand => "tv-stand",
            ItemKind::Book => "book",
            ItemKind::BookStack => "book-stack",
            ItemKind::Decor => "decor",
            ItemKind::Plant => "plant",
            ItemKind::Lamp => "lamp",
            ItemKind::Frame => "frame",
            ItemKind::Candle => "candle",
            ItemKind::Figurine => "figurine",
        }
    }

    /// Inverse of [`ItemKind::tag`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

/// How a book rests on its surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookOrientation {
    /// Spine out, standing
    #[default]
    Upright,
    /// Lying on its cover
    Flat,
    /// Cover facing out
    Faceout,
}

/// Decorative attributes of a book-like item.
#[derive(Clone, Debug, PartialEq)]
pub struct BookStyle {
    pub orientation: BookOrientation,
    /// Spine color, hex string
    pub spine_color: Option<String>,
    /// Uniform scale applied to the nominal dimensions
    pub size_variant: f32,
}

impl Default for BookStyle {
    fn default() -> Self {
        Self {
            orientation: BookOrientation::Upright,
            spine_color: None,
            size_variant: 1.0,
        }
    }
}

/// An item placed in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedItem {
    pub id: ItemId,
    kind: ItemKind,
    size_class: SizeClass,
    /// Display name
    pub name: String,
    /// World position; `y` is the base height
    pub position: Vec3,
    /// Yaw in degrees, kept in [0, 360)
    rotation: f32,
    /// Nominal (width, height, depth) in meters
    pub dimensions: Vec3,
    /// Material color, hex string
    pub color: String,
    /// Present for book-like items only
    pub book: Option<BookStyle>,
}

impl PlacedItem {
    /// Create an item. The size class is fixed here from the kind.
    pub fn new(
        id: ItemId,
        kind: ItemKind,
        name: impl Into<String>,
        position: Vec3,
        dimensions: Vec3,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            size_class: kind.size_class(),
            name: name.into(),
            position,
            rotation: 0.0,
            dimensions,
            color: color.into(),
            book: kind.is_book().then(BookStyle::default),
        }
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.set_rotation(degrees);
        self
    }

    pub fn with_book_style(mut self, style: BookStyle) -> Self {
        if self.kind.is_book() {
            self.book = Some(style);
        }
        self
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn size_class(&self) -> SizeClass {
        self.size_class
    }

    pub fn is_small(&self) -> bool {
        self.size_class == SizeClass::Small
    }

    /// Yaw in degrees, in [0, 360).
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = normalize_degrees(degrees);
    }

    pub fn orientation(&self) -> Option<BookOrientation> {
        self.book.as_ref().map(|b| b.orientation)
    }

    /// Set a book's orientation. Non-book items ignore it.
    pub fn set_orientation(&mut self, orientation: BookOrientation) {
        if let Some(book) = self.book.as_mut() {
            book.orientation = orientation;
        }
    }

    /// Nominal dimensions with the book size variant applied.
    pub fn scaled_dimensions(&self) -> Vec3 {
        match &self.book {
            Some(book) => self.dimensions * book.size_variant,
            None => self.dimensions,
        }
    }
}

/// Wrap an angle in degrees into [0, 360).
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
