//! Catalog seam
//!
//! The furniture catalog is owned by the host application; the engine only
//! needs a type → defaults lookup when a new item is added.

use glam::Vec3;

use super::item::ItemKind;

/// Defaults for a new item of one kind.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub kind: ItemKind,
    pub name: String,
    /// Default (width, height, depth) in meters
    pub dimensions: Vec3,
    /// Default material color, hex string
    pub color: String,
}

/// Type → defaults lookup.
pub trait Catalog {
    fn entry(&self, kind: ItemKind) -> Option<CatalogEntry>;
}

/// Built-in defaults for every [`ItemKind`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinCatalog;

impl Catalog for BuiltinCatalog {
    fn entry(&self, kind: ItemKind) -> Option<CatalogEntry> {
        let (name, [w, h, d], color) = match kind {
            ItemKind::Bed => ("Bed", [1.6, 0.5, 2.0], "#c8b8a0"),
            ItemKind::Sofa => ("Sofa", [2.0, 0.85, 0.9], "#6b7b8c"),
            ItemKind::Armchair => ("Armchair", [0.85, 0.9, 0.85], "#7d6b5d"),
            ItemKind::Chair => ("Chair", [0.45, 0.9, 0.5], "#8b5a2b"),
            ItemKind::Desk => ("Desk", [1.2, 0.75, 0.6], "#a0522d"),
            ItemKind::Table => ("Table", [1.4, 0.75, 0.8], "#deb887"),
            ItemKind::Bookshelf => ("Bookshelf", [0.8, 1.8, 0.3], "#8b4513"),
            ItemKind::Wardrobe => ("Wardrobe", [1.0, 2.0, 0.6], "#d2b48c"),
            ItemKind::Dresser => ("Dresser", [1.0, 0.8, 0.5], "#bc8f8f"),
            ItemKind::Nightstand => ("Nightstand", [0.45, 0.55, 0.4], "#cd853f"),
            ItemKind::TvStand => ("TV Stand", [1.5, 0.5, 0.4], "#4a4a4a"),
            ItemKind::Book => ("Book", [0.03, 0.22, 0.15], "#2f4f4f"),
            ItemKind::BookStack => ("Book Stack", [0.22, 0.12, 0.16], "#556b2f"),
            ItemKind::Decor => ("Vase", [0.12, 0.25, 0.12], "#e0e0e0"),
            ItemKind::Plant => ("Plant", [0.2, 0.35, 0.2], "#228b22"),
            ItemKind::Lamp => ("Lamp", [0.18, 0.4, 0.18], "#f5deb3"),
            ItemKind::Frame => ("Photo Frame", [0.15, 0.2, 0.03], "#000000"),
            ItemKind::Candle => ("Candle", [0.06, 0.12, 0.06], "#fffaf0"),
            ItemKind::Figurine => ("Figurine", [0.07, 0.15, 0.07], "#b8860b"),
        };
        Some(CatalogEntry {
            kind,
            name: name.to_string(),
            dimensions: Vec3::new(w, h, d),
            color: color.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_kind() {
        for kind in ItemKind::ALL {
            let entry = BuiltinCatalog.entry(kind).unwrap();
            assert_eq!(entry.kind, kind);
            assert!(entry.dimensions.min_element() > 0.0);
        }
    }
}
