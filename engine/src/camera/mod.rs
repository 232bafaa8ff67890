//! Camera Module
//!
//! Pointer raycasting against placement planes. Camera state itself belongs
//! to the renderer; it is handed in per event as a [`RaycastContext`].

pub mod raycast;

pub use raycast::{
    CameraState, CanvasRect, PlaneTarget, Ray, RaycastContext, ShelfLevels, pick_item,
    ray_direction, raycast_pointer,
};
