//! Config Module
//!
//! Centralized policy parameters for placement, collision, undo, arrangement
//! and motion feedback.

pub mod editor_config;

pub use editor_config::{
    ArrangementConfig, DEFAULT_UNDO_LIMIT, EditorConfig, MotionConfig, ShrinkPolicy, SnapPolicy,
};
