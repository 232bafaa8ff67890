//! Motion Feedback
//!
//! Presentational tilt for the item under a drag. The renderer calls
//! [`MotionFeedback::tick`] once per frame with the dragged item's live
//! position; the returned [`Tilt`] leans the mesh in the direction of travel
//! and settles back when the item stops. Nothing here writes to the scene.

use glam::{Vec2, Vec3};

use crate::config::MotionConfig;

/// Largest frame step fed to the spring. Long frames (tab switch, debugger)
/// would otherwise blow up the integration.
const MAX_FRAME_DT: f32 = 0.1;

/// Visual lean in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    /// Rotation about X, positive when moving toward +Z
    pub pitch: f32,
    /// Rotation about Z, positive when moving toward -X
    pub roll: f32,
}

impl Tilt {
    pub fn is_settled(&self) -> bool {
        self.pitch.abs() < 1e-4 && self.roll.abs() < 1e-4
    }
}

/// Spring-damped tilt driven by per-frame position deltas.
#[derive(Clone, Debug)]
pub struct MotionFeedback {
    config: MotionConfig,
    /// (pitch, roll)
    tilt: Vec2,
    tilt_velocity: Vec2,
    last_position: Option<Vec3>,
}

impl MotionFeedback {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config,
            tilt: Vec2::ZERO,
            tilt_velocity: Vec2::ZERO,
            last_position: None,
        }
    }

    pub fn tilt(&self) -> Tilt {
        Tilt {
            pitch: self.tilt.x,
            roll: self.tilt.y,
        }
    }

    /// Advance one frame.
    ///
    /// `live_position` is the dragged item's current position, or `None` when
    /// no drag is active (the tilt relaxes to zero). Non-positive `dt` leaves
    /// the state untouched.
    pub fn tick(&mut self, live_position: Option<Vec3>, dt: f32) -> Tilt {
        if dt.is_nan() || dt <= 0.0 {
            return self.tilt();
        }
        let dt = dt.min(MAX_FRAME_DT);

        let target = match (live_position, self.last_position) {
            (Some(now), Some(before)) => {
                let velocity = (now - before) / dt;
                let max = self.config.max_tilt;
                Vec2::new(
                    (velocity.z * self.config.tilt_per_speed).clamp(-max, max),
                    (-velocity.x * self.config.tilt_per_speed).clamp(-max, max),
                )
            }
            _ => Vec2::ZERO,
        };
        self.last_position = live_position;

        // F = -k (x - target) - c v
        let displacement = self.tilt - target;
        let force =
            -self.config.stiffness * displacement - self.config.damping * self.tilt_velocity;
        self.tilt_velocity += force * dt;
        self.tilt += self.tilt_velocity * dt;

        self.tilt()
    }

    /// Drop all motion state, e.g. after a drag ends.
    pub fn reset(&mut self) {
        self.tilt = Vec2::ZERO;
        self.tilt_velocity = Vec2::ZERO;
        self.last_position = None;
    }
}

impl Default for MotionFeedback {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}
