//! Spring-animation vocabulary and the animator boundary.
//!
//! The engine never integrates spring physics itself; it issues
//! fire-and-forget commands to a host-implemented [`Animator`] and
//! records the commanded targets on its glyphs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Stiffness/damping pair for one spring animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
}

impl SpringParams {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self { stiffness, damping }
    }
}

/// Partial transform target for one glyph.
///
/// Properties left as `None` are untouched by the animation: a scatter
/// moves only the offset, a shake only the rotation, a reset all three.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformDelta {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotation: Option<f64>,
}

impl TransformDelta {
    /// Target only the offset.
    pub fn offset(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            rotation: None,
        }
    }

    /// Target only the rotation, in degrees.
    pub fn rotate(degrees: f64) -> Self {
        Self {
            x: None,
            y: None,
            rotation: Some(degrees),
        }
    }

    /// Target the rest transform: offset (0, 0), rotation 0.
    pub fn rest() -> Self {
        Self {
            x: Some(0.0),
            y: Some(0.0),
            rotation: Some(0.0),
        }
    }
}

/// One fire-and-forget spring animation for a single glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationCommand {
    /// Target glyph index.
    pub glyph: usize,

    /// Properties to animate and their targets.
    pub delta: TransformDelta,

    /// Spring constants for this animation.
    pub spring: SpringParams,

    /// Start delay; staggers propagate a wave across the glyph sequence.
    pub delay: Duration,
}

/// Error starting a spring animation.
#[derive(Debug, thiserror::Error)]
#[error("Animation start failed: {message}")]
pub struct MotionError {
    pub message: String,
}

impl MotionError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

/// Host-implemented spring animation backend.
///
/// Fire-and-forget: the engine consumes no completion value. The start
/// result exists so a failure for one glyph can be logged without
/// aborting the rest of a staggered sequence.
pub trait Animator: Send + Sync {
    fn animate(&self, command: AnimationCommand) -> Result<(), MotionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_delta_leaves_rotation_alone() {
        let delta = TransformDelta::offset(12.0, -3.0);
        assert_eq!(delta.x, Some(12.0));
        assert_eq!(delta.y, Some(-3.0));
        assert_eq!(delta.rotation, None);
    }

    #[test]
    fn test_rotate_delta_leaves_offset_alone() {
        let delta = TransformDelta::rotate(7.5);
        assert_eq!(delta.x, None);
        assert_eq!(delta.y, None);
        assert_eq!(delta.rotation, Some(7.5));
    }

    #[test]
    fn test_rest_targets_everything() {
        let delta = TransformDelta::rest();
        assert_eq!(delta.x, Some(0.0));
        assert_eq!(delta.y, Some(0.0));
        assert_eq!(delta.rotation, Some(0.0));
    }

    #[test]
    fn test_default_delta_is_empty() {
        assert_eq!(TransformDelta::default(), TransformDelta {
            x: None,
            y: None,
            rotation: None
        });
    }
}
