//! Hover-triggered scatter displacement.

use std::time::Duration;

use kinetype_model::{AnimationCommand, ScatterConfig, TransformDelta, Velocity};

/// Converts the pointer velocity at hover time into a spring target
/// for the hovered glyph.
///
/// The displacement magnitude is the pointer speed times the distance
/// factor, applied along the direction of travel. Rotation is never
/// touched here. Each hover yields an independent animation, so rapid
/// hovers across different glyphs run their springs concurrently.
#[derive(Debug, Clone)]
pub struct ScatterController {
    config: ScatterConfig,
}

impl ScatterController {
    pub fn new(config: ScatterConfig) -> Self {
        Self { config }
    }

    /// Displacement vector for a hover at the given velocity.
    pub fn displacement(&self, velocity: Velocity) -> (f64, f64) {
        let distance = velocity.speed() * self.config.distance_factor;
        let angle = velocity.angle();
        (distance * angle.cos(), distance * angle.sin())
    }

    /// Build the scatter animation for one hovered glyph.
    ///
    /// Always uses the configured spring constants and no start delay.
    pub fn command_for(&self, glyph: usize, velocity: Velocity) -> AnimationCommand {
        let (x, y) = self.displacement(velocity);
        AnimationCommand {
            glyph,
            delta: TransformDelta::offset(x, y),
            spring: self.config.spring,
            delay: Duration::ZERO,
        }
    }
}
