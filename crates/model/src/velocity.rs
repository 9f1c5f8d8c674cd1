//! Pointer velocity vector.

/// Instantaneous pointer velocity in pixels/second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Velocity {
    /// A pointer at rest.
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity from a movement delta in pixels over an elapsed interval
    /// in milliseconds. `elapsed_ms` must be positive; callers guard
    /// zero-width intervals before converting.
    pub fn from_delta(dx: f64, dy: f64, elapsed_ms: u64) -> Self {
        let elapsed_secs = elapsed_ms as f64 / 1000.0;
        Self {
            x: dx / elapsed_secs,
            y: dy / elapsed_secs,
        }
    }

    /// Scalar speed in pixels/second.
    pub fn speed(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Direction of travel in radians, measured as `atan2(y, x)`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}
