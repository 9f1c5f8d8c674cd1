//! Input event types crossing the host/engine boundary.
//!
//! The host forwards its raw UI events to a mounted engine instance as
//! plain data: pointer movement deltas, render-frame ticks, per-glyph
//! hover entries, and page visibility changes. Events are consumed in
//! arrival order and never leave the process.

/// Monotonic host timestamp in milliseconds (the `performance.now()`
/// convention: relative to an arbitrary epoch, never wall-clock).
pub type TimestampMs = u64;

/// A single host input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Raw pointer movement with per-event deltas in pixels.
    PointerMove {
        timestamp_ms: TimestampMs,
        /// Horizontal movement since the previous raw event.
        dx: f64,
        /// Vertical movement since the previous raw event.
        dy: f64,
    },

    /// One render frame elapsed. Batches velocity publication with the
    /// host's paint, mirroring a `requestAnimationFrame` callback.
    FrameTick,

    /// The pointer entered a glyph's hover area.
    HoverEnter {
        /// Stable ordinal of the glyph within the mounted heading.
        glyph: usize,
    },

    /// Page visibility changed; `hidden` follows the document state.
    Visibility { hidden: bool },
}

impl InputEvent {
    /// Create a pointer-move event.
    pub fn pointer_move(timestamp_ms: TimestampMs, dx: f64, dy: f64) -> Self {
        Self::PointerMove { timestamp_ms, dx, dy }
    }

    /// Create a hover-enter event for the given glyph index.
    pub fn hover_enter(glyph: usize) -> Self {
        Self::HoverEnter { glyph }
    }

    /// Create a visibility-change event.
    pub fn visibility(hidden: bool) -> Self {
        Self::Visibility { hidden }
    }

    /// Extract the movement delta if this event carries one.
    pub fn movement(&self) -> Option<(f64, f64)> {
        match self {
            Self::PointerMove { dx, dy, .. } => Some((*dx, *dy)),
            _ => None,
        }
    }
}
