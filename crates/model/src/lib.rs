//! Kinetype Data Model
//!
//! Defines the vocabulary shared by the engine and its hosts:
//! - **Events:** host input events (pointer moves, frame ticks, hover, visibility)
//! - **Glyphs:** the owned, stable-indexed unit sequence of a split heading
//! - **Motion:** spring parameters, transform deltas, and the animator boundary
//! - **Velocity:** the pointer velocity vector and its derived polar form
//! - **Carousel:** image references, slide direction, published frames
//! - **Config:** tuning for scatter/idle/reset behavior and carousel presets
//!
//! Everything here is plain data; the timer chains and event loops that
//! animate it live in `kinetype-engine`.

pub mod carousel;
pub mod config;
pub mod event;
pub mod glyph;
pub mod motion;
pub mod velocity;

pub use carousel::*;
pub use config::*;
pub use event::*;
pub use glyph::*;
pub use motion::*;
pub use velocity::*;
