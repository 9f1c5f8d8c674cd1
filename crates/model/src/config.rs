//! Engine tuning configuration.
//!
//! Every constant that shapes the feel of the engine lives here, with
//! defaults matching the shipped page variants. Variants that want a
//! different feel load a JSON tuning file over the defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::motion::SpringParams;

/// Tuning for one mounted scatter-text instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterTextConfig {
    /// Minimum spacing between accepted pointer samples (ms).
    pub sample_interval_ms: u64,

    /// Hover scatter behavior.
    pub scatter: ScatterConfig,

    /// Idle-detection shake behavior.
    pub idle: IdleConfig,

    /// Return-to-rest behavior after a shake.
    pub reset: ResetConfig,
}

/// Hover scatter tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    /// Displacement in pixels per unit of pointer speed (px/s).
    pub distance_factor: f64,

    /// Spring constants for the scatter animation.
    pub spring: SpringParams,
}

/// Idle-detection shake tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdleConfig {
    /// Inactivity before the shake starts (ms).
    pub trigger_ms: u64,

    /// Symmetric rotation range in degrees: each glyph draws a target
    /// uniformly from [-max, +max]. Negative values behave as zero.
    pub max_rotation_deg: f64,

    /// Per-glyph delay step (ms); glyph *i* starts after `i` steps.
    pub stagger_ms: u64,

    /// Spring constants for the shake animation.
    pub spring: SpringParams,

    /// Fixed seed for reproducible shake rotations; `None` seeds from
    /// the system clock at mount.
    pub seed: Option<u64>,
}

/// Return-to-rest tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetConfig {
    /// Shake duration before the return-to-rest starts (ms).
    pub trigger_ms: u64,

    /// Per-glyph delay step (ms).
    pub stagger_ms: u64,

    /// Spring constants for the reset animation.
    pub spring: SpringParams,
}

/// Two-phase carousel timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// First phase: the slide shows unstamped (ms).
    pub stamp_appear_ms: u64,

    /// Second phase: the stamp overlay is visible before advancing (ms).
    pub stamp_visible_ms: u64,
}

impl Default for ScatterTextConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 16,
            scatter: ScatterConfig::default(),
            idle: IdleConfig::default(),
            reset: ResetConfig::default(),
        }
    }
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            distance_factor: 0.1,
            spring: SpringParams::new(100.0, 50.0),
        }
    }
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            trigger_ms: 100,
            max_rotation_deg: 8.0,
            stagger_ms: 40,
            spring: SpringParams::new(200.0, 20.0),
            seed: None,
        }
    }
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            trigger_ms: 600,
            stagger_ms: 15,
            spring: SpringParams::new(150.0, 25.0),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            stamp_appear_ms: 700,
            stamp_visible_ms: 600,
        }
    }
}

impl IdleConfig {
    /// Idle trigger delay as a duration.
    pub fn trigger(&self) -> Duration {
        Duration::from_millis(self.trigger_ms)
    }

    /// Stagger delay for glyph `index`.
    pub fn delay_for(&self, index: usize) -> Duration {
        Duration::from_millis(index as u64 * self.stagger_ms)
    }
}

impl ResetConfig {
    /// Reset trigger delay as a duration.
    pub fn trigger(&self) -> Duration {
        Duration::from_millis(self.trigger_ms)
    }

    /// Stagger delay for glyph `index`.
    pub fn delay_for(&self, index: usize) -> Duration {
        Duration::from_millis(index as u64 * self.stagger_ms)
    }
}

impl CarouselConfig {
    /// The faster preset used by the compact page variants.
    pub fn fast() -> Self {
        Self {
            stamp_appear_ms: 450,
            stamp_visible_ms: 400,
        }
    }

    /// First-phase delay as a duration.
    pub fn stamp_appear(&self) -> Duration {
        Duration::from_millis(self.stamp_appear_ms)
    }

    /// Second-phase delay as a duration.
    pub fn stamp_visible(&self) -> Duration {
        Duration::from_millis(self.stamp_visible_ms)
    }

    /// Full dwell time of one slide.
    pub fn dwell(&self) -> Duration {
        self.stamp_appear() + self.stamp_visible()
    }
}

/// A complete tuning file: one scatter-text section, one carousel
/// section (`tuning.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineTuning {
    pub scatter_text: ScatterTextConfig,
    pub carousel: CarouselConfig,
}

/// Errors reading or parsing a tuning file.
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl EngineTuning {
    /// Load tuning from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TuningError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| TuningError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load tuning, falling back to defaults on any failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                tracing::warn!("Falling back to default tuning: {}", e);
                Self::default()
            }
        }
    }

    /// Save tuning as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TuningError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|e| TuningError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json).map_err(|e| TuningError::IoError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
