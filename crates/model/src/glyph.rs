//! Glyph handles for a split heading.
//!
//! A mounted heading is segmented once into an owned, stable-indexed
//! sequence of glyphs. Because the spring animator is asymptotic and
//! external, each glyph records the last *commanded* transform target;
//! the instantaneous interpolated values live in the host's renderer.

use crate::motion::TransformDelta;

/// One addressable unit of split heading text.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Stable ordinal within the heading (0-based).
    pub index: usize,

    /// The rendered unit, usually a single character.
    pub unit: String,

    /// Last commanded horizontal offset in pixels.
    pub offset_x: f64,

    /// Last commanded vertical offset in pixels.
    pub offset_y: f64,

    /// Last commanded rotation in degrees.
    pub rotation: f64,
}

impl Glyph {
    /// Create a glyph at rest.
    pub fn new(index: usize, unit: impl Into<String>) -> Self {
        Self {
            index,
            unit: unit.into(),
            offset_x: 0.0,
            offset_y: 0.0,
            rotation: 0.0,
        }
    }

    /// Whether the commanded target is the rest transform.
    pub fn at_rest(&self) -> bool {
        self.offset_x == 0.0 && self.offset_y == 0.0 && self.rotation == 0.0
    }
}

/// Splits a heading into ordered rendered units.
///
/// Implemented by the host's text-segmentation service; [`CharSegmenter`]
/// ships as the default.
pub trait TextSegmenter {
    fn segment(&self, heading: &str) -> Vec<String>;
}

/// Default segmenter: one unit per non-whitespace character.
///
/// Whitespace separates units and is not itself addressable.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharSegmenter;

impl TextSegmenter for CharSegmenter {
    fn segment(&self, heading: &str) -> Vec<String> {
        heading
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(String::from)
            .collect()
    }
}

/// The owned glyph sequence of one mounted heading.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphSet {
    glyphs: Vec<Glyph>,
}

impl GlyphSet {
    /// Build a set from segmented units, assigning ascending indices.
    pub fn from_units(units: Vec<String>) -> Self {
        let glyphs = units
            .into_iter()
            .enumerate()
            .map(|(index, unit)| Glyph::new(index, unit))
            .collect();
        Self { glyphs }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Glyph> {
        self.glyphs.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.iter()
    }

    /// Record a commanded transform for one glyph. Properties the delta
    /// leaves as `None` keep their previous target. Returns false for an
    /// index outside the set.
    pub fn apply(&mut self, index: usize, delta: &TransformDelta) -> bool {
        let Some(glyph) = self.glyphs.get_mut(index) else {
            return false;
        };
        if let Some(x) = delta.x {
            glyph.offset_x = x;
        }
        if let Some(y) = delta.y {
            glyph.offset_y = y;
        }
        if let Some(rotation) = delta.rotation {
            glyph.rotation = rotation;
        }
        true
    }

    /// Whether every glyph's commanded target is the rest transform.
    pub fn all_at_rest(&self) -> bool {
        self.glyphs.iter().all(Glyph::at_rest)
    }
}
