//! Carousel vocabulary: image references, slide direction, published frames.

/// Reference to one carousel image, resolved by the host (a URL or
/// asset key; the engine never loads it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub src: String,
}

impl ImageRef {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }
}

/// Sign of a slide transition, for the host's transition visuals.
///
/// `Backward` is carried in the data model but the cycle only ever
/// advances forward; no transition currently emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    #[default]
    Forward,
    Backward,
}

impl SlideDirection {
    /// The transition sign: +1 forward, -1 backward.
    pub fn signum(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Snapshot of carousel render state, published latest-wins on every
/// phase change.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselFrame {
    /// Current slide index.
    pub index: usize,

    /// The image shown on the current slide.
    pub image: ImageRef,

    /// Sign of the transition that produced this slide.
    pub direction: SlideDirection,

    /// Whether the stamp overlay is visible.
    pub stamped: bool,
}
