//! Autonomous two-phase image carousel.

use tokio::sync::watch;
use tokio::task::JoinHandle;

use kinetype_model::{CarouselConfig, CarouselFrame, ImageRef, SlideDirection};

use crate::timer::TimerSlot;

/// The slide/stamp state machine, independent of any clock.
///
/// Each dwell runs two phases: the slide shows unstamped, the stamp
/// overlay appears, then the index advances (wrapping) and the next
/// slide starts unstamped again.
#[derive(Debug, Clone)]
pub struct CarouselCycle {
    images: Vec<ImageRef>,
    index: usize,
    stamped: bool,
    direction: SlideDirection,
}

impl CarouselCycle {
    /// Build the cycle; `None` when there are no images to show.
    pub fn new(images: Vec<ImageRef>) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        Some(Self {
            images,
            index: 0,
            stamped: false,
            direction: SlideDirection::Forward,
        })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_stamped(&self) -> bool {
        self.stamped
    }

    /// The currently rendered frame.
    pub fn frame(&self) -> CarouselFrame {
        CarouselFrame {
            index: self.index,
            image: self.images[self.index].clone(),
            direction: self.direction,
            stamped: self.stamped,
        }
    }

    /// First phase elapsed: show the stamp overlay.
    pub fn stamp(&mut self) -> CarouselFrame {
        self.stamped = true;
        self.frame()
    }

    /// Second phase elapsed: advance to the next slide, unstamped.
    pub fn advance(&mut self) -> CarouselFrame {
        self.stamped = false;
        self.direction = SlideDirection::Forward;
        self.index = (self.index + 1) % self.images.len();
        self.frame()
    }
}

/// A mounted carousel.
///
/// Mounting spawns one task that owns the cycle and its single timer;
/// frames reach the host through a latest-value channel. A mount with
/// no images stays inert: no task, no timers, no frames.
pub struct Carousel {
    frames: Option<watch::Receiver<CarouselFrame>>,
    task: Option<JoinHandle<()>>,
}

impl Carousel {
    pub fn mount(images: Vec<ImageRef>, config: CarouselConfig) -> Carousel {
        let Some(cycle) = CarouselCycle::new(images) else {
            tracing::warn!("Carousel mounted with no images; staying inert");
            return Carousel {
                frames: None,
                task: None,
            };
        };

        tracing::info!(images = cycle.len(), "Carousel mounted");
        let (tx, rx) = watch::channel(cycle.frame());
        let task = tokio::spawn(run_cycle(cycle, config, tx));
        Carousel {
            frames: Some(rx),
            task: Some(task),
        }
    }

    /// Whether the cycle is running (false for an inert mount).
    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    /// A receiver following the published frames; `None` when inert.
    pub fn frames(&self) -> Option<watch::Receiver<CarouselFrame>> {
        self.frames.clone()
    }

    /// The most recently published frame; `None` when inert.
    pub fn current_frame(&self) -> Option<CarouselFrame> {
        self.frames.as_ref().map(|rx| rx.borrow().clone())
    }

    /// Stop the cycle and wait for the task to finish.
    pub async fn unmount(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
        tracing::info!("Carousel unmounted");
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Runs the two-phase dwell until the carousel is torn down.
async fn run_cycle(
    mut cycle: CarouselCycle,
    config: CarouselConfig,
    frames: watch::Sender<CarouselFrame>,
) {
    let mut timer = TimerSlot::new();
    loop {
        timer.arm(config.stamp_appear());
        timer.elapsed().await;
        if frames.send(cycle.stamp()).is_err() {
            break;
        }

        timer.arm(config.stamp_visible());
        timer.elapsed().await;
        if frames.send(cycle.advance()).is_err() {
            break;
        }
    }
    tracing::debug!("Carousel cycle ended");
}
