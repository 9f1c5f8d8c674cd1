//! Mounted scatter-text instances.
//!
//! Mounting segments the heading, spawns one task that owns every
//! piece of mutable state for that instance, and returns a handle the
//! host forwards its UI events through. The task multiplexes the event
//! channel with the idle supervisor's timers; nothing it owns is
//! shared, so there is no locking anywhere on the hot path.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use kinetype_model::{
    AnimationCommand, Animator, GlyphSet, InputEvent, ScatterTextConfig, TextSegmenter,
    TimestampMs,
};

use crate::idle::{IdleFire, IdleSupervisor};
use crate::scatter::ScatterController;
use crate::velocity::VelocityTracker;

/// A mounted heading.
///
/// Dropping the handle (or calling [`unmount`](Self::unmount)) closes
/// the event channel, which ends the engine task and cancels its
/// pending timers with it. A mount without a usable heading stays
/// inert: the handle exists but every method is a no-op.
pub struct ScatterText {
    events: Option<mpsc::UnboundedSender<InputEvent>>,
    task: Option<JoinHandle<()>>,
    glyph_count: usize,
}

impl ScatterText {
    pub fn mount(
        heading: Option<&str>,
        segmenter: &dyn TextSegmenter,
        animator: Arc<dyn Animator>,
        config: ScatterTextConfig,
    ) -> ScatterText {
        let Some(heading) = heading else {
            tracing::warn!("Heading target missing; mount stays inert");
            return ScatterText::inert();
        };

        let units = segmenter.segment(heading);
        if units.is_empty() {
            tracing::warn!("Heading segmented to zero glyphs; mount stays inert");
            return ScatterText::inert();
        }

        let glyphs = GlyphSet::from_units(units);
        let glyph_count = glyphs.len();
        tracing::info!(glyphs = glyph_count, "Scatter text mounted");

        let ScatterTextConfig {
            sample_interval_ms,
            scatter,
            idle,
            reset,
        } = config;

        let state = EngineState {
            glyphs,
            velocity: VelocityTracker::new(sample_interval_ms),
            scatter: ScatterController::new(scatter),
            idle: IdleSupervisor::new(idle, reset, glyph_count),
            animator,
        };

        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_engine(state, rx));
        ScatterText {
            events: Some(tx),
            task: Some(task),
            glyph_count,
        }
    }

    fn inert() -> ScatterText {
        ScatterText {
            events: None,
            task: None,
            glyph_count: 0,
        }
    }

    /// Whether an engine task is running (false for an inert mount).
    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    /// Number of glyphs the heading segmented into.
    pub fn glyph_count(&self) -> usize {
        self.glyph_count
    }

    /// Forward a raw pointer movement.
    pub fn pointer_move(&self, timestamp_ms: TimestampMs, dx: f64, dy: f64) {
        self.send(InputEvent::pointer_move(timestamp_ms, dx, dy));
    }

    /// Forward a render-frame tick.
    pub fn frame_tick(&self) {
        self.send(InputEvent::FrameTick);
    }

    /// Forward a hover entry on one glyph.
    pub fn hover_enter(&self, glyph: usize) {
        self.send(InputEvent::hover_enter(glyph));
    }

    /// Forward a page visibility change.
    pub fn visibility_changed(&self, hidden: bool) {
        self.send(InputEvent::visibility(hidden));
    }

    fn send(&self, event: InputEvent) {
        if let Some(events) = &self.events {
            // A task that already ended behaves like an unmount.
            let _ = events.send(event);
        }
    }

    /// Tear the instance down and wait for its task to finish.
    ///
    /// After this returns no timer can fire against the instance.
    pub async fn unmount(mut self) {
        self.events.take();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
        tracing::info!("Scatter text unmounted");
    }
}

/// Everything one engine task owns.
struct EngineState {
    glyphs: GlyphSet,
    velocity: VelocityTracker,
    scatter: ScatterController,
    idle: IdleSupervisor,
    animator: Arc<dyn Animator>,
}

impl EngineState {
    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove {
                timestamp_ms,
                dx,
                dy,
            } => {
                if self.velocity.ingest(dx, dy, timestamp_ms) {
                    self.idle.on_activity();
                } else {
                    tracing::trace!(timestamp_ms, "Pointer sample throttled");
                }
            }
            InputEvent::FrameTick => {
                self.velocity.publish();
            }
            InputEvent::HoverEnter { glyph } => self.handle_hover(glyph),
            InputEvent::Visibility { hidden } => {
                if hidden {
                    self.idle.on_hidden();
                } else {
                    self.idle.on_visible();
                }
            }
        }
    }

    fn handle_hover(&mut self, glyph: usize) {
        if self.glyphs.get(glyph).is_none() {
            tracing::debug!(glyph, "Hover on unknown glyph ignored");
            return;
        }
        // Scatter state first, so the rearm sees it.
        self.idle.on_scatter();
        let command = self.scatter.command_for(glyph, self.velocity.current());
        self.dispatch(vec![command]);
    }

    fn handle_fire(&mut self, fire: IdleFire) {
        let commands = match fire {
            IdleFire::Shake => self.idle.fire_idle(),
            IdleFire::Reset => self.idle.fire_reset(),
        };
        self.dispatch(commands);
    }

    /// Start each animation and record its target on the glyph.
    ///
    /// A failing start is logged and skipped; the rest of the staggered
    /// sequence still runs.
    fn dispatch(&mut self, commands: Vec<AnimationCommand>) {
        for command in commands {
            self.glyphs.apply(command.glyph, &command.delta);
            if let Err(error) = self.animator.animate(command) {
                tracing::warn!(glyph = command.glyph, %error, "Animation start failed");
            }
        }
    }
}

/// The per-instance event loop: host events multiplexed with the idle
/// supervisor's owned timers. Ends when the handle goes away.
async fn run_engine(mut state: EngineState, mut events: mpsc::UnboundedReceiver<InputEvent>) {
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(event) => state.handle_event(event),
                None => break,
            },
            fire = state.idle.next_fire() => state.handle_fire(fire),
        }
    }
    tracing::debug!("Engine loop ended");
}
