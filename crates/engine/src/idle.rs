//! Idle detection and the shake/reset cycle.
//!
//! After a scatter, the supervisor watches for inactivity. Once the
//! pointer has been quiet long enough it shakes every glyph toward a
//! random rotation, then returns the whole heading to rest. Both waits
//! are owned timers; every rearm cancels before it schedules, so a
//! stale firing can never race an updated state.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use kinetype_model::{AnimationCommand, IdleConfig, ResetConfig, TransformDelta};

use crate::timer::TimerSlot;

/// Where the supervisor sits in the idle cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdlePhase {
    /// Nothing scattered, nothing pending.
    Resting,
    /// Scattered and waiting out the inactivity window.
    Armed,
    /// Shake running, return-to-rest pending.
    Shaking,
    /// Page hidden mid-cycle; timers cancelled, glyphs frozen as-is.
    Suspended,
}

/// Which owned timer elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleFire {
    Shake,
    Reset,
}

/// Supervises one mounted heading's idle shake cycle.
pub struct IdleSupervisor {
    phase: IdlePhase,
    has_scattered: bool,
    idle_animating: bool,
    idle_timer: TimerSlot,
    reset_timer: TimerSlot,
    idle: IdleConfig,
    reset: ResetConfig,
    glyph_count: usize,
    rng: Pcg32,
}

impl IdleSupervisor {
    pub fn new(idle: IdleConfig, reset: ResetConfig, glyph_count: usize) -> Self {
        let seed = idle.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        });
        Self {
            phase: IdlePhase::Resting,
            has_scattered: false,
            idle_animating: false,
            idle_timer: TimerSlot::new(),
            reset_timer: TimerSlot::new(),
            idle,
            reset,
            glyph_count,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn phase(&self) -> IdlePhase {
        self.phase
    }

    pub fn has_scattered(&self) -> bool {
        self.has_scattered
    }

    pub fn idle_animating(&self) -> bool {
        self.idle_animating
    }

    /// A hover scattered a glyph: start (or restart) idle detection.
    pub fn on_scatter(&mut self) {
        self.has_scattered = true;
        self.rearm();
    }

    /// An accepted pointer sample arrived.
    ///
    /// Only meaningful once something has scattered, and never while
    /// the page is hidden.
    pub fn on_activity(&mut self) {
        if !self.has_scattered || self.phase == IdlePhase::Suspended {
            return;
        }
        self.rearm();
    }

    /// The page went hidden: cancel pending work, freeze mid-state.
    pub fn on_hidden(&mut self) {
        self.idle_timer.cancel();
        self.reset_timer.cancel();
        if self.has_scattered {
            tracing::debug!("Page hidden, idle cycle suspended");
            self.phase = IdlePhase::Suspended;
        }
    }

    /// The page became visible again.
    ///
    /// The inactivity countdown restarts from zero rather than
    /// resuming whatever had elapsed before the page hid.
    pub fn on_visible(&mut self) {
        if !self.has_scattered {
            return;
        }
        tracing::debug!("Page visible, idle cycle resumed");
        self.rearm();
    }

    /// Cancel any pending shake or reset and restart the inactivity
    /// countdown.
    pub fn rearm(&mut self) {
        if !self.has_scattered {
            tracing::debug!("Rearm ignored before any scatter");
            return;
        }
        tracing::trace!("Idle countdown rearmed");
        self.reset_timer.cancel();
        self.idle_animating = false;
        // Arming replaces any pending idle deadline.
        self.idle_timer.arm(self.idle.trigger());
        self.phase = IdlePhase::Armed;
    }

    /// The inactivity window elapsed: start the shake.
    ///
    /// Returns one rotation animation per glyph, staggered by index so
    /// the shake propagates as a wave. Outside `Armed` this is a stale
    /// firing and produces nothing.
    pub fn fire_idle(&mut self) -> Vec<AnimationCommand> {
        if self.phase != IdlePhase::Armed {
            tracing::debug!(phase = ?self.phase, "Idle firing ignored");
            return Vec::new();
        }
        tracing::debug!(glyphs = self.glyph_count, "Idle shake starting");
        // The fired slot stays armed when the fire is driven directly.
        self.idle_timer.cancel();
        self.phase = IdlePhase::Shaking;
        self.idle_animating = true;
        self.reset_timer.arm(self.reset.trigger());

        let max = self.idle.max_rotation_deg.max(0.0);
        (0..self.glyph_count)
            .map(|index| AnimationCommand {
                glyph: index,
                delta: TransformDelta::rotate(self.rng.random_range(-max..=max)),
                spring: self.idle.spring,
                delay: self.idle.delay_for(index),
            })
            .collect()
    }

    /// The shake window elapsed: return every glyph to rest.
    ///
    /// Clears both interaction flags, so the next cycle needs a fresh
    /// scatter. Outside `Shaking` this is a stale firing and produces
    /// nothing.
    pub fn fire_reset(&mut self) -> Vec<AnimationCommand> {
        if self.phase != IdlePhase::Shaking {
            tracing::debug!(phase = ?self.phase, "Reset firing ignored");
            return Vec::new();
        }
        tracing::debug!(glyphs = self.glyph_count, "Returning glyphs to rest");
        self.reset_timer.cancel();
        self.phase = IdlePhase::Resting;
        self.idle_animating = false;
        self.has_scattered = false;

        (0..self.glyph_count)
            .map(|index| AnimationCommand {
                glyph: index,
                delta: TransformDelta::rest(),
                spring: self.reset.spring,
                delay: self.reset.delay_for(index),
            })
            .collect()
    }

    /// Wait for whichever owned timer elapses next.
    ///
    /// Pends forever while neither is armed, which lets the caller
    /// park this in a `select!` arm alongside its event stream.
    pub async fn next_fire(&mut self) -> IdleFire {
        tokio::select! {
            _ = self.idle_timer.elapsed() => IdleFire::Shake,
            _ = self.reset_timer.elapsed() => IdleFire::Reset,
        }
    }
}
