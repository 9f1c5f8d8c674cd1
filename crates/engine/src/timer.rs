//! Single-slot owned timers.

use std::pin::Pin;

use tokio::time::{sleep, Duration, Instant, Sleep};

/// A one-shot timer that owns at most one pending deadline.
///
/// Arming replaces whatever was pending and cancelling drops it, so a
/// rearm can never leave a stale firing behind. Dropping the slot
/// cancels the deadline with it.
#[derive(Debug, Default)]
pub struct TimerSlot {
    sleep: Option<Pin<Box<Sleep>>>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self { sleep: None }
    }

    /// Arm the timer `delay` from now, replacing any pending deadline.
    pub fn arm(&mut self, delay: Duration) {
        self.sleep = Some(Box::pin(sleep(delay)));
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.sleep = None;
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.sleep.is_some()
    }

    /// Deadline of the pending firing, if armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.sleep.as_ref().map(|sleep| sleep.deadline())
    }

    /// Wait for the pending deadline; pends forever while disarmed.
    ///
    /// Completing disarms the slot, so each arm fires at most once.
    /// Cancel-safe: dropping the future mid-wait leaves the deadline
    /// pending, which lets the slot sit in a `select!` arm.
    pub async fn elapsed(&mut self) {
        match self.sleep.as_mut() {
            Some(sleep) => {
                sleep.as_mut().await;
                self.sleep = None;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, timeout};

    #[tokio::test(start_paused = true)]
    async fn test_fires_at_deadline_and_disarms() {
        let mut slot = TimerSlot::new();
        slot.arm(Duration::from_millis(100));
        assert!(slot.is_armed());

        let start = Instant::now();
        slot.elapsed().await;
        assert_eq!(Instant::now() - start, Duration::from_millis(100));
        assert!(!slot.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_replaces_pending_deadline() {
        let mut slot = TimerSlot::new();
        slot.arm(Duration::from_millis(100));
        advance(Duration::from_millis(50)).await;

        // Rearming restarts the countdown from now.
        slot.arm(Duration::from_millis(100));
        let start = Instant::now();
        slot.elapsed().await;
        assert_eq!(Instant::now() - start, Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarmed_slot_pends() {
        let mut slot = TimerSlot::new();
        let fired = timeout(Duration::from_millis(250), slot.elapsed()).await;
        assert!(fired.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_deadline() {
        let mut slot = TimerSlot::new();
        slot.arm(Duration::from_millis(20));
        slot.cancel();
        assert!(!slot.is_armed());

        let fired = timeout(Duration::from_millis(100), slot.elapsed()).await;
        assert!(fired.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_is_cancel_safe() {
        let mut slot = TimerSlot::new();
        slot.arm(Duration::from_millis(100));

        // Abandoning the wait must not consume the deadline.
        tokio::select! {
            biased;
            _ = std::future::ready(()) => {}
            _ = slot.elapsed() => panic!("deadline cannot have passed yet"),
        }
        assert!(slot.is_armed());

        let start = Instant::now();
        slot.elapsed().await;
        assert_eq!(Instant::now() - start, Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_reports_pending_firing() {
        let mut slot = TimerSlot::new();
        assert_eq!(slot.deadline(), None);

        slot.arm(Duration::from_millis(60));
        assert_eq!(
            slot.deadline(),
            Some(Instant::now() + Duration::from_millis(60))
        );
    }
}
