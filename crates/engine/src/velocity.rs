//! Pointer velocity tracking with frame-batched publication.

use kinetype_common::{Admitted, SampleGate};
use kinetype_model::{TimestampMs, Velocity};

/// Turns raw pointer deltas into a stable velocity reading.
///
/// Samples are throttled through a [`SampleGate`], converted to px/s
/// against the gap between admitted samples, and staged. The staged
/// value only becomes visible to readers at the next frame boundary,
/// so consumers never observe a half-formed reading mid-frame.
#[derive(Debug)]
pub struct VelocityTracker {
    gate: SampleGate,
    staged: Option<Velocity>,
    published: Velocity,
}

impl VelocityTracker {
    pub fn new(sample_interval_ms: u64) -> Self {
        Self {
            gate: SampleGate::new(sample_interval_ms),
            staged: None,
            published: Velocity::ZERO,
        }
    }

    /// Feed one pointer movement sample.
    ///
    /// Returns whether the sample was admitted. The first admitted
    /// sample and samples with a zero gap establish a reference point
    /// but stage no velocity, since there is no interval to divide by.
    pub fn ingest(&mut self, dx: f64, dy: f64, timestamp_ms: TimestampMs) -> bool {
        match self.gate.admit(timestamp_ms) {
            None => false,
            Some(Admitted::First) | Some(Admitted::After { elapsed_ms: 0 }) => true,
            Some(Admitted::After { elapsed_ms }) => {
                self.staged = Some(Velocity::from_delta(dx, dy, elapsed_ms));
                true
            }
        }
    }

    /// Promote the staged velocity at a frame boundary.
    ///
    /// Returns whether a new value was published. Without a staged
    /// value the published reading is left as it was.
    pub fn publish(&mut self) -> bool {
        match self.staged.take() {
            Some(velocity) => {
                self.published = velocity;
                true
            }
            None => false,
        }
    }

    /// The last published velocity.
    pub fn current(&self) -> Velocity {
        self.published
    }

    /// Whether a staged value is waiting for the next frame boundary.
    pub fn has_staged(&self) -> bool {
        self.staged.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_sample_sets_reference_only() {
        let mut tracker = VelocityTracker::new(16);
        assert!(tracker.ingest(50.0, 50.0, 1_000));
        assert!(!tracker.has_staged());

        assert!(!tracker.publish());
        assert_eq!(tracker.current(), Velocity::ZERO);
    }

    #[test]
    fn test_admitted_sample_stages_pixels_per_second() {
        let mut tracker = VelocityTracker::new(16);
        tracker.ingest(0.0, 0.0, 0);
        assert!(tracker.ingest(30.0, -40.0, 100));

        // Staged but not yet visible.
        assert_eq!(tracker.current(), Velocity::ZERO);

        assert!(tracker.publish());
        assert_eq!(tracker.current(), Velocity::new(300.0, -400.0));
        assert!((tracker.current().speed() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_samples_inside_interval_are_dropped() {
        let mut tracker = VelocityTracker::new(16);
        tracker.ingest(0.0, 0.0, 0);
        assert!(!tracker.ingest(999.0, 999.0, 10));

        tracker.publish();
        assert_eq!(tracker.current(), Velocity::ZERO);
    }

    #[test]
    fn test_latest_staged_value_wins() {
        let mut tracker = VelocityTracker::new(16);
        tracker.ingest(0.0, 0.0, 0);
        tracker.ingest(10.0, 0.0, 100);
        tracker.ingest(80.0, 0.0, 200);

        tracker.publish();
        assert_eq!(tracker.current(), Velocity::new(800.0, 0.0));
    }

    #[test]
    fn test_publish_without_staged_keeps_reading() {
        let mut tracker = VelocityTracker::new(16);
        tracker.ingest(0.0, 0.0, 0);
        tracker.ingest(20.0, 0.0, 100);
        assert!(tracker.publish());

        let before = tracker.current();
        assert!(!tracker.publish());
        assert_eq!(tracker.current(), before);
    }

    #[test]
    fn test_zero_gap_admits_without_staging() {
        // A zero-width gate admits back-to-back samples with the same
        // timestamp; those must not divide by a zero interval.
        let mut tracker = VelocityTracker::new(0);
        tracker.ingest(5.0, 5.0, 42);
        assert!(tracker.ingest(5.0, 5.0, 42));
        assert!(!tracker.has_staged());
    }

    proptest! {
        #[test]
        fn prop_admitted_samples_respect_the_interval(
            gaps in proptest::collection::vec(0u64..64, 1..48),
        ) {
            let mut tracker = VelocityTracker::new(16);
            let mut now = 0u64;
            let mut admitted = Vec::new();

            for gap in gaps {
                now += gap;
                if tracker.ingest(1.0, 0.0, now) {
                    admitted.push(now);
                }
            }

            prop_assert!(!admitted.is_empty());
            for pair in admitted.windows(2) {
                prop_assert!(pair[1] - pair[0] >= 16);
            }
        }

        #[test]
        fn prop_reads_are_stable_between_frame_ticks(
            gaps in proptest::collection::vec(0u64..64, 1..32),
        ) {
            let mut tracker = VelocityTracker::new(16);
            let mut now = 0u64;
            let mut last_published = Velocity::ZERO;

            for (i, gap) in gaps.into_iter().enumerate() {
                now += gap;
                tracker.ingest(3.0 * i as f64, -2.0, now);
                // Ingest alone never moves the published reading.
                prop_assert_eq!(tracker.current(), last_published);

                if i % 3 == 2 {
                    tracker.publish();
                    last_published = tracker.current();
                    prop_assert!(last_published.speed().is_finite());
                }
            }
        }
    }
}
