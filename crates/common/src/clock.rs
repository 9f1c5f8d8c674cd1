//! Timing primitives for pointer sample streams.
//!
//! The engine never reads a wall clock: every event carries a
//! host-supplied monotonic timestamp in milliseconds (the
//! `performance.now()` convention), and all throttling decisions are
//! made against those values.

/// Outcome of admitting a sample through a [`SampleGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admitted {
    /// The first sample ever admitted; there is no predecessor to
    /// measure an elapsed interval against.
    First,

    /// Admitted with the elapsed time since the previous admitted
    /// sample. Zero only when the gate's minimum spacing is zero.
    After { elapsed_ms: u64 },
}

/// Minimum-spacing admission gate for event sampling.
///
/// Samples closer than `min_interval_ms` to the last *admitted* sample
/// are dropped, as are samples whose timestamps run backwards. The
/// first sample is always admitted.
#[derive(Debug)]
pub struct SampleGate {
    min_interval_ms: u64,
    last_admitted_ms: Option<u64>,
}

impl SampleGate {
    /// Create a gate with the given minimum spacing in milliseconds.
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_admitted_ms: None,
        }
    }

    /// Admit or drop a sample stamped `now_ms`.
    ///
    /// Returns `None` for a dropped sample. An admitted sample becomes
    /// the new spacing reference; dropped samples leave the gate
    /// untouched.
    pub fn admit(&mut self, now_ms: u64) -> Option<Admitted> {
        match self.last_admitted_ms {
            None => {
                self.last_admitted_ms = Some(now_ms);
                Some(Admitted::First)
            }
            Some(last) => {
                let elapsed_ms = now_ms.checked_sub(last)?;
                if elapsed_ms < self.min_interval_ms {
                    return None;
                }
                self.last_admitted_ms = Some(now_ms);
                Some(Admitted::After { elapsed_ms })
            }
        }
    }

    /// Timestamp of the last admitted sample, if any.
    pub fn last_admitted(&self) -> Option<u64> {
        self.last_admitted_ms
    }

    /// Minimum spacing in milliseconds.
    pub fn min_interval_ms(&self) -> u64 {
        self.min_interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_always_admitted() {
        let mut gate = SampleGate::new(16);
        assert_eq!(gate.admit(1234), Some(Admitted::First));
        assert_eq!(gate.last_admitted(), Some(1234));
    }

    #[test]
    fn test_gate_spacing() {
        let mut gate = SampleGate::new(16);
        assert_eq!(gate.admit(0), Some(Admitted::First));
        assert_eq!(gate.admit(1), None); // 1ms later, too soon
        assert_eq!(gate.admit(15), None); // still inside the window
        assert_eq!(gate.admit(17), Some(Admitted::After { elapsed_ms: 17 }));
    }

    #[test]
    fn test_dropped_samples_do_not_move_the_reference() {
        let mut gate = SampleGate::new(16);
        gate.admit(0);
        assert_eq!(gate.admit(10), None);
        // Spacing is measured from t=0, not from the dropped t=10.
        assert_eq!(gate.admit(20), Some(Admitted::After { elapsed_ms: 20 }));
    }

    #[test]
    fn test_backwards_timestamps_dropped() {
        let mut gate = SampleGate::new(16);
        gate.admit(100);
        assert_eq!(gate.admit(50), None);
        assert_eq!(gate.last_admitted(), Some(100));
    }

    #[test]
    fn test_zero_interval_admits_identical_timestamps() {
        let mut gate = SampleGate::new(0);
        gate.admit(5);
        assert_eq!(gate.admit(5), Some(Admitted::After { elapsed_ms: 0 }));
    }
}
