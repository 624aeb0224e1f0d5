use std::time::{Duration, Instant};
use strum_macros::Display;

/// What the sender loop should do with its current control vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Decision {
    /// Recent valid input, pass the last computed vector through.
    Hold,
    /// Staleness threshold exceeded, pin the vector to zero until the next
    /// valid observation re-arms the governor.
    ForceZero,
}

/// Tracks time since the last valid pose observation on a monotonic clock.
///
/// Two states: armed (a valid observation happened within `safety_timeout`)
/// and failsafe. The transition is driven purely by elapsed time, so
/// `observe` must be called every tick even when no new pose is available.
#[derive(Debug)]
pub struct FailsafeGovernor {
    safety_timeout: Duration,
    t_last_valid: Option<Instant>,
}

impl FailsafeGovernor {
    pub fn new(safety_timeout: Duration) -> Self {
        Self { safety_timeout, t_last_valid: None }
    }

    pub fn observe(&mut self, valid: bool) -> Decision {
        self.observe_at(valid, Instant::now())
    }

    pub(crate) fn observe_at(&mut self, valid: bool, now: Instant) -> Decision {
        if valid {
            self.t_last_valid = Some(now);
            return Decision::Hold;
        }
        match self.t_last_valid {
            Some(t) if now.duration_since(t) <= self.safety_timeout => Decision::Hold,
            // Never armed or timed out.
            _ => Decision::ForceZero,
        }
    }
}
