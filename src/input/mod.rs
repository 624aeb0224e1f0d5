use std::time::Instant;

/// Snapshot of the tracked palm, produced fresh on every sampling tick and
/// never retained past the tick that consumes it.
#[derive(Debug, Clone, Copy)]
pub struct RawPose {
    /// Roll of the palm normal, radians.
    pub palm_roll: f64,
    /// Pitch of the palm direction, radians.
    pub palm_pitch: f64,
    /// Yaw of the palm direction, radians.
    pub palm_yaw: f64,
    /// Palm height above the tracker, device units.
    pub palm_height: f64,
}

/// Non-blocking view onto the external pose tracker.
///
/// `None` means no hand is tracked this tick; the failsafe governor turns a
/// run of those into a forced-zero vector.
pub trait PoseSource {
    fn current_frame(&mut self) -> Option<RawPose>;
}

/// Synthetic pose source sweeping the palm height through the calibration
/// range on a slow sine, used for end-to-end smoke tests of the channel when
/// no tracker hardware is attached.
pub struct SinePose {
    epoch: Instant,
    height_min: f64,
    height_max: f64,
}

impl SinePose {
    const SWEEP_SLOWDOWN: f64 = 10.0;

    pub fn new(height_min: f64, height_max: f64) -> Self {
        Self { epoch: Instant::now(), height_min, height_max }
    }
}

impl PoseSource for SinePose {
    fn current_frame(&mut self) -> Option<RawPose> {
        let t = self.epoch.elapsed().as_secs_f64() / Self::SWEEP_SLOWDOWN;
        let mid = (self.height_min + self.height_max) / 2.0;
        let half_span = (self.height_max - self.height_min) / 2.0;
        Some(RawPose {
            palm_roll: 0.0,
            palm_pitch: 0.0,
            palm_yaw: 0.0,
            palm_height: mid + half_span * t.sin(),
        })
    }
}
