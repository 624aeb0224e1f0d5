use super::control_vector::ControlVector;
use super::math::linear_map;
use crate::config::{Config, ConfigError};
use crate::input::RawPose;

/// Pure mapping from a raw palm pose to a [`ControlVector`].
///
/// Roll and pitch are sign-flipped to match the deployment convention of the
/// reference airframe; yaw passes through. Thrust is the palm height mapped
/// linearly from the calibration range onto `0.0..=1.0` with a floor clamp
/// at zero.
#[derive(Debug, Clone, Copy)]
pub struct PoseMapper {
    roll_sign: f64,
    pitch_sign: f64,
    height_min: f64,
    height_max: f64,
}

impl PoseMapper {
    pub fn new(height_min: f64, height_max: f64) -> Result<Self, ConfigError> {
        if (height_max - height_min).abs() < f64::EPSILON {
            return Err(ConfigError::DegenerateHeightRange);
        }
        Ok(Self { roll_sign: -1.0, pitch_sign: -1.0, height_min, height_max })
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::new(config.height_min(), config.height_max())
    }

    pub fn map(&self, pose: &RawPose) -> ControlVector {
        ControlVector {
            roll: self.roll_sign * pose.palm_roll,
            pitch: self.pitch_sign * pose.palm_pitch,
            yaw: pose.palm_yaw,
            thrust: linear_map(pose.palm_height, self.height_min, self.height_max, 0.0, 1.0)
                .max(0.0),
        }
    }
}
