use super::control_vector::ControlVector;
use super::math::linear_map;
use crate::config::Config;

/// Integer command issued to the actuator, in device units.
///
/// Angular axes are device angular units, thrust is the full-scale range of
/// the deployment profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorSetpoint {
    pub roll: i16,
    pub pitch: i16,
    pub yaw: i16,
    pub thrust: u16,
}

impl ActuatorSetpoint {
    /// Neutral command, sent to clear startup thrust protection and again on
    /// shutdown before the link is released.
    pub const fn zero() -> Self {
        Self { roll: 0, pitch: 0, yaw: 0, thrust: 0 }
    }
}

/// Pure rescaling from a received [`ControlVector`] to an
/// [`ActuatorSetpoint`].
///
/// Thrust is mapped from `0.0..=1.0` onto the full-scale range and clamped
/// into `[0, max_thrust]`. Angular axes carry no clamp: the upstream mapper
/// and failsafe keep magnitudes sane, and deployments with hard actuator
/// limits add their own at this boundary.
#[derive(Debug, Clone, Copy)]
pub struct ActuatorMapper {
    angle_scale: f64,
    max_thrust: u16,
}

impl ActuatorMapper {
    pub fn new(angle_scale: f64, max_thrust: u16) -> Self {
        Self { angle_scale, max_thrust }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.angle_scale(), config.max_thrust())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn map(&self, vector: &ControlVector) -> ActuatorSetpoint {
        let thrust = linear_map(vector.thrust, 0.0, 1.0, 0.0, f64::from(self.max_thrust))
            .clamp(0.0, f64::from(self.max_thrust));
        ActuatorSetpoint {
            roll: (vector.roll * self.angle_scale) as i16,
            pitch: (vector.pitch * self.angle_scale) as i16,
            yaw: (vector.yaw * self.angle_scale) as i16,
            thrust: thrust as u16,
        }
    }
}
