/// Normalized motion intent shared between both process roles.
///
/// Roll, pitch and yaw are signed radians. Thrust is non-negative and
/// unbounded above; `1.0` is already pretty fast on the reference airframe.
/// Serializes through its array form, `[roll, pitch, yaw, thrust]`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(into = "[f64; 4]", from = "[f64; 4]")]
pub struct ControlVector {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
    pub thrust: f64,
}

impl ControlVector {
    /// The neutral vector forced by the failsafe and issued around actuator
    /// lifecycle boundaries.
    pub const fn zero() -> Self {
        Self { roll: 0.0, pitch: 0.0, yaw: 0.0, thrust: 0.0 }
    }
}

impl From<[f64; 4]> for ControlVector {
    fn from(value: [f64; 4]) -> Self {
        Self { roll: value[0], pitch: value[1], yaw: value[2], thrust: value[3] }
    }
}

impl From<ControlVector> for [f64; 4] {
    fn from(value: ControlVector) -> Self {
        [value.roll, value.pitch, value.yaw, value.thrust]
    }
}

impl std::fmt::Display for ControlVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}, {:.2}, {:.2})",
            self.roll, self.pitch, self.yaw, self.thrust
        )
    }
}
