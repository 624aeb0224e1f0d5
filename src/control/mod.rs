mod actuator_mapper;
mod control_vector;
mod failsafe;
pub(crate) mod math;
mod pose_mapper;

pub use actuator_mapper::ActuatorMapper;
pub use actuator_mapper::ActuatorSetpoint;
pub use control_vector::ControlVector;
pub use failsafe::Decision;
pub use failsafe::FailsafeGovernor;
pub use pose_mapper::PoseMapper;
