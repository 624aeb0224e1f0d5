//! The two loop drivers, one per process role: the remote loop samples the
//! pose source at a fixed cadence and transmits best-effort, the pilot loop
//! pulls vectors off the channel and drives the actuator link.

mod pilot_loop;
mod remote_loop;

pub use pilot_loop::PilotLoop;
pub use remote_loop::RemoteLoop;
