use crate::control::{ControlVector, Decision, FailsafeGovernor, PoseMapper};
use crate::input::PoseSource;
use crate::transport::VectorSender;
use crate::{event, info};
use std::time::Duration;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

/// Sender-side driver: sample, map, fail-safe, transmit, at a fixed tick.
///
/// The governor is consulted on every tick, including ticks without a valid
/// pose, so a stalled tracker pins the output to zero after the staleness
/// threshold. Transport faults never cost a tick: a dropped datagram is
/// logged and the cadence continues.
pub struct RemoteLoop<S: PoseSource> {
    source: S,
    mapper: PoseMapper,
    governor: FailsafeGovernor,
    sender: VectorSender,
    period: Duration,
}

impl<S: PoseSource> RemoteLoop<S> {
    pub fn new(
        source: S,
        mapper: PoseMapper,
        governor: FailsafeGovernor,
        sender: VectorSender,
        period: Duration,
    ) -> Self {
        Self { source, mapper, governor, sender, period }
    }

    pub async fn run(mut self, token: CancellationToken) {
        info!("remote loop started with period {:?}", self.period);
        let mut tick = interval(self.period);
        let mut last = ControlVector::zero();
        loop {
            tokio::select! {
                () = token.cancelled() => break,
                _ = tick.tick() => {}
            }

            let pose = self.source.current_frame();
            let decision = self.governor.observe(pose.is_some());
            if let Some(pose) = pose {
                last = self.mapper.map(&pose);
            }
            if decision == Decision::ForceZero {
                last = ControlVector::zero();
            }
            if let Err(e) = self.sender.send(&last).await {
                event!("dropped frame, no listener on endpoint: {e}");
            }
        }
        info!("remote loop stopped");
    }
}
