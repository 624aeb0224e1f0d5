use crate::actuator::{ActuatorLink, LinkEvent, LinkState};
use crate::control::{ActuatorMapper, ActuatorSetpoint, ControlVector};
use crate::transport::VectorReceiver;
use crate::{error, info, warn};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Receiver-side driver: receive-or-recover, remap, issue the command.
///
/// The loop is the sole owner of the link state machine; lifecycle callbacks
/// of the actuator collaborator arrive as [`LinkEvent`]s on a channel. One
/// zero setpoint is issued on every connect to clear the actuator's startup
/// thrust protection, and a final zero setpoint leaves before the link is
/// released on any shutdown path.
pub struct PilotLoop<L: ActuatorLink> {
    link: L,
    events: mpsc::Receiver<LinkEvent>,
    receiver: VectorReceiver,
    mapper: ActuatorMapper,
}

impl<L: ActuatorLink> PilotLoop<L> {
    /// Grace period after the trailing zero setpoint so the last packet
    /// leaves before the link closes.
    const FLUSH_GRACE: Duration = Duration::from_millis(100);

    pub fn new(
        link: L,
        events: mpsc::Receiver<LinkEvent>,
        receiver: VectorReceiver,
        mapper: ActuatorMapper,
    ) -> Self {
        Self { link, events, receiver, mapper }
    }

    pub async fn run(self, token: CancellationToken) {
        let Self { mut link, mut events, mut receiver, mapper } = self;
        let mut state = LinkState::Connecting;
        link.open_link().await;
        info!("opening actuator link");

        loop {
            tokio::select! {
                () = token.cancelled() => break,
                event = events.recv() => {
                    let Some(event) = event else { break };
                    state = state.apply(&event);
                    match event {
                        LinkEvent::Connected => {
                            info!("actuator link connected, unlocking startup protection");
                            link.send_setpoint(ActuatorSetpoint::zero()).await;
                        }
                        LinkEvent::ConnectionFailed(reason) => {
                            error!("actuator connection failed: {reason}");
                            break;
                        }
                        LinkEvent::ConnectionLost(reason) => {
                            error!("actuator connection lost: {reason}");
                            break;
                        }
                        LinkEvent::Disconnected => {
                            info!("actuator disconnected");
                            break;
                        }
                    }
                }
                received = receiver.recv_or_default(ControlVector::zero()),
                    if state == LinkState::Connected =>
                {
                    let vector = received.unwrap_or_else(|e| {
                        warn!("transport fault, issuing zero vector: {e}");
                        ControlVector::zero()
                    });
                    link.send_setpoint(mapper.map(&vector)).await;
                }
            }
        }

        if state == LinkState::Connected {
            link.send_setpoint(ActuatorSetpoint::zero()).await;
            tokio::time::sleep(Self::FLUSH_GRACE).await;
        }
        link.close_link().await;
        info!("pilot loop stopped");
    }
}
