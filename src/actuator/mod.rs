use crate::control::ActuatorSetpoint;
use crate::{event, info};
use async_trait::async_trait;
use strum_macros::Display;
use tokio::sync::mpsc;

/// Lifecycle event of the actuator link, delivered over a channel instead of
/// ambient callbacks so the pilot loop stays the sole owner of link state.
#[derive(Debug, Clone, Display)]
pub enum LinkEvent {
    Connected,
    ConnectionFailed(String),
    ConnectionLost(String),
    Disconnected,
}

/// Connection state owned by the pilot loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LinkState {
    Disconnected,
    Connecting,
    Connected,
}

impl LinkState {
    /// Applies one lifecycle event. Reconnection is an external concern, so
    /// every failure path lands in `Disconnected`.
    pub fn apply(self, event: &LinkEvent) -> Self {
        match event {
            LinkEvent::Connected => LinkState::Connected,
            LinkEvent::ConnectionFailed(_)
            | LinkEvent::ConnectionLost(_)
            | LinkEvent::Disconnected => LinkState::Disconnected,
        }
    }
}

/// Narrow interface to the actuator collaborator.
///
/// Faults are reported through [`LinkEvent`]s, not return values; the radio
/// firmware semantics behind this trait are out of scope here.
#[async_trait]
pub trait ActuatorLink: Send {
    async fn open_link(&mut self);
    async fn close_link(&mut self);
    async fn send_setpoint(&mut self, setpoint: ActuatorSetpoint);
}

/// Log-only actuator used when no radio hardware is attached. Connects
/// immediately and prints every setpoint through the event log.
pub struct ConsoleLink {
    events: mpsc::Sender<LinkEvent>,
}

impl ConsoleLink {
    pub fn new() -> (Self, mpsc::Receiver<LinkEvent>) {
        let (tx, rx) = mpsc::channel(10);
        (Self { events: tx }, rx)
    }
}

#[async_trait]
impl ActuatorLink for ConsoleLink {
    async fn open_link(&mut self) {
        info!("console actuator link open");
        let _ = self.events.send(LinkEvent::Connected).await;
    }

    async fn close_link(&mut self) {
        info!("console actuator link closed");
        let _ = self.events.send(LinkEvent::Disconnected).await;
    }

    async fn send_setpoint(&mut self, setpoint: ActuatorSetpoint) {
        event!(
            "setpoint r={} p={} y={} t={}",
            setpoint.roll,
            setpoint.pitch,
            setpoint.yaw,
            setpoint.thrust
        );
    }
}
