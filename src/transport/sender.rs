use super::{TransportError, envelope};
use crate::control::ControlVector;
use std::path::{Path, PathBuf};
use tokio::net::UnixDatagram;

/// Fire-and-forget emitter of control vectors.
///
/// The socket stays unconnected and every send is addressed to the endpoint
/// path, so a receiver that rebuilt its endpoint keeps getting traffic
/// without any handshake on this side. No retries, no blocking on a peer.
pub struct VectorSender {
    socket: UnixDatagram,
    path: PathBuf,
}

impl VectorSender {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TransportError> {
        let socket = UnixDatagram::unbound().map_err(TransportError::Bind)?;
        Ok(Self { socket, path: path.as_ref().to_path_buf() })
    }

    /// Serializes and transmits once. A missing peer surfaces as
    /// [`TransportError::Send`]; the caller logs it and keeps its cadence.
    pub async fn send(&self, vector: &ControlVector) -> Result<(), TransportError> {
        let line = envelope::encode(vector)?;
        self.socket
            .send_to(line.as_bytes(), &self.path)
            .await
            .map_err(TransportError::Send)?;
        Ok(())
    }
}
