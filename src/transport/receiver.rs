use super::{TransportError, envelope};
use crate::control::ControlVector;
use crate::{event, log};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::net::UnixDatagram;

/// How a read reacts to faults.
///
/// `Lenient` is the documented default: timeouts and malformed envelopes
/// degrade to the caller's default vector and the process keeps running.
/// `Strict` surfaces both as errors per read, still without killing the
/// endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadProfile {
    Lenient,
    Strict,
}

/// Bound side of the datagram channel.
///
/// Owns the endpoint exclusively: binding removes any stale socket file
/// first, and a read that times out destroys and rebinds the endpoint before
/// anything else. Rebinding clears half-open state left by a vanished sender
/// so later messages are not lost to a dead descriptor.
pub struct VectorReceiver {
    path: PathBuf,
    socket: UnixDatagram,
    timeout: Duration,
    profile: ReadProfile,
}

impl VectorReceiver {
    const MAX_ENVELOPE: usize = 256;

    pub fn bind(
        path: impl AsRef<Path>,
        timeout: Duration,
        profile: ReadProfile,
    ) -> Result<Self, TransportError> {
        let path = path.as_ref().to_path_buf();
        let socket = Self::bind_socket(&path)?;
        Ok(Self { path, socket, timeout, profile })
    }

    fn bind_socket(path: &Path) -> Result<UnixDatagram, TransportError> {
        if path.exists() {
            std::fs::remove_file(path).map_err(TransportError::Bind)?;
        }
        UnixDatagram::bind(path).map_err(TransportError::Bind)
    }

    /// Waits at most the read bound for an envelope.
    ///
    /// On timeout the endpoint is rebuilt and, in the lenient profile, the
    /// caller's default is returned. There is no queueing guarantee: pending
    /// datagrams are drained and only the newest one is parsed
    /// (last-write-wins).
    pub async fn recv_or_default(
        &mut self,
        default: ControlVector,
    ) -> Result<ControlVector, TransportError> {
        let mut buf = [0u8; Self::MAX_ENVELOPE];
        let read = tokio::time::timeout(self.timeout, self.recv_newest(&mut buf)).await;
        match read {
            Ok(Ok(n)) => match envelope::decode(&buf[..n]) {
                Ok(vector) => Ok(vector),
                Err(e) if self.profile == ReadProfile::Lenient => {
                    event!("substituting default for malformed envelope: {e}");
                    Ok(default)
                }
                Err(e) => Err(e),
            },
            Ok(Err(e)) => Err(e),
            Err(_elapsed) => {
                log!("read timed out after {:?}, rebinding endpoint", self.timeout);
                self.recover()?;
                match self.profile {
                    ReadProfile::Lenient => Ok(default),
                    ReadProfile::Strict => Err(TransportError::Timeout),
                }
            }
        }
    }

    async fn recv_newest(&self, buf: &mut [u8]) -> Result<usize, TransportError> {
        let mut n = self.socket.recv(buf).await.map_err(TransportError::Send)?;
        loop {
            match self.socket.try_recv(buf) {
                Ok(fresher) => n = fresher,
                Err(e) if e.kind() == ErrorKind::WouldBlock => return Ok(n),
                Err(e) => return Err(TransportError::Send(e)),
            }
        }
    }

    fn recover(&mut self) -> Result<(), TransportError> {
        self.socket = Self::bind_socket(&self.path)?;
        Ok(())
    }
}

impl Drop for VectorReceiver {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
