pub(crate) mod envelope;
mod receiver;
mod sender;
#[cfg(test)]
mod tests;

pub use receiver::ReadProfile;
pub use receiver::VectorReceiver;
pub use sender::VectorSender;

use strum_macros::Display;

/// Faults of the datagram channel.
///
/// `Bind` is fatal at startup, everything else is survivable: the loops
/// degrade to the zero vector instead of propagating upward.
#[derive(Debug, Display)]
pub enum TransportError {
    /// Endpoint path could not be claimed. Usually another process still
    /// holds the socket or the stale file is not removable.
    Bind(std::io::Error),
    /// No message arrived within the read bound. The endpoint has already
    /// been rebuilt when this surfaces.
    Timeout,
    /// Malformed envelope: wrong arity or non-numeric payload.
    Parse(serde_json::Error),
    /// Datagram could not be moved over the socket, e.g. no listener exists.
    Send(std::io::Error),
}

impl std::error::Error for TransportError {}

impl From<serde_json::Error> for TransportError {
    fn from(value: serde_json::Error) -> Self {
        TransportError::Parse(value)
    }
}
