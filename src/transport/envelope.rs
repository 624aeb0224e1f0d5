use super::TransportError;
use crate::control::ControlVector;

/// Wire form of a [`ControlVector`]: a newline-terminated JSON array of
/// exactly four numbers, `[roll, pitch, yaw, thrust]`. No header, no
/// sequence number, no checksum.
pub fn encode(vector: &ControlVector) -> Result<String, TransportError> {
    let mut line = serde_json::to_string(vector)?;
    line.push('\n');
    Ok(line)
}

/// Parses a received envelope. Wrong arity or a non-numeric field is a
/// [`TransportError::Parse`], never a valid vector.
pub fn decode(raw: &[u8]) -> Result<ControlVector, TransportError> {
    Ok(serde_json::from_slice(raw)?)
}
