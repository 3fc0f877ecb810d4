//! Message data types for protocol transport

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A single message as carried in a publish request.
///
/// The key is optional and only meaningful to partitioning strategies and
/// downstream consumers; the broker stores it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Optional message key
    pub key: Option<Bytes>,
    /// Message value/payload
    pub value: Bytes,
}

impl Message {
    /// Create a new message with no key
    pub fn new(value: impl Into<Bytes>) -> Self {
        Self {
            key: None,
            value: value.into(),
        }
    }

    /// Set the key
    pub fn with_key(mut self, key: impl Into<Bytes>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Get the key as bytes if present
    pub fn key_bytes(&self) -> Option<&[u8]> {
        self.key.as_deref()
    }

    /// Size of this message (key + value)
    pub fn size(&self) -> usize {
        self.key.as_ref().map(|k| k.len()).unwrap_or(0) + self.value.len()
    }
}

/// The acknowledgement durability level requested for a publish.
///
/// The broker interprets the raw value: `0` means respond immediately
/// without waiting, `1` means wait for the leader's local write, `-1` means
/// wait for all in-sync replicas, and `n > 1` means wait for `n` replicas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredAcks(pub i16);

impl RequiredAcks {
    /// Do not wait for any acknowledgement; the broker sends no response body.
    pub const NO_RESPONSE: RequiredAcks = RequiredAcks(0);
    /// Wait for the leader's local write only.
    pub const WAIT_FOR_LOCAL: RequiredAcks = RequiredAcks(1);
    /// Wait for all in-sync replicas.
    pub const WAIT_FOR_ALL: RequiredAcks = RequiredAcks(-1);

    /// Whether the broker will send a response body for this level.
    pub fn expects_response(self) -> bool {
        self.0 != 0
    }
}

impl Default for RequiredAcks {
    fn default() -> Self {
        RequiredAcks::WAIT_FOR_LOCAL
    }
}

impl From<i16> for RequiredAcks {
    fn from(raw: i16) -> Self {
        RequiredAcks(raw)
    }
}

impl std::fmt::Display for RequiredAcks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            RequiredAcks::NO_RESPONSE => write!(f, "none"),
            RequiredAcks::WAIT_FOR_LOCAL => write!(f, "leader"),
            RequiredAcks::WAIT_FOR_ALL => write!(f, "all"),
            RequiredAcks(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_builders() {
        let msg = Message::new("payload").with_key("k1");
        assert_eq!(msg.key_bytes(), Some(&b"k1"[..]));
        assert_eq!(msg.value, Bytes::from("payload"));
        assert_eq!(msg.size(), 9);

        let keyless = Message::new("payload");
        assert_eq!(keyless.key_bytes(), None);
        assert_eq!(keyless.size(), 7);
    }

    #[test]
    fn test_required_acks_consts() {
        assert_eq!(RequiredAcks::NO_RESPONSE.0, 0);
        assert_eq!(RequiredAcks::WAIT_FOR_LOCAL.0, 1);
        assert_eq!(RequiredAcks::WAIT_FOR_ALL.0, -1);
        assert_eq!(RequiredAcks::default(), RequiredAcks::WAIT_FOR_LOCAL);
    }

    #[test]
    fn test_expects_response() {
        assert!(!RequiredAcks::NO_RESPONSE.expects_response());
        assert!(RequiredAcks::WAIT_FOR_LOCAL.expects_response());
        assert!(RequiredAcks::WAIT_FOR_ALL.expects_response());
        assert!(RequiredAcks(3).expects_response());
    }

    #[test]
    fn test_display() {
        assert_eq!(RequiredAcks::NO_RESPONSE.to_string(), "none");
        assert_eq!(RequiredAcks::WAIT_FOR_LOCAL.to_string(), "leader");
        assert_eq!(RequiredAcks::WAIT_FOR_ALL.to_string(), "all");
        assert_eq!(RequiredAcks(3).to_string(), "3");
    }
}
