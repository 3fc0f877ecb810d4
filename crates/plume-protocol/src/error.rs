//! Server result codes

use serde::{Deserialize, Serialize};

/// Result code returned by the broker in each publish response block.
///
/// Numbering follows the Kafka wire protocol. Codes received from a newer
/// broker that this client does not know map to [`ErrorCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// The request completed without error
    None,
    /// An unexpected or unrecognized server error
    Unknown,
    /// The requested offset is outside the range held by the partition
    OffsetOutOfRange,
    /// The stored message failed its checksum
    CorruptMessage,
    /// The topic or partition does not exist on this node
    UnknownTopicOrPartition,
    /// The message size field is negative or nonsensical
    InvalidMessageSize,
    /// The partition has no live leader (e.g. mid-election)
    LeaderNotAvailable,
    /// The contacted node is not the leader for the partition
    NotLeaderForPartition,
    /// The request waited longer than the configured timeout
    RequestTimedOut,
    /// The referenced broker is not available
    BrokerNotAvailable,
    /// The referenced replica is not available
    ReplicaNotAvailable,
    /// The message exceeds the broker's configured maximum size
    MessageTooLarge,
    /// The controller epoch in the request is stale
    StaleControllerEpoch,
    /// The offset metadata string is too large
    OffsetMetadataTooLarge,
}

impl ErrorCode {
    /// The wire value of this code.
    pub fn code(self) -> i16 {
        match self {
            ErrorCode::None => 0,
            ErrorCode::Unknown => -1,
            ErrorCode::OffsetOutOfRange => 1,
            ErrorCode::CorruptMessage => 2,
            ErrorCode::UnknownTopicOrPartition => 3,
            ErrorCode::InvalidMessageSize => 4,
            ErrorCode::LeaderNotAvailable => 5,
            ErrorCode::NotLeaderForPartition => 6,
            ErrorCode::RequestTimedOut => 7,
            ErrorCode::BrokerNotAvailable => 8,
            ErrorCode::ReplicaNotAvailable => 9,
            ErrorCode::MessageTooLarge => 10,
            ErrorCode::StaleControllerEpoch => 11,
            ErrorCode::OffsetMetadataTooLarge => 12,
        }
    }

    /// Map a wire value to a code; unrecognized values become `Unknown`.
    pub fn from_code(code: i16) -> ErrorCode {
        match code {
            0 => ErrorCode::None,
            1 => ErrorCode::OffsetOutOfRange,
            2 => ErrorCode::CorruptMessage,
            3 => ErrorCode::UnknownTopicOrPartition,
            4 => ErrorCode::InvalidMessageSize,
            5 => ErrorCode::LeaderNotAvailable,
            6 => ErrorCode::NotLeaderForPartition,
            7 => ErrorCode::RequestTimedOut,
            8 => ErrorCode::BrokerNotAvailable,
            9 => ErrorCode::ReplicaNotAvailable,
            10 => ErrorCode::MessageTooLarge,
            11 => ErrorCode::StaleControllerEpoch,
            12 => ErrorCode::OffsetMetadataTooLarge,
            _ => ErrorCode::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::None => "no error",
            ErrorCode::Unknown => "unknown server error",
            ErrorCode::OffsetOutOfRange => "offset out of range",
            ErrorCode::CorruptMessage => "corrupt message",
            ErrorCode::UnknownTopicOrPartition => "unknown topic or partition",
            ErrorCode::InvalidMessageSize => "invalid message size",
            ErrorCode::LeaderNotAvailable => "leader not available",
            ErrorCode::NotLeaderForPartition => "not leader for partition",
            ErrorCode::RequestTimedOut => "request timed out",
            ErrorCode::BrokerNotAvailable => "broker not available",
            ErrorCode::ReplicaNotAvailable => "replica not available",
            ErrorCode::MessageTooLarge => "message too large",
            ErrorCode::StaleControllerEpoch => "stale controller epoch",
            ErrorCode::OffsetMetadataTooLarge => "offset metadata too large",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
