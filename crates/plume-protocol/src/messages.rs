//! Publish request and response types

use crate::error::ErrorCode;
use crate::types::{Message, RequiredAcks};
use serde::{Deserialize, Serialize};

/// A publish request for a single message.
///
/// Carries the acknowledgement level and the broker-side wait bound. The
/// timeout is interpreted by the broker as the maximum time in milliseconds
/// it will wait to satisfy `required_acks`; it is not a client-side deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProduceRequest {
    /// Destination topic
    pub topic: String,
    /// Destination partition id
    pub partition: u32,
    /// Acknowledgement level the broker must satisfy before responding
    pub required_acks: RequiredAcks,
    /// Broker-side wait bound in milliseconds
    pub timeout_ms: i32,
    /// The message to append
    pub message: Message,
}

/// The per-(topic, partition) fragment of a publish response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProduceResponseBlock {
    /// Topic this block refers to
    pub topic: String,
    /// Partition this block refers to
    pub partition: u32,
    /// Result code for the append
    pub error: ErrorCode,
    /// Offset assigned to the message when the append succeeded
    pub offset: u64,
}

/// A publish response.
///
/// The broker sends no response at all for `RequiredAcks::NO_RESPONSE`, so
/// callers generally receive `Option<ProduceResponse>` from the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProduceResponse {
    /// One block per (topic, partition) the request touched
    pub blocks: Vec<ProduceResponseBlock>,
}

impl ProduceResponse {
    /// Look up the result block for a (topic, partition) pair.
    pub fn block(&self, topic: &str, partition: u32) -> Option<&ProduceResponseBlock> {
        self.blocks
            .iter()
            .find(|b| b.topic == topic && b.partition == partition)
    }
}
