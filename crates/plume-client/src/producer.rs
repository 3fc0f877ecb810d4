//! Publishing producer with leader routing and bounded failover
//!
//! A [`Producer`] publishes messages on a single topic. Each send selects a
//! partition via the configured [`Partitioner`], resolves the partition's
//! current leader through the [`ClusterClient`], and submits one publish
//! request. When the cluster's leadership view turns out to be stale (a
//! dead connection, or a response naming a node that is no longer leader),
//! the producer performs the matching repair, dropping the connection or
//! refreshing topic metadata, and retries exactly once. The two-attempt
//! budget is shared across both failure classes, so a call never contacts
//! the cluster more than twice.
//!
//! # Example
//!
//! ```rust,ignore
//! use plume_client::{Producer, ProducerConfig};
//! use plume_protocol::RequiredAcks;
//!
//! let config = ProducerConfig::builder()
//!     .required_acks(RequiredAcks::WAIT_FOR_ALL)
//!     .timeout_ms(5_000)
//!     .build();
//!
//! let producer = Producer::new(cluster, "orders", config)?;
//! producer.send_message(Some("user-42"), "order data").await?;
//! ```
//!
//! The producer holds no mutable state, so one instance can serve concurrent
//! sends; share it via `Arc` as needed. It has no teardown of its own; its
//! lifetime is tied to the cluster client the caller owns and closes.

use crate::cluster::{BrokerConnection, ClusterClient};
use crate::encoder::Encodable;
use crate::error::{Error, Result};
use crate::partitioner::{Partitioner, RandomPartitioner};
use plume_protocol::{ErrorCode, Message, ProduceRequest, RequiredAcks};
use std::sync::Arc;
use tracing::debug;

/// Default broker-side acknowledgement wait bound.
const DEFAULT_TIMEOUT_MS: i32 = 10_000;

// ============================================================================
// Configuration
// ============================================================================

/// Producer configuration.
///
/// An absent partitioner is resolved to [`RandomPartitioner`] when the
/// producer is constructed, never later.
#[derive(Clone)]
pub struct ProducerConfig {
    /// Partition selection strategy; `None` means uniform random
    pub partitioner: Option<Arc<dyn Partitioner>>,
    /// Acknowledgement level the broker must satisfy before responding
    pub required_acks: RequiredAcks,
    /// Max time in ms the broker waits to satisfy `required_acks`.
    /// Sent to the broker; not a client-side deadline.
    pub timeout_ms: i32,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            partitioner: None,
            required_acks: RequiredAcks::default(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ProducerConfig {
    /// Create a new builder
    pub fn builder() -> ProducerConfigBuilder {
        ProducerConfigBuilder::default()
    }
}

/// Builder for ProducerConfig
#[derive(Default)]
pub struct ProducerConfigBuilder {
    config: ProducerConfig,
}

impl ProducerConfigBuilder {
    /// Set the partition selection strategy
    pub fn partitioner(mut self, partitioner: Arc<dyn Partitioner>) -> Self {
        self.config.partitioner = Some(partitioner);
        self
    }

    /// Set the required acknowledgement level
    pub fn required_acks(mut self, acks: RequiredAcks) -> Self {
        self.config.required_acks = acks;
        self
    }

    /// Set the broker-side acknowledgement wait bound in milliseconds
    pub fn timeout_ms(mut self, timeout_ms: i32) -> Self {
        self.config.timeout_ms = timeout_ms;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ProducerConfig {
        self.config
    }
}

/// Configuration after validation and default resolution; every field is
/// populated and the value never changes for the producer's lifetime.
struct ResolvedConfig {
    partitioner: Arc<dyn Partitioner>,
    required_acks: RequiredAcks,
    timeout_ms: i32,
}

impl ResolvedConfig {
    fn resolve(config: ProducerConfig) -> Result<Self> {
        if config.required_acks.0 < -1 {
            return Err(Error::Configuration(format!(
                "RequiredAcks must be >= -1, got {}",
                config.required_acks.0
            )));
        }
        if config.timeout_ms < 0 {
            return Err(Error::Configuration(format!(
                "Timeout must be >= 0, got {}",
                config.timeout_ms
            )));
        }

        Ok(Self {
            partitioner: config
                .partitioner
                .unwrap_or_else(|| Arc::new(RandomPartitioner)),
            required_acks: config.required_acks,
            timeout_ms: config.timeout_ms,
        })
    }
}

// ============================================================================
// Outcome classification
// ============================================================================

/// What a publish failure tells us about retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    /// Not worth a second attempt
    Fatal,
    /// The connection is suspect; drop it and retry once
    RetryViaReconnect,
    /// The leadership view is suspect; refresh metadata and retry once
    RetryViaRefresh,
}

/// A failure observed while submitting a publish request: either the
/// transport refused or broke, or the broker answered with an error code.
enum PublishFault<'a> {
    Transport(&'a Error),
    Code(ErrorCode),
}

/// Classify a publish fault.
///
/// A structural encoding error reported by the transport means the payload
/// itself was rejected, which a retry cannot fix. Any other transport
/// failure is presumed to be a dead or stale connection. Of the broker
/// codes, only the stale-leadership class is retryable, and the repair is a
/// metadata refresh rather than a reconnect.
fn classify(fault: &PublishFault<'_>) -> Disposition {
    match fault {
        PublishFault::Transport(Error::Encoding(_)) => Disposition::Fatal,
        PublishFault::Transport(_) => Disposition::RetryViaReconnect,
        PublishFault::Code(code) => match code {
            ErrorCode::UnknownTopicOrPartition
            | ErrorCode::NotLeaderForPartition
            | ErrorCode::LeaderNotAvailable => Disposition::RetryViaRefresh,
            _ => Disposition::Fatal,
        },
    }
}

// ============================================================================
// Producer
// ============================================================================

/// Shared retry budget: one retry total, regardless of which failure class
/// consumed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    First,
    Final,
}

/// How a single attempt failed, carrying what the retry path needs.
enum AttemptFailure {
    /// Propagate immediately
    Fatal(Error),
    /// Transport-level failure against a resolved leader connection
    Transport {
        broker: Arc<dyn BrokerConnection>,
        error: Error,
    },
    /// The broker disclaims leadership for the partition
    StaleLeadership(ErrorCode),
}

/// Publishes messages on a single topic. See the module docs for the
/// routing and failover behavior.
pub struct Producer {
    client: Arc<dyn ClusterClient>,
    topic: String,
    config: ResolvedConfig,
}

impl Producer {
    /// Create a producer for a topic.
    ///
    /// Validates `required_acks >= -1` and `timeout_ms >= 0`; either
    /// violation is an [`Error::Configuration`]. An absent partitioner is
    /// resolved to [`RandomPartitioner`] here, so the constructed producer
    /// is fully populated and immutable.
    pub fn new(
        client: Arc<dyn ClusterClient>,
        topic: impl Into<String>,
        config: ProducerConfig,
    ) -> Result<Self> {
        Ok(Self {
            client,
            topic: topic.into(),
            config: ResolvedConfig::resolve(config)?,
        })
    }

    /// The topic this producer publishes to.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Send one message, blocking until the configured acknowledgement
    /// level is met or the call fails.
    ///
    /// The key and value are encoded once, before any cluster interaction,
    /// so an encoding failure costs no network traffic. A transport failure
    /// triggers one reconnect-and-retry; a stale-leadership response code
    /// triggers one refresh-and-retry; the budget is shared, so at most two
    /// broker contacts happen per call.
    pub async fn send_message<K, V>(&self, key: Option<&K>, value: &V) -> Result<()>
    where
        K: Encodable + ?Sized,
        V: Encodable + ?Sized,
    {
        let key_bytes = match key {
            Some(key) => Some(key.encode()?),
            None => None,
        };
        let value_bytes = value.encode()?;
        let message = Message {
            key: key_bytes,
            value: value_bytes,
        };

        let mut attempt = Attempt::First;
        loop {
            let failure = match self.publish_once(&message).await {
                Ok(()) => return Ok(()),
                Err(failure) => failure,
            };

            match failure {
                AttemptFailure::Fatal(error) => return Err(error),
                AttemptFailure::Transport { broker, error } => {
                    if attempt == Attempt::Final {
                        return Err(error);
                    }
                    debug!(
                        "Transport failure publishing to '{}': {}; dropping connection and retrying",
                        self.topic, error
                    );
                    self.client.disconnect(broker).await;
                    attempt = Attempt::Final;
                }
                AttemptFailure::StaleLeadership(code) => {
                    if attempt == Attempt::Final {
                        return Err(Error::Server(code));
                    }
                    debug!(
                        "Stale leadership publishing to '{}' ({}); refreshing metadata and retrying",
                        self.topic, code
                    );
                    self.client.refresh_metadata(&self.topic).await?;
                    attempt = Attempt::Final;
                }
            }
        }
    }

    /// One full attempt: partition selection, leader resolution, submission,
    /// and response inspection.
    async fn publish_once(&self, message: &Message) -> std::result::Result<(), AttemptFailure> {
        let partitions = self
            .client
            .partitions(&self.topic)
            .await
            .map_err(AttemptFailure::Fatal)?;
        if partitions.is_empty() {
            return Err(AttemptFailure::Fatal(Error::InvalidPartition));
        }

        let index = self
            .config
            .partitioner
            .partition(message.key_bytes(), partitions.len());
        let partition = match partitions.get(index) {
            Some(&partition) => partition,
            // An out-of-range index is a defective strategy, not a cluster
            // condition; fail rather than clamp.
            None => return Err(AttemptFailure::Fatal(Error::InvalidPartition)),
        };

        let broker = self
            .client
            .leader(&self.topic, partition)
            .await
            .map_err(AttemptFailure::Fatal)?;

        let request = ProduceRequest {
            topic: self.topic.clone(),
            partition,
            required_acks: self.config.required_acks,
            timeout_ms: self.config.timeout_ms,
            message: message.clone(),
        };

        let response = match broker.publish(self.client.client_id(), &request).await {
            Ok(response) => response,
            Err(error) => {
                return Err(match classify(&PublishFault::Transport(&error)) {
                    Disposition::Fatal => AttemptFailure::Fatal(error),
                    _ => AttemptFailure::Transport { broker, error },
                });
            }
        };

        // No response body means the broker accepted without acknowledgement
        // (RequiredAcks::NO_RESPONSE).
        let Some(response) = response else {
            return Ok(());
        };

        let block = match response.block(&self.topic, partition) {
            Some(block) => block,
            None => return Err(AttemptFailure::Fatal(Error::IncompleteResponse)),
        };

        match block.error {
            ErrorCode::None => Ok(()),
            code => Err(match classify(&PublishFault::Code(code)) {
                Disposition::RetryViaRefresh => AttemptFailure::StaleLeadership(code),
                _ => AttemptFailure::Fatal(Error::Server(code)),
            }),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
