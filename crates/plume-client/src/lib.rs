//! Publishing client core for the plume log service.
//!
//! This crate implements the message-publishing path of a plume client:
//! partition selection, publish-request construction, leader routing, and a
//! bounded retry/failover policy for the two transient conditions a
//! partitioned log cluster routinely produces: a freshly dead connection
//! and a just-moved partition leader.
//!
//! The crate deliberately stops at its collaborator seams. Wire framing,
//! connection dialing/pooling, and metadata discovery live behind the
//! [`ClusterClient`] and [`BrokerConnection`] traits; payload encoding lives
//! behind [`Encodable`]. See [`producer`] for the orchestration and the
//! retry state machine.
//!
//! # Example
//!
//! ```rust,ignore
//! use plume_client::{Producer, ProducerConfig};
//! use plume_protocol::RequiredAcks;
//! use std::sync::Arc;
//!
//! # async fn example(cluster: Arc<dyn plume_client::ClusterClient>) -> plume_client::Result<()> {
//! let config = ProducerConfig::builder()
//!     .required_acks(RequiredAcks::WAIT_FOR_LOCAL)
//!     .timeout_ms(1_000)
//!     .build();
//!
//! let producer = Producer::new(cluster, "orders", config)?;
//! producer.send_message(Some("user-42"), "order data").await?;
//! # Ok(())
//! # }
//! ```

pub mod cluster;
pub mod encoder;
pub mod error;
pub mod partitioner;
pub mod producer;

pub use cluster::{BrokerConnection, ClusterClient};
pub use encoder::Encodable;
pub use error::{Error, Result};
pub use partitioner::{HashPartitioner, Partitioner, RandomPartitioner, RoundRobinPartitioner};
pub use producer::{Producer, ProducerConfig, ProducerConfigBuilder};

// Re-export the protocol types callers see in the public API.
pub use plume_protocol::{
    ErrorCode, Message, ProduceRequest, ProduceResponse, ProduceResponseBlock, RequiredAcks,
};
