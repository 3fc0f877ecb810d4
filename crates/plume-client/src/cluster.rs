//! Collaborator contracts for cluster metadata and broker transport
//!
//! The producer core consumes these traits and nothing else about the
//! surrounding system: how connections are dialed and pooled, how metadata
//! is discovered and refreshed, and how requests are framed on the wire all
//! live behind them. Implementations must be safe for concurrent use; the
//! producer shares them across calls via `Arc`.

use crate::error::Result;
use async_trait::async_trait;
use plume_protocol::{ProduceRequest, ProduceResponse};
use std::sync::Arc;

/// A live connection to a single broker node.
#[async_trait]
pub trait BrokerConnection: Send + Sync {
    /// Submit a publish request.
    ///
    /// Returns `Ok(None)` when the broker accepted the request without a
    /// response body, which is the normal outcome for
    /// `RequiredAcks::NO_RESPONSE`.
    async fn publish(
        &self,
        client_id: &str,
        request: &ProduceRequest,
    ) -> Result<Option<ProduceResponse>>;
}

/// A client's view of the cluster: partition lists, leader resolution, and
/// the repair hooks the producer's failover path relies on.
#[async_trait]
pub trait ClusterClient: Send + Sync {
    /// The client id sent with every request, for broker-side logging and
    /// quota attribution.
    fn client_id(&self) -> &str;

    /// The ordered list of partition ids for a topic, per the client's
    /// current metadata view.
    async fn partitions(&self, topic: &str) -> Result<Vec<u32>>;

    /// Resolve the connection to the current leader for (topic, partition).
    async fn leader(&self, topic: &str, partition: u32) -> Result<Arc<dyn BrokerConnection>>;

    /// Drop a connection believed to be stale so the next leader resolution
    /// dials fresh. Best-effort; never fails.
    async fn disconnect(&self, broker: Arc<dyn BrokerConnection>);

    /// Re-query the cluster for the topic's partition/leader assignments.
    async fn refresh_metadata(&self, topic: &str) -> Result<()>;
}
