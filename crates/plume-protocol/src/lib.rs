//! Shared protocol types for the plume log client.
//!
//! This crate defines the data model exchanged between a publishing client
//! and the broker cluster: messages, publish requests/responses, and the
//! server result codes carried in response blocks. It deliberately defines
//! no wire format — every type derives [`serde::Serialize`] and
//! [`serde::Deserialize`] so the transport layer owns framing and encoding.

pub mod error;
pub mod messages;
pub mod types;

pub use error::ErrorCode;
pub use messages::{ProduceRequest, ProduceResponse, ProduceResponseBlock};
pub use types::{Message, RequiredAcks};
