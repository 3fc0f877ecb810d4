//! Key/value encoding abstraction
//!
//! Callers hand the producer anything that can render itself to bytes; the
//! producer encodes exactly once per send, before any cluster interaction,
//! so a bad payload never costs a network round-trip.

use crate::error::Result;
use bytes::Bytes;

/// A value that can be encoded into message key or value bytes.
///
/// An implementation may fail (e.g. a schema-backed encoder rejecting a
/// record); the producer treats any failure as fatal for the send.
pub trait Encodable {
    fn encode(&self) -> Result<Bytes>;
}

impl Encodable for str {
    fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::copy_from_slice(self.as_bytes()))
    }
}

impl Encodable for String {
    fn encode(&self) -> Result<Bytes> {
        self.as_str().encode()
    }
}

impl Encodable for [u8] {
    fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::copy_from_slice(self))
    }
}

impl Encodable for Vec<u8> {
    fn encode(&self) -> Result<Bytes> {
        self.as_slice().encode()
    }
}

impl Encodable for Bytes {
    fn encode(&self) -> Result<Bytes> {
        Ok(self.clone())
    }
}
