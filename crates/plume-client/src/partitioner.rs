//! Partition selection strategies
//!
//! A [`Partitioner`] maps a message key and the current partition count to an
//! index into the topic's partition list. The contract is purely numeric:
//! for any `num_partitions > 0` the result must lie in `[0, num_partitions)`.
//! The producer enforces the bound: an out-of-range index fails the send
//! with [`Error::InvalidPartition`](crate::Error::InvalidPartition) rather
//! than being clamped, because it signals a defective strategy, not a
//! transient cluster condition.

use murmur2::{murmur2, KAFKA_SEED};
use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Chooses the partition index for an outgoing message.
pub trait Partitioner: Send + Sync {
    /// Map a key (if any) and the partition count to an index in
    /// `[0, num_partitions)`.
    fn partition(&self, key: Option<&[u8]>, num_partitions: usize) -> usize;
}

/// Uniform-random partition selection. Ignores the key entirely.
///
/// This is the default strategy when a producer is built without one.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPartitioner;

impl Partitioner for RandomPartitioner {
    fn partition(&self, _key: Option<&[u8]>, num_partitions: usize) -> usize {
        rand::thread_rng().gen_range(0..num_partitions)
    }
}

/// Round-robin partition selection. Ignores the key entirely.
#[derive(Debug, Default)]
pub struct RoundRobinPartitioner {
    next: AtomicUsize,
}

impl Partitioner for RoundRobinPartitioner {
    fn partition(&self, _key: Option<&[u8]>, num_partitions: usize) -> usize {
        self.next.fetch_add(1, Ordering::Relaxed) % num_partitions
    }
}

/// Key-hash partition selection using murmur2 with the Kafka seed, so the
/// same key always routes to the same partition and the mapping agrees with
/// Kafka's default partitioner. Keyless messages fall back to a random
/// partition.
#[derive(Debug, Default, Clone, Copy)]
pub struct HashPartitioner;

impl Partitioner for HashPartitioner {
    fn partition(&self, key: Option<&[u8]>, num_partitions: usize) -> usize {
        match key {
            Some(key) => {
                // Mask the sign bit then take the modulus, matching Kafka's
                // Utils.toPositive(Utils.murmur2(key)) % numPartitions.
                let hash = murmur2(key, KAFKA_SEED);
                (hash & 0x7fff_ffff) as usize % num_partitions
            }
            None => RandomPartitioner.partition(None, num_partitions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_partitioner_in_range() {
        let partitioner = RandomPartitioner;
        for num_partitions in [1usize, 2, 3, 7, 64, 1000] {
            for key in [None, Some(&b"key"[..])] {
                for _ in 0..200 {
                    let index = partitioner.partition(key, num_partitions);
                    assert!(index < num_partitions);
                }
            }
        }
    }

    #[test]
    fn test_random_partitioner_single_partition() {
        assert_eq!(RandomPartitioner.partition(None, 1), 0);
    }

    #[test]
    fn test_round_robin_cycles() {
        let partitioner = RoundRobinPartitioner::default();
        let picks: Vec<usize> = (0..6).map(|_| partitioner.partition(None, 3)).collect();
        assert_eq!(picks, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_hash_partitioner_deterministic() {
        let partitioner = HashPartitioner;
        let a = partitioner.partition(Some(&b"user-42"[..]), 12);
        let b = partitioner.partition(Some(&b"user-42"[..]), 12);
        assert_eq!(a, b);
        assert!(a < 12);
    }

    #[test]
    fn test_hash_partitioner_in_range() {
        let partitioner = HashPartitioner;
        for i in 0..1000 {
            let key = format!("key-{}", i);
            let index = partitioner.partition(Some(key.as_bytes()), 17);
            assert!(index < 17);
        }
    }

    #[test]
    fn test_hash_partitioner_keyless_in_range() {
        let partitioner = HashPartitioner;
        for _ in 0..200 {
            assert!(partitioner.partition(None, 5) < 5);
        }
    }
}
