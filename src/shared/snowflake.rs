//! Snowflake ID Generator
//!
//! Time-ordered 64-bit ids for every entity: 41 bits of milliseconds
//! since a custom epoch, 10 bits of machine id, 12 bits of sequence.
//! Ids sort by creation time, which the feed's newest-first ordering
//! relies on as a tiebreaker.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Custom epoch (2020-01-01T00:00:00.000Z)
const SOCIAL_EPOCH: u64 = 1577836800000;

const MACHINE_ID_BITS: u64 = 10;
const SEQUENCE_BITS: u64 = 12;

const MACHINE_ID_MASK: u64 = (1 << MACHINE_ID_BITS) - 1;
const SEQUENCE_MASK: u64 = (1 << SEQUENCE_BITS) - 1;

/// Process-wide id generator, shared behind an `Arc` by all services.
pub struct SnowflakeGenerator {
    machine_id: u64,
    sequence: AtomicU64,
    last_timestamp: AtomicU64,
}

impl SnowflakeGenerator {
    pub fn new(machine_id: u64) -> Self {
        Self {
            machine_id: machine_id & MACHINE_ID_MASK,
            sequence: AtomicU64::new(0),
            last_timestamp: AtomicU64::new(0),
        }
    }

    /// Generate the next id. Ids within the same millisecond are
    /// disambiguated by the sequence counter; when the counter is
    /// exhausted the generator waits for the next millisecond.
    pub fn generate(&self) -> i64 {
        let (timestamp, sequence) = loop {
            let now = current_millis();

            if now == self.last_timestamp.load(Ordering::SeqCst) {
                let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
                if sequence <= SEQUENCE_MASK {
                    break (now, sequence);
                }
                // 4096 ids in one millisecond; spin until the clock moves
                while current_millis() == now {
                    std::hint::spin_loop();
                }
            } else {
                self.last_timestamp.store(now, Ordering::SeqCst);
                self.sequence.store(0, Ordering::SeqCst);
                break (now, 0);
            }
        };

        let id = ((timestamp - SOCIAL_EPOCH) << (MACHINE_ID_BITS + SEQUENCE_BITS))
            | (self.machine_id << SEQUENCE_BITS)
            | sequence;

        id as i64
    }
}

fn current_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

/// Recover the creation timestamp (epoch milliseconds) from an id.
pub fn extract_timestamp(snowflake: i64) -> u64 {
    ((snowflake as u64) >> (MACHINE_ID_BITS + SEQUENCE_BITS)) + SOCIAL_EPOCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_never_repeat() {
        let generator = SnowflakeGenerator::new(1);
        let ids: Vec<i64> = (0..100).map(|_| generator.generate()).collect();

        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }

    #[test]
    fn ids_stay_unique_past_sequence_exhaustion() {
        // More ids than the 12-bit sequence can cover in one millisecond
        let generator = SnowflakeGenerator::new(1);
        let ids: Vec<i64> = (0..5000).map(|_| generator.generate()).collect();

        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }

    #[test]
    fn embedded_timestamp_is_recent() {
        let generator = SnowflakeGenerator::new(1);
        let ts = extract_timestamp(generator.generate());

        let now = current_millis();
        assert!(ts <= now);
        assert!(ts > now - 1000);
    }

    #[test]
    fn machine_id_is_truncated_to_ten_bits() {
        let generator = SnowflakeGenerator::new(0xFFFF);
        let id = generator.generate() as u64;
        assert_eq!((id >> SEQUENCE_BITS) & MACHINE_ID_MASK, 0x3FF);
    }
}
