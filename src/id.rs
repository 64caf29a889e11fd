//! IdGenerator - Pluggable id generation for the store.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Capability for generating record ids.
///
/// The store calls `next` exactly once per create. Implementations must
/// never repeat an id within a process lifetime.
pub trait IdGenerator: Send + Sync {
    fn next(&self) -> String;
}

/// Default generator producing random v4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator yielding "1", "2", "3", ... for tests and demos.
#[derive(Debug)]
pub struct SequenceGenerator {
    counter: AtomicU64,
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequenceGenerator {
    fn next(&self) -> String {
        self.counter.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_deterministic() {
        let generator = SequenceGenerator::new();
        assert_eq!(generator.next(), "1");
        assert_eq!(generator.next(), "2");
        assert_eq!(generator.next(), "3");
    }

    #[test]
    fn uuid_ids_are_unique_and_non_empty() {
        let generator = UuidGenerator;
        let first = generator.next();
        let second = generator.next();
        assert!(!first.is_empty());
        assert_ne!(first, second);
    }
}
