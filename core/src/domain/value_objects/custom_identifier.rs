//! Caller-correlation identifiers for top-up submissions
//!
//! Identifiers have the form `web-<unix millis>`. A shared generator keeps
//! them strictly increasing within the process, so two submissions in the
//! same millisecond still get distinct values.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

const PREFIX: &str = "web";

#[derive(Debug, Default)]
pub struct CustomIdentifierGenerator {
    last_issued: AtomicI64,
}

impl CustomIdentifierGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue an identifier for the current time
    pub fn next_id(&self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&self, now_millis: i64) -> String {
        let step = |last: i64| now_millis.max(last + 1);
        // The closure never returns None, so this is always Ok.
        let previous = match self
            .last_issued
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(step(last)))
        {
            Ok(prev) | Err(prev) => prev,
        };
        format!("{}-{}", PREFIX, step(previous))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_timestamp_when_clock_moves_forward() {
        let generator = CustomIdentifierGenerator::new();
        assert_eq!(generator.next_at(1_700_000_000_000), "web-1700000000000");
        assert_eq!(generator.next_at(1_700_000_000_250), "web-1700000000250");
    }

    #[test]
    fn test_same_millisecond_is_bumped() {
        let generator = CustomIdentifierGenerator::new();
        let first = generator.next_at(1_000);
        let second = generator.next_at(1_000);
        let third = generator.next_at(999);
        assert_eq!(first, "web-1000");
        assert_eq!(second, "web-1001");
        assert_eq!(third, "web-1002");
    }

    #[test]
    fn test_live_ids_are_unique() {
        let generator = CustomIdentifierGenerator::new();
        let ids: std::collections::HashSet<String> = (0..500).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 500);
        assert!(ids.iter().all(|id| id.starts_with("web-")));
    }
}
