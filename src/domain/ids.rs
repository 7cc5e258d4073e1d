//! Service-assigned document ids: `"<prefix>-<unix seconds>"`.
//!
//! The numeric part is the creation second, bumped past the last value issued
//! for the same prefix so two creations in one second still get distinct ids.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct IdGenerator {
    last_issued: Mutex<HashMap<String, i64>>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self, prefix: &str) -> String {
        self.next_at(prefix, Utc::now().timestamp())
    }

    fn next_at(&self, prefix: &str, now_secs: i64) -> String {
        // A poisoned lock only means another thread panicked mid-insert; the map is still valid.
        let mut last = self
            .last_issued
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let value = match last.get(prefix) {
            Some(&prev) if prev >= now_secs => prev + 1,
            _ => now_secs,
        };
        last.insert(prefix.to_string(), value);
        format!("{}-{}", prefix, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_the_current_second() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_at("category", 1_700_000_000), "category-1700000000");
    }

    #[test]
    fn same_second_never_repeats() {
        let ids = IdGenerator::new();
        let a = ids.next_at("photo", 100);
        let b = ids.next_at("photo", 100);
        let c = ids.next_at("photo", 99);
        assert_eq!(a, "photo-100");
        assert_eq!(b, "photo-101");
        assert_eq!(c, "photo-102");
        assert_eq!(ids.next_at("photo", 500), "photo-500");
    }

    #[test]
    fn prefixes_are_independent() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_at("photo", 100), "photo-100");
        assert_eq!(ids.next_at("contact", 100), "contact-100");
    }

    #[test]
    fn format_is_prefix_dash_digits() {
        let id = IdGenerator::new().next("service");
        let digits = id.strip_prefix("service-").unwrap();
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}
