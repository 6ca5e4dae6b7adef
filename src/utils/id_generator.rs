//! Prefixed identifier generation.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

static LAST_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Generates an id of the form `<prefix>_<millis>`, e.g. `job_1700000000000`.
///
/// Millisecond timestamps collide under concurrent creates, so the counter is
/// bumped past the last issued value when the clock has not advanced. Ids stay
/// unique and monotonic within a process.
pub fn generate_id(prefix: &str) -> String {
    let now = Utc::now().timestamp_millis();

    let unique = LAST_MILLIS
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(if now > last { now } else { last + 1 })
        })
        .map(|last| if now > last { now } else { last + 1 })
        .unwrap_or(now);

    format!("{prefix}_{unique}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_has_prefix() {
        let id = generate_id("job");
        assert!(id.starts_with("job_"));
        assert!(id["job_".len()..].parse::<i64>().is_ok());
    }

    #[test]
    fn test_ids_are_unique_in_tight_loop() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id("task")).collect();
        assert_eq!(ids.len(), 1000);
    }
}
