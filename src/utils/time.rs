use chrono::Utc;

/// Current time as milliseconds since the Unix epoch.
///
/// The vendor's trace ids and User-Agent fingerprints embed millisecond
/// timestamps, so this is the only clock resolution the relay needs.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_millis_is_monotonic_enough() {
        let before = now_millis();
        let after = now_millis();
        assert!(after >= before);
        // sanity: the value is in milliseconds, not seconds
        assert!(before > 1_600_000_000_000);
    }
}
