//! ID and timestamp utilities for toolshelf
//!
//! Favorites get an opaque UUID v4 id and an ISO-8601 creation timestamp.

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Generate a unique favorite ID
///
/// Format: hyphenated UUID v4
/// Example: `3f2b8c1e-9d4a-4c7e-8b1f-2a6d5e4c3b2a`
pub fn generate_favorite_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current UTC time as an ISO-8601 string with millisecond precision
///
/// Example: `2026-10-19T12:00:00.000Z`
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use std::collections::HashSet;

    #[test]
    fn test_generate_favorite_id_is_uuid_v4() {
        let id = generate_favorite_id();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(id.len(), 36);
    }

    #[test]
    fn test_generate_favorite_id_uniqueness() {
        let ids: HashSet<String> = (0..100).map(|_| generate_favorite_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_now_iso8601_format() {
        let ts = now_iso8601();
        assert!(ts.ends_with('Z'));
        // 2026-10-19T12:00:00.000Z
        assert_eq!(ts.len(), 24);
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
