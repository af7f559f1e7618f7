//! Activation history returned by `GET /logs`.

use serde::{Deserialize, Serialize};

use crate::status::LightState;
use crate::wire::whole_number;

/// Number of history entries a dashboard shows.
pub const HISTORY_LIMIT: usize = 10;

/// One activation-history record.
///
/// Missing fields read as their default; numbers may be fractional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogEntry {
    /// Unique id assigned by the device.
    #[serde(deserialize_with = "whole_number")]
    pub id: u64,
    /// Device clock in milliseconds.
    #[serde(deserialize_with = "whole_number")]
    pub timestamp: u64,
    /// Seconds the lamp stayed in the previous state, 0 when unknown.
    #[serde(deserialize_with = "whole_number")]
    pub duration: u64,
    #[serde(rename = "type")]
    pub kind: LightState,
}

/// Body of `GET /logs`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogsResponse {
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    /// Number of entries recorded by the device, which may exceed `logs.len()`.
    #[serde(default, deserialize_with = "whole_number")]
    pub total: u64,
}

/// First `limit` entries, in the order the device returned them.
#[must_use]
pub fn recent(logs: &[LogEntry], limit: usize) -> &[LogEntry] {
    &logs[..logs.len().min(limit)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64) -> LogEntry {
        LogEntry {
            id,
            timestamp: id * 1000,
            duration: 0,
            kind: LightState::On,
        }
    }

    #[test]
    fn should_decode_type_tag() {
        let json = r#"{"id":1,"timestamp":1700000000000,"duration":12,"type":"on"}"#;
        let log: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(log.kind, LightState::On);
        assert_eq!(log.duration, 12);
        assert_eq!(log.timestamp, 1_700_000_000_000);
    }

    #[test]
    fn should_accept_fractional_duration() {
        let json = r#"{"logs":[{"id":3,"timestamp":1700000000000.0,"duration":12.5,"type":"off"}],
            "total":3}"#;
        let response: LogsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.logs[0].duration, 12);
        assert_eq!(response.logs[0].timestamp, 1_700_000_000_000);
        assert_eq!(response.logs[0].kind, LightState::Off);
    }

    #[test]
    fn should_default_missing_entry_fields() {
        let json = r#"{"logs":[{"id":1,"type":"on"}]}"#;
        let response: LogsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.logs[0].duration, 0);
        assert_eq!(response.logs[0].timestamp, 0);
    }

    #[test]
    fn should_reject_unknown_type_tag() {
        let json = r#"{"id":1,"timestamp":0,"duration":0,"type":"dim"}"#;
        assert!(serde_json::from_str::<LogEntry>(json).is_err());
    }

    #[test]
    fn should_default_missing_logs_to_empty() {
        let response: LogsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.logs.is_empty());
        assert_eq!(response.total, 0);
    }

    #[test]
    fn should_truncate_without_reordering() {
        let logs: Vec<_> = (1..=15).rev().map(entry).collect();
        let shown = recent(&logs, HISTORY_LIMIT);
        assert_eq!(shown.len(), 10);
        assert_eq!(shown[0].id, 15);
        assert_eq!(shown[9].id, 6);
    }

    #[test]
    fn should_keep_short_lists_intact() {
        let logs = vec![entry(2), entry(1)];
        assert_eq!(recent(&logs, HISTORY_LIMIT), logs.as_slice());
        assert!(recent(&[], HISTORY_LIMIT).is_empty());
    }
}
