use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Resumption marker persisted between polling ticks.
///
/// `last_timestamp` is monotonically non-decreasing across ticks and is
/// advanced to the tick's window end on every tick, including failed ones.
/// `last_block_num` is only populated by block triggers and tracks the one
/// block number the configured event watches (head or irreversible).
/// The poller is the cursor's only writer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cursor {
    pub last_timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_block_num: Option<u64>,
}

impl Cursor {
    /// Cursor for a trigger that has never polled: one minute behind `now`.
    pub fn initial(now: DateTime<Utc>) -> Self {
        Self {
            last_timestamp: now - Duration::seconds(60),
            last_block_num: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_cursor_starts_one_minute_back() {
        let now = Utc::now();
        let cursor = Cursor::initial(now);
        assert_eq!(now - cursor.last_timestamp, Duration::seconds(60));
        assert_eq!(cursor.last_block_num, None);
    }

    #[test]
    fn test_persisted_form_omits_absent_block_number() {
        let cursor = Cursor::initial(Utc::now());
        let json = serde_json::to_string(&cursor).unwrap();
        assert!(!json.contains("last_block_num"));

        let restored: Cursor = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cursor);
    }
}
