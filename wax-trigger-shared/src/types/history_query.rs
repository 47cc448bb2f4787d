use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;

/// Sort order for history queries. The poller always asks ascending so
/// results arrive oldest-first and emission order matches chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// One time-ranged History Service query.
///
/// Built fresh per tick and discarded after use. `filters` holds the
/// exact-match request parameters (`act.account`, `act.name`,
/// `data.<field>`); keys for unset optional values are never present.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryQuery {
    pub after: DateTime<Utc>,
    pub before: DateTime<Utc>,
    pub limit: u32,
    pub sort: SortOrder,
    pub filters: BTreeMap<String, String>,
}

impl HistoryQuery {
    /// Flattens the query into request parameters for the transport layer.
    /// Timestamps are rendered in the millisecond ISO form the History
    /// Service expects.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            (
                "after".to_string(),
                self.after.to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
            (
                "before".to_string(),
                self.before.to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
            ("limit".to_string(), self.limit.to_string()),
            ("sort".to_string(), self.sort.as_str().to_string()),
        ];
        pairs.extend(self.filters.iter().map(|(k, v)| (k.clone(), v.clone())));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_query_pairs_carry_window_and_filters() {
        let after = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let before = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 30).unwrap();
        let mut filters = BTreeMap::new();
        filters.insert("act.account".to_string(), "atomicassets".to_string());

        let query = HistoryQuery {
            after,
            before,
            limit: 100,
            sort: SortOrder::Asc,
            filters,
        };

        let pairs = query.to_query_pairs();
        assert_eq!(
            pairs[0],
            ("after".to_string(), "2024-05-01T12:00:00.000Z".to_string())
        );
        assert_eq!(
            pairs[1],
            ("before".to_string(), "2024-05-01T12:00:30.000Z".to_string())
        );
        assert_eq!(pairs[2], ("limit".to_string(), "100".to_string()));
        assert_eq!(pairs[3], ("sort".to_string(), "asc".to_string()));
        assert_eq!(
            pairs[4],
            ("act.account".to_string(), "atomicassets".to_string())
        );
    }
}
