use serde::Deserialize;
use serde_json::Value;

/// Action envelope inside a History Service record.
///
/// Every field is optional by design: upstream payload shapes drift across
/// contract versions and the engine never fails on a mismatch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActionBody {
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub authorization: Option<Value>,
}

/// One raw record from the History Service, kept opaque beyond the fields
/// the engine reads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAction {
    /// Indexed-field spelling used by newer History Service versions.
    #[serde(rename = "@timestamp", default)]
    pub timestamp_indexed: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub block_num: Option<u64>,
    #[serde(default)]
    pub trx_id: Option<String>,
    #[serde(default)]
    pub act: Option<ActionBody>,
    #[serde(default)]
    pub receiver: Option<String>,
    #[serde(default)]
    pub producer: Option<String>,
    #[serde(default)]
    pub global_sequence: Option<u64>,
}

impl RawAction {
    /// Best available timestamp, preferring the indexed spelling.
    pub fn best_timestamp(&self) -> Option<&str> {
        self.timestamp_indexed
            .as_deref()
            .or(self.timestamp.as_deref())
    }

    /// The `quantity` field of transfer-like actions, when present.
    pub fn quantity(&self) -> Option<&str> {
        self.act.as_ref()?.data.as_ref()?.get("quantity")?.as_str()
    }
}
