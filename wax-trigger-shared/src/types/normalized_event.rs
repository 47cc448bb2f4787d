use crate::types::EventCategory;
use serde::Serialize;
use serde_json::Value;

/// Action projection carried on every history-derived normalized event.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActionSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<Value>,
}

/// The single output shape every trigger emission is projected into.
///
/// Serialized as camelCase JSON with absent optionals omitted, which is how
/// the workflow host reads "undefined". `block_id` and `chain_id` are only
/// populated by block events; `action` only by history-derived events.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEvent {
    pub event: String,
    pub event_category: EventCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_num: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trx_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_sequence: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omits_absent_optionals_in_json() {
        let event = NormalizedEvent {
            event: "assetReceived".to_string(),
            event_category: EventCategory::Nft,
            timestamp: Some("2024-05-01T12:00:01.000".to_string()),
            block_num: Some(250000000),
            trx_id: None,
            action: None,
            receiver: None,
            producer: None,
            global_sequence: None,
            block_id: None,
            chain_id: None,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "assetReceived");
        assert_eq!(json["eventCategory"], "nft");
        assert_eq!(json["blockNum"], 250000000u64);
        assert!(json.get("trxId").is_none());
        assert!(json.get("globalSequence").is_none());
        assert!(json.get("blockId").is_none());
    }
}
