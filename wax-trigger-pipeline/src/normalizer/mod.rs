//! Projects heterogeneous raw results into the single output shape.
//!
//! Both projections are total: a field missing upstream becomes an absent
//! optional on the normalized event, never an error.

use wax_trigger_shared::types::{
    ActionSummary, ChainInfo, EventCategory, NormalizedEvent, RawAction,
};

/// Projects one raw history action into a normalized event.
pub fn normalize_action(
    action: &RawAction,
    event: &str,
    category: EventCategory,
) -> NormalizedEvent {
    let act = action.act.as_ref();
    NormalizedEvent {
        event: event.to_string(),
        event_category: category,
        timestamp: action.best_timestamp().map(str::to_string),
        block_num: action.block_num,
        trx_id: action.trx_id.clone(),
        action: Some(ActionSummary {
            account: act.and_then(|a| a.account.clone()),
            name: act.and_then(|a| a.name.clone()),
            data: act.and_then(|a| a.data.clone()),
            authorization: act.and_then(|a| a.authorization.clone()),
        }),
        receiver: action.receiver.clone(),
        producer: action.producer.clone(),
        global_sequence: action.global_sequence,
        block_id: None,
        chain_id: None,
    }
}

/// Builds the single event a block trigger emits when it observes a new
/// head or irreversible block.
pub fn normalize_block(
    info: &ChainInfo,
    event: &str,
    block_num: u64,
    block_id: &str,
) -> NormalizedEvent {
    NormalizedEvent {
        event: event.to_string(),
        event_category: EventCategory::Block,
        timestamp: (!info.head_block_time.is_empty()).then(|| info.head_block_time.clone()),
        block_num: Some(block_num),
        trx_id: None,
        action: None,
        receiver: None,
        producer: (!info.head_block_producer.is_empty())
            .then(|| info.head_block_producer.clone()),
        global_sequence: None,
        block_id: (!block_id.is_empty()).then(|| block_id.to_string()),
        chain_id: (!info.chain_id.is_empty()).then(|| info.chain_id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_action() -> RawAction {
        serde_json::from_value(serde_json::json!({
            "@timestamp": "2024-05-01T12:00:01.000",
            "block_num": 250000000u64,
            "trx_id": "0a1b2c",
            "act": {
                "account": "atomicassets",
                "name": "transfer",
                "data": { "to": "alice", "from": "bob" },
                "authorization": [ { "actor": "bob", "permission": "active" } ]
            },
            "receiver": "alice",
            "producer": "waxproducer1",
            "global_sequence": 987654321u64
        }))
        .unwrap()
    }

    #[test]
    fn test_projects_every_field_it_finds() {
        let event = normalize_action(&sample_action(), "assetReceived", EventCategory::Nft);

        assert_eq!(event.event, "assetReceived");
        assert_eq!(event.event_category, EventCategory::Nft);
        assert_eq!(event.timestamp.as_deref(), Some("2024-05-01T12:00:01.000"));
        assert_eq!(event.block_num, Some(250000000));
        assert_eq!(event.trx_id.as_deref(), Some("0a1b2c"));
        assert_eq!(event.receiver.as_deref(), Some("alice"));
        assert_eq!(event.global_sequence, Some(987654321));

        let action = event.action.unwrap();
        assert_eq!(action.account.as_deref(), Some("atomicassets"));
        assert_eq!(action.name.as_deref(), Some("transfer"));
        assert_eq!(action.data.unwrap()["to"], "alice");
    }

    #[test]
    fn test_one_event_per_action_in_input_order() {
        let mut second = sample_action();
        second.trx_id = Some("1d2e3f".to_string());
        let actions = vec![sample_action(), second];

        let events: Vec<_> = actions
            .iter()
            .map(|action| normalize_action(action, "assetReceived", EventCategory::Nft))
            .collect();

        assert_eq!(events.len(), actions.len());
        assert_eq!(events[0].trx_id.as_deref(), Some("0a1b2c"));
        assert_eq!(events[1].trx_id.as_deref(), Some("1d2e3f"));
    }

    #[test]
    fn test_empty_record_normalizes_without_failing() {
        let event = normalize_action(&RawAction::default(), "gameAction", EventCategory::Game);

        assert_eq!(event.timestamp, None);
        assert_eq!(event.block_num, None);
        assert_eq!(event.trx_id, None);
        assert_eq!(event.action, Some(ActionSummary::default()));
    }

    #[test]
    fn test_block_event_carries_chain_fields() {
        let info = ChainInfo {
            head_block_num: 250000100,
            head_block_id: "00abc123".to_string(),
            head_block_time: "2024-05-01T12:00:02.000".to_string(),
            head_block_producer: "waxproducer1".to_string(),
            last_irreversible_block_num: 250000000,
            last_irreversible_block_id: "00abc0ff".to_string(),
            chain_id: "1064487b".to_string(),
        };

        let event = normalize_block(&info, "newBlock", info.head_block_num, &info.head_block_id);
        assert_eq!(event.event, "newBlock");
        assert_eq!(event.event_category, EventCategory::Block);
        assert_eq!(event.block_num, Some(250000100));
        assert_eq!(event.block_id.as_deref(), Some("00abc123"));
        assert_eq!(event.chain_id.as_deref(), Some("1064487b"));
        assert_eq!(event.action, None);
    }
}
