//! Post-query predicate for the token amount threshold the History
//! Service cannot express upstream.

use wax_trigger_shared::types::RawAction;

/// Whether an action clears the configured minimum-amount threshold.
///
/// With `min_amount == 0` everything passes. Actions without a `quantity`
/// field also pass: non-transfer actions carry no amount to test. A
/// quantity whose symbol differs from `token_symbol` is excluded; an
/// amount that fails to parse only excludes on symbol mismatch.
pub fn passes_amount_filter(action: &RawAction, min_amount: f64, token_symbol: &str) -> bool {
    if min_amount <= 0.0 {
        return true;
    }
    let Some(quantity) = action.quantity() else {
        return true;
    };

    let mut parts = quantity.split_whitespace();
    let amount = parts.next().and_then(|raw| raw.parse::<f64>().ok());
    let symbol = parts.next();

    if symbol != Some(token_symbol) {
        return false;
    }
    if let Some(amount) = amount {
        if amount < min_amount {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer_with_quantity(quantity: Option<&str>) -> RawAction {
        let data = match quantity {
            Some(quantity) => serde_json::json!({ "to": "alice", "quantity": quantity }),
            None => serde_json::json!({ "to": "alice" }),
        };
        serde_json::from_value(serde_json::json!({
            "act": { "account": "eosio.token", "name": "transfer", "data": data }
        }))
        .unwrap()
    }

    #[test]
    fn test_amount_below_threshold_is_excluded() {
        let action = transfer_with_quantity(Some("3.00000000 WAX"));
        assert!(!passes_amount_filter(&action, 5.0, "WAX"));
    }

    #[test]
    fn test_amount_at_or_above_threshold_is_included() {
        let action = transfer_with_quantity(Some("10.00000000 WAX"));
        assert!(passes_amount_filter(&action, 5.0, "WAX"));

        let exact = transfer_with_quantity(Some("5.00000000 WAX"));
        assert!(passes_amount_filter(&exact, 5.0, "WAX"));
    }

    #[test]
    fn test_missing_quantity_fails_open() {
        let action = transfer_with_quantity(None);
        assert!(passes_amount_filter(&action, 5.0, "WAX"));
    }

    #[test]
    fn test_symbol_mismatch_is_excluded() {
        let action = transfer_with_quantity(Some("10.00000000 TLM"));
        assert!(!passes_amount_filter(&action, 5.0, "WAX"));
    }

    #[test]
    fn test_zero_threshold_passes_everything() {
        let action = transfer_with_quantity(Some("0.00000001 TLM"));
        assert!(passes_amount_filter(&action, 0.0, "WAX"));
    }

    #[test]
    fn test_quantity_without_symbol_is_excluded() {
        let action = transfer_with_quantity(Some("10.00000000"));
        assert!(!passes_amount_filter(&action, 5.0, "WAX"));
    }

    #[test]
    fn test_unparseable_amount_with_matching_symbol_is_included() {
        let action = transfer_with_quantity(Some("lots WAX"));
        assert!(passes_amount_filter(&action, 5.0, "WAX"));
    }
}
