use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Event categories a trigger can watch.
///
/// Each category groups the events one on-chain subsystem produces: token
/// and resource activity on an account, AtomicAssets NFT lifecycle,
/// AtomicMarket trades, and so on. `Block` is special: its `newBlock` and
/// `irreversibleBlock` events watch chain progress via the chain-info API
/// instead of the action history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventCategory {
    Account,
    Nft,
    Market,
    Collection,
    Staking,
    Game,
    PackBlend,
    Block,
}

impl EventCategory {
    /// Returns the category name as used in trigger configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Account => "account",
            EventCategory::Nft => "nft",
            EventCategory::Market => "market",
            EventCategory::Collection => "collection",
            EventCategory::Staking => "staking",
            EventCategory::Game => "game",
            EventCategory::PackBlend => "packBlend",
            EventCategory::Block => "block",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing a string that names no known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEventCategoryError;

impl fmt::Display for ParseEventCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized event category")
    }
}

impl std::error::Error for ParseEventCategoryError {}

impl FromStr for EventCategory {
    type Err = ParseEventCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "account" => Ok(EventCategory::Account),
            "nft" => Ok(EventCategory::Nft),
            "market" => Ok(EventCategory::Market),
            "collection" => Ok(EventCategory::Collection),
            "staking" => Ok(EventCategory::Staking),
            "game" => Ok(EventCategory::Game),
            "packBlend" => Ok(EventCategory::PackBlend),
            "block" => Ok(EventCategory::Block),
            _ => Err(ParseEventCategoryError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_every_category() {
        let categories = [
            EventCategory::Account,
            EventCategory::Nft,
            EventCategory::Market,
            EventCategory::Collection,
            EventCategory::Staking,
            EventCategory::Game,
            EventCategory::PackBlend,
            EventCategory::Block,
        ];
        for category in categories {
            assert_eq!(category.as_str().parse::<EventCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_rejects_unknown_category() {
        assert!("nfts".parse::<EventCategory>().is_err());
        assert!("".parse::<EventCategory>().is_err());
    }

    #[test]
    fn test_serializes_as_camel_case() {
        let json = serde_json::to_string(&EventCategory::PackBlend).unwrap();
        assert_eq!(json, "\"packBlend\"");
    }
}
