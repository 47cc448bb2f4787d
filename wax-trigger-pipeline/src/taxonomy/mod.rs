//! Static table mapping a (category, event) pair to the contract/action
//! filter descriptor that defines it.
//!
//! Adding an event is a data change here, not a new code branch: the query
//! builder and poller only ever interpret `EventDefinition` fields.

use std::collections::HashMap;

use crate::errors::TaxonomyError;
use wax_trigger_shared::types::{ContractSource, EventCategory, EventDefinition};

/// Every event the trigger understands.
///
/// Multi-entry `action_names` cover contract upgrades that kept the old
/// action alongside a `log*` replacement; the History Service matches any
/// of them. `newBlock` and `irreversibleBlock` carry no filters at all:
/// the poller answers them from chain info without building a query.
const DEFINITIONS: &[EventDefinition] = &[
    // account
    EventDefinition {
        category: EventCategory::Account,
        key: "waxpReceived",
        contract: ContractSource::Fixed("eosio.token"),
        action_names: &["transfer"],
        account_field: Some("data.to"),
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::Account,
        key: "waxpSent",
        contract: ContractSource::Fixed("eosio.token"),
        action_names: &["transfer"],
        account_field: Some("data.from"),
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::Account,
        key: "tokenReceived",
        contract: ContractSource::TokenContract,
        action_names: &["transfer"],
        account_field: Some("data.to"),
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::Account,
        key: "tokenSent",
        contract: ContractSource::TokenContract,
        action_names: &["transfer"],
        account_field: Some("data.from"),
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::Account,
        key: "resourceChanged",
        contract: ContractSource::Unfiltered,
        action_names: &[
            "delegatebw",
            "undelegatebw",
            "buyrambytes",
            "buyram",
            "sellram",
        ],
        account_field: Some("account"),
        collection_scoped: false,
    },
    // nft
    EventDefinition {
        category: EventCategory::Nft,
        key: "assetReceived",
        contract: ContractSource::Fixed("atomicassets"),
        action_names: &["transfer", "logtransfer"],
        account_field: Some("data.to"),
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::Nft,
        key: "assetSent",
        contract: ContractSource::Fixed("atomicassets"),
        action_names: &["transfer", "logtransfer"],
        account_field: Some("data.from"),
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::Nft,
        key: "assetBurned",
        contract: ContractSource::Fixed("atomicassets"),
        action_names: &["burnasset", "logburnasset"],
        account_field: Some("data.asset_owner"),
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::Nft,
        key: "assetBacked",
        contract: ContractSource::Fixed("atomicassets"),
        action_names: &["logbackasset"],
        account_field: None,
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::Nft,
        key: "assetMinted",
        contract: ContractSource::Fixed("atomicassets"),
        action_names: &["logmint"],
        account_field: Some("data.new_asset_owner"),
        collection_scoped: false,
    },
    // market
    EventDefinition {
        category: EventCategory::Market,
        key: "saleCreated",
        contract: ContractSource::Fixed("atomicmarket"),
        action_names: &["lognewsale"],
        account_field: None,
        collection_scoped: true,
    },
    EventDefinition {
        category: EventCategory::Market,
        key: "saleCancelled",
        contract: ContractSource::Fixed("atomicmarket"),
        action_names: &["logcancelsale"],
        account_field: None,
        collection_scoped: true,
    },
    EventDefinition {
        category: EventCategory::Market,
        key: "saleCompleted",
        contract: ContractSource::Fixed("atomicmarket"),
        action_names: &["purchasesale", "logpurchsale"],
        account_field: None,
        collection_scoped: true,
    },
    EventDefinition {
        category: EventCategory::Market,
        key: "auctionCreated",
        contract: ContractSource::Fixed("atomicmarket"),
        action_names: &["lognewauct"],
        account_field: None,
        collection_scoped: true,
    },
    EventDefinition {
        category: EventCategory::Market,
        key: "auctionBid",
        contract: ContractSource::Fixed("atomicmarket"),
        action_names: &["auctionbid", "logauctbid"],
        account_field: None,
        collection_scoped: true,
    },
    EventDefinition {
        category: EventCategory::Market,
        key: "auctionEnded",
        contract: ContractSource::Fixed("atomicmarket"),
        action_names: &["auctclaimbuy", "auctclaimsel"],
        account_field: None,
        collection_scoped: true,
    },
    EventDefinition {
        category: EventCategory::Market,
        key: "buyofferReceived",
        contract: ContractSource::Fixed("atomicmarket"),
        action_names: &["lognewbuyo"],
        account_field: None,
        collection_scoped: true,
    },
    EventDefinition {
        category: EventCategory::Market,
        key: "buyofferAccepted",
        contract: ContractSource::Fixed("atomicmarket"),
        action_names: &["acceptbuyo"],
        account_field: None,
        collection_scoped: true,
    },
    // collection
    EventDefinition {
        category: EventCategory::Collection,
        key: "collectionAssetMinted",
        contract: ContractSource::Fixed("atomicassets"),
        action_names: &["logmint"],
        account_field: None,
        collection_scoped: true,
    },
    EventDefinition {
        category: EventCategory::Collection,
        key: "templateCreated",
        contract: ContractSource::Fixed("atomicassets"),
        action_names: &["createtempl", "lognewtempl"],
        account_field: None,
        collection_scoped: true,
    },
    EventDefinition {
        category: EventCategory::Collection,
        key: "schemaCreated",
        contract: ContractSource::Fixed("atomicassets"),
        action_names: &["createschema"],
        account_field: None,
        collection_scoped: true,
    },
    EventDefinition {
        category: EventCategory::Collection,
        key: "schemaExtended",
        contract: ContractSource::Fixed("atomicassets"),
        action_names: &["extendschema"],
        account_field: None,
        collection_scoped: true,
    },
    EventDefinition {
        category: EventCategory::Collection,
        key: "collectionUpdated",
        contract: ContractSource::Fixed("atomicassets"),
        action_names: &["setcoldata", "addcolauth", "remcolauth"],
        account_field: None,
        collection_scoped: true,
    },
    // staking
    EventDefinition {
        category: EventCategory::Staking,
        key: "nftStaked",
        contract: ContractSource::StakingContract,
        action_names: &["stake", "logstake"],
        account_field: Some("account"),
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::Staking,
        key: "nftUnstaked",
        contract: ContractSource::StakingContract,
        action_names: &["unstake", "logunstake"],
        account_field: Some("account"),
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::Staking,
        key: "rewardsAvailable",
        contract: ContractSource::StakingContract,
        action_names: &["logreward", "claimreward"],
        account_field: Some("data.owner"),
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::Staking,
        key: "poolUpdated",
        contract: ContractSource::StakingContract,
        action_names: &["setpool", "updatepool"],
        account_field: None,
        collection_scoped: false,
    },
    // game
    EventDefinition {
        category: EventCategory::Game,
        key: "gameAction",
        contract: ContractSource::GameContract,
        action_names: &[],
        account_field: Some("account"),
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::Game,
        key: "rewardEarned",
        contract: ContractSource::GameContract,
        action_names: &["claim", "reward", "claimreward"],
        account_field: Some("account"),
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::Game,
        key: "achievementUnlocked",
        contract: ContractSource::GameContract,
        action_names: &["achievement", "unlock"],
        account_field: Some("account"),
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::Game,
        key: "leaderboardChanged",
        contract: ContractSource::GameContract,
        action_names: &[],
        account_field: Some("account"),
        collection_scoped: false,
    },
    // packBlend
    EventDefinition {
        category: EventCategory::PackBlend,
        key: "packOpened",
        contract: ContractSource::Fixed("atomicpacksx"),
        action_names: &["unboxassets", "lognewunbox"],
        account_field: Some("account"),
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::PackBlend,
        key: "dropClaimed",
        contract: ContractSource::Fixed("atomicdropsx"),
        action_names: &["claimdrop", "logclaim"],
        account_field: Some("account"),
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::PackBlend,
        key: "blendCompleted",
        contract: ContractSource::Fixed("blenderizerx"),
        action_names: &["logblend"],
        account_field: Some("account"),
        collection_scoped: false,
    },
    // block
    EventDefinition {
        category: EventCategory::Block,
        key: "newBlock",
        contract: ContractSource::Unfiltered,
        action_names: &[],
        account_field: None,
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::Block,
        key: "irreversibleBlock",
        contract: ContractSource::Unfiltered,
        action_names: &[],
        account_field: None,
        collection_scoped: false,
    },
    EventDefinition {
        category: EventCategory::Block,
        key: "actionExecuted",
        contract: ContractSource::ActionContract,
        action_names: &[],
        account_field: None,
        collection_scoped: false,
    },
];

/// Lookup table over the static event definitions.
pub struct EventTaxonomy {
    definitions: HashMap<(EventCategory, String), &'static EventDefinition>,
}

impl EventTaxonomy {
    /// Builds the lookup table from the static definition set.
    pub fn new() -> Self {
        let mut definitions = HashMap::with_capacity(DEFINITIONS.len());
        for definition in DEFINITIONS {
            definitions.insert((definition.category, definition.key.to_string()), definition);
        }
        Self { definitions }
    }

    /// Resolves the definition for a (category, event) pair.
    ///
    /// # Returns
    ///
    /// The matching definition, or `TaxonomyError::UnknownEvent` when the
    /// pair is not in the table.
    pub fn definition(
        &self,
        category: EventCategory,
        event: &str,
    ) -> Result<&'static EventDefinition, TaxonomyError> {
        self.definitions
            .get(&(category, event.to_string()))
            .copied()
            .ok_or_else(|| TaxonomyError::UnknownEvent {
                category,
                event: event.to_string(),
            })
    }
}

impl Default for EventTaxonomy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_asset_received_with_alternate_action_names() {
        let taxonomy = EventTaxonomy::new();
        let definition = taxonomy
            .definition(EventCategory::Nft, "assetReceived")
            .unwrap();

        assert_eq!(definition.contract, ContractSource::Fixed("atomicassets"));
        assert_eq!(definition.action_names, &["transfer", "logtransfer"]);
        assert_eq!(definition.account_field, Some("data.to"));
    }

    #[test]
    fn test_resource_changed_binds_bare_account_without_contract() {
        let taxonomy = EventTaxonomy::new();
        let definition = taxonomy
            .definition(EventCategory::Account, "resourceChanged")
            .unwrap();

        assert_eq!(definition.contract, ContractSource::Unfiltered);
        assert_eq!(definition.account_field, Some("account"));
        assert_eq!(definition.action_names.len(), 5);
    }

    #[test]
    fn test_market_events_are_collection_scoped_only() {
        let taxonomy = EventTaxonomy::new();
        let definition = taxonomy
            .definition(EventCategory::Market, "saleCompleted")
            .unwrap();

        assert!(definition.collection_scoped);
        assert_eq!(definition.account_field, None);
        assert_eq!(definition.action_names, &["purchasesale", "logpurchsale"]);
    }

    #[test]
    fn test_unknown_event_is_an_error() {
        let taxonomy = EventTaxonomy::new();
        let result = taxonomy.definition(EventCategory::Nft, "assetTeleported");
        assert!(matches!(
            result,
            Err(TaxonomyError::UnknownEvent { .. })
        ));
    }

    #[test]
    fn test_event_keys_are_unique_within_their_category() {
        let taxonomy = EventTaxonomy::new();
        assert_eq!(taxonomy.definitions.len(), DEFINITIONS.len());
    }

    #[test]
    fn test_same_key_resolves_per_category() {
        // logmint appears under both nft and collection with different keys;
        // lookups must stay scoped to the requested category.
        let taxonomy = EventTaxonomy::new();
        assert!(taxonomy.definition(EventCategory::Nft, "assetMinted").is_ok());
        assert!(
            taxonomy
                .definition(EventCategory::Collection, "assetMinted")
                .is_err()
        );
    }
}
