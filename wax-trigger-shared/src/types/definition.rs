use crate::types::EventCategory;

/// Where the `act.account` contract filter of a definition comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractSource {
    /// Hard-wired contract account.
    Fixed(&'static str),
    /// Resolved from `FilterParams::token_contract`; required.
    TokenContract,
    /// Resolved from `FilterParams::staking_contract`; omitted when empty.
    StakingContract,
    /// Resolved from `FilterParams::game_contract`; omitted when empty.
    GameContract,
    /// Resolved from `FilterParams::action_contract`; required.
    ActionContract,
    /// No contract filter.
    Unfiltered,
}

/// Static descriptor for one (category, event) pair.
///
/// Alternate action names carry OR semantics: the History Service matches
/// any of them. Contract upgrades that renamed an action (`transfer` vs
/// `logtransfer`) mean both spellings must match, so a definition is never
/// a single action name.
#[derive(Debug, Clone, Copy)]
pub struct EventDefinition {
    pub category: EventCategory,
    pub key: &'static str,
    pub contract: ContractSource,
    pub action_names: &'static [&'static str],
    /// Query field the configured account name binds to (`data.to`, bare
    /// `account`, ...). Role-to-field mapping varies per action schema.
    /// When set, an empty account name fails query construction: the
    /// engine never sends an unscoped account-wide query.
    pub account_field: Option<&'static str>,
    /// Whether `data.collection_name` narrows this event when configured.
    pub collection_scoped: bool,
}
