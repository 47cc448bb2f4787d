use serde::Deserialize;

/// Response of the Chain-Info Service `get_info` call, limited to the
/// fields the block trigger reads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChainInfo {
    pub head_block_num: u64,
    #[serde(default)]
    pub head_block_id: String,
    #[serde(default)]
    pub head_block_time: String,
    #[serde(default)]
    pub head_block_producer: String,
    pub last_irreversible_block_num: u64,
    #[serde(default)]
    pub last_irreversible_block_id: String,
    #[serde(default)]
    pub chain_id: String,
}
