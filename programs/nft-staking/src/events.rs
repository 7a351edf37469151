use anchor_lang::prelude::*;

use crate::state::RewardSplit;

#[event]
pub struct RewarderInitialized {
    pub rewarder: Pubkey,
    pub authority: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_rate: u64,
    pub collection: String,
    pub creator_share_enabled: bool,
    pub timestamp: i64,
}

#[event]
pub struct WhitelistUpdated {
    pub rewarder: Pubkey,
    pub reward_rate: u64,
    pub added: u32,
    pub total_whitelisted: u32,
    pub timestamp: i64,
}

#[event]
pub struct RewarderSettingsUpdated {
    pub rewarder: Pubkey,
    pub creator_share_enabled: bool,
    pub creator_share_bps: u16,
    pub reward_split: RewardSplit,
    pub enforce_metadata: bool,
    pub timestamp: i64,
}

#[event]
pub struct VaultInitialized {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct StakeAccountInitialized {
    pub owner: Pubkey,
    pub rewarder: Pubkey,
    pub stake_account: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct NftStaked {
    pub owner: Pubkey,
    pub nft_mint: Pubkey,
    pub locked_until: i64,
    pub total_staked: u32,
    pub timestamp: i64,
}

#[event]
pub struct RewardClaimed {
    pub owner: Pubkey,
    pub staker_amount: u64,
    pub creator_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardsSynced {
    pub owner: Pubkey,
    pub accrued_unclaimed: u64,
    pub timestamp: i64,
}

#[event]
pub struct NftUnstaked {
    pub owner: Pubkey,
    pub nft_mint: Pubkey,
    pub reward: u64,
    pub total_staked: u32,
    pub timestamp: i64,
}
