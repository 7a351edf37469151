use anchor_lang::prelude::*;

pub mod constants;
pub mod custody;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod reward;
pub mod state;

use instructions::*;
use state::{CreatorInfo, RewardSplit};

declare_id!("6DzA4HsAeoybaHhCWBejBzhzQVkqop4n4Q752m6kJABH");

/// NFT Staking Program
///
/// Owners stake whitelisted NFTs of a collection and earn a reward token over time:
/// - Rewarder: per-collection configuration, whitelist and reward mint authority
/// - Vault: per-owner list of the NFTs held in custody
/// - Stake account: per-owner reward ledger (deposit time, unclaimed reward, lock)
///
/// Rewards accrue at `reward_rate` base units per NFT per day and are minted by
/// the rewarder's reward authority PDA. Staked NFTs stay in the owner's token
/// account, whose ownership is moved to the stake account until unstaked.
#[program]
pub mod nft_staking {
    use super::*;

    /// Create the rewarder of a collection
    ///
    /// Creator shares must add up to 100. The reward mint authority is bound to
    /// the rewarder's reward authority PDA.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_rewarder(
        ctx: Context<InitializeRewarder>,
        rewarder_bump: u8,
        reward_authority_bump: u8,
        reward_rate: u64,
        collection: String,
        creators: Vec<CreatorInfo>,
        primary_creator: Pubkey,
        creator_share_enabled: bool,
    ) -> Result<()> {
        instructions::initialize_rewarder::initialize_rewarder(
            ctx,
            rewarder_bump,
            reward_authority_bump,
            reward_rate,
            collection,
            creators,
            primary_creator,
            creator_share_enabled,
        )
    }

    /// Set the reward rate and whitelist NFT mints
    ///
    /// Only the rewarder's authority can call this.
    pub fn update_reward_rate(
        ctx: Context<UpdateRewardRate>,
        new_rate: u64,
        mints_to_whitelist: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::update_reward_rate::update_reward_rate(ctx, new_rate, mints_to_whitelist)
    }

    /// Configure the creator share of rewards and metadata enforcement
    pub fn update_rewarder_settings(
        ctx: Context<UpdateRewarderSettings>,
        creator_share_enabled: bool,
        creator_share_bps: u16,
        reward_split: RewardSplit,
        enforce_metadata: bool,
    ) -> Result<()> {
        instructions::update_rewarder_settings::update_rewarder_settings(
            ctx,
            creator_share_enabled,
            creator_share_bps,
            reward_split,
            enforce_metadata,
        )
    }

    /// Create the vault of an owner
    pub fn initialize_vault(ctx: Context<InitializeVault>, vault_bump: u8) -> Result<()> {
        instructions::initialize_vault::initialize_vault(ctx, vault_bump)
    }

    /// Create the stake account of an owner for a rewarder
    pub fn initialize_stake_account(
        ctx: Context<InitializeStakeAccount>,
        stake_account_bump: u8,
    ) -> Result<()> {
        instructions::initialize_stake_account::initialize_stake_account(ctx, stake_account_bump)
    }

    /// Stake a whitelisted NFT for at least `locking_period` seconds
    pub fn stake_nft(ctx: Context<StakeNft>, locking_period: i64) -> Result<()> {
        instructions::stake_nft::stake_nft(ctx, locking_period)
    }

    /// Mint the accrued reward to the owner
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim(ctx)
    }

    /// Move the pending reward into the stake account without minting it
    pub fn sync_rewards(ctx: Context<SyncRewards>) -> Result<()> {
        instructions::sync_rewards::sync_rewards(ctx)
    }

    /// Pay out pending reward and return the NFT to its owner
    ///
    /// `locking_period` must be the period the NFT was staked with.
    pub fn unstake_nft(ctx: Context<UnstakeNft>, locking_period: i64) -> Result<()> {
        instructions::unstake_nft::unstake_nft(ctx, locking_period)
    }
}
