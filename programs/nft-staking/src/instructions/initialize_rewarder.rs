use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::constants::DEFAULT_CREATOR_SHARE_BPS;
use crate::custody;
use crate::error::StakingError;
use crate::events::RewarderInitialized;
use crate::state::{CreatorInfo, RewardSplit, Rewarder};

/// Creates the rewarder of a collection and binds the reward authority PDA as
/// mint authority of the reward mint.
///
/// There is one rewarder per collection name. The reward mint must be controlled
/// either by the reward authority already or by the signing administrator, in
/// which case mint authority is transferred here. A collection name longer than
/// one seed fails while the rewarder address is derived, before this runs.
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
    ctx.accounts.rewarder.ensure_uninitialized()?;
    require!(reward_rate > 0, StakingError::InvalidRewardRate);
    Rewarder::validate_creators(&creators, &primary_creator)?;
    require!(
        rewarder_bump == ctx.bumps.rewarder && reward_authority_bump == ctx.bumps.reward_authority,
        StakingError::BumpMismatch
    );

    let reward_authority = ctx.accounts.reward_authority.key();
    custody::bind_reward_authority(
        &ctx.accounts.token_program,
        &ctx.accounts.reward_mint,
        &ctx.accounts.authority,
        reward_authority,
    )?;

    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();
    let reward_mint = ctx.accounts.reward_mint.key();

    ctx.accounts.rewarder.set_inner(Rewarder {
        authority,
        reward_mint,
        reward_authority,
        reward_authority_bump,
        bump: rewarder_bump,
        reward_rate,
        collection: collection.clone(),
        creators,
        primary_creator,
        creator_share_enabled,
        creator_share_bps: DEFAULT_CREATOR_SHARE_BPS,
        reward_split: RewardSplit::StakerDeduction,
        enforce_metadata: false,
        total_whitelisted: 0,
        whitelist: Vec::new(),
    });

    emit!(RewarderInitialized {
        rewarder: ctx.accounts.rewarder.key(),
        authority,
        reward_mint,
        reward_rate,
        collection,
        creator_share_enabled,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(rewarder_bump: u8, reward_authority_bump: u8, reward_rate: u64, collection: String)]
pub struct InitializeRewarder<'info> {
    /// Administrator of the new rewarder
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The collection's rewarder
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Rewarder::INIT_SPACE,
        seeds = [collection.as_bytes(), crate::ID.as_ref(), Rewarder::SEED_PREFIX],
        bump,
    )]
    pub rewarder: Account<'info, Rewarder>,

    /// PDA used for minting rewards
    /// CHECK: Only used as a signer, validated by seeds
    #[account(
        seeds = [collection.as_bytes(), crate::ID.as_ref(), Rewarder::SEED_PREFIX, rewarder.key().as_ref()],
        bump,
    )]
    pub reward_authority: UncheckedAccount<'info>,

    /// The SPL mint of the reward token
    #[account(mut)]
    pub reward_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
