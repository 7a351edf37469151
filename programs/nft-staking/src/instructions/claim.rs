use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::custody;
use crate::error::StakingError;
use crate::events::RewardClaimed;
use crate::state::{Rewarder, StakeAccount};

/// Mints the reward accrued on a stake account and restarts the accrual clock
///
/// Custody of staked NFTs is unchanged. Fails with `NothingToClaim` when no
/// reward has accrued since the last claim.
pub fn claim(ctx: Context<Claim>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let reward_rate = ctx.accounts.rewarder.reward_rate;

    let gross = ctx.accounts.stake_account.claim(reward_rate, now)?;
    let payout = ctx.accounts.rewarder.payout(gross)?;

    custody::pay_reward(
        &ctx.accounts.rewarder,
        &ctx.accounts.reward_authority,
        &ctx.accounts.reward_mint,
        &ctx.accounts.reward_token_account,
        ctx.accounts.creator_reward_account.as_ref(),
        &ctx.accounts.token_program,
        payout,
    )?;

    emit!(RewardClaimed {
        owner: ctx.accounts.owner.key(),
        staker_amount: payout.staker,
        creator_amount: payout.creator,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    /// The owner of the stake account
    pub owner: Signer<'info>,

    /// The rewarder account for the collection
    pub rewarder: Box<Account<'info, Rewarder>>,

    /// PDA that has the authority to mint reward tokens
    /// CHECK: Only used as a signer, validated by seeds
    #[account(
        seeds = [rewarder.collection.as_bytes(), crate::ID.as_ref(), Rewarder::SEED_PREFIX, rewarder.key().as_ref()],
        bump = rewarder.reward_authority_bump,
    )]
    pub reward_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        has_one = rewarder @ StakingError::InvalidRewarder,
        has_one = owner @ StakingError::Unauthorized,
    )]
    pub stake_account: Account<'info, StakeAccount>,

    #[account(
        mut,
        address = rewarder.reward_mint @ StakingError::InvalidRewardMint,
    )]
    pub reward_mint: Account<'info, Mint>,

    /// The owner's token account for the reward mint
    #[account(
        mut,
        constraint = reward_token_account.owner == owner.key() @ StakingError::InvalidRewardTokenAccount,
        constraint = reward_token_account.mint == rewarder.reward_mint @ StakingError::InvalidRewardTokenAccount,
    )]
    pub reward_token_account: Account<'info, TokenAccount>,

    /// The primary creator's token account for the reward mint, required when
    /// part of the reward goes to the creator
    #[account(mut)]
    pub creator_reward_account: Option<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}
