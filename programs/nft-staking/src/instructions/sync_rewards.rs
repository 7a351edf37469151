use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::events::RewardsSynced;
use crate::state::{Rewarder, StakeAccount};

/// Checkpoints the pending reward into the stake account without minting it
pub fn sync_rewards(ctx: Context<SyncRewards>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let reward_rate = ctx.accounts.rewarder.reward_rate;

    let accrued_unclaimed = ctx.accounts.stake_account.checkpoint(reward_rate, now)?;

    emit!(RewardsSynced {
        owner: ctx.accounts.owner.key(),
        accrued_unclaimed,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SyncRewards<'info> {
    pub owner: Signer<'info>,

    pub rewarder: Account<'info, Rewarder>,

    #[account(
        mut,
        has_one = rewarder @ StakingError::InvalidRewarder,
        has_one = owner @ StakingError::Unauthorized,
    )]
    pub stake_account: Account<'info, StakeAccount>,
}
