use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::events::StakeAccountInitialized;
use crate::state::{Rewarder, StakeAccount};

/// Initializes the reward ledger of an owner for a rewarder
pub fn initialize_stake_account(
    ctx: Context<InitializeStakeAccount>,
    stake_account_bump: u8,
) -> Result<()> {
    ctx.accounts.stake_account.ensure_uninitialized()?;
    require!(
        stake_account_bump == ctx.bumps.stake_account,
        StakingError::BumpMismatch
    );

    let owner = ctx.accounts.owner.key();
    let rewarder = ctx.accounts.rewarder.key();
    ctx.accounts.stake_account.set_inner(StakeAccount {
        owner,
        rewarder,
        deposit_timestamp: None,
        accrued_unclaimed: 0,
        locking_deadline: 0,
        staked_count: 0,
        total_claimed: 0,
        bump: stake_account_bump,
    });

    emit!(StakeAccountInitialized {
        owner,
        rewarder,
        stake_account: ctx.accounts.stake_account.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeStakeAccount<'info> {
    /// The owner of the stake account
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The rewarder associated with this stake account
    pub rewarder: Account<'info, Rewarder>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + StakeAccount::INIT_SPACE,
        seeds = [
            rewarder.collection.as_bytes(),
            crate::ID.as_ref(),
            StakeAccount::SEED_PREFIX,
            rewarder.key().as_ref(),
            owner.key().as_ref()
        ],
        bump,
    )]
    pub stake_account: Account<'info, StakeAccount>,

    pub system_program: Program<'info, System>,
}
