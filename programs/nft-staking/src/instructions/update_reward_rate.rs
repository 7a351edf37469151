use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::events::WhitelistUpdated;
use crate::state::Rewarder;

/// Sets a new reward rate and whitelists NFT mints
///
/// The new rate only applies from now on: reward already checkpointed on a stake
/// account is never rescaled. Mints that are already whitelisted are skipped.
pub fn update_reward_rate(
    ctx: Context<UpdateRewardRate>,
    new_rate: u64,
    mints_to_whitelist: Vec<Pubkey>,
) -> Result<()> {
    let rewarder = &mut ctx.accounts.rewarder;
    rewarder.set_reward_rate(new_rate)?;

    let added = rewarder.add_to_whitelist(&mints_to_whitelist)?;
    let skipped = mints_to_whitelist.len() - added as usize;
    if skipped > 0 {
        msg!("Skipped {} mints already whitelisted", skipped);
    }

    emit!(WhitelistUpdated {
        rewarder: rewarder.key(),
        reward_rate: new_rate,
        added,
        total_whitelisted: rewarder.total_whitelisted,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateRewardRate<'info> {
    /// The rewarder's administrator
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ StakingError::Unauthorized,
    )]
    pub rewarder: Account<'info, Rewarder>,
}
