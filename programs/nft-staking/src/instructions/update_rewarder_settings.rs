use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::error::StakingError;
use crate::events::RewarderSettingsUpdated;
use crate::state::{RewardSplit, Rewarder};

/// Updates how rewards are shared with the primary creator and whether NFT
/// metadata is verified on stake. Applies to future payouts only.
pub fn update_rewarder_settings(
    ctx: Context<UpdateRewarderSettings>,
    creator_share_enabled: bool,
    creator_share_bps: u16,
    reward_split: RewardSplit,
    enforce_metadata: bool,
) -> Result<()> {
    require!(
        creator_share_bps as u64 <= BPS_DENOMINATOR,
        StakingError::InvalidCreatorShare
    );

    let rewarder = &mut ctx.accounts.rewarder;
    rewarder.creator_share_enabled = creator_share_enabled;
    rewarder.creator_share_bps = creator_share_bps;
    rewarder.reward_split = reward_split;
    rewarder.enforce_metadata = enforce_metadata;

    emit!(RewarderSettingsUpdated {
        rewarder: rewarder.key(),
        creator_share_enabled,
        creator_share_bps,
        reward_split,
        enforce_metadata,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateRewarderSettings<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ StakingError::Unauthorized,
    )]
    pub rewarder: Account<'info, Rewarder>,
}
