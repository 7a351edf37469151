use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::events::VaultInitialized;
use crate::state::{Rewarder, Vault};

/// Initializes the vault recording the NFTs an owner has staked
///
/// Each owner can only have one vault per collection, derived from their wallet address.
pub fn initialize_vault(ctx: Context<InitializeVault>, vault_bump: u8) -> Result<()> {
    ctx.accounts.vault.ensure_uninitialized()?;
    require!(vault_bump == ctx.bumps.vault, StakingError::BumpMismatch);

    let owner = ctx.accounts.owner.key();
    let rewarder = &ctx.accounts.rewarder;
    let vault = &mut ctx.accounts.vault;
    vault.owner = owner;
    vault.rewarder = rewarder.key();
    vault.reward_mint = rewarder.reward_mint;
    vault.total_staked = 0;
    vault.items = Vec::new();
    vault.bump = vault_bump;

    emit!(VaultInitialized {
        owner,
        vault: vault.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    /// The owner initializing their vault
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The rewarder of the collection
    pub rewarder: Account<'info, Rewarder>,

    /// The owner's vault account
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Vault::INIT_SPACE,
        seeds = [rewarder.collection.as_bytes(), crate::ID.as_ref(), Vault::SEED_PREFIX, owner.key().as_ref()],
        bump,
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}
