use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::metadata::MetadataAccount;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::custody;
use crate::error::StakingError;
use crate::events::NftStaked;
use crate::pda;
use crate::state::{Rewarder, StakeAccount, StakedItem, Vault};

/// Stakes a whitelisted NFT
///
/// Reward accrued so far is checkpointed on the stake account (not paid), the
/// accrual clock restarts and ownership of the NFT token account moves to the
/// stake account until the NFT is unstaked.
pub fn stake_nft(ctx: Context<StakeNft>, locking_period: i64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let nft_mint = ctx.accounts.nft_mint.key();
    let rewarder = &ctx.accounts.rewarder;

    rewarder.check_stake(
        &ctx.accounts.vault,
        &nft_mint,
        &ctx.accounts.nft_token_account.owner,
        ctx.accounts.nft_token_account.amount,
    )?;

    if rewarder.enforce_metadata {
        let metadata = ctx
            .accounts
            .metadata
            .as_ref()
            .ok_or(StakingError::MissingMetadataAccount)?;
        let (expected, _) = pda::metadata_address(&nft_mint)?;
        require_keys_eq!(
            metadata.key(),
            expected,
            StakingError::InvalidMetadataAccountAddress
        );
        rewarder.verify_metadata(
            &metadata.update_authority,
            &metadata.name,
            metadata.creators.as_deref(),
        )?;
    }

    let now = Clock::get()?.unix_timestamp;
    let reward_rate = rewarder.reward_rate;

    let locked_until = ctx
        .accounts
        .stake_account
        .record_stake(reward_rate, now, locking_period)?;

    let vault = &mut ctx.accounts.vault;
    vault.insert(StakedItem {
        owner,
        nft_mint,
        locking_period,
        staked_at: now,
        locked_until,
    })?;
    let total_staked = vault.total_staked;

    custody::lock_nft(
        &ctx.accounts.token_program,
        &ctx.accounts.nft_token_account,
        &ctx.accounts.owner,
        ctx.accounts.stake_account.key(),
    )?;

    emit!(NftStaked {
        owner,
        nft_mint,
        locked_until,
        total_staked,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct StakeNft<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The rewarder account for the collection
    pub rewarder: Box<Account<'info, Rewarder>>,

    /// The owner's reward ledger
    #[account(
        mut,
        has_one = rewarder @ StakingError::InvalidRewarder,
        has_one = owner @ StakingError::Unauthorized,
    )]
    pub stake_account: Account<'info, StakeAccount>,

    /// The owner's vault
    #[account(
        mut,
        has_one = rewarder @ StakingError::InvalidRewarder,
        has_one = owner @ StakingError::Unauthorized,
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        constraint = nft_mint.supply == 1 && nft_mint.decimals == 0 @ StakingError::InvalidNftMint,
    )]
    pub nft_mint: Account<'info, Mint>,

    /// The owner's associated token account holding the NFT
    #[account(
        mut,
        address = get_associated_token_address(&owner.key(), &nft_mint.key()) @ StakingError::InvalidNftTokenAccount,
        constraint = nft_token_account.mint == nft_mint.key() @ StakingError::InvalidNftTokenAccount,
    )]
    pub nft_token_account: Account<'info, TokenAccount>,

    /// Metaplex metadata of the NFT, required when the rewarder enforces metadata
    pub metadata: Option<Box<Account<'info, MetadataAccount>>>,

    pub token_program: Program<'info, Token>,
}
