use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::custody;
use crate::error::StakingError;
use crate::events::NftUnstaked;
use crate::state::{Rewarder, StakeAccount, Vault};

/// Unstakes an NFT once its locking period is over
///
/// Pending reward is paid out first (zero is allowed here), then the NFT token
/// account is handed back to the owner and the NFT leaves the vault. The accrual
/// clock stops when the owner has nothing left staked.
pub fn unstake_nft(ctx: Context<UnstakeNft>, locking_period: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();
    let nft_mint = ctx.accounts.nft_mint.key();

    ctx.accounts
        .vault
        .find(&nft_mint)
        .filter(|item| item.owner == owner)
        .ok_or(StakingError::NotStaked)?
        .ensure_unlocked(now, locking_period)?;

    require_keys_eq!(
        ctx.accounts.nft_token_account.owner,
        ctx.accounts.stake_account.key(),
        StakingError::NotStaked
    );

    let reward_rate = ctx.accounts.rewarder.reward_rate;
    let stake_account = &mut ctx.accounts.stake_account;
    let gross = stake_account.settle(reward_rate, now)?;
    stake_account.record_unstake()?;
    let payout = ctx.accounts.rewarder.payout(gross)?;

    let vault = &mut ctx.accounts.vault;
    vault.remove(&owner, &nft_mint)?;
    let total_staked = vault.total_staked;

    custody::pay_reward(
        &ctx.accounts.rewarder,
        &ctx.accounts.reward_authority,
        &ctx.accounts.reward_mint,
        &ctx.accounts.reward_token_account,
        ctx.accounts.creator_reward_account.as_ref(),
        &ctx.accounts.token_program,
        payout,
    )?;

    let rewarder = &ctx.accounts.rewarder;
    let rewarder_key = rewarder.key();
    let seeds = &[
        rewarder.collection.as_bytes(),
        crate::ID.as_ref(),
        StakeAccount::SEED_PREFIX,
        rewarder_key.as_ref(),
        owner.as_ref(),
        &[ctx.accounts.stake_account.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    custody::release_nft(
        &ctx.accounts.token_program,
        &ctx.accounts.nft_token_account,
        ctx.accounts.stake_account.to_account_info(),
        owner,
        signer_seeds,
    )?;

    emit!(NftUnstaked {
        owner,
        nft_mint,
        reward: payout.staker,
        total_staked,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UnstakeNft<'info> {
    #[account(mut)]
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

    /// The owner's reward ledger, also the custodian of the staked NFT
    #[account(
        mut,
        has_one = rewarder @ StakingError::InvalidRewarder,
        has_one = owner @ StakingError::Unauthorized,
    )]
    pub stake_account: Account<'info, StakeAccount>,

    #[account(
        mut,
        has_one = rewarder @ StakingError::InvalidRewarder,
        has_one = owner @ StakingError::Unauthorized,
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        mut,
        address = rewarder.reward_mint @ StakingError::InvalidRewardMint,
    )]
    pub reward_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        constraint = reward_token_account.owner == owner.key() @ StakingError::InvalidRewardTokenAccount,
        constraint = reward_token_account.mint == rewarder.reward_mint @ StakingError::InvalidRewardTokenAccount,
    )]
    pub reward_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub creator_reward_account: Option<Account<'info, TokenAccount>>,

    pub nft_mint: Box<Account<'info, Mint>>,

    /// The owner's associated token account for the NFT, held by the stake account
    #[account(
        mut,
        address = get_associated_token_address(&owner.key(), &nft_mint.key()) @ StakingError::InvalidNftTokenAccount,
        constraint = nft_token_account.mint == nft_mint.key() @ StakingError::InvalidNftTokenAccount,
    )]
    pub nft_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}
