//! Token program CPIs: NFT custody and reward minting.

use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::instruction::AuthorityType;
use anchor_spl::token::{self, Mint, MintTo, SetAuthority, Token, TokenAccount};

use crate::error::StakingError;
use crate::reward::Payout;
use crate::state::Rewarder;

/// Hands ownership of the owner's NFT token account to `custodian`.
pub fn lock_nft<'info>(
    token_program: &Program<'info, Token>,
    nft_token_account: &Account<'info, TokenAccount>,
    owner: &Signer<'info>,
    custodian: Pubkey,
) -> Result<()> {
    let cpi_accounts = SetAuthority {
        current_authority: owner.to_account_info(),
        account_or_mint: nft_token_account.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(token_program.to_account_info(), cpi_accounts);
    token::set_authority(cpi_ctx, AuthorityType::AccountOwner, Some(custodian))
}

/// Gives the NFT token account back to `owner`, signed by the custodian PDA.
pub fn release_nft<'info>(
    token_program: &Program<'info, Token>,
    nft_token_account: &Account<'info, TokenAccount>,
    custodian: AccountInfo<'info>,
    owner: Pubkey,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = SetAuthority {
        current_authority: custodian,
        account_or_mint: nft_token_account.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::set_authority(cpi_ctx, AuthorityType::AccountOwner, Some(owner))
}

/// Makes `reward_authority` the mint authority of `reward_mint`.
///
/// A mint already controlled by the reward authority is left alone; a mint controlled
/// by the rewarder's administrator is handed over.
pub fn bind_reward_authority<'info>(
    token_program: &Program<'info, Token>,
    reward_mint: &Account<'info, Mint>,
    authority: &Signer<'info>,
    reward_authority: Pubkey,
) -> Result<()> {
    if reward_mint.mint_authority.contains(&reward_authority) {
        return Ok(());
    }

    require!(
        reward_mint.mint_authority.contains(&authority.key()),
        StakingError::RewarderNotMintAuthority
    );

    let cpi_accounts = SetAuthority {
        current_authority: authority.to_account_info(),
        account_or_mint: reward_mint.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(token_program.to_account_info(), cpi_accounts);
    token::set_authority(cpi_ctx, AuthorityType::MintTokens, Some(reward_authority))
}

/// Mints a payout to the staker and, if there is a creator portion, to the primary creator.
pub fn pay_reward<'info>(
    rewarder: &Account<'info, Rewarder>,
    reward_authority: &UncheckedAccount<'info>,
    reward_mint: &Account<'info, Mint>,
    staker_account: &Account<'info, TokenAccount>,
    creator_account: Option<&Account<'info, TokenAccount>>,
    token_program: &Program<'info, Token>,
    payout: Payout,
) -> Result<()> {
    let rewarder_key = rewarder.key();
    let seeds = &[
        rewarder.collection.as_bytes(),
        crate::ID.as_ref(),
        Rewarder::SEED_PREFIX,
        rewarder_key.as_ref(),
        &[rewarder.reward_authority_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    if payout.staker > 0 {
        mint_reward(
            token_program,
            reward_mint,
            staker_account,
            reward_authority,
            signer_seeds,
            payout.staker,
        )?;
    }

    if payout.creator > 0 {
        let creator_account = creator_account.ok_or(StakingError::MissingCreatorRewardAccount)?;
        require_keys_eq!(
            creator_account.owner,
            rewarder.primary_creator,
            StakingError::InvalidCreatorRewardAccount
        );
        require_keys_eq!(
            creator_account.mint,
            rewarder.reward_mint,
            StakingError::InvalidCreatorRewardAccount
        );

        mint_reward(
            token_program,
            reward_mint,
            creator_account,
            reward_authority,
            signer_seeds,
            payout.creator,
        )?;
    }

    Ok(())
}

fn mint_reward<'info>(
    token_program: &Program<'info, Token>,
    reward_mint: &Account<'info, Mint>,
    to: &Account<'info, TokenAccount>,
    reward_authority: &UncheckedAccount<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    let cpi_accounts = MintTo {
        mint: reward_mint.to_account_info(),
        to: to.to_account_info(),
        authority: reward_authority.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::mint_to(cpi_ctx, amount)
}
