//! Address derivation for every program-owned account.
//!
//! All addresses are namespaced by the collection name and the program id so two
//! collections never share a rewarder, vault or stake account.

use anchor_lang::prelude::*;
use anchor_spl::metadata::mpl_token_metadata;

use crate::error::StakingError;
use crate::state::{Rewarder, StakeAccount, Vault};

fn derive(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or_else(|| error!(StakingError::DerivationExhausted))
}

/// Fails with `CollectionNameTooLong` before deriving when the name cannot be a seed.
pub fn rewarder_address(collection: &str) -> Result<(Pubkey, u8)> {
    Rewarder::validate_collection(collection)?;
    derive(
        &[
            collection.as_bytes(),
            crate::ID.as_ref(),
            Rewarder::SEED_PREFIX,
        ],
        &crate::ID,
    )
}

/// Mint authority of the reward token
pub fn reward_authority_address(collection: &str, rewarder: &Pubkey) -> Result<(Pubkey, u8)> {
    Rewarder::validate_collection(collection)?;
    derive(
        &[
            collection.as_bytes(),
            crate::ID.as_ref(),
            Rewarder::SEED_PREFIX,
            rewarder.as_ref(),
        ],
        &crate::ID,
    )
}

pub fn stake_account_address(
    collection: &str,
    rewarder: &Pubkey,
    owner: &Pubkey,
) -> Result<(Pubkey, u8)> {
    Rewarder::validate_collection(collection)?;
    derive(
        &[
            collection.as_bytes(),
            crate::ID.as_ref(),
            StakeAccount::SEED_PREFIX,
            rewarder.as_ref(),
            owner.as_ref(),
        ],
        &crate::ID,
    )
}

pub fn vault_address(collection: &str, owner: &Pubkey) -> Result<(Pubkey, u8)> {
    Rewarder::validate_collection(collection)?;
    derive(
        &[
            collection.as_bytes(),
            crate::ID.as_ref(),
            Vault::SEED_PREFIX,
            owner.as_ref(),
        ],
        &crate::ID,
    )
}

/// Metaplex metadata account of an NFT mint
pub fn metadata_address(nft_mint: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(
        &[
            b"metadata",
            mpl_token_metadata::ID.as_ref(),
            nft_mint.as_ref(),
        ],
        &mpl_token_metadata::ID,
    )
}
