use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    #[msg("Account is already initialized")]
    AlreadyInitialized,

    #[msg("Unauthorized - signer does not own this account")]
    Unauthorized,

    #[msg("Reward rate must be greater than zero")]
    InvalidRewardRate,

    #[msg("Creator shares must add up to 100")]
    InvalidCreatorShares,

    #[msg("NFT is not whitelisted for this rewarder")]
    NotWhitelisted,

    #[msg("Whitelist is full")]
    WhitelistFull,

    #[msg("NFT is already staked")]
    AlreadyStaked,

    #[msg("NFT is not staked in this vault")]
    NotStaked,

    #[msg("NFT is still in its locking period")]
    StillLocked,

    #[msg("No reward has accrued")]
    NothingToClaim,

    #[msg("Owner does not hold the NFT")]
    InsufficientBalance,

    #[msg("No valid bump found for the derived address")]
    DerivationExhausted,

    #[msg("The provided reward mint doesn't have the reward authority as minting authority")]
    RewarderNotMintAuthority,

    #[msg("The provided rewarder does not match the account")]
    InvalidRewarder,

    #[msg("The provided mint is not the reward mint of the rewarder")]
    InvalidRewardMint,

    #[msg("The provided reward token account is not owned by the owner or is for another mint")]
    InvalidRewardTokenAccount,

    #[msg("The provided NFT mint must have a supply of 1 and no decimals")]
    InvalidNftMint,

    #[msg("The provided NFT token account is not for the NFT mint")]
    InvalidNftTokenAccount,

    #[msg("Too many creators")]
    TooManyCreators,

    #[msg("The primary creator must be one of the creators")]
    PrimaryCreatorNotListed,

    #[msg("Collection name is too long")]
    CollectionNameTooLong,

    #[msg("Provided bump does not match the canonical bump")]
    BumpMismatch,

    #[msg("Vault is full")]
    VaultFull,

    #[msg("Locking period cannot be negative")]
    InvalidLockingPeriod,

    #[msg("Locking period does not match the staked NFT")]
    LockingPeriodMismatch,

    #[msg("Clock is behind the last recorded deposit")]
    NonMonotonicClock,

    #[msg("Creator share cannot exceed 10000 basis points")]
    InvalidCreatorShare,

    #[msg("Creator reward token account is required")]
    MissingCreatorRewardAccount,

    #[msg("Creator reward token account is not owned by the primary creator or is for another mint")]
    InvalidCreatorRewardAccount,

    #[msg("There was no Metaplex Metadata account supplied")]
    MissingMetadataAccount,

    #[msg("The Metaplex Metadata account did not have the expected PDA seeds")]
    InvalidMetadataAccountAddress,

    #[msg("The Metaplex Metadata account did not have the expected update authority")]
    InvalidMetadataUpdateAuthority,

    #[msg("The Metaplex Metadata account did not have a name beginning with the collection")]
    InvalidMetadataCollectionPrefix,

    #[msg("The Metaplex Metadata account did not have the expected creators")]
    InvalidMetadataCreators,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
