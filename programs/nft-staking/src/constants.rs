use anchor_lang::prelude::*;

/// Seconds in one day; reward rates are expressed per day
#[constant]
pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Denominator for creator share basis points
#[constant]
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Creator share applied when a rewarder is created (25%)
#[constant]
pub const DEFAULT_CREATOR_SHARE_BPS: u16 = 2_500;

/// Creator shares must add up to exactly this value
#[constant]
pub const TOTAL_CREATOR_SHARES: u16 = 100;

/// Collection names are used as a PDA seed, so they cannot exceed one seed
pub const MAX_COLLECTION_LEN: usize = 32;

/// Same bound Metaplex puts on a metadata creator list
pub const MAX_CREATORS: usize = 5;

/// Whitelisted NFT mints per rewarder
pub const MAX_WHITELIST: usize = 250;

/// NFTs one owner can have staked at the same time
pub const MAX_STAKED_ITEMS: usize = 80;
