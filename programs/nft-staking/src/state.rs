use anchor_lang::prelude::*;
use anchor_spl::metadata::mpl_token_metadata::types::Creator;

use crate::constants::{
    MAX_COLLECTION_LEN, MAX_CREATORS, MAX_STAKED_ITEMS, MAX_WHITELIST, TOTAL_CREATOR_SHARES,
};
use crate::error::StakingError;
use crate::reward::{self, Payout};

/// Collection-wide staking configuration and whitelist
#[account]
#[derive(InitSpace, Default)]
pub struct Rewarder {
    /// Administrator allowed to update the whitelist and settings
    pub authority: Pubkey,
    /// SPL mint the rewards are paid in
    pub reward_mint: Pubkey,
    /// PDA holding the mint authority of `reward_mint`
    pub reward_authority: Pubkey,
    pub reward_authority_bump: u8,
    /// PDA bump seed
    pub bump: u8,
    /// Reward base units per staked NFT per day
    pub reward_rate: u64,
    /// Collection name, also the first seed of every account of the collection
    #[max_len(32)]
    pub collection: String,
    /// Creators expected on the NFTs' metadata
    #[max_len(5)]
    pub creators: Vec<CreatorInfo>,
    /// Receives the creator share of rewards and must be the NFTs' update authority
    pub primary_creator: Pubkey,
    pub creator_share_enabled: bool,
    /// Creator share in basis points
    pub creator_share_bps: u16,
    pub reward_split: RewardSplit,
    /// Verify the Metaplex metadata of every NFT being staked
    pub enforce_metadata: bool,
    pub total_whitelisted: u32,
    #[max_len(250)]
    pub whitelist: Vec<Pubkey>,
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, Default, PartialEq, Eq)]
pub struct CreatorInfo {
    pub address: Pubkey,
    pub verified: bool,
    pub share: u8,
}

impl CreatorInfo {
    fn matches(&self, creator: &Creator) -> bool {
        self.address == creator.address
            && self.verified == creator.verified
            && self.share == creator.share
    }
}

/// Where the creator share of a reward comes from
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RewardSplit {
    /// The creator share is deducted from the staker's reward
    #[default]
    StakerDeduction,
    /// The staker keeps the full reward and the creator share is minted on top
    CreatorBonus,
}

impl Rewarder {
    pub const SEED_PREFIX: &'static [u8] = b"rewarder";

    /// A freshly created rewarder account has no authority yet.
    pub fn ensure_uninitialized(&self) -> Result<()> {
        require_keys_eq!(
            self.authority,
            Pubkey::default(),
            StakingError::AlreadyInitialized
        );
        Ok(())
    }

    /// The collection name is a single PDA seed.
    pub fn validate_collection(collection: &str) -> Result<()> {
        require!(
            collection.len() <= MAX_COLLECTION_LEN,
            StakingError::CollectionNameTooLong
        );
        Ok(())
    }

    pub fn validate_creators(creators: &[CreatorInfo], primary_creator: &Pubkey) -> Result<()> {
        require!(creators.len() <= MAX_CREATORS, StakingError::TooManyCreators);

        let total: u16 = creators.iter().map(|c| c.share as u16).sum();
        require!(
            total == TOTAL_CREATOR_SHARES,
            StakingError::InvalidCreatorShares
        );
        require!(
            creators.iter().any(|c| c.address == *primary_creator),
            StakingError::PrimaryCreatorNotListed
        );

        Ok(())
    }

    pub fn is_whitelisted(&self, nft_mint: &Pubkey) -> bool {
        self.whitelist.contains(nft_mint)
    }

    /// Appends the mints that are not whitelisted yet and returns how many were added.
    /// Nothing is appended when the new entries do not fit.
    pub fn add_to_whitelist(&mut self, mints: &[Pubkey]) -> Result<u32> {
        let mut fresh: Vec<Pubkey> = Vec::with_capacity(mints.len());
        for mint in mints {
            if !self.is_whitelisted(mint) && !fresh.contains(mint) {
                fresh.push(*mint);
            }
        }

        require!(
            self.whitelist.len() + fresh.len() <= MAX_WHITELIST,
            StakingError::WhitelistFull
        );

        let added = fresh.len() as u32;
        self.whitelist.extend(fresh);
        self.total_whitelisted = self
            .total_whitelisted
            .checked_add(added)
            .ok_or(StakingError::ArithmeticOverflow)?;

        Ok(added)
    }

    /// Stake preconditions, in the order they are reported: whitelist, vault, then balance.
    pub fn check_stake(
        &self,
        vault: &Vault,
        nft_mint: &Pubkey,
        holder: &Pubkey,
        amount: u64,
    ) -> Result<()> {
        require!(self.is_whitelisted(nft_mint), StakingError::NotWhitelisted);
        require!(vault.find(nft_mint).is_none(), StakingError::AlreadyStaked);
        require!(
            *holder == vault.owner && amount == 1,
            StakingError::InsufficientBalance
        );
        Ok(())
    }

    pub fn set_reward_rate(&mut self, reward_rate: u64) -> Result<()> {
        require!(reward_rate > 0, StakingError::InvalidRewardRate);
        self.reward_rate = reward_rate;
        Ok(())
    }

    pub fn payout(&self, gross: u64) -> Result<Payout> {
        reward::split(
            gross,
            self.creator_share_enabled,
            self.creator_share_bps,
            self.reward_split,
        )
    }

    /// Checks an NFT's Metaplex metadata against the collection settings.
    pub fn verify_metadata(
        &self,
        update_authority: &Pubkey,
        name: &str,
        creators: Option<&[Creator]>,
    ) -> Result<()> {
        require_keys_eq!(
            *update_authority,
            self.primary_creator,
            StakingError::InvalidMetadataUpdateAuthority
        );
        require!(
            name.starts_with(self.collection.as_str()),
            StakingError::InvalidMetadataCollectionPrefix
        );

        let creators = creators.ok_or(StakingError::InvalidMetadataCreators)?;
        require!(
            creators.len() == self.creators.len(),
            StakingError::InvalidMetadataCreators
        );
        for creator in creators {
            require!(
                self.creators.iter().any(|known| known.matches(creator)),
                StakingError::InvalidMetadataCreators
            );
        }

        Ok(())
    }
}

/// Per-owner record of the NFTs currently held in custody
#[account]
#[derive(InitSpace, Default)]
pub struct Vault {
    pub owner: Pubkey,
    pub rewarder: Pubkey,
    /// Copied from the rewarder when the vault is created
    pub reward_mint: Pubkey,
    pub total_staked: u32,
    #[max_len(80)]
    pub items: Vec<StakedItem>,
    /// PDA bump seed
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, Default, PartialEq, Eq)]
pub struct StakedItem {
    pub owner: Pubkey,
    pub nft_mint: Pubkey,
    /// Seconds the NFT has to stay staked
    pub locking_period: i64,
    pub staked_at: i64,
    pub locked_until: i64,
}

impl StakedItem {
    /// The NFT can leave custody from `locked_until` on, and only with the period it was staked with.
    pub fn ensure_unlocked(&self, now: i64, locking_period: i64) -> Result<()> {
        require!(now >= self.locked_until, StakingError::StillLocked);
        require!(
            self.locking_period == locking_period,
            StakingError::LockingPeriodMismatch
        );
        Ok(())
    }
}

impl Vault {
    pub const SEED_PREFIX: &'static [u8] = b"vault_account";

    pub fn ensure_uninitialized(&self) -> Result<()> {
        require_keys_eq!(
            self.owner,
            Pubkey::default(),
            StakingError::AlreadyInitialized
        );
        Ok(())
    }

    pub fn find(&self, nft_mint: &Pubkey) -> Option<&StakedItem> {
        self.items.iter().find(|item| item.nft_mint == *nft_mint)
    }

    pub fn insert(&mut self, item: StakedItem) -> Result<()> {
        require_keys_eq!(item.owner, self.owner, StakingError::Unauthorized);
        require!(self.find(&item.nft_mint).is_none(), StakingError::AlreadyStaked);
        require!(self.items.len() < MAX_STAKED_ITEMS, StakingError::VaultFull);

        self.total_staked = self
            .total_staked
            .checked_add(1)
            .ok_or(StakingError::ArithmeticOverflow)?;
        self.items.push(item);

        Ok(())
    }

    pub fn remove(&mut self, owner: &Pubkey, nft_mint: &Pubkey) -> Result<StakedItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.owner == *owner && item.nft_mint == *nft_mint)
            .ok_or(StakingError::NotStaked)?;

        self.total_staked = self
            .total_staked
            .checked_sub(1)
            .ok_or(StakingError::ArithmeticOverflow)?;

        Ok(self.items.remove(index))
    }
}

/// Per-owner reward ledger for one rewarder
#[account]
#[derive(InitSpace, Default)]
pub struct StakeAccount {
    pub owner: Pubkey,
    pub rewarder: Pubkey,
    /// Start of the current accrual period; unset while nothing is staked
    pub deposit_timestamp: Option<i64>,
    /// Reward checkpointed but not paid out yet
    pub accrued_unclaimed: u64,
    /// Latest unlock time across the staked NFTs, never before the deposit timestamp.
    /// Informational; unstake checks each item's own `locked_until`. Zero while nothing is staked.
    pub locking_deadline: i64,
    /// NFTs accruing rewards on this account
    pub staked_count: u32,
    /// Lifetime gross reward settled on this account
    pub total_claimed: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl StakeAccount {
    pub const SEED_PREFIX: &'static [u8] = b"stake_account";

    pub fn ensure_uninitialized(&self) -> Result<()> {
        require_keys_eq!(
            self.owner,
            Pubkey::default(),
            StakingError::AlreadyInitialized
        );
        Ok(())
    }

    /// Reward accrued since the deposit timestamp
    pub fn pending_reward(&self, reward_rate: u64, now: i64) -> Result<u64> {
        match self.deposit_timestamp {
            None => Ok(0),
            Some(deposited_at) => {
                require!(now >= deposited_at, StakingError::NonMonotonicClock);
                reward::accrued(now - deposited_at, reward_rate, self.staked_count)
            }
        }
    }

    /// Everything a claim at `now` would pay out
    pub fn claimable(&self, reward_rate: u64, now: i64) -> Result<u64> {
        Ok(self
            .accrued_unclaimed
            .checked_add(self.pending_reward(reward_rate, now)?)
            .ok_or(StakingError::ArithmeticOverflow)?)
    }

    /// Moves pending reward into `accrued_unclaimed` and restarts the accrual clock.
    pub fn checkpoint(&mut self, reward_rate: u64, now: i64) -> Result<u64> {
        let accrued_unclaimed = self.claimable(reward_rate, now)?;

        self.accrued_unclaimed = accrued_unclaimed;
        if self.deposit_timestamp.is_some() {
            self.deposit_timestamp = Some(now);
            self.locking_deadline = self.locking_deadline.max(now);
        }

        Ok(accrued_unclaimed)
    }

    /// Checkpoints, then pays out everything accrued. May return zero.
    pub fn settle(&mut self, reward_rate: u64, now: i64) -> Result<u64> {
        let amount = self.claimable(reward_rate, now)?;
        let total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;

        self.checkpoint(reward_rate, now)?;
        self.accrued_unclaimed = 0;
        self.total_claimed = total_claimed;

        Ok(amount)
    }

    /// Same as [`StakeAccount::settle`] but fails when there is nothing to pay.
    pub fn claim(&mut self, reward_rate: u64, now: i64) -> Result<u64> {
        require!(
            self.claimable(reward_rate, now)? > 0,
            StakingError::NothingToClaim
        );
        self.settle(reward_rate, now)
    }

    /// Starts accruing for one more NFT and returns its unlock time.
    pub fn record_stake(&mut self, reward_rate: u64, now: i64, locking_period: i64) -> Result<i64> {
        require!(locking_period >= 0, StakingError::InvalidLockingPeriod);
        let locked_until = now
            .checked_add(locking_period)
            .ok_or(StakingError::ArithmeticOverflow)?;
        let staked_count = self
            .staked_count
            .checked_add(1)
            .ok_or(StakingError::ArithmeticOverflow)?;

        self.checkpoint(reward_rate, now)?;
        self.staked_count = staked_count;
        self.deposit_timestamp = Some(now);
        self.locking_deadline = self.locking_deadline.max(locked_until);

        Ok(locked_until)
    }

    /// Stops accruing for one NFT. Rewards must be settled first.
    pub fn record_unstake(&mut self) -> Result<()> {
        self.staked_count = self
            .staked_count
            .checked_sub(1)
            .ok_or(StakingError::NotStaked)?;
        if self.staked_count == 0 {
            self.deposit_timestamp = None;
            self.locking_deadline = 0;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn assert_err<T: std::fmt::Debug>(result: Result<T>, expected: StakingError) {
        let expected: anchor_lang::error::Error = expected.into();
        assert_eq!(result.unwrap_err(), expected);
    }

    fn creator(n: u8, share: u8) -> CreatorInfo {
        CreatorInfo {
            address: key(n),
            verified: true,
            share,
        }
    }

    fn rewarder() -> Rewarder {
        Rewarder {
            authority: key(1),
            reward_rate: 86_400,
            collection: "Monkes".to_string(),
            creators: vec![creator(10, 60), creator(11, 40)],
            primary_creator: key(10),
            creator_share_bps: 2_500,
            ..Default::default()
        }
    }

    fn vault(owner: Pubkey) -> Vault {
        Vault {
            owner,
            ..Default::default()
        }
    }

    fn item(owner: Pubkey, nft_mint: Pubkey) -> StakedItem {
        StakedItem {
            owner,
            nft_mint,
            ..Default::default()
        }
    }

    #[test]
    fn test_creator_shares_must_total_100() {
        let primary = key(1);
        assert!(Rewarder::validate_creators(&[creator(1, 100)], &primary).is_ok());
        assert!(Rewarder::validate_creators(&[creator(1, 25), creator(2, 75)], &primary).is_ok());
        assert_err(
            Rewarder::validate_creators(&[creator(1, 50), creator(2, 49)], &primary),
            StakingError::InvalidCreatorShares,
        );
        assert_err(
            Rewarder::validate_creators(
                &[creator(1, 100), creator(2, 100), creator(3, 56)],
                &primary,
            ),
            StakingError::InvalidCreatorShares,
        );
        assert_err(
            Rewarder::validate_creators(&[], &primary),
            StakingError::InvalidCreatorShares,
        );
    }

    #[test]
    fn test_too_many_creators() {
        let creators: Vec<_> = (0..6).map(|n| creator(n, 0)).collect();
        assert_err(
            Rewarder::validate_creators(&creators, &key(0)),
            StakingError::TooManyCreators,
        );
    }

    #[test]
    fn test_primary_creator_must_be_listed() {
        let creators = [creator(1, 60), creator(2, 40)];
        assert!(Rewarder::validate_creators(&creators, &key(2)).is_ok());
        assert_err(
            Rewarder::validate_creators(&creators, &key(3)),
            StakingError::PrimaryCreatorNotListed,
        );
    }

    #[test]
    fn test_collection_name_length() {
        assert!(Rewarder::validate_collection("Monkes").is_ok());
        assert!(Rewarder::validate_collection(&"x".repeat(MAX_COLLECTION_LEN)).is_ok());
        assert_err(
            Rewarder::validate_collection(&"x".repeat(MAX_COLLECTION_LEN + 1)),
            StakingError::CollectionNameTooLong,
        );
    }

    #[test]
    fn test_repeat_initialization_is_rejected() {
        assert!(Rewarder::default().ensure_uninitialized().is_ok());
        assert!(Vault::default().ensure_uninitialized().is_ok());
        assert!(StakeAccount::default().ensure_uninitialized().is_ok());

        assert_err(rewarder().ensure_uninitialized(), StakingError::AlreadyInitialized);
        assert_err(vault(key(1)).ensure_uninitialized(), StakingError::AlreadyInitialized);
        let stake = StakeAccount {
            owner: key(1),
            ..Default::default()
        };
        assert_err(stake.ensure_uninitialized(), StakingError::AlreadyInitialized);
    }

    #[test]
    fn test_unlisted_nft_is_rejected_first() {
        let owner = key(1);
        let mut rewarder = rewarder();
        rewarder.add_to_whitelist(&[key(30)]).unwrap();
        let vault = vault(owner);

        // whatever the balance, an unlisted mint reports NotWhitelisted
        assert_err(
            rewarder.check_stake(&vault, &key(31), &owner, 0),
            StakingError::NotWhitelisted,
        );
        assert_err(
            rewarder.check_stake(&vault, &key(31), &owner, 1),
            StakingError::NotWhitelisted,
        );
        assert_err(
            rewarder.check_stake(&vault, &key(31), &key(2), 1),
            StakingError::NotWhitelisted,
        );
    }

    #[test]
    fn test_stake_preconditions_order() {
        let owner = key(1);
        let mut rewarder = rewarder();
        rewarder.add_to_whitelist(&[key(30), key(31)]).unwrap();
        let mut vault = vault(owner);
        vault.insert(item(owner, key(30))).unwrap();

        // already staked wins over a missing balance
        assert_err(
            rewarder.check_stake(&vault, &key(30), &owner, 0),
            StakingError::AlreadyStaked,
        );
        assert_err(
            rewarder.check_stake(&vault, &key(31), &owner, 0),
            StakingError::InsufficientBalance,
        );
        assert_err(
            rewarder.check_stake(&vault, &key(31), &key(2), 1),
            StakingError::InsufficientBalance,
        );
        assert!(rewarder.check_stake(&vault, &key(31), &owner, 1).is_ok());
    }

    #[test]
    fn test_lock_boundary() {
        let locked = StakedItem {
            locking_period: DAY,
            staked_at: 1_000,
            locked_until: 1_000 + DAY,
            ..Default::default()
        };

        assert_err(
            locked.ensure_unlocked(1_000 + DAY - 1, DAY),
            StakingError::StillLocked,
        );
        assert!(locked.ensure_unlocked(1_000 + DAY, DAY).is_ok());
        assert!(locked.ensure_unlocked(1_000 + DAY + 1, DAY).is_ok());
    }

    #[test]
    fn test_unlock_requires_staked_period() {
        let locked = StakedItem {
            locking_period: DAY,
            staked_at: 0,
            locked_until: DAY,
            ..Default::default()
        };

        assert_err(locked.ensure_unlocked(DAY, 0), StakingError::LockingPeriodMismatch);
        // the lock is reported before a wrong period
        assert_err(locked.ensure_unlocked(DAY - 1, 0), StakingError::StillLocked);
    }

    #[test]
    fn test_whitelist_is_idempotent() {
        let mut rewarder = rewarder();
        assert_eq!(rewarder.add_to_whitelist(&[key(20), key(21)]).unwrap(), 2);
        assert_eq!(rewarder.add_to_whitelist(&[key(20)]).unwrap(), 0);
        assert_eq!(rewarder.add_to_whitelist(&[key(22), key(22)]).unwrap(), 1);

        assert_eq!(rewarder.total_whitelisted, 3);
        assert_eq!(rewarder.whitelist, vec![key(20), key(21), key(22)]);
        assert!(rewarder.is_whitelisted(&key(21)));
        assert!(!rewarder.is_whitelisted(&key(23)));
    }

    #[test]
    fn test_whitelist_full() {
        let mut rewarder = rewarder();
        let mints: Vec<Pubkey> = (0..MAX_WHITELIST as u32)
            .map(|n| {
                let mut bytes = [0u8; 32];
                bytes[..4].copy_from_slice(&n.to_le_bytes());
                Pubkey::new_from_array(bytes)
            })
            .collect();
        rewarder.add_to_whitelist(&mints).unwrap();

        // duplicates still fit
        assert_eq!(rewarder.add_to_whitelist(&mints[..3]).unwrap(), 0);
        assert_err(
            rewarder.add_to_whitelist(&[key(255)]),
            StakingError::WhitelistFull,
        );
        assert_eq!(rewarder.total_whitelisted as usize, MAX_WHITELIST);
    }

    #[test]
    fn test_reward_rate_must_be_positive() {
        let mut rewarder = rewarder();
        assert_err(rewarder.set_reward_rate(0), StakingError::InvalidRewardRate);
        assert_eq!(rewarder.reward_rate, 86_400);

        rewarder.set_reward_rate(10).unwrap();
        assert_eq!(rewarder.reward_rate, 10);
    }

    #[test]
    fn test_payout_follows_settings() {
        let mut rewarder = rewarder();
        assert_eq!(rewarder.payout(2).unwrap(), Payout { staker: 2, creator: 0 });

        rewarder.creator_share_enabled = true;
        assert_eq!(rewarder.payout(2).unwrap(), Payout { staker: 1, creator: 1 });

        rewarder.reward_split = RewardSplit::CreatorBonus;
        assert_eq!(
            rewarder.payout(100).unwrap(),
            Payout { staker: 100, creator: 25 }
        );
    }

    #[test]
    fn test_verify_metadata() {
        let rewarder = rewarder();
        let creators = vec![
            Creator { address: key(11), verified: true, share: 40 },
            Creator { address: key(10), verified: true, share: 60 },
        ];

        assert!(rewarder
            .verify_metadata(&key(10), "Monkes #42", Some(creators.as_slice()))
            .is_ok());
        assert_err(
            rewarder.verify_metadata(&key(99), "Monkes #42", Some(creators.as_slice())),
            StakingError::InvalidMetadataUpdateAuthority,
        );
        assert_err(
            rewarder.verify_metadata(&key(10), "Apes #42", Some(creators.as_slice())),
            StakingError::InvalidMetadataCollectionPrefix,
        );
        assert_err(
            rewarder.verify_metadata(&key(10), "Monkes #42", None),
            StakingError::InvalidMetadataCreators,
        );
        assert_err(
            rewarder.verify_metadata(&key(10), "Monkes #42", Some(&creators[..1])),
            StakingError::InvalidMetadataCreators,
        );

        let unverified = vec![
            Creator { address: key(11), verified: false, share: 40 },
            Creator { address: key(10), verified: true, share: 60 },
        ];
        assert_err(
            rewarder.verify_metadata(&key(10), "Monkes #42", Some(unverified.as_slice())),
            StakingError::InvalidMetadataCreators,
        );
    }

    #[test]
    fn test_vault_insert_and_remove() {
        let owner = key(1);
        let mut vault = vault(owner);

        vault.insert(item(owner, key(30))).unwrap();
        vault.insert(item(owner, key(31))).unwrap();
        assert_eq!(vault.total_staked, 2);
        assert_eq!(vault.total_staked as usize, vault.items.len());

        let removed = vault.remove(&owner, &key(30)).unwrap();
        assert_eq!(removed.nft_mint, key(30));
        assert_eq!(vault.total_staked, 1);
        assert!(vault.find(&key(30)).is_none());
        assert!(vault.find(&key(31)).is_some());
    }

    #[test]
    fn test_vault_rejects_double_stake() {
        let owner = key(1);
        let mut vault = vault(owner);
        vault.insert(item(owner, key(30))).unwrap();
        assert_err(vault.insert(item(owner, key(30))), StakingError::AlreadyStaked);
        assert_eq!(vault.total_staked, 1);
    }

    #[test]
    fn test_vault_rejects_foreign_items() {
        let mut vault = vault(key(1));
        assert_err(vault.insert(item(key(2), key(30))), StakingError::Unauthorized);

        vault.insert(item(key(1), key(30))).unwrap();
        assert_err(vault.remove(&key(2), &key(30)), StakingError::NotStaked);
        assert_err(vault.remove(&key(1), &key(31)), StakingError::NotStaked);
    }

    #[test]
    fn test_vault_full() {
        let owner = key(1);
        let mut vault = vault(owner);
        for n in 0..MAX_STAKED_ITEMS as u8 {
            vault.insert(item(owner, key(n))).unwrap();
        }
        assert_err(vault.insert(item(owner, key(250))), StakingError::VaultFull);
    }

    #[test]
    fn test_stake_starts_accrual() {
        let mut stake = StakeAccount::default();
        let locked_until = stake.record_stake(86_400, 1_000, 7 * DAY).unwrap();

        assert_eq!(locked_until, 1_000 + 7 * DAY);
        assert_eq!(stake.locking_deadline, locked_until);
        assert_eq!(stake.deposit_timestamp, Some(1_000));
        assert_eq!(stake.staked_count, 1);
        assert_eq!(stake.pending_reward(86_400, 1_000).unwrap(), 0);
        assert_eq!(stake.pending_reward(86_400, 1_002).unwrap(), 2);
    }

    #[test]
    fn test_stake_rejects_negative_locking_period() {
        let mut stake = StakeAccount::default();
        assert_err(
            stake.record_stake(86_400, 1_000, -1),
            StakingError::InvalidLockingPeriod,
        );
        assert_eq!(stake.staked_count, 0);
    }

    #[test]
    fn test_second_stake_preserves_accrual() {
        let mut stake = StakeAccount::default();
        stake.record_stake(86_400, 0, 0).unwrap();
        stake.record_stake(86_400, 10, 0).unwrap();

        assert_eq!(stake.accrued_unclaimed, 10);
        assert_eq!(stake.deposit_timestamp, Some(10));
        // two NFTs accrue twice as fast
        assert_eq!(stake.claimable(86_400, 15).unwrap(), 20);
    }

    #[test]
    fn test_claim_resets_clock() {
        let mut stake = StakeAccount::default();
        stake.record_stake(86_400, 100, 0).unwrap();

        assert_eq!(stake.claim(86_400, 102).unwrap(), 2);
        assert_eq!(stake.deposit_timestamp, Some(102));
        assert_eq!(stake.total_claimed, 2);

        assert_err(stake.claim(86_400, 102), StakingError::NothingToClaim);
        assert_eq!(stake.claim(86_400, 105).unwrap(), 3);
    }

    #[test]
    fn test_claim_without_stake() {
        let mut stake = StakeAccount::default();
        assert_err(stake.claim(86_400, 100), StakingError::NothingToClaim);
    }

    #[test]
    fn test_claim_pays_checkpointed_reward() {
        let mut stake = StakeAccount::default();
        stake.record_stake(86_400, 0, 0).unwrap();
        assert_eq!(stake.checkpoint(86_400, 50).unwrap(), 50);
        assert_eq!(stake.claim(86_400, 50).unwrap(), 50);
        assert_eq!(stake.accrued_unclaimed, 0);
    }

    #[test]
    fn test_locking_deadline_follows_deposit() {
        let mut stake = StakeAccount::default();
        stake.record_stake(86_400, 100, 10).unwrap();
        assert_eq!(stake.locking_deadline, 110);

        stake.claim(86_400, 500).unwrap();
        assert_eq!(stake.deposit_timestamp, Some(500));
        assert_eq!(stake.locking_deadline, 500);

        stake.settle(86_400, 600).unwrap();
        stake.record_unstake().unwrap();
        assert_eq!(stake.deposit_timestamp, None);
        assert_eq!(stake.locking_deadline, 0);
    }

    #[test]
    fn test_unstake_flow_clears_deposit() {
        let mut stake = StakeAccount::default();
        stake.record_stake(86_400, 0, 0).unwrap();

        assert_eq!(stake.settle(86_400, 30).unwrap(), 30);
        stake.record_unstake().unwrap();
        assert_eq!(stake.deposit_timestamp, None);
        assert_eq!(stake.staked_count, 0);

        // nothing accrues once unstaked
        assert_eq!(stake.claimable(86_400, 10_000).unwrap(), 0);
        assert_eq!(stake.settle(86_400, 10_000).unwrap(), 0);
        assert_err(stake.record_unstake(), StakingError::NotStaked);
    }

    #[test]
    fn test_partial_unstake_keeps_accruing() {
        let mut stake = StakeAccount::default();
        stake.record_stake(86_400, 0, 0).unwrap();
        stake.record_stake(86_400, 0, 0).unwrap();

        assert_eq!(stake.settle(86_400, 10).unwrap(), 20);
        stake.record_unstake().unwrap();
        assert_eq!(stake.deposit_timestamp, Some(10));
        assert_eq!(stake.claimable(86_400, 15).unwrap(), 5);
    }

    #[test]
    fn test_clock_must_not_go_backwards() {
        let mut stake = StakeAccount::default();
        stake.record_stake(86_400, 100, 0).unwrap();
        assert_err(stake.claim(86_400, 99), StakingError::NonMonotonicClock);
    }

    #[test]
    fn test_rate_change_is_prospective() {
        let mut stake = StakeAccount::default();
        stake.record_stake(86_400, 0, 0).unwrap();
        stake.checkpoint(86_400, 10).unwrap();

        // doubling the rate only affects time after the checkpoint
        assert_eq!(stake.claimable(172_800, 15).unwrap(), 10 + 10);
    }
}
