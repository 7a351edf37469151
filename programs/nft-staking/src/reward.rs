//! Reward arithmetic. Everything here is integer math that truncates toward zero.

use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, SECONDS_PER_DAY};
use crate::error::StakingError;
use crate::state::RewardSplit;

/// How a gross reward is divided between the staker and the primary creator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Payout {
    pub staker: u64,
    pub creator: u64,
}

impl Payout {
    pub fn total(&self) -> Result<u64> {
        Ok(self
            .staker
            .checked_add(self.creator)
            .ok_or(StakingError::ArithmeticOverflow)?)
    }
}

/// Reward accrued by `staked_count` NFTs over `elapsed` seconds at
/// `reward_rate` base units per NFT per day.
pub fn accrued(elapsed: i64, reward_rate: u64, staked_count: u32) -> Result<u64> {
    require!(elapsed >= 0, StakingError::NonMonotonicClock);

    let reward = (elapsed as u128)
        .checked_mul(reward_rate as u128)
        .and_then(|r| r.checked_mul(staked_count as u128))
        .ok_or(StakingError::ArithmeticOverflow)?
        / SECONDS_PER_DAY as u128;

    Ok(u64::try_from(reward).map_err(|_| StakingError::ArithmeticOverflow)?)
}

/// Splits `gross` according to the rewarder's creator share settings.
pub fn split(gross: u64, enabled: bool, share_bps: u16, policy: RewardSplit) -> Result<Payout> {
    require!(
        share_bps as u64 <= BPS_DENOMINATOR,
        StakingError::InvalidCreatorShare
    );

    if !enabled || share_bps == 0 {
        return Ok(Payout {
            staker: gross,
            creator: 0,
        });
    }

    let payout = match policy {
        RewardSplit::StakerDeduction => {
            let staker = apply_bps(gross, BPS_DENOMINATOR - share_bps as u64)?;
            Payout {
                staker,
                creator: gross - staker,
            }
        }
        RewardSplit::CreatorBonus => Payout {
            staker: gross,
            creator: apply_bps(gross, share_bps as u64)?,
        },
    };

    Ok(payout)
}

fn apply_bps(amount: u64, bps: u64) -> Result<u64> {
    let scaled = (amount as u128)
        .checked_mul(bps as u128)
        .ok_or(StakingError::ArithmeticOverflow)?
        / BPS_DENOMINATOR as u128;

    Ok(u64::try_from(scaled).map_err(|_| StakingError::ArithmeticOverflow)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accrued_is_zero_without_elapsed_time() {
        assert_eq!(accrued(0, 86_400, 1).unwrap(), 0);
        assert_eq!(accrued(3_600, 86_400, 0).unwrap(), 0);
    }

    #[test]
    fn test_accrued_per_second() {
        // 86_400 units per day is one unit per second
        assert_eq!(accrued(2, 86_400, 1).unwrap(), 2);
        assert_eq!(accrued(3_600, 2_400, 1).unwrap(), 100);
    }

    #[test]
    fn test_accrued_truncates() {
        // 1.5 units rounds down
        assert_eq!(accrued(3, 43_200, 1).unwrap(), 1);
        assert_eq!(accrued(1, 86_399, 1).unwrap(), 0);
    }

    #[test]
    fn test_accrued_scales_with_staked_count() {
        assert_eq!(accrued(3_600, 2_400, 10).unwrap(), 1_000);
    }

    #[test]
    fn test_accrued_is_monotonic() {
        let rate = 1_234_567;
        let mut previous = 0;
        for elapsed in (0..200_000).step_by(997) {
            let reward = accrued(elapsed, rate, 3).unwrap();
            assert!(reward >= previous);
            previous = reward;
        }
    }

    #[test]
    fn test_accrued_rejects_negative_elapsed() {
        assert!(accrued(-1, 86_400, 1).is_err());
    }

    #[test]
    fn test_accrued_overflow() {
        assert!(accrued(i64::MAX, u64::MAX, u32::MAX).is_err());
    }

    #[test]
    fn test_split_disabled_pays_staker_everything() {
        let payout = split(2, false, 2_500, RewardSplit::StakerDeduction).unwrap();
        assert_eq!(payout, Payout { staker: 2, creator: 0 });
    }

    #[test]
    fn test_split_deduction_quarter() {
        // floor(2 * 0.75) to the staker, the remainder to the creator
        let payout = split(2, true, 2_500, RewardSplit::StakerDeduction).unwrap();
        assert_eq!(payout, Payout { staker: 1, creator: 1 });
        assert_eq!(payout.total().unwrap(), 2);

        let payout = split(1_000, true, 2_500, RewardSplit::StakerDeduction).unwrap();
        assert_eq!(payout, Payout { staker: 750, creator: 250 });
    }

    #[test]
    fn test_split_bonus_quarter() {
        let payout = split(1_000, true, 2_500, RewardSplit::CreatorBonus).unwrap();
        assert_eq!(payout, Payout { staker: 1_000, creator: 250 });

        let payout = split(2, true, 2_500, RewardSplit::CreatorBonus).unwrap();
        assert_eq!(payout, Payout { staker: 2, creator: 0 });
    }

    #[test]
    fn test_split_rejects_share_over_full() {
        assert!(split(10, true, 10_001, RewardSplit::StakerDeduction).is_err());
    }
}
