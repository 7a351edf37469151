pub mod claim;
pub mod initialize_rewarder;
pub mod initialize_stake_account;
pub mod initialize_vault;
pub mod stake_nft;
pub mod sync_rewards;
pub mod unstake_nft;
pub mod update_reward_rate;
pub mod update_rewarder_settings;

pub use claim::*;
pub use initialize_rewarder::*;
pub use initialize_stake_account::*;
pub use initialize_vault::*;
pub use stake_nft::*;
pub use sync_rewards::*;
pub use unstake_nft::*;
pub use update_reward_rate::*;
pub use update_rewarder_settings::*;
