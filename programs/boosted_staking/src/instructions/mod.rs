//! Instruction handlers for the Boosted Staking program.
//!
//! This module contains all instruction implementations.

pub mod admin;
pub mod claim_rewards;
pub mod fund_treasury;
pub mod initialize;
pub mod stake;
pub mod unstake;
pub mod views;

pub use admin::*;
pub use claim_rewards::*;
pub use fund_treasury::*;
pub use initialize::*;
pub use stake::*;
pub use unstake::*;
pub use views::*;
