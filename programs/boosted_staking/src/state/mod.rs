//! State structures for the Boosted Staking program.
//!
//! This module defines all account structures used to store program state.

pub mod stake_record;
pub mod staking_config;

pub use stake_record::*;
pub use staking_config::*;
