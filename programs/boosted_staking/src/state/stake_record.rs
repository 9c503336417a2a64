use anchor_lang::prelude::*;

use std::result::Result;

use crate::error::StakingError;
use crate::math;

/// Per-owner stake position. Never closed; `amount == 0` marks it unstaked
/// and the remaining fields are stale until the next stake overwrites them.
/// PDA: ["stake_record", staking_config, owner]
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct StakeRecord {
    pub owner: Pubkey,

    /// Lamports locked; zero when not staking
    pub amount: u64,

    pub lock_duration_days: u64,
    pub start_time: i64,
    pub last_claim_time: i64,

    /// Set while an outbound transfer for this record is in progress
    pub in_flight: bool,

    pub bump: u8,
}

impl StakeRecord {
    pub const LEN: usize = 8 + 32 + 8 + 8 + 8 + 8 + 1 + 1;

    pub fn is_staking(&self) -> bool {
        self.amount > 0
    }

    pub fn unlock_time(&self) -> Result<i64, StakingError> {
        math::unlock_time(self.start_time, self.lock_duration_days)
    }

    pub fn is_lock_ended(&self, now: i64) -> Result<bool, StakingError> {
        Ok(now >= self.unlock_time()?)
    }
}
