use anchor_lang::prelude::*;

use std::result::Result;

use crate::error::StakingError;
use crate::events::ParametersChanged;
use crate::math;
use crate::state::StakeRecord;

/// Global parameters and custody bookkeeping.
/// PDA: ["staking_config"]
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct StakingConfig {
    /// Administrator allowed to change the tunables
    pub authority: Pubkey,

    /// Lamport custody vault
    /// PDA: ["vault", staking_config]
    pub vault: Pubkey,

    /// Longest allowed lock, in seconds
    pub max_lock_duration: u64,

    /// Booster cap, in whole multiples (unscaled)
    pub max_lock_multiplier: u64,

    /// Minimum time between claims, in seconds
    pub claim_delay: u64,

    /// Yield rate in whole percent
    pub apy: u64,

    pub total_staked: u64,
    pub total_rewards_paid: u64,

    pub created_at: i64,
    pub last_updated: i64,

    pub bump: u8,
    pub vault_bump: u8,
}

impl StakingConfig {
    pub const LEN: usize = 8
        + (32 * 2)
        + (8 * 6)
        + (8 * 2)
        + 2;

    /// Set the initial parameters. Time parameters are given in whole days.
    pub fn configure(
        &mut self,
        authority: Pubkey,
        max_lock_days: u64,
        max_lock_multiplier: u64,
        claim_delay_days: u64,
        apy: u64,
        now: i64,
    ) -> Result<(), StakingError> {
        if max_lock_days == 0 || max_lock_multiplier == 0 || claim_delay_days == 0 || apy == 0 {
            return Err(StakingError::InvalidZeroInput);
        }

        self.authority = authority;
        self.max_lock_duration = math::days_to_seconds(max_lock_days)?;
        self.max_lock_multiplier = max_lock_multiplier;
        self.claim_delay = math::days_to_seconds(claim_delay_days)?;
        self.apy = apy;
        self.total_staked = 0;
        self.total_rewards_paid = 0;
        self.created_at = now;
        self.last_updated = now;
        Ok(())
    }

    pub fn ensure_admin(&self, caller: &Pubkey) -> Result<(), StakingError> {
        if *caller != self.authority {
            return Err(StakingError::Unauthorized);
        }
        Ok(())
    }

    pub fn set_max_lock_duration(
        &mut self,
        caller: &Pubkey,
        days: u64,
        now: i64,
    ) -> Result<(), StakingError> {
        self.ensure_admin(caller)?;
        self.max_lock_duration = math::days_to_seconds(days)?;
        self.last_updated = now;
        Ok(())
    }

    pub fn set_max_lock_multiplier(
        &mut self,
        caller: &Pubkey,
        multiplier: u64,
        now: i64,
    ) -> Result<(), StakingError> {
        self.ensure_admin(caller)?;
        self.max_lock_multiplier = multiplier;
        self.last_updated = now;
        Ok(())
    }

    pub fn set_claim_delay(&mut self, caller: &Pubkey, days: u64, now: i64) -> Result<(), StakingError> {
        self.ensure_admin(caller)?;
        self.claim_delay = math::days_to_seconds(days)?;
        self.last_updated = now;
        Ok(())
    }

    pub fn set_apy(&mut self, caller: &Pubkey, apy: u64, now: i64) -> Result<(), StakingError> {
        self.ensure_admin(caller)?;
        self.apy = apy;
        self.last_updated = now;
        Ok(())
    }

    /// Whether a lock of `days` fits under the current maximum.
    pub fn lock_fits(&self, days: u64) -> bool {
        // A lock too long to express in seconds cannot fit either.
        math::days_to_seconds(days)
            .map(|secs| secs <= self.max_lock_duration)
            .unwrap_or(false)
    }

    pub fn booster_multiplier(&self, lock_days: u64) -> Result<u128, StakingError> {
        math::booster_multiplier(lock_days, self.max_lock_multiplier, self.max_lock_duration)
    }

    /// Reward one claim would pay for `record` under the current parameters.
    ///
    /// Uses the full declared lock and full principal on every call, so each
    /// claim (once per claim delay) pays the same amount.
    pub fn reward_for(&self, record: &StakeRecord) -> Result<u64, StakingError> {
        if !record.is_staking() {
            return Ok(0);
        }
        let booster = self.booster_multiplier(record.lock_duration_days)?;
        math::reward(record.amount, record.lock_duration_days, self.apy, booster)
    }

    pub fn parameters(&self) -> ParametersChanged {
        ParametersChanged {
            max_lock_duration: self.max_lock_duration,
            max_lock_multiplier: self.max_lock_multiplier,
            claim_delay: self.claim_delay,
            apy: self.apy,
        }
    }
}
