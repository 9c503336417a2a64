//! Fixed-point reward math and time helpers.
//!
//! The booster multiplier is an integer scaled by [`BOOSTER_PRECISION`]
//! (`100_000` == 1.0x). Intermediate products are computed in `u128` with
//! checked arithmetic. The safe range is any input whose product
//! `amount * lock_days * apy * booster` fits in `u128`; anything larger is
//! rejected with [`StakingError::MathOverflow`] instead of wrapping.

use crate::constants::*;
use crate::error::StakingError;

/// Convert whole days to seconds.
pub fn days_to_seconds(days: u64) -> Result<u64, StakingError> {
    days.checked_mul(SECONDS_PER_DAY)
        .ok_or(StakingError::MathOverflow)
}

/// Booster multiplier for a declared lock, scaled by `BOOSTER_PRECISION`.
///
/// `multiplier = lock_days * max_lock_multiplier * 1e5 / max_lock_days`,
/// capped at `max_lock_multiplier * 1e5`. Both sides of the ratio are in whole
/// days. A zero maximum duration saturates every non-zero lock at the cap.
pub fn booster_multiplier(
    lock_days: u64,
    max_lock_multiplier: u64,
    max_lock_duration_secs: u64,
) -> Result<u128, StakingError> {
    let cap = (max_lock_multiplier as u128)
        .checked_mul(BOOSTER_PRECISION)
        .ok_or(StakingError::MathOverflow)?;

    if lock_days == 0 {
        return Ok(0);
    }

    let max_lock_days = max_lock_duration_secs / SECONDS_PER_DAY;
    if lock_days >= max_lock_days {
        return Ok(cap);
    }

    let multiplier = (lock_days as u128)
        .checked_mul(cap)
        .ok_or(StakingError::MathOverflow)?
        / max_lock_days as u128;

    Ok(multiplier.min(cap))
}

/// Reward paid by one claim.
///
/// `reward = amount * lock_days * apy * booster / (100 * 1e5)`, truncated.
/// The result does not depend on time elapsed since the last claim.
pub fn reward(amount: u64, lock_days: u64, apy: u64, booster: u128) -> Result<u64, StakingError> {
    let numerator = (amount as u128)
        .checked_mul(lock_days as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(apy as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(booster)
        .ok_or(StakingError::MathOverflow)?;

    let reward = numerator / (PERCENT_DENOMINATOR * BOOSTER_PRECISION);

    u64::try_from(reward).map_err(|_| StakingError::MathOverflow)
}

/// First timestamp at which a stake opened at `start_time` may be withdrawn.
pub fn unlock_time(start_time: i64, lock_days: u64) -> Result<i64, StakingError> {
    start_time
        .checked_add_unsigned(days_to_seconds(lock_days)?)
        .ok_or(StakingError::MathOverflow)
}

/// True once `now >= since + delay_secs`.
pub fn has_elapsed(since: i64, delay_secs: u64, now: i64) -> Result<bool, StakingError> {
    let ready_at = since
        .checked_add_unsigned(delay_secs)
        .ok_or(StakingError::MathOverflow)?;
    Ok(now >= ready_at)
}
