//! Error types for the Boosted Staking program.
//!
//! Every failure aborts the instruction with no persisted state change.
//!
//! Codes are assigned in declaration order from 6000, so new variants go at
//! the end.

use anchor_lang::prelude::*;

/// Custom error codes for the Boosted Staking program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakingError {
    // ========== Input Validation Errors ==========

    /// [6000] A construction parameter was zero.
    #[msg("Initial parameters must all be non-zero")]
    InvalidZeroInput,

    /// [6001] Stake or funding amount was zero.
    #[msg("Must stake a non-zero amount")]
    MustStakeNonZeroAmount,

    /// [6002] Requested lock is longer than the configured maximum.
    #[msg("Lock duration exceeds the maximum lock duration")]
    LockDurationExceedsMax,

    // ========== Stake State Errors ==========

    /// [6003] Caller already has an open stake.
    #[msg("Staking already in progress - unstake first")]
    StakingInProgress,

    /// [6004] Caller has no open stake.
    #[msg("Caller is not staking")]
    NotStaking,

    /// [6005] Computed reward is zero.
    #[msg("No rewards to claim")]
    NoRewardsToClaim,

    /// [6006] An unstake or claim is already in flight for this record.
    #[msg("Reentrant call on an in-flight stake record")]
    ReentrantCall,

    // ========== Time/Lock Errors ==========

    /// [6007] Lock period has not yet elapsed.
    #[msg("Tokens are still locked")]
    TokensStillLocked,

    /// [6008] Claim delay since the last claim has not yet elapsed.
    #[msg("Claim delay not reached")]
    ClaimDelayNotReached,

    // ========== Custody and Math Errors ==========

    /// [6009] The outbound value transfer did not succeed.
    #[msg("Value transfer failed")]
    TransferFailed,

    /// [6010] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    // ========== Authorization Errors ==========

    /// [6011] Unauthorized - caller is not the administrator.
    #[msg("Unauthorized: caller is not the administrator")]
    Unauthorized,
}
