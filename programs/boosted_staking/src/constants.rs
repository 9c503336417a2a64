//! Program constants for the Boosted Staking program.
//!
//! PDA seeds, time units, and the fixed-point scales used by the reward math.

/// Seed for deriving the global staking config PDA
pub const STAKING_CONFIG_SEED: &[u8] = b"staking_config";

/// Seed for deriving per-owner stake record PDAs
pub const STAKE_RECORD_SEED: &[u8] = b"stake_record";

/// Seed for deriving the lamport custody vault PDA
pub const VAULT_SEED: &[u8] = b"vault";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Fixed-point scale of the booster multiplier (1.0x = 100_000)
pub const BOOSTER_PRECISION: u128 = 100_000;

/// APY is expressed in whole percent
pub const PERCENT_DENOMINATOR: u128 = 100;
