use anchor_lang::prelude::*;

#[event]
pub struct Staked {
    pub user: Pubkey,
    pub amount: u64,
    pub lock_duration_days: u64,
}

#[event]
pub struct Unstaked {
    pub user: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RewardClaimed {
    pub user: Pubkey,
    pub amount: u64,
}

/// Carries the full parameter tuple after any admin change.
/// Time parameters are in seconds.
#[event]
pub struct ParametersChanged {
    pub max_lock_duration: u64,
    pub max_lock_multiplier: u64,
    pub claim_delay: u64,
    pub apy: u64,
}

#[event]
pub struct TreasuryFunded {
    pub funder: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
