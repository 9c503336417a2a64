//! Per-owner stake state machine.
//!
//! `Unstaked -> stake -> Staked -> claim_rewards* -> unstake -> Unstaked`.
//!
//! These functions hold the rules; instruction handlers supply the clock, the
//! caller identity, and a [`ValueTransfer`] for custody. Every rejection
//! leaves the record exactly as it was.

use anchor_lang::prelude::Pubkey;

use crate::error::StakingError;
use crate::math;
use crate::state::{StakeRecord, StakingConfig};

/// Outbound movement of custodied lamports.
pub trait ValueTransfer {
    /// Send `amount` to `to`, returning whether it was delivered.
    ///
    /// `pending` is the record as any code reached through the transfer must
    /// observe it: `in_flight` is set and, for an unstake, `amount` is zero.
    fn transfer(&mut self, pending: &StakeRecord, to: &Pubkey, amount: u64) -> bool;
}

/// Open a fresh stake. Custody of `amount` is taken by the caller's handler.
pub fn stake(
    record: &mut StakeRecord,
    config: &StakingConfig,
    owner: Pubkey,
    lock_duration_days: u64,
    amount: u64,
    now: i64,
) -> Result<(), StakingError> {
    if record.in_flight {
        return Err(StakingError::ReentrantCall);
    }
    if !config.lock_fits(lock_duration_days) {
        return Err(StakingError::LockDurationExceedsMax);
    }
    if amount == 0 {
        return Err(StakingError::MustStakeNonZeroAmount);
    }
    if record.is_staking() {
        return Err(StakingError::StakingInProgress);
    }

    record.owner = owner;
    record.amount = amount;
    record.lock_duration_days = lock_duration_days;
    record.start_time = now;
    record.last_claim_time = now;
    Ok(())
}

/// Return the full principal once the lock has elapsed. No reward is paid.
pub fn unstake<T: ValueTransfer>(
    record: &mut StakeRecord,
    owner: &Pubkey,
    now: i64,
    transfer: &mut T,
) -> Result<u64, StakingError> {
    if record.in_flight {
        return Err(StakingError::ReentrantCall);
    }
    if !record.is_staking() {
        return Err(StakingError::NotStaking);
    }
    if !record.is_lock_ended(now)? {
        return Err(StakingError::TokensStillLocked);
    }

    let amount = record.amount;
    record.amount = 0;

    if !send_guarded(record, owner, amount, transfer) {
        record.amount = amount;
        return Err(StakingError::TransferFailed);
    }
    Ok(amount)
}

/// Pay one reward. `last_claim_time` only advances after delivery.
pub fn claim_rewards<T: ValueTransfer>(
    record: &mut StakeRecord,
    config: &StakingConfig,
    owner: &Pubkey,
    now: i64,
    transfer: &mut T,
) -> Result<u64, StakingError> {
    if record.in_flight {
        return Err(StakingError::ReentrantCall);
    }
    if !record.is_staking() {
        return Err(StakingError::NotStaking);
    }
    if !math::has_elapsed(record.last_claim_time, config.claim_delay, now)? {
        return Err(StakingError::ClaimDelayNotReached);
    }

    let reward = config.reward_for(record)?;
    if reward == 0 {
        return Err(StakingError::NoRewardsToClaim);
    }

    if !send_guarded(record, owner, reward, transfer) {
        return Err(StakingError::TransferFailed);
    }
    record.last_claim_time = now;
    Ok(reward)
}

fn send_guarded<T: ValueTransfer>(
    record: &mut StakeRecord,
    to: &Pubkey,
    amount: u64,
    transfer: &mut T,
) -> bool {
    record.in_flight = true;
    let delivered = transfer.transfer(record, to, amount);
    record.in_flight = false;
    delivered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;

    const DAY: i64 = SECONDS_PER_DAY as i64;

    struct Recorder {
        deliver: bool,
        sent: Vec<(Pubkey, u64)>,
        observed: Vec<StakeRecord>,
    }

    impl Recorder {
        fn ok() -> Self {
            Self { deliver: true, sent: Vec::new(), observed: Vec::new() }
        }

        fn failing() -> Self {
            Self { deliver: false, ..Self::ok() }
        }
    }

    impl ValueTransfer for Recorder {
        fn transfer(&mut self, pending: &StakeRecord, to: &Pubkey, amount: u64) -> bool {
            self.observed.push(pending.clone());
            if self.deliver {
                self.sent.push((*to, amount));
            }
            self.deliver
        }
    }

    /// Re-enters the ledger with whatever state the transfer exposes.
    struct Reenter {
        config: StakingConfig,
        now: i64,
        results: Vec<Result<u64, StakingError>>,
    }

    impl ValueTransfer for Reenter {
        fn transfer(&mut self, pending: &StakeRecord, to: &Pubkey, _amount: u64) -> bool {
            let mut seen = pending.clone();
            let mut inner = Recorder::ok();
            self.results.push(unstake(&mut seen, to, self.now, &mut inner));
            let mut seen = pending.clone();
            self.results
                .push(claim_rewards(&mut seen, &self.config, to, self.now, &mut inner));
            true
        }
    }

    fn config() -> StakingConfig {
        let mut config = StakingConfig::default();
        config
            .configure(Pubkey::new_unique(), 365, 5, 7, 10, 0)
            .unwrap();
        config
    }

    fn staked(config: &StakingConfig, owner: Pubkey, days: u64, amount: u64) -> StakeRecord {
        let mut record = StakeRecord::default();
        stake(&mut record, config, owner, days, amount, 0).unwrap();
        record
    }

    #[test]
    fn stake_writes_every_field() {
        let config = config();
        let owner = Pubkey::new_unique();
        let mut record = StakeRecord::default();

        stake(&mut record, &config, owner, 100, 500, 42).unwrap();

        assert_eq!(record.owner, owner);
        assert_eq!(record.amount, 500);
        assert_eq!(record.lock_duration_days, 100);
        assert_eq!(record.start_time, 42);
        assert_eq!(record.last_claim_time, 42);
        assert!(!record.in_flight);
    }

    #[test]
    fn stake_rejections_leave_record_untouched() {
        let config = config();
        let owner = Pubkey::new_unique();
        let mut record = staked(&config, owner, 30, 10);
        let before = record.clone();

        let err = stake(&mut record, &config, owner, 30, 10, 5).unwrap_err();
        assert!(matches!(err, StakingError::StakingInProgress));
        assert_eq!(record, before);

        let mut fresh = StakeRecord::default();
        let err = stake(&mut fresh, &config, owner, 366, 10, 5).unwrap_err();
        assert!(matches!(err, StakingError::LockDurationExceedsMax));
        let err = stake(&mut fresh, &config, owner, u64::MAX, 10, 5).unwrap_err();
        assert!(matches!(err, StakingError::LockDurationExceedsMax));
        let err = stake(&mut fresh, &config, owner, 30, 0, 5).unwrap_err();
        assert!(matches!(err, StakingError::MustStakeNonZeroAmount));
        assert_eq!(fresh, StakeRecord::default());
    }

    #[test]
    fn stake_reuses_unstaked_slot() {
        let config = config();
        let owner = Pubkey::new_unique();
        let mut record = staked(&config, owner, 1, 10);
        unstake(&mut record, &owner, DAY, &mut Recorder::ok()).unwrap();

        stake(&mut record, &config, owner, 7, 99, 2 * DAY).unwrap();
        assert_eq!(record.amount, 99);
        assert_eq!(record.lock_duration_days, 7);
        assert_eq!(record.start_time, 2 * DAY);
    }

    #[test]
    fn unstake_waits_for_lock() {
        let config = config();
        let owner = Pubkey::new_unique();
        let mut record = staked(&config, owner, 30, 1);
        let mut transfer = Recorder::ok();

        let err = unstake(&mut record, &owner, 30 * DAY - 1, &mut transfer).unwrap_err();
        assert!(matches!(err, StakingError::TokensStillLocked));
        assert_eq!(record.amount, 1);
        assert!(transfer.sent.is_empty());

        assert_eq!(unstake(&mut record, &owner, 30 * DAY, &mut transfer).unwrap(), 1);
        assert_eq!(record.amount, 0);
        assert_eq!(transfer.sent, vec![(owner, 1)]);
    }

    #[test]
    fn unstake_zeroes_before_transfer() {
        let config = config();
        let owner = Pubkey::new_unique();
        let mut record = staked(&config, owner, 1, 77);
        let mut transfer = Recorder::ok();

        unstake(&mut record, &owner, DAY, &mut transfer).unwrap();

        let seen = &transfer.observed[0];
        assert_eq!(seen.amount, 0);
        assert!(seen.in_flight);
        assert!(!record.in_flight);
    }

    #[test]
    fn failed_unstake_restores_principal() {
        let config = config();
        let owner = Pubkey::new_unique();
        let mut record = staked(&config, owner, 1, 77);
        let before = record.clone();

        let err = unstake(&mut record, &owner, DAY, &mut Recorder::failing()).unwrap_err();
        assert!(matches!(err, StakingError::TransferFailed));
        assert_eq!(record, before);
    }

    #[test]
    fn unstaked_record_rejects_unstake_and_claim() {
        let config = config();
        let owner = Pubkey::new_unique();
        let mut record = StakeRecord::default();

        let err = unstake(&mut record, &owner, DAY, &mut Recorder::ok()).unwrap_err();
        assert!(matches!(err, StakingError::NotStaking));
        let err = claim_rewards(&mut record, &config, &owner, DAY, &mut Recorder::ok()).unwrap_err();
        assert!(matches!(err, StakingError::NotStaking));
    }

    #[test]
    fn claim_waits_for_delay() {
        let config = config();
        let owner = Pubkey::new_unique();
        let mut record = staked(&config, owner, 100, 100);
        let mut transfer = Recorder::ok();

        let err = claim_rewards(&mut record, &config, &owner, 7 * DAY - 1, &mut transfer).unwrap_err();
        assert!(matches!(err, StakingError::ClaimDelayNotReached));
        assert_eq!(record.last_claim_time, 0);
        assert!(transfer.sent.is_empty());
    }

    #[test]
    fn repeated_claims_pay_the_same_reward() {
        let config = config();
        let owner = Pubkey::new_unique();
        let mut record = staked(&config, owner, 100, 100);
        let mut transfer = Recorder::ok();

        let first = claim_rewards(&mut record, &config, &owner, 7 * DAY, &mut transfer).unwrap();
        let second = claim_rewards(&mut record, &config, &owner, 14 * DAY, &mut transfer).unwrap();

        assert_eq!(first, 1369);
        assert_eq!(first, second);
        assert_eq!(record.last_claim_time, 14 * DAY);
        assert_eq!(record.amount, 100);
    }

    #[test]
    fn zero_reward_is_rejected() {
        let config = config();
        let owner = Pubkey::new_unique();
        let mut record = staked(&config, owner, 1, 1);

        let err = claim_rewards(&mut record, &config, &owner, 7 * DAY, &mut Recorder::ok()).unwrap_err();
        assert!(matches!(err, StakingError::NoRewardsToClaim));
        assert_eq!(record.last_claim_time, 0);
    }

    #[test]
    fn failed_claim_keeps_claim_time() {
        let config = config();
        let owner = Pubkey::new_unique();
        let mut record = staked(&config, owner, 100, 100);

        let err = claim_rewards(&mut record, &config, &owner, 7 * DAY, &mut Recorder::failing()).unwrap_err();
        assert!(matches!(err, StakingError::TransferFailed));
        assert_eq!(record.last_claim_time, 0);
        assert!(!record.in_flight);
    }

    #[test]
    fn reentry_during_unstake_is_rejected() {
        let config = config();
        let owner = Pubkey::new_unique();
        let mut record = staked(&config, owner, 100, 100);
        let mut attacker = Reenter { config: config.clone(), now: 200 * DAY, results: Vec::new() };

        assert_eq!(unstake(&mut record, &owner, 200 * DAY, &mut attacker).unwrap(), 100);

        assert_eq!(attacker.results.len(), 2);
        for result in attacker.results {
            assert!(matches!(result, Err(StakingError::ReentrantCall)));
        }
    }

    #[test]
    fn reentry_during_claim_is_rejected() {
        let config = config();
        let owner = Pubkey::new_unique();
        let mut record = staked(&config, owner, 100, 100);
        let mut attacker = Reenter { config: config.clone(), now: 200 * DAY, results: Vec::new() };

        claim_rewards(&mut record, &config, &owner, 200 * DAY, &mut attacker).unwrap();

        for result in attacker.results {
            assert!(matches!(result, Err(StakingError::ReentrantCall)));
        }
        assert_eq!(record.amount, 100);
    }

    #[test]
    fn stake_refuses_in_flight_record() {
        let config = config();
        let owner = Pubkey::new_unique();
        let mut record = StakeRecord { in_flight: true, ..StakeRecord::default() };

        let err = stake(&mut record, &config, owner, 1, 1, 0).unwrap_err();
        assert!(matches!(err, StakingError::ReentrantCall));
    }

    #[test]
    fn apy_change_applies_to_open_stake() {
        let mut config = config();
        let admin = config.authority;
        let owner = Pubkey::new_unique();
        let record = staked(&config, owner, 100, 100);

        assert_eq!(config.reward_for(&record).unwrap(), 1369);
        config.set_apy(&admin, 20, 1).unwrap();
        assert_eq!(config.reward_for(&record).unwrap(), 2739);
    }
}
