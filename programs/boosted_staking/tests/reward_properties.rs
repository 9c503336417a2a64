use proptest::prelude::*;

use boosted_staking::constants::{BOOSTER_PRECISION, SECONDS_PER_DAY};
use boosted_staking::ledger::{self, ValueTransfer};
use boosted_staking::math;
use boosted_staking::state::{StakeRecord, StakingConfig};

use anchor_lang::prelude::Pubkey;

struct AlwaysPays;

impl ValueTransfer for AlwaysPays {
    fn transfer(&mut self, _pending: &StakeRecord, _to: &Pubkey, _amount: u64) -> bool {
        true
    }
}

proptest! {
    /// Longer declared locks never earn a smaller booster.
    #[test]
    fn booster_monotonic_in_days(
        max_days in 1u64..5_000,
        multiplier in 1u64..1_000,
        d1 in 0u64..10_000,
        step in 0u64..10_000,
    ) {
        let max_secs = max_days * SECONDS_PER_DAY;
        let b1 = math::booster_multiplier(d1, multiplier, max_secs).unwrap();
        let b2 = math::booster_multiplier(d1 + step, multiplier, max_secs).unwrap();
        prop_assert!(b2 >= b1, "booster decreased: {} -> {}", b1, b2);
    }

    /// The booster never exceeds the configured cap.
    #[test]
    fn booster_bounded_by_cap(
        max_days in 0u64..5_000,
        multiplier in 1u64..1_000_000,
        days in any::<u64>(),
    ) {
        let max_secs = max_days * SECONDS_PER_DAY;
        let cap = multiplier as u128 * BOOSTER_PRECISION;
        let booster = math::booster_multiplier(days, multiplier, max_secs).unwrap();
        prop_assert!(booster <= cap);
        if days >= max_days && days > 0 {
            prop_assert_eq!(booster, cap);
        }
    }

    /// Reward is the same however long the caller waits between claims.
    #[test]
    fn reward_independent_of_wait(
        amount in 1u64..1_000_000_000_000,
        days in 1u64..=365,
        apy in 1u64..100,
        wait1 in 7u64..1_000,
        wait2 in 7u64..1_000,
    ) {
        let mut config = StakingConfig::default();
        config.configure(Pubkey::new_unique(), 365, 5, 7, apy, 0).unwrap();
        let owner = Pubkey::new_unique();
        let mut record = StakeRecord::default();
        ledger::stake(&mut record, &config, owner, days, amount, 0).unwrap();

        let expected = config.reward_for(&record).unwrap();
        prop_assume!(expected > 0);

        let day = SECONDS_PER_DAY as i64;
        let first_at = wait1 as i64 * day;
        let second_at = first_at + wait2 as i64 * day;

        let first = ledger::claim_rewards(&mut record, &config, &owner, first_at, &mut AlwaysPays).unwrap();
        let second = ledger::claim_rewards(&mut record, &config, &owner, second_at, &mut AlwaysPays).unwrap();

        prop_assert_eq!(first, expected);
        prop_assert_eq!(second, expected);
    }

    /// Stake then read returns exactly what was deposited.
    #[test]
    fn staked_amount_round_trips(
        amount in 1u64..u64::MAX,
        days in 0u64..=365,
    ) {
        let mut config = StakingConfig::default();
        config.configure(Pubkey::new_unique(), 365, 5, 7, 10, 0).unwrap();
        let mut record = StakeRecord::default();
        ledger::stake(&mut record, &config, Pubkey::new_unique(), days, amount, 0).unwrap();
        prop_assert_eq!(record.amount, amount);
    }
}
