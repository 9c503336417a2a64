//! # Boosted Staking Program
//!
//! Custodial, time-locked SOL staking. Each participant holds at most one
//! stake with a declared lock duration; rewards scale with that duration
//! through a booster multiplier capped by the administrator.
//!
//! ## Features
//! - Lock-duration booster: `days * max_multiplier / max_lock_days`, capped
//! - Fixed reward per claim, gated by a claim delay
//! - Principal returned in full once the lock elapses
//! - Administrator-tunable parameters that apply to open stakes immediately
//! - Per-record reentrancy guard around every payout
//! - Checked arithmetic throughout

use anchor_lang::prelude::*;

declare_id!("Bst8kVq3nJ6s2wFZ1yXc5RHeLmPdTgA9uKoW4iEQzN7b");

pub mod constants;
pub mod custody;
pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod math;
pub mod state;

use instructions::*;

#[program]
pub mod boosted_staking {
    use super::*;

    /// Creates the global config and binds the custody vault.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `max_lock_days` - Longest lock a stake may declare, in days
    /// * `max_lock_multiplier` - Booster cap, as a whole multiple
    /// * `claim_delay_days` - Minimum days between two claims
    /// * `apy` - Yield rate in whole percent
    ///
    /// # Errors
    /// Returns `InvalidZeroInput` if any parameter is zero.
    pub fn initialize(
        ctx: Context<Initialize>,
        max_lock_days: u64,
        max_lock_multiplier: u64,
        claim_delay_days: u64,
        apy: u64,
    ) -> Result<()> {
        instructions::initialize::handler(
            ctx,
            max_lock_days,
            max_lock_multiplier,
            claim_delay_days,
            apy,
        )
    }

    /// Locks `amount` lamports for `lock_duration_days`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The lock exceeds the maximum lock duration
    /// - Amount is zero
    /// - The caller already has an open stake
    pub fn stake(ctx: Context<Stake>, lock_duration_days: u64, amount: u64) -> Result<()> {
        instructions::stake::handler(ctx, lock_duration_days, amount)
    }

    /// Returns the caller's full principal.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The caller is not staking
    /// - The lock has not elapsed
    /// - The vault transfer fails
    pub fn unstake(ctx: Context<Unstake>) -> Result<()> {
        instructions::unstake::handler(ctx)
    }

    /// Pays the caller one reward.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The caller is not staking
    /// - The claim delay has not elapsed since the last claim
    /// - The computed reward is zero
    /// - The vault transfer fails
    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards::handler(ctx)
    }

    /// Lamports staked by `owner` (zero when not staking).
    pub fn get_staked_amount(ctx: Context<ViewStake>, owner: Pubkey) -> Result<u64> {
        instructions::views::get_staked_amount_handler(ctx, owner)
    }

    /// Reward one claim by `owner` would pay right now.
    pub fn calculate_reward(ctx: Context<ViewStake>, owner: Pubkey) -> Result<u64> {
        instructions::views::calculate_reward_handler(ctx, owner)
    }

    /// Booster multiplier for a lock of `lock_duration_days`, scaled by 1e5.
    pub fn calculate_booster_multiplier(
        ctx: Context<ViewParameters>,
        lock_duration_days: u64,
    ) -> Result<u128> {
        instructions::views::calculate_booster_multiplier_handler(ctx, lock_duration_days)
    }

    /// Admin function to set the maximum lock duration, in days.
    ///
    /// # Errors
    /// Returns an error if caller is not the admin.
    pub fn set_max_lock_duration(ctx: Context<AdminControl>, days: u64) -> Result<()> {
        instructions::admin::set_max_lock_duration_handler(ctx, days)
    }

    /// Admin function to set the booster cap.
    ///
    /// # Errors
    /// Returns an error if caller is not the admin.
    pub fn set_max_lock_multiplier(ctx: Context<AdminControl>, multiplier: u64) -> Result<()> {
        instructions::admin::set_max_lock_multiplier_handler(ctx, multiplier)
    }

    /// Admin function to set the claim delay, in days.
    ///
    /// # Errors
    /// Returns an error if caller is not the admin.
    pub fn set_claim_delay(ctx: Context<AdminControl>, days: u64) -> Result<()> {
        instructions::admin::set_claim_delay_handler(ctx, days)
    }

    /// Admin function to set the APY, in whole percent.
    ///
    /// # Errors
    /// Returns an error if caller is not the admin.
    pub fn set_apy(ctx: Context<AdminControl>, apy: u64) -> Result<()> {
        instructions::admin::set_apy_handler(ctx, apy)
    }

    /// Deposits lamports into the vault to back reward payouts.
    ///
    /// # Errors
    /// Returns an error if amount is zero or the funder cannot pay.
    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        instructions::fund_treasury::handler(ctx, amount)
    }
}
