//! Stake instruction handler.
//!
//! Opens a time-locked stake and moves the deposit into the vault.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::custody;
use crate::error::StakingError;
use crate::events::Staked;
use crate::ledger;
use crate::state::{StakeRecord, StakingConfig};

/// Accounts required for staking.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The user staking lamports.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The global config.
    #[account(
        mut,
        seeds = [STAKING_CONFIG_SEED],
        bump = staking_config.bump,
        has_one = vault
    )]
    pub staking_config: Account<'info, StakingConfig>,

    /// User's stake record (created on first stake, reused afterwards).
    #[account(
        init_if_needed,
        payer = user,
        space = StakeRecord::LEN,
        seeds = [STAKE_RECORD_SEED, staking_config.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub stake_record: Account<'info, StakeRecord>,

    /// Lamport vault.
    #[account(
        mut,
        seeds = [VAULT_SEED, staking_config.key().as_ref()],
        bump = staking_config.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    /// System program.
    pub system_program: Program<'info, System>,
}

/// Stake lamports for a fixed number of days.
///
/// # Arguments
/// * `ctx` - Stake accounts context
/// * `lock_duration_days` - Declared lock, in days
/// * `amount` - Lamports to deposit
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Stake>, lock_duration_days: u64, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let user = ctx.accounts.user.key();

    ledger::stake(
        &mut ctx.accounts.stake_record,
        &ctx.accounts.staking_config,
        user,
        lock_duration_days,
        amount,
        clock.unix_timestamp,
    )?;
    ctx.accounts.stake_record.bump = ctx.bumps.stake_record;

    let staking_config = &mut ctx.accounts.staking_config;
    staking_config.total_staked = staking_config
        .total_staked
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;
    staking_config.last_updated = clock.unix_timestamp;

    custody::deposit(
        &ctx.accounts.system_program,
        &ctx.accounts.user,
        &ctx.accounts.vault,
        amount,
    )?;

    msg!("Staked {} lamports for {} days", amount, lock_duration_days);
    msg!("Unlocks at: {}", ctx.accounts.stake_record.unlock_time()?);
    msg!("Total staked in pool: {}", ctx.accounts.staking_config.total_staked);

    emit!(Staked {
        user,
        amount,
        lock_duration_days,
    });

    Ok(())
}
