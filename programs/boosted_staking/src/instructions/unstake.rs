//! Unstake instruction handler.
//!
//! Returns the full principal once the declared lock has elapsed.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::custody::VaultTransfer;
use crate::error::StakingError;
use crate::events::Unstaked;
use crate::ledger;
use crate::state::{StakeRecord, StakingConfig};

/// Accounts required for unstaking.
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// The user withdrawing their stake.
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

    /// User's stake record.
    #[account(
        mut,
        seeds = [STAKE_RECORD_SEED, staking_config.key().as_ref(), user.key().as_ref()],
        bump = stake_record.bump,
        constraint = stake_record.owner == user.key() @ StakingError::NotStaking
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

/// Withdraw the whole stake. No reward is paid on unstake.
///
/// # Arguments
/// * `ctx` - Unstake accounts context
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Unstake>) -> Result<()> {
    let clock = Clock::get()?;
    let user = ctx.accounts.user.key();

    let config_key = ctx.accounts.staking_config.key();
    let vault_bump = [ctx.accounts.staking_config.vault_bump];
    let seeds: &[&[u8]] = &[VAULT_SEED, config_key.as_ref(), &vault_bump];
    let signer_seeds = &[seeds];

    let total_staked = ctx.accounts.staking_config.total_staked;
    let reserved = total_staked.saturating_sub(ctx.accounts.stake_record.amount);

    let mut payout = VaultTransfer {
        vault: ctx.accounts.vault.to_account_info(),
        recipient: ctx.accounts.user.to_account_info(),
        record: ctx.accounts.stake_record.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
        signer_seeds,
        reserved,
    };

    let amount = ledger::unstake(
        &mut ctx.accounts.stake_record,
        &user,
        clock.unix_timestamp,
        &mut payout,
    )?;

    let staking_config = &mut ctx.accounts.staking_config;
    staking_config.total_staked = staking_config
        .total_staked
        .checked_sub(amount)
        .ok_or(StakingError::MathOverflow)?;
    staking_config.last_updated = clock.unix_timestamp;

    msg!("Unstaked {} lamports", amount);
    msg!("Total staked in pool: {}", staking_config.total_staked);

    emit!(Unstaked { user, amount });

    Ok(())
}
