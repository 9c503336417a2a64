//! Claim rewards instruction handler.
//!
//! Pays the booster-weighted reward out of the vault without unstaking.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::custody::VaultTransfer;
use crate::error::StakingError;
use crate::events::RewardClaimed;
use crate::ledger;
use crate::state::{StakeRecord, StakingConfig};

/// Accounts required for claiming rewards.
#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    /// The user claiming rewards.
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

    /// Lamport vault paying the reward.
    #[account(
        mut,
        seeds = [VAULT_SEED, staking_config.key().as_ref()],
        bump = staking_config.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    /// System program.
    pub system_program: Program<'info, System>,
}

/// Claim one reward.
///
/// The amount depends only on the principal, the declared lock and the
/// current parameters, so every claim after each claim delay pays the same.
///
/// # Arguments
/// * `ctx` - ClaimRewards accounts context
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<ClaimRewards>) -> Result<()> {
    let clock = Clock::get()?;
    let user = ctx.accounts.user.key();

    let config_key = ctx.accounts.staking_config.key();
    let vault_bump = [ctx.accounts.staking_config.vault_bump];
    let seeds: &[&[u8]] = &[VAULT_SEED, config_key.as_ref(), &vault_bump];
    let signer_seeds = &[seeds];

    let reserved = ctx.accounts.staking_config.total_staked;

    let mut payout = VaultTransfer {
        vault: ctx.accounts.vault.to_account_info(),
        recipient: ctx.accounts.user.to_account_info(),
        record: ctx.accounts.stake_record.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
        signer_seeds,
        reserved,
    };

    let reward = ledger::claim_rewards(
        &mut ctx.accounts.stake_record,
        &ctx.accounts.staking_config,
        &user,
        clock.unix_timestamp,
        &mut payout,
    )?;

    let staking_config = &mut ctx.accounts.staking_config;
    staking_config.total_rewards_paid = staking_config
        .total_rewards_paid
        .checked_add(reward)
        .ok_or(StakingError::MathOverflow)?;
    staking_config.last_updated = clock.unix_timestamp;

    msg!("Claimed {} lamports of rewards", reward);
    msg!("Total rewards paid from pool: {}", staking_config.total_rewards_paid);
    msg!("Vault balance: {}", ctx.accounts.vault.lamports());

    emit!(RewardClaimed {
        user,
        amount: reward,
    });

    Ok(())
}
