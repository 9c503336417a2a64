//! Read-only instructions.
//!
//! Each returns its value through Anchor return data and mutates nothing.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{StakeRecord, StakingConfig};

/// Accounts for reading an owner's stake.
#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct ViewStake<'info> {
    #[account(
        seeds = [STAKING_CONFIG_SEED],
        bump = staking_config.bump
    )]
    pub staking_config: Account<'info, StakingConfig>,

    /// The owner's record PDA. It may not exist yet.
    /// CHECK: Address pinned by seeds; contents parsed only when owned by this program
    #[account(
        seeds = [STAKE_RECORD_SEED, staking_config.key().as_ref(), owner.as_ref()],
        bump
    )]
    pub stake_record: UncheckedAccount<'info>,
}

/// Accounts for pure parameter reads.
#[derive(Accounts)]
pub struct ViewParameters<'info> {
    #[account(
        seeds = [STAKING_CONFIG_SEED],
        bump = staking_config.bump
    )]
    pub staking_config: Account<'info, StakingConfig>,
}

/// Lamports currently staked by `owner`; zero if never staked.
pub fn get_staked_amount_handler(ctx: Context<ViewStake>, _owner: Pubkey) -> Result<u64> {
    let amount = load_record(&ctx.accounts.stake_record)?
        .map(|record| record.amount)
        .unwrap_or(0);
    Ok(amount)
}

/// Reward the next claim by `owner` would pay under current parameters.
pub fn calculate_reward_handler(ctx: Context<ViewStake>, _owner: Pubkey) -> Result<u64> {
    let Some(record) = load_record(&ctx.accounts.stake_record)? else {
        return Ok(0);
    };
    Ok(ctx.accounts.staking_config.reward_for(&record)?)
}

/// Booster multiplier for `lock_duration_days`, scaled by 1e5.
pub fn calculate_booster_multiplier_handler(
    ctx: Context<ViewParameters>,
    lock_duration_days: u64,
) -> Result<u128> {
    Ok(ctx.accounts.staking_config.booster_multiplier(lock_duration_days)?)
}

/// Parse the record behind `info`, or `None` if it was never created.
pub(crate) fn load_record(info: &AccountInfo) -> Result<Option<StakeRecord>> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    let mut src: &[u8] = &data;
    Ok(Some(StakeRecord::try_deserialize(&mut src)?))
}
