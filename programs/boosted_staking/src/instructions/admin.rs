/// Admin instruction handlers.
///
/// The four parameter setters. Each replaces one tunable unconditionally and
/// takes effect for every later operation, including stakes already open.
///
/// ## Security Guarantees
/// - All admin functions require signer == config.authority
/// - PDA validation ensures the singleton config

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::StakingConfig;

/// Accounts required for admin operations.
#[derive(Accounts)]
pub struct AdminControl<'info> {
    /// The administrator.
    /// SECURITY: Must be signer; compared against config.authority by the setters.
    pub authority: Signer<'info>,

    /// The config to modify.
    #[account(
        mut,
        seeds = [STAKING_CONFIG_SEED],
        bump = staking_config.bump
    )]
    pub staking_config: Account<'info, StakingConfig>,
}

/// Set the maximum lock duration, in days.
pub fn set_max_lock_duration_handler(ctx: Context<AdminControl>, days: u64) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let staking_config = &mut ctx.accounts.staking_config;
    let old = staking_config.max_lock_duration;

    staking_config.set_max_lock_duration(&authority, days, Clock::get()?.unix_timestamp)?;

    msg!(
        "Max lock duration updated: {}s -> {}s",
        old,
        staking_config.max_lock_duration
    );
    announce(staking_config, &authority);
    Ok(())
}

/// Set the booster cap (unscaled multiple).
pub fn set_max_lock_multiplier_handler(ctx: Context<AdminControl>, multiplier: u64) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let staking_config = &mut ctx.accounts.staking_config;
    let old = staking_config.max_lock_multiplier;

    staking_config.set_max_lock_multiplier(&authority, multiplier, Clock::get()?.unix_timestamp)?;

    msg!("Max lock multiplier updated: {}x -> {}x", old, multiplier);
    announce(staking_config, &authority);
    Ok(())
}

/// Set the claim delay, in days.
pub fn set_claim_delay_handler(ctx: Context<AdminControl>, days: u64) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let staking_config = &mut ctx.accounts.staking_config;
    let old = staking_config.claim_delay;

    staking_config.set_claim_delay(&authority, days, Clock::get()?.unix_timestamp)?;

    msg!(
        "Claim delay updated: {}s -> {}s",
        old,
        staking_config.claim_delay
    );
    announce(staking_config, &authority);
    Ok(())
}

/// Set the APY, in whole percent.
pub fn set_apy_handler(ctx: Context<AdminControl>, apy: u64) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let staking_config = &mut ctx.accounts.staking_config;
    let old = staking_config.apy;

    staking_config.set_apy(&authority, apy, Clock::get()?.unix_timestamp)?;

    msg!("APY updated: {}% -> {}%", old, apy);
    announce(staking_config, &authority);
    Ok(())
}

fn announce(staking_config: &StakingConfig, authority: &Pubkey) {
    msg!("Admin: {}", authority);
    emit!(staking_config.parameters());
}
