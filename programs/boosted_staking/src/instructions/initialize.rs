/// Initialize instruction handler.
///
/// Creates the global staking config and binds the custody vault.
///
/// ## Security Guarantees
/// - Config is a singleton PDA; a second initialize fails at account creation
/// - Vault is a PDA derived from the config, so it cannot be swapped later
/// - All four tunables validated non-zero before storage

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::StakingConfig;

/// Accounts required for initialization.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The administrator.
    /// SECURITY: This becomes the only key allowed to change parameters.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The global config account to be created.
    #[account(
        init,
        payer = authority,
        space = StakingConfig::LEN,
        seeds = [STAKING_CONFIG_SEED],
        bump
    )]
    pub staking_config: Account<'info, StakingConfig>,

    /// Lamport vault. Only its address is recorded here; it comes into
    /// existence on the first deposit.
    #[account(
        seeds = [VAULT_SEED, staking_config.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,
}

/// Initialize the staking config.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
/// * `max_lock_days` - Longest allowed lock, in days
/// * `max_lock_multiplier` - Booster cap (unscaled)
/// * `claim_delay_days` - Minimum days between claims
/// * `apy` - Yield rate in whole percent
///
/// # Returns
/// Result indicating success or error
pub fn handler(
    ctx: Context<Initialize>,
    max_lock_days: u64,
    max_lock_multiplier: u64,
    claim_delay_days: u64,
    apy: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let staking_config = &mut ctx.accounts.staking_config;

    staking_config.configure(
        ctx.accounts.authority.key(),
        max_lock_days,
        max_lock_multiplier,
        claim_delay_days,
        apy,
        clock.unix_timestamp,
    )?;
    staking_config.vault = ctx.accounts.vault.key();
    staking_config.bump = ctx.bumps.staking_config;
    staking_config.vault_bump = ctx.bumps.vault;

    msg!("Boosted Staking initialized");
    msg!("Admin: {}", staking_config.authority);
    msg!("Vault: {}", staking_config.vault);
    msg!(
        "Params - max lock: {}s, max multiplier: {}x, claim delay: {}s, APY: {}%",
        staking_config.max_lock_duration,
        staking_config.max_lock_multiplier,
        staking_config.claim_delay,
        staking_config.apy
    );

    emit!(staking_config.parameters());

    Ok(())
}
