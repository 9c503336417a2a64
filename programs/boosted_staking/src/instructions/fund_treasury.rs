/// Fund treasury instruction handler.
///
/// Deposits lamports into the vault to back reward payouts.
///
/// ## Security Guarantees
/// - Vault validated against the config's stored PDA
/// - Anyone can fund (no admin restriction)

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::custody;
use crate::error::StakingError;
use crate::events::TreasuryFunded;
use crate::state::StakingConfig;

/// Accounts required for funding the vault.
#[derive(Accounts)]
pub struct FundTreasury<'info> {
    /// The funder (permissionless).
    #[account(mut)]
    pub funder: Signer<'info>,

    /// The global config.
    #[account(
        seeds = [STAKING_CONFIG_SEED],
        bump = staking_config.bump,
        has_one = vault
    )]
    pub staking_config: Account<'info, StakingConfig>,

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

/// Fund the vault with reward lamports.
///
/// # Arguments
/// * `ctx` - FundTreasury accounts context
/// * `amount` - Lamports to deposit
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::MustStakeNonZeroAmount);

    custody::deposit(
        &ctx.accounts.system_program,
        &ctx.accounts.funder,
        &ctx.accounts.vault,
        amount,
    )?;

    let vault_balance = ctx.accounts.vault.lamports();

    msg!("Vault funded with {} lamports", amount);
    msg!("New vault balance: {}", vault_balance);
    msg!("Funder: {}", ctx.accounts.funder.key());

    emit!(TreasuryFunded {
        funder: ctx.accounts.funder.key(),
        amount,
        vault_balance,
    });

    Ok(())
}
