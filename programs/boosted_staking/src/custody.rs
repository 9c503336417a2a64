//! Lamport custody through the vault PDA.
//!
//! Inbound deposits are plain System Program transfers signed by the payer.
//! Payouts go through [`VaultTransfer`], the ledger's [`ValueTransfer`]
//! implementation, signed with the vault seeds.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::ledger::ValueTransfer;
use crate::state::StakeRecord;

/// Move `amount` lamports from a signing `from` into the vault.
pub fn deposit<'info>(
    system_program: &Program<'info, System>,
    from: &Signer<'info>,
    vault: &SystemAccount<'info>,
    amount: u64,
) -> Result<()> {
    let cpi_ctx = CpiContext::new(
        system_program.to_account_info(),
        Transfer {
            from: from.to_account_info(),
            to: vault.to_account_info(),
        },
    );
    system_program::transfer(cpi_ctx, amount)
}

/// Pays out of the vault to a single recipient.
pub struct VaultTransfer<'a, 'info> {
    pub vault: AccountInfo<'info>,
    pub recipient: AccountInfo<'info>,
    /// Storage of the record being settled
    pub record: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
    /// Lamports that must stay in the vault after this payout
    pub reserved: u64,
}

/// Whether a vault holding `balance` can pay `amount` and still hold
/// `reserved` lamports on top of its rent-exempt minimum. With nothing
/// reserved the vault may also be drained to exactly zero.
pub fn covers(balance: u64, amount: u64, reserved: u64, rent_minimum: u64) -> bool {
    let Some(remaining) = balance.checked_sub(amount) else {
        return false;
    };
    if reserved == 0 && remaining == 0 {
        return true;
    }
    remaining >= reserved.saturating_add(rent_minimum)
}

impl<'a, 'info> VaultTransfer<'a, 'info> {
    /// Write `pending` to the record account so the in-flight state is what
    /// any re-entered instruction would load.
    fn commit(&self, pending: &StakeRecord) -> Result<()> {
        let mut data = self.record.try_borrow_mut_data()?;
        let mut dst: &mut [u8] = &mut data;
        pending.try_serialize(&mut dst)
    }

    fn can_pay(&self, amount: u64) -> bool {
        match Rent::get() {
            Ok(rent) => covers(
                self.vault.lamports(),
                amount,
                self.reserved,
                rent.minimum_balance(0),
            ),
            Err(_) => false,
        }
    }
}

impl<'a, 'info> ValueTransfer for VaultTransfer<'a, 'info> {
    fn transfer(&mut self, pending: &StakeRecord, to: &Pubkey, amount: u64) -> bool {
        if self.recipient.key != to {
            msg!("Payout recipient mismatch: {} != {}", self.recipient.key, to);
            return false;
        }
        if let Err(err) = self.commit(pending) {
            msg!("Failed to commit in-flight record: {}", err);
            return false;
        }
        if !self.can_pay(amount) {
            msg!(
                "Vault cannot pay {} lamports (balance {}, reserved {})",
                amount,
                self.vault.lamports(),
                self.reserved
            );
            return false;
        }

        let cpi_ctx = CpiContext::new_with_signer(
            self.system_program.clone(),
            Transfer {
                from: self.vault.clone(),
                to: self.recipient.clone(),
            },
            self.signer_seeds,
        );
        match system_program::transfer(cpi_ctx, amount) {
            Ok(()) => true,
            Err(err) => {
                msg!("Vault transfer failed: {}", err);
                false
            }
        }
    }
}
