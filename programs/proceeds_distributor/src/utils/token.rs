use anchor_lang::prelude::*;
use anchor_spl::token_interface::{approve, transfer_checked, Approve, TokenAccount, TransferChecked};

use crate::constants::DISTRIBUTION_SEED;
use crate::engine::PayoutSink;
use crate::error::ProceedsDistributorError;

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(token_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(token_program, cpi_accounts)
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Delegates `amount` of a PDA-owned token account to `delegate`
pub fn approve_token_delegate<'a>(
    token_account: AccountInfo<'a>,
    delegate: AccountInfo<'a>,
    authority: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = Approve {
        to: token_account,
        delegate,
        authority,
    };

    approve(
        CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds),
        amount,
    )
}

/// Token account a payout may be sent to, keyed by its owner
pub struct PayoutDestination<'info> {
    pub owner: Pubkey,
    pub account: AccountInfo<'info>,
}

impl<'info> PayoutDestination<'info> {
    /// Reads a beneficiary token account passed outside the typed accounts.
    /// - Must belong to the token program and hold `currency`
    pub fn load(
        info: &AccountInfo<'info>,
        currency: &Pubkey,
        token_program: &Pubkey,
    ) -> Result<Self> {
        require_keys_eq!(
            *info.owner,
            *token_program,
            ProceedsDistributorError::BeneficiaryAccountMissing
        );

        let token_account = {
            let data = info.try_borrow_data()?;
            TokenAccount::try_deserialize(&mut data.as_ref())?
        };
        require_keys_eq!(
            token_account.mint,
            *currency,
            ProceedsDistributorError::CurrencyMismatch
        );

        Ok(Self {
            owner: token_account.owner,
            account: info.clone(),
        })
    }
}

/**
 * PayoutSink that pays from the distribution's currency vault
 *
 * Transfers are signed by the distribution PDA. A payout is only sent to a
 * destination token account owned by the beneficiary.
 */
pub struct VaultPayout<'info> {
    pub authority: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub decimals: u8,
    pub commitment_root: [u8; 32],
    pub bump: u8,
    pub destinations: Vec<PayoutDestination<'info>>,
}

impl<'info> PayoutSink for VaultPayout<'info> {
    fn pay(&mut self, beneficiary: &Pubkey, amount: u64) -> Result<()> {
        let destination = self
            .destinations
            .iter()
            .find(|destination| destination.owner == *beneficiary)
            .ok_or(ProceedsDistributorError::BeneficiaryAccountMissing)?;

        let bump = [self.bump];
        let seeds: &[&[u8]] = &[DISTRIBUTION_SEED.as_bytes(), &self.commitment_root, &bump];

        transfer_token(
            self.authority.clone(),
            self.vault.clone(),
            destination.account.clone(),
            self.mint.clone(),
            self.token_program.clone(),
            amount,
            self.decimals,
            Some(&[seeds]),
        )
        .map_err(|error| {
            msg!("Payout of {} to {} failed: {}", amount, beneficiary, error);
            error!(ProceedsDistributorError::TransferFailed)
        })
    }
}
