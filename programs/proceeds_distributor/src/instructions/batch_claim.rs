use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::engine::{self, ClaimRequest};
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{PayoutDestination, VaultPayout};

/**
 * Account context for claiming several shares in one instruction
 *
 * Remaining accounts carry, for every request in order:
 *   [claim_word covering request.index (writable), beneficiary token account (writable)]
 * Claim words must already exist (see open_claim_word). A word shared by
 * several requests may be repeated.
 *
 * The batch is all-or-nothing: the first failing request aborts it and no
 * claim of the batch takes effect.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct BatchClaim<'info> {
    /// The distribution being claimed from
    #[account(mut)]
    pub distribution: Account<'info, Distribution>,

    /// Currency vault holding the proceeds
    /// - Derived from: ["vault", distribution_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distribution.key().as_ref()],
        bump
    )]
    pub currency_vault: InterfaceAccount<'info, TokenAccount>,

    /// Currency mint, used for transfer_checked
    #[account(
        mint::token_program = token_program,
        constraint = currency_mint.key() == distribution.currency @ ProceedsDistributorError::CurrencyMismatch
    )]
    pub currency_mint: InterfaceAccount<'info, Mint>,

    /// Submitter of the batch
    pub payer: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_batch_claim<'info>(
    ctx: Context<'_, '_, 'info, 'info, BatchClaim<'info>>,
    requests: Vec<ClaimRequest>,
) -> Result<()> {
    require!(!requests.is_empty(), ProceedsDistributorError::EmptyBatch);
    require!(
        ctx.remaining_accounts.len() == requests.len() * 2,
        ErrorCode::AccountNotEnoughKeys
    );

    let distribution_key = ctx.accounts.distribution.key();
    let currency = ctx.accounts.distribution.currency;
    let token_program_key = ctx.accounts.token_program.key();

    // ===== LOAD PHASE =====

    let mut words = ClaimWordAccounts::load(
        &distribution_key,
        requests
            .iter()
            .zip(ctx.remaining_accounts.chunks(2))
            .map(|(request, accounts)| (request.index, &accounts[0])),
    )?;

    let destinations = ctx
        .remaining_accounts
        .chunks(2)
        .map(|accounts| PayoutDestination::load(&accounts[1], &currency, &token_program_key))
        .collect::<Result<Vec<_>>>()?;

    // ===== CLAIM PHASE =====

    let mut payout = VaultPayout {
        authority: ctx.accounts.distribution.to_account_info(),
        vault: ctx.accounts.currency_vault.to_account_info(),
        mint: ctx.accounts.currency_mint.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
        decimals: ctx.accounts.currency_mint.decimals,
        commitment_root: ctx.accounts.distribution.commitment_root,
        bump: ctx.accounts.distribution.bump,
        destinations,
    };

    let distribution = &mut ctx.accounts.distribution;
    let mut total_distributed = distribution.total_distributed;
    let receipts = engine::batch_claim(distribution, &mut words.ledger, &mut payout, &requests)?;

    // ===== PERSIST PHASE =====

    words.store()?;

    for receipt in receipts {
        total_distributed += receipt.amount;
        emit_cpi!(BeneficiaryClaimed {
            distribution: distribution_key,
            index: receipt.index,
            beneficiary: receipt.beneficiary,
            amount: receipt.amount,
            total_distributed,
        });
    }

    Ok(())
}
