use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::engine::{self, ClaimRequest};
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{PayoutDestination, VaultPayout};

/**
 * Account context for claiming a share of the proceeds
 *
 * Pays a beneficiary its committed percentage of generated_fund after
 * checking the inclusion proof and the claim bitmap.
 *
 * Access Control: Anyone holding a valid proof may submit the claim; the
 * payout always goes to a token account owned by the committed beneficiary
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(index: u64)]
pub struct Claim<'info> {
    /// The distribution being claimed from
    /// - Updated with the running total_distributed
    #[account(mut)]
    pub distribution: Account<'info, Distribution>,

    /// Claim word covering `index`
    /// - Derived from: ["claim_word", distribution_key, index / 256]
    /// - Created on the first claim landing in this word
    #[account(
        init_if_needed,
        payer = payer,
        space = ClaimWord::LEN,
        seeds = [
            CLAIM_WORD_SEED.as_bytes(),
            distribution.key().as_ref(),
            (index / CLAIM_WORD_BITS).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub claim_word: Account<'info, ClaimWord>,

    /// Currency vault holding the proceeds
    /// - Derived from: ["vault", distribution_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distribution.key().as_ref()],
        bump
    )]
    pub currency_vault: InterfaceAccount<'info, TokenAccount>,

    /// Beneficiary's token account
    /// - Must be for the distribution's currency
    /// - Its owner must be the committed beneficiary
    #[account(
        mut,
        token::mint = distribution.currency,
        token::token_program = token_program,
    )]
    pub beneficiary_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Currency mint, used for transfer_checked
    #[account(
        mint::token_program = token_program,
        constraint = currency_mint.key() == distribution.currency @ ProceedsDistributorError::CurrencyMismatch
    )]
    pub currency_mint: InterfaceAccount<'info, Mint>,

    /// Submitter of the claim, pays rent for a new claim word
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a claim
 *
 * @param ctx - The account context containing all required accounts
 * @param index - Committed index of the beneficiary
 * @param beneficiary - Committed beneficiary
 * @param share_percent - Committed share, scaled by PERCENT_SCALE
 * @param proof - Sibling hashes from the leaf up to the root
 *
 * Validation Process:
 * 1. Auction has ended so generated_fund is final
 * 2. Index has not claimed yet
 * 3. (index, beneficiary, share_percent) is committed to by the root
 * 4. Index is marked claimed, then the share is transferred
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    index: u64,
    beneficiary: Pubkey,
    share_percent: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let request = ClaimRequest {
        index,
        beneficiary,
        share_percent,
        proof,
    };
    let (word_index, _) = claim_position(index);
    let distribution_key = ctx.accounts.distribution.key();

    let mut payout = VaultPayout {
        authority: ctx.accounts.distribution.to_account_info(),
        vault: ctx.accounts.currency_vault.to_account_info(),
        mint: ctx.accounts.currency_mint.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
        decimals: ctx.accounts.currency_mint.decimals,
        commitment_root: ctx.accounts.distribution.commitment_root,
        bump: ctx.accounts.distribution.bump,
        destinations: vec![PayoutDestination {
            owner: ctx.accounts.beneficiary_token_account.owner,
            account: ctx.accounts.beneficiary_token_account.to_account_info(),
        }],
    };

    // A freshly created word carries word_index 0 until set here.
    let claim_word = &mut ctx.accounts.claim_word;
    claim_word.word_index = word_index;

    let mut ledger = ClaimBitmap::new();
    ledger.insert_word(word_index, claim_word.bits);

    let distribution = &mut ctx.accounts.distribution;
    let receipt = engine::claim(distribution, &mut ledger, &mut payout, &request)?;
    let total_distributed = distribution.total_distributed;

    ctx.accounts.claim_word.bits = ledger.word(word_index);

    emit_cpi!(BeneficiaryClaimed {
        distribution: distribution_key,
        index: receipt.index,
        beneficiary: receipt.beneficiary,
        amount: receipt.amount,
        total_distributed,
    });

    Ok(())
}
