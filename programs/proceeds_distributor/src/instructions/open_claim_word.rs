use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for allocating a claim word
 *
 * Single claims create their claim word on demand. Batch claims pass claim
 * words through remaining accounts and need them to exist beforehand; this
 * instruction allocates one.
 *
 * Access Control: Anyone (the payer funds the rent)
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(word_index: u64)]
pub struct OpenClaimWord<'info> {
    /// The distribution the word belongs to
    pub distribution: Account<'info, Distribution>,

    /// Claim word account (PDA)
    /// - Derived from: ["claim_word", distribution_key, word_index]
    #[account(
        init,
        payer = payer,
        space = ClaimWord::LEN,
        seeds = [
            CLAIM_WORD_SEED.as_bytes(),
            distribution.key().as_ref(),
            word_index.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub claim_word: Account<'info, ClaimWord>,

    /// Pays rent for the claim word
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_open_claim_word(ctx: Context<OpenClaimWord>, word_index: u64) -> Result<()> {
    ctx.accounts.distribution.assert_initialized()?;
    ctx.accounts.claim_word.word_index = word_index;

    emit_cpi!(ClaimWordOpened {
        distribution: ctx.accounts.distribution.key(),
        word_index,
    });

    Ok(())
}
