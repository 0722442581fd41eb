use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/**
 * Account context for querying the claim status of an index
 *
 * The claim word may not exist yet, in which case nothing in its range has
 * claimed.
 */
#[derive(Accounts)]
#[instruction(index: u64)]
pub struct IsClaimed<'info> {
    /// The distribution being queried
    pub distribution: Account<'info, Distribution>,

    /// Claim word covering `index`
    /// CHECK: Address is pinned by seeds; the account may be uninitialized
    #[account(
        seeds = [
            CLAIM_WORD_SEED.as_bytes(),
            distribution.key().as_ref(),
            (index / CLAIM_WORD_BITS).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub claim_word: UncheckedAccount<'info>,
}

/// Returns whether `index` has already claimed.
pub fn handle_is_claimed(ctx: Context<IsClaimed>, index: u64) -> Result<bool> {
    ctx.accounts.distribution.assert_initialized()?;

    let info = ctx.accounts.claim_word.to_account_info();
    if info.data_is_empty() {
        return Ok(false);
    }

    let (word_index, _) = claim_position(index);
    let word = ClaimWord::load(&info, &ctx.accounts.distribution.key(), word_index)?;
    Ok(word.is_set(index))
}
