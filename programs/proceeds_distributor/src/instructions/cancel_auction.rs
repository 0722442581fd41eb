use anchor_lang::prelude::*;
use crate::auction::AuctionHouseCpi;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for canceling the auction
 *
 * Abandons the auction on the auction house. No proceeds are captured and
 * the distribution stays without a fund. Remaining accounts are forwarded.
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CancelAuction<'info> {
    /// The distribution running the auction
    #[account(mut)]
    pub distribution: Account<'info, Distribution>,

    /// Auction house program bound at initialization
    /// CHECK: Address is pinned to distribution.auction_house
    #[account(
        executable,
        address = distribution.auction_house @ ProceedsDistributorError::AuctionHouseMismatch
    )]
    pub auction_house: UncheckedAccount<'info>,

    /// Distribution owner
    pub owner: Signer<'info>,
}

pub fn handle_cancel_auction<'info>(
    ctx: Context<'_, '_, 'info, 'info, CancelAuction<'info>>,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();

    let mut service = AuctionHouseCpi::new(
        ctx.accounts.auction_house.to_account_info(),
        ctx.accounts.distribution.to_account_info(),
        ctx.remaining_accounts,
        ctx.accounts.distribution.commitment_root,
        ctx.accounts.distribution.bump,
    );

    let distribution = &mut ctx.accounts.distribution;
    distribution.cancel_auction(&owner, &mut service)?;

    emit_cpi!(AuctionCanceled {
        distribution: distribution.key(),
        auction_id: distribution.auction_id,
    });

    Ok(())
}
