use anchor_lang::prelude::*;
use crate::auction::AuctionHouseCpi;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for changing the auction's approval
 *
 * Pure delegation to the auction house, which rejects the change once the
 * auction has started. Remaining accounts are forwarded.
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetAuctionApproval<'info> {
    /// The distribution running the auction
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

pub fn handle_set_auction_approval<'info>(
    ctx: Context<'_, '_, 'info, 'info, SetAuctionApproval<'info>>,
    approved: bool,
) -> Result<()> {
    let distribution = &ctx.accounts.distribution;

    let mut service = AuctionHouseCpi::new(
        ctx.accounts.auction_house.to_account_info(),
        distribution.to_account_info(),
        ctx.remaining_accounts,
        distribution.commitment_root,
        distribution.bump,
    );

    distribution.set_auction_approval(&ctx.accounts.owner.key(), &mut service, approved)?;

    emit_cpi!(AuctionApprovalSet {
        distribution: distribution.key(),
        auction_id: distribution.auction_id,
        approved,
    });

    Ok(())
}
