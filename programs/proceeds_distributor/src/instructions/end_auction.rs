use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;
use crate::auction::AuctionHouseCpi;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for ending the auction
 *
 * Settles the auction on the auction house, which pays the proceeds into the
 * currency vault, then captures the vault balance as generated_fund.
 * Remaining accounts are forwarded to the auction house's end_auction.
 *
 * Access Control: Anyone
 */
#[event_cpi]
#[derive(Accounts)]
pub struct EndAuction<'info> {
    /// The distribution running the auction
    #[account(mut)]
    pub distribution: Account<'info, Distribution>,

    /// Currency vault receiving the proceeds
    #[account(
        mut,
        address = distribution.currency_vault @ ProceedsDistributorError::CurrencyMismatch
    )]
    pub currency_vault: InterfaceAccount<'info, TokenAccount>,

    /// Auction house program bound at initialization
    /// CHECK: Address is pinned to distribution.auction_house
    #[account(
        executable,
        address = distribution.auction_house @ ProceedsDistributorError::AuctionHouseMismatch
    )]
    pub auction_house: UncheckedAccount<'info>,

    /// Account triggering the settlement
    pub caller: Signer<'info>,
}

pub fn handle_end_auction<'info>(
    ctx: Context<'_, '_, 'info, 'info, EndAuction<'info>>,
) -> Result<()> {
    let mut service = AuctionHouseCpi::new(
        ctx.accounts.auction_house.to_account_info(),
        ctx.accounts.distribution.to_account_info(),
        ctx.remaining_accounts,
        ctx.accounts.distribution.commitment_root,
        ctx.accounts.distribution.bump,
    );

    let distribution = &mut ctx.accounts.distribution;
    let vault = &mut ctx.accounts.currency_vault;
    let generated_fund = distribution.end_auction(&mut service, vault)?;

    msg!("Auction {} ended, captured {}", distribution.auction_id, generated_fund);

    emit_cpi!(AuctionEnded {
        distribution: distribution.key(),
        auction_id: distribution.auction_id,
        caller: ctx.accounts.caller.key(),
        generated_fund,
    });

    Ok(())
}
