use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};
use crate::auction::{AuctionHouseCpi, AuctionParams, CustodyAccounts};
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating the distribution's auction
 *
 * The distribution holds the auctioned asset in a token account it owns.
 * Creating the auction delegates that asset to the auction house authority
 * and asks the auction house to open an auction settling in the
 * distribution's currency.
 *
 * Remaining accounts are forwarded to the auction house's create_auction.
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(params: AuctionParams)]
pub struct CreateAuction<'info> {
    /// The distribution running the auction
    #[account(mut)]
    pub distribution: Account<'info, Distribution>,

    /// Token account holding the auctioned asset
    /// - Owned by the distribution PDA
    /// - Must hold the token named by params.token_contract
    #[account(
        mut,
        token::authority = distribution,
        token::token_program = token_program,
        constraint = asset_account.mint == params.token_contract @ ProceedsDistributorError::AssetMintMismatch
    )]
    pub asset_account: InterfaceAccount<'info, TokenAccount>,

    /// Auction house program bound at initialization
    /// CHECK: Address is pinned to distribution.auction_house
    #[account(
        executable,
        address = distribution.auction_house @ ProceedsDistributorError::AuctionHouseMismatch
    )]
    pub auction_house: UncheckedAccount<'info>,

    /// Authority of the auction house that takes custody of the asset
    /// CHECK: Only used as the approve delegate; the auction house validates it
    pub auction_house_authority: UncheckedAccount<'info>,

    /// Distribution owner
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_create_auction<'info>(
    ctx: Context<'_, '_, 'info, 'info, CreateAuction<'info>>,
    params: AuctionParams,
) -> Result<u64> {
    let owner = ctx.accounts.owner.key();

    let mut service = AuctionHouseCpi::new(
        ctx.accounts.auction_house.to_account_info(),
        ctx.accounts.distribution.to_account_info(),
        ctx.remaining_accounts,
        ctx.accounts.distribution.commitment_root,
        ctx.accounts.distribution.bump,
    )
    .with_custody(CustodyAccounts {
        asset_account: ctx.accounts.asset_account.to_account_info(),
        delegate: ctx.accounts.auction_house_authority.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
    });

    let distribution = &mut ctx.accounts.distribution;
    let auction_id = distribution.create_auction(&owner, &mut service, &params)?;

    emit_cpi!(AuctionCreated {
        distribution: distribution.key(),
        auction_id,
        token_id: params.token_id,
        token_contract: params.token_contract,
        reserve_price: params.reserve_price,
        duration: params.duration,
    });

    Ok(auction_id)
}
