use crate::constants::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new distribution
 *
 * This instruction is the distribution factory:
 * - Creates the distribution PDA at an address derived only from the commitment root
 * - Creates the currency vault PDA that receives auction proceeds
 * - Initializes the distribution with its root, currency, owner and auction house
 *
 * A second call with the same commitment root fails because the distribution
 * PDA already exists, so each commitment can only be distributed once.
 *
 * Access Control: Anyone may pay for creation; the owner is an argument
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(commitment_root: [u8; 32])]
pub struct CreateDistribution<'info> {
    /// The distribution account (PDA)
    /// - Derived from: ["distribution", commitment_root]
    #[account(
        init,
        payer = payer,
        space = Distribution::LEN,
        seeds = [DISTRIBUTION_SEED.as_bytes(), commitment_root.as_ref()],
        bump
    )]
    pub distribution: Account<'info, Distribution>,

    /// Currency vault (PDA) that receives proceeds and pays beneficiaries
    /// - Controlled by the distribution PDA as token authority
    /// - Derived from: ["vault", distribution_key]
    #[account(
        init,
        token::mint = currency_mint,
        token::authority = distribution,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), distribution.key().as_ref()],
        bump,
        payer = payer,
    )]
    pub currency_vault: InterfaceAccount<'info, TokenAccount>,

    /// Mint of the auction currency
    #[account(
        mint::token_program = token_program,
    )]
    pub currency_mint: InterfaceAccount<'info, Mint>,

    /// Auction house program the distribution will run its auction on
    /// CHECK: Only its key is stored; it must be an executable program
    #[account(executable)]
    pub auction_house: UncheckedAccount<'info>,

    /// Pays rent for the new accounts
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates and initializes a distribution
 *
 * @param ctx - The account context containing all required accounts
 * @param commitment_root - Merkle root over (index, beneficiary, share_percent) leaves
 * @param owner - Identity allowed to drive the auction lifecycle
 */
pub fn handle_create_distribution(
    ctx: Context<CreateDistribution>,
    commitment_root: [u8; 32],
    owner: Pubkey,
) -> Result<()> {
    let currency = ctx.accounts.currency_mint.key();
    let currency_vault = ctx.accounts.currency_vault.key();
    let auction_house = ctx.accounts.auction_house.key();

    let distribution = &mut ctx.accounts.distribution;
    distribution.initialize(
        ctx.bumps.distribution,
        commitment_root,
        currency,
        currency_vault,
        owner,
        auction_house,
    )?;

    emit_cpi!(DistributionCreated {
        distribution: distribution.key(),
        commitment_root,
        currency,
        currency_vault,
        owner,
        auction_house,
    });

    Ok(())
}
