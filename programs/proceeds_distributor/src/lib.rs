use anchor_lang::prelude::*;

declare_id!("7pXqYd3Jb1wT5pQhE9sVfN2kR8cLmA4uZ6gHyB3oWtDx");

pub mod auction;
pub mod constants;
pub mod engine;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use auction::AuctionParams;
use engine::ClaimRequest;
use instructions::*;

/**
 * Proceeds Distributor Program
 *
 * Runs a single auction and splits its proceeds between a fixed set of
 * beneficiaries committed to by a merkle root.
 *
 * Key Features:
 * - One distribution per commitment root at a predictable PDA
 * - Merkle proofs over (index, beneficiary, share_percent) leaves
 * - Anti-replay claim bitmap, 256 indices per account
 * - Fixed-point shares (PERCENT_SCALE = 1_000_000) rounded down
 * - Owner-driven auction lifecycle on an external auction house
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Distribution PDA: commitment, currency, owner, auction state, captured fund
 * - Currency Vault PDA: receives proceeds and pays beneficiaries
 * - Claim Word PDAs: sparse claim bitmap
 *
 * Workflow:
 * 1. Anyone creates the distribution for a commitment root
 * 2. Owner creates the auction and adjusts approval or reserve price
 * 3. Anyone ends the auction; the vault balance becomes the fund
 * 4. Beneficiaries claim their share with a merkle proof
 */
#[program]
pub mod proceeds_distributor {
    use super::*;

    /**
     * Creates and initializes a distribution
     *
     * @param ctx - Account context containing distribution, vault and mint accounts
     * @param commitment_root - Merkle root over the beneficiary entries
     * @param owner - Identity allowed to drive the auction lifecycle
     *
     * Access Control: Anyone; fails if the root already has a distribution
     */
    pub fn create_distribution(
        ctx: Context<CreateDistribution>,
        commitment_root: [u8; 32],
        owner: Pubkey,
    ) -> Result<()> {
        handle_create_distribution(ctx, commitment_root, owner)
    }

    /**
     * Allocates a claim word ahead of a batch claim
     *
     * Access Control: Anyone
     */
    pub fn open_claim_word(ctx: Context<OpenClaimWord>, word_index: u64) -> Result<()> {
        handle_open_claim_word(ctx, word_index)
    }

    /**
     * Returns whether an index has already claimed
     *
     * Access Control: Anyone
     */
    pub fn is_claimed(ctx: Context<IsClaimed>, index: u64) -> Result<bool> {
        handle_is_claimed(ctx, index)
    }

    /**
     * Claims a committed share of the proceeds
     *
     * @param index - Committed index of the beneficiary
     * @param beneficiary - Committed beneficiary
     * @param share_percent - Committed share, scaled by PERCENT_SCALE
     * @param proof - Merkle proof for the entry
     *
     * Access Control: Anyone with a valid proof; payout goes to the beneficiary
     */
    pub fn claim(
        ctx: Context<Claim>,
        index: u64,
        beneficiary: Pubkey,
        share_percent: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim(ctx, index, beneficiary, share_percent, proof)
    }

    /**
     * Claims several shares atomically
     *
     * Access Control: Anyone with valid proofs
     * Note: One failing request aborts the whole batch
     */
    pub fn batch_claim<'info>(
        ctx: Context<'_, '_, 'info, 'info, BatchClaim<'info>>,
        requests: Vec<ClaimRequest>,
    ) -> Result<()> {
        handle_batch_claim(ctx, requests)
    }

    /**
     * Creates the distribution's auction and returns its id
     *
     * Access Control: Owner only; at most once per distribution
     */
    pub fn create_auction<'info>(
        ctx: Context<'_, '_, 'info, 'info, CreateAuction<'info>>,
        params: AuctionParams,
    ) -> Result<u64> {
        handle_create_auction(ctx, params)
    }

    /**
     * Approves or unapproves the auction
     *
     * Access Control: Owner only
     */
    pub fn set_auction_approval<'info>(
        ctx: Context<'_, '_, 'info, 'info, SetAuctionApproval<'info>>,
        approved: bool,
    ) -> Result<()> {
        handle_set_auction_approval(ctx, approved)
    }

    /**
     * Changes the auction reserve price
     *
     * Access Control: Owner only
     */
    pub fn set_auction_reserve_price<'info>(
        ctx: Context<'_, '_, 'info, 'info, SetAuctionReservePrice<'info>>,
        reserve_price: u64,
    ) -> Result<()> {
        handle_set_auction_reserve_price(ctx, reserve_price)
    }

    /**
     * Ends the auction and captures the proceeds
     *
     * Access Control: Anyone
     */
    pub fn end_auction<'info>(ctx: Context<'_, '_, 'info, 'info, EndAuction<'info>>) -> Result<()> {
        handle_end_auction(ctx)
    }

    /**
     * Cancels the auction
     *
     * Access Control: Owner only
     */
    pub fn cancel_auction<'info>(
        ctx: Context<'_, '_, 'info, 'info, CancelAuction<'info>>,
    ) -> Result<()> {
        handle_cancel_auction(ctx)
    }
}
