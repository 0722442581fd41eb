//! Seam between a distribution and the external auction house.
//!
//! The lifecycle state machine only talks to `AuctionService` and
//! `FundBalance`; on-chain these are backed by CPIs into the auction house
//! program and the currency vault, tests substitute in-memory fakes.

pub mod cpi;

pub use cpi::*;

use anchor_lang::prelude::*;

/// Parameters of the single auction a distribution runs.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AuctionParams {
    /// Identifier of the auctioned asset within its collection
    pub token_id: u64,
    /// Collection or mint that `token_id` belongs to
    pub token_contract: Pubkey,
    /// Auction duration in seconds
    pub duration: u64,
    /// Minimum accepted bid in currency base units
    pub reserve_price: u64,
    /// Curator allowed to approve the auction
    pub curator: Pubkey,
    /// Curator fee in whole percent
    pub curator_fee_percent: u8,
}

/// Operations consumed from the auction house.
///
/// Each call either succeeds or aborts the enclosing instruction.
pub trait AuctionService {
    /// Hands the auctioned asset over to the auction house.
    fn grant_custody(&mut self, params: &AuctionParams) -> Result<()>;

    /// Creates the auction and returns its identifier.
    fn create_auction(&mut self, params: &AuctionParams, currency: &Pubkey) -> Result<u64>;

    fn set_auction_approval(&mut self, auction_id: u64, approved: bool) -> Result<()>;

    fn set_auction_reserve_price(&mut self, auction_id: u64, reserve_price: u64) -> Result<()>;

    fn end_auction(&mut self, auction_id: u64) -> Result<()>;

    fn cancel_auction(&mut self, auction_id: u64) -> Result<()>;
}

/// Read access to the distribution's currency balance.
pub trait FundBalance {
    fn current_balance(&mut self) -> Result<u64>;
}
