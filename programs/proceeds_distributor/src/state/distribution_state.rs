use anchor_lang::prelude::*;

use crate::auction::{AuctionParams, AuctionService, FundBalance};
use crate::constants::*;
use crate::error::ProceedsDistributorError;

/// Where a distribution stands relative to its single auction
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuctionPhase {
    /// No auction created yet
    #[default]
    None,
    /// Auction created; approval and reserve price may still change
    Created,
    /// Auction settled and proceeds captured into generated_fund
    Ended,
    /// Auction abandoned; no proceeds will be captured
    Canceled,
}

/**
 * Main distribution state account
 *
 * One distribution per commitment root. It binds the beneficiary commitment,
 * the payout currency, the owner and the auction house, and tracks the single
 * auction whose proceeds are distributed.
 *
 * Derivation: ["distribution", commitment_root]
 *
 * Lifecycle:
 * 1. Created and initialized by create_distribution
 * 2. Owner creates and configures the auction
 * 3. Anyone ends the auction; the vault balance becomes generated_fund
 * 4. Beneficiaries claim their committed share of generated_fund
 * 5. Never closed; unclaimed shares and rounding dust stay in the vault
 */
#[account]
#[derive(Default, Debug)]
pub struct Distribution {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Set once by initialize; every other operation requires it
    pub initialized: bool,

    /// Merkle root over (index, beneficiary, share_percent) leaves
    pub commitment_root: [u8; 32],

    /// Mint used for both auction proceeds and payouts
    pub currency: Pubkey,

    /// PDA token account holding the proceeds
    /// - Derived from: ["vault", distribution_key]
    pub currency_vault: Pubkey,

    /// Identity allowed to drive the auction lifecycle
    pub owner: Pubkey,

    /// Program id of the auction house
    pub auction_house: Pubkey,

    /// Amount available to distribute
    /// - Zero until the auction ends, then frozen
    pub generated_fund: u64,

    /// Sum of every payout made so far
    pub total_distributed: u64,

    /// Auction identifier assigned by the auction house; zero means none
    pub auction_id: u64,

    /// Lifecycle phase of the auction
    pub auction_phase: AuctionPhase,
}

/// Predicts the distribution address for a commitment root.
pub fn find_distribution_address(commitment_root: &[u8; 32]) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[DISTRIBUTION_SEED.as_bytes(), commitment_root.as_ref()],
        &crate::ID,
    )
}

impl Distribution {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Distribution>();

    /// Binds the immutable parameters. Runs exactly once.
    pub fn initialize(
        &mut self,
        bump: u8,
        commitment_root: [u8; 32],
        currency: Pubkey,
        currency_vault: Pubkey,
        owner: Pubkey,
        auction_house: Pubkey,
    ) -> Result<()> {
        require!(!self.initialized, ProceedsDistributorError::InitializationReplay);
        require!(
            commitment_root != [0; 32],
            ProceedsDistributorError::InvalidCommitmentRoot
        );
        require!(
            owner != Pubkey::default(),
            ProceedsDistributorError::InvalidOwner
        );

        self.bump = bump;
        self.initialized = true;
        self.commitment_root = commitment_root;
        self.currency = currency;
        self.currency_vault = currency_vault;
        self.owner = owner;
        self.auction_house = auction_house;
        Ok(())
    }

    pub fn assert_initialized(&self) -> Result<()> {
        require!(self.initialized, ProceedsDistributorError::NotInitialized);
        Ok(())
    }

    /// Single owner check shared by every privileged operation.
    pub fn authorize(&self, caller: &Pubkey) -> Result<()> {
        self.assert_initialized()?;
        require_keys_eq!(*caller, self.owner, ProceedsDistributorError::NotAuthorized);
        Ok(())
    }

    pub fn fund_available(&self) -> bool {
        self.auction_phase == AuctionPhase::Ended
    }

    /// Amount left in the vault that no claim has paid out yet.
    pub fn undistributed(&self) -> u64 {
        self.generated_fund.saturating_sub(self.total_distributed)
    }

    fn require_open_auction(&self) -> Result<()> {
        require!(self.auction_id != 0, ProceedsDistributorError::AuctionNotCreated);
        require!(
            self.auction_phase == AuctionPhase::Created,
            ProceedsDistributorError::AuctionClosed
        );
        Ok(())
    }

    /// Creates the one auction this distribution will ever run.
    pub fn create_auction<S: AuctionService>(
        &mut self,
        caller: &Pubkey,
        service: &mut S,
        params: &AuctionParams,
    ) -> Result<u64> {
        self.authorize(caller)?;
        require!(
            self.auction_id == 0 && self.auction_phase == AuctionPhase::None,
            ProceedsDistributorError::AuctionAlreadyCreated
        );

        // Claim the slot before handing control to the auction house.
        self.auction_phase = AuctionPhase::Created;

        let created = service
            .grant_custody(params)
            .and_then(|()| service.create_auction(params, &self.currency));

        let auction_id = match created {
            Ok(auction_id) if auction_id != 0 => auction_id,
            Ok(_) => {
                self.auction_phase = AuctionPhase::None;
                return err!(ProceedsDistributorError::InvalidAuctionId);
            }
            Err(error) => {
                self.auction_phase = AuctionPhase::None;
                return Err(error);
            }
        };

        self.auction_id = auction_id;
        Ok(auction_id)
    }

    /// Rejected with `AuctionClosed` once the auction has ended or been
    /// canceled, without consulting the auction house.
    pub fn set_auction_approval<S: AuctionService>(
        &self,
        caller: &Pubkey,
        service: &mut S,
        approved: bool,
    ) -> Result<()> {
        self.authorize(caller)?;
        self.require_open_auction()?;
        service.set_auction_approval(self.auction_id, approved)
    }

    /// Same closed-auction rule as `set_auction_approval`.
    pub fn set_auction_reserve_price<S: AuctionService>(
        &self,
        caller: &Pubkey,
        service: &mut S,
        reserve_price: u64,
    ) -> Result<()> {
        self.authorize(caller)?;
        self.require_open_auction()?;
        service.set_auction_reserve_price(self.auction_id, reserve_price)
    }

    /// Settles the auction and snapshots the vault balance as the fund.
    ///
    /// Not restricted to the owner. Runs once: a settled or canceled
    /// auction is rejected so generated_fund is never overwritten.
    pub fn end_auction<S: AuctionService, B: FundBalance>(
        &mut self,
        service: &mut S,
        vault: &mut B,
    ) -> Result<u64> {
        self.assert_initialized()?;
        self.require_open_auction()?;

        service.end_auction(self.auction_id)?;
        let balance = vault.current_balance()?;

        self.generated_fund = balance;
        self.auction_phase = AuctionPhase::Ended;
        Ok(balance)
    }

    pub fn cancel_auction<S: AuctionService>(
        &mut self,
        caller: &Pubkey,
        service: &mut S,
    ) -> Result<()> {
        self.authorize(caller)?;
        self.require_open_auction()?;

        service.cancel_auction(self.auction_id)?;
        self.auction_phase = AuctionPhase::Canceled;
        Ok(())
    }
}
