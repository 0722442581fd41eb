use anchor_lang::prelude::*;

/// Event emitted when a distribution is created and initialized
#[event]
pub struct DistributionCreated {
    /// The distribution account public key
    pub distribution: Pubkey,
    /// Merkle root committing to the beneficiary set
    pub commitment_root: [u8; 32],
    /// Currency mint of proceeds and payouts
    pub currency: Pubkey,
    /// Vault receiving the proceeds
    pub currency_vault: Pubkey,
    /// Owner of the distribution
    pub owner: Pubkey,
    /// Auction house program
    pub auction_house: Pubkey,
}

/// Event emitted when a claim word account is allocated ahead of a batch claim
#[event]
pub struct ClaimWordOpened {
    /// The distribution account public key
    pub distribution: Pubkey,
    /// Index of the opened word
    pub word_index: u64,
}

/// Event emitted when a beneficiary is paid
#[event]
pub struct BeneficiaryClaimed {
    /// The distribution account public key
    pub distribution: Pubkey,
    /// Committed index of the beneficiary
    pub index: u64,
    /// Beneficiary that was paid
    pub beneficiary: Pubkey,
    /// Amount transferred in this claim
    pub amount: u64,
    /// Total paid out of the distribution so far
    pub total_distributed: u64,
}

/// Event emitted when the auction is created
#[event]
pub struct AuctionCreated {
    /// The distribution account public key
    pub distribution: Pubkey,
    /// Identifier assigned by the auction house
    pub auction_id: u64,
    /// Auctioned token id
    pub token_id: u64,
    /// Auctioned token collection or mint
    pub token_contract: Pubkey,
    /// Initial reserve price
    pub reserve_price: u64,
    /// Auction duration in seconds
    pub duration: u64,
}

/// Event emitted when the auction approval is changed
#[event]
pub struct AuctionApprovalSet {
    /// The distribution account public key
    pub distribution: Pubkey,
    /// Identifier of the auction
    pub auction_id: u64,
    /// New approval state
    pub approved: bool,
}

/// Event emitted when the auction reserve price is changed
#[event]
pub struct AuctionReservePriceSet {
    /// The distribution account public key
    pub distribution: Pubkey,
    /// Identifier of the auction
    pub auction_id: u64,
    /// New reserve price
    pub reserve_price: u64,
}

/// Event emitted when the auction ends and proceeds are captured
#[event]
pub struct AuctionEnded {
    /// The distribution account public key
    pub distribution: Pubkey,
    /// Identifier of the auction
    pub auction_id: u64,
    /// Account that triggered the settlement
    pub caller: Pubkey,
    /// Vault balance captured as the distributable fund
    pub generated_fund: u64,
}

/// Event emitted when the auction is canceled
#[event]
pub struct AuctionCanceled {
    /// The distribution account public key
    pub distribution: Pubkey,
    /// Identifier of the auction
    pub auction_id: u64,
}
