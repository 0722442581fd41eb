use anchor_lang::prelude::*;

#[error_code]
pub enum ProceedsDistributorError {
    // Access control errors
    #[msg("Only the distribution owner can perform this action")]
    NotAuthorized,

    // Initialization errors
    #[msg("Distribution has not been initialized")]
    NotInitialized,
    #[msg("Distribution has already been initialized")]
    InitializationReplay,
    #[msg("Invalid commitment root")]
    InvalidCommitmentRoot,
    #[msg("Distribution owner must be a non-zero key")]
    InvalidOwner,

    // Claim errors
    #[msg("Index has already claimed")]
    AlreadyClaimed,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Auction proceeds have not been captured yet")]
    FundNotGenerated,
    #[msg("Batch contains no claims")]
    EmptyBatch,
    #[msg("Claim word account does not cover this index")]
    ClaimWordMismatch,
    #[msg("No token account supplied for beneficiary")]
    BeneficiaryAccountMissing,
    #[msg("Token transfer failed")]
    TransferFailed,

    // Auction lifecycle errors
    #[msg("Auction has already been created")]
    AuctionAlreadyCreated,
    #[msg("Auction has not been created")]
    AuctionNotCreated,
    #[msg("Auction has already ended or been canceled")]
    AuctionClosed,
    #[msg("Auction service returned an invalid auction id")]
    InvalidAuctionId,
    #[msg("Auction service did not return an auction id")]
    AuctionIdUnavailable,
    #[msg("Auction house does not match the distribution's auction house")]
    AuctionHouseMismatch,
    #[msg("Asset account does not hold the auctioned token")]
    AssetMintMismatch,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Mint does not match distribution's currency")]
    CurrencyMismatch,
}
