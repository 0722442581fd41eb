//! Claim processing shared by the single and batched claim instructions.
//!
//! Every operation runs against a `StagedClaims` overlay: claim bits are
//! marked in the overlay before the payout leaves the vault, and reach the
//! underlying ledger only after every payout of the operation succeeded.

use anchor_lang::prelude::*;

use crate::error::ProceedsDistributorError;
use crate::state::{ClaimLedger, Distribution, StagedClaims};
use crate::utils::{scaled_amount, verify_membership};

/// One beneficiary's claim, checked against the commitment root.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClaimRequest {
    pub index: u64,
    pub beneficiary: Pubkey,
    pub share_percent: u64,
    pub proof: Vec<[u8; 32]>,
}

/// Outcome of a successful claim
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub index: u64,
    pub beneficiary: Pubkey,
    pub amount: u64,
}

/// Moves currency out of the distribution's vault.
pub trait PayoutSink {
    fn pay(&mut self, beneficiary: &Pubkey, amount: u64) -> Result<()>;
}

fn process<L: ClaimLedger, P: PayoutSink>(
    distribution: &Distribution,
    claims: &mut StagedClaims<'_, L>,
    payout: &mut P,
    request: &ClaimRequest,
) -> Result<ClaimReceipt> {
    require!(
        !claims.is_claimed(request.index),
        ProceedsDistributorError::AlreadyClaimed
    );
    require!(
        verify_membership(
            distribution.commitment_root,
            request.index,
            &request.beneficiary,
            request.share_percent,
            &request.proof,
        ),
        ProceedsDistributorError::InvalidProof
    );

    claims.set_claimed(request.index);

    let amount = scaled_amount(distribution.generated_fund, request.share_percent)?;
    payout.pay(&request.beneficiary, amount)?;

    Ok(ClaimReceipt {
        index: request.index,
        beneficiary: request.beneficiary,
        amount,
    })
}

/// Processes `requests` in order as one all-or-nothing unit.
///
/// The first failing request aborts the batch; neither the ledger nor
/// `total_distributed` change in that case.
pub fn batch_claim<L: ClaimLedger, P: PayoutSink>(
    distribution: &mut Distribution,
    ledger: &mut L,
    payout: &mut P,
    requests: &[ClaimRequest],
) -> Result<Vec<ClaimReceipt>> {
    distribution.assert_initialized()?;
    require!(!requests.is_empty(), ProceedsDistributorError::EmptyBatch);
    require!(
        distribution.fund_available(),
        ProceedsDistributorError::FundNotGenerated
    );

    let mut claims = StagedClaims::new(ledger);
    let mut receipts = Vec::with_capacity(requests.len());
    let mut paid: u64 = 0;

    for request in requests {
        let receipt = process(distribution, &mut claims, payout, request)?;
        paid = paid
            .checked_add(receipt.amount)
            .ok_or(ProceedsDistributorError::ArithmeticOverflow)?;
        receipts.push(receipt);
    }

    let total_distributed = distribution
        .total_distributed
        .checked_add(paid)
        .ok_or(ProceedsDistributorError::ArithmeticOverflow)?;

    claims.commit();
    distribution.total_distributed = total_distributed;

    Ok(receipts)
}

/// Processes a single claim.
pub fn claim<L: ClaimLedger, P: PayoutSink>(
    distribution: &mut Distribution,
    ledger: &mut L,
    payout: &mut P,
    request: &ClaimRequest,
) -> Result<ClaimReceipt> {
    let mut receipts = batch_claim(distribution, ledger, payout, std::slice::from_ref(request))?;
    receipts
        .pop()
        .ok_or_else(|| error!(ProceedsDistributorError::EmptyBatch))
}
