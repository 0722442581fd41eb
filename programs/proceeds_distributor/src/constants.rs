use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Seeds, fixed-point scale and bitmap geometry shared by every instruction.
 */

#[constant]
/// ===== SHARE CONSTANTS =====

/// Fixed-point scale applied to committed percentages
/// - 1% is encoded as PERCENT_SCALE, 100% as 100 * PERCENT_SCALE
/// - Example: 50% = 50_000_000, 0.000001% = 1
pub const PERCENT_SCALE: u64 = 1_000_000;

/// Denominator of the share conversion (100% in scaled units)
pub const FULL_SHARE: u64 = 100 * PERCENT_SCALE;

/// ===== MERKLE CONSTANTS =====

/// Deepest inclusion proof accepted by the verifier
/// - Covers commitments of up to 2^32 beneficiaries
/// - Longer proofs are treated as malformed
pub const MAX_PROOF_DEPTH: usize = 32;

/// ===== CLAIM BITMAP CONSTANTS =====

/// Number of claim indices tracked by one ClaimWord account
pub const CLAIM_WORD_BITS: u64 = 256;

/// Number of u64 limbs in a ClaimWord
pub const CLAIM_WORD_LIMBS: usize = (CLAIM_WORD_BITS / 64) as usize;

/// ===== PDA SEED CONSTANTS =====

/// Seed for distribution PDA derivation
/// - Used in: ["distribution", commitment_root]
/// - One distribution per commitment root, so the address is predictable off-chain
pub const DISTRIBUTION_SEED: &str = "distribution";

/// Seed for the currency vault PDA derivation
/// - Used in: ["vault", distribution_key]
/// - Receives auction proceeds and pays beneficiaries
pub const VAULT_SEED: &str = "vault";

/// Seed for claim word PDA derivation
/// - Used in: ["claim_word", distribution_key, word_index]
/// - One account per 256 consecutive claim indices
pub const CLAIM_WORD_SEED: &str = "claim_word";
