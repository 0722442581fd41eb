use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::constants::MAX_PROOF_DEPTH;

/// Hashes a committed (index, beneficiary, share) entry into a leaf.
///
/// Encoding: `index` as little-endian u64, the 32 beneficiary key bytes,
/// `share_percent` as little-endian u64.
pub fn leaf_hash(index: u64, beneficiary: &Pubkey, share_percent: u64) -> [u8; 32] {
    hashv(&[
        &index.to_le_bytes(),
        &beneficiary.to_bytes(),
        &share_percent.to_le_bytes(),
    ])
    .to_bytes()
}

/// Hashes two sibling nodes, smaller one first.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Folds `proof` onto `leaf` and compares the result against `root`.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    if proof.len() > MAX_PROOF_DEPTH {
        return false;
    }

    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling));

    computed == root
}

/// Checks that (index, beneficiary, share_percent) is committed to by `root`.
pub fn verify_membership(
    root: [u8; 32],
    index: u64,
    beneficiary: &Pubkey,
    share_percent: u64,
    proof: &[[u8; 32]],
) -> bool {
    verify(proof, root, leaf_hash(index, beneficiary, share_percent))
}
