#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;
    use std::str::FromStr;

    use crate::constants::MAX_PROOF_DEPTH;
    use crate::test::{entries, Entry, MerkleTree};
    use crate::utils::{hash_pair, leaf_hash, verify, verify_membership};

    fn fixture() -> Vec<Entry> {
        vec![
            Entry {
                index: 0,
                beneficiary: Pubkey::from_str("3gmBN8LBomg3sZEjTgp2YsECMYgJpjcT7xUfpnDB4gSs").unwrap(),
                share_percent: 50_000_000,
            },
            Entry {
                index: 1,
                beneficiary: Pubkey::from_str("8G9xE8awr9vA2PZWFTJSHNhS16KLnXYdV6XEaJP1a2Yx").unwrap(),
                share_percent: 25_000_000,
            },
            Entry {
                index: 2,
                beneficiary: Pubkey::from_str("A4mDtfFCkdt9CqGzEkfiSHhJD8d3bUMasVzwajudGtb2").unwrap(),
                share_percent: 12_500_000,
            },
            Entry {
                index: 3,
                beneficiary: Pubkey::from_str("4SX6nqv5VRLMoNfYM5phvHgcBNcBEwUEES4qPPjf1EqS").unwrap(),
                share_percent: 12_500_000,
            },
        ]
    }

    #[test]
    fn test_pair_hash_is_order_independent() {
        let a = leaf_hash(0, &Pubkey::new_unique(), 1);
        let b = leaf_hash(1, &Pubkey::new_unique(), 2);
        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
        assert_ne!(hash_pair(&a, &b), hash_pair(&a, &a));
    }

    #[test]
    fn test_leaf_binds_every_field() {
        let beneficiary = Pubkey::new_unique();
        let leaf = leaf_hash(5, &beneficiary, 10_000_000);

        assert_ne!(leaf, leaf_hash(6, &beneficiary, 10_000_000));
        assert_ne!(leaf, leaf_hash(5, &Pubkey::new_unique(), 10_000_000));
        assert_ne!(leaf, leaf_hash(5, &beneficiary, 10_000_001));
    }

    #[test]
    fn test_every_entry_verifies() {
        let entries = fixture();
        let tree = MerkleTree::new(&entries);
        let root = tree.root();

        for (position, entry) in entries.iter().enumerate() {
            let proof = tree.proof(position);
            assert_eq!(proof.len(), 2);
            assert!(
                verify_membership(root, entry.index, &entry.beneficiary, entry.share_percent, &proof),
                "proof for index {} should verify",
                entry.index
            );
        }
    }

    #[test]
    fn test_odd_sized_trees_verify() {
        for size in [1usize, 3, 5, 7, 13] {
            let entries = entries(&vec![1_000_000; size]);
            let tree = MerkleTree::new(&entries);

            for (position, entry) in entries.iter().enumerate() {
                assert!(verify(&tree.proof(position), tree.root(), entry.leaf()));
            }
        }
    }

    #[test]
    fn test_single_entry_has_empty_proof() {
        let entries = entries(&[100_000_000]);
        let tree = MerkleTree::new(&entries);

        assert!(tree.proof(0).is_empty());
        assert_eq!(tree.root(), entries[0].leaf());
        assert!(verify(&[], tree.root(), entries[0].leaf()));
    }

    #[test]
    fn test_mutated_claims_fail() {
        let entries = fixture();
        let tree = MerkleTree::new(&entries);
        let root = tree.root();
        let entry = &entries[1];
        let proof = tree.proof(1);

        assert!(!verify_membership(root, entry.index + 1, &entry.beneficiary, entry.share_percent, &proof));
        assert!(!verify_membership(root, entry.index, &entries[2].beneficiary, entry.share_percent, &proof));
        assert!(!verify_membership(root, entry.index, &entry.beneficiary, entry.share_percent + 1, &proof));

        let mut beneficiary = entry.beneficiary.to_bytes();
        beneficiary[31] ^= 0x01;
        assert!(!verify_membership(
            root,
            entry.index,
            &Pubkey::new_from_array(beneficiary),
            entry.share_percent,
            &proof
        ));

        for element in 0..proof.len() {
            let mut tampered = proof.clone();
            tampered[element][0] = tampered[element][0].wrapping_add(1);
            assert!(!verify_membership(root, entry.index, &entry.beneficiary, entry.share_percent, &tampered));
        }
    }

    #[test]
    fn test_malformed_proofs_fail() {
        let entries = fixture();
        let tree = MerkleTree::new(&entries);
        let root = tree.root();
        let entry = &entries[0];
        let proof = tree.proof(0);

        // Truncated
        assert!(!verify(&proof[..1], root, entry.leaf()));

        // Extended with an extra sibling
        let mut extended = proof.clone();
        extended.push([7u8; 32]);
        assert!(!verify(&extended, root, entry.leaf()));

        // Deeper than any supported tree
        let oversized = vec![[0u8; 32]; MAX_PROOF_DEPTH + 1];
        assert!(!verify(&oversized, root, entry.leaf()));

        // Proof of another entry
        assert!(!verify(&tree.proof(3), root, entry.leaf()));
    }
}
