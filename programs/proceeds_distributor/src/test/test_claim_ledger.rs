#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;

    use crate::constants::CLAIM_WORD_BITS;
    use crate::state::{claim_position, ClaimBitmap, ClaimLedger, ClaimWord, StagedClaims};

    #[test]
    fn test_claim_position_splits_index() {
        assert_eq!(claim_position(0), (0, 0));
        assert_eq!(claim_position(255), (0, 255));
        assert_eq!(claim_position(256), (1, 0));
        assert_eq!(claim_position(1_000), (3, 232));
    }

    #[test]
    fn test_bitmap_tracks_claims() {
        let mut bitmap = ClaimBitmap::new();
        assert!(!bitmap.is_claimed(0));

        for index in [0u64, 63, 64, 255, 256, 10_000] {
            bitmap.set_claimed(index);
            assert!(bitmap.is_claimed(index));
        }

        assert!(!bitmap.is_claimed(1));
        assert!(!bitmap.is_claimed(65));
        assert!(!bitmap.is_claimed(257));

        // Only the touched words are materialized
        let words: Vec<u64> = bitmap.words().map(|(index, _)| index).collect();
        assert_eq!(words, vec![0, 1, 39]);
    }

    #[test]
    fn test_word_layout() {
        let mut bitmap = ClaimBitmap::new();
        bitmap.set_claimed(CLAIM_WORD_BITS + 65);

        assert_eq!(bitmap.word(0), [0; 4]);
        assert_eq!(bitmap.word(1), [0, 0b10, 0, 0]);
    }

    #[test]
    fn test_setting_twice_is_harmless() {
        let mut bitmap = ClaimBitmap::new();
        bitmap.set_claimed(9);
        let once = bitmap.clone();
        bitmap.set_claimed(9);
        assert_eq!(bitmap, once);
    }

    #[test]
    fn test_bitmap_round_trips_through_words() {
        let mut bitmap = ClaimBitmap::new();
        bitmap.set_claimed(300);

        let word = ClaimWord {
            word_index: 1,
            bits: bitmap.word(1),
        };
        assert!(word.is_set(300));
        assert!(!word.is_set(301));
        // Same bit, different word
        assert!(!word.is_set(44));

        let mut reloaded = ClaimBitmap::new();
        reloaded.insert_word(word.word_index, word.bits);
        assert!(reloaded.is_claimed(300));
    }

    #[test]
    fn test_staged_claims_commit() {
        let mut base = ClaimBitmap::new();
        base.set_claimed(1);

        let mut staged = StagedClaims::new(&mut base);
        assert!(staged.is_claimed(1));
        staged.set_claimed(2);
        assert!(staged.is_claimed(2));
        assert_eq!(staged.pending(), 1);
        staged.commit();

        assert!(base.is_claimed(1));
        assert!(base.is_claimed(2));
    }

    #[test]
    fn test_staged_claims_discard_on_drop() {
        let mut base = ClaimBitmap::new();
        {
            let mut staged = StagedClaims::new(&mut base);
            staged.set_claimed(7);
            assert!(staged.is_claimed(7));
        }
        assert!(!base.is_claimed(7));
    }

    #[test]
    fn test_claim_word_addresses_are_distinct() {
        let distribution = Pubkey::new_unique();
        let (first, _) = ClaimWord::find_address(&distribution, 0);
        let (again, _) = ClaimWord::find_address(&distribution, 0);
        let (second, _) = ClaimWord::find_address(&distribution, 1);
        let (other, _) = ClaimWord::find_address(&Pubkey::new_unique(), 0);

        assert_eq!(first, again);
        assert_ne!(first, second);
        assert_ne!(first, other);
    }
}
