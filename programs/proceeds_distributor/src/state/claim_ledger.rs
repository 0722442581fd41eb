use std::collections::{BTreeMap, BTreeSet};

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::ProceedsDistributorError;

/// Anti-replay set over claim indices.
///
/// `set_claimed` does not check prior state. Callers must consult
/// `is_claimed` first; setting a bit twice is harmless but is not a guard.
pub trait ClaimLedger {
    fn is_claimed(&self, index: u64) -> bool;
    fn set_claimed(&mut self, index: u64);
}

/// Splits a claim index into (word index, bit within word).
pub fn claim_position(index: u64) -> (u64, u32) {
    (index / CLAIM_WORD_BITS, (index % CLAIM_WORD_BITS) as u32)
}

fn bit_is_set(bits: &[u64; CLAIM_WORD_LIMBS], bit: u32) -> bool {
    bits[(bit / 64) as usize] & (1u64 << (bit % 64)) != 0
}

fn set_bit(bits: &mut [u64; CLAIM_WORD_LIMBS], bit: u32) {
    bits[(bit / 64) as usize] |= 1u64 << (bit % 64);
}

/**
 * Claim word account
 *
 * One 256-bit slice of the claim bitmap. Bit `index % 256` of word
 * `index / 256` is set once `index` has claimed.
 *
 * Derivation: ["claim_word", distribution_key, word_index]
 *
 * Lifecycle:
 * 1. Created on the first claim that lands in this word (init_if_needed),
 *    or ahead of time through open_claim_word for batch claims
 * 2. Bits only ever flip from 0 to 1
 * 3. Never closed
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimWord {
    /// Position of this word in the bitmap
    pub word_index: u64,

    /// Packed claim flags, limb 0 holds bits 0..64
    pub bits: [u64; CLAIM_WORD_LIMBS],
}

impl ClaimWord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimWord>();

    pub fn find_address(distribution: &Pubkey, word_index: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                CLAIM_WORD_SEED.as_bytes(),
                distribution.as_ref(),
                word_index.to_le_bytes().as_ref(),
            ],
            &crate::ID,
        )
    }

    pub fn is_set(&self, index: u64) -> bool {
        let (word_index, bit) = claim_position(index);
        word_index == self.word_index && bit_is_set(&self.bits, bit)
    }
}

/// Sparse in-memory claim bitmap keyed by word index.
///
/// Instruction handlers load the touched `ClaimWord` accounts into a
/// `ClaimBitmap`, run the engine against it and write the words back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimBitmap {
    words: BTreeMap<u64, [u64; CLAIM_WORD_LIMBS]>,
}

impl ClaimBitmap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_word(&mut self, word_index: u64, bits: [u64; CLAIM_WORD_LIMBS]) {
        self.words.insert(word_index, bits);
    }

    /// Bits of `word_index`; an untouched word reads as all zeros.
    pub fn word(&self, word_index: u64) -> [u64; CLAIM_WORD_LIMBS] {
        self.words
            .get(&word_index)
            .copied()
            .unwrap_or([0; CLAIM_WORD_LIMBS])
    }

    pub fn words(&self) -> impl Iterator<Item = (u64, &[u64; CLAIM_WORD_LIMBS])> {
        self.words.iter().map(|(index, bits)| (*index, bits))
    }
}

impl ClaimLedger for ClaimBitmap {
    fn is_claimed(&self, index: u64) -> bool {
        let (word_index, bit) = claim_position(index);
        self.words
            .get(&word_index)
            .is_some_and(|bits| bit_is_set(bits, bit))
    }

    fn set_claimed(&mut self, index: u64) {
        let (word_index, bit) = claim_position(index);
        set_bit(
            self.words.entry(word_index).or_insert([0; CLAIM_WORD_LIMBS]),
            bit,
        );
    }
}

/// Claim set overlay used as the commit boundary of one operation.
///
/// Reads see both committed and pending claims. Pending claims reach the base
/// ledger only through `commit`; dropping the overlay discards them.
pub struct StagedClaims<'a, L: ClaimLedger> {
    base: &'a mut L,
    pending: BTreeSet<u64>,
}

impl<'a, L: ClaimLedger> StagedClaims<'a, L> {
    pub fn new(base: &'a mut L) -> Self {
        Self {
            base,
            pending: BTreeSet::new(),
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn commit(self) {
        for index in self.pending {
            self.base.set_claimed(index);
        }
    }
}

impl<L: ClaimLedger> ClaimLedger for StagedClaims<'_, L> {
    fn is_claimed(&self, index: u64) -> bool {
        self.pending.contains(&index) || self.base.is_claimed(index)
    }

    fn set_claimed(&mut self, index: u64) {
        self.pending.insert(index);
    }
}

impl ClaimWord {
    /// Reads a claim word passed outside the typed accounts.
    /// - Address must be the PDA of (distribution, word_index)
    pub fn load(info: &AccountInfo, distribution: &Pubkey, word_index: u64) -> Result<Self> {
        let (expected, _) = Self::find_address(distribution, word_index);
        require_keys_eq!(info.key(), expected, ProceedsDistributorError::ClaimWordMismatch);
        require_keys_eq!(
            *info.owner,
            crate::ID,
            ProceedsDistributorError::ClaimWordMismatch
        );

        let data = info.try_borrow_data()?;
        let word = Self::try_deserialize(&mut data.as_ref())?;
        require!(
            word.word_index == word_index,
            ProceedsDistributorError::ClaimWordMismatch
        );
        Ok(word)
    }

    /// Writes this word back into an account loaded through `load`.
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        require!(info.is_writable, ProceedsDistributorError::ClaimWordMismatch);
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }
}

/// Claim words passed outside the typed accounts, loaded into one bitmap.
///
/// Every (claim index, account) pair is checked against the PDA of the word
/// covering that index. An account repeated for several indices is read once
/// and must cover the same word each time.
#[derive(Debug)]
pub struct ClaimWordAccounts<'a, 'info> {
    pub ledger: ClaimBitmap,
    accounts: Vec<(u64, &'a AccountInfo<'info>)>,
}

impl<'a, 'info> ClaimWordAccounts<'a, 'info> {
    pub fn load<I>(distribution: &Pubkey, claims: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u64, &'a AccountInfo<'info>)>,
    {
        let mut ledger = ClaimBitmap::new();
        let mut accounts: Vec<(u64, &'a AccountInfo<'info>)> = Vec::new();

        for (index, info) in claims {
            let (word_index, _) = claim_position(index);

            match accounts.iter().find(|(_, loaded)| loaded.key == info.key) {
                Some((loaded_index, _)) => require!(
                    *loaded_index == word_index,
                    ProceedsDistributorError::ClaimWordMismatch
                ),
                None => {
                    let word = ClaimWord::load(info, distribution, word_index)?;
                    ledger.insert_word(word_index, word.bits);
                    accounts.push((word_index, info));
                }
            }
        }

        Ok(Self { ledger, accounts })
    }

    /// Word indices in load order.
    pub fn word_indices(&self) -> Vec<u64> {
        self.accounts.iter().map(|(word_index, _)| *word_index).collect()
    }

    /// Writes the ledger state of every loaded word back to its account.
    pub fn store(&self) -> Result<()> {
        for (word_index, info) in &self.accounts {
            ClaimWord {
                word_index: *word_index,
                bits: self.ledger.word(*word_index),
            }
            .store(info)?;
        }
        Ok(())
    }
}
