use std::cell::Cell;
use std::rc::Rc;

use anchor_lang::prelude::*;

use crate::auction::{AuctionParams, AuctionService, FundBalance};
use crate::engine::{ClaimRequest, PayoutSink};
use crate::error::ProceedsDistributorError;
use crate::state::{ClaimWord, Distribution};
use crate::utils::{hash_pair, leaf_hash};

pub mod test_claim_ledger;
pub mod test_math;
pub mod test_merkle;

/// Committed (index, beneficiary, share) entry
#[derive(Debug, Clone)]
pub struct Entry {
    pub index: u64,
    pub beneficiary: Pubkey,
    pub share_percent: u64,
}

impl Entry {
    pub fn leaf(&self) -> [u8; 32] {
        leaf_hash(self.index, &self.beneficiary, self.share_percent)
    }
}

/// Merkle tree built the way the off-chain commitment tool builds it
pub struct MerkleTree {
    nodes: Vec<[u8; 32]>,
    leaf_count: usize,
}

impl MerkleTree {
    pub fn new(entries: &[Entry]) -> Self {
        let mut tree = MerkleTree {
            nodes: entries.iter().map(Entry::leaf).collect(),
            leaf_count: entries.len(),
        };
        tree.build();
        tree
    }

    fn build(&mut self) {
        let mut level_len = Self::next_level_len(self.leaf_count);
        let mut level_start = self.leaf_count;
        let mut prev_level_len = self.leaf_count;
        let mut prev_level_start = 0;

        while level_len > 0 {
            for i in 0..level_len {
                let left = self.nodes[prev_level_start + 2 * i];
                let right = if 2 * i + 1 < prev_level_len {
                    self.nodes[prev_level_start + 2 * i + 1]
                } else {
                    // Duplicate last entry if odd
                    left
                };
                self.nodes.push(hash_pair(&left, &right));
            }

            prev_level_start = level_start;
            prev_level_len = level_len;
            level_start += level_len;
            level_len = Self::next_level_len(level_len);
        }
    }

    fn next_level_len(level_len: usize) -> usize {
        if level_len <= 1 {
            0
        } else {
            (level_len + 1) / 2
        }
    }

    pub fn root(&self) -> [u8; 32] {
        *self.nodes.last().expect("tree has at least one leaf")
    }

    /// Proof for the leaf at `position` (position in the entry list)
    pub fn proof(&self, position: usize) -> Vec<[u8; 32]> {
        assert!(position < self.leaf_count, "position out of bounds");

        let mut proof = Vec::new();
        let mut current = position;
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let sibling = if current % 2 == 0 {
                if current + 1 < level_len {
                    current + 1
                } else {
                    current
                }
            } else {
                current - 1
            };
            proof.push(self.nodes[level_start + sibling]);

            current /= 2;
            level_start += level_len;
            level_len = Self::next_level_len(level_len);
        }

        proof
    }
}

pub fn entries(shares: &[u64]) -> Vec<Entry> {
    shares
        .iter()
        .enumerate()
        .map(|(index, share_percent)| Entry {
            index: index as u64,
            beneficiary: Pubkey::new_unique(),
            share_percent: *share_percent,
        })
        .collect()
}

pub fn request(tree: &MerkleTree, entries: &[Entry], position: usize) -> ClaimRequest {
    let entry = &entries[position];
    ClaimRequest {
        index: entry.index,
        beneficiary: entry.beneficiary,
        share_percent: entry.share_percent,
        proof: tree.proof(position),
    }
}

pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: ProceedsDistributorError) {
    let error = result.expect_err("operation should fail");
    assert_eq!(error, anchor_lang::error::Error::from(expected));
}

/// Backing storage of a claim word account at its PDA
pub struct WordAccount {
    pub key: Pubkey,
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
}

impl WordAccount {
    pub fn new(distribution: &Pubkey, word_index: u64, bits: [u64; 4]) -> Self {
        let (key, _) = ClaimWord::find_address(distribution, word_index);
        let mut data = Vec::with_capacity(ClaimWord::LEN);
        ClaimWord { word_index, bits }
            .try_serialize(&mut data)
            .expect("claim word serializes");
        WordAccount {
            key,
            owner: crate::ID,
            lamports: 1_000_000,
            data,
        }
    }

    pub fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            false,
            true,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            false,
            0,
        )
    }
}

pub fn auction_params() -> AuctionParams {
    AuctionParams {
        token_id: 7,
        token_contract: Pubkey::new_unique(),
        duration: 24 * 60 * 60,
        reserve_price: 1_000,
        curator: Pubkey::new_unique(),
        curator_fee_percent: 5,
    }
}

/// Initialized distribution with no auction yet
pub fn new_distribution(commitment_root: [u8; 32], owner: Pubkey) -> Distribution {
    let mut distribution = Distribution::default();
    distribution
        .initialize(
            254,
            commitment_root,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            owner,
            Pubkey::new_unique(),
        )
        .expect("first initialize succeeds");
    distribution
}

/// Distribution whose auction ended with `proceeds` paid into the vault
pub fn funded_distribution(commitment_root: [u8; 32], proceeds: u64) -> Distribution {
    let owner = Pubkey::new_unique();
    let mut distribution = new_distribution(commitment_root, owner);
    let mut house = FakeAuctionHouse::new(proceeds);
    let mut vault = house.vault();

    distribution
        .create_auction(&owner, &mut house, &auction_params())
        .expect("auction created");
    distribution
        .end_auction(&mut house, &mut vault)
        .expect("auction ended");
    distribution
}

/// In-memory auction house; ending an auction pays `proceeds` into the vault
pub struct FakeAuctionHouse {
    pub next_id: u64,
    pub proceeds: u64,
    pub balance: Rc<Cell<u64>>,
    pub custody_granted: bool,
    pub created: Vec<(AuctionParams, Pubkey)>,
    pub approvals: Vec<(u64, bool)>,
    pub reserve_prices: Vec<(u64, u64)>,
    pub ended: Vec<u64>,
    pub canceled: Vec<u64>,
    pub fail_create: bool,
}

impl FakeAuctionHouse {
    pub fn new(proceeds: u64) -> Self {
        Self {
            next_id: 1,
            proceeds,
            balance: Rc::new(Cell::new(0)),
            custody_granted: false,
            created: Vec::new(),
            approvals: Vec::new(),
            reserve_prices: Vec::new(),
            ended: Vec::new(),
            canceled: Vec::new(),
            fail_create: false,
        }
    }

    pub fn vault(&self) -> FakeVault {
        FakeVault(Rc::clone(&self.balance))
    }
}

impl AuctionService for FakeAuctionHouse {
    fn grant_custody(&mut self, _params: &AuctionParams) -> Result<()> {
        self.custody_granted = true;
        Ok(())
    }

    fn create_auction(&mut self, params: &AuctionParams, currency: &Pubkey) -> Result<u64> {
        if self.fail_create {
            return Err(ProgramError::Custom(1).into());
        }
        self.created.push((params.clone(), *currency));
        let id = self.next_id;
        self.next_id += 1;
        Ok(id)
    }

    fn set_auction_approval(&mut self, auction_id: u64, approved: bool) -> Result<()> {
        self.approvals.push((auction_id, approved));
        Ok(())
    }

    fn set_auction_reserve_price(&mut self, auction_id: u64, reserve_price: u64) -> Result<()> {
        self.reserve_prices.push((auction_id, reserve_price));
        Ok(())
    }

    fn end_auction(&mut self, auction_id: u64) -> Result<()> {
        self.ended.push(auction_id);
        self.balance.set(self.balance.get() + self.proceeds);
        Ok(())
    }

    fn cancel_auction(&mut self, auction_id: u64) -> Result<()> {
        self.canceled.push(auction_id);
        Ok(())
    }
}

pub struct FakeVault(pub Rc<Cell<u64>>);

impl FundBalance for FakeVault {
    fn current_balance(&mut self) -> Result<u64> {
        Ok(self.0.get())
    }
}

/// Payout sink that records transfers and can refuse one beneficiary
#[derive(Default)]
pub struct RecordingPayout {
    pub paid: Vec<(Pubkey, u64)>,
    pub reject: Option<Pubkey>,
}

impl PayoutSink for RecordingPayout {
    fn pay(&mut self, beneficiary: &Pubkey, amount: u64) -> Result<()> {
        if self.reject == Some(*beneficiary) {
            return err!(ProceedsDistributorError::TransferFailed);
        }
        self.paid.push((*beneficiary, amount));
        Ok(())
    }
}
