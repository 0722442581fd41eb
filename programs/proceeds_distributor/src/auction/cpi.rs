use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::{get_return_data, invoke_signed};
use anchor_spl::token_interface::TokenAccount;

use super::{AuctionParams, AuctionService, FundBalance};
use crate::constants::DISTRIBUTION_SEED;
use crate::error::ProceedsDistributorError;
use crate::utils::approve_token_delegate;

/// Accounts needed to delegate the auctioned asset to the auction house
pub struct CustodyAccounts<'info> {
    /// Distribution-owned token account holding the asset
    pub asset_account: AccountInfo<'info>,
    /// Auction house authority that takes custody
    pub delegate: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
}

/**
 * AuctionService backed by CPIs into the auction house program
 *
 * Every call is signed by the distribution PDA. Instruction data is the
 * Anchor 8-byte discriminator ("global:<name>") followed by borsh args.
 * Accounts after the authority are forwarded from the instruction's
 * remaining accounts in the order the auction house expects them.
 */
pub struct AuctionHouseCpi<'info> {
    pub program: AccountInfo<'info>,
    pub authority: AccountInfo<'info>,
    pub forwarded: Vec<AccountInfo<'info>>,
    pub commitment_root: [u8; 32],
    pub bump: u8,
    pub custody: Option<CustodyAccounts<'info>>,
}

#[derive(AnchorSerialize)]
struct CreateAuctionArgs {
    token_id: u64,
    token_contract: Pubkey,
    duration: u64,
    reserve_price: u64,
    curator: Pubkey,
    curator_fee_percent: u8,
    currency: Pubkey,
}

#[derive(AnchorSerialize)]
struct SetApprovalArgs {
    auction_id: u64,
    approved: bool,
}

#[derive(AnchorSerialize)]
struct SetReservePriceArgs {
    auction_id: u64,
    reserve_price: u64,
}

#[derive(AnchorSerialize)]
struct AuctionIdArgs {
    auction_id: u64,
}

pub fn instruction_discriminator(name: &str) -> [u8; 8] {
    let preimage = format!("global:{name}");
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    discriminator
}

impl<'info> AuctionHouseCpi<'info> {
    pub fn new(
        program: AccountInfo<'info>,
        authority: AccountInfo<'info>,
        forwarded: &[AccountInfo<'info>],
        commitment_root: [u8; 32],
        bump: u8,
    ) -> Self {
        Self {
            program,
            authority,
            forwarded: forwarded.to_vec(),
            commitment_root,
            bump,
            custody: None,
        }
    }

    pub fn with_custody(mut self, custody: CustodyAccounts<'info>) -> Self {
        self.custody = Some(custody);
        self
    }

    fn invoke<A: AnchorSerialize>(&self, name: &str, args: &A) -> Result<()> {
        let mut data = instruction_discriminator(name).to_vec();
        args.serialize(&mut data)
            .map_err(|_| error!(ErrorCode::InstructionDidNotSerialize))?;

        let mut metas = vec![AccountMeta::new_readonly(self.authority.key(), true)];
        metas.extend(self.forwarded.iter().map(|info| {
            if info.is_writable {
                AccountMeta::new(info.key(), info.is_signer)
            } else {
                AccountMeta::new_readonly(info.key(), info.is_signer)
            }
        }));

        let instruction = Instruction {
            program_id: self.program.key(),
            accounts: metas,
            data,
        };

        let mut infos = Vec::with_capacity(self.forwarded.len() + 2);
        infos.push(self.authority.clone());
        infos.extend(self.forwarded.iter().cloned());
        infos.push(self.program.clone());

        let bump = [self.bump];
        let seeds: &[&[u8]] = &[DISTRIBUTION_SEED.as_bytes(), &self.commitment_root, &bump];

        invoke_signed(&instruction, &infos, &[seeds])?;
        Ok(())
    }
}

impl<'info> AuctionService for AuctionHouseCpi<'info> {
    fn grant_custody(&mut self, _params: &AuctionParams) -> Result<()> {
        let custody = self
            .custody
            .as_ref()
            .ok_or(ErrorCode::AccountNotEnoughKeys)?;

        let bump = [self.bump];
        let seeds: &[&[u8]] = &[DISTRIBUTION_SEED.as_bytes(), &self.commitment_root, &bump];

        approve_token_delegate(
            custody.asset_account.clone(),
            custody.delegate.clone(),
            self.authority.clone(),
            custody.token_program.clone(),
            1,
            &[seeds],
        )
    }

    fn create_auction(&mut self, params: &AuctionParams, currency: &Pubkey) -> Result<u64> {
        self.invoke(
            "create_auction",
            &CreateAuctionArgs {
                token_id: params.token_id,
                token_contract: params.token_contract,
                duration: params.duration,
                reserve_price: params.reserve_price,
                curator: params.curator,
                curator_fee_percent: params.curator_fee_percent,
                currency: *currency,
            },
        )?;

        let (program_id, data) =
            get_return_data().ok_or(ProceedsDistributorError::AuctionIdUnavailable)?;
        require_keys_eq!(
            program_id,
            self.program.key(),
            ProceedsDistributorError::AuctionIdUnavailable
        );

        u64::try_from_slice(&data).map_err(|_| error!(ProceedsDistributorError::AuctionIdUnavailable))
    }

    fn set_auction_approval(&mut self, auction_id: u64, approved: bool) -> Result<()> {
        self.invoke("set_auction_approval", &SetApprovalArgs { auction_id, approved })
    }

    fn set_auction_reserve_price(&mut self, auction_id: u64, reserve_price: u64) -> Result<()> {
        self.invoke(
            "set_auction_reserve_price",
            &SetReservePriceArgs {
                auction_id,
                reserve_price,
            },
        )
    }

    fn end_auction(&mut self, auction_id: u64) -> Result<()> {
        self.invoke("end_auction", &AuctionIdArgs { auction_id })
    }

    fn cancel_auction(&mut self, auction_id: u64) -> Result<()> {
        self.invoke("cancel_auction", &AuctionIdArgs { auction_id })
    }
}

impl<'info> FundBalance for InterfaceAccount<'info, TokenAccount> {
    fn current_balance(&mut self) -> Result<u64> {
        self.reload()?;
        Ok(self.amount)
    }
}
