use anchor_lang::prelude::*;

use crate::constants::FULL_SHARE;
use crate::error::ProceedsDistributorError;

/// Converts a scaled percentage of `fund` into a token amount.
///
/// Computes `floor(fund * share_percent / (100 * PERCENT_SCALE))` in `u128`.
/// Rounding is always toward zero, so the payouts of a fully claimed
/// distribution may sum to slightly less than `fund`. That residual is left
/// in the vault.
///
/// `share_percent` is not bounded here. A share above 100% only fails when the
/// result no longer fits in a `u64`.
pub fn scaled_amount(fund: u64, share_percent: u64) -> Result<u64> {
    let amount = (fund as u128)
        .checked_mul(share_percent as u128)
        .ok_or(ProceedsDistributorError::ArithmeticOverflow)?
        / FULL_SHARE as u128;

    u64::try_from(amount).map_err(|_| error!(ProceedsDistributorError::ArithmeticOverflow))
}
