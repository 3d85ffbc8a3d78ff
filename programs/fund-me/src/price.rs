use anchor_lang::prelude::*;
use solana_native_token::LAMPORTS_PER_SOL;

use crate::errors::ErrorCode;
use crate::state::PriceFeed;

/// All USD values are fixed point with 18 decimal places.
pub const USD_DECIMALS: u32 = 18;
pub const USD_PRECISION: u128 = 10u128.pow(USD_DECIMALS);

/// Latest feed answer normalized to `USD_DECIMALS` decimal places.
/// Feeds report fewer decimals than the USD fixed point uses, so the
/// answer is widened and scaled up by the missing power of ten.
pub fn scaled_price(feed: &PriceFeed) -> Result<u128> {
    require!(feed.answer > 0, ErrorCode::OracleUnavailable);
    require!(
        u32::from(feed.decimals) <= USD_DECIMALS,
        ErrorCode::OracleUnavailable
    );

    let scale = 10u128.pow(USD_DECIMALS - u32::from(feed.decimals));
    (feed.answer as u128)
        .checked_mul(scale)
        .ok_or(error!(ErrorCode::Overflow))
}

/// USD value of `lamports` at the feed's latest answer.
pub fn conversion_rate(lamports: u64, feed: &PriceFeed) -> Result<u128> {
    let price = scaled_price(feed)?;
    let value = price
        .checked_mul(u128::from(lamports))
        .ok_or(ErrorCode::Overflow)?;

    Ok(value / u128::from(LAMPORTS_PER_SOL))
}
