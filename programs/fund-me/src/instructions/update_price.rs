use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::events::PriceUpdated;
use crate::state::PriceFeed;

#[derive(Accounts)]
pub struct UpdatePrice<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ ErrorCode::InvalidAuthority,
    )]
    pub price_feed: Account<'info, PriceFeed>,
}

impl<'info> UpdatePrice<'info> {
    pub fn update_price(&mut self, answer: i64) -> Result<()> {
        self.price_feed.answer = answer;
        self.price_feed.round = self
            .price_feed
            .round
            .checked_add(1)
            .ok_or(ErrorCode::Overflow)?;

        emit!(PriceUpdated {
            price_feed: self.price_feed.key(),
            answer,
            round: self.price_feed.round,
        });

        Ok(())
    }
}
