use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::price::USD_DECIMALS;
use crate::state::PriceFeed;

#[derive(Accounts)]
pub struct InitializePriceFeed<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + PriceFeed::INIT_SPACE,
        seeds = [b"price_feed", authority.key().as_ref()],
        bump,
    )]
    pub price_feed: Account<'info, PriceFeed>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializePriceFeed<'info> {
    pub fn initialize_price_feed(
        &mut self,
        decimals: u8,
        initial_answer: i64,
        bumps: &InitializePriceFeedBumps,
    ) -> Result<()> {
        require!(
            u32::from(decimals) <= USD_DECIMALS,
            ErrorCode::OracleUnavailable
        );

        self.price_feed.set_inner(PriceFeed {
            authority: self.authority.key(),
            answer: initial_answer,
            decimals,
            round: 0,
            bump: bumps.price_feed,
        });

        Ok(())
    }
}
