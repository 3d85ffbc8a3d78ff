use anchor_lang::prelude::*;

#[event]
pub struct Funded {
    pub fund_me: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub total_amount_funded: u64,
}

#[event]
pub struct Withdrawn {
    pub fund_me: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub funders_cleared: u64,
}

#[event]
pub struct PriceUpdated {
    pub price_feed: Pubkey,
    pub answer: i64,
    pub round: u64,
}
