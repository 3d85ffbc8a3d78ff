use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Contribution {
    pub fund_me: Pubkey,
    pub funder: Pubkey,
    pub amount_funded: u64,
    pub bump: u8,
}
