use anchor_lang::prelude::*;

/// Push-model price store. The authority reports the latest answer in
/// `decimals` decimal places; `round` increments on every update.
#[account]
#[derive(InitSpace)]
pub struct PriceFeed {
    pub authority: Pubkey,
    pub answer: i64,
    pub decimals: u8,
    pub round: u64,
    pub bump: u8,
}
