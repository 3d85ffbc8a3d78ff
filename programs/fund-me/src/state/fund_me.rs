use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::price::USD_PRECISION;

#[account]
#[derive(InitSpace)]
pub struct FundMe {
    pub owner: Pubkey,
    pub price_feed: Pubkey,
    #[max_len(64)]
    pub funders: Vec<Pubkey>,
    pub vault_bump: u8,
    pub bump: u8,
}

impl FundMe {
    /// Contribution floor: $50, in 18-decimal USD fixed point.
    pub const MINIMUM_USD: u128 = 50 * USD_PRECISION;

    pub const MAX_FUNDERS: usize = 64;

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, ErrorCode::NotOwner);
        Ok(())
    }

    pub fn push_funder(&mut self, funder: Pubkey) -> Result<()> {
        require!(
            self.funders.len() < Self::MAX_FUNDERS,
            ErrorCode::FunderLimitReached
        );
        self.funders.push(funder);
        Ok(())
    }

    pub fn funder_at(&self, index: usize) -> Result<Pubkey> {
        self.funders
            .get(index)
            .copied()
            .ok_or(error!(ErrorCode::IndexOutOfRange))
    }

    pub fn funder_count(&self) -> usize {
        self.funders.len()
    }

    pub fn clear_funders(&mut self) {
        self.funders.clear();
    }
}
