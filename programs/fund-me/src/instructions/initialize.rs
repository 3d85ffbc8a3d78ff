use anchor_lang::prelude::*;

use crate::state::FundMe;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + FundMe::INIT_SPACE,
        seeds = [b"fund_me", owner.key().as_ref()],
        bump,
    )]
    pub fund_me: Account<'info, FundMe>,

    #[account(
        seeds = [b"vault", fund_me.key().as_ref()],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, price_feed: Pubkey, bumps: &InitializeBumps) -> Result<()> {
        self.fund_me.set_inner(FundMe {
            owner: self.owner.key(),
            price_feed,
            funders: Vec::new(),
            vault_bump: bumps.vault,
            bump: bumps.fund_me,
        });

        Ok(())
    }
}
