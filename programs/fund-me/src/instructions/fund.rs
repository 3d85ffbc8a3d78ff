use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::ErrorCode;
use crate::events::Funded;
use crate::price;
use crate::state::{Contribution, FundMe, PriceFeed};

#[derive(Accounts)]
pub struct Fund<'info> {
    #[account(mut)]
    pub funder: Signer<'info>,

    #[account(
        mut,
        seeds = [b"fund_me", fund_me.owner.as_ref()],
        bump = fund_me.bump,
    )]
    pub fund_me: Account<'info, FundMe>,

    #[account(
        mut,
        seeds = [b"vault", fund_me.key().as_ref()],
        bump = fund_me.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(address = fund_me.price_feed @ ErrorCode::InvalidPriceFeed)]
    pub price_feed: Account<'info, PriceFeed>,

    #[account(
        init_if_needed,
        payer = funder,
        space = 8 + Contribution::INIT_SPACE,
        seeds = [b"contribution", fund_me.key().as_ref(), funder.key().as_ref()],
        bump,
    )]
    pub contribution: Account<'info, Contribution>,

    pub system_program: Program<'info, System>,
}

impl<'info> Fund<'info> {
    pub fn fund(&mut self, amount: u64, bumps: &FundBumps) -> Result<()> {
        let usd_value = price::conversion_rate(amount, &self.price_feed)?;
        require!(
            usd_value >= FundMe::MINIMUM_USD,
            ErrorCode::InsufficientContribution
        );

        let cpi_accounts = system_program::Transfer {
            from: self.funder.to_account_info(),
            to: self.vault.to_account_info(),
        };
        let cpi_context = CpiContext::new(self.system_program.to_account_info(), cpi_accounts);
        system_program::transfer(cpi_context, amount)?;

        let fund_me_key = self.fund_me.key();
        let funder_key = self.funder.key();

        // A funder enters the list exactly when its recorded amount leaves zero.
        let first_contribution = self.contribution.amount_funded == 0;

        if self.contribution.funder == Pubkey::default() {
            self.contribution.set_inner(Contribution {
                fund_me: fund_me_key,
                funder: funder_key,
                amount_funded: amount,
                bump: bumps.contribution,
            });
        } else {
            require_keys_eq!(
                self.contribution.fund_me,
                fund_me_key,
                ErrorCode::InvalidPDAAccount
            );
            require_keys_eq!(
                self.contribution.funder,
                funder_key,
                ErrorCode::InvalidPDAAccount
            );

            self.contribution.amount_funded = self
                .contribution
                .amount_funded
                .checked_add(amount)
                .ok_or(ErrorCode::Overflow)?;
        }

        if first_contribution {
            self.fund_me.push_funder(funder_key)?;
        }

        emit!(Funded {
            fund_me: fund_me_key,
            funder: funder_key,
            amount,
            total_amount_funded: self.contribution.amount_funded,
        });

        Ok(())
    }
}
