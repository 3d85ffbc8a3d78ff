use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::ErrorCode;
use crate::events::Withdrawn;
use crate::state::{Contribution, FundMe};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

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

    pub system_program: Program<'info, System>,
}

impl<'info> Withdraw<'info> {
    pub fn withdraw(&mut self, remaining_accounts: &[AccountInfo<'info>]) -> Result<()> {
        self.drain(remaining_accounts, false)
    }

    pub fn cheaper_withdraw(&mut self, remaining_accounts: &[AccountInfo<'info>]) -> Result<()> {
        self.drain(remaining_accounts, true)
    }

    // Single routine behind both withdraw paths. `cache_funders` only
    // changes how the funder list is read, never the observable outcome.
    fn drain(
        &mut self,
        remaining_accounts: &[AccountInfo<'info>],
        cache_funders: bool,
    ) -> Result<()> {
        self.fund_me.require_owner(&self.owner.key())?;

        let fund_me_key = self.fund_me.key();
        let amount = self.vault.lamports();

        // The ledger must be zeroed before any lamport leaves the vault.
        let funders_cleared = if cache_funders {
            let funders = std::mem::take(&mut self.fund_me.funders);
            for (index, funder) in funders.iter().enumerate() {
                zero_contribution(remaining_accounts, index, funder, &fund_me_key)?;
            }
            funders.len()
        } else {
            let count = self.fund_me.funder_count();
            for index in 0..count {
                let funder = self.fund_me.funder_at(index)?;
                zero_contribution(remaining_accounts, index, &funder, &fund_me_key)?;
            }
            self.fund_me.clear_funders();
            count
        };

        let vault_seeds = &[b"vault", fund_me_key.as_ref(), &[self.fund_me.vault_bump]];
        let vault_signer = &[&vault_seeds[..]];

        let cpi_accounts = system_program::Transfer {
            from: self.vault.to_account_info(),
            to: self.owner.to_account_info(),
        };
        let cpi_context = CpiContext::new_with_signer(
            self.system_program.to_account_info(),
            cpi_accounts,
            vault_signer,
        );
        system_program::transfer(cpi_context, amount)
            .map_err(|_| error!(ErrorCode::TransferFailed))?;

        emit!(Withdrawn {
            fund_me: fund_me_key,
            owner: self.owner.key(),
            amount,
            funders_cleared: funders_cleared as u64,
        });

        Ok(())
    }
}

fn zero_contribution(
    remaining_accounts: &[AccountInfo],
    index: usize,
    funder: &Pubkey,
    fund_me: &Pubkey,
) -> Result<()> {
    let account_info = remaining_accounts
        .get(index)
        .ok_or(ErrorCode::MissingAccount)?;
    require_keys_eq!(*account_info.owner, crate::ID, ErrorCode::InvalidPDAAccount);

    let data = account_info.try_borrow_data()?;
    let mut slice: &[u8] = &data;
    let mut contribution = Contribution::try_deserialize(&mut slice)?;
    drop(data);

    require_keys_eq!(contribution.fund_me, *fund_me, ErrorCode::InvalidPDAAccount);
    require_keys_eq!(contribution.funder, *funder, ErrorCode::InvalidPDAAccount);

    contribution.amount_funded = 0;
    contribution.try_serialize(&mut *account_info.try_borrow_mut_data()?)?;

    Ok(())
}
