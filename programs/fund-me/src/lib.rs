use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod errors;
pub mod events;
pub mod instructions;
pub mod price;
pub mod state;

pub use instructions::*;
pub use state::*;

#[program]
pub mod fund_me {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, price_feed: Pubkey) -> Result<()> {
        ctx.accounts.initialize(price_feed, &ctx.bumps)
    }

    pub fn initialize_price_feed(
        ctx: Context<InitializePriceFeed>,
        decimals: u8,
        initial_answer: i64,
    ) -> Result<()> {
        ctx.accounts
            .initialize_price_feed(decimals, initial_answer, &ctx.bumps)
    }

    pub fn update_price(ctx: Context<UpdatePrice>, answer: i64) -> Result<()> {
        ctx.accounts.update_price(answer)
    }

    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        ctx.accounts.fund(amount, &ctx.bumps)
    }

    pub fn withdraw<'info>(ctx: Context<'_, '_, '_, 'info, Withdraw<'info>>) -> Result<()> {
        ctx.accounts.withdraw(ctx.remaining_accounts)
    }

    pub fn cheaper_withdraw<'info>(
        ctx: Context<'_, '_, '_, 'info, Withdraw<'info>>,
    ) -> Result<()> {
        ctx.accounts.cheaper_withdraw(ctx.remaining_accounts)
    }
}
