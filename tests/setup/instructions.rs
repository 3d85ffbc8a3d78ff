use anchor_lang::{InstructionData, ToAccountMetas};
use litesvm::types::TransactionResult;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer as SolanaSigner},
};
use std::str::FromStr;

use crate::setup::{Accounts, TestFixture};
use utils::Utils;

pub trait Instructions {
    fn initialize_price_feed(
        &mut self,
        authority: &Keypair,
        decimals: u8,
        initial_answer: i64,
    ) -> TransactionResult;

    fn update_price(
        &mut self,
        authority: &Keypair,
        price_feed: &Pubkey,
        answer: i64,
    ) -> TransactionResult;

    fn initialize(&mut self, owner: &Keypair, price_feed: &Pubkey) -> TransactionResult;

    fn fund(&mut self, funder: &Keypair, owner: &Pubkey, amount: u64) -> TransactionResult;

    fn fund_with_feed(
        &mut self,
        funder: &Keypair,
        owner: &Pubkey,
        price_feed: &Pubkey,
        amount: u64,
    ) -> TransactionResult;

    fn withdraw(&mut self, caller: &Keypair, owner: &Pubkey) -> TransactionResult;

    fn cheaper_withdraw(&mut self, caller: &Keypair, owner: &Pubkey) -> TransactionResult;

    fn withdraw_without_ledger_accounts(
        &mut self,
        caller: &Keypair,
        owner: &Pubkey,
    ) -> TransactionResult;
}

fn system_program_id() -> Pubkey {
    Pubkey::from_str("11111111111111111111111111111111").unwrap()
}

impl Instructions for TestFixture {
    fn initialize_price_feed(
        &mut self,
        authority: &Keypair,
        decimals: u8,
        initial_answer: i64,
    ) -> TransactionResult {
        let authority_pubkey = authority.pubkey();
        let price_feed_pda = self.find_price_feed_pda(&authority_pubkey).0;

        let instruction = Instruction {
            program_id: self.program_id,
            accounts: fund_me::accounts::InitializePriceFeed {
                authority: authority_pubkey,
                price_feed: price_feed_pda,
                system_program: system_program_id(),
            }
            .to_account_metas(None),
            data: fund_me::instruction::InitializePriceFeed {
                decimals,
                initial_answer,
            }
            .data(),
        };

        self.svm
            .send_tx(&[instruction], &authority_pubkey, &[authority])
    }

    fn update_price(
        &mut self,
        authority: &Keypair,
        price_feed: &Pubkey,
        answer: i64,
    ) -> TransactionResult {
        let authority_pubkey = authority.pubkey();

        let instruction = Instruction {
            program_id: self.program_id,
            accounts: fund_me::accounts::UpdatePrice {
                authority: authority_pubkey,
                price_feed: *price_feed,
            }
            .to_account_metas(None),
            data: fund_me::instruction::UpdatePrice { answer }.data(),
        };

        self.svm
            .send_tx(&[instruction], &authority_pubkey, &[authority])
    }

    fn initialize(&mut self, owner: &Keypair, price_feed: &Pubkey) -> TransactionResult {
        let owner_pubkey = owner.pubkey();
        let fund_me_pda = self.find_fund_me_pda(&owner_pubkey).0;
        let vault_pda = self.find_vault_pda(&fund_me_pda).0;

        let instruction = Instruction {
            program_id: self.program_id,
            accounts: fund_me::accounts::Initialize {
                owner: owner_pubkey,
                fund_me: fund_me_pda,
                vault: vault_pda,
                system_program: system_program_id(),
            }
            .to_account_metas(None),
            data: fund_me::instruction::Initialize {
                price_feed: *price_feed,
            }
            .data(),
        };

        self.svm.send_tx(&[instruction], &owner_pubkey, &[owner])
    }

    fn fund(&mut self, funder: &Keypair, owner: &Pubkey, amount: u64) -> TransactionResult {
        let price_feed = self.get_fund_me(owner).price_feed;
        self.fund_with_feed(funder, owner, &price_feed, amount)
    }

    fn fund_with_feed(
        &mut self,
        funder: &Keypair,
        owner: &Pubkey,
        price_feed: &Pubkey,
        amount: u64,
    ) -> TransactionResult {
        let funder_pubkey = funder.pubkey();
        let fund_me_pda = self.find_fund_me_pda(owner).0;
        let vault_pda = self.find_vault_pda(&fund_me_pda).0;
        let contribution_pda = self.find_contribution_pda(&fund_me_pda, &funder_pubkey).0;

        let instruction = Instruction {
            program_id: self.program_id,
            accounts: fund_me::accounts::Fund {
                funder: funder_pubkey,
                fund_me: fund_me_pda,
                vault: vault_pda,
                price_feed: *price_feed,
                contribution: contribution_pda,
                system_program: system_program_id(),
            }
            .to_account_metas(None),
            data: fund_me::instruction::Fund { amount }.data(),
        };

        self.svm.send_tx(&[instruction], &funder_pubkey, &[funder])
    }

    fn withdraw(&mut self, caller: &Keypair, owner: &Pubkey) -> TransactionResult {
        let metas = self.contribution_metas(owner);
        let data = fund_me::instruction::Withdraw {}.data();
        self.send_withdraw(caller, owner, data, metas)
    }

    fn cheaper_withdraw(&mut self, caller: &Keypair, owner: &Pubkey) -> TransactionResult {
        let metas = self.contribution_metas(owner);
        let data = fund_me::instruction::CheaperWithdraw {}.data();
        self.send_withdraw(caller, owner, data, metas)
    }

    fn withdraw_without_ledger_accounts(
        &mut self,
        caller: &Keypair,
        owner: &Pubkey,
    ) -> TransactionResult {
        let data = fund_me::instruction::Withdraw {}.data();
        self.send_withdraw(caller, owner, data, Vec::new())
    }
}

impl TestFixture {
    // Fees are paid by the fixture payer so withdraw tests can assert
    // exact balance deltas on the owner account.
    fn send_withdraw(
        &mut self,
        caller: &Keypair,
        owner: &Pubkey,
        data: Vec<u8>,
        ledger_metas: Vec<AccountMeta>,
    ) -> TransactionResult {
        let payer = self.payer.insecure_clone();
        let caller_pubkey = caller.pubkey();
        let fund_me_pda = self.find_fund_me_pda(owner).0;
        let vault_pda = self.find_vault_pda(&fund_me_pda).0;

        let mut accounts = fund_me::accounts::Withdraw {
            owner: caller_pubkey,
            fund_me: fund_me_pda,
            vault: vault_pda,
            system_program: system_program_id(),
        }
        .to_account_metas(None);
        accounts.extend(ledger_metas);

        let instruction = Instruction {
            program_id: self.program_id,
            accounts,
            data,
        };

        self.svm
            .send_tx(&[instruction], &payer.pubkey(), &[&payer, caller])
    }
}
