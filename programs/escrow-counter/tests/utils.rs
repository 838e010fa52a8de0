#![allow(dead_code)]

use anchor_lang::{AccountDeserialize, InstructionData};
use escrow_counter::errors::CounterError;
use escrow_counter::state::CounterAccount;
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    instruction::{AccountMeta, Instruction, InstructionError},
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
    system_instruction, system_program,
    transaction::{Transaction, TransactionError},
};

pub use solana_sdk::native_token::LAMPORTS_PER_SOL;

/// `SystemError::ResultWithNegativeLamports`, surfaced when a transfer
/// would overdraw the funding account.
pub const SYSTEM_INSUFFICIENT_FUNDS: u32 = 1;

// Anchor's generated `entry` ties the accounts slice lifetime to the inner
// account lifetime, while `processor!` expects them independent. Re-borrowing
// through a leaked clone of the slice bridges the two signatures.
fn entry_shim(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    escrow_counter::entry(program_id, accounts, data)
}

pub fn program_test() -> ProgramTest {
    ProgramTest::new("escrow_counter", escrow_counter::ID, processor!(entry_shim))
}

pub async fn start() -> ProgramTestContext {
    program_test().start_with_context().await
}

pub fn initialize_ix(
    counter: Pubkey,
    user: Pubkey,
    start_value: i64,
    funding_lamports: u64,
) -> Instruction {
    Instruction {
        program_id: escrow_counter::ID,
        accounts: vec![
            AccountMeta::new(counter, true),
            AccountMeta::new(user, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: escrow_counter::instruction::Initialize {
            start_value,
            funding_lamports,
        }
        .data(),
    }
}

pub fn increment_ix(counter: Pubkey, user: Pubkey) -> Instruction {
    Instruction {
        program_id: escrow_counter::ID,
        accounts: vec![
            AccountMeta::new(counter, false),
            AccountMeta::new_readonly(user, false),
        ],
        data: escrow_counter::instruction::Increment {}.data(),
    }
}

pub fn decrement_ix(counter: Pubkey, user: Pubkey) -> Instruction {
    Instruction {
        program_id: escrow_counter::ID,
        accounts: vec![
            AccountMeta::new(counter, false),
            AccountMeta::new_readonly(user, false),
        ],
        data: escrow_counter::instruction::Decrement {}.data(),
    }
}

pub fn finalize_ix(counter: Pubkey, owner: Pubkey) -> Instruction {
    Instruction {
        program_id: escrow_counter::ID,
        accounts: vec![
            AccountMeta::new(counter, false),
            AccountMeta::new(owner, true),
        ],
        data: escrow_counter::instruction::Finalize {}.data(),
    }
}

pub fn get_count_ix(counter: Pubkey) -> Instruction {
    Instruction {
        program_id: escrow_counter::ID,
        accounts: vec![AccountMeta::new_readonly(counter, false)],
        data: escrow_counter::instruction::GetCount {}.data(),
    }
}

/// Send one instruction, fee-paid by the context payer.
///
/// A fresh blockhash is taken per call so that repeated identical
/// instructions produce distinct transaction signatures.
pub async fn send_ix(
    context: &mut ProgramTestContext,
    ix: Instruction,
    extra_signers: &[&Keypair],
) -> Result<(), BanksClientError> {
    let blockhash = context
        .get_new_latest_blockhash()
        .await
        .expect("new blockhash");
    let payer_pubkey = context.payer.pubkey();
    let mut signers: Vec<&Keypair> = vec![&context.payer];
    signers.extend_from_slice(extra_signers);
    let tx = Transaction::new_signed_with_payer(&[ix], Some(&payer_pubkey), &signers, blockhash);
    context.banks_client.process_transaction(tx).await
}

/// Simulate one instruction and return the program logs.
pub async fn simulate_logs(
    context: &mut ProgramTestContext,
    ix: Instruction,
    extra_signers: &[&Keypair],
) -> Vec<String> {
    let blockhash = context
        .get_new_latest_blockhash()
        .await
        .expect("new blockhash");
    let payer_pubkey = context.payer.pubkey();
    let mut signers: Vec<&Keypair> = vec![&context.payer];
    signers.extend_from_slice(extra_signers);
    let tx = Transaction::new_signed_with_payer(&[ix], Some(&payer_pubkey), &signers, blockhash);
    let result = context
        .banks_client
        .simulate_transaction(tx)
        .await
        .expect("simulation must run");
    result
        .simulation_details
        .expect("simulation details")
        .logs
}

/// Simulate one instruction and return its raw return data, if any.
pub async fn simulate_return_data(
    context: &mut ProgramTestContext,
    ix: Instruction,
) -> Option<Vec<u8>> {
    let blockhash = context
        .get_new_latest_blockhash()
        .await
        .expect("new blockhash");
    let payer_pubkey = context.payer.pubkey();
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer_pubkey),
        &[&context.payer],
        blockhash,
    );
    let result = context
        .banks_client
        .simulate_transaction(tx)
        .await
        .expect("simulation must run");
    result
        .simulation_details
        .expect("simulation details")
        .return_data
        .map(|data| data.data)
}

/// Transfer lamports from the context payer to `to`.
pub async fn fund(context: &mut ProgramTestContext, to: Pubkey, lamports: u64) {
    let payer_pubkey = context.payer.pubkey();
    let ix = system_instruction::transfer(&payer_pubkey, &to, lamports);
    send_ix(context, ix, &[]).await.expect("funding transfer");
}

pub async fn fetch_counter(context: &mut ProgramTestContext, address: Pubkey) -> CounterAccount {
    let account = context
        .banks_client
        .get_account(address)
        .await
        .expect("account fetch")
        .expect("counter account must exist");
    CounterAccount::try_deserialize(&mut account.data.as_slice())
        .expect("counter account must deserialize")
}

pub async fn balance(context: &mut ProgramTestContext, address: Pubkey) -> u64 {
    context
        .banks_client
        .get_balance(address)
        .await
        .expect("balance fetch")
}

pub async fn account_is_gone(context: &mut ProgramTestContext, address: Pubkey) -> bool {
    context
        .banks_client
        .get_account(address)
        .await
        .expect("account fetch")
        .is_none()
}

pub fn expect_custom(err: BanksClientError, code: u32) {
    match err {
        BanksClientError::TransactionError(TransactionError::InstructionError(
            _,
            InstructionError::Custom(got),
        )) => assert_eq!(got, code),
        other => panic!("unexpected error: {other:?}"),
    }
}

/// The on-chain error code of a program error variant.
pub fn counter_error(err: CounterError) -> u32 {
    anchor_lang::error::ERROR_CODE_OFFSET + err as u32
}

/// Anchor's framework code for operations against a missing or closed account.
pub fn account_not_initialized() -> u32 {
    anchor_lang::error::ErrorCode::AccountNotInitialized as u32
}
