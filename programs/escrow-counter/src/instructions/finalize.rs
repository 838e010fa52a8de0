//! Finalize instruction for the Escrow Counter program

use anchor_lang::prelude::*;

use crate::errors::CounterError;
use crate::events::CounterFinalized;
use crate::state::CounterAccount;

/// Finalize the counter, paying the escrow out to the owner
///
/// Authorization is checked first, by the `has_one` constraint during
/// account validation; the count and balance guards run after it. On
/// success the account's entire lamport balance, escrow plus rent
/// reserve, moves to the owner and the account is closed within the same
/// transaction. Any guard failure leaves the account untouched.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Events
/// * `CounterFinalized` - Emitted when the counter is successfully finalized
///
/// # Errors
/// * `CountNotHighEnough` - If the count is below the finalize minimum
/// * `BalanceNotHighEnough` - If the account balance is below 0.1 SOL
/// * `Unauthorized` - If the signer is not the recorded owner
pub fn finalize(ctx: Context<Finalize>) -> Result<()> {
    let counter = &ctx.accounts.counter;
    let clock = Clock::get()?;

    require!(
        counter.count >= CounterAccount::MIN_FINALIZE_COUNT,
        CounterError::CountNotHighEnough
    );

    let payout_lamports = counter.to_account_info().lamports();
    require!(
        payout_lamports >= CounterAccount::MIN_FINALIZE_LAMPORTS,
        CounterError::BalanceNotHighEnough
    );

    // Emit finalization event
    emit!(CounterFinalized {
        counter: counter.key(),
        owner: counter.owner,
        final_count: counter.count,
        paid_out_lamports: payout_lamports,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Counter finalized at count {}; {} lamports paid out to {}",
        counter.count,
        payout_lamports,
        counter.owner
    );

    // The payout and account closure are performed by the `close` constraint
    Ok(())
}

#[derive(Accounts)]
pub struct Finalize<'info> {
    #[account(
        mut,
        has_one = owner @ CounterError::Unauthorized,
        close = owner
    )]
    pub counter: Account<'info, CounterAccount>,

    /// The owner recorded at initialization, receiving the full balance
    #[account(mut)]
    pub owner: Signer<'info>,
}
