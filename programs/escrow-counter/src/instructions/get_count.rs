//! Get count instruction for the Escrow Counter program

use anchor_lang::prelude::*;

use crate::state::CounterAccount;

/// Get the current counter value
///
/// Public read-only function returning the current count through the
/// program interface. Not protected; anyone can call it.
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
///
/// # Returns
/// * `Result<i64>` - The current counter value
pub fn get_count(ctx: Context<GetCount>) -> Result<i64> {
    Ok(ctx.accounts.counter.count)
}

#[derive(Accounts)]
pub struct GetCount<'info> {
    pub counter: Account<'info, CounterAccount>,
}
