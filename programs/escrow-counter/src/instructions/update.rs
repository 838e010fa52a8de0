//! # Update Instructions
//!
//! This module contains the logic for updating counter values:
//! the increment and decrement operations.

use anchor_lang::prelude::*;

use crate::events::{CounterDecremented, CounterIncremented};
use crate::state::CounterAccount;

/// Increment the counter value by 1
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Events
/// * Emits `CounterIncremented` event with before/after values
pub fn increment(ctx: Context<Update>) -> Result<()> {
    let counter = &mut ctx.accounts.counter;
    let clock = Clock::get()?;
    let previous_count = counter.count;

    // Increment the counter
    counter.increment(&clock)?;

    // Emit increment event
    emit!(CounterIncremented {
        counter: counter.key(),
        user: ctx.accounts.user.key(),
        previous_count,
        new_count: counter.count,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Counter incremented! Previous: {}, New: {}",
        previous_count,
        counter.count
    );

    Ok(())
}

/// Decrement the counter value by 1
///
/// There is no lower bound; the count may go negative.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Events
/// * Emits `CounterDecremented` event with before/after values
pub fn decrement(ctx: Context<Update>) -> Result<()> {
    let counter = &mut ctx.accounts.counter;
    let clock = Clock::get()?;
    let previous_count = counter.count;

    // Decrement the counter
    counter.decrement(&clock)?;

    // Emit decrement event
    emit!(CounterDecremented {
        counter: counter.key(),
        user: ctx.accounts.user.key(),
        previous_count,
        new_count: counter.count,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Counter decremented! Previous: {}, New: {}",
        previous_count,
        counter.count
    );

    Ok(())
}

#[derive(Accounts)]
pub struct Update<'info> {
    #[account(mut)]
    pub counter: Account<'info, CounterAccount>,

    /// CHECK: Anyone can drive the counter; no signature required
    pub user: AccountInfo<'info>,
}
