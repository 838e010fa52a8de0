//! # State Module
//!
//! This module contains the account structure and state transitions
//! for the escrow counter program.

use anchor_lang::prelude::*;

/// The counter account holding the count and the escrow metadata
///
/// The escrowed balance is not a field: it is the account's own lamport
/// balance, funded at initialization and paid out wholesale on finalize.
#[account]
#[derive(InitSpace)]
pub struct CounterAccount {
    /// The identity recorded at initialization; only it may finalize
    pub owner: Pubkey,
    /// The current count value
    pub count: i64,
    /// Timestamp when the counter was created
    pub created_at: i64,
    /// Timestamp when the counter was last updated
    pub updated_at: i64,
}

impl CounterAccount {
    /// Minimum count required to finalize
    pub const MIN_FINALIZE_COUNT: i64 = 3;

    /// Minimum account balance required to finalize (0.1 SOL)
    pub const MIN_FINALIZE_LAMPORTS: u64 = 100_000_000;

    /// Initialize the counter for a new generation
    ///
    /// Overwrites any prior owner and count; re-initializing a live slot
    /// starts a fresh generation on the same identity.
    pub fn initialize(&mut self, owner: Pubkey, start_value: i64, clock: &Clock) -> Result<()> {
        self.owner = owner;
        self.count = start_value;
        self.created_at = clock.unix_timestamp;
        self.updated_at = clock.unix_timestamp;
        Ok(())
    }

    /// Increment the counter value
    pub fn increment(&mut self, clock: &Clock) -> Result<()> {
        self.count = self
            .count
            .checked_add(1)
            .ok_or(crate::CounterError::ArithmeticError)?;
        self.updated_at = clock.unix_timestamp;
        Ok(())
    }

    /// Decrement the counter value
    ///
    /// The count is signed and has no lower bound; it may go negative.
    pub fn decrement(&mut self, clock: &Clock) -> Result<()> {
        self.count = self
            .count
            .checked_sub(1)
            .ok_or(crate::CounterError::ArithmeticError)?;
        self.updated_at = clock.unix_timestamp;
        Ok(())
    }
}
