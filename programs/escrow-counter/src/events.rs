//! Events module for the Escrow Counter program
//!
//! This module contains all event definitions emitted by the program.
//! Events provide transparency and allow external systems to track
//! counter activity.

use anchor_lang::prelude::*;

/// Event emitted when a counter is initialized
///
/// Also emitted when a live identity slot is re-initialized, in which case
/// it marks the start of a fresh generation.
///
/// # Fields
/// * `counter` - The public key of the counter account
/// * `owner` - The public key of the counter owner
/// * `initial_count` - The count the account starts from
/// * `funded_lamports` - Lamports moved into escrow by the initializer
/// * `timestamp` - Unix timestamp when the counter was initialized
#[event]
pub struct CounterInitialized {
    /// The counter account that was initialized
    pub counter: Pubkey,
    /// The owner of the counter
    pub owner: Pubkey,
    /// The count the account starts from
    pub initial_count: i64,
    /// Lamports moved into escrow by the initializer
    pub funded_lamports: u64,
    /// Timestamp when the counter was initialized
    pub timestamp: i64,
}

/// Event emitted when a counter is successfully incremented
#[event]
pub struct CounterIncremented {
    /// The counter account that was incremented
    pub counter: Pubkey,
    /// The account that drove the update
    pub user: Pubkey,
    /// The value before incrementing
    pub previous_count: i64,
    /// The value after incrementing
    pub new_count: i64,
    /// Timestamp when the increment occurred
    pub timestamp: i64,
}

/// Event emitted when a counter is successfully decremented
#[event]
pub struct CounterDecremented {
    /// The counter account that was decremented
    pub counter: Pubkey,
    /// The account that drove the update
    pub user: Pubkey,
    /// The value before decrementing
    pub previous_count: i64,
    /// The value after decrementing
    pub new_count: i64,
    /// Timestamp when the decrement occurred
    pub timestamp: i64,
}

/// Event emitted when a counter is finalized
///
/// Finalization is terminal: the payout in `paid_out_lamports` covers the
/// escrow plus the reclaimed rent reserve, and the account ceases to exist.
#[event]
pub struct CounterFinalized {
    /// The counter account that was finalized
    pub counter: Pubkey,
    /// The owner the balance was paid out to
    pub owner: Pubkey,
    /// The count at finalization time
    pub final_count: i64,
    /// The full lamport balance transferred to the owner
    pub paid_out_lamports: u64,
    /// Timestamp when the finalization occurred
    pub timestamp: i64,
}
