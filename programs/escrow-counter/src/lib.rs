//! # Escrow Counter Program
//!
//! A counter program built with the Anchor framework. Each counter account
//! records an owner and a signed count, and escrows the lamports it was
//! funded with at initialization. Anyone can step the count up or down;
//! only the owner can finalize, which pays the account's entire balance
//! back to the owner and closes the account for good.

use anchor_lang::prelude::*;

// Import our modules
pub mod instructions;
pub mod state;
pub mod errors;
pub mod events;

// Re-export for easier access
pub use instructions::*;
pub use state::*;
pub use errors::*;
pub use events::*;

// Program ID - This should be updated when you deploy
declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

/// Main program module containing all instruction handlers
#[program]
pub mod escrow_counter {
    use super::*;

    /// Initialize a counter account and fund its escrow
    ///
    /// Creates the counter account, or re-initializes it in place when the
    /// identity slot is already live, recording the caller as owner.
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    /// * `start_value` - The initial count value
    /// * `funding_lamports` - Lamports moved from the caller into escrow
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    pub fn initialize(
        ctx: Context<Initialize>,
        start_value: i64,
        funding_lamports: u64,
    ) -> Result<()> {
        instructions::initialize(ctx, start_value, funding_lamports)
    }

    /// Increment the counter value by 1
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    pub fn increment(ctx: Context<Update>) -> Result<()> {
        instructions::increment(ctx)
    }

    /// Decrement the counter value by 1
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    pub fn decrement(ctx: Context<Update>) -> Result<()> {
        instructions::decrement(ctx)
    }

    /// Finalize the counter, paying the escrow out to the owner
    ///
    /// Requires the owner's signature, a count of at least 3, and an
    /// account balance of at least 0.1 SOL. On success the whole balance
    /// is transferred to the owner and the account is closed.
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    ///
    /// # Errors
    /// * `CountNotHighEnough` - If the count is below 3
    /// * `BalanceNotHighEnough` - If the account holds less than 0.1 SOL
    /// * `Unauthorized` - If the signer is not the recorded owner
    pub fn finalize(ctx: Context<Finalize>) -> Result<()> {
        instructions::finalize(ctx)
    }

    /// Get the current counter value
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    ///
    /// # Returns
    /// * `Result<i64>` - The current count
    pub fn get_count(ctx: Context<GetCount>) -> Result<i64> {
        instructions::get_count(ctx)
    }
}
