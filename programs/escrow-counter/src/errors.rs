//! Errors module for the Escrow Counter program
//!
//! This module contains all custom error definitions used by the program.
//! Each error carries a descriptive message so callers can assert on the
//! surfaced string directly.

use anchor_lang::prelude::*;

/// Custom error codes for the Escrow Counter program
#[error_code]
pub enum CounterError {
    /// The counter has not been incremented far enough to finalize
    ///
    /// This error occurs when:
    /// - Finalize is attempted while the count is below the minimum of 3
    #[msg("Count must be at least 3 to finalize.")]
    CountNotHighEnough,

    /// The account does not hold enough lamports to finalize
    ///
    /// This error occurs when:
    /// - Finalize is attempted while the account balance, escrow and rent
    ///   reserve included, is below 0.1 SOL
    #[msg("Contract balance must be at least 0.1 SOL to finalize.")]
    BalanceNotHighEnough,

    /// The caller is not authorized to perform this operation
    ///
    /// This error occurs when:
    /// - The finalize signer does not match the owner recorded at
    ///   initialization
    #[msg("Unauthorized operation")]
    Unauthorized,

    /// An arithmetic operation failed (overflow, underflow, etc.)
    ///
    /// This error occurs when:
    /// - A counter step would leave the i64 domain
    #[msg("Arithmetic error")]
    ArithmeticError,
}
