//! Initialize instruction for the Escrow Counter program

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::events::CounterInitialized;
use crate::state::CounterAccount;

/// Initialize a counter account and fund its escrow
///
/// Creates the counter account when the identity slot is empty and
/// re-initializes it in place when it is already live, recording the
/// caller as owner either way. `funding_lamports` is then transferred
/// from the caller into the account; on a live slot the transfer adds to
/// whatever is already escrowed there.
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
/// * `start_value` - The initial count value
/// * `funding_lamports` - Lamports moved from the caller into escrow
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Events
/// * `CounterInitialized` - Emitted when the counter is successfully initialized
pub fn initialize(
    ctx: Context<Initialize>,
    start_value: i64,
    funding_lamports: u64,
) -> Result<()> {
    let counter = &mut ctx.accounts.counter;
    let clock = Clock::get()?;

    // Initialize the counter using the state method
    counter.initialize(ctx.accounts.user.key(), start_value, &clock)?;

    // Move the escrow funding from the caller into the counter account
    if funding_lamports > 0 {
        let cpi_ctx = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: counter.to_account_info(),
            },
        );
        system_program::transfer(cpi_ctx, funding_lamports)?;
    }

    // Emit initialization event
    emit!(CounterInitialized {
        counter: counter.key(),
        owner: counter.owner,
        initial_count: counter.count,
        funded_lamports: funding_lamports,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Counter initialized with count {} and {} escrowed lamports for owner {}",
        counter.count,
        funding_lamports,
        counter.owner
    );

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The counter account; the identity keypair signs its creation.
    /// A live slot is re-initialized in place rather than rejected.
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + CounterAccount::INIT_SPACE
    )]
    pub counter: Account<'info, CounterAccount>,

    /// The caller paying rent and funding; recorded as the counter's owner
    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}
