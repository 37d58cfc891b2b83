//! # External collaborators
//!
//! Client traits for the two contracts the lock drives at execution time.
//! Both are black boxes: any failure inside them reverts the whole
//! invocation, which is exactly the atomicity the lifecycle needs.

use soroban_sdk::{contractclient, Address, Env};

/// Upstream pool holding the bonus-token allocation.
///
/// Execution requires the lock to be the pool's owner; `withdraw` moves
/// bonus tokens out to the lock.
#[contractclient(name = "BonusPoolClient")]
pub trait BonusPool {
    fn owner(env: Env) -> Address;
    fn transfer_ownership(env: Env, new_owner: Address);
    /// Owner-only. Moves `amount` bonus tokens to `to`.
    fn withdraw(env: Env, to: Address, amount: i128);
    /// Bonus tokens still held by the pool.
    fn available(env: Env) -> i128;
}

/// External liquidity market.
///
/// The lock transfers both assets to the market first, then calls
/// `add_liquidity`; the market mints LP tokens to `to` and returns the
/// minted amount.
#[contractclient(name = "LiquidityMarketClient")]
pub trait LiquidityMarket {
    fn add_liquidity(env: Env, deposit_amount: i128, bonus_amount: i128, to: Address) -> i128;
    fn lp_token(env: Env) -> Address;
}
