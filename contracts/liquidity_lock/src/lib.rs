//! # Liquidity Lock Contract
//!
//! This is the root crate of the **Liquidity Lock** protocol. It exposes the
//! single Soroban contract `LiquidityLock` whose entry points cover the full
//! lock lifecycle:
//!
//! | Phase       | Entry Point(s)                                          |
//! |-------------|---------------------------------------------------------|
//! | Bootstrap   | [`LiquidityLock::init`]                                 |
//! | Collecting  | [`LiquidityLock::deposit`]                              |
//! | Refund path | [`LiquidityLock::refund`], [`LiquidityLock::refund_withdrawal`] |
//! | Execution   | [`LiquidityLock::execute`], [`LiquidityLock::setup`]    |
//! | Vesting     | `redeem_lp_tokens`, `redeem_bonus`, `claim_for`         |
//! | Queries     | `get_amount`, `get_vesting`, `get_state`, `get_config`  |
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`], schedule math to
//! [`vesting`], and cross-contract calls to the clients in [`clients`]. This
//! file contains the entry points, the phase gating, and event emissions.
//!
//! ## Lifecycle
//!
//! The lock collects bounded deposits while in the initial phase, then the
//! owner takes it into exactly one of two terminal states: `refund` (every
//! depositor withdraws their exact contribution) or `execute` (deposits are
//! paired with bonus tokens on an external market; the resulting LP tokens
//! and a bonus-grant pot vest pro-rata to each depositor under a shared
//! cliff-and-linear schedule). Terminal states are permanent and mutually
//! exclusive.
//!
//! ## On-behalf-of calls
//!
//! `refund_withdrawal`, `setup`, `redeem_lp_tokens`, `redeem_bonus` and
//! `claim_for` are deliberately callable by anyone for any depositor: the
//! caller only triggers the operation, value always flows to the named
//! depositor. Do not add caller checks here.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env, String,
};

pub mod clients;
mod events;
mod storage;
mod types;
mod vesting;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod testutils;

use clients::{BonusPoolClient, LiquidityMarketClient};
use storage::{
    has_owner, load_amount, load_config, load_lp_token, load_owner, load_state, load_vesting,
    save_amount, save_config, save_lp_token, save_owner, save_state, save_vesting,
};
pub use types::{DepositorVesting, LockConfig, LockState, Schedule, StakingConfig, TokenGrant};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Bootstrap
    AlreadyInitialized   = 1,
    InvalidConfig        = 2,
    // Admission
    RecipientExcluded    = 3,
    OwnerExcluded        = 4,
    NothingSent          = 5,
    BelowMinimum         = 6,
    AboveMaximum         = 7,
    HardLimitExceeded    = 8,
    // Phase
    ContractDisabled     = 9,
    NotDisabled          = 10,
    NotExecuted          = 11,
    // Already done
    AlreadyDisabled      = 12,
    AlreadyExecuted      = 13,
    SetupAlreadyCalled   = 14,
    // Execution preconditions
    NoDeposits           = 15,
    PoolNotOwned         = 16,
    SoftLimitNotReached  = 17,
    DueDatePassed        = 18,
    // Redemption
    NoDepositFromAddress = 19,
    NoSetup              = 20,
    NothingToWithdraw    = 21,
    NothingToRedeem      = 22,
    NothingVestedYet     = 23,
    // Arithmetic
    Overflow             = 24,
}

/// Which vesting track a redemption call is operating on.
#[derive(Clone, Copy)]
enum Track {
    Lp,
    Bonus,
    Reward,
}

#[contract]
pub struct LiquidityLock;

#[contractimpl]
impl LiquidityLock {
    // ─────────────────────────────────────────────────────────
    // Bootstrap
    // ─────────────────────────────────────────────────────────

    /// Initialise the lock with its owner and immutable configuration.
    ///
    /// Must be called exactly once immediately after deployment; subsequent
    /// calls fail with `AlreadyInitialized`. A config that could never vest
    /// (invalid schedule, zero interval, cliff past duration) or never
    /// execute (`soft_limit > hard_limit`, non-positive ratio) is rejected
    /// outright with `InvalidConfig`.
    pub fn init(env: Env, owner: Address, config: LockConfig) {
        owner.require_auth();

        if has_owner(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        Self::validate_config(&env, &config);

        save_owner(&env, &owner);
        save_config(&env, &config);
        save_state(
            &env,
            &LockState {
                total_deposited: 0,
                disabled: false,
                executed: false,
                executed_at: 0,
                total_lp_tokens: 0,
                total_bonus_tokens: 0,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Collecting
    // ─────────────────────────────────────────────────────────

    /// Record a deposit of `amount` deposit tokens from `from`.
    ///
    /// Admission rules, checked before any state change:
    /// - the recipient and the owner are excluded;
    /// - `amount` must be positive, at least `min_deposit`, and at most
    ///   `max_deposit` (unless `max_deposit` is 0 = unlimited);
    /// - the bonus-equivalent of the new total
    ///   (`(total + amount) * ratio`) must not exceed `hard_limit`.
    ///
    /// Legal only while neither terminal flag is set. The tokens are held by
    /// the contract until the lock refunds or executes.
    pub fn deposit(env: Env, from: Address, amount: i128) {
        from.require_auth();

        let config = load_config(&env);
        let mut state = load_state(&env);
        Self::require_depositing(&env, &state);

        if from == config.recipient {
            panic_with_error!(&env, Error::RecipientExcluded);
        }
        if from == load_owner(&env) {
            panic_with_error!(&env, Error::OwnerExcluded);
        }
        if amount <= 0 {
            panic_with_error!(&env, Error::NothingSent);
        }
        if amount < config.min_deposit {
            panic_with_error!(&env, Error::BelowMinimum);
        }
        if config.max_deposit != 0 && amount > config.max_deposit {
            panic_with_error!(&env, Error::AboveMaximum);
        }

        let new_total = state
            .total_deposited
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        if Self::bonus_equivalent(&env, new_total, config.ratio) > config.hard_limit {
            panic_with_error!(&env, Error::HardLimitExceeded);
        }

        token::Client::new(&env, &config.deposit_token).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );

        let recorded = load_amount(&env, &from)
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, Error::Overflow));
        save_amount(&env, &from, recorded);
        state.total_deposited = new_total;
        save_state(&env, &state);

        events::deposited(&env, &from, amount, new_total);
    }

    // ─────────────────────────────────────────────────────────
    // Refund path
    // ─────────────────────────────────────────────────────────

    /// Disable the lock, making every recorded deposit withdrawable.
    ///
    /// Owner-only, once; `reason` is recorded in the event for audit and has
    /// no semantic effect.
    pub fn refund(env: Env, reason: String) {
        load_owner(&env).require_auth();

        let mut state = load_state(&env);
        if state.executed {
            panic_with_error!(&env, Error::AlreadyExecuted);
        }
        if state.disabled {
            panic_with_error!(&env, Error::AlreadyDisabled);
        }

        state.disabled = true;
        save_state(&env, &state);

        events::disabled(&env, &reason);
    }

    /// Return `depositor`'s full recorded contribution to them.
    ///
    /// Callable by anyone; the funds always go to `depositor`. Requires the
    /// disabled phase and a non-zero record. A repeat call finds the record
    /// already zeroed and fails with `NothingToWithdraw`.
    pub fn refund_withdrawal(env: Env, depositor: Address) {
        let config = load_config(&env);
        let state = load_state(&env);
        if !state.disabled {
            panic_with_error!(&env, Error::NotDisabled);
        }

        let amount = load_amount(&env, &depositor);
        if amount == 0 {
            panic_with_error!(&env, Error::NothingToWithdraw);
        }

        // Zero the record before paying out.
        save_amount(&env, &depositor, 0);
        token::Client::new(&env, &config.deposit_token).transfer(
            &env.current_contract_address(),
            &depositor,
            &amount,
        );

        events::withdrawn(&env, &depositor, amount);
    }

    // ─────────────────────────────────────────────────────────
    // Execution
    // ─────────────────────────────────────────────────────────

    /// Convert the collected deposits into LP tokens and a bonus-grant pot.
    ///
    /// Owner-only, once. Preconditions, checked in order: at least one
    /// deposit; this contract owns the bonus pool; the bonus-equivalent of
    /// the total reaches `soft_limit`; the optional `due_date` has not
    /// passed. On success the pool is drained in three slices — the pairing
    /// amount (`total * ratio`) goes to the market together with every
    /// collected deposit token, the staking reward reserve stays in the
    /// contract, and whatever remains becomes the pro-rata bonus-grant pot.
    pub fn execute(env: Env) {
        load_owner(&env).require_auth();

        let config = load_config(&env);
        let mut state = load_state(&env);
        Self::require_depositing(&env, &state);

        if state.total_deposited == 0 {
            panic_with_error!(&env, Error::NoDeposits);
        }

        let this = env.current_contract_address();
        let pool = BonusPoolClient::new(&env, &config.bonus_pool);
        if pool.owner() != this {
            panic_with_error!(&env, Error::PoolNotOwned);
        }

        let pairing = Self::bonus_equivalent(&env, state.total_deposited, config.ratio);
        if pairing < config.soft_limit {
            panic_with_error!(&env, Error::SoftLimitNotReached);
        }
        if config.due_date != 0 && env.ledger().timestamp() > config.due_date {
            panic_with_error!(&env, Error::DueDatePassed);
        }

        // Slice 1: the pairing amount, straight through to the market.
        pool.withdraw(&this, &pairing);
        // Slice 2: the staking reward reserve, held by this contract.
        if config.staking.total_reward > 0 {
            pool.withdraw(&this, &config.staking.total_reward);
        }
        // Slice 3: everything left becomes the bonus-grant pot (may be 0).
        let pot = pool.available();
        if pot > 0 {
            pool.withdraw(&this, &pot);
        }

        let market = LiquidityMarketClient::new(&env, &config.market);
        token::Client::new(&env, &config.deposit_token).transfer(
            &this,
            &config.market,
            &state.total_deposited,
        );
        token::Client::new(&env, &config.bonus_token).transfer(&this, &config.market, &pairing);
        let lp_minted = market.add_liquidity(&state.total_deposited, &pairing, &this);
        save_lp_token(&env, &market.lp_token());

        state.executed = true;
        state.executed_at = env.ledger().timestamp();
        state.total_lp_tokens = lp_minted;
        state.total_bonus_tokens = pot;
        save_state(&env, &state);

        events::executed(&env, state.total_deposited, lp_minted, pot);
    }

    /// Freeze `depositor`'s pro-rata share of every proceeds class.
    ///
    /// Callable by anyone, at most once per depositor, only after execution,
    /// and only for addresses with a recorded contribution. Shares use floor
    /// division; the small remainders stay in the contract and are never
    /// redistributed.
    pub fn setup(env: Env, depositor: Address) {
        let config = load_config(&env);
        let state = load_state(&env);
        if !state.executed {
            panic_with_error!(&env, Error::NotExecuted);
        }

        let amount = load_amount(&env, &depositor);
        if amount == 0 {
            panic_with_error!(&env, Error::NoDepositFromAddress);
        }
        if load_vesting(&env, &depositor).is_some() {
            panic_with_error!(&env, Error::SetupAlreadyCalled);
        }

        let lp = Self::pro_rata(&env, state.total_lp_tokens, amount, state.total_deposited);
        let bonus = Self::pro_rata(&env, state.total_bonus_tokens, amount, state.total_deposited);
        let reward = Self::pro_rata(
            &env,
            config.staking.total_reward,
            amount,
            state.total_deposited,
        );

        save_vesting(&env, &depositor, &DepositorVesting::new(lp, bonus, reward));

        events::setup_done(&env, &depositor, lp, bonus, reward);
    }

    // ─────────────────────────────────────────────────────────
    // Vesting
    // ─────────────────────────────────────────────────────────

    /// Release the newly vested slice of `depositor`'s LP grant.
    ///
    /// Callable by anyone; LP tokens go to `depositor`. Fails with
    /// `NothingVestedYet` before the cliff and when no new interval has
    /// elapsed since the previous redemption, and with `NothingToRedeem`
    /// once the grant is fully drained (or was zero to begin with).
    pub fn redeem_lp_tokens(env: Env, depositor: Address) {
        Self::redeem(env, depositor, Track::Lp);
    }

    /// Release the newly vested slice of `depositor`'s bonus-token grant.
    ///
    /// Same gating as [`LiquidityLock::redeem_lp_tokens`].
    pub fn redeem_bonus(env: Env, depositor: Address) {
        Self::redeem(env, depositor, Track::Bonus);
    }

    /// Release the newly accrued slice of `depositor`'s staking reward.
    ///
    /// Linear mode follows the shared schedule over `staking.duration`;
    /// non-linear mode releases the whole share only at end of duration.
    pub fn claim_for(env: Env, depositor: Address) {
        Self::redeem(env, depositor, Track::Reward);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_owner(env: Env) -> Address {
        load_owner(&env)
    }

    pub fn get_config(env: Env) -> LockConfig {
        load_config(&env)
    }

    pub fn get_state(env: Env) -> LockState {
        load_state(&env)
    }

    /// Recorded contribution for `depositor`; 0 when none (or withdrawn).
    pub fn get_amount(env: Env, depositor: Address) -> i128 {
        load_amount(&env, &depositor)
    }

    /// Vesting record for `depositor`, or `None` before `setup`.
    pub fn get_vesting(env: Env, depositor: Address) -> Option<DepositorVesting> {
        load_vesting(&env, &depositor)
    }

    /// LP token address minted by the market. Panics before execution.
    pub fn get_lp_token(env: Env) -> Address {
        load_lp_token(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Internal helpers
    // ─────────────────────────────────────────────────────────

    fn validate_config(env: &Env, config: &LockConfig) {
        let schedule = &config.schedule;
        if !schedule.is_valid || schedule.interval == 0 || schedule.cliff >= schedule.duration {
            panic_with_error!(env, Error::InvalidConfig);
        }
        if config.ratio <= 0 || config.hard_limit <= 0 || config.soft_limit > config.hard_limit {
            panic_with_error!(env, Error::InvalidConfig);
        }
        if config.min_deposit < 0
            || config.max_deposit < 0
            || (config.max_deposit != 0 && config.min_deposit > config.max_deposit)
        {
            panic_with_error!(env, Error::InvalidConfig);
        }
        if config.staking.total_reward < 0
            || (config.staking.total_reward > 0 && config.staking.duration == 0)
        {
            panic_with_error!(env, Error::InvalidConfig);
        }
    }

    /// Deposits count against the limits in bonus-asset units.
    fn bonus_equivalent(env: &Env, amount: i128, ratio: i128) -> i128 {
        amount
            .checked_mul(ratio)
            .unwrap_or_else(|| panic_with_error!(env, Error::Overflow))
    }

    fn require_depositing(env: &Env, state: &LockState) {
        if state.disabled {
            panic_with_error!(env, Error::ContractDisabled);
        }
        if state.executed {
            panic_with_error!(env, Error::AlreadyExecuted);
        }
    }

    /// `pool_total * amount / total`, floored.
    fn pro_rata(env: &Env, pool_total: i128, amount: i128, total: i128) -> i128 {
        pool_total
            .checked_mul(amount)
            .unwrap_or_else(|| panic_with_error!(env, Error::Overflow))
            / total
    }

    /// Shared redemption path for all three vesting tracks.
    ///
    /// The ledger mutation (released incremented, record saved) happens
    /// before the outgoing transfer.
    fn redeem(env: Env, depositor: Address, track: Track) {
        let config = load_config(&env);
        let state = load_state(&env);
        if !state.executed {
            panic_with_error!(&env, Error::NotExecuted);
        }

        let mut record = match load_vesting(&env, &depositor) {
            Some(v) if v.is_active => v,
            _ => panic_with_error!(&env, Error::NoSetup),
        };

        let schedule = &config.schedule;
        let elapsed = env.ledger().timestamp() - state.executed_at;

        let grant = match track {
            Track::Lp => &mut record.lp_grant,
            Track::Bonus => &mut record.bonus_grant,
            Track::Reward => &mut record.reward_grant,
        };
        if grant.total == 0 || grant.released >= grant.total {
            panic_with_error!(&env, Error::NothingToRedeem);
        }

        let amount = match track {
            Track::Lp | Track::Bonus => vesting::releasable(
                grant.total,
                grant.released,
                schedule.cliff,
                schedule.duration,
                schedule.interval,
                elapsed,
            )
            .unwrap_or_else(|err| panic_with_error!(&env, err)),
            Track::Reward => {
                if config.staking.is_linear {
                    vesting::releasable(
                        grant.total,
                        grant.released,
                        schedule.cliff,
                        config.staking.duration,
                        schedule.interval,
                        elapsed,
                    )
                    .unwrap_or_else(|err| panic_with_error!(&env, err))
                } else {
                    vesting::releasable_at_end(
                        grant.total,
                        grant.released,
                        config.staking.duration,
                        elapsed,
                    )
                }
            }
        };
        if amount == 0 {
            panic_with_error!(&env, Error::NothingVestedYet);
        }

        grant.released += amount;
        let released_total = grant.released;
        record.last_redemption_period =
            vesting::period_index(schedule.cliff, schedule.interval, elapsed);
        save_vesting(&env, &depositor, &record);

        let this = env.current_contract_address();
        match track {
            Track::Lp => {
                token::Client::new(&env, &load_lp_token(&env)).transfer(
                    &this,
                    &depositor,
                    &amount,
                );
                events::lp_redeemed(&env, &depositor, amount, released_total);
            }
            Track::Bonus => {
                token::Client::new(&env, &config.bonus_token).transfer(&this, &depositor, &amount);
                events::bonus_redeemed(&env, &depositor, amount, released_total);
            }
            Track::Reward => {
                token::Client::new(&env, &config.bonus_token).transfer(&this, &depositor, &amount);
                events::rewards_claimed(&env, &depositor, amount, released_total);
            }
        }
    }
}
