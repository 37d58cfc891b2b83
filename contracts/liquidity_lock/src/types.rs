//! # Types
//!
//! Shared data structures of the liquidity lock.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! The lock is internally stored as two separate ledger entries:
//!
//! - [`LockConfig`] — written once at `init`; never mutated.
//! - [`LockState`] — rewritten on every deposit and on the terminal
//!   transition.
//!
//! Deposits are the high-frequency write path, so the mutable entry is kept
//! small (a handful of scalars) while the full parameter set stays in the
//! immutable entry.
//!
//! ### Lifecycle as two booleans
//!
//! The phase machine
//!
//! ```text
//! Depositing ──► Executed   (terminal)
//!     └────────► Disabled   (terminal, refund path)
//! ```
//!
//! is carried as `disabled`/`executed` flags on [`LockState`]. The two are
//! never both true, and neither ever reverts to false. Every entry point
//! checks the flags it requires before touching anything else.

use soroban_sdk::{contracttype, Address};

/// Cliff-and-linear release schedule shared by both proceeds grants.
///
/// All durations are in seconds. Entitlement grows in whole `interval` steps
/// between `cliff` and `duration`; at `duration` the full grant is released
/// regardless of interval granularity.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Schedule {
    pub is_valid: bool,
    pub cliff: u64,
    pub duration: u64,
    pub interval: u64,
}

/// Parameters of the staking-reward accrual track.
///
/// `total_reward` is split pro-rata among depositors at setup time. When
/// `is_linear` is false the whole share releases only once `duration` has
/// fully elapsed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingConfig {
    pub duration: u64,
    pub is_linear: bool,
    pub total_reward: i128,
}

/// Immutable deployment parameters, written once at `init`.
///
/// Limits are expressed in bonus-asset-equivalent units: a deposit of `v`
/// counts as `v * ratio` against `soft_limit` and `hard_limit`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockConfig {
    /// Asset collected from depositors.
    pub deposit_token: Address,
    /// Bonus asset drawn from `bonus_pool` at execution.
    pub bonus_token: Address,
    /// Upstream pool holding the bonus allocation; execution requires this
    /// contract to own it.
    pub bonus_pool: Address,
    /// External liquidity market that mints LP tokens.
    pub market: Address,
    /// Beneficiary of the lock; excluded from depositing.
    pub recipient: Address,
    /// Smallest accepted single deposit.
    pub min_deposit: i128,
    /// Largest accepted single deposit; 0 means unlimited.
    pub max_deposit: i128,
    /// Bonus-equivalent total required before `execute` may run.
    pub soft_limit: i128,
    /// Bonus-equivalent total deposits may never exceed.
    pub hard_limit: i128,
    /// Bonus units per deposit unit.
    pub ratio: i128,
    /// Optional execution deadline (ledger timestamp); 0 disables the gate.
    pub due_date: u64,
    pub schedule: Schedule,
    pub staking: StakingConfig,
}

/// Mutable global state, updated on deposits and the terminal transition.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockState {
    /// Sum of all recorded contributions. Monotonic while depositing.
    pub total_deposited: i128,
    /// Refund path taken; deposits become withdrawable.
    pub disabled: bool,
    /// Execution path taken; vesting clock runs from `executed_at`.
    pub executed: bool,
    /// Ledger timestamp of execution; 0 before.
    pub executed_at: u64,
    /// LP tokens minted at execution, distributed pro-rata.
    pub total_lp_tokens: i128,
    /// Bonus-grant pot drawn at execution, distributed pro-rata.
    pub total_bonus_tokens: i128,
}

/// One vesting track: how much was granted and how much has left.
///
/// Invariant: `0 <= released <= total`, and `released` only grows.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenGrant {
    pub total: i128,
    pub released: i128,
}

/// Per-depositor vesting record, created exactly once by `setup`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositorVesting {
    /// Set by `setup`; redemption requires it.
    pub is_active: bool,
    pub lp_grant: TokenGrant,
    pub bonus_grant: TokenGrant,
    pub reward_grant: TokenGrant,
    /// Interval index of the most recent redemption since the cliff.
    pub last_redemption_period: u64,
}

impl DepositorVesting {
    pub fn new(lp: i128, bonus: i128, reward: i128) -> Self {
        DepositorVesting {
            is_active: true,
            lp_grant: TokenGrant {
                total: lp,
                released: 0,
            },
            bonus_grant: TokenGrant {
                total: bonus,
                released: 0,
            },
            reward_grant: TokenGrant {
                total: reward,
                released: 0,
            },
            last_redemption_period: 0,
        }
    }
}
