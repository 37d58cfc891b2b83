//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key       | Type         | Description                              |
//! |-----------|--------------|------------------------------------------|
//! | `Owner`   | `Address`    | Contract owner (refund/execute rights)   |
//! | `Config`  | `LockConfig` | Immutable deployment parameters          |
//! | `State`   | `LockState`  | Totals + lifecycle flags                 |
//! | `LpToken` | `Address`    | LP token address, learned at execution   |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day
//! remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                | Type               | Description                 |
//! |--------------------|--------------------|-----------------------------|
//! | `Amount(addr)`     | `i128`             | Recorded contribution       |
//! | `Vesting(addr)`    | `DepositorVesting` | Grants + release progress   |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{DepositorVesting, LockConfig, LockState};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// Global singletons live on the instance tier and are extended together.
/// Per-depositor entries live on the persistent tier with independent TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Contract owner (Instance).
    Owner,
    /// Immutable lock configuration (Instance).
    Config,
    /// Mutable totals and lifecycle flags (Instance).
    State,
    /// LP token minted by the market, recorded at execution (Instance).
    LpToken,
    /// Recorded contribution per depositor (Persistent).
    Amount(Address),
    /// Vesting record per depositor (Persistent).
    Vesting(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn save_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

/// Panics if `init` has not run.
pub fn load_owner(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("not initialized")
}

pub fn save_config(env: &Env, config: &LockConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Panics if `init` has not run.
pub fn load_config(env: &Env) -> LockConfig {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("not initialized")
}

pub fn save_state(env: &Env, state: &LockState) {
    env.storage().instance().set(&DataKey::State, state);
    bump_instance(env);
}

/// Panics if `init` has not run.
pub fn load_state(env: &Env) -> LockState {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::State)
        .expect("not initialized")
}

pub fn save_lp_token(env: &Env, lp_token: &Address) {
    env.storage().instance().set(&DataKey::LpToken, lp_token);
    bump_instance(env);
}

/// Panics if `execute` has not run.
pub fn load_lp_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::LpToken)
        .expect("not executed")
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Recorded contribution for `depositor`; 0 when none.
pub fn load_amount(env: &Env, depositor: &Address) -> i128 {
    let key = DataKey::Amount(depositor.clone());
    let amount: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    if amount != 0 {
        bump_persistent(env, &key);
    }
    amount
}

pub fn save_amount(env: &Env, depositor: &Address, amount: i128) {
    let key = DataKey::Amount(depositor.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

/// Vesting record for `depositor`, or `None` before `setup`.
pub fn load_vesting(env: &Env, depositor: &Address) -> Option<DepositorVesting> {
    let key = DataKey::Vesting(depositor.clone());
    let vesting: Option<DepositorVesting> = env.storage().persistent().get(&key);
    if vesting.is_some() {
        bump_persistent(env, &key);
    }
    vesting
}

pub fn save_vesting(env: &Env, depositor: &Address, vesting: &DepositorVesting) {
    let key = DataKey::Vesting(depositor.clone());
    env.storage().persistent().set(&key, vesting);
    bump_persistent(env, &key);
}
