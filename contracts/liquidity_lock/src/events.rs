//! # Events
//!
//! Payload structs and emit helpers for every mutating entry point. Topics
//! carry a short symbol plus the depositor where one exists, so off-chain
//! consumers can filter per address without decoding payloads.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

/// A deposit was recorded.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposited {
    pub depositor: Address,
    pub amount: i128,
    pub total_deposited: i128,
}

/// The owner disabled the lock; deposits become refundable.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Disabled {
    pub reason: String,
}

/// A refund withdrawal was paid out.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub depositor: Address,
    pub amount: i128,
}

/// The lock executed: deposits were converted into LP and bonus proceeds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Executed {
    pub total_deposited: i128,
    pub total_lp_tokens: i128,
    pub total_bonus_tokens: i128,
}

/// A depositor's pro-rata grants were frozen.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SetupDone {
    pub depositor: Address,
    pub lp_total: i128,
    pub bonus_total: i128,
    pub reward_total: i128,
}

/// A vested amount was released. The topic symbol distinguishes the three
/// tracks (`lp_redeem`, `bz_redeem`, `claimed`).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Redeemed {
    pub depositor: Address,
    pub amount: i128,
    pub released_total: i128,
}

pub fn deposited(env: &Env, depositor: &Address, amount: i128, total_deposited: i128) {
    env.events().publish(
        (symbol_short!("deposited"), depositor.clone()),
        Deposited {
            depositor: depositor.clone(),
            amount,
            total_deposited,
        },
    );
}

pub fn disabled(env: &Env, reason: &String) {
    env.events().publish(
        (symbol_short!("disabled"),),
        Disabled {
            reason: reason.clone(),
        },
    );
}

pub fn withdrawn(env: &Env, depositor: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("withdrawn"), depositor.clone()),
        Withdrawn {
            depositor: depositor.clone(),
            amount,
        },
    );
}

pub fn executed(env: &Env, total_deposited: i128, total_lp: i128, total_bonus: i128) {
    env.events().publish(
        (symbol_short!("executed"),),
        Executed {
            total_deposited,
            total_lp_tokens: total_lp,
            total_bonus_tokens: total_bonus,
        },
    );
}

pub fn setup_done(env: &Env, depositor: &Address, lp: i128, bonus: i128, reward: i128) {
    env.events().publish(
        (symbol_short!("setup"), depositor.clone()),
        SetupDone {
            depositor: depositor.clone(),
            lp_total: lp,
            bonus_total: bonus,
            reward_total: reward,
        },
    );
}

pub fn lp_redeemed(env: &Env, depositor: &Address, amount: i128, released_total: i128) {
    env.events().publish(
        (symbol_short!("lp_redeem"), depositor.clone()),
        Redeemed {
            depositor: depositor.clone(),
            amount,
            released_total,
        },
    );
}

pub fn bonus_redeemed(env: &Env, depositor: &Address, amount: i128, released_total: i128) {
    env.events().publish(
        (symbol_short!("bz_redeem"), depositor.clone()),
        Redeemed {
            depositor: depositor.clone(),
            amount,
            released_total,
        },
    );
}

pub fn rewards_claimed(env: &Env, depositor: &Address, amount: i128, released_total: i128) {
    env.events().publish(
        (symbol_short!("claimed"), depositor.clone()),
        Redeemed {
            depositor: depositor.clone(),
            amount,
            released_total,
        },
    );
}
