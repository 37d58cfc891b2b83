#![allow(dead_code)]

extern crate std;

use crate::types::{DepositorVesting, LockState, TokenGrant};

/// INV-1: while collecting, the sum of all recorded contributions equals the
/// running total.
pub fn assert_conservation(record_sum: i128, state: &LockState) {
    assert_eq!(
        record_sum, state.total_deposited,
        "INV-1 violated: record sum {} != total deposited {}",
        record_sum, state.total_deposited
    );
}

/// INV-2: the bonus-equivalent of the total never exceeds the hard limit.
pub fn assert_hard_limit(state: &LockState, ratio: i128, hard_limit: i128) {
    let equivalent = state
        .total_deposited
        .checked_mul(ratio)
        .expect("INV-2 violated: bonus-equivalent overflows");
    assert!(
        equivalent <= hard_limit,
        "INV-2 violated: bonus-equivalent {} exceeds hard limit {}",
        equivalent,
        hard_limit
    );
}

/// INV-3: a grant never releases more than its total, and never a negative
/// amount.
pub fn assert_grant_bounds(grant: &TokenGrant) {
    assert!(
        grant.released >= 0 && grant.released <= grant.total,
        "INV-3 violated: released {} outside [0, {}]",
        grant.released,
        grant.total
    );
}

/// INV-4: `released` is non-decreasing between two observations of the same
/// grant.
pub fn assert_monotonic_release(before: &TokenGrant, after: &TokenGrant) {
    assert!(
        after.released >= before.released,
        "INV-4 violated: released decreased from {} to {}",
        before.released,
        after.released
    );
}

/// INV-5: the two terminal flags are never both set.
pub fn assert_terminal_exclusivity(state: &LockState) {
    assert!(
        !(state.disabled && state.executed),
        "INV-5 violated: disabled and executed are both true"
    );
}

/// INV-6: a terminal flag, once observed, never clears.
pub fn assert_terminal_permanence(before: &LockState, after: &LockState) {
    assert!(
        !before.disabled || after.disabled,
        "INV-6 violated: disabled flag cleared"
    );
    assert!(
        !before.executed || after.executed,
        "INV-6 violated: executed flag cleared"
    );
}

/// Run the per-grant bounds over a whole vesting record.
pub fn assert_vesting_bounds(record: &DepositorVesting) {
    assert_grant_bounds(&record.lp_grant);
    assert_grant_bounds(&record.bonus_grant);
    assert_grant_bounds(&record.reward_grant);
}
