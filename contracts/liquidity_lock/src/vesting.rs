//! # Vesting math
//!
//! Pure cliff-and-linear release computation, shared by the LP grant, the
//! bonus grant, and (in linear mode) the staking-reward grant.
//!
//! Entitlement is quantized to whole `interval` steps past the cliff:
//!
//! ```text
//! vested(t) = 0                                    t <  cliff
//! vested(t) = total                                t >= duration
//! vested(t) = total * periods(t) / total_periods   otherwise
//!
//! periods(t)    = (t - cliff) / interval          (integer)
//! total_periods = (duration - cliff) / interval   (integer)
//! ```
//!
//! The final call at or past `duration` drains everything remaining, so
//! interval rounding can never strand dust in a grant.

use crate::Error;

/// Newly releasable amount for a grant at `elapsed` seconds into the
/// schedule.
///
/// Returns 0 both before the cliff and when no new interval has elapsed
/// since the last release; the caller decides whether 0 is an error
/// (entry points reject it so a same-interval second call reverts instead
/// of silently paying nothing).
pub fn releasable(
    total: i128,
    released: i128,
    cliff: u64,
    duration: u64,
    interval: u64,
    elapsed: u64,
) -> Result<i128, Error> {
    if elapsed < cliff {
        return Ok(0);
    }
    if elapsed >= duration {
        // Drain: everything still unreleased, regardless of interval
        // granularity.
        return Ok(total - released);
    }

    let total_periods = (duration - cliff) / interval;
    if total_periods == 0 {
        return Ok(total - released);
    }
    let periods = (elapsed - cliff) / interval;

    let vested = total
        .checked_mul(periods as i128)
        .ok_or(Error::Overflow)?
        / total_periods as i128;

    Ok((vested - released).max(0))
}

/// All-or-nothing variant backing the non-linear staking mode: nothing
/// before `duration`, the full remainder after.
pub fn releasable_at_end(
    total: i128,
    released: i128,
    duration: u64,
    elapsed: u64,
) -> i128 {
    if elapsed >= duration {
        total - released
    } else {
        0
    }
}

/// Interval index of `elapsed` within the schedule; 0 before the cliff.
pub fn period_index(cliff: u64, interval: u64, elapsed: u64) -> u64 {
    if elapsed < cliff || interval == 0 {
        0
    } else {
        (elapsed - cliff) / interval
    }
}
