//! Time and date calculation utilities.

use chrono::{Duration, NaiveDateTime};

use crate::server::error::Error;

/// Number of days an invite link stays valid.
pub const INVITE_VALID_DAYS: i64 = 7;

/// Calculates when an invite issued at `issued_at` expires.
///
/// # Returns
/// - `Ok(NaiveDateTime)` - `issued_at` plus [`INVITE_VALID_DAYS`] days
/// - `Err(Error::ParseError)` - The result would overflow the supported date range
pub fn invite_expiry(issued_at: NaiveDateTime) -> Result<NaiveDateTime, Error> {
    issued_at
        .checked_add_signed(Duration::days(INVITE_VALID_DAYS))
        .ok_or_else(|| {
            Error::ParseError(format!(
                "Failed to calculate invite expiry for issue time {}",
                issued_at
            ))
        })
}

/// Converts `done` of `total` into an integer percentage clamped to `0..=100`.
pub fn progress_percent(done: usize, total: usize) -> i32 {
    if total == 0 {
        return 100;
    }

    ((done.min(total) * 100) / total) as i32
}
