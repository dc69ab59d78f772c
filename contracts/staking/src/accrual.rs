use yieldfarm_shared::SECONDS_PER_DAY;

/// Seconds elapsed between `start` and `now`.
///
/// The ledger clock is monotonic, so a `start` in the future only happens for
/// records that were never stamped; those have accrued nothing.
pub fn elapsed_since(start: u64, now: u64) -> u64 {
    now.saturating_sub(start)
}

/// Yield earned by `balance` staked units over `elapsed` seconds.
///
/// One reward unit per staked unit per day, truncated toward zero. Returns
/// `None` if the intermediate product overflows.
pub fn accrued_yield(balance: i128, elapsed: u64) -> Option<i128> {
    balance
        .checked_mul(elapsed as i128)?
        .checked_div(SECONDS_PER_DAY as i128)
}

/// Banked yield plus whatever the current balance accrued since the last reset.
pub fn settle(unclaimed: i128, balance: i128, elapsed: u64) -> Option<i128> {
    unclaimed.checked_add(accrued_yield(balance, elapsed)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_unit_per_staked_unit_per_day() {
        assert_eq!(accrued_yield(10, SECONDS_PER_DAY), Some(10));
        assert_eq!(accrued_yield(10, 3 * SECONDS_PER_DAY), Some(30));
    }

    #[test]
    fn partial_days_truncate() {
        // 10 units for half a day is exactly 5
        assert_eq!(accrued_yield(10, SECONDS_PER_DAY / 2), Some(5));
        // 1 unit for just under a day earns nothing yet
        assert_eq!(accrued_yield(1, SECONDS_PER_DAY - 1), Some(0));
        assert_eq!(accrued_yield(3, SECONDS_PER_DAY / 2), Some(1));
    }

    #[test]
    fn zero_balance_or_zero_time_accrues_nothing() {
        assert_eq!(accrued_yield(0, 10 * SECONDS_PER_DAY), Some(0));
        assert_eq!(accrued_yield(1_000_000, 0), Some(0));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(accrued_yield(i128::MAX, 2), None);
        assert_eq!(settle(i128::MAX, 1, SECONDS_PER_DAY), None);
    }

    #[test]
    fn settle_adds_banked_yield() {
        assert_eq!(settle(7, 10, SECONDS_PER_DAY), Some(17));
        assert_eq!(settle(7, 0, SECONDS_PER_DAY), Some(7));
    }

    #[test]
    fn elapsed_never_underflows() {
        assert_eq!(elapsed_since(100, 250), 150);
        assert_eq!(elapsed_since(250, 100), 0);
    }
}
