//! Salary-driven derived writes.
//!
//! Setting a profile's salary to a new positive value creates exactly one
//! income/"other" transaction for that amount. The decision is a pure
//! function here; the profile repository executes it atomically alongside
//! the profile write.

use rust_decimal::Decimal;

/// Decides whether changing the salary fires a salary transaction.
///
/// Fires only when the new value is positive and differs from the
/// previously stored value. Returns the income amount to book, or `None`
/// when nothing should fire (unchanged value, zero, or negative).
#[must_use]
pub fn salary_transaction_amount(previous: Decimal, new: Decimal) -> Option<Decimal> {
    if new > Decimal::ZERO && new != previous {
        Some(new)
    } else {
        None
    }
}

/// Description attached to a salary-driven transaction.
#[must_use]
pub fn salary_description(username: &str) -> String {
    format!("Salary for {username}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_positive_salary_fires() {
        assert_eq!(
            salary_transaction_amount(dec!(0), dec!(1000)),
            Some(dec!(1000))
        );
    }

    #[test]
    fn test_changed_salary_fires_for_new_amount() {
        assert_eq!(
            salary_transaction_amount(dec!(1000), dec!(500)),
            Some(dec!(500))
        );
    }

    #[test]
    fn test_unchanged_salary_does_not_refire() {
        assert_eq!(salary_transaction_amount(dec!(1000), dec!(1000)), None);
    }

    #[test]
    fn test_zero_salary_does_not_fire() {
        assert_eq!(salary_transaction_amount(dec!(1000), dec!(0)), None);
    }

    #[test]
    fn test_negative_salary_does_not_fire() {
        assert_eq!(salary_transaction_amount(dec!(0), dec!(-100)), None);
    }

    #[test]
    fn test_salary_description() {
        assert_eq!(salary_description("alice"), "Salary for alice");
    }

    /// Two writers setting the same value decide against each other's
    /// committed result, not a shared stale read: once the first fires,
    /// the second sees the new value and stays silent. This is the
    /// contract the repository upholds by locking the profile row before
    /// reading `previous`.
    #[test]
    fn test_serialized_same_value_updates_fire_once() {
        let mut stored = dec!(0);
        let mut fired = 0;

        for _ in 0..2 {
            if let Some(amount) = salary_transaction_amount(stored, dec!(1000)) {
                assert_eq!(amount, dec!(1000));
                fired += 1;
            }
            stored = dec!(1000);
        }

        assert_eq!(fired, 1);
    }
}
