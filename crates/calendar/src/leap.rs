//! Gregorian leap-year rule and year lengths.

/// Returns `true` if `year` is a Gregorian leap year.
///
/// A year is a leap year when it is divisible by 4 and not by 100,
/// unless it is also divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given year (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisible_by_four() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2020));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2022));
    }

    #[test]
    fn century_exception() {
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn four_hundred_exception() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1600));
    }

    #[test]
    fn year_lengths() {
        assert_eq!(days_in_year(2023), 365);
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
    }

    #[test]
    fn negative_years() {
        // Proleptic Gregorian: the rule extends backwards unchanged.
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-1));
    }
}
