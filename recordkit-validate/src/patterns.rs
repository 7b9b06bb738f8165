//! Fixed value patterns, compiled once per process.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("price pattern"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1[3458][0-9][0-9]{4,8}$").expect("phone pattern"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.]{2,10}@[A-Za-z0-9_]+\.[a-z]{2,4}$").expect("email pattern")
});

static HAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{Han}+$").expect("han pattern"));

static LATIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("latin pattern"));

// chrono's %m and %d also take a single digit.
static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}( [0-9]{1,2}:[0-9]{2}:[0-9]{2})?$")
        .expect("date shape pattern")
});

pub(crate) fn is_price(s: &str) -> bool {
    PRICE.is_match(s)
}

pub(crate) fn is_phone(s: &str) -> bool {
    PHONE.is_match(s)
}

pub(crate) fn is_email(s: &str) -> bool {
    EMAIL.is_match(s)
}

pub(crate) fn is_han(s: &str) -> bool {
    HAN.is_match(s)
}

pub(crate) fn is_latin(s: &str) -> bool {
    LATIN.is_match(s)
}

/// `YYYY-MM-DD` or `YYYY-MM-DD hh:mm:ss`; slashes are accepted as date
/// separators. Month, day, minute and second take exactly two digits.
/// Anything longer than ten bytes must carry a time.
pub(crate) fn is_date(s: &str) -> bool {
    let normalized = s.replace('/', "-");
    if !DATE_SHAPE.is_match(&normalized) {
        return false;
    }
    if normalized.len() > 10 {
        NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S").is_ok()
    } else {
        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_need_exactly_two_decimals() {
        assert!(is_price("0.50"));
        assert!(!is_price("1.5"));
        assert!(!is_price("1.500"));
        assert!(!is_price(".50"));
    }

    #[test]
    fn phone_prefixes() {
        assert!(is_phone("13912345678"));
        assert!(is_phone("1581234"));
        assert!(!is_phone("16912345678"));
        assert!(!is_phone("1|12345678"));
        assert!(!is_phone("139123456789"));
    }

    #[test]
    fn email_shape() {
        assert!(is_email("li.na@gym.com"));
        assert!(!is_email("a@gym.com"));
        assert!(!is_email("lina@gymcom"));
    }

    #[test]
    fn dates_and_datetimes() {
        assert!(is_date("2024-02-29"));
        assert!(is_date("2024/02/29"));
        assert!(is_date("2024-02-29 23:59:59"));
        assert!(!is_date("2023-02-29"));
        assert!(!is_date("2024-02-29 25:00:00"));
        assert!(!is_date("yesterday"));
    }

    #[test]
    fn month_and_day_need_two_digits() {
        assert!(!is_date("2024-1-2"));
        assert!(!is_date("2024/1/02"));
        assert!(!is_date("2024-01-02 08:3:00"));
        assert!(is_date("2024-01-02 8:30:00"));
    }
}
