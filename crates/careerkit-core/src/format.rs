//! Display formatting for report values, fixed to the en-US locale.

use chrono::NaiveDate;

/// `1200` -> `1,200`.
pub fn fmt_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar amount: `95000.0` -> `$95,000`, `1234.5` -> `$1,235`.
pub fn fmt_currency(amount: f64) -> String {
    let rounded = amount.max(0.0).round() as u64;
    format!("${}", fmt_thousands(rounded))
}

/// `2024-03-15` -> `March 15, 2024`.
pub fn fmt_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `12.0` -> `12%`, `12.5` -> `12.5%`.
pub fn fmt_percentage(p: f64) -> String {
    format!("{}%", p)
}

/// Upper-cases the first character only; the rest is left as given.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(fmt_thousands(0), "0");
        assert_eq!(fmt_thousands(999), "999");
        assert_eq!(fmt_thousands(1_200), "1,200");
        assert_eq!(fmt_thousands(12_000), "12,000");
        assert_eq!(fmt_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn currency_has_no_decimals() {
        assert_eq!(fmt_currency(95_000.0), "$95,000");
        assert_eq!(fmt_currency(120_499.6), "$120,500");
        assert_eq!(fmt_currency(0.0), "$0");
    }

    #[test]
    fn long_date_is_month_day_year() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(fmt_long_date(d), "March 15, 2024");
        let d = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
        assert_eq!(fmt_long_date(d), "January 5, 2023");
    }

    #[test]
    fn percentage_drops_trailing_zero() {
        assert_eq!(fmt_percentage(12.0), "12%");
        assert_eq!(fmt_percentage(6.5), "6.5%");
    }

    #[test]
    fn capitalizes_only_first_char() {
        assert_eq!(capitalize_first("data science"), "Data science");
        assert_eq!(capitalize_first("marketing_consultant"), "Marketing_consultant");
        assert_eq!(capitalize_first(""), "");
    }
}
