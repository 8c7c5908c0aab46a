// src/core/formatters.rs
//! Field formatters: age, Arabic age agreement and long dates

use chrono::{DateTime, Datelike, NaiveDate};

use crate::types::state::Lang;

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Levantine month names, as used for ar-JO
const AR_MONTHS: [&str; 12] = [
    "كانون الثاني",
    "شباط",
    "آذار",
    "نيسان",
    "أيار",
    "حزيران",
    "تموز",
    "آب",
    "أيلول",
    "تشرين الأول",
    "تشرين الثاني",
    "كانون الأول",
];

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Completed years between `birth` and `today`
pub fn age(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}

/// Age as display text.
///
/// Arabic picks the noun form by exact value: 1 singular, 2 dual, 3 to 10
/// plural, everything else the singular-looking form.
pub fn format_age(age: i32, lang: Lang) -> String {
    match lang {
        Lang::Ar => {
            let noun = match age {
                1 => "سنة",
                2 => "سنتين",
                3..=10 => "سنوات",
                _ => "سنة",
            };
            format!("{} {}", age, noun)
        }
        Lang::En => format!("{} years old", age),
    }
}

/// Long date for the active language. Unparsable input is returned trimmed.
pub fn format_date(input: &str, lang: Lang) -> String {
    let Some(date) = parse_date(input) else {
        return input.trim().to_string();
    };

    let month = date.month0() as usize;
    match lang {
        Lang::En => format!("{} {}, {}", EN_MONTHS[month], date.day(), date.year()),
        Lang::Ar => format!(
            "{} {} {}",
            arabic_digits(&date.day().to_string()),
            AR_MONTHS[month],
            arabic_digits(&date.year().to_string())
        ),
    }
}

/// Fixed-point text with ties rounded away from zero (`3.125` -> `3.13`)
pub fn fixed_decimals(value: f64, decimals: u32) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", decimals as usize, rounded)
}

/// Replace ASCII digits with Arabic-Indic digits
pub fn arabic_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fixed_decimals_rounds_ties_up() {
        assert_eq!(fixed_decimals(3.125, 2), "3.13");
        assert_eq!(fixed_decimals(3.625, 2), "3.63");
        assert_eq!(fixed_decimals(2.375, 2), "2.38");
        assert_eq!(fixed_decimals(4.0, 2), "4.00");
    }

    #[test]
    fn age_before_birthday() {
        assert_eq!(age(date(2000, 6, 15), date(2024, 6, 14)), 23);
    }

    #[test]
    fn age_on_birthday() {
        assert_eq!(age(date(2000, 6, 15), date(2024, 6, 15)), 24);
    }

    #[test]
    fn age_earlier_month_counts() {
        assert_eq!(age(date(2000, 6, 15), date(2024, 5, 30)), 23);
        assert_eq!(age(date(2000, 6, 15), date(2024, 7, 1)), 24);
    }

    #[test]
    fn arabic_age_forms() {
        assert!(format_age(1, Lang::Ar).ends_with("سنة"));
        assert!(format_age(2, Lang::Ar).ends_with("سنتين"));
        assert!(format_age(5, Lang::Ar).ends_with("سنوات"));
        assert!(format_age(10, Lang::Ar).ends_with("سنوات"));
        assert_eq!(format_age(12, Lang::Ar), "12 سنة");
        assert_eq!(format_age(0, Lang::Ar), "0 سنة");
    }

    #[test]
    fn english_age_template() {
        assert_eq!(format_age(24, Lang::En), "24 years old");
    }

    #[test]
    fn parses_plain_and_rfc3339_dates() {
        assert_eq!(parse_date("2024-06-15"), Some(date(2024, 6, 15)));
        assert_eq!(
            parse_date("2024-06-15T10:00:00Z"),
            Some(date(2024, 6, 15))
        );
        assert_eq!(parse_date("soon"), None);
    }

    #[test]
    fn long_dates() {
        assert_eq!(format_date("2024-06-15", Lang::En), "June 15, 2024");
        assert_eq!(format_date("2024-06-15", Lang::Ar), "١٥ حزيران ٢٠٢٤");
        assert_eq!(format_date(" Spring 2024 ", Lang::En), "Spring 2024");
    }
}
