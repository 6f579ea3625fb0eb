use chrono::NaiveDate;

use crate::error::Error;

/// Convert a MEDLINE-style date (`2020 Jan 15`, `2020 Jan` or `2020`) into the
/// `YYYY-MM-DD` form Jekyll expects for post dates.
///
/// Coarser dates are pinned to the first month and day.
pub fn normalize_date(date: &str) -> Result<String, Error> {
    let bad = || Error::BadDate(date.trim().to_string());

    // chrono's `%Y` takes any width and its spaces match zero or more, so
    // check the token shape before handing it over.
    let parts: Vec<&str> = date.split_whitespace().collect();
    let well_formed = match parts.as_slice() {
        [year] => is_year(year),
        [year, month] => is_year(year) && is_month(month),
        [year, month, day] => {
            is_year(year) && is_month(month) && day.bytes().all(|b| b.is_ascii_digit())
        }
        _ => false,
    };
    if !well_formed {
        return Err(bad());
    }

    let date = parts.join(" ");
    [date.clone(), format!("{date} 1"), format!("{date} Jan 1")]
        .iter()
        .find_map(|candidate| NaiveDate::parse_from_str(candidate, "%Y %b %d").ok())
        .map(|d| d.format("%Y-%m-%d").to_string())
        .ok_or_else(bad)
}

fn is_year(token: &str) -> bool {
    token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit())
}

fn is_month(token: &str) -> bool {
    token.len() == 3 && token.bytes().all(|b| b.is_ascii_alphabetic())
}
