//! Month arithmetic and label formatting for forecast periods.
//!
//! Every period the dashboard shows is a whole calendar month, so all
//! arithmetic normalizes to the first of the month before shifting.

use chrono::{Datelike, NaiveDate};

/// Shifts `date` by `delta` calendar months (negative shifts go back in
/// time) and snaps to the first of the resulting month.
pub fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let zero_based = date.year() * 12 + date.month0() as i32 + delta;
    let year = zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is always valid")
}

/// Short chart-axis label, e.g. `Sep '26`.
pub fn short_month_label(date: NaiveDate) -> String {
    date.format("%b '%y").to_string()
}

/// Long table-row label, e.g. `September 2026`.
pub fn long_month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
