use std::fmt::{Display, Write};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::config::DEFAULT_TIME_SEPARATOR_FORMAT;

/// Calendar day of `date` as seen from `tz`.
pub(crate) fn local_day<Tz: TimeZone>(date: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    date.with_timezone(tz).date_naive()
}

/// Renders the time separator label for `date` in `tz`.
///
/// Falls back to the default pattern if `format` cannot be rendered, so a
/// bad pattern never panics inside a render pass.
pub(crate) fn time_separator_label<Tz>(date: &DateTime<Utc>, tz: &Tz, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = date.with_timezone(tz);
    let mut label = String::new();
    if write!(label, "{}", local.format(format)).is_err() {
        label = local.format(DEFAULT_TIME_SEPARATOR_FORMAT).to_string();
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn day_boundary_follows_time_zone() {
        // 23:30 UTC on March 1st is already March 2nd two hours east.
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();
        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(local_day(&date, &Utc), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(local_day(&date, &east), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn label_uses_weekday_and_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        assert_eq!(
            time_separator_label(&date, &Utc, DEFAULT_TIME_SEPARATOR_FORMAT),
            "Friday, Mar 1, 2024"
        );
        assert_eq!(time_separator_label(&date, &Utc, "%d.%m.%Y"), "01.03.2024");
    }

    #[test]
    fn unrenderable_format_falls_back() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        assert_eq!(time_separator_label(&date, &Utc, "%Q"), "Friday, Mar 1, 2024");
    }
}
