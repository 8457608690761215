//! Calendar-date helpers shared by the task rules and the HTTP layer.
//!
//! Due dates travel as `YYYY-MM-DD`. Inputs may also carry a time of day
//! (`2026-03-01T14:30:00`), which is dropped: only the calendar date counts.

use serde::{de::Error as _, Deserialize, Deserializer, Serializer};
use time::{macros::format_description, Date, OffsetDateTime};

const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Today's calendar date in the server's local offset.
///
/// Falls back to UTC when the local offset cannot be determined, which the
/// `time` crate refuses to do in some multi-threaded environments.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Parses a date or date-time string, keeping only the date part.
pub fn parse_date(input: &str) -> Result<Date, time::error::Parse> {
    let input = input.trim();
    let date_part = input.get(..10).unwrap_or(input);
    Date::parse(date_part, DATE_FORMAT)
}

pub fn format_date(date: Date) -> String {
    // The format only uses numeric components, so formatting cannot fail.
    date.format(DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_date(*date))
}

/// Deserializes an optional date; an absent or `null` value becomes `None`.
pub fn deserialize_option<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Date>, D::Error> {
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_date(&raw).map_err(|err| D::Error::custom(format!("{raw}: {err}"))))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn plain_dates_are_parsed() {
        assert_eq!(parse_date("2026-03-01").unwrap(), date!(2026-03-01));
    }

    #[test]
    fn time_of_day_is_ignored() {
        assert_eq!(
            parse_date("2026-03-01T23:59:59").unwrap(),
            date!(2026-03-01)
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_date("01/03/2026").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn dates_are_formatted_with_padding() {
        assert_eq!(format_date(date!(2026-01-05)), "2026-01-05");
    }
}
