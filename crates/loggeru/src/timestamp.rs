//! Local time formatting for line prefixes and log file names

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

static TIMESTAMP_FORMAT: &[FormatItem] =
    format_description!("[[[year]-[month]-[day] > [hour]:[minute]:[second]] ");
static FILE_NAME_FORMAT: &[FormatItem] =
    format_description!("Log_[day]-[month]-[year]_[hour]-[minute]-[second].log");

/// The current local time, or UTC if the local offset can't be determined.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// The prefix placed before a timestamped line, including its trailing space.
///
/// Looks like `[2024-03-09 > 17:04:05] `.
pub fn line_prefix(at: OffsetDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).unwrap_or_else(|_| {
        format!(
            "[{}-{:02}-{:02} > {:02}:{:02}:{:02}] ",
            at.year(),
            u8::from(at.month()),
            at.day(),
            at.hour(),
            at.minute(),
            at.second()
        )
    })
}

/// The default name of a log file started at the given time.
///
/// Looks like `Log_09-03-2024_17-04-05.log`.
pub fn file_name(at: OffsetDateTime) -> String {
    at.format(FILE_NAME_FORMAT).unwrap_or_else(|_| {
        format!(
            "Log_{:02}-{:02}-{}_{:02}-{:02}-{:02}.log",
            at.day(),
            u8::from(at.month()),
            at.year(),
            at.hour(),
            at.minute(),
            at.second()
        )
    })
}
