use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

const SERVER_FMT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const SERVER_FMT_SUBSEC: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]");
const SERVER_FMT_OFFSET: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
);
const SERVER_FMT_SUBSEC_OFFSET: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond][offset_hour sign:mandatory]:[offset_minute]"
);
const UI_FMT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// Accepts RFC 3339, the server's `YYYY-MM-DD HH:MM:SS[.ffffff]+HH:MM`, or the
/// same without an offset (taken as UTC).
pub(super) fn parse_created_at(ts: &str) -> Option<OffsetDateTime> {
    let ts = ts.trim();
    if let Ok(dt) = OffsetDateTime::parse(ts, &Rfc3339) {
        return Some(dt);
    }
    if let Ok(dt) = OffsetDateTime::parse(ts, SERVER_FMT_SUBSEC_OFFSET)
        .or_else(|_| OffsetDateTime::parse(ts, SERVER_FMT_OFFSET))
    {
        return Some(dt);
    }
    PrimitiveDateTime::parse(ts, SERVER_FMT_SUBSEC)
        .or_else(|_| PrimitiveDateTime::parse(ts, SERVER_FMT))
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

/// Relative for recent posts, absolute past two weeks, verbatim if unparseable.
pub(super) fn fmt_post_time(ts: &str, now: OffsetDateTime) -> String {
    let Some(dt) = parse_created_at(ts) else {
        return ts.to_string();
    };

    let secs = (now - dt).whole_seconds();
    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    if secs < 0 || days >= 14 {
        return dt.format(UI_FMT).unwrap_or_else(|_| ts.to_string());
    }
    if secs < 60 {
        "just now".to_string()
    } else if mins < 60 {
        format!("{}m ago", mins)
    } else if hours < 48 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", days)
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/time_utils_tests.rs"]
mod tests;
