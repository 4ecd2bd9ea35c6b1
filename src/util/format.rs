//! Timestamp display helpers.
//!
//! The backend sends ISO-8601 strings (`2024-05-01T09:30:00.000Z`). Lists
//! show the calendar date; the post page adds the wall-clock minute. Both
//! are read as written: a trailing offset is not applied.
//! Anything that does not look like ISO-8601 is shown as received.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `YYYY-MM-DD` prefix of an ISO timestamp, if it has one.
fn date_part(raw: &str) -> Option<&str> {
    let date = raw.get(..10)?;
    let mut parts = date.split('-');
    let shaped = matches!(
        (parts.next(), parts.next(), parts.next(), parts.next()),
        (Some(y), Some(m), Some(d), None) if y.len() == 4 && m.len() == 2 && d.len() == 2
            && is_digits(y) && is_digits(m) && is_digits(d)
    );
    shaped.then_some(date)
}

/// `HH:MM` following the `T` separator, if present.
fn time_part(raw: &str) -> Option<&str> {
    let rest = raw.get(10..)?;
    let rest = rest.strip_prefix('T').or_else(|| rest.strip_prefix(' '))?;
    let time = rest.get(..5)?;
    let (hours, minutes) = time.split_once(':')?;
    (hours.len() == 2 && minutes.len() == 2 && is_digits(hours) && is_digits(minutes)).then_some(time)
}

/// Calendar date for list views.
pub fn display_date(raw: &str) -> String {
    date_part(raw).unwrap_or(raw).to_owned()
}

/// Date plus `HH:MM` for the post page; falls back to the date alone.
pub fn display_date_time(raw: &str) -> String {
    match (date_part(raw), time_part(raw)) {
        (Some(date), Some(time)) => format!("{date} {time}"),
        (Some(date), None) => date.to_owned(),
        _ => raw.to_owned(),
    }
}

/// [`display_date`] for an optional timestamp; absent renders as empty.
pub fn display_date_opt(raw: Option<&str>) -> String {
    raw.map(display_date).unwrap_or_default()
}
