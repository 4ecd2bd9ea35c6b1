use super::*;

#[test]
fn display_date_takes_calendar_date() {
    assert_eq!(display_date("2024-05-01T09:30:00.000Z"), "2024-05-01");
    assert_eq!(display_date("2024-05-01"), "2024-05-01");
}

#[test]
fn display_date_passes_through_unparseable() {
    assert_eq!(display_date("yesterday"), "yesterday");
    assert_eq!(display_date("2024/05/01 10:00"), "2024/05/01 10:00");
    assert_eq!(display_date(""), "");
}

#[test]
fn display_date_time_appends_minutes() {
    assert_eq!(display_date_time("2024-05-01T09:30:59Z"), "2024-05-01 09:30");
    assert_eq!(display_date_time("2024-05-01 18:05"), "2024-05-01 18:05");
}

#[test]
fn display_date_time_without_time_is_date_only() {
    assert_eq!(display_date_time("2024-05-01"), "2024-05-01");
    assert_eq!(display_date_time("2024-05-01Tnoon"), "2024-05-01");
}

#[test]
fn multibyte_input_does_not_split_characters() {
    assert_eq!(display_date("五月一日是劳动节"), "五月一日是劳动节");
}

#[test]
fn optional_absent_is_empty() {
    assert_eq!(display_date_opt(None), "");
    assert_eq!(display_date_opt(Some("2023-12-31T23:59:00Z")), "2023-12-31");
}

#[test]
fn offset_timestamps_keep_their_written_date() {
    assert_eq!(display_date("2024-05-01T23:30:00-05:00"), "2024-05-01");
    assert_eq!(display_date_time("2024-05-01T23:30:00-05:00"), "2024-05-01 23:30");
}
