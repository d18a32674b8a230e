use aubconv::core::formatter::{direction_flag, format, format_line, format_with, hour_flag};
use aubconv::core::parser::parse;
use aubconv::models::{DirectionFlag, DirectionMode, Record};

fn rec(ts: &str, extras: &[&str]) -> Record {
    Record::new("72", ts, extras.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_morning_line_with_non_marker_extras() {
    let records = parse("72\t2025-11-03 08:52:08\t104\t15\tJohn Doe\tI\t0\t1");
    assert_eq!(records[0].extras[4], "0");
    assert_eq!(format(&records), "72\t2025-11-03 08:52:08\t1\t0\t1\t0");
}

#[test]
fn test_evening_line_with_non_marker_extras() {
    let records = parse("72\t2025-11-03 18:18:47\t104\t15\tJohn Doe\tI\t0\t1");
    assert_eq!(format(&records), "72\t2025-11-03 18:18:47\t1\t1\t1\t0");
}

#[test]
fn test_two_field_line_uses_hour() {
    let records = parse("72\t2025-11-03 08:52:08");
    assert_eq!(format(&records), "72\t2025-11-03 08:52:08\t1\t0\t1\t0");
}

#[test]
fn test_marker_overrides_hour() {
    let morning_out = rec("2025-11-03 08:00:00", &["a", "b", "c", "d", "O"]);
    let evening_in = rec("2025-11-03 20:00:00", &["a", "b", "c", "d", " i "]);

    assert_eq!(
        direction_flag(&morning_out, DirectionMode::Extras),
        Some(DirectionFlag::Zero)
    );
    assert_eq!(
        direction_flag(&evening_in, DirectionMode::Extras),
        Some(DirectionFlag::One)
    );
}

#[test]
fn test_unknown_marker_falls_back_to_hour() {
    let r = rec("2025-11-03 12:00:00", &["a", "b", "c", "d", "X"]);
    assert_eq!(
        direction_flag(&r, DirectionMode::Extras),
        Some(DirectionFlag::One)
    );
}

#[test]
fn test_hour_flag_boundaries() {
    assert_eq!(hour_flag("2025-11-03 11:59:59"), DirectionFlag::Zero);
    assert_eq!(hour_flag("2025-11-03 12:00:00"), DirectionFlag::One);
    assert_eq!(hour_flag("2025-11-03 23:59:59"), DirectionFlag::One);
    assert_eq!(hour_flag("2025-11-03 00:00:00"), DirectionFlag::Zero);
}

#[test]
fn test_hour_flag_unparsable_is_zero() {
    assert_eq!(hour_flag("2025-11-03"), DirectionFlag::Zero);
    assert_eq!(hour_flag("2025-11-03 xx:10:00"), DirectionFlag::Zero);
    assert_eq!(hour_flag("2025-11-03 "), DirectionFlag::Zero);
    assert_eq!(hour_flag(""), DirectionFlag::Zero);
}

#[test]
fn test_hour_flag_reads_only_second_space_token() {
    // two spaces: the time token is empty, so the hour is unreadable
    assert_eq!(hour_flag("2025-11-03  13:00:00"), DirectionFlag::Zero);
    assert_eq!(
        format(&parse("72\t2025-11-03  13:00:00")),
        "72\t2025-11-03  13:00:00\t1\t0\t1\t0"
    );
    // anything after the second space is ignored
    assert_eq!(hour_flag("2025-11-03 13:00:00 UTC"), DirectionFlag::One);
}

#[test]
fn test_hour_flag_lenient_integer() {
    // leading digits are enough, as in "14h30"
    assert_eq!(hour_flag("2025-11-03 14h30"), DirectionFlag::One);
    assert_eq!(hour_flag("2025-11-03 -3:00:00"), DirectionFlag::Zero);
    assert_eq!(hour_flag("2025-11-03 +13:00:00"), DirectionFlag::One);
}

#[test]
fn test_log_column_mode_inverts_and_has_no_fallback() {
    let marked_in = rec("2025-11-03 18:00:00", &["a", "b", "c", "d", "I", "x"]);
    let marked_out = rec("2025-11-03 08:00:00", &["a", "b", "c", "d", "o", "x"]);
    let unmarked = rec("2025-11-03 18:00:00", &["a", "b", "c", "d", "0", "x"]);

    assert_eq!(
        direction_flag(&marked_in, DirectionMode::LogColumn),
        Some(DirectionFlag::Zero)
    );
    assert_eq!(
        direction_flag(&marked_out, DirectionMode::LogColumn),
        Some(DirectionFlag::One)
    );
    assert_eq!(direction_flag(&unmarked, DirectionMode::LogColumn), None);

    let out = format_with(&[marked_in, unmarked, marked_out], DirectionMode::LogColumn);
    assert_eq!(
        out,
        "72\t2025-11-03 18:00:00\t1\t0\t1\t0\n72\t2025-11-03 08:00:00\t1\t1\t1\t0"
    );
}

#[test]
fn test_format_line_columns() {
    let line = format_line(&rec("2025-11-03 08:52:08", &[]), DirectionFlag::One);
    let cols: Vec<&str> = line.split('\t').collect();
    assert_eq!(cols, vec!["72", "2025-11-03 08:52:08", "1", "1", "1", "0"]);
}

#[test]
fn test_format_joins_in_order_without_trailing_newline() {
    let content = "1\t2025-01-01 08:00:00\n\n2\t2025-01-01 13:00:00\nbad\n3\t2025-01-01 09:00:00\n";
    let out = format(&parse(content));

    assert!(!out.ends_with('\n'));
    let ids: Vec<&str> = out
        .lines()
        .map(|l| l.split('\t').next().unwrap_or_default())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn test_format_empty_is_empty_string() {
    assert_eq!(format(&[]), "");
    assert_eq!(format(&parse("nothing useful here")), "");
}

#[test]
fn test_parse_format_is_deterministic() {
    let content = "5\t2025-02-02 07:00:00\t1\t2\tAnn\tX\tO\n6\t2025-02-02 17:00:00";
    assert_eq!(format(&parse(content)), format(&parse(content)));
}
