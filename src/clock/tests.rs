use chrono::{NaiveTime, Timelike};
use crate::clock::*;

#[test]
fn format_time_zero_padded() {
    let time = NaiveTime::from_hms_opt(9, 5, 3).unwrap();

    assert_eq!(format_time(time), "09:05:03");
}

#[test]
fn format_time_boundaries() {
    assert_eq!(format_time(NaiveTime::from_hms_opt(0, 0, 0).unwrap()), "00:00:00");
    assert_eq!(format_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap()), "23:59:59");
}

#[test]
fn format_time_drops_fraction() {
    let time = NaiveTime::from_hms_milli_opt(12, 30, 45, 999).unwrap();

    assert_eq!(format_time(time), "12:30:45");
}

#[test]
fn fixed_clock() {
    let clock = FixedClock::from_hms(9, 5, 3).unwrap();

    assert_eq!(format_time(clock.now()), "09:05:03");
    assert_eq!(clock.now(), clock.now());
}

#[test]
fn fixed_clock_invalid_time() {
    assert!(FixedClock::from_hms(24, 0, 0).is_none());
    assert!(FixedClock::from_hms(0, 60, 0).is_none());
}

#[test]
fn local_clock_is_formatted_as_time_of_day() {
    let time = LocalClock::new().now();
    let formatted = format_time(time);

    assert_eq!(formatted.len(), 8);
    assert_eq!(&formatted[0..2], format!("{:02}", time.hour()));
    assert_eq!(&formatted[2..3], ":");
    assert_eq!(&formatted[5..6], ":");
}
