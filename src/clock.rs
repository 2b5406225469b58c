#[cfg(test)]
mod tests;

use std::fmt::Debug;
use chrono::{Local, NaiveTime};

/// This trait is used to abstract reading the wall clock
pub trait ClockSource: Debug {
    fn now(&self) -> NaiveTime;
}

/// This [ClockSource] reads the local time of the host
#[derive(Debug)]
pub struct LocalClock;

impl LocalClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for LocalClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// This [ClockSource] always returns the same time
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    time: NaiveTime,
}

impl FixedClock {
    pub fn new(time: NaiveTime) -> Self {
        Self { time }
    }

    /// Returns [None] if the arguments are not a valid time of day
    pub fn from_hms(hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, min, sec).map(Self::new)
    }
}

impl ClockSource for FixedClock {
    fn now(&self) -> NaiveTime {
        self.time
    }
}

const TIME_FORMAT: &str = "%H:%M:%S";

/// Formats `time` as zero-padded `HH:MM:SS`
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}
