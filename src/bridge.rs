
use std::sync::{Mutex, PoisonError};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use crate::backend::ConsoleBackend;
use crate::clock::{ClockSource, LocalClock};
use crate::host::HostIdentitySource;
use crate::level::LogLevel;
use crate::logger::DevConsole;
use crate::trace::{render_value, TraceInfo};
use crate::{PlatformBackend, PlatformHost};

/// This [Log] implementation forwards records of the [log] facade to a [DevConsole]
///
/// [LogBridge::new] uses the console of the current platform.
#[derive(Debug)]
pub struct LogBridge<H = PlatformHost, C = LocalClock, B = PlatformBackend>
where
    H: HostIdentitySource,
    C: ClockSource,
    B: ConsoleBackend,
{
    max_level: LevelFilter,
    console: Mutex<DevConsole<H, C, B>>,
}

impl LogBridge {
    pub fn new(max_level: LevelFilter) -> Self {
        Self::with_console(max_level, crate::default_console())
    }
}

impl Default for LogBridge {
    fn default() -> Self {
        Self::new(LevelFilter::Trace)
    }
}

impl<H: HostIdentitySource, C: ClockSource, B: ConsoleBackend> LogBridge<H, C, B> {
    pub fn with_console(max_level: LevelFilter, console: DevConsole<H, C, B>) -> Self {
        Self {
            max_level,
            console: Mutex::new(console),
        }
    }

    pub fn into_console(self) -> DevConsole<H, C, B> {
        self.console.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<H, C, B> Log for LogBridge<H, C, B>
where
    H: HostIdentitySource + Send,
    C: ClockSource + Send,
    B: ConsoleBackend + Send,
{
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let trace = record_trace(record);
        let msg = render_value(record.args());

        //Recover from a panic during an earlier record
        let mut console = self.console.lock().unwrap_or_else(PoisonError::into_inner);
        console.log(log_level_of(record.level()), &msg, Some(&trace));
    }

    fn flush(&self) {}
}

/// Installs a [LogBridge] as the global logger of the [log] facade
pub fn init_log_bridge(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge::new(max_level)))?;
    log::set_max_level(max_level);

    Ok(())
}

pub(crate) fn log_level_of(level: Level) -> LogLevel {
    match level {
        Level::Error => LogLevel::Error,
        Level::Warn => LogLevel::Warn,
        Level::Info => LogLevel::Message,
        Level::Debug | Level::Trace => LogLevel::Default,
    }
}

pub(crate) fn record_trace(record: &Record) -> TraceInfo {
    let mut trace = TraceInfo::new();

    if let Some(file) = record.file() {
        trace.insert("filepath", file);
    }

    if let Some(line) = record.line() {
        trace.insert("linenumber", &line);
    }

    if let Some(module_path) = record.module_path() {
        trace.insert("modulepath", module_path);
    }

    trace
}
