#[cfg(feature = "wasm")]
#[doc(hidden)]
pub mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::BrowserConsole;


use std::backtrace::Backtrace;
use std::fmt::Debug;
use std::io::{self, Stdout, Write};
use std::ops::{Deref, DerefMut};

#[cfg(not(feature = "wasm"))]
use std::time::Instant;
#[cfg(feature = "wasm")]
use web_time::Instant;

/// This trait is used to abstract the developer console
///
/// Every [group_collapsed](ConsoleBackend::group_collapsed) call must be followed by a
/// [group_end](ConsoleBackend::group_end) call, use [GroupGuard] to guarantee that.
pub trait ConsoleBackend: Debug {
    /// Opens a collapsed group with the header `text` styled with `style`
    fn group_collapsed(&mut self, text: &str, style: &str);

    /// Closes the innermost open group
    fn group_end(&mut self);

    /// Starts a timer named `label`
    fn time(&mut self, label: &str);

    /// Stops the timer named `label` and prints the elapsed time
    fn time_end(&mut self, label: &str);

    /// Writes a single line `text` styled with `style`
    fn log_styled(&mut self, text: &str, style: &str);

    /// Writes `label` followed by the current call stack
    fn trace(&mut self, label: &str);
}

/// An open, timed console group
///
/// The timer is stopped and the group is closed if the guard is dropped, including during a panic.
#[derive(Debug)]
pub struct GroupGuard<'a, B: ConsoleBackend + ?Sized> {
    backend: &'a mut B,
    timer_label: &'a str,
}

impl<'a, B: ConsoleBackend + ?Sized> GroupGuard<'a, B> {
    /// Opens the group and starts the timer named `timer_label`
    pub fn open(backend: &'a mut B, text: &str, style: &str, timer_label: &'a str) -> Self {
        backend.group_collapsed(text, style);
        backend.time(timer_label);

        Self { backend, timer_label }
    }
}

impl<B: ConsoleBackend + ?Sized> Deref for GroupGuard<'_, B> {
    type Target = B;

    fn deref(&self) -> &Self::Target {
        self.backend
    }
}

impl<B: ConsoleBackend + ?Sized> DerefMut for GroupGuard<'_, B> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.backend
    }
}

impl<B: ConsoleBackend + ?Sized> Drop for GroupGuard<'_, B> {
    fn drop(&mut self) {
        self.backend.time_end(self.timer_label);
        self.backend.group_end();
    }
}

/// This [ConsoleBackend] prints to standard out or another [Write] implementation
///
/// Styles are ignored, lines inside of groups are indented by two spaces per group.
/// Write errors are ignored.
#[derive(Debug)]
pub struct TerminalConsole<W: Write = Stdout> {
    writer: W,
    depth: usize,
    timers: Vec<(String, Instant)>,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalConsole<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            depth: 0,
            timers: Vec::new(),
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn println(&mut self, text: &str) {
        let indent = "  ".repeat(self.depth);

        for line in text.lines() {
            if writeln!(self.writer, "{indent}{line}").is_err() {
                return;
            }
        }
    }
}

impl<W: Write + Debug> ConsoleBackend for TerminalConsole<W> {
    fn group_collapsed(&mut self, text: &str, _style: &str) {
        self.println(text);
        self.depth += 1;
    }

    fn group_end(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn time(&mut self, label: &str) {
        self.timers.push((label.to_string(), Instant::now()));
    }

    fn time_end(&mut self, label: &str) {
        //Innermost timer first, labels can be reused by nested groups
        let Some(index) = self.timers.iter().rposition(|(timer_label, _)| timer_label == label) else {
            self.println(&format!("Timer \"{label}\" does not exist"));

            return;
        };

        let (_, start) = self.timers.remove(index);
        let elapsed = start.elapsed();

        self.println(&format!("{label}: {:.3}ms", elapsed.as_secs_f64() * 1000.0));
    }

    fn log_styled(&mut self, text: &str, _style: &str) {
        self.println(text);
    }

    fn trace(&mut self, label: &str) {
        self.println(label);
        self.println(&Backtrace::force_capture().to_string());
    }
}

/// A single call recorded by [RecordingConsole]
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ConsoleEvent {
    GroupCollapsed {
        text: String,
        style: String,
    },
    GroupEnd,
    Time(String),
    TimeEnd(String),
    Log {
        text: String,
        style: String,
    },
    Trace(String),
}

/// This [ConsoleBackend] keeps every call in memory instead of printing it
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole {
    events: Vec<ConsoleEvent>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ConsoleEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<ConsoleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns the number of opened groups
    pub fn group_count(&self) -> usize {
        self.events.iter().
                filter(|event| matches!(event, ConsoleEvent::GroupCollapsed { .. })).
                count()
    }

    /// Returns true if every opened group and timer was closed in reverse order
    pub fn is_balanced(&self) -> bool {
        let mut open = Vec::new();

        for event in &self.events {
            match event {
                ConsoleEvent::GroupCollapsed { .. } => open.push(None),
                ConsoleEvent::Time(label) => open.push(Some(label)),

                ConsoleEvent::GroupEnd => if open.pop() != Some(None) {
                    return false;
                },
                ConsoleEvent::TimeEnd(label) => if open.pop() != Some(Some(label)) {
                    return false;
                },

                ConsoleEvent::Log { .. } | ConsoleEvent::Trace(_) => {},
            }
        }

        open.is_empty()
    }
}

impl ConsoleBackend for RecordingConsole {
    fn group_collapsed(&mut self, text: &str, style: &str) {
        self.events.push(ConsoleEvent::GroupCollapsed {
            text: text.to_string(),
            style: style.to_string(),
        });
    }

    fn group_end(&mut self) {
        self.events.push(ConsoleEvent::GroupEnd);
    }

    fn time(&mut self, label: &str) {
        self.events.push(ConsoleEvent::Time(label.to_string()));
    }

    fn time_end(&mut self, label: &str) {
        self.events.push(ConsoleEvent::TimeEnd(label.to_string()));
    }

    fn log_styled(&mut self, text: &str, style: &str) {
        self.events.push(ConsoleEvent::Log {
            text: text.to_string(),
            style: style.to_string(),
        });
    }

    fn trace(&mut self, label: &str) {
        self.events.push(ConsoleEvent::Trace(label.to_string()));
    }
}
