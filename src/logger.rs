
use crate::backend::{ConsoleBackend, GroupGuard};
use crate::clock::{format_time, ClockSource};
use crate::host::{AllowHostSet, HostGate, HostIdentitySource};
use crate::level::{describe, LevelDescriptor, LogLevel};
use crate::trace::{emit_trace, TraceInfo};

/// Styled, host-gated console logger
///
/// Every log call opens a collapsed group in the console which contains the trace information of the call.
/// Nothing is written if the current host is not in the [AllowHostSet].
///
/// # Example
///
/// ```
/// use dev_console::backend::RecordingConsole;
/// use dev_console::clock::FixedClock;
/// use dev_console::host::FixedHost;
/// use dev_console::logger::DevConsole;
/// use dev_console::trace::TraceInfo;
///
/// let clock = FixedClock::from_hms(9, 5, 3).unwrap();
/// let mut console = DevConsole::new(FixedHost::new("localhost"), clock, RecordingConsole::new());
///
/// console.success("Saved", Some(&TraceInfo::from([("method", "save")])));
///
/// assert_eq!(console.backend().group_count(), 1);
/// ```
#[derive(Debug)]
pub struct DevConsole<H: HostIdentitySource, C: ClockSource, B: ConsoleBackend> {
    gate: HostGate<H>,
    clock: C,
    backend: B,
    timer_label: String,
}

impl<H: HostIdentitySource, C: ClockSource, B: ConsoleBackend> DevConsole<H, C, B> {
    pub const DEFAULT_TIMER_LABEL: &'static str = "Execution time";
    pub const ASSERT_LABEL: &'static str = "ASSERT";
    pub const STACK_TRACE_LABEL: &'static str = "Stack trace:";

    pub fn new(host: H, clock: C, backend: B) -> Self {
        Self {
            gate: HostGate::new(host, AllowHostSet::default()),
            clock,
            backend,
            timer_label: Self::DEFAULT_TIMER_LABEL.to_string(),
        }
    }

    pub fn set_allow_hosts(&mut self, allow_hosts: AllowHostSet) {
        self.gate.set_allow_hosts(allow_hosts);
    }

    /// Sets the label of the timer which measures the time spent inside each group
    pub fn set_timer_label(&mut self, timer_label: impl Into<String>) {
        self.timer_label = timer_label.into();
    }

    pub fn gate(&self) -> &HostGate<H> {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut HostGate<H> {
        &mut self.gate
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Opens the group for `descriptor` and runs `body` inside of it if the host is allowed
    fn grouped(&mut self, descriptor: &LevelDescriptor, label: &str, msg: &str, body: impl FnOnce(&mut B)) {
        if !self.gate.is_allowed_host() {
            return;
        }

        let time = format_time(self.clock.now());
        let header = format!("{} {time} [{label}] {msg}", descriptor.icon);

        let mut group = GroupGuard::open(&mut self.backend, &header, &descriptor.style, &self.timer_label);
        body(&mut *group);
    }

    fn dispatch(&mut self, level: LogLevel, msg: &str, border_color: &str, trace: Option<&TraceInfo>) {
        let descriptor = describe(level, border_color);

        self.grouped(&descriptor, descriptor.label, msg, |backend| emit_trace(backend, trace));
    }

    /// Logs `msg` with `level` and the accent color of `level`
    pub fn log(&mut self, level: LogLevel, msg: &str, trace: Option<&TraceInfo>) {
        self.dispatch(level, msg, level.accent_color(), trace);
    }

    pub fn message(&mut self, msg: &str, trace: Option<&TraceInfo>) {
        self.log(LogLevel::Message, msg, trace);
    }

    pub fn success(&mut self, msg: &str, trace: Option<&TraceInfo>) {
        self.log(LogLevel::Success, msg, trace);
    }

    pub fn warn(&mut self, msg: &str, trace: Option<&TraceInfo>) {
        self.log(LogLevel::Warn, msg, trace);
    }

    pub fn error(&mut self, msg: &str, trace: Option<&TraceInfo>) {
        self.log(LogLevel::Error, msg, trace);
    }

    /// Logs `msg` together with the call stack if `condition` is false
    ///
    /// The group is styled like [error](Self::error), but labeled `ASSERT`.
    /// `condition` is always returned unchanged, so the call can be used inline:
    ///
    /// ```
    /// # use dev_console::backend::RecordingConsole;
    /// # use dev_console::clock::LocalClock;
    /// # use dev_console::host::FixedHost;
    /// # use dev_console::logger::DevConsole;
    /// let mut console = DevConsole::new(FixedHost::new("example.com"), LocalClock::new(), RecordingConsole::new());
    ///
    /// let items: Vec<i32> = Vec::new();
    /// if !console.assert(!items.is_empty(), "No items loaded", None) {
    ///     //Fallback
    /// }
    /// ```
    pub fn assert(&mut self, condition: bool, msg: &str, trace: Option<&TraceInfo>) -> bool {
        if !condition {
            let descriptor = describe(LogLevel::Error, LogLevel::Error.accent_color());

            self.grouped(&descriptor, Self::ASSERT_LABEL, msg, |backend| {
                emit_trace(backend, trace);
                backend.trace(Self::STACK_TRACE_LABEL);
            });
        }

        condition
    }
}
