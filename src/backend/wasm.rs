use web_sys::console;
use crate::backend::ConsoleBackend;

/// This [ConsoleBackend] writes to the web browser console
///
/// Styles are applied with the `%c` directive.
#[derive(Debug)]
pub struct BrowserConsole;

impl BrowserConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleBackend for BrowserConsole {
    fn group_collapsed(&mut self, text: &str, style: &str) {
        console::group_collapsed_2(&format!("%c{text}").into(), &style.into());
    }

    fn group_end(&mut self) {
        console::group_end();
    }

    fn time(&mut self, label: &str) {
        console::time_with_label(label);
    }

    fn time_end(&mut self, label: &str) {
        console::time_end_with_label(label);
    }

    fn log_styled(&mut self, text: &str, style: &str) {
        console::log_2(&format!("%c{text}").into(), &style.into());
    }

    fn trace(&mut self, label: &str) {
        console::trace_1(&label.into());
    }
}
