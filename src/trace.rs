
use std::any;
use std::fmt::{Display, Write};
use crate::backend::ConsoleBackend;

/// Style of a single trace line
pub const TRACE_LINE_STYLE: &str = "font-weight: bold;";

/// Key/value context which is attached to a single log call
///
/// Entries keep their insertion order. Inserting an existing key replaces the value in place.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TraceInfo {
    entries: Vec<(String, String)>,
}

impl TraceInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the rendered `value` for `key`
    ///
    /// If the [Display] implementation of `value` returns an error, the type name of `value` is stored instead.
    pub fn insert<V: Display + ?Sized>(&mut self, key: impl Into<String>, value: &V) {
        let value = render_value(value);
        let key = key.into();

        if let Some(entry) = self.entries.iter_mut().find(|(entry_key, _)| *entry_key == key) {
            entry.1 = value;
        }else {
            self.entries.push((key, value));
        }
    }

    pub fn with<V: Display + ?Sized>(mut self, key: impl Into<String>, value: &V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().
                find(|(entry_key, _)| entry_key == key).
                map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TraceInfo {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut trace = Self::new();
        for (key, value) in iter {
            let value: String = value.into();
            trace.insert(key, value.as_str());
        }

        trace
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for TraceInfo {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

pub(crate) fn render_value<V: Display + ?Sized>(value: &V) -> String {
    let mut rendered = String::new();
    if write!(rendered, "{value}").is_err() {
        return format!("<{}>", any::type_name::<V>());
    }

    rendered
}

/// Writes one bold `"key: value"` line per trace entry
///
/// Nothing is written if `trace` is [None] or empty.
pub fn emit_trace<B: ConsoleBackend + ?Sized>(backend: &mut B, trace: Option<&TraceInfo>) {
    let Some(trace) = trace else {
        return;
    };

    for (key, value) in trace.iter() {
        backend.log_styled(&format!("{key}: {value}"), TRACE_LINE_STYLE);
    }
}
