#![warn(clippy::allow_attributes)]
#![warn(clippy::assigning_clones)]
#![warn(clippy::cloned_instead_of_copied)]
#![warn(clippy::format_push_string)]
#![warn(clippy::implicit_clone)]
#![warn(clippy::inconsistent_struct_constructor)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::manual_string_new)]
#![warn(clippy::option_as_ref_cloned)]
#![warn(clippy::renamed_function_params)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::too_long_first_doc_paragraph)]

//! Styled console logging for web applications which is only shown during development
//!
//! Log calls are grouped in collapsed console groups with a colored header, an icon and the
//! current time. Output is only written if the page is served from an allowed host
//! (`localhost` and `127.0.0.1` by default).
//!
//! With the `wasm` feature the functions of this module write to the browser console,
//! otherwise they print to standard out.

#[macro_use]
#[doc(hidden)]
pub mod macros;

pub mod level;
pub mod host;
pub mod clock;
pub mod trace;
pub mod backend;
pub mod logger;
pub mod bridge;

use crate::clock::LocalClock;
use crate::logger::DevConsole;
use crate::trace::TraceInfo;

#[cfg(feature = "wasm")]
use crate::backend::BrowserConsole;
#[cfg(feature = "wasm")]
use crate::host::BrowserHost;

#[cfg(not(feature = "wasm"))]
use crate::backend::TerminalConsole;
#[cfg(not(feature = "wasm"))]
use crate::host::LoopbackHost;

pub use crate::bridge::{init_log_bridge, LogBridge};
pub use crate::level::LogLevel;

#[cfg(feature = "wasm")]
pub type PlatformHost = BrowserHost;
#[cfg(feature = "wasm")]
pub type PlatformBackend = BrowserConsole;

#[cfg(not(feature = "wasm"))]
pub type PlatformHost = LoopbackHost;
#[cfg(not(feature = "wasm"))]
pub type PlatformBackend = TerminalConsole;

/// The console used by the free functions of this crate
pub type PlatformConsole = DevConsole<PlatformHost, LocalClock, PlatformBackend>;

/// Creates the console of the current platform with the default allowed hosts
pub fn default_console() -> PlatformConsole {
    DevConsole::new(Default::default(), LocalClock::new(), Default::default())
}

/// Logs an informative message
///
/// See [DevConsole::message]
pub fn message(msg: &str, trace: Option<&TraceInfo>) {
    default_console().message(msg, trace);
}

/// Logs a message about a successful operation
pub fn success(msg: &str, trace: Option<&TraceInfo>) {
    default_console().success(msg, trace);
}

/// Logs a warning
pub fn warn(msg: &str, trace: Option<&TraceInfo>) {
    default_console().warn(msg, trace);
}

/// Logs an error
pub fn error(msg: &str, trace: Option<&TraceInfo>) {
    default_console().error(msg, trace);
}

/// Logs `msg` with a stack trace if `condition` is false and returns `condition`
///
/// See [DevConsole::assert]
pub fn assert(condition: bool, msg: &str, trace: Option<&TraceInfo>) -> bool {
    default_console().assert(condition, msg, trace)
}
