#[cfg(feature = "wasm")]
#[doc(hidden)]
pub mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::BrowserHost;

#[cfg(test)]
mod tests;

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use ahash::AHashSet;

/// This trait is used to abstract the lookup of the current host name
pub trait HostIdentitySource: Debug {
    /// Returns the host name of the current execution environment or [None] if it is not known
    fn hostname(&self) -> Option<String>;
}

/// This [HostIdentitySource] always reports `localhost`
///
/// Native builds run on the machine of the developer, so they are treated like a local page.
#[derive(Debug)]
pub struct LoopbackHost;

impl LoopbackHost {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoopbackHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostIdentitySource for LoopbackHost {
    fn hostname(&self) -> Option<String> {
        Some("localhost".to_string())
    }
}

/// This [HostIdentitySource] returns a fixed value
#[derive(Debug, Clone, Default)]
pub struct FixedHost {
    hostname: Option<String>,
}

impl FixedHost {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: Some(hostname.into()),
        }
    }

    pub fn unknown() -> Self {
        Self {
            hostname: None,
        }
    }
}

impl HostIdentitySource for FixedHost {
    fn hostname(&self) -> Option<String> {
        self.hostname.clone()
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidHostError {
    message: String,
}

impl InvalidHostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for InvalidHostError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for InvalidHostError {}

/// The host names for which console output is permitted
///
/// Host names are compared case-insensitively.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AllowHostSet {
    hosts: AHashSet<String>,
}

impl AllowHostSet {
    pub const DEFAULT_HOSTS: [&'static str; 2] = ["localhost", "127.0.0.1"];

    /// Creates a set without any hosts, which denies every host
    pub fn empty() -> Self {
        Self {
            hosts: AHashSet::new(),
        }
    }

    /// Parses a comma separated list of host names
    ///
    /// # Arguments
    ///
    /// * `hosts` - The host names, e.g. `"localhost, 127.0.0.1"`
    pub fn parse(hosts: &str) -> Result<Self, InvalidHostError> {
        let mut set = Self::empty();

        for host in hosts.split(',') {
            set.insert(host.trim())?;
        }

        Ok(set)
    }

    pub fn insert(&mut self, host: &str) -> Result<(), InvalidHostError> {
        if host.is_empty() {
            return Err(InvalidHostError::new("Host name must not be empty"));
        }

        if host.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(InvalidHostError::new(format!("Invalid host name: \"{host}\"")));
        }

        self.hosts.insert(host.to_ascii_lowercase());

        Ok(())
    }

    pub fn contains(&self, host: &str) -> bool {
        self.hosts.contains(&host.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

impl Default for AllowHostSet {
    fn default() -> Self {
        Self {
            hosts: Self::DEFAULT_HOSTS.iter().map(|host| host.to_string()).collect(),
        }
    }
}

/// Decides whether console output is permitted for the current host
///
/// The host name is read again on every check.
#[derive(Debug)]
pub struct HostGate<H: HostIdentitySource> {
    source: H,
    allow_hosts: AllowHostSet,
}

impl<H: HostIdentitySource> HostGate<H> {
    pub fn new(source: H, allow_hosts: AllowHostSet) -> Self {
        Self { source, allow_hosts }
    }

    pub fn is_allowed_host(&self) -> bool {
        self.source.hostname().is_some_and(|host| self.allow_hosts.contains(&host))
    }

    pub fn allow_hosts(&self) -> &AllowHostSet {
        &self.allow_hosts
    }

    pub fn set_allow_hosts(&mut self, allow_hosts: AllowHostSet) {
        self.allow_hosts = allow_hosts;
    }

    pub fn source(&self) -> &H {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut H {
        &mut self.source
    }
}
