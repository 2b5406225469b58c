use crate::host::*;

#[test]
fn default_allow_hosts() {
    let allow_hosts = AllowHostSet::default();

    assert_eq!(allow_hosts.len(), 2);
    assert!(allow_hosts.contains("localhost"));
    assert!(allow_hosts.contains("127.0.0.1"));
    assert!(!allow_hosts.contains("example.com"));
}

#[test]
fn allow_hosts_are_case_insensitive() {
    let allow_hosts = AllowHostSet::default();

    assert!(allow_hosts.contains("LocalHost"));
}

#[test]
fn parse_allow_hosts() {
    let allow_hosts = AllowHostSet::parse("localhost, dev.example.com,127.0.0.1").unwrap();

    assert_eq!(allow_hosts.len(), 3);
    assert!(allow_hosts.contains("dev.example.com"));
}

#[test]
fn parse_allow_hosts_empty_entry() {
    assert_eq!(
        AllowHostSet::parse("localhost,,127.0.0.1"),
        Err(InvalidHostError::new("Host name must not be empty")),
    );

    assert!(AllowHostSet::parse("").is_err());
}

#[test]
fn parse_allow_hosts_invalid_entry() {
    let err = AllowHostSet::parse("localhost, http://example.com").unwrap_err();

    assert_eq!(err.message(), "Invalid host name: \"http://example.com\"");
    assert_eq!(err.to_string(), "Invalid host name: \"http://example.com\"");

    assert!(AllowHostSet::parse("my host").is_err());
}

#[test]
fn gate_allows_listed_host() {
    let gate = HostGate::new(FixedHost::new("localhost"), AllowHostSet::default());
    assert!(gate.is_allowed_host());

    let gate = HostGate::new(FixedHost::new("127.0.0.1"), AllowHostSet::default());
    assert!(gate.is_allowed_host());

    let gate = HostGate::new(LoopbackHost::new(), AllowHostSet::default());
    assert!(gate.is_allowed_host());
}

#[test]
fn gate_denies_unlisted_host() {
    let gate = HostGate::new(FixedHost::new("example.com"), AllowHostSet::default());

    assert!(!gate.is_allowed_host());
}

#[test]
fn gate_denies_unknown_host() {
    let gate = HostGate::new(FixedHost::unknown(), AllowHostSet::default());

    assert!(!gate.is_allowed_host());
}

#[test]
fn gate_rereads_host_on_every_check() {
    let mut gate = HostGate::new(FixedHost::new("example.com"), AllowHostSet::default());
    assert!(!gate.is_allowed_host());

    *gate.source_mut() = FixedHost::new("localhost");
    assert!(gate.is_allowed_host());
}

#[test]
fn gate_with_empty_allow_hosts() {
    let mut gate = HostGate::new(FixedHost::new("localhost"), AllowHostSet::default());
    gate.set_allow_hosts(AllowHostSet::empty());

    assert!(gate.allow_hosts().is_empty());
    assert!(!gate.is_allowed_host());
}
