use dev_console::trace_info;

#[test]
fn trace_info_call_site() {
    let trace = trace_info!();

    assert_eq!(trace.len(), 3);
    assert_eq!(trace.get("filepath"), Some(file!()));
    assert_eq!(trace.get("linenumber"), Some("5"));
    assert_eq!(trace.get("modulepath"), Some(module_path!()));
}

#[test]
fn trace_info_entries() {
    let method = "checkout";
    let trace = trace_info!(
        "classname" => "Cart",
        "method" => method,
        "items" => 3,
    );

    assert_eq!(trace.iter().collect::<Vec<_>>(), vec![
        ("classname", "Cart"),
        ("method", "checkout"),
        ("items", "3"),
    ]);
}

#[test]
fn trace_info_call_site_with_entries() {
    let trace = trace_info!(@site; "method" => "checkout");

    let keys = trace.iter().map(|(key, _)| key).collect::<Vec<_>>();
    assert_eq!(keys, vec!["filepath", "linenumber", "modulepath", "method"]);

    let trace = trace_info!(@site;);
    assert_eq!(trace.len(), 3);
}
