/// Creates a [TraceInfo](crate::trace::TraceInfo)
///
/// * `trace_info!()` - The call site: `filepath`, `linenumber` and `modulepath`
/// * `trace_info!("key" => value, ...)` - The given entries in order, values are rendered with [Display](std::fmt::Display)
/// * `trace_info!(@site; "key" => value, ...)` - The call site followed by the given entries
///
/// # Example
///
/// ```
/// let trace = dev_console::trace_info!("classname" => "Cart", "items" => 3);
///
/// assert_eq!(trace.get("items"), Some("3"));
/// ```
#[macro_export]
macro_rules! trace_info {
    () => {{
        $crate::trace::TraceInfo::new().
                with("filepath", ::std::file!()).
                with("linenumber", &::std::line!()).
                with("modulepath", ::std::module_path!())
    }};

    ( @site; $( $key:expr => $value:expr ),* $(,)? ) => {{
        let trace = $crate::trace_info!();
        $(
            let trace = trace.with($key, &$value);
        )*

        trace
    }};

    ( $( $key:expr => $value:expr ),+ $(,)? ) => {{
        let mut trace = $crate::trace::TraceInfo::new();
        $(
            trace.insert($key, &$value);
        )+

        trace
    }};
}
