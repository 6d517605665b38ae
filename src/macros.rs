//! Logging macros. Each captures the call site (module, enclosing function,
//! file, line) and forwards to the global printer.
//!
//! ```no_run
//! use prettylog::{debug, error};
//!
//! fn fetch(id: u32) -> std::io::Result<()> {
//!     debug!("fetching %d", id);
//!     let err = std::io::Error::other("timeout");
//!     error!(tag: "net", cause: &err, "fetch %d failed", id);
//!     Ok(())
//! }
//! ```

/// Full path of the enclosing function.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn __prettylog_marker() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = type_name_of(__prettylog_marker);
        match name.strip_suffix("::__prettylog_marker") {
            Some(path) => path,
            None => name,
        }
    }};
}

/// The [`CallSite`](crate::CallSite) of the macro invocation.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            ::core::module_path!(),
            ::core::option::Option::Some($crate::__function_path!()),
            ::core::file!(),
            ::core::line!(),
        )
    };
}

/// Logs at an explicit priority: `log!(priority, [tag: t,] [cause: e,] template, args...)`.
#[macro_export]
macro_rules! log {
    ($priority:expr, tag: $tag:expr, cause: $cause:expr $(,)?) => {
        $crate::facade::log_at(
            $priority,
            ::core::option::Option::Some($tag),
            ::core::option::Option::Some($cause),
            ::core::option::Option::None,
            &[],
            $crate::call_site!(),
        )
    };
    ($priority:expr, cause: $cause:expr $(,)?) => {
        $crate::facade::log_at(
            $priority,
            ::core::option::Option::None,
            ::core::option::Option::Some($cause),
            ::core::option::Option::None,
            &[],
            $crate::call_site!(),
        )
    };
    ($priority:expr, tag: $tag:expr, cause: $cause:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::facade::log_at(
            $priority,
            ::core::option::Option::Some($tag),
            ::core::option::Option::Some($cause),
            ::core::option::Option::Some($template),
            &[$($crate::Arg::from($arg)),*],
            $crate::call_site!(),
        )
    };
    ($priority:expr, tag: $tag:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::facade::log_at(
            $priority,
            ::core::option::Option::Some($tag),
            ::core::option::Option::None,
            ::core::option::Option::Some($template),
            &[$($crate::Arg::from($arg)),*],
            $crate::call_site!(),
        )
    };
    ($priority:expr, cause: $cause:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::facade::log_at(
            $priority,
            ::core::option::Option::None,
            ::core::option::Option::Some($cause),
            ::core::option::Option::Some($template),
            &[$($crate::Arg::from($arg)),*],
            $crate::call_site!(),
        )
    };
    ($priority:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::facade::log_at(
            $priority,
            ::core::option::Option::None,
            ::core::option::Option::None,
            ::core::option::Option::Some($template),
            &[$($crate::Arg::from($arg)),*],
            $crate::call_site!(),
        )
    };
}

#[macro_export]
macro_rules! verbose {
    ($($rest:tt)+) => { $crate::log!($crate::Priority::Verbose, $($rest)+) };
}

#[macro_export]
macro_rules! debug {
    ($($rest:tt)+) => { $crate::log!($crate::Priority::Debug, $($rest)+) };
}

#[macro_export]
macro_rules! info {
    ($($rest:tt)+) => { $crate::log!($crate::Priority::Info, $($rest)+) };
}

#[macro_export]
macro_rules! warn {
    ($($rest:tt)+) => { $crate::log!($crate::Priority::Warn, $($rest)+) };
}

#[macro_export]
macro_rules! error {
    ($($rest:tt)+) => { $crate::log!($crate::Priority::Error, $($rest)+) };
}

#[macro_export]
macro_rules! wtf {
    ($($rest:tt)+) => { $crate::log!($crate::Priority::Assert, $($rest)+) };
}
