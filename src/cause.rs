//! Rendering of an attached error and its `source()` chain.

use std::error::Error;
use std::io;

/// Renders `cause` followed by one `Caused by:` line per source.
///
/// Returns an empty string when any error in the chain is an unreachable-host
/// I/O error: offline hosts would otherwise fill the log with identical traces.
#[must_use]
pub fn render(cause: &(dyn Error + 'static)) -> String {
    if chain(cause).any(is_unreachable) {
        return String::new();
    }

    let mut out = String::new();
    for (depth, err) in chain(cause).enumerate() {
        if depth > 0 {
            out.push_str("\nCaused by: ");
        }
        out.push_str(&err.to_string());
    }
    out
}

fn chain<'a>(
    cause: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(cause), |e| (*e).source())
}

fn is_unreachable(err: &(dyn Error + 'static)) -> bool {
    err.downcast_ref::<io::Error>().is_some_and(|e| {
        matches!(
            e.kind(),
            io::ErrorKind::HostUnreachable | io::ErrorKind::NetworkUnreachable
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Wrapped(io::Error);

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("request failed")
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn renders_chain() {
        let err = Wrapped(io::Error::other("socket closed"));
        assert_eq!(render(&err), "request failed\nCaused by: socket closed");
    }

    #[test]
    fn chain_visits_each_source_once() {
        let err = Wrapped(io::Error::other("socket closed"));
        let kinds: Vec<String> = chain(&err).map(ToString::to_string).collect();
        assert_eq!(kinds, ["request failed", "socket closed"]);
    }

    #[test]
    fn suppresses_unreachable_host_anywhere_in_chain() {
        let err = Wrapped(io::Error::from(io::ErrorKind::HostUnreachable));
        assert_eq!(render(&err), "");
        let err = io::Error::from(io::ErrorKind::NetworkUnreachable);
        assert_eq!(render(&err), "");
    }
}
