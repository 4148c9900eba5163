pub(crate) mod constants;
mod namespace;
mod resolver;
mod root;

pub use resolver::*;
pub use root::*;

#[cfg(feature = "std")]
pub use self::process::*;

/// Helpers bound to the environment of the running process
#[cfg(feature = "std")]
mod process {
    use crate::{ResolveError, Resolver, StdEnvironment};
    use std::borrow::Cow;

    const PROCESS: Resolver<StdEnvironment> = Resolver::new(StdEnvironment);

    /// Resolves `fragments` into an absolute Windows path using the working directory of the
    /// running process
    ///
    /// See [`Resolver::resolve`] for details.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidFragment`] if any fragment is not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// let path = win_path_resolve::resolve([r"C:\Windows", r"..\Temp"]).unwrap();
    /// assert_eq!(path, r"C:\Temp");
    /// ```
    pub fn resolve<I, P>(fragments: I) -> Result<String, ResolveError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        PROCESS.resolve(fragments)
    }

    /// Same as [`resolve`], but for fragments that are already strings
    pub fn resolve_utf8<I, S>(fragments: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PROCESS.resolve_utf8(fragments)
    }

    /// Converts `path` into its namespaced form using the working directory of the running
    /// process
    ///
    /// See [`Resolver::to_namespaced_path`] for details.
    ///
    /// # Examples
    ///
    /// ```
    /// let path = win_path_resolve::to_namespaced_path(r"C:\Users\x");
    /// assert_eq!(path, r"\\?\C:\Users\x");
    /// ```
    pub fn to_namespaced_path(path: &str) -> Cow<'_, str> {
        PROCESS.to_namespaced_path(path)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn resolve_should_not_need_process_for_absolute_paths() {
            assert_eq!(resolve([r"D:\foo", r"C:\bar"]).unwrap(), r"C:\bar");
            assert_eq!(resolve_utf8([r"\\host\share", "x"]), r"\\host\share\x");
        }

        #[test]
        fn resolve_should_report_invalid_fragment() {
            let err = resolve([&b"a"[..], &b"\xff"[..]]).unwrap_err();
            assert_eq!(err.index(), 1);
        }

        #[test]
        fn resolve_should_never_return_empty_path_for_relative_input() {
            assert!(!resolve_utf8(["a", ".."]).is_empty());
        }

        #[test]
        fn to_namespaced_path_should_match_resolver_for_absolute_paths() {
            assert_eq!(to_namespaced_path(r"C:\Users\x"), r"\\?\C:\Users\x");
            assert_eq!(to_namespaced_path(r"\\server\share"), r"\\?\UNC\server\share\");
            assert_eq!(to_namespaced_path(""), "");
        }
    }
}
