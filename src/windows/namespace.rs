use crate::common::is_device_root_letter;
use crate::env::Environment;
use crate::no_std_compat::*;
use crate::windows::constants::{VERBATIM_PREFIX, VERBATIM_UNC_PREFIX};
use crate::windows::Resolver;

impl<E: Environment> Resolver<E> {
    /// Converts `path` into its namespaced (long path) form, e.g. `\\?\C:\Windows`
    ///
    /// The path is resolved first, so relative paths pick up the working directory of the
    /// environment. Resolved drive paths gain a `\\?\` prefix and resolved UNC paths are rewritten
    /// as `\\?\UNC\server\share\...`.
    ///
    /// The original `path` is returned untouched when it is empty, when it resolves to two or
    /// fewer characters, when it is already namespaced (`\\?\` or `\\.\`), or when it does not
    /// resolve to either of the forms above.
    ///
    /// # Examples
    ///
    /// ```
    /// use win_path_resolve::{FixedEnvironment, Resolver};
    ///
    /// let resolver = Resolver::new(FixedEnvironment::new().with_current_dir(r"C:\work"));
    ///
    /// assert_eq!(resolver.to_namespaced_path(r"C:\Users\x"), r"\\?\C:\Users\x");
    /// assert_eq!(resolver.to_namespaced_path("notes.txt"), r"\\?\C:\work\notes.txt");
    /// assert_eq!(resolver.to_namespaced_path(r"\\server\share\x"), r"\\?\UNC\server\share\x");
    /// assert_eq!(resolver.to_namespaced_path(r"\\?\C:\x"), r"\\?\C:\x");
    /// ```
    pub fn to_namespaced_path<'a>(&self, path: &'a str) -> Cow<'a, str> {
        if path.is_empty() {
            return Cow::Borrowed(path);
        }

        let resolved = self.resolve_strs(&[path]);
        if resolved.len() <= 2 {
            return Cow::Borrowed(path);
        }

        match resolved.as_bytes() {
            [b'\\', b'\\', third, ..] if *third != b'?' && *third != b'.' => {
                Cow::Owned(format!("{VERBATIM_UNC_PREFIX}{}", &resolved[2..]))
            }
            [letter, b':', b'\\', ..] if is_device_root_letter(*letter) => {
                Cow::Owned(format!("{VERBATIM_PREFIX}{resolved}"))
            }
            _ => Cow::Borrowed(path),
        }
    }

    /// Same as [`Resolver::to_namespaced_path`], but for arbitrary bytes
    ///
    /// Bytes that are not valid UTF-8 are returned untouched.
    pub fn to_namespaced_path_bytes<'a>(&self, path: &'a [u8]) -> Cow<'a, [u8]> {
        let Ok(s) = core::str::from_utf8(path) else {
            return Cow::Borrowed(path);
        };

        match self.to_namespaced_path(s) {
            Cow::Borrowed(_) => Cow::Borrowed(path),
            Cow::Owned(namespaced) => Cow::Owned(namespaced.into_bytes()),
        }
    }
}
