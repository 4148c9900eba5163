use crate::common::{normalize_segments, ResolveError};
use crate::env::{drive_dir_var, Environment};
use crate::no_std_compat::*;
use crate::windows::constants::{CURRENT_DIR, DRIVE_DELIMITER, SEPARATOR};
use crate::windows::WindowsRoot;
use core::iter;

/// Resolves sequences of Windows path fragments into a single normalized path
///
/// Working directories are taken from the [`Environment`] the resolver was built with, which
/// allows resolution to be deterministic regardless of the platform the code runs on.
///
/// # Examples
///
/// ```
/// use win_path_resolve::{FixedEnvironment, Resolver};
///
/// let resolver = Resolver::new(FixedEnvironment::new().with_current_dir(r"C:\work"));
///
/// assert_eq!(resolver.resolve_utf8(["src", "..", "docs"]), r"C:\work\docs");
/// assert_eq!(resolver.resolve_utf8([r"D:\games", "saves"]), r"D:\games\saves");
/// assert_eq!(resolver.resolve_utf8([r"\\server\share", "file"]), r"\\server\share\file");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolver<E> {
    env: E,
}

impl<E> Resolver<E> {
    /// Creates a resolver that consults `env` for working directories
    pub const fn new(env: E) -> Self {
        Self { env }
    }

    /// Returns a reference to the environment used by this resolver
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Consumes the resolver, returning its environment
    pub fn into_env(self) -> E {
        self.env
    }
}

/// Slot visited while scanning fragments from right to left
enum Fragment<'a> {
    Given(&'a str),
    WorkingDir,
}

impl<E: Environment> Resolver<E> {
    /// Resolves `fragments` into an absolute path, falling back to working directories from the
    /// environment when the fragments alone are not enough
    ///
    /// # Details
    ///
    /// Fragments are processed from last to first and resolution stops as soon as a fragment
    /// supplies both an absolute root and a device. Empty fragments are ignored.
    ///
    /// * A fragment naming a different device than the one already found (compared without
    ///   regard to ASCII case) is skipped entirely.
    /// * If nothing absolute was found, the working directory of the process is used; if a drive
    ///   was found but no root, the working directory of that drive (the `=C:` style variable) is
    ///   used instead, or the root of the drive when none is known.
    /// * `.` and `..` segments are resolved once everything is collected, and `..` never climbs
    ///   above the root of an absolute path.
    ///
    /// When the environment has no working directory, the result can be relative, and is `.` if
    /// it would otherwise be empty.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidFragment`] naming the position of the first fragment that is
    /// not valid UTF-8. Nothing is resolved in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use win_path_resolve::{FixedEnvironment, ResolveError, Resolver};
    ///
    /// let resolver = Resolver::new(FixedEnvironment::new());
    ///
    /// assert_eq!(resolver.resolve([r"D:\foo", r"C:\bar"]).unwrap(), r"C:\bar");
    ///
    /// let err = resolver.resolve([&b"C:\\"[..], &b"\xff"[..]]).unwrap_err();
    /// assert_eq!(err.index(), 1);
    /// ```
    pub fn resolve<I, P>(&self, fragments: I) -> Result<String, ResolveError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let fragments: Vec<P> = fragments.into_iter().collect();
        let fragments = fragments
            .iter()
            .enumerate()
            .map(|(index, fragment)| {
                core::str::from_utf8(fragment.as_ref())
                    .map_err(|source| ResolveError::InvalidFragment { index, source })
            })
            .collect::<Result<Vec<&str>, _>>()?;

        Ok(self.resolve_strs(&fragments))
    }

    /// Same as [`Resolver::resolve`], but for fragments that are already strings and therefore
    /// cannot fail
    pub fn resolve_utf8<I, S>(&self, fragments: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fragments: Vec<S> = fragments.into_iter().collect();
        let fragments: Vec<&str> = fragments.iter().map(AsRef::as_ref).collect();
        self.resolve_strs(&fragments)
    }

    pub(crate) fn resolve_strs(&self, fragments: &[&str]) -> String {
        let mut device = String::new();
        let mut tail = String::new();
        let mut absolute = false;

        let slots = fragments
            .iter()
            .copied()
            .rev()
            .map(Fragment::Given)
            .chain(iter::once(Fragment::WorkingDir));

        for slot in slots {
            let working_dir: String;
            let path = match slot {
                Fragment::Given(path) => path,
                Fragment::WorkingDir => match self.working_dir(&device) {
                    Some(dir) => {
                        working_dir = dir;
                        working_dir.as_str()
                    }
                    None => continue,
                },
            };

            if path.is_empty() {
                continue;
            }

            let root = WindowsRoot::parse(path);

            if root.has_device() {
                if device.is_empty() {
                    device = String::from(root.device());
                } else if !root.device().eq_ignore_ascii_case(&device) {
                    tracing::trace!(
                        fragment = path,
                        device = %device,
                        "Skipping fragment on another device"
                    );
                    continue;
                }
            }

            if absolute {
                if !device.is_empty() {
                    break;
                }
            } else {
                tail.insert(0, SEPARATOR);
                tail.insert_str(0, root.remainder(path));
                absolute = root.is_absolute();

                if absolute && !device.is_empty() {
                    break;
                }
            }
        }

        let tail = normalize_segments(&tail, !absolute, SEPARATOR);
        let resolved = if absolute {
            format!("{device}{SEPARATOR}{tail}")
        } else if device.is_empty() && tail.is_empty() {
            String::from(CURRENT_DIR)
        } else {
            format!("{device}{tail}")
        };

        tracing::trace!(?fragments, %resolved, "Resolved path");
        resolved
    }

    /// Returns the fragment standing in for the working directory once all given fragments are
    /// exhausted
    fn working_dir(&self, device: &str) -> Option<String> {
        if device.is_empty() {
            return self.env.current_dir();
        }

        // UNC devices are always absolute, so only drives reach this point
        let candidate = match device.as_bytes() {
            [letter, delimiter] if *delimiter == DRIVE_DELIMITER as u8 => self
                .env
                .var(&drive_dir_var(char::from(*letter)))
                .or_else(|| self.env.current_dir()),
            _ => None,
        };

        match candidate {
            Some(dir) if is_on_device(&dir, device) => {
                tracing::trace!(%device, %dir, "Using working directory of device");
                Some(dir)
            }
            _ => {
                tracing::trace!(%device, "No working directory for device, using its root");
                Some(format!("{device}{SEPARATOR}"))
            }
        }
    }
}

/// Returns true if `path` begins with `device`, ignoring ASCII case
fn is_on_device(path: &str, device: &str) -> bool {
    path.get(..device.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(device))
}
