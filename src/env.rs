use crate::no_std_compat::*;
use crate::windows::constants::{DRIVE_DELIMITER, DRIVE_DIR_VAR_MARKER};
use alloc::collections::BTreeMap;

/// Source of the working directories consulted while resolving a relative path
///
/// [`Resolver`](crate::Resolver) only asks for these when its fragments do not already resolve
/// to an absolute path on a known device.
pub trait Environment {
    /// Returns the working directory of the process, or [`None`] if it is unavailable
    fn current_dir(&self) -> Option<String>;

    /// Returns the value of the environment variable `name`, or [`None`] if it is unset
    ///
    /// Windows keeps the working directory of each drive in a hidden variable named after the
    /// drive, such as `=C:`, which is what this is asked for.
    fn var(&self, name: &str) -> Option<String>;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn current_dir(&self) -> Option<String> {
        (**self).current_dir()
    }

    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Returns the name of the variable holding the working directory of `drive`
///
/// # Examples
///
/// ```
/// use win_path_resolve::drive_dir_var;
///
/// assert_eq!(drive_dir_var('c'), "=C:");
/// ```
pub fn drive_dir_var(drive: char) -> String {
    format!(
        "{DRIVE_DIR_VAR_MARKER}{}{DRIVE_DELIMITER}",
        drive.to_ascii_uppercase()
    )
}

/// [`Environment`] with a fixed working directory and set of variables
///
/// # Examples
///
/// ```
/// use win_path_resolve::{Environment, FixedEnvironment};
///
/// let env = FixedEnvironment::new()
///     .with_current_dir(r"C:\work")
///     .with_drive_dir('d', r"D:\games");
///
/// assert_eq!(env.current_dir().as_deref(), Some(r"C:\work"));
/// assert_eq!(env.var("=D:").as_deref(), Some(r"D:\games"));
/// assert_eq!(env.var("=E:"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedEnvironment {
    current_dir: Option<String>,
    vars: BTreeMap<String, String>,
}

impl FixedEnvironment {
    /// Creates an environment with no working directory and no variables
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the working directory of the process
    pub fn with_current_dir(mut self, dir: impl Into<String>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Sets the working directory of `drive`, stored under [`drive_dir_var`]
    pub fn with_drive_dir(self, drive: char, dir: impl Into<String>) -> Self {
        self.with_var(drive_dir_var(drive), dir)
    }

    /// Sets an arbitrary variable
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl Environment for FixedEnvironment {
    fn current_dir(&self) -> Option<String> {
        self.current_dir.clone()
    }

    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(feature = "std")]
pub use self::std_env::StdEnvironment;

#[cfg(feature = "std")]
mod std_env {
    use super::Environment;
    use std::env;

    /// [`Environment`] backed by the running process
    ///
    /// Values that are not valid UTF-8 are reported as unavailable.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct StdEnvironment;

    impl Environment for StdEnvironment {
        fn current_dir(&self) -> Option<String> {
            let dir = match env::current_dir() {
                Ok(dir) => dir,
                Err(x) => {
                    tracing::debug!(error = %x, "Unable to read current directory");
                    return None;
                }
            };

            match dir.into_os_string().into_string() {
                Ok(dir) => Some(dir),
                Err(dir) => {
                    tracing::debug!(?dir, "Current directory is not valid UTF-8");
                    None
                }
            }
        }

        /// Scans the process environment for an exact match of `name`
        ///
        /// Per-drive names like `=C:` contain `=`, which [`env::var`] does not accept on every
        /// platform, so the variables are walked instead.
        fn var(&self, name: &str) -> Option<String> {
            let (_, value) = env::vars_os().find(|(key, _)| key.to_str() == Some(name))?;

            match value.into_string() {
                Ok(value) => Some(value),
                Err(value) => {
                    tracing::debug!(var = name, ?value, "Environment variable is not valid UTF-8");
                    None
                }
            }
        }
    }
}
