use crate::common::{is_device_root_letter, is_separator};
use crate::no_std_compat::*;
use crate::windows::constants::{DRIVE_DELIMITER, SEPARATOR, UNC_PREFIX};

/// Root of a single Windows path fragment, as seen by [`Resolver`](crate::Resolver)
///
/// # Details
///
/// The root is the portion of a fragment that anchors it, which can be any of:
///
/// * nothing at all, as in `foo\bar`, which is relative
/// * a bare separator, as in `\foo`, which is absolute on whatever device is current
/// * a drive spec, as in `C:foo` (relative to the drive) or `C:\foo` (absolute)
/// * a UNC host and share, as in `\\server\share\foo`, which is always absolute
///
/// The device of a UNC root is rebuilt with `\` separators, so `//server/share` reports a device
/// of `\\server\share`. Drive specs keep the case they were written in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowsRoot<'a> {
    device: Cow<'a, str>,
    end: usize,
    absolute: bool,
}

impl<'a> WindowsRoot<'a> {
    /// Classifies the root at the start of `path`
    ///
    /// # Examples
    ///
    /// ```
    /// use win_path_resolve::WindowsRoot;
    ///
    /// let root = WindowsRoot::parse(r"C:\Windows");
    /// assert_eq!(root.device(), "C:");
    /// assert!(root.is_absolute());
    /// assert_eq!(root.remainder(r"C:\Windows"), "Windows");
    ///
    /// let root = WindowsRoot::parse("//server/share/file");
    /// assert_eq!(root.device(), r"\\server\share");
    /// assert!(root.is_absolute());
    ///
    /// let root = WindowsRoot::parse("relative");
    /// assert_eq!(root.device(), "");
    /// assert!(!root.is_absolute());
    /// ```
    pub fn parse(path: &'a str) -> Self {
        let bytes = path.as_bytes();

        match bytes {
            [] => Self::relative(),
            [b] if is_separator(*b) => Self::bare(),
            [_] => Self::relative(),
            [a, b, ..] if is_separator(*a) && is_separator(*b) => {
                unc(path).unwrap_or_else(Self::bare)
            }
            [a, ..] if is_separator(*a) => Self::bare(),
            [letter, colon, rest @ ..]
                if is_device_root_letter(*letter) && *colon == DRIVE_DELIMITER as u8 =>
            {
                let absolute = rest.first().is_some_and(|b| is_separator(*b));
                Self {
                    device: Cow::Borrowed(&path[..2]),
                    end: if absolute { 3 } else { 2 },
                    absolute,
                }
            }
            _ => Self::relative(),
        }
    }

    fn relative() -> Self {
        Self {
            device: Cow::Borrowed(""),
            end: 0,
            absolute: false,
        }
    }

    fn bare() -> Self {
        Self {
            device: Cow::Borrowed(""),
            end: 1,
            absolute: true,
        }
    }

    /// Returns the device this root names, which is empty when there is none
    ///
    /// e.g. `C:` or `\\server\share`
    pub fn device(&self) -> &str {
        &self.device
    }

    /// Returns true if the root names a device
    #[inline]
    pub fn has_device(&self) -> bool {
        !self.device.is_empty()
    }

    /// Returns true if the root makes the path absolute, meaning it starts with a separator or
    /// with a drive spec followed by a separator
    #[inline]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Returns the length in bytes of the root within the parsed path
    #[inline]
    pub fn len(&self) -> usize {
        self.end
    }

    /// Returns true if the parsed path had no root at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == 0
    }

    /// Returns the portion of `path` that follows this root
    ///
    /// `path` should be the same string that was parsed, otherwise an empty string may be returned.
    pub fn remainder<'b>(&self, path: &'b str) -> &'b str {
        path.get(self.end..).unwrap_or_default()
    }

    /// Consumes the root, returning its device
    pub fn into_device(self) -> Cow<'a, str> {
        self.device
    }
}

/// Matches `\\host\share` (or just `\\host`) at the start of `path`, where either separator may
/// be `\` or `/` and may repeat between the host and share
fn unc(path: &str) -> Option<WindowsRoot<'_>> {
    let bytes = path.as_bytes();
    let len = bytes.len();

    let scan = |mut j: usize, want_separator: bool| {
        while j < len && is_separator(bytes[j]) == want_separator {
            j += 1;
        }
        j
    };

    let host_start = 2;
    let host_end = scan(host_start, false);
    if host_end == host_start {
        return None;
    }
    let host = &path[host_start..host_end];

    let share_start = scan(host_end, true);
    let (device, end) = if share_start == len {
        (format!("{UNC_PREFIX}{host}"), share_start)
    } else {
        let share_end = scan(share_start, false);
        let share = &path[share_start..share_end];
        (format!("{UNC_PREFIX}{host}{SEPARATOR}{share}"), share_end)
    };

    Some(WindowsRoot {
        device: Cow::Owned(device),
        end,
        absolute: true,
    })
}
