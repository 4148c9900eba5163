/// The primary separator of path components for windows platforms
pub const SEPARATOR: char = '\\';

/// The primary separator of path components for windows platforms
pub const SEPARATOR_STR: &str = "\\";

/// The alternate separator of path components for windows platforms
pub const ALT_SEPARATOR: char = '/';

/// The alternate separator of path components for windows platforms
pub const ALT_SEPARATOR_STR: &str = "/";

/// Character that follows the letter of a drive spec such as `C:`
pub const DRIVE_DELIMITER: char = ':';

/// Path component value that represents the parent directory
pub const PARENT_DIR: &str = "..";

/// Path component value that represents the current directory
pub const CURRENT_DIR: &str = ".";

/// Prefix of a namespaced (long) path, e.g. `\\?\C:\Windows`
pub const VERBATIM_PREFIX: &str = r"\\?\";

/// Prefix of a namespaced (long) UNC path, e.g. `\\?\UNC\server\share`
pub const VERBATIM_UNC_PREFIX: &str = r"\\?\UNC\";

/// Leading characters of a UNC path, e.g. `\\server\share`
pub const UNC_PREFIX: &str = r"\\";

/// Marker that begins the environment variable holding a drive's working directory, as in
/// `=C:`
pub const DRIVE_DIR_VAR_MARKER: char = '=';
