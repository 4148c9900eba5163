use crate::common::is_separator;
use crate::no_std_compat::*;
use crate::windows::constants::PARENT_DIR;

/// Resolves `.` and `..` segments within `path`, joining the surviving segments with `separator`
///
/// Both `\` and `/` split segments in the input. Repeated separators and `.` segments are
/// dropped, and a `..` segment removes the segment before it. A `..` with nothing left to remove
/// is kept only when `allow_above_root` is true, which is what a relative path wants; for a path
/// hanging off a root it is silently discarded.
///
/// Leading and trailing separators never appear in the output, and the output may be empty, in
/// which case callers that need a non-empty path typically substitute `.`.
///
/// # Examples
///
/// ```
/// use win_path_resolve::normalize_segments;
///
/// assert_eq!(normalize_segments("a/./b/../c", false, '/'), "a/c");
/// assert_eq!(normalize_segments(r"\foo\\bar\", false, '\\'), r"foo\bar");
///
/// // Climbing above the start is only kept when allowed
/// assert_eq!(normalize_segments("../../a", false, '/'), "a");
/// assert_eq!(normalize_segments("../../a", true, '/'), "../../a");
/// ```
pub fn normalize_segments(path: &str, allow_above_root: bool, separator: char) -> String {
    normalize_segments_with(path, allow_above_root, separator, is_separator)
}

/// Same as [`normalize_segments`], but `is_separator` decides which input bytes split segments
///
/// Only ASCII bytes should be reported as separators, otherwise segments could be split in the
/// middle of a multi-byte character.
///
/// # Examples
///
/// ```
/// use win_path_resolve::normalize_segments_with;
///
/// // Treat only forward slashes as separators, the way a POSIX path would
/// let path = normalize_segments_with(r"a\b/../c", false, '/', |b| b == b'/');
/// assert_eq!(path, "c");
/// ```
pub fn normalize_segments_with(
    path: &str,
    allow_above_root: bool,
    separator: char,
    is_separator: impl Fn(u8) -> bool,
) -> String {
    let bytes = path.as_bytes();
    let mut res = String::with_capacity(path.len());
    let mut last_segment_len = 0;
    let mut last_slash: Option<usize> = None;

    // Length of the run of dots making up the current segment, or None once anything but a dot
    // has appeared in it
    let mut dots: Option<usize> = Some(0);

    for i in 0..=bytes.len() {
        match bytes.get(i) {
            Some(&b) if !is_separator(b) => {
                dots = match dots {
                    Some(n) if b == b'.' => Some(n + 1),
                    _ => None,
                };
                continue;
            }
            Some(_) => (),

            // Past the end, a virtual separator flushes the final segment unless the path
            // already ended with a real one
            None if bytes.last().is_some_and(|&b| is_separator(b)) => break,
            None => (),
        }

        let start = last_slash.map_or(0, |s| s + 1);
        if start == i || dots == Some(1) {
            // Empty segment or `.`
        } else if dots == Some(2) {
            let ends_with_parent = res.len() >= 2
                && last_segment_len == PARENT_DIR.len()
                && res.ends_with(PARENT_DIR);

            if !ends_with_parent && !res.is_empty() {
                if res.len() > 2 {
                    match res.rfind(separator) {
                        Some(idx) => {
                            res.truncate(idx);
                            last_segment_len = match res.rfind(separator) {
                                Some(j) => res.len() - j - separator.len_utf8(),
                                None => res.len(),
                            };
                        }
                        None => {
                            res.clear();
                            last_segment_len = 0;
                        }
                    }
                } else {
                    res.clear();
                    last_segment_len = 0;
                }

                last_slash = Some(i);
                dots = Some(0);
                continue;
            }

            if allow_above_root {
                if !res.is_empty() {
                    res.push(separator);
                }
                res.push_str(PARENT_DIR);
                last_segment_len = PARENT_DIR.len();
            }
        } else {
            if !res.is_empty() {
                res.push(separator);
            }
            res.push_str(&path[start..i]);
            last_segment_len = i - start;
        }

        last_slash = Some(i);
        dots = Some(0);
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    mod normalize_segments {
        use super::*;

        #[test]
        fn should_return_empty_string_for_empty_input() {
            assert_eq!(normalize_segments("", false, '\\'), "");
            assert_eq!(normalize_segments("", true, '\\'), "");
        }

        #[test]
        fn should_collapse_current_dir_and_repeated_separators() {
            assert_eq!(normalize_segments("a/./b/../c", false, '/'), "a/c");
            assert_eq!(normalize_segments(r"a\\\b", false, '\\'), r"a\b");
            assert_eq!(normalize_segments("./a/./", false, '\\'), "a");
            assert_eq!(normalize_segments(".", true, '\\'), "");
            assert_eq!(normalize_segments(r"\\\", true, '\\'), "");
        }

        #[test]
        fn should_accept_mixed_separators_and_emit_chosen_separator() {
            assert_eq!(normalize_segments(r"a/b\c/", false, '\\'), r"a\b\c");
            assert_eq!(normalize_segments(r"a/b\c/", false, '/'), "a/b/c");
        }

        #[test]
        fn should_pop_previous_segment_on_parent_dir() {
            assert_eq!(normalize_segments(r"foo\bar\..\baz", false, '\\'), r"foo\baz");
            assert_eq!(normalize_segments(r"foo\bar\..\..\baz", false, '\\'), "baz");
            assert_eq!(normalize_segments(r"ab\..", false, '\\'), "");
            assert_eq!(normalize_segments(r"abcdef\..", false, '\\'), "");
            assert_eq!(normalize_segments(r"a\bb\ccc\..\..\d", false, '\\'), r"a\d");
        }

        #[test]
        fn should_drop_parent_dir_above_root_unless_allowed() {
            assert_eq!(normalize_segments("../../a", false, '/'), "a");
            assert_eq!(normalize_segments("../../a", true, '/'), "../../a");
            assert_eq!(normalize_segments(r"a\..\..\b", false, '\\'), "b");
            assert_eq!(normalize_segments(r"a\..\..\b", true, '\\'), r"..\b");
        }

        #[test]
        fn should_not_pop_existing_parent_dir_segments() {
            assert_eq!(normalize_segments("../..", true, '/'), "../..");
            assert_eq!(normalize_segments("../x/../..", true, '/'), "../..");
        }

        #[test]
        fn should_treat_dot_runs_mixed_with_other_chars_as_names() {
            assert_eq!(normalize_segments("a/...", false, '/'), "a/...");
            assert_eq!(normalize_segments("a/.b/..c/d..", false, '/'), "a/.b/..c/d..");
            assert_eq!(normalize_segments("a/.../..", false, '/'), "a");
            assert_eq!(normalize_segments("a/x./..", false, '/'), "a");
        }

        #[test]
        fn should_track_segment_length_after_popping() {
            // After popping `b`, the tail segment is `..`, which must not be popped again
            assert_eq!(normalize_segments("../b/../..", true, '/'), "../..");

            // After popping `c`, the tail segment is `..` preceded by other content
            assert_eq!(normalize_segments("../../c/..", true, '/'), "../..");
        }

        #[test]
        fn should_preserve_multi_byte_characters() {
            assert_eq!(normalize_segments("dïr/ñame/../fïle", false, '/'), "dïr/fïle");
            assert_eq!(normalize_segments(r"日本\語\..", false, '\\'), "日本");
        }

        #[test]
        fn should_not_emit_trailing_separator() {
            assert_eq!(normalize_segments("a/b/", false, '/'), "a/b");
            assert_eq!(normalize_segments("a/b//", false, '/'), "a/b");
            assert_eq!(normalize_segments("a/b/.", false, '/'), "a/b");
        }
    }

    mod normalize_segments_with {
        use super::*;

        #[test]
        fn should_only_split_on_reported_separators() {
            let path = normalize_segments_with(r"a\b/c", false, '/', |b| b == b'/');
            assert_eq!(path, r"a\b/c");

            let path = normalize_segments_with(r"a\b/..", false, '/', |b| b == b'/');
            assert_eq!(path, "");
        }
    }
}
