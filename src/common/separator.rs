use crate::windows::constants::{ALT_SEPARATOR, SEPARATOR};

/// Returns true if the byte is a Windows path separator, either `\` or `/`
///
/// # Examples
///
/// ```
/// use win_path_resolve::is_separator;
///
/// assert!(is_separator(b'\\'));
/// assert!(is_separator(b'/'));
/// assert!(!is_separator(b':'));
/// ```
#[inline]
pub const fn is_separator(b: u8) -> bool {
    b == SEPARATOR as u8 || b == ALT_SEPARATOR as u8
}

/// Returns true if the byte can begin a drive spec such as `C:`, meaning an ASCII letter
///
/// # Examples
///
/// ```
/// use win_path_resolve::is_device_root_letter;
///
/// assert!(is_device_root_letter(b'C'));
/// assert!(is_device_root_letter(b'z'));
/// assert!(!is_device_root_letter(b'1'));
/// ```
#[inline]
pub const fn is_device_root_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// [`char`] version of [`is_separator`]
#[inline]
pub const fn is_separator_char(c: char) -> bool {
    c == SEPARATOR || c == ALT_SEPARATOR
}

/// [`char`] version of [`is_device_root_letter`]
#[inline]
pub const fn is_device_root_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_separator_should_only_accept_slashes() {
        assert!(is_separator(b'\\'));
        assert!(is_separator(b'/'));

        for b in [b'a', b'.', b':', b'?', b' ', 0u8, 0xffu8] {
            assert!(!is_separator(b), "{b:#x} is not a separator");
        }
    }

    #[test]
    fn is_device_root_letter_should_only_accept_ascii_letters() {
        for b in (b'a'..=b'z').chain(b'A'..=b'Z') {
            assert!(is_device_root_letter(b));
        }

        // Neighbours of the letter ranges in the ASCII table
        for b in [b'@', b'[', b'`', b'{', b'0', b'9', b':', 0xc3u8] {
            assert!(!is_device_root_letter(b), "{b:#x} is not a drive letter");
        }
    }

    #[test]
    fn char_variants_should_match_byte_variants_for_ascii() {
        for b in 0u8..128 {
            assert_eq!(is_separator_char(b as char), is_separator(b));
            assert_eq!(is_device_root_char(b as char), is_device_root_letter(b));
        }

        // No locale sensitivity: non-ASCII letters never count as drives
        assert!(!is_device_root_char('é'));
        assert!(!is_device_root_char('Ω'));
    }
}
