//! Platform path-style policy.
//!
//! The only platform-conditional pieces of path handling are the
//! preferred separator character and the drive-letter absolute-path
//! rule. Both live behind the [`PathStyle`] trait so the decomposition
//! and concatenation algorithms are written once and parametrized,
//! and so the Windows branches stay unit-testable on POSIX hosts.

/// Platform policy for interpreting path strings.
///
/// Implementors supply the two platform-dependent facts path handling
/// needs: the preferred separator, and whether a string is an absolute
/// path by virtue of a drive-letter prefix.
pub trait PathStyle {
    /// The separator used to normalize and re-emit path strings.
    const SEPARATOR: char;

    /// Whether `path` is an absolute path with a drive-letter prefix,
    /// i.e. `<letter>:` followed by the separator at offsets 0..3.
    fn has_drive_root(path: &str) -> bool;
}

/// Path style for POSIX-like targets: `/` separator, no drive letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PosixStyle;

impl PathStyle for PosixStyle {
    const SEPARATOR: char = '/';

    fn has_drive_root(_path: &str) -> bool {
        false
    }
}

/// Path style for the Windows family: `\` separator, drive-letter
/// absolute paths such as `C:\`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowsStyle;

impl PathStyle for WindowsStyle {
    const SEPARATOR: char = '\\';

    fn has_drive_root(path: &str) -> bool {
        let bytes = path.as_bytes();
        bytes.len() >= 3
            && bytes[0].is_ascii_alphabetic()
            && bytes[1] == b':'
            && bytes[2] == b'\\'
    }
}

/// Path style of the compilation target.
#[cfg(windows)]
pub type HostStyle = WindowsStyle;

/// Path style of the compilation target.
#[cfg(not(windows))]
pub type HostStyle = PosixStyle;

/// The separator character path strings are normalized to on this
/// platform: `/` on POSIX-like targets, `\` on Windows.
///
/// Consumers may depend on this constant for manual path string
/// construction.
///
/// # Examples
///
/// ```
/// use fspath::PREFERRED_SEPARATOR;
///
/// assert!(PREFERRED_SEPARATOR == '/' || PREFERRED_SEPARATOR == '\\');
/// ```
pub const PREFERRED_SEPARATOR: char = <HostStyle as PathStyle>::SEPARATOR;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_never_has_drive_root() {
        assert!(!PosixStyle::has_drive_root("C:\\foo"));
        assert!(!PosixStyle::has_drive_root("/foo"));
        assert!(!PosixStyle::has_drive_root(""));
    }

    #[test]
    fn test_windows_drive_root_detection() {
        assert!(WindowsStyle::has_drive_root("C:\\"));
        assert!(WindowsStyle::has_drive_root("C:\\foo\\bar"));
        assert!(WindowsStyle::has_drive_root("z:\\foo"));
    }

    #[test]
    fn test_windows_drive_root_rejects_non_letters() {
        assert!(!WindowsStyle::has_drive_root("1:\\foo"));
        assert!(!WindowsStyle::has_drive_root(":\\foo"));
    }

    #[test]
    fn test_windows_drive_root_requires_separator() {
        assert!(!WindowsStyle::has_drive_root("C:foo"));
        assert!(!WindowsStyle::has_drive_root("C:"));
        assert!(!WindowsStyle::has_drive_root(""));
        assert!(!WindowsStyle::has_drive_root("\\foo"));
    }

    #[test]
    fn test_separators() {
        assert_eq!(PosixStyle::SEPARATOR, '/');
        assert_eq!(WindowsStyle::SEPARATOR, '\\');
    }
}
