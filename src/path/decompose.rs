//! Path decomposition: parent directory, filename, and extension.

use crate::path::style::PathStyle;
use crate::path::types::Path;
use crate::strings::split;

impl<S: PathStyle> Path<S> {
    /// The parent directory of this path.
    ///
    /// Edge cases follow the usual conventions: the empty path has an
    /// empty parent; a single-segment relative path has parent `.`; a
    /// single-segment absolute path has the root indicator as parent
    /// (the separator alone, or the drive root such as `C:\`, which
    /// keeps its trailing separator).
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::{HostStyle, Path};
    ///
    /// assert_eq!(Path::<HostStyle>::from("file").parent_path(), Path::from("."));
    /// assert_eq!(
    ///     Path::<HostStyle>::from("a/b/c").parent_path(),
    ///     Path::from("a/b")
    /// );
    /// assert!(Path::<HostStyle>::new().parent_path().is_empty());
    /// ```
    #[must_use]
    pub fn parent_path(&self) -> Self {
        if self.is_empty() {
            return Self::new();
        }

        let segments = self.segments();

        // A single-segment path reduces to '.' or the root indicator.
        if segments.len() == 1 {
            if self.is_absolute() {
                if S::has_drive_root(self.as_str()) {
                    return Self::from(format!("{}{}", segments[0], S::SEPARATOR));
                }
                return Self::from(S::SEPARATOR.to_string());
            }
            return Self::from(".");
        }

        // With a path 'C:\foo' the parent is 'C:\', not 'C:'. The root
        // keeps its trailing separator, unlike an ordinary segment.
        if segments.len() == 2 && S::has_drive_root(self.as_str()) {
            return Self::from(format!("{}{}", segments[0], S::SEPARATOR));
        }

        let mut parent = Self::new();
        for segment in &segments[..segments.len() - 1] {
            if parent.is_empty() {
                // The first piece decides the shape: a leading empty
                // segment means the path is absolute and the parent
                // starts at the root; otherwise (relative path or
                // drive letter) the piece is copied directly so no
                // separator lands at the front.
                if segment.is_empty() {
                    parent = Self::from(S::SEPARATOR.to_string());
                } else {
                    parent = Self::from(segment.as_str());
                }
            } else {
                parent.push(segment.as_str());
            }
        }
        parent
    }

    /// The last segment of this path, or the empty path if this path
    /// is itself empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::{HostStyle, Path};
    ///
    /// assert_eq!(Path::<HostStyle>::from("a/b/notes.txt").filename(), Path::from("notes.txt"));
    /// assert!(Path::<HostStyle>::new().filename().is_empty());
    /// ```
    #[must_use]
    pub fn filename(&self) -> Self {
        self.segments()
            .last()
            .map_or_else(Self::new, |segment| Self::from(segment.as_str()))
    }

    /// The extension of this path: `.` plus the final dot-delimited
    /// fragment of the string form, or the empty path when no `.` is
    /// present. Only the last extension is captured.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::{HostStyle, Path};
    ///
    /// assert_eq!(Path::<HostStyle>::from("archive.tar.gz").extension(), Path::from(".gz"));
    /// assert!(Path::<HostStyle>::from("noext").extension().is_empty());
    /// ```
    #[must_use]
    pub fn extension(&self) -> Self {
        let fragments = split(self.as_str(), '.', false);
        match fragments.last() {
            Some(last) if fragments.len() > 1 => Self::from(format!(".{last}")),
            _ => Self::new(),
        }
    }
}

/// Remove up to `n_times` extensions from the end of `path`.
///
/// Each round truncates the string form before its last `.`. The loop
/// stops early, returning the current value, once no `.` remains, so
/// over-asking is harmless.
///
/// # Examples
///
/// ```
/// use fspath::{remove_extension, Path};
///
/// let p: Path = Path::from("a.tar.gz");
/// assert_eq!(remove_extension(&p, 1), Path::from("a.tar"));
/// assert_eq!(remove_extension(&p, 2), Path::from("a"));
/// assert_eq!(remove_extension(&p, 3), Path::from("a"));
/// ```
#[must_use]
pub fn remove_extension<S: PathStyle>(path: &Path<S>, n_times: usize) -> Path<S> {
    let mut current = path.clone();
    for _ in 0..n_times {
        let Some(last_dot) = current.as_str().rfind('.') else {
            return current;
        };
        current = Path::from(current.as_str()[..last_dot].to_owned());
    }
    current
}
