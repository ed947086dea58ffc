//! The path value type.
//!
//! [`Path`] pairs a normalized string form with the segment vector
//! derived from it. Both `/` and `\` are rewritten to the platform's
//! preferred separator at construction, and the segments are recomputed
//! from the normalized string, so the two representations cannot drift
//! apart. Filesystem queries (`exists`, `is_directory`, ...) consult
//! the live filesystem on every call; nothing is memoized on the value,
//! since the filesystem can change between calls.

use std::fmt;
use std::fs;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::path::style::{HostStyle, PathStyle};
use crate::strings::split;

/// A filesystem location, not necessarily one that exists.
///
/// `Path` is a plain value: every transformation (`parent_path`,
/// `filename`, `extension`, `join`) returns a new instance, and the
/// only place OS state enters is the explicit filesystem queries.
///
/// The style parameter selects the platform policy and defaults to the
/// compilation target's [`HostStyle`]; pinning
/// [`WindowsStyle`](crate::WindowsStyle) or
/// [`PosixStyle`](crate::PosixStyle) makes the other platform's
/// semantics available for testing.
///
/// # Examples
///
/// ```
/// use fspath::{Path, PREFERRED_SEPARATOR};
///
/// // Both separator characters are normalized at construction.
/// let p: Path = Path::from("repo/src\\lib.rs");
/// let non_preferred = if PREFERRED_SEPARATOR == '/' { '\\' } else { '/' };
/// assert!(!p.as_str().contains(non_preferred));
/// assert_eq!(p.segments().len(), 3);
/// ```
pub struct Path<S: PathStyle = HostStyle> {
    inner: String,
    segments: Vec<String>,
    style: PhantomData<S>,
}

impl<S: PathStyle> Path<S> {
    /// Construct the empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Path;
    ///
    /// let p: Path = Path::new();
    /// assert!(p.is_empty());
    /// assert!(p.segments().is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: String::new(),
            segments: Vec::new(),
            style: PhantomData,
        }
    }

    /// The normalized string form, verbatim.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// The segments of this path, in left-to-right order.
    ///
    /// Empty segments produced by a leading or duplicated separator are
    /// preserved; a leading empty segment is how absolute paths present
    /// themselves on POSIX.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True iff the string form has zero length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// True iff this path is independent of any working directory:
    /// it begins with the preferred separator, or carries a
    /// drive-letter prefix under the Windows style.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::{HostStyle, Path};
    ///
    /// assert!(Path::<HostStyle>::from("/etc").is_absolute());
    /// assert!(!Path::<HostStyle>::from("etc").is_absolute());
    /// assert!(!Path::<HostStyle>::new().is_absolute());
    /// ```
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        !self.inner.is_empty()
            && (self.inner.starts_with(S::SEPARATOR) || S::has_drive_root(&self.inner))
    }

    /// Append `other` to this path in place.
    ///
    /// A relative `other` is appended after a separator (no separator
    /// is inserted when this path is empty or already ends with one),
    /// and its segments are appended to this path's segments. An
    /// absolute `other` replaces this path entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::{Path, PREFERRED_SEPARATOR};
    ///
    /// let mut p: Path = Path::from("a");
    /// p.push("b");
    /// assert_eq!(p.as_str(), format!("a{PREFERRED_SEPARATOR}b"));
    ///
    /// p.push(Path::from("/reset"));
    /// assert_eq!(p, Path::from("/reset"));
    /// ```
    pub fn push(&mut self, other: impl Into<Self>) {
        let other = other.into();
        if other.is_absolute() {
            *self = other;
            return;
        }
        if !self.inner.is_empty() && !self.inner.ends_with(S::SEPARATOR) {
            self.inner.push(S::SEPARATOR);
        }
        self.inner.push_str(&other.inner);
        self.segments.extend(other.segments);
    }

    /// Concatenate this path with `other`, producing a new path.
    ///
    /// Concatenation is not commutative: if `other` is absolute it
    /// replaces this path entirely ("absolute join resets base").
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::{Path, PREFERRED_SEPARATOR};
    ///
    /// let joined: Path = Path::from("a").join("b");
    /// assert_eq!(joined.as_str(), format!("a{PREFERRED_SEPARATOR}b"));
    /// assert_eq!(joined.segments().len(), 2);
    ///
    /// let reset: Path = Path::from("a").join(Path::from("/abs"));
    /// assert_eq!(reset, Path::from("/abs"));
    /// ```
    #[must_use]
    pub fn join(&self, other: impl Into<Self>) -> Self {
        let mut joined = self.clone();
        joined.push(other);
        joined
    }

    /// Check whether this path exists on the live filesystem.
    #[must_use]
    pub fn exists(&self) -> bool {
        std::path::Path::new(&self.inner).exists()
    }

    /// Check whether this path is an existing directory.
    ///
    /// Returns `false`, never an error, when the metadata query fails.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        fs::metadata(&self.inner).is_ok_and(|metadata| metadata.is_dir())
    }

    /// Check whether this path is an existing regular file.
    ///
    /// Returns `false`, never an error, when the metadata query fails.
    #[must_use]
    pub fn is_regular_file(&self) -> bool {
        fs::metadata(&self.inner).is_ok_and(|metadata| metadata.is_file())
    }

    /// The size of the file at this path, in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IsADirectory`] if this path is a directory,
    /// and [`Error::FileSize`] wrapping the OS error if the metadata
    /// query fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fspath::Path;
    ///
    /// let size = Path::<fspath::HostStyle>::from("/var/log/syslog").file_size()?;
    /// println!("{size} bytes");
    /// # Ok::<(), fspath::Error>(())
    /// ```
    pub fn file_size(&self) -> Result<u64> {
        if self.is_directory() {
            return Err(Error::IsADirectory {
                path: self.inner.clone(),
            });
        }
        let metadata = fs::metadata(&self.inner).map_err(|source| Error::FileSize {
            path: self.inner.clone(),
            source,
        })?;
        Ok(metadata.len())
    }
}

impl<S: PathStyle> From<String> for Path<S> {
    fn from(raw: String) -> Self {
        let inner: String = raw
            .chars()
            .map(|c| if c == '/' || c == '\\' { S::SEPARATOR } else { c })
            .collect();
        let segments = split(&inner, S::SEPARATOR, false);
        Self {
            inner,
            segments,
            style: PhantomData,
        }
    }
}

impl<S: PathStyle> From<&str> for Path<S> {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl<S: PathStyle> From<&Path<S>> for Path<S> {
    fn from(path: &Path<S>) -> Self {
        path.clone()
    }
}

// Manual trait impls: deriving would put spurious bounds on the
// zero-sized style parameter.

impl<S: PathStyle> Clone for Path<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            segments: self.segments.clone(),
            style: PhantomData,
        }
    }
}

impl<S: PathStyle> Default for Path<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PathStyle> PartialEq for Path<S> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<S: PathStyle> Eq for Path<S> {}

impl<S: PathStyle> Hash for Path<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<S: PathStyle> fmt::Debug for Path<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Path").field(&self.inner).finish()
    }
}

impl<S: PathStyle> fmt::Display for Path<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}
