//! Error types for the fspath library.
//!
//! Only the value-or-failure operations (`file_size`,
//! `temp_directory_path`, `create_temp_directory`, `current_path`)
//! construct these errors. The boolean-contract operations
//! (`exists`, `create_directories`, `remove`, `remove_all`, ...) report
//! failure through their return value and never raise.

use std::io;

use thiserror::Error;

/// Result type alias for operations that may fail with an fspath error.
///
/// # Examples
///
/// ```
/// use fspath::{Path, Result};
///
/// fn example_operation() -> Result<Path> {
///     Ok(Path::from("ok"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fspath library.
///
/// Variants wrapping an [`io::Error`] carry the underlying OS error
/// code; the remaining variants are semantic failures with no OS error
/// attached.
#[derive(Debug, Error)]
pub enum Error {
    /// `file_size` was called on a directory.
    #[error("cannot get file size of {path}: target is a directory")]
    IsADirectory {
        /// The directory path the size was requested for.
        path: String,
    },

    /// The metadata query behind `file_size` failed.
    #[error("cannot get file size of {path}: {source}")]
    FileSize {
        /// The path the size was requested for.
        path: String,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The parent directory for a temp directory could not be created.
    #[error("could not create the parent directory {path}")]
    CreateParentDirectory {
        /// The parent path that could not be created.
        path: String,
    },

    /// The OS could not produce a uniquely named temp directory.
    #[error("could not create a temp directory from template {template}: {source}")]
    CreateTempDirectory {
        /// The name template, `base_name` followed by the unique suffix
        /// placeholder.
        template: String,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The current working directory could not be determined.
    #[error("cannot get current working directory: {source}")]
    CurrentDirectory {
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Return the raw OS error code carried by this error, if any.
    ///
    /// Semantic errors (`IsADirectory`, `CreateParentDirectory`) have
    /// no OS error attached and return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Error;
    ///
    /// let err = Error::IsADirectory { path: "/some/dir".to_string() };
    /// assert_eq!(err.os_error_code(), None);
    /// ```
    #[must_use]
    pub fn os_error_code(&self) -> Option<i32> {
        match self {
            Self::FileSize { source, .. }
            | Self::CreateTempDirectory { source, .. }
            | Self::CurrentDirectory { source } => source.raw_os_error(),
            Self::IsADirectory { .. } | Self::CreateParentDirectory { .. } => None,
        }
    }

    /// Check if this error is the semantic "target is a directory"
    /// failure from `file_size`, as opposed to an OS-level failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Error;
    ///
    /// let err = Error::IsADirectory { path: "/some/dir".to_string() };
    /// assert!(err.is_directory_target());
    /// ```
    #[must_use]
    pub fn is_directory_target(&self) -> bool {
        matches!(self, Self::IsADirectory { .. })
    }
}
