//! Cross-platform path abstraction.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! A [`Path`] is built from any string: both `/` and `\` are replaced
//! with the platform's preferred separator, and the result is split on
//! that separator into the segment vector. Empty segments from a
//! leading or duplicated separator are kept — a leading empty segment
//! is how an absolute path announces itself on POSIX.
//!
//! ## Platform policy
//!
//! The separator and the drive-letter rule are the only
//! platform-conditional logic, isolated in the [`PathStyle`] trait.
//! [`Path`] defaults to the compilation target's [`HostStyle`], but
//! can be pinned to [`PosixStyle`] or [`WindowsStyle`] so either
//! platform's decomposition rules can be exercised anywhere:
//!
//! ```
//! use fspath::{Path, WindowsStyle};
//!
//! let p: Path<WindowsStyle> = Path::from("C:/Users/dev");
//! assert!(p.is_absolute());
//! assert_eq!(p.as_str(), "C:\\Users\\dev");
//! ```
//!
//! ## Value semantics
//!
//! Transformations ([`Path::parent_path`], [`Path::filename`],
//! [`Path::extension`], [`Path::join`]) return new values. Filesystem
//! queries go to the live filesystem each time; nothing is cached on
//! the value.

mod decompose;
pub mod style;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use decompose::remove_extension;
pub use style::{HostStyle, PathStyle, PosixStyle, WindowsStyle, PREFERRED_SEPARATOR};
pub use types::Path;
