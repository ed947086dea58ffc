#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fspath
//!
//! A portability shim for filesystem paths: a cross-platform path
//! value type plus directory-tree helpers (recursive creation,
//! recursive removal, temp-space allocation).
//!
//! ## Core Types
//!
//! - [`Path`]: normalized string form + derived segment vector, with
//!   decomposition ([`Path::parent_path`], [`Path::filename`],
//!   [`Path::extension`]) and concatenation ([`Path::join`],
//!   [`Path::push`])
//! - [`PathStyle`]: the injectable platform policy (separator,
//!   drive-letter rule), with [`PosixStyle`] and [`WindowsStyle`]
//! - [`Error`] and [`Result`]: error handling for the value-or-failure
//!   operations
//!
//! The tree operations ([`create_directories`], [`remove`],
//! [`remove_all`], [`create_temp_directory`], ...) live in [`ops`] and
//! are re-exported here.
//!
//! ## Examples
//!
//! ```
//! use fspath::Path;
//!
//! let p: Path = Path::from("src/path/types.rs");
//! assert_eq!(p.extension(), Path::from(".rs"));
//! assert_eq!(p.filename(), Path::from("types.rs"));
//! assert_eq!(p.parent_path().join(p.filename()), p);
//! ```

pub mod error;
pub mod ops;
pub mod path;
pub mod strings;

// Re-export key types and operations at the crate root for convenience
pub use error::{Error, Result};
pub use ops::{
    create_directories, create_temp_directory, create_temp_directory_in, current_path, exists,
    file_size, is_directory, is_regular_file, remove, remove_all, temp_directory_path,
};
pub use path::{
    remove_extension, HostStyle, Path, PathStyle, PosixStyle, WindowsStyle, PREFERRED_SEPARATOR,
};
