//! Directory-tree operations over [`Path`] values.
//!
//! Every operation here is a stateless, synchronous transformation of
//! the live filesystem; no state is retained between calls and no
//! locking is imposed. Concurrent mutation of the same paths is
//! tolerated only to the extent that "already exists" counts as
//! success during creation; a race during [`remove_all`] can surface
//! as a spurious `false`.
//!
//! Operations come in two failure families (deliberately distinct):
//! the boolean-result family ([`exists`], [`is_directory`],
//! [`is_regular_file`], [`create_directories`], [`remove`],
//! [`remove_all`]) never raises, while the value-or-failure family
//! ([`file_size`], [`temp_directory_path`], [`create_temp_directory`],
//! [`current_path`]) raises a structured [`Error`](crate::Error)
//! carrying the OS error where one exists.

use std::fs;
use std::io;

use crate::error::{Error, Result};
use crate::path::{Path, PathStyle};

/// Check if `path` exists.
#[must_use]
pub fn exists<S: PathStyle>(path: &Path<S>) -> bool {
    path.exists()
}

/// Check if `path` is an existing directory.
///
/// Returns `false`, never an error, when the metadata query fails.
#[must_use]
pub fn is_directory<S: PathStyle>(path: &Path<S>) -> bool {
    path.is_directory()
}

/// Check if `path` is an existing regular file.
///
/// Returns `false`, never an error, when the metadata query fails.
#[must_use]
pub fn is_regular_file<S: PathStyle>(path: &Path<S>) -> bool {
    path.is_regular_file()
}

/// Get the size of the file at `path`, in bytes.
///
/// # Errors
///
/// Returns [`Error::IsADirectory`] if `path` is a directory, and
/// [`Error::FileSize`] wrapping the OS error if the metadata query
/// fails.
pub fn file_size<S: PathStyle>(path: &Path<S>) -> Result<u64> {
    path.file_size()
}

/// Create the directory at `path`, including every missing ancestor.
///
/// The segments are walked left to right, building up an accumulating
/// prefix; each prefix that does not yet exist is created with a
/// single directory-creation call. "Already exists" is absorbed as
/// success, including the concurrent-creation race, so the operation
/// is idempotent. Any other OS error stops the walk.
///
/// Returns `true` iff the fully built path is a directory afterwards.
/// Never raises.
///
/// # Examples
///
/// ```no_run
/// use fspath::{create_directories, Path};
///
/// let p: Path = Path::from("/tmp/fspath/demo/nested");
/// assert!(create_directories(&p));
/// assert!(create_directories(&p)); // second call is a no-op
/// ```
#[must_use]
pub fn create_directories<S: PathStyle>(path: &Path<S>) -> bool {
    let mut built: Path<S> = Path::new();
    for segment in path.segments() {
        if segment.is_empty() {
            // A leading empty segment is the root; keep the prefix
            // absolute. Empty segments further in add nothing.
            if built.is_empty() {
                built = Path::from(S::SEPARATOR.to_string());
            }
            continue;
        }
        if built.is_empty() {
            built = Path::from(segment.as_str());
        } else {
            built.push(segment.as_str());
        }
        if !built.exists() {
            if let Err(err) = fs::create_dir(built.as_str()) {
                if err.kind() != io::ErrorKind::AlreadyExists {
                    log::debug!("create_directories: mkdir {built} failed: {err}");
                    return false;
                }
            }
        }
    }
    built.is_directory()
}

/// Remove the single entry at `path`.
///
/// Directories are removed with the directory-removal primitive (and
/// must be empty); anything else goes through file removal. Returns
/// `false` when the entry cannot be identified or the removal fails.
/// Never raises.
#[must_use]
pub fn remove<S: PathStyle>(path: &Path<S>) -> bool {
    let Ok(metadata) = fs::symlink_metadata(path.as_str()) else {
        return false;
    };
    let outcome = if metadata.is_dir() {
        fs::remove_dir(path.as_str())
    } else {
        fs::remove_file(path.as_str())
    };
    match outcome {
        Ok(()) => true,
        Err(err) => {
            log::debug!("remove: {path} failed: {err}");
            false
        }
    }
}

/// Remove `path` and, if it is a directory, everything below it.
///
/// Non-directories delegate to [`remove`]. For a directory, every
/// entry is visited: sub-directories recurse through `remove_all`,
/// everything else goes through `remove`. The walk halts at the first
/// child that cannot be removed and reports `false` — fail-fast, so a
/// partially deleted tree is never reported as success. Only once all
/// children are gone is the directory itself removed.
///
/// Returns `true` iff `path` no longer exists afterwards. Never
/// raises.
#[must_use]
pub fn remove_all<S: PathStyle>(path: &Path<S>) -> bool {
    if !path.is_directory() {
        return remove(path);
    }

    let Ok(entries) = fs::read_dir(path.as_str()) else {
        return false;
    };
    for entry in entries {
        let Ok(entry) = entry else {
            return false;
        };
        let child = path.join(entry.file_name().to_string_lossy().as_ref());
        if child.is_directory() {
            if !remove_all(&child) {
                log::debug!("remove_all: halting at sub-directory {child}");
                return false;
            }
        } else if !remove(&child) {
            log::debug!("remove_all: halting at entry {child}");
            return false;
        }
    }

    // The directory is empty now; remove it and report what is left
    // on the filesystem.
    let _ = remove(path);
    !exists(path)
}

/// Get the OS-designated temporary directory root.
///
/// On POSIX-like targets this prefers the `TMPDIR` environment
/// variable, falling back to `/tmp` when it is unset or empty; on
/// Windows it queries the platform temp path. No directory is created.
///
/// # Errors
///
/// Reserved for a failing platform temp-path query; the current
/// implementations cannot fail.
///
/// # Examples
///
/// ```
/// use fspath::temp_directory_path;
///
/// let tmp = temp_directory_path().unwrap();
/// assert!(!tmp.is_empty());
/// ```
pub fn temp_directory_path() -> Result<Path> {
    #[cfg(windows)]
    {
        Ok(Path::from(
            std::env::temp_dir().to_string_lossy().into_owned(),
        ))
    }
    #[cfg(not(windows))]
    {
        let tmpdir = std::env::var("TMPDIR")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| String::from("/tmp"));
        Ok(Path::from(tmpdir))
    }
}

/// Create a uniquely named directory under the temp root.
///
/// Equivalent to [`create_temp_directory_in`] with
/// [`temp_directory_path`] as the parent.
///
/// # Errors
///
/// See [`create_temp_directory_in`].
pub fn create_temp_directory(base_name: &str) -> Result<Path> {
    let parent = temp_directory_path()?;
    create_temp_directory_in(base_name, &parent)
}

/// Create a uniquely named directory matching `base_name + "XXXXXX"`
/// under `parent`, where the placeholder becomes a random 6-character
/// suffix.
///
/// `parent` is created first if necessary. The name is generated and
/// the directory created atomically by the OS primitive, so on success
/// the returned path is a freshly created, empty directory; two calls
/// with the same `base_name` yield distinct directories.
///
/// # Errors
///
/// Returns [`Error::CreateParentDirectory`] when `parent` cannot be
/// created, and [`Error::CreateTempDirectory`] wrapping the OS error
/// when no unique directory can be produced.
///
/// # Examples
///
/// ```no_run
/// use fspath::{create_temp_directory_in, temp_directory_path};
///
/// let parent = temp_directory_path()?;
/// let scratch = create_temp_directory_in("mytest", &parent)?;
/// assert!(scratch.is_directory());
/// # Ok::<(), fspath::Error>(())
/// ```
pub fn create_temp_directory_in(base_name: &str, parent: &Path) -> Result<Path> {
    if !create_directories(parent) {
        return Err(Error::CreateParentDirectory {
            path: parent.as_str().to_owned(),
        });
    }
    let created = tempfile::Builder::new()
        .prefix(base_name)
        .rand_bytes(6)
        .tempdir_in(parent.as_str())
        .map_err(|source| Error::CreateTempDirectory {
            template: format!("{base_name}XXXXXX"),
            source,
        })?;
    Ok(Path::from(created.into_path().to_string_lossy().into_owned()))
}

/// Get the process current working directory.
///
/// # Errors
///
/// Returns [`Error::CurrentDirectory`] wrapping the OS error when the
/// underlying query fails.
///
/// # Examples
///
/// ```
/// use fspath::current_path;
///
/// let cwd = current_path().unwrap();
/// assert!(cwd.is_absolute());
/// ```
pub fn current_path() -> Result<Path> {
    let cwd = std::env::current_dir().map_err(|source| Error::CurrentDirectory { source })?;
    Ok(Path::from(cwd.to_string_lossy().into_owned()))
}
