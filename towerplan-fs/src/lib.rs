//! Reading and writing instance and solution files through `cap-std`.
//!
//! Paths are UTF-8 ([`camino`]) and resolved with ambient authority. Every
//! error carries the path it concerns.
#![forbid(unsafe_code)]

use std::io::{self, BufWriter, Write};
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use thiserror::Error;
use towerplan_core::{Instance, ParseError, Solution};

pub mod merge;

pub use merge::{MergeError, MergeOutcome, MergeRecord, MergeReport, merge_record, merge_records};

/// Errors raised while reading or writing towerplan files.
#[derive(Debug, Error)]
pub enum FsError {
    /// The file or its directory could not be opened.
    #[error("failed to open {path}")]
    Open {
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file could not be read as UTF-8 text.
    #[error("failed to read {path}")]
    Read {
        /// Path being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file holds a malformed or invalid instance.
    #[error("invalid instance in {path}")]
    ParseInstance {
        /// Instance file.
        path: Utf8PathBuf,
        /// Parse failure.
        #[source]
        source: ParseError,
    },
    /// The file holds a malformed or invalid solution.
    #[error("invalid solution in {path}")]
    ParseSolution {
        /// Solution file.
        path: Utf8PathBuf,
        /// Parse failure.
        #[source]
        source: ParseError,
    },
    /// The parent directory of an output file could not be created.
    #[error("failed to create parent directory {path}")]
    CreateParent {
        /// Directory that could not be created.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Writing an output file failed.
    #[error("failed to write {path}")]
    Write {
        /// Output file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Parse the instance stored at `path`.
///
/// # Errors
/// Returns [`FsError::Open`] or [`FsError::Read`] when the file cannot be
/// read and [`FsError::ParseInstance`] when its contents are rejected.
pub fn read_instance(path: &Utf8Path) -> Result<Instance, FsError> {
    let text = read_text(path)?;
    Instance::parse(text.lines()).map_err(|source| FsError::ParseInstance {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse the solution stored at `path` against `instance`.
///
/// # Errors
/// Returns [`FsError::Open`] or [`FsError::Read`] when the file cannot be
/// read and [`FsError::ParseSolution`] when its contents are rejected.
pub fn read_solution<'a>(path: &Utf8Path, instance: &'a Instance) -> Result<Solution<'a>, FsError> {
    let text = read_text(path)?;
    Solution::parse(text.lines(), instance).map_err(|source| FsError::ParseSolution {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `solution` to `path` with a `# Penalty:` header, creating parent
/// directories as needed and replacing any existing file.
///
/// # Errors
/// Returns [`FsError::CreateParent`] when a parent directory cannot be
/// created, [`FsError::Open`] when the file cannot be created and
/// [`FsError::Write`] when writing fails.
pub fn write_solution(path: &Utf8Path, solution: &Solution<'_>) -> Result<(), FsError> {
    ensure_parent_dir(path)?;
    let (dir, file_name) = open_dir_and_file(path).map_err(|source| FsError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let file = dir.create(&file_name).map_err(|source| FsError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    solution
        .serialize_with_penalty(&mut out)
        .and_then(|()| out.flush())
        .map_err(|source| FsError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Whether `path` names an existing regular file.
///
/// A missing file or missing parent directory yields `Ok(false)`.
///
/// # Errors
/// Returns [`FsError::Open`] for any other failure to inspect the path.
pub fn file_exists(path: &Utf8Path) -> Result<bool, FsError> {
    let probe = open_dir_and_file(path).and_then(|(dir, name)| dir.metadata(&name));
    match probe {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(FsError::Open {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Open a UTF-8 file path using ambient authority.
fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

fn read_text(path: &Utf8Path) -> Result<String, FsError> {
    let file = open_utf8_file(path).map_err(|source| FsError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    io::read_to_string(file).map_err(|source| FsError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve an ambient directory for the given path and return the directory with the file name.
fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Ensure the parent directory for `path` exists, handling absolute paths safely for cap-std.
fn ensure_parent_dir(path: &Utf8Path) -> Result<(), FsError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }

    let create_error = |source| FsError::CreateParent {
        path: parent.to_path_buf(),
        source,
    };
    let (base_dir, relative) = base_dir_and_relative(parent).map_err(create_error)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base_dir.create_dir_all(&relative).map_err(create_error)
}

/// Split an absolute or relative parent path into an ambient base directory and a relative suffix.
fn base_dir_and_relative(parent: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_parent = parent.as_std_path();

    let (base, relative) = match std_parent.components().next() {
        // Windows absolute path with a drive or UNC prefix.
        Some(Component::Prefix(prefix)) => {
            let prefix_str = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;

            let base = Utf8PathBuf::from(prefix_str).join(std::path::MAIN_SEPARATOR.to_string());
            let relative = std_parent
                .strip_prefix(base.as_std_path())
                .or_else(|_| std_parent.strip_prefix(prefix.as_os_str()))
                .map_err(|_| io::Error::other("failed to strip prefix from parent path"))?
                .to_path_buf();
            (base, relative)
        }
        // Unix-style absolute path.
        Some(Component::RootDir) => {
            let base = Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string());
            let relative = std_parent
                .strip_prefix(base.as_std_path())
                .map_err(|_| io::Error::other("failed to strip root from absolute path"))?
                .to_path_buf();
            (base, relative)
        }
        _ => (Utf8PathBuf::from("."), std_parent.to_path_buf()),
    };

    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    let relative = Utf8PathBuf::from_path_buf(relative)
        .map_err(|_| io::Error::other("non-UTF-8 parent path"))?;

    Ok((dir, relative))
}
