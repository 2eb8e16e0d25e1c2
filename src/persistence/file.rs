use std::{
    fs::{self, File, OpenOptions},
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use uuid::Uuid;

use crate::model::person::Person;

use super::{PersistenceError, PersistenceResult};

const INDENT: &[u8] = b"\t";

/// JSON array of people, one tab per nesting level
pub fn serialize_dataset(people: &[Person]) -> PersistenceResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));

    people
        .serialize(&mut serializer)
        .map_err(PersistenceError::Serialize)?;

    Ok(buffer)
}

/// Where a dataset is written: the absolute form of the path as given, and the
/// file actually written once symlinks are followed
#[derive(Debug, PartialEq, Eq)]
pub struct Destination {
    pub absolute: PathBuf,
    pub target: PathBuf,
}

impl Destination {
    pub fn resolve(path: &Path) -> PersistenceResult<Self> {
        if path.file_name().is_none() {
            return Err(PersistenceError::InvalidPath(path.to_path_buf()));
        }

        let absolute =
            std::path::absolute(path).map_err(|source| PersistenceError::ResolvePath {
                path: path.to_path_buf(),
                source,
            })?;

        // Missing destinations (and dangling links) are created at the path as given
        let target = match fs::canonicalize(path) {
            Ok(target) => target,
            Err(e) => {
                log::debug!("Writing {} as given: {}", path.display(), e);
                path.to_path_buf()
            }
        };

        Ok(Destination { absolute, target })
    }
}

/// Writes the dataset to `path` and returns the absolute path written.
///
/// Regular files are replaced through a temporary sibling that is synced and then
/// renamed over the destination, so the destination is either left untouched or holds
/// the complete dataset. Symlinks are written through. Devices and other special files
/// are written in place.
pub fn write_dataset(path: &Path, people: &[Person]) -> PersistenceResult<PathBuf> {
    let destination = Destination::resolve(path)?;

    let bytes = serialize_dataset(people)?;

    match fs::metadata(&destination.target) {
        Ok(metadata) if !metadata.is_file() && !metadata.is_dir() => {
            write_in_place(&destination.target, &bytes, false)?
        }
        _ => replace_file(&destination.target, &bytes)?,
    }

    log::debug!(
        "Wrote {} bytes to {}",
        bytes.len(),
        destination.target.display()
    );

    Ok(destination.absolute)
}

fn replace_file(target: &Path, bytes: &[u8]) -> PersistenceResult<()> {
    let file_name = target
        .file_name()
        .ok_or_else(|| PersistenceError::InvalidPath(target.to_path_buf()))?;

    let temporary_path = directory_of(target).join(format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        Uuid::new_v4()
    ));

    match write_temporary(&temporary_path, bytes) {
        Ok(()) => {}
        // The directory is read-only but the file itself may still be writable
        Err(PersistenceError::CreateTemporaryFile { ref source, .. })
            if source.kind() == io::ErrorKind::PermissionDenied && target.is_file() =>
        {
            log::debug!(
                "Cannot create a temporary file next to {}, writing in place",
                target.display()
            );
            return write_in_place(target, bytes, true);
        }
        Err(e @ PersistenceError::CreateTemporaryFile { .. }) => return Err(e),
        Err(e) => {
            remove_temporary(&temporary_path);
            return Err(e);
        }
    }

    if let Err(source) = fs::rename(&temporary_path, target) {
        remove_temporary(&temporary_path);
        return Err(PersistenceError::Persist {
            path: target.to_path_buf(),
            source,
        });
    }

    Ok(())
}

// Special files such as /dev/null do not support fsync
fn write_in_place(target: &Path, bytes: &[u8], sync: bool) -> PersistenceResult<()> {
    let write_error = |source: io::Error| PersistenceError::Write {
        path: target.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(target)
        .map_err(write_error)?;

    file.write_all(bytes).map_err(write_error)?;

    if sync {
        file.sync_all().map_err(write_error)?;
    }

    Ok(())
}

pub fn read_dataset(path: &Path) -> PersistenceResult<Vec<Person>> {
    let read_error = |source: io::Error| PersistenceError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(read_error)?;

    let mut contents = Vec::new();
    file.read_to_end(&mut contents).map_err(read_error)?;

    serde_json::from_slice(&contents).map_err(|source| PersistenceError::Deserialize {
        path: path.to_path_buf(),
        source,
    })
}

// The handle is closed when it goes out of scope, on success and failure alike
fn write_temporary(temporary_path: &Path, bytes: &[u8]) -> PersistenceResult<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(temporary_path)
        .map_err(|source| PersistenceError::CreateTemporaryFile {
            path: temporary_path.to_path_buf(),
            source,
        })?;

    let write_error = |source: io::Error| PersistenceError::Write {
        path: temporary_path.to_path_buf(),
        source,
    };

    file.write_all(bytes).map_err(write_error)?;
    file.sync_all().map_err(write_error)?;

    Ok(())
}

fn remove_temporary(temporary_path: &Path) {
    match fs::remove_file(temporary_path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => log::warn!(
            "Unable to remove temporary file {}: {}",
            temporary_path.display(),
            e
        ),
    }
}

fn directory_of(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
