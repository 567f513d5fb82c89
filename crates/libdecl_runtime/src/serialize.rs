//! Project snapshots in `MessagePack` format.
//!
//! A snapshot holds the whole project (targets, aliases, scopes, definitions,
//! and policies) plus any diagnostics that were still pending when it was
//! taken.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use libdecl_foundation::{Diagnostic, Error, ErrorKind, Result};
use libdecl_project::Project;
use serde::{Deserialize, Serialize};

/// Snapshot format version written by this build.
pub const FORMAT_VERSION: u32 = 1;

/// A saved project.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version.
    pub version: u32,
    /// The project state.
    pub project: Project,
    /// Diagnostics not yet reported when the snapshot was taken.
    pub diagnostics: Vec<Diagnostic>,
}

impl Snapshot {
    /// Creates a snapshot of the current format version.
    #[must_use]
    pub fn new(project: Project, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            version: FORMAT_VERSION,
            project,
            diagnostics,
        }
    }
}

/// Serializes a snapshot to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(snapshot: &Snapshot) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(snapshot)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Deserializes a snapshot from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails, the snapshot was written by an
/// incompatible format version, or the decoded project is inconsistent.
pub fn from_bytes(bytes: &[u8]) -> Result<Snapshot> {
    let snapshot: Snapshot = rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))?;
    if snapshot.version != FORMAT_VERSION {
        return Err(Error::new(ErrorKind::Serialization(format!(
            "unsupported snapshot version {} (expected {FORMAT_VERSION})",
            snapshot.version
        ))));
    }
    snapshot.project.validate().map_err(|message| {
        Error::new(ErrorKind::Serialization(format!(
            "corrupt snapshot: {message}"
        )))
    })?;
    Ok(snapshot)
}

/// Saves a snapshot to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(snapshot: &Snapshot, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create file '{}': {e}", path.display())))?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(snapshot)?;

    writer
        .write_all(&bytes)
        .map_err(|e| Error::io(format!("failed to write to file '{}': {e}", path.display())))?;
    writer
        .flush()
        .map_err(|e| Error::io(format!("failed to flush file '{}': {e}", path.display())))?;

    Ok(())
}

/// Loads a snapshot from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Snapshot> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open file '{}': {e}", path.display())))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))?;

    from_bytes(&bytes)
}
