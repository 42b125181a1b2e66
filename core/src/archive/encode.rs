//! src/archive/encode.rs
//!
//! Directory flattening.
//!
//! Design notes:
//! - Depth-first walk in `read_dir` order; nothing is sorted, so entry order
//!   follows the filesystem and may differ across platforms.
//! - Only regular files produce records. Empty directories, symlinks and
//!   special files are not captured.
//! - The whole tree is buffered in memory; the practical limit is RAM.
//! - Any unreadable file aborts the walk, no partial archive is returned.

use std::fs;
use std::io;
use std::path::Path;

use byteorder::{BigEndian, ByteOrder};
use tracing::{debug, info};

use crate::archive::types::{ArchiveEntry, ArchiveError, RECORD_LEN_FIELD};
use crate::types::InputError;

/// Append one record to `out`.
///
/// # Errors
/// - `EntryTooLarge` if the path or content length does not fit in a u32.
pub fn encode_entry(out: &mut Vec<u8>, relative_path: &str, content: &[u8]) -> Result<(), ArchiveError> {
    let path_bytes = relative_path.as_bytes();
    let path_len = field_len(relative_path, path_bytes.len())?;
    let content_len = field_len(relative_path, content.len())?;

    out.reserve(2 * RECORD_LEN_FIELD + path_bytes.len() + content.len());
    put_u32(out, path_len);
    out.extend_from_slice(path_bytes);
    put_u32(out, content_len);
    out.extend_from_slice(content);
    Ok(())
}

/// Encode already collected entries into one archive stream.
pub fn encode_entries(entries: &[ArchiveEntry]) -> Result<Vec<u8>, ArchiveError> {
    let total = entries.iter().map(ArchiveEntry::record_len).sum();
    let mut out = Vec::with_capacity(total);
    for entry in entries {
        encode_entry(&mut out, &entry.relative_path, &entry.content)?;
    }
    Ok(out)
}

/// Flatten every regular file under `root` into one archive stream.
///
/// # Errors
/// - `InvalidInput(NotFound)` / `InvalidInput(NotADirectory)` for a bad root.
/// - `Io` for any failure while listing or reading.
/// - `EntryTooLarge` for a file larger than 4 GiB.
pub fn serialize_directory(root: &Path) -> Result<Vec<u8>, ArchiveError> {
    serialize_directory_counted(root).map(|(stream, _)| stream)
}

/// Same as `serialize_directory`, also returning the number of records written.
pub fn serialize_directory_counted(root: &Path) -> Result<(Vec<u8>, usize), ArchiveError> {
    ensure_directory(root)?;

    let mut out = Vec::new();
    let mut files = 0usize;
    visit_files(root, root, &mut |entry: ArchiveEntry| {
        encode_entry(&mut out, &entry.relative_path, &entry.content)?;
        files += 1;
        Ok(())
    })?;

    info!(root = %root.display(), files, bytes = out.len(), "directory serialized");
    Ok((out, files))
}

/// Collect every regular file under `root` in traversal order.
pub fn collect_entries(root: &Path) -> Result<Vec<ArchiveEntry>, ArchiveError> {
    ensure_directory(root)?;

    let mut entries = Vec::new();
    visit_files(root, root, &mut |entry: ArchiveEntry| {
        entries.push(entry);
        Ok(())
    })?;
    Ok(entries)
}

fn ensure_directory(root: &Path) -> Result<(), ArchiveError> {
    let meta = fs::metadata(root).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ArchiveError::from(InputError::NotFound { path: root.to_path_buf() }),
        _ => ArchiveError::io(root, e),
    })?;
    if !meta.is_dir() {
        return Err(InputError::NotADirectory { path: root.to_path_buf() }.into());
    }
    Ok(())
}

fn visit_files(
    root: &Path,
    dir: &Path,
    on_file: &mut dyn FnMut(ArchiveEntry) -> Result<(), ArchiveError>,
) -> Result<(), ArchiveError> {
    let listing = fs::read_dir(dir).map_err(|e| ArchiveError::io(dir, e))?;

    for item in listing {
        let item = item.map_err(|e| ArchiveError::io(dir, e))?;
        let path = item.path();
        let file_type = item.file_type().map_err(|e| ArchiveError::io(&path, e))?;

        if file_type.is_dir() {
            visit_files(root, &path, on_file)?;
        } else if file_type.is_file() {
            let content = fs::read(&path).map_err(|e| ArchiveError::io(&path, e))?;
            let relative_path = path
                .strip_prefix(root)
                .map_err(|_| ArchiveError::io(&path, io::Error::other("entry outside archive root")))?
                .to_string_lossy()
                .into_owned();
            on_file(ArchiveEntry { relative_path, content })?;
        } else {
            debug!(path = %path.display(), "skipping non-regular file");
        }
    }
    Ok(())
}

fn field_len(path: &str, len: usize) -> Result<u32, ArchiveError> {
    u32::try_from(len).map_err(|_| ArchiveError::EntryTooLarge { path: path.to_owned(), len })
}

fn put_u32(out: &mut Vec<u8>, v: u32) {
    let mut buf = [0u8; RECORD_LEN_FIELD];
    BigEndian::write_u32(&mut buf, v);
    out.extend_from_slice(&buf);
}
