//! Mirror fetched content onto disk at the resource's logical path.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{self, Path};

use crate::error::ResolveError;

/// Replace whatever sits at `target` with a file containing `content`.
///
/// Removes an existing file or directory tree at `target`, recreates the
/// parent directory chain, then writes `content` in full. The file handle is
/// dropped on every path out of this function. A failed write leaves the
/// partial file behind. A target without a file name (empty, trailing
/// separator, `.` or `..`) is rejected before anything is removed.
pub(crate) fn materialize(target: &Path, content: &[u8]) -> Result<(), ResolveError> {
    let local_write = |source: io::Error| ResolveError::LocalWrite {
        path: target.to_path_buf(),
        source,
    };

    if !names_a_file(target) {
        return Err(local_write(io::Error::new(
            io::ErrorKind::InvalidInput,
            "resource path does not name a file",
        )));
    }

    remove_existing(target).map_err(local_write)?;

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(local_write)?;
        }
    }

    let mut file = File::create(target).map_err(local_write)?;
    file.write_all(content).map_err(local_write)?;
    file.flush().map_err(local_write)?;
    Ok(())
}

/// True if the last segment of `target`, as written, is a real name.
///
/// Checked on the raw string: `Path::components` folds `a/.` and `a/` into
/// `a`, which would point removal at the parent directory.
fn names_a_file(target: &Path) -> bool {
    let raw = target.to_string_lossy();
    let leaf = raw.rsplit(path::is_separator).next().unwrap_or("");
    !leaf.is_empty() && leaf != "." && leaf != ".."
}

/// Remove a file, symlink or directory tree at `path`. Absence is not an error.
fn remove_existing(path: &Path) -> io::Result<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    if meta.is_dir() {
        tracing::debug!("removing stale directory {}", path.display());
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
