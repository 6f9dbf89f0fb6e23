//! Local-mode lookup: the resource must already be on disk.

use std::fs;
use std::path::Path;

use crate::error::ResolveError;

/// Succeeds iff a filesystem entry exists at `target`; the stat error is returned untouched otherwise.
pub(crate) fn verify_present(target: &Path) -> Result<(), ResolveError> {
    fs::metadata(target)
        .map(|_| ())
        .map_err(|source| ResolveError::ResourceNotFound {
            path: target.to_path_buf(),
            source,
        })
}
