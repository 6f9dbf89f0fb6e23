//! SHA-256 digests of materialized resources, for reporting which content
//! ended up on disk.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const BUF_SIZE: usize = 64 * 1024;

/// Digest and size of a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDigest {
    pub path: PathBuf,
    /// Lowercase hex SHA-256.
    pub sha256: String,
    pub bytes: u64,
}

/// Hash the file at `path`, reading in chunks.
pub fn digest_file(path: &Path) -> Result<ResourceDigest> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    let mut bytes = 0u64;
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
        bytes += n as u64;
    }
    Ok(ResourceDigest {
        path: path.to_path_buf(),
        sha256: hex::encode(hasher.finalize()),
        bytes,
    })
}
