//! Streaming file checksums.
//!
//! Files are read in fixed-size chunks so memory use stays bounded no matter
//! how large the input is.

use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Compute the digest of the regular file at `path` as lowercase hex.
///
/// Anything other than a regular file (missing path, directory, symlink,
/// device) is rejected with [`Error::InvalidPath`] before the file is opened.
pub fn compute(path: &Path, algorithm: Algorithm) -> Result<String> {
    let is_regular = fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_file())
        .unwrap_or(false);
    if !is_regular {
        return Err(Error::InvalidPath(path.to_path_buf()));
    }

    let io_err = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let (digest, bytes) = hash_reader(file, algorithm).map_err(io_err)?;
    tracing::debug!(%algorithm, path = %path.display(), bytes, "computed checksum");
    Ok(digest)
}

/// Hash everything `reader` yields. Returns the hex digest and the byte count.
pub fn hash_reader<R: Read>(mut reader: R, algorithm: Algorithm) -> io::Result<(String, u64)> {
    let mut hasher = algorithm.hasher();
    let mut buf = vec![0u8; BUF_SIZE];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
        total += n as u64;
    }
    Ok((hex::encode(hasher.finalize()), total))
}
