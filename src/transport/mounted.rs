use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use walkdir::WalkDir;

use crate::error::{ProbeError, Result};

use super::{Chunk, DirEntry, ObjectStat, ShareTarget, Transport, normalize};

/// Reaches a share through its local mount point.
///
/// Share `//HOST/SHARE` is expected at `<mount_root>/<HOST>/<SHARE>`.
/// Authentication is handled by whoever mounted the share.
#[derive(Debug, Clone)]
pub struct MountedShareTransport {
    root: PathBuf,
    target: ShareTarget,
}

/// Open file on a mounted share.
#[derive(Debug)]
pub struct MountedFile {
    path: String,
    file: File,
}

impl MountedShareTransport {
    #[must_use]
    pub fn new(mount_root: &Path, target: ShareTarget) -> Self {
        let root = push_segments(mount_root.to_path_buf(), &target.host);
        tracing::debug!(
            root = %root.display(),
            principal = %target.principal(),
            "using mounted share"
        );
        Self { root, target }
    }

    #[must_use]
    pub const fn target(&self) -> &ShareTarget {
        &self.target
    }

    fn resolve(&self, path: &str) -> PathBuf {
        push_segments(self.root.clone(), path)
    }
}

/// Append the segments of a share path to `base`, dropping `..` so the
/// result never leaves `base`.
fn push_segments(base: PathBuf, path: &str) -> PathBuf {
    normalize(path)
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != "..")
        .fold(base, |acc, segment| acc.join(segment))
}

fn epoch_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_secs()).map_or(i64::MIN, |s| -s),
    }
}

impl Transport for MountedShareTransport {
    type Handle = MountedFile;

    fn stat(&self, path: &str) -> Result<ObjectStat> {
        tracing::debug!(path, "stat");
        let metadata =
            std::fs::metadata(self.resolve(path)).map_err(|e| ProbeError::from_io("stat", path, e))?;
        let modified = metadata
            .modified()
            .map_err(|e| ProbeError::from_io("stat", path, e))?;
        let accessed = metadata.accessed().unwrap_or(modified);

        Ok(ObjectStat {
            size_bytes: metadata.len(),
            accessed_epoch: epoch_seconds(accessed),
            modified_epoch: epoch_seconds(modified),
            is_dir: metadata.is_dir(),
        })
    }

    fn open_for_read(&self, path: &str) -> Result<MountedFile> {
        tracing::debug!(path, "open");
        let file = File::open(self.resolve(path)).map_err(|e| ProbeError::from_io("open", path, e))?;
        Ok(MountedFile {
            path: path.to_string(),
            file,
        })
    }

    fn read_chunk(&self, handle: &mut MountedFile, max_bytes: usize) -> Result<Chunk> {
        let mut buf = vec![0; max_bytes];
        let read = loop {
            match handle.file.read(&mut buf) {
                Ok(n) => break n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(ProbeError::from_io("read", &handle.path, e)),
            }
        };
        if read == 0 {
            return Ok(Chunk::EndOfStream);
        }
        buf.truncate(read);
        Ok(Chunk::Data(buf))
    }

    fn close(&self, handle: MountedFile) -> Result<()> {
        tracing::trace!(path = %handle.path, "close");
        drop(handle.file);
        Ok(())
    }

    fn list_directory(&self, path: &str) -> Result<Vec<DirEntry>> {
        tracing::debug!(path, "list");
        let local = self.resolve(path);
        let metadata = std::fs::metadata(&local).map_err(|e| ProbeError::from_io("list", path, e))?;
        if !metadata.is_dir() {
            return Err(ProbeError::Transport {
                operation: "list",
                path: path.to_string(),
                source: std::io::Error::other("not a directory"),
            });
        }

        WalkDir::new(&local)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| {
                let entry = entry.map_err(|e| ProbeError::from_io("list", path, e.into()))?;
                Ok(DirEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    is_dir: entry.file_type().is_dir(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mounted_tests.rs"]
mod tests;
