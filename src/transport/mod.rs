//! Remote file access as consumed by the checks.
//!
//! Every operation is blocking and fallible. A missing object surfaces as
//! [`ProbeError::NotFound`](crate::ProbeError::NotFound), anything else as
//! [`ProbeError::Transport`](crate::ProbeError::Transport).

mod mounted;
mod path;
mod target;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use mounted::{MountedFile, MountedShareTransport};
pub use path::{join, normalize, split_unc};
pub use target::{Credentials, ShareTarget};

use crate::error::Result;

/// Snapshot of one object's attributes at one instant.
///
/// Only existing objects have a stat; a missing one is reported by
/// [`Transport::stat`] as `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObjectStat {
    pub size_bytes: u64,
    pub accessed_epoch: i64,
    pub modified_epoch: i64,
    /// Set when the object, after following links, is a directory.
    pub is_dir: bool,
}

/// One name returned by a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Result of a single chunked read.
///
/// `Data` may be empty without meaning the stream is exhausted; only
/// `EndOfStream` terminates a read loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    Data(Vec<u8>),
    EndOfStream,
}

/// Capability to reach objects on a share.
///
/// Paths are share-relative and `/`-separated (`share/dir/name`).
pub trait Transport {
    type Handle;

    /// Fetch the attributes of one object.
    ///
    /// # Errors
    /// Returns `NotFound` if the object does not exist, `Transport` otherwise.
    fn stat(&self, path: &str) -> Result<ObjectStat>;

    /// Open an object for sequential reading.
    ///
    /// # Errors
    /// Returns an error if the object cannot be opened.
    fn open_for_read(&self, path: &str) -> Result<Self::Handle>;

    /// Read up to `max_bytes` from an open handle.
    ///
    /// # Errors
    /// Returns an error if the read fails.
    fn read_chunk(&self, handle: &mut Self::Handle, max_bytes: usize) -> Result<Chunk>;

    /// Release an open handle.
    ///
    /// # Errors
    /// Returns an error if the transport reports a failure on close.
    fn close(&self, handle: Self::Handle) -> Result<()>;

    /// List the entries of a directory, excluding `.` and `..`.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be opened or read.
    fn list_directory(&self, path: &str) -> Result<Vec<DirEntry>>;
}
