//! In-memory transport shared by checker, scanner and probe tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::BTreeMap;

use crate::error::{ProbeError, Result};

use super::{Chunk, DirEntry, ObjectStat, Transport, normalize};

#[derive(Debug, Clone)]
struct MemoryObject {
    stat: ObjectStat,
    /// Chunks handed out verbatim, ignoring the requested size.
    chunks: Option<Vec<Vec<u8>>>,
    content: Vec<u8>,
}

/// Handle into a [`MemoryTransport`] object.
#[derive(Debug)]
pub struct MemoryHandle {
    path: String,
    offset: usize,
    chunk_index: usize,
}

#[derive(Debug, Default)]
pub struct MemoryTransport {
    objects: BTreeMap<String, MemoryObject>,
    directories: Vec<String>,
    /// Directories reached through a link: listed as plain entries, stat'ed as directories.
    linked_dirs: Vec<String>,
    failing_lists: Vec<String>,
    pub reads: Cell<usize>,
    pub opens: Cell<usize>,
}

pub fn file_stat(size_bytes: u64, modified_epoch: i64) -> ObjectStat {
    ObjectStat {
        size_bytes,
        accessed_epoch: modified_epoch,
        modified_epoch,
        is_dir: false,
    }
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(mut self, path: &str) -> Self {
        self.directories.push(normalize(path));
        self
    }

    pub fn with_file(mut self, path: &str, stat: ObjectStat, content: &[u8]) -> Self {
        self.objects.insert(
            normalize(path),
            MemoryObject {
                stat,
                chunks: None,
                content: content.to_vec(),
            },
        );
        self
    }

    pub fn with_chunked_file(mut self, path: &str, chunks: Vec<Vec<u8>>) -> Self {
        self.objects.insert(
            normalize(path),
            MemoryObject {
                stat: file_stat(chunks.iter().map(|c| c.len() as u64).sum(), 0),
                chunks: Some(chunks),
                content: Vec::new(),
            },
        );
        self
    }

    pub fn with_dir_link(mut self, path: &str) -> Self {
        self.linked_dirs.push(normalize(path));
        self
    }

    pub fn with_failing_list(mut self, path: &str) -> Self {
        self.failing_lists.push(normalize(path));
        self.with_dir(path)
    }

    fn not_found(path: &str) -> ProbeError {
        ProbeError::from_io(
            "stat",
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such object"),
        )
    }

    fn parent_of(path: &str) -> &str {
        path.rsplit_once('/').map_or("", |(parent, _)| parent)
    }
}

impl Transport for MemoryTransport {
    type Handle = MemoryHandle;

    fn stat(&self, path: &str) -> Result<ObjectStat> {
        let path = normalize(path);
        if self.directories.contains(&path) || self.linked_dirs.contains(&path) {
            return Ok(ObjectStat {
                is_dir: true,
                ..ObjectStat::default()
            });
        }
        self.objects
            .get(&path)
            .map(|object| object.stat)
            .ok_or_else(|| Self::not_found(&path))
    }

    fn open_for_read(&self, path: &str) -> Result<MemoryHandle> {
        let path = normalize(path);
        if !self.objects.contains_key(&path) {
            return Err(Self::not_found(&path));
        }
        self.opens.set(self.opens.get() + 1);
        Ok(MemoryHandle {
            path,
            offset: 0,
            chunk_index: 0,
        })
    }

    fn read_chunk(&self, handle: &mut MemoryHandle, max_bytes: usize) -> Result<Chunk> {
        self.reads.set(self.reads.get() + 1);
        let object = self
            .objects
            .get(&handle.path)
            .ok_or_else(|| Self::not_found(&handle.path))?;

        if let Some(chunks) = &object.chunks {
            let chunk = chunks.get(handle.chunk_index).cloned();
            handle.chunk_index += 1;
            return Ok(chunk.map_or(Chunk::EndOfStream, Chunk::Data));
        }

        if handle.offset >= object.content.len() {
            return Ok(Chunk::EndOfStream);
        }
        let end = (handle.offset + max_bytes).min(object.content.len());
        let bytes = object.content[handle.offset..end].to_vec();
        handle.offset = end;
        Ok(Chunk::Data(bytes))
    }

    fn close(&self, _handle: MemoryHandle) -> Result<()> {
        Ok(())
    }

    fn list_directory(&self, path: &str) -> Result<Vec<DirEntry>> {
        let path = normalize(path);
        if self.failing_lists.contains(&path) {
            return Err(ProbeError::from_io(
                "list",
                &path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
            ));
        }
        if !self.directories.contains(&path) {
            return Err(Self::not_found(&path));
        }

        let files = self
            .objects
            .keys()
            .filter(|key| Self::parent_of(key) == path)
            .map(|key| DirEntry {
                name: key.rsplit('/').next().unwrap_or(key).to_string(),
                is_dir: false,
            });
        let dirs = self
            .directories
            .iter()
            .filter(|dir| Self::parent_of(dir) == path && **dir != path)
            .map(|dir| DirEntry {
                name: dir.rsplit('/').next().unwrap_or(dir).to_string(),
                is_dir: true,
            });
        let links = self
            .linked_dirs
            .iter()
            .filter(|link| Self::parent_of(link) == path)
            .map(|link| DirEntry {
                name: link.rsplit('/').next().unwrap_or(link).to_string(),
                is_dir: false,
            });
        Ok(files.chain(dirs).chain(links).collect())
    }
}

