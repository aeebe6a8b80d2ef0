#![allow(dead_code)]

use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

pub const HOST: &str = "fs01";

/// Creates an `assert_cmd` Command for the share-probe binary.
#[macro_export]
macro_rules! share_probe {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("share-probe"))
    };
}

/// A temporary mount root holding `HOST/<share>/...` fixtures.
pub struct TestShare {
    pub dir: TempDir,
}

impl TestShare {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir_all(dir.path().join(HOST)).expect("Failed to create host directory");
        Self { dir }
    }

    /// Mount root to pass as `--mount-root`.
    pub fn mount_root(&self) -> &Path {
        self.dir.path()
    }

    fn local(&self, share_path: &str) -> PathBuf {
        self.dir.path().join(HOST).join(share_path)
    }

    /// Creates a file at a share-relative path.
    pub fn create_file(&self, share_path: &str, content: &[u8]) {
        let path = self.local(share_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a file of `size` bytes.
    pub fn create_sized_file(&self, share_path: &str, size: usize) {
        self.create_file(share_path, &vec![b'x'; size]);
    }

    pub fn create_dir(&self, share_path: &str) {
        fs::create_dir_all(self.local(share_path)).expect("Failed to create directory");
    }

    /// Backdates modification and access time by `seconds`.
    pub fn set_age(&self, share_path: &str, seconds: u64) {
        let when = SystemTime::now() - Duration::from_secs(seconds);
        let file = File::options()
            .write(true)
            .open(self.local(share_path))
            .expect("Failed to open file");
        file.set_times(FileTimes::new().set_modified(when).set_accessed(when))
            .expect("Failed to set file times");
    }
}

impl Default for TestShare {
    fn default() -> Self {
        Self::new()
    }
}
