// src/fs/mock.rs

use super::FileSystem;
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(Vec<u8>),
    Dir,
}

/// In-memory filesystem for runner tests.
///
/// Clones share state, so a test can keep a handle while the runner owns
/// another one.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let mut files = HashMap::new();
        files.insert(PathBuf::from("/"), MockEntry::Dir);
        files.insert(PathBuf::from("."), MockEntry::Dir);

        Self {
            files: Arc::new(Mutex::new(files)),
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref().to_path_buf();
        let mut files = self.files.lock().unwrap();
        if let Some(parent) = path.parent() {
            Self::ensure_dirs(&mut files, parent);
        }
        files.insert(path, MockEntry::File(content.into()));
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut files = self.files.lock().unwrap();
        Self::ensure_dirs(&mut files, path.as_ref());
    }

    /// Contents of a file, if present.
    pub fn read(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        let files = self.files.lock().unwrap();
        match files.get(path.as_ref()) {
            Some(MockEntry::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    fn ensure_dirs(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        // Walk up until an existing entry; empty parents resolve to ".".
        let mut current = Some(path);
        while let Some(dir) = current {
            let dir = if dir.as_os_str().is_empty() {
                Path::new(".")
            } else {
                dir
            };
            if files.contains_key(dir) {
                break;
            }
            files.insert(dir.to_path_buf(), MockEntry::Dir);
            current = dir.parent();
        }
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        matches!(files.get(path), Some(MockEntry::File(_)))
    }

    fn is_dir(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        matches!(files.get(path), Some(MockEntry::Dir))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut files = self.files.lock().unwrap();
        if let Some(MockEntry::File(_)) = files.get(path) {
            return Err(anyhow!("Not a directory: {:?}", path));
        }
        Self::ensure_dirs(&mut files, path);
        Ok(())
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.add_file(path, contents);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        let mut files = self.files.lock().unwrap();
        match files.get(path) {
            Some(MockEntry::File(_)) => {
                files.remove(path);
                Ok(())
            }
            Some(MockEntry::Dir) => Err(anyhow!("Is a directory: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }
}
