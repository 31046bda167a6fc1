use super::{DirEntry, FileSystem, FileType};
use anyhow::{anyhow, Result};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct MockEntry {
    pub content: Option<Vec<u8>>,
    pub file_type: FileType,
}

/// In-memory file tree. Records every write so tests can assert on side effects.
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, MockEntry>>,
    unreadable: RwLock<HashSet<PathBuf>>,
    read_only: RwLock<HashSet<PathBuf>>,
    writes: RwLock<Vec<PathBuf>>,
    root: PathBuf,
}

impl MockFileSystem {
    /// Relative paths given to the `add_*`/`deny_*` helpers resolve under `/mock`
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            unreadable: RwLock::new(HashSet::new()),
            read_only: RwLock::new(HashSet::new()),
            writes: RwLock::new(Vec::new()),
            root: PathBuf::from("/mock"),
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.add_bytes(path, content.as_bytes());
    }

    pub fn add_bytes(&self, path: impl AsRef<Path>, content: &[u8]) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut files, parent);
        }

        files.insert(
            path,
            MockEntry {
                content: Some(content.to_vec()),
                file_type: FileType::File,
            },
        );
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();

        Self::ensure_parents(&mut files, &path);
    }

    /// Make reads of `path` fail as if permission were denied
    pub fn deny_read(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        self.unreadable.write().unwrap().insert(path);
    }

    /// Make writes of any file directly inside `dir` fail
    pub fn deny_write(&self, dir: impl AsRef<Path>) {
        let dir = self.normalize_path(dir.as_ref());
        self.read_only.write().unwrap().insert(dir);
    }

    /// Paths written through [`FileSystem::write`], in order
    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.writes.read().unwrap().clone()
    }

    pub fn file_content(&self, path: impl AsRef<Path>) -> Option<String> {
        let path = self.normalize_path(path.as_ref());
        self.files
            .read()
            .unwrap()
            .get(&path)
            .and_then(|e| e.content.as_ref())
            .map(|c| String::from_utf8_lossy(c).into_owned())
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            files.entry(current.clone()).or_insert(MockEntry {
                content: None,
                file_type: FileType::Directory,
            });
        }
    }

    fn file_type_of(&self, path: &Path) -> Option<FileType> {
        let path = self.normalize_path(path);
        self.files.read().unwrap().get(&path).map(|e| e.file_type)
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.file_type_of(path).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.file_type_of(path) == Some(FileType::Directory)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.file_type_of(path) == Some(FileType::File)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let path = self.normalize_path(path);
        if self.unreadable.read().unwrap().contains(&path) {
            return Err(anyhow!("Permission denied: {:?}", path));
        }

        let files = self.files.read().unwrap();
        let entry = files
            .get(&path)
            .ok_or_else(|| anyhow!("File not found: {:?}", path))?;

        entry
            .content
            .clone()
            .ok_or_else(|| anyhow!("Not a file: {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let path = self.normalize_path(path);
        let files = self.files.read().unwrap();

        match files.get(&path) {
            Some(entry) if entry.file_type == FileType::Directory => {}
            Some(_) => return Err(anyhow!("Not a directory: {:?}", path)),
            None => return Err(anyhow!("Directory not found: {:?}", path)),
        }

        let entries = files
            .iter()
            .filter(|(file_path, _)| file_path.parent() == Some(path.as_path()))
            .map(|(file_path, entry)| DirEntry {
                path: file_path.clone(),
                name: file_path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
                file_type: entry.file_type,
            })
            .collect();

        Ok(entries)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let path = self.normalize_path(path);
        let parent = path
            .parent()
            .ok_or_else(|| anyhow!("No parent directory for {:?}", path))?;

        if self.read_only.read().unwrap().contains(parent) {
            return Err(anyhow!("Permission denied: {:?}", path));
        }
        if !self.is_dir(parent) {
            return Err(anyhow!("Directory not found: {:?}", parent));
        }

        self.files.write().unwrap().insert(
            path.clone(),
            MockEntry {
                content: Some(contents.as_bytes().to_vec()),
                file_type: FileType::File,
            },
        );
        self.writes.write().unwrap().push(path);
        Ok(())
    }
}
