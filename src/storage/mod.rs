//! Storage layer for todofile data.
//!
//! The entire collection lives in one JSON file: an array of todo records,
//! pretty-printed on every write. Reads parse the whole file, writes replace
//! it in full. There is no locking and no partial-write protection; a crash
//! mid-write can truncate the file (accepted limitation).

use crate::models::Todo;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File adapter for the todo collection.
///
/// Holds only the backing file path; every operation opens the file fresh,
/// so the adapter itself is freely shareable across requests.
#[derive(Debug, Clone)]
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    /// Create an adapter for the given backing file. Does not touch the
    /// filesystem; call [`ensure_initialized`](Self::ensure_initialized)
    /// before serving requests.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the backing file containing an empty array if it is absent.
    ///
    /// Must run once at startup, before the listener accepts connections.
    /// A failure here is fatal to process start.
    pub fn ensure_initialized(&self) -> Result<()> {
        if !self.path.exists() {
            fs::write(&self.path, "[]")?;
        }
        Ok(())
    }

    /// Read the full file and parse it as a JSON array of todos.
    ///
    /// A missing, unreadable, or malformed file is an error; callers surface
    /// it as a server error with no partial recovery.
    pub fn load_all(&self) -> Result<Vec<Todo>> {
        let contents = fs::read_to_string(&self.path)?;
        let todos = serde_json::from_str(&contents)?;
        Ok(todos)
    }

    /// Serialize the given collection pretty-printed and overwrite the
    /// backing file in full.
    pub fn save_all(&self, todos: &[Todo]) -> Result<()> {
        let contents = serde_json::to_string_pretty(todos)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, TodoStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = TodoStore::new(temp_dir.path().join("todos.json"));
        store.ensure_initialized().unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_ensure_initialized_creates_empty_array() {
        let (_temp_dir, store) = create_test_store();

        assert!(store.exists());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_ensure_initialized_preserves_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todos.json");
        fs::write(
            &path,
            r#"[{"id": 1, "title": "Keep me", "createdAt": "2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();

        let store = TodoStore::new(&path);
        store.ensure_initialized().unwrap();

        let todos = store.load_all().unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Keep me");
    }

    #[test]
    fn test_ensure_initialized_fails_without_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = TodoStore::new(temp_dir.path().join("missing").join("todos.json"));

        assert!(store.ensure_initialized().is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_temp_dir, store) = create_test_store();

        let todos = vec![
            Todo::new(1, "First".to_string(), "details".to_string()),
            Todo::new(2, "Second".to_string(), String::new()),
        ];
        store.save_all(&todos).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, todos);
    }

    #[test]
    fn test_save_all_pretty_prints() {
        let (_temp_dir, store) = create_test_store();

        let todos = vec![Todo::new(1, "First".to_string(), String::new())];
        store.save_all(&todos).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains('\n'));
        assert!(contents.contains("\"createdAt\""));
    }

    #[test]
    fn test_load_all_missing_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let store = TodoStore::new(temp_dir.path().join("absent.json"));

        assert!(store.load_all().is_err());
    }

    #[test]
    fn test_load_all_malformed_json_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("todos.json");
        fs::write(&path, "not json at all").unwrap();

        let store = TodoStore::new(&path);
        assert!(store.load_all().is_err());
    }
}
