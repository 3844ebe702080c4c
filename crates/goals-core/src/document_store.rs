// document_store.rs — DocumentStore: JSON file persistence for goal documents.
//
// The collection lives in a single file, `<store_dir>/goals.json`, holding an
// array of `{_id, text}` documents in insertion order. Every write rewrites
// the whole file through a temp file + rename so a crash never leaves a
// half-written collection behind.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::GoalError;
use crate::goal::{GoalDocument, GoalId};
use crate::store::GoalStore;

const COLLECTION_FILE: &str = "goals.json";

/// File-backed goal collection.
pub struct DocumentStore {
    store_dir: PathBuf,
    // Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
    closed: AtomicBool,
}

impl DocumentStore {
    /// Open a store backed by the given directory.
    /// Creates the directory if it doesn't exist.
    pub async fn open(store_dir: impl AsRef<Path>) -> Result<Self, GoalError> {
        let store_dir = store_dir.as_ref().to_path_buf();
        fs::create_dir_all(&store_dir)
            .await
            .map_err(|source| GoalError::IoError {
                path: store_dir.display().to_string(),
                source,
            })?;
        Ok(Self {
            store_dir,
            write_lock: Mutex::new(()),
            closed: AtomicBool::new(false),
        })
    }

    /// Path to the collection file.
    pub fn collection_path(&self) -> PathBuf {
        self.store_dir.join(COLLECTION_FILE)
    }

    fn ensure_open(&self) -> Result<(), GoalError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(GoalError::Closed);
        }
        Ok(())
    }

    async fn read_collection(&self) -> Result<Vec<GoalDocument>, GoalError> {
        let path = self.collection_path();
        let json = match fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(GoalError::IoError {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        if json.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&json)?)
    }

    async fn write_collection(&self, docs: &[GoalDocument]) -> Result<(), GoalError> {
        let path = self.collection_path();
        let tmp = self.store_dir.join(format!("{}.tmp", COLLECTION_FILE));
        let json = serde_json::to_string_pretty(docs)?;
        fs::write(&tmp, json)
            .await
            .map_err(|source| GoalError::IoError {
                path: tmp.display().to_string(),
                source,
            })?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|source| GoalError::IoError {
                path: path.display().to_string(),
                source,
            })?;
        Ok(())
    }
}

#[async_trait]
impl GoalStore for DocumentStore {
    async fn find_all(&self) -> Result<Vec<GoalDocument>, GoalError> {
        self.ensure_open()?;
        let _guard = self.write_lock.lock().await;
        self.read_collection().await
    }

    async fn insert(&self, text: &str) -> Result<GoalDocument, GoalError> {
        self.ensure_open()?;
        let _guard = self.write_lock.lock().await;
        let mut docs = self.read_collection().await?;
        let doc = GoalDocument {
            id: GoalId::generate(),
            text: text.to_string(),
        };
        docs.push(doc.clone());
        self.write_collection(&docs).await?;
        Ok(doc)
    }

    async fn delete_one(&self, id: &GoalId) -> Result<u64, GoalError> {
        self.ensure_open()?;
        let _guard = self.write_lock.lock().await;
        let mut docs = self.read_collection().await?;
        let Some(idx) = docs.iter().position(|d| &d.id == id) else {
            return Ok(0);
        };
        docs.remove(idx);
        self.write_collection(&docs).await?;
        Ok(1)
    }

    async fn close(&self) -> Result<(), GoalError> {
        // Wait for any in-flight write before refusing new ones.
        let _guard = self.write_lock.lock().await;
        self.closed.store(true, Ordering::Release);
        Ok(())
    }
}
