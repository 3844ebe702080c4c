// store.rs — GoalStore: the document collection behind the service.
//
// The service only needs three collection operations (find all, insert one,
// delete one by id). Backends implement `GoalStore`; the process opens one
// `StoreHandle` from a connection string at startup and closes it on shutdown.
//
// Connection strings:
//   memory://            in-process collection (lost on exit)
//   file:///abs/dir      JSON document collection under `dir`
//   /abs/dir, ./dir      same as file://

use std::ops::Deref;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::document_store::DocumentStore;
use crate::error::GoalError;
use crate::goal::{GoalDocument, GoalId};

/// A collection of goal documents.
///
/// Implementations own their own consistency; callers perform no locking.
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// All documents, in the order the backend keeps them.
    async fn find_all(&self) -> Result<Vec<GoalDocument>, GoalError>;

    /// Persist a new document with a freshly assigned id and return it.
    async fn insert(&self, text: &str) -> Result<GoalDocument, GoalError>;

    /// Remove the document with `id`. Returns how many documents were removed.
    async fn delete_one(&self, id: &GoalId) -> Result<u64, GoalError>;

    /// Release the backend. Later operations fail with `GoalError::Closed`.
    async fn close(&self) -> Result<(), GoalError> {
        Ok(())
    }
}

/// A parsed store connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreUri {
    Memory,
    Document(PathBuf),
}

impl FromStr for StoreUri {
    type Err = GoalError;

    fn from_str(uri: &str) -> Result<Self, Self::Err> {
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(GoalError::InvalidStoreUri("empty connection string".into()));
        }
        if uri == "memory://" || uri == "memory:" {
            return Ok(StoreUri::Memory);
        }
        if let Some(path) = uri.strip_prefix("file://") {
            if path.is_empty() {
                return Err(GoalError::InvalidStoreUri(uri.to_string()));
            }
            return Ok(StoreUri::Document(PathBuf::from(path)));
        }
        if uri.contains("://") {
            return Err(GoalError::InvalidStoreUri(uri.to_string()));
        }
        Ok(StoreUri::Document(PathBuf::from(uri)))
    }
}

/// Shared, explicitly opened and closed handle to the process's goal store.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Arc<dyn GoalStore>,
}

impl StoreHandle {
    /// Open the store named by a connection string.
    pub async fn open(uri: &str) -> Result<Self, GoalError> {
        let handle = match uri.parse::<StoreUri>()? {
            StoreUri::Memory => Self::from_store(MemoryStore::new()),
            StoreUri::Document(dir) => Self::from_store(DocumentStore::open(dir).await?),
        };
        tracing::info!(uri, "opened goal store");
        Ok(handle)
    }

    /// Wrap an already constructed backend.
    pub fn from_store(store: impl GoalStore + 'static) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    pub async fn close(&self) -> Result<(), GoalError> {
        self.inner.close().await?;
        tracing::info!("closed goal store");
        Ok(())
    }
}

impl Deref for StoreHandle {
    type Target = dyn GoalStore;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

/// In-process collection. Insertion order is list order.
#[derive(Default)]
pub struct MemoryStore {
    docs: RwLock<Vec<GoalDocument>>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_open(&self) -> Result<(), GoalError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(GoalError::Closed);
        }
        Ok(())
    }
}

#[async_trait]
impl GoalStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<GoalDocument>, GoalError> {
        self.ensure_open()?;
        Ok(self.docs.read().await.clone())
    }

    async fn insert(&self, text: &str) -> Result<GoalDocument, GoalError> {
        self.ensure_open()?;
        let doc = GoalDocument {
            id: GoalId::generate(),
            text: text.to_string(),
        };
        self.docs.write().await.push(doc.clone());
        Ok(doc)
    }

    async fn delete_one(&self, id: &GoalId) -> Result<u64, GoalError> {
        self.ensure_open()?;
        let mut docs = self.docs.write().await;
        match docs.iter().position(|d| &d.id == id) {
            Some(idx) => {
                docs.remove(idx);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn close(&self) -> Result<(), GoalError> {
        self.closed.store(true, Ordering::Release);
        Ok(())
    }
}
