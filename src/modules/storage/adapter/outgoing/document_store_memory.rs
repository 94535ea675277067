use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::modules::storage::application::ports::outgoing::{
    DocumentKey, DocumentStore, DocumentStoreError,
};

/// Process-local store. Clones share the same documents.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<HashMap<DocumentKey, Value>>>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: HashMap<DocumentKey, Value>) -> Self {
        Self {
            documents: Arc::new(RwLock::new(documents)),
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of successful `write` calls since construction.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn read(&self, key: DocumentKey) -> Result<Option<Value>, DocumentStoreError> {
        Ok(self.documents.read().await.get(&key).cloned())
    }

    async fn write(&self, key: DocumentKey, document: Value) -> Result<(), DocumentStoreError> {
        self.documents.write().await.insert(key, document);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn ping(&self) -> Result<(), DocumentStoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use serde_json::json;

    #[tokio::test]
    async fn clones_share_documents_and_write_count() {
        let store = InMemoryDocumentStore::new();
        let other = store.clone();

        store
            .write(DocumentKey::Projects, json!([]))
            .await
            .unwrap();

        assert_eq!(other.read(DocumentKey::Projects).await.unwrap(), Some(json!([])));
        assert_eq!(other.write_count(), 1);
    }

    #[tokio::test]
    async fn seeded_documents_do_not_count_as_writes() {
        let store = InMemoryDocumentStore::with_documents(hashmap! {
            DocumentKey::About => json!({ "name": "Kim" }),
        });

        assert_eq!(
            store.read(DocumentKey::About).await.unwrap(),
            Some(json!({ "name": "Kim" }))
        );
        assert_eq!(store.read(DocumentKey::Skills).await.unwrap(), None);
        assert_eq!(store.write_count(), 0);
    }
}
