//! In-memory content-addressed store (for testing and local mode).

use crate::errors::Result;
use crate::store::ObjectStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Content-addressed store backed by a process-local map.
///
/// Identifiers are the BLAKE3 digest of the bytes, so uploading identical
/// content yields the identical id.
#[derive(Clone)]
pub struct MemoryObjectStore {
    objects: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self {
            objects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Retrieve previously uploaded bytes.
    pub fn get(&self, content_id: &str) -> Option<Vec<u8>> {
        self.objects.read().get(content_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }

    fn content_id(bytes: &[u8]) -> String {
        hex::encode(blake3::hash(bytes).as_bytes())
    }
}

impl Default for MemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn upload(&self, bytes: Vec<u8>) -> Result<String> {
        let content_id = Self::content_id(&bytes);
        let mut objects = self.objects.write();
        objects.insert(content_id.clone(), bytes);
        Ok(content_id)
    }
}
