use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

/// Cache of rendered view bodies keyed by the path they were rendered
/// for. Write handlers call `revalidate` after a successful mutation so
/// the next read recomputes the view.
#[async_trait]
pub trait ViewCache: Send + Sync {
    async fn get(&self, path: &str) -> Option<String>;
    async fn put(&self, path: &str, body: String);
    async fn revalidate(&self, path: &str);
}

#[derive(Clone, Default)]
pub struct InMemoryViewCache {
    views: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryViewCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ViewCache for InMemoryViewCache {
    async fn get(&self, path: &str) -> Option<String> {
        self.views.read().await.get(path).cloned()
    }

    async fn put(&self, path: &str, body: String) {
        self.views.write().await.insert(path.to_string(), body);
    }

    async fn revalidate(&self, path: &str) {
        if self.views.write().await.remove(path).is_some() {
            tracing::debug!("Invalidated cached view for {}", path);
        }
    }
}
