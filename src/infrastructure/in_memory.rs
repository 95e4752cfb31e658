use crate::domain::cart::CartItem;
use crate::domain::ports::CartRepository;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// A thread-safe in-memory cart.
///
/// Uses `Arc<RwLock<Vec<CartItem>>>` so clones share the same basket. Also
/// counts how many times the cart was cleared.
#[derive(Default, Clone)]
pub struct InMemoryCartRepository {
    items: Arc<RwLock<Vec<CartItem>>>,
    clears: Arc<AtomicUsize>,
}

impl InMemoryCartRepository {
    /// Creates a new, empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cart pre-filled with `items`.
    pub fn with_items(items: Vec<CartItem>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
            clears: Arc::default(),
        }
    }

    /// Number of times `clear_cart` has run.
    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn cart_items(&self) -> Result<Vec<CartItem>> {
        let items = self.items.read().await;
        Ok(items.clone())
    }

    async fn add_item(&self, item: CartItem) -> Result<()> {
        let mut items = self.items.write().await;
        items.push(item);
        Ok(())
    }

    async fn clear_cart(&self) -> Result<()> {
        let mut items = self.items.write().await;
        items.clear();
        self.clears.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
