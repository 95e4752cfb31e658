use super::cart::CartItem;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Access to the shopper's cart, owned outside the checkout screen.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn cart_items(&self) -> Result<Vec<CartItem>>;
    async fn add_item(&self, item: CartItem) -> Result<()>;
    async fn clear_cart(&self) -> Result<()>;
}

pub type SharedCartRepository = Arc<dyn CartRepository>;
