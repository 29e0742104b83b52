//! Cart store backed by JSON documents in a local directory.
//!
//! Each storage key becomes one file, `<percent-encoded key>.json`. A session
//! owns two keys: its cart item list and its virtual product table.
//! Documents are replaced by rename, so a read never sees a half-written file.

use std::io::ErrorKind;
use std::path::PathBuf;

use cosmic_delivery_core::{CartItem, Product, ProductId, SessionId};
use futures::future::BoxFuture;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{CartStore, Result, VirtualProducts, cart_key, virtual_products_key};

/// Cart store persisting each session under a directory.
///
/// Writes from this process are serialized; other processes sharing the
/// directory race with last writer wins.
#[derive(Debug)]
pub struct LocalCartStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl LocalCartStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", urlencoding::encode(key)))
    }

    /// Read a document, treating a missing file as the default value.
    async fn load<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace a document atomically: readers see the old or the new
    /// contents, never a partial write.
    async fn save<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_string_pretty(value)?;

        let tmp = self
            .dir
            .join(format!(".{}.{}.tmp", urlencoding::encode(key), Uuid::new_v4().simple()));
        if let Err(e) = tokio::fs::write(&tmp, json).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        if let Err(e) = tokio::fs::rename(&tmp, self.path_for(key)).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    async fn add(
        &self,
        session: &SessionId,
        product_id: &ProductId,
        virtual_product: Option<Product>,
    ) -> Result<CartItem> {
        let _guard = self.write_lock.lock().await;

        if let Some(product) = virtual_product {
            let key = virtual_products_key(session);
            let mut table: VirtualProducts = self.load(&key).await?;
            table.insert(product.id.clone(), product);
            self.save(&key, &table).await?;
        }

        let key = cart_key(session);
        let mut items: Vec<CartItem> = self.load(&key).await?;
        if let Some(existing) = items.iter().find(|item| &item.product_id == product_id) {
            return Ok(existing.clone());
        }

        let item = CartItem::new(session.clone(), product_id.clone());
        items.push(item.clone());
        self.save(&key, &items).await?;
        Ok(item)
    }

    async fn remove(&self, session: &SessionId, product_id: &ProductId) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let key = cart_key(session);
        let mut items: Vec<CartItem> = self.load(&key).await?;
        let before = items.len();
        items.retain(|item| &item.product_id != product_id);
        if items.len() != before {
            self.save(&key, &items).await?;
        }

        let key = virtual_products_key(session);
        let mut table: VirtualProducts = self.load(&key).await?;
        if table.remove(product_id).is_some() {
            self.save(&key, &table).await?;
        }
        Ok(())
    }

    async fn clear_session(&self, session: &SessionId) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.delete(&cart_key(session)).await?;
        self.delete(&virtual_products_key(session)).await
    }

    async fn check_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let metadata = tokio::fs::metadata(&self.dir).await?;
        if metadata.permissions().readonly() {
            return Err(std::io::Error::new(
                ErrorKind::PermissionDenied,
                format!("{} is read-only", self.dir.display()),
            )
            .into());
        }
        Ok(())
    }
}

impl CartStore for LocalCartStore {
    fn items<'a>(&'a self, session: &'a SessionId) -> BoxFuture<'a, Result<Vec<CartItem>>> {
        Box::pin(async move { self.load(&cart_key(session)).await })
    }

    fn add_item<'a>(
        &'a self,
        session: &'a SessionId,
        product_id: &'a ProductId,
        virtual_product: Option<Product>,
    ) -> BoxFuture<'a, Result<CartItem>> {
        Box::pin(self.add(session, product_id, virtual_product))
    }

    fn remove_item<'a>(
        &'a self,
        session: &'a SessionId,
        product_id: &'a ProductId,
    ) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.remove(session, product_id))
    }

    fn clear<'a>(&'a self, session: &'a SessionId) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.clear_session(session))
    }

    fn virtual_products<'a>(
        &'a self,
        session: &'a SessionId,
    ) -> BoxFuture<'a, Result<VirtualProducts>> {
        Box::pin(async move { self.load(&virtual_products_key(session)).await })
    }

    fn ping(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(self.check_dir())
    }
}
