//! In-memory store double for handler tests
//!
//! Mirrors the Postgres repositories' observable behavior: cascade delete,
//! ownership-scoped option lookups, and `MissingProduct` on inserts that
//! reference an absent product.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::{DbError, OptionStore, Product, ProductOption, ProductStore};
use crate::models::{OptionDraft, ProductDraft};

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    products: HashMap<Uuid, Product>,
    options: HashMap<Uuid, ProductOption>,
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Product>, DbError> {
        let inner = self.inner.lock().unwrap();
        let mut products: Vec<_> = inner.products.values().cloned().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, DbError> {
        let needle = name.to_lowercase();
        let inner = self.inner.lock().unwrap();
        let mut products: Vec<_> = inner
            .products
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn get(&self, id: Uuid) -> Result<Product, DbError> {
        let inner = self.inner.lock().unwrap();
        inner
            .products
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::NotFound {
                resource: "product",
                id: id.to_string(),
            })
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, DbError> {
        let product = Product {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            delivery_price: draft.delivery_price,
        };
        let mut inner = self.inner.lock().unwrap();
        inner.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: Uuid, draft: ProductDraft) -> Result<(), DbError> {
        let mut inner = self.inner.lock().unwrap();
        let product = inner.products.get_mut(&id).ok_or_else(|| DbError::NotFound {
            resource: "product",
            id: id.to_string(),
        })?;
        product.name = draft.name;
        product.description = draft.description;
        product.price = draft.price;
        product.delivery_price = draft.delivery_price;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.products.remove(&id).is_none() {
            return Err(DbError::NotFound {
                resource: "product",
                id: id.to_string(),
            });
        }
        // Cascade, as the FK does in Postgres
        inner.options.retain(|_, o| o.product_id != id);
        Ok(())
    }
}

#[async_trait]
impl OptionStore for MemoryStore {
    async fn list(&self, product_id: Uuid) -> Result<Vec<ProductOption>, DbError> {
        let inner = self.inner.lock().unwrap();
        let mut options: Vec<_> = inner
            .options
            .values()
            .filter(|o| o.product_id == product_id)
            .cloned()
            .collect();
        options.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(options)
    }

    async fn get(&self, product_id: Uuid, id: Uuid) -> Result<ProductOption, DbError> {
        let inner = self.inner.lock().unwrap();
        inner
            .options
            .get(&id)
            .filter(|o| o.product_id == product_id)
            .cloned()
            .ok_or_else(|| DbError::NotFound {
                resource: "option",
                id: id.to_string(),
            })
    }

    async fn create(
        &self,
        product_id: Uuid,
        draft: OptionDraft,
    ) -> Result<ProductOption, DbError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.products.contains_key(&product_id) {
            return Err(DbError::MissingProduct {
                id: product_id.to_string(),
            });
        }
        let option = ProductOption {
            id: Uuid::new_v4(),
            product_id,
            name: draft.name,
            description: draft.description,
        };
        inner.options.insert(option.id, option.clone());
        Ok(option)
    }

    async fn update(
        &self,
        product_id: Uuid,
        id: Uuid,
        draft: OptionDraft,
    ) -> Result<(), DbError> {
        let mut inner = self.inner.lock().unwrap();
        let option = inner
            .options
            .get_mut(&id)
            .filter(|o| o.product_id == product_id)
            .ok_or_else(|| DbError::NotFound {
                resource: "option",
                id: id.to_string(),
            })?;
        option.name = draft.name;
        option.description = draft.description;
        Ok(())
    }

    async fn delete(&self, product_id: Uuid, id: Uuid) -> Result<(), DbError> {
        let mut inner = self.inner.lock().unwrap();
        let owned = inner
            .options
            .get(&id)
            .map(|o| o.product_id == product_id)
            .unwrap_or(false);
        if !owned {
            return Err(DbError::NotFound {
                resource: "option",
                id: id.to_string(),
            });
        }
        inner.options.remove(&id);
        Ok(())
    }
}
