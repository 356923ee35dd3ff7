//! In-memory [`ContentStore`] implementation.
//!
//! Backs the dev server and the integration tests; keeps every collection in
//! a `BTreeMap` keyed by id so listing order is deterministic.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{ContentStore, StoreError};

/// Thread-safe in-memory store: resource name -> (id -> item).
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn list(
        &self,
        resource: &str,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<Value>, u64), StoreError> {
        let collections = self.collections.read().await;
        let Some(items) = collections.get(resource) else {
            return Ok((Vec::new(), 0));
        };

        let total = items.len() as u64;
        let start = (page as usize - 1).saturating_mul(page_size as usize);
        let slice: Vec<Value> = items
            .values()
            .skip(start)
            .take(page_size as usize)
            .cloned()
            .collect();

        Ok((slice, total))
    }

    async fn get(&self, resource: &str, id: &str) -> Result<Value, StoreError> {
        let collections = self.collections.read().await;
        collections
            .get(resource)
            .and_then(|items| items.get(id))
            .cloned()
            .ok_or_else(|| StoreError::not_found(resource, id))
    }

    async fn create(&self, resource: &str, dto: Value) -> Result<Value, StoreError> {
        let Value::Object(mut fields) = dto else {
            return Err(StoreError::Backend("create payload must be a JSON object".into()));
        };

        let id = Uuid::new_v4().to_string();
        fields.insert("id".into(), Value::String(id.clone()));
        let item = Value::Object(fields);

        let mut collections = self.collections.write().await;
        collections
            .entry(resource.to_string())
            .or_default()
            .insert(id, item.clone());

        Ok(item)
    }

    async fn update(&self, resource: &str, id: &str, dto: Value) -> Result<Value, StoreError> {
        let Value::Object(changes) = dto else {
            return Err(StoreError::Backend("update payload must be a JSON object".into()));
        };

        let mut collections = self.collections.write().await;
        let item = collections
            .get_mut(resource)
            .and_then(|items| items.get_mut(id))
            .ok_or_else(|| StoreError::not_found(resource, id))?;

        // Shallow merge; the stored id always wins over a client-sent one.
        if let Value::Object(fields) = item {
            for (key, value) in changes {
                if key != "id" {
                    fields.insert(key, value);
                }
            }
        }

        Ok(item.clone())
    }

    async fn delete(&self, resource: &str, id: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let removed = collections
            .get_mut(resource)
            .and_then(|items| items.remove(id));

        match removed {
            Some(_) => Ok(()),
            None => Err(StoreError::not_found(resource, id)),
        }
    }
}
