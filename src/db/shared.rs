//! Process-wide handle to the contact store.
//!
//! Created once at startup and cloned into every caller. Each operation runs
//! on Tokio's blocking pool so awaiting it never stalls the caller's task.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::error::{StoreError, StoreResult};
use super::ContactStore;
use crate::models::{Contact, NewContact};

#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<ContactStore>>,
}

impl SharedStore {
    pub fn new(store: ContactStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Open (or create) the database file off the async runtime.
    pub async fn open_at(path: PathBuf) -> StoreResult<Self> {
        let store = tokio::task::spawn_blocking(move || ContactStore::open_at(path))
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))??;
        Ok(Self::new(store))
    }

    async fn run<T, F>(&self, f: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&ContactStore) -> StoreResult<T> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let store = inner
                .lock()
                .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
            f(&store)
        })
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?
    }

    pub async fn insert_contact(&self, contact: NewContact) -> StoreResult<i64> {
        self.run(move |store| store.insert_contact(&contact)).await
    }

    pub async fn get_contact(&self, id: i64) -> StoreResult<Option<Contact>> {
        self.run(move |store| store.get_contact(id)).await
    }

    pub async fn list_contacts(&self) -> StoreResult<Vec<Contact>> {
        self.run(|store| store.list_contacts()).await
    }

    pub async fn search_contacts(&self, query: String) -> StoreResult<Vec<Contact>> {
        self.run(move |store| store.search_contacts(&query)).await
    }

    pub async fn search_contacts_case_sensitive(&self, query: String) -> StoreResult<Vec<Contact>> {
        self.run(move |store| store.search_contacts_case_sensitive(&query)).await
    }

    pub async fn list_favorite_contacts(&self) -> StoreResult<Vec<Contact>> {
        self.run(|store| store.list_favorite_contacts()).await
    }

    pub async fn update_contact(&self, contact: Contact) -> StoreResult<()> {
        self.run(move |store| store.update_contact(&contact)).await
    }

    pub async fn set_favorite(&self, id: i64, is_favorite: bool) -> StoreResult<()> {
        self.run(move |store| store.set_favorite(id, is_favorite)).await
    }

    pub async fn delete_contact(&self, id: i64) -> StoreResult<()> {
        self.run(move |store| store.delete_contact(id)).await
    }
}
