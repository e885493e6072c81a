//! In-memory storage implementation
//!
//! Backs the unit-of-work traits with `DashMap`s. Writes made through a
//! unit of work are staged and only applied to the store on `commit`.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::domain::{
    Catalogue, CatalogueItem, CatalogueItemRepository, CatalogueRepository, DomainError,
    DomainResult, NewCatalogueItem, Provider, ProviderRepository, UnitOfWork, UnitOfWorkFactory,
};

pub const DEMO_PROVIDER_ID: i32 = 1;
pub const DEMO_CATALOGUE_ID: i32 = 1;

/// In-memory store for development and testing
pub struct InMemoryStore {
    providers: DashMap<i32, Provider>,
    catalogues: DashMap<i32, Catalogue>,
    items: DashMap<i32, CatalogueItem>,
    item_counter: AtomicI32,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            providers: DashMap::new(),
            catalogues: DashMap::new(),
            items: DashMap::new(),
            item_counter: AtomicI32::new(1),
        }
    }

    /// Store with one provider owning one empty catalogue.
    pub fn with_demo_data() -> Self {
        let store = Self::new();
        store.insert_provider(Provider::new(DEMO_PROVIDER_ID, "FoodPal Demo Kitchen"));
        store.insert_catalogue(Catalogue::new(DEMO_CATALOGUE_ID, "Main menu", DEMO_PROVIDER_ID));
        store
    }

    pub fn insert_provider(&self, provider: Provider) {
        self.providers.insert(provider.id, provider);
    }

    pub fn insert_catalogue(&self, catalogue: Catalogue) {
        self.catalogues.insert(catalogue.id, catalogue);
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn item(&self, id: i32) -> Option<CatalogueItem> {
        self.items.get(&id).map(|i| i.clone())
    }

    fn apply(&self, change: StagedChange) {
        match change {
            StagedChange::Insert(item) | StagedChange::Update(item) => {
                self.items.insert(item.id, item);
            }
            StagedChange::Remove(id) => {
                self.items.remove(&id);
            }
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
enum StagedChange {
    Insert(CatalogueItem),
    Update(CatalogueItem),
    Remove(i32),
}

type Staged = Arc<Mutex<Vec<StagedChange>>>;

// ── Factory ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct InMemoryUnitOfWorkFactory {
    store: Arc<InMemoryStore>,
}

impl InMemoryUnitOfWorkFactory {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UnitOfWorkFactory for InMemoryUnitOfWorkFactory {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        Ok(Box::new(InMemoryUnitOfWork::new(self.store.clone())))
    }
}

// ── Unit of work ────────────────────────────────────────────────

pub struct InMemoryUnitOfWork {
    store: Arc<InMemoryStore>,
    staged: Staged,
    providers: InMemoryProviderRepository,
    catalogues: InMemoryCatalogueRepository,
    catalogue_items: InMemoryCatalogueItemRepository,
}

impl InMemoryUnitOfWork {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        let staged: Staged = Arc::new(Mutex::new(Vec::new()));
        Self {
            providers: InMemoryProviderRepository {
                store: store.clone(),
            },
            catalogues: InMemoryCatalogueRepository {
                store: store.clone(),
            },
            catalogue_items: InMemoryCatalogueItemRepository {
                store: store.clone(),
                staged: staged.clone(),
            },
            store,
            staged,
        }
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    fn providers(&self) -> &dyn ProviderRepository {
        &self.providers
    }

    fn catalogues(&self) -> &dyn CatalogueRepository {
        &self.catalogues
    }

    fn catalogue_items(&self) -> &dyn CatalogueItemRepository {
        &self.catalogue_items
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let changes = std::mem::take(&mut *self.staged.lock().await);
        for change in changes {
            self.store.apply(change);
        }
        Ok(())
    }
}

// ── Repositories ────────────────────────────────────────────────

struct InMemoryProviderRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl ProviderRepository for InMemoryProviderRepository {
    async fn exists(&self, id: i32) -> DomainResult<bool> {
        Ok(self.store.providers.contains_key(&id))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Provider>> {
        Ok(self.store.providers.get(&id).map(|p| p.clone()))
    }
}

struct InMemoryCatalogueRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl CatalogueRepository for InMemoryCatalogueRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Catalogue>> {
        Ok(self.store.catalogues.get(&id).map(|c| c.clone()))
    }
}

struct InMemoryCatalogueItemRepository {
    store: Arc<InMemoryStore>,
    staged: Staged,
}

#[async_trait]
impl CatalogueItemRepository for InMemoryCatalogueItemRepository {
    async fn find_all_with_provider(&self, provider_id: i32) -> DomainResult<Vec<CatalogueItem>> {
        let mut items: Vec<CatalogueItem> = self
            .store
            .items
            .iter()
            .filter(|i| i.belongs_to(provider_id))
            .map(|i| i.clone())
            .collect();
        items.sort_by_key(|i| i.id);
        Ok(items)
    }

    async fn find_with_provider_by_id(&self, id: i32) -> DomainResult<Option<CatalogueItem>> {
        Ok(self.store.item(id))
    }

    async fn find_by_name_for_provider(
        &self,
        name: &str,
        provider_id: i32,
    ) -> DomainResult<Option<CatalogueItem>> {
        let items = self.find_all_with_provider(provider_id).await?;
        Ok(items.into_iter().find(|i| i.is_named(name)))
    }

    async fn add(&self, item: NewCatalogueItem) -> DomainResult<i32> {
        let provider_id = self
            .store
            .catalogues
            .get(&item.catalogue_id)
            .map(|c| c.provider_id)
            .ok_or_else(|| {
                DomainError::Storage(format!(
                    "Foreign key violation: catalogue {} does not exist",
                    item.catalogue_id
                ))
            })?;

        let id = self.store.item_counter.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let stored = CatalogueItem {
            id,
            name: item.name,
            description: item.description,
            price: item.price,
            catalogue_id: item.catalogue_id,
            provider_id,
            created_at: now,
            updated_at: now,
        };
        self.staged.lock().await.push(StagedChange::Insert(stored));
        Ok(id)
    }

    async fn update(&self, item: CatalogueItem) -> DomainResult<()> {
        if !self.store.items.contains_key(&item.id) {
            return Err(DomainError::not_found("CatalogueItem", "id", item.id));
        }
        self.staged.lock().await.push(StagedChange::Update(item));
        Ok(())
    }

    async fn remove(&self, id: i32) -> DomainResult<()> {
        if !self.store.items.contains_key(&id) {
            return Err(DomainError::not_found("CatalogueItem", "id", id));
        }
        self.staged.lock().await.push(StagedChange::Remove(id));
        Ok(())
    }
}
