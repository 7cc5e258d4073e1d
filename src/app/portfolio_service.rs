//! The portfolio content service.
//!
//! Owns the document store handle and hands out one typed repository per
//! content type. It is built once by the process entry point and shared with
//! every request handler.

use crate::app::seed::{self, SeedReport};
use crate::domain::model::{Category, Contact, Photo, Photographer, Service, Testimonial};
use crate::domain::{IdGenerator, Repository, RepositoryResult};
use crate::infra::AppConfig;
use crate::storage::{DocumentStore, PgDocumentStore, StoreResult};
use anyhow::Context;
use std::sync::Arc;

pub struct PortfolioService {
    store: Arc<dyn DocumentStore>,
    pub photographer: Repository<Photographer>,
    pub categories: Repository<Category>,
    pub photos: Repository<Photo>,
    pub testimonials: Repository<Testimonial>,
    pub contacts: Repository<Contact>,
    pub services: Repository<Service>,
}

impl PortfolioService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let ids = Arc::new(IdGenerator::new());
        Self {
            photographer: Repository::new(store.clone(), ids.clone()),
            categories: Repository::new(store.clone(), ids.clone()),
            photos: Repository::new(store.clone(), ids.clone()),
            testimonials: Repository::new(store.clone(), ids.clone()),
            contacts: Repository::new(store.clone(), ids.clone()),
            services: Repository::new(store.clone(), ids),
            store,
        }
    }

    /// Connects to Postgres, verifies the connection and prepares every collection.
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let store = PgDocumentStore::connect(
            &config.database_url,
            &config.db_name,
            config.max_connections,
        )
        .await
        .context("failed to connect to the document store")?;

        let service = Self::new(Arc::new(store));
        if let Err(e) = service.prepare(config.seed_defaults).await {
            service.close().await;
            return Err(e);
        }
        Ok(service)
    }

    /// Ping, create missing collections, then seed empty ones if asked to.
    pub async fn prepare(&self, seed_defaults: bool) -> anyhow::Result<()> {
        self.ping().await.context("document store ping failed")?;
        tracing::info!("successfully connected to the document store");

        self.ensure_collections()
            .await
            .context("failed to prepare collections")?;

        if seed_defaults {
            let report = self
                .seed_defaults()
                .await
                .context("failed to initialize default data")?;
            tracing::info!(seeded = ?report.seeded, "default data check complete");
        }
        Ok(())
    }

    pub fn collections(&self) -> [&'static str; 6] {
        [
            self.photographer.collection(),
            self.categories.collection(),
            self.photos.collection(),
            self.testimonials.collection(),
            self.contacts.collection(),
            self.services.collection(),
        ]
    }

    pub async fn ensure_collections(&self) -> StoreResult<()> {
        for collection in self.collections() {
            self.store.ensure_collection(collection).await?;
        }
        Ok(())
    }

    pub async fn seed_defaults(&self) -> RepositoryResult<SeedReport> {
        seed::seed_defaults(self).await
    }

    pub async fn ping(&self) -> StoreResult<()> {
        self.store.ping().await
    }

    pub async fn close(&self) {
        self.store.close().await;
        tracing::info!("disconnected from the document store");
    }
}
