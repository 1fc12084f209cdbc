use std::sync::Arc;
use tracing::{info, instrument};

use models::super_hero;

use crate::errors::ServiceError;
use crate::super_hero::domain::NewSuperHero;
use crate::super_hero::repository::SuperHeroRepository;

/// Hero registry: each call is routed to the store, and every mutation
/// answers with the full post-write list.
///
/// Concurrent writes to the same id are ordered only by the store; there is
/// no locking here.
pub struct SuperHeroService<R: SuperHeroRepository> {
    repo: Arc<R>,
}

impl<R: SuperHeroRepository> SuperHeroService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<super_hero::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<super_hero::Model, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("super_hero"))
    }

    #[instrument(skip(self, hero), fields(name = %hero.name))]
    pub async fn create(&self, hero: NewSuperHero) -> Result<Vec<super_hero::Model>, ServiceError> {
        let created = self.repo.insert(hero).await?;
        info!(id = created.id, "super_hero_created");
        self.list().await
    }

    /// Overwrites name, first/last name and city of an existing hero. The id only selects the row.
    #[instrument(skip(self, hero), fields(id = hero.id))]
    pub async fn update(&self, hero: super_hero::Model) -> Result<Vec<super_hero::Model>, ServiceError> {
        let existing = self.get(hero.id).await?;
        let merged = super_hero::Model {
            id: existing.id,
            name: hero.name,
            first_name: hero.first_name,
            last_name: hero.last_name,
            city: hero.city,
        };
        self.repo.update(merged).await?;
        info!("super_hero_updated");
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<Vec<super_hero::Model>, ServiceError> {
        self.get(id).await?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("super_hero"));
        }
        info!("super_hero_deleted");
        self.list().await
    }
}
