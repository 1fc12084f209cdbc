#![cfg(test)]
use std::collections::BTreeMap;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};
use tokio::sync::Mutex;

use models::db::{connect_with_config, DatabaseConfig};
use models::super_hero;

use crate::errors::ServiceError;
use crate::super_hero::{NewSuperHero, SuperHeroRepository};

/// Fresh in-memory SQLite database with the `super_hero` table.
/// A single pooled connection, since every connection to `sqlite::memory:` is its own database.
pub async fn sqlite_db() -> Result<DatabaseConnection, anyhow::Error> {
    let mut cfg = DatabaseConfig::with_url("sqlite::memory:");
    cfg.max_connections = 1;
    cfg.min_connections = 1;
    let db = connect_with_config(&cfg).await?;

    let backend = db.get_database_backend();
    let stmt = Schema::new(backend).create_table_from_entity(super_hero::Entity);
    db.execute(backend.build(&stmt)).await?;
    Ok(db)
}

/// Store kept in a `BTreeMap`, ids handed out from 1 like an identity column.
pub struct MemorySuperHeroRepository {
    state: Mutex<MemoryState>,
}

struct MemoryState {
    next_id: i32,
    rows: BTreeMap<i32, super_hero::Model>,
}

impl Default for MemorySuperHeroRepository {
    fn default() -> Self {
        Self { state: Mutex::new(MemoryState { next_id: 1, rows: BTreeMap::new() }) }
    }
}

#[async_trait]
impl SuperHeroRepository for MemorySuperHeroRepository {
    async fn find_all(&self) -> Result<Vec<super_hero::Model>, ServiceError> {
        Ok(self.state.lock().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<super_hero::Model>, ServiceError> {
        Ok(self.state.lock().await.rows.get(&id).cloned())
    }

    async fn insert(&self, hero: NewSuperHero) -> Result<super_hero::Model, ServiceError> {
        let mut state = self.state.lock().await;
        let id = state.next_id;
        state.next_id += 1;
        let model = super_hero::Model {
            id,
            name: hero.name,
            first_name: hero.first_name,
            last_name: hero.last_name,
            city: hero.city,
        };
        state.rows.insert(id, model.clone());
        Ok(model)
    }

    async fn update(&self, hero: super_hero::Model) -> Result<super_hero::Model, ServiceError> {
        let mut state = self.state.lock().await;
        match state.rows.get_mut(&hero.id) {
            Some(row) => {
                *row = hero.clone();
                Ok(hero)
            }
            None => Err(ServiceError::not_found("super_hero")),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.state.lock().await.rows.remove(&id).is_some())
    }
}
