use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::super_hero::{SeaOrmSuperHeroRepository, SuperHeroService};

pub type HeroService = SuperHeroService<SeaOrmSuperHeroRepository>;

/// Shared handler state. Cloned per request; the pool inside is reference counted.
#[derive(Clone)]
pub struct ServerState {
    pub heroes: Arc<HeroService>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = SeaOrmSuperHeroRepository::new(db);
        Self { heroes: Arc::new(SuperHeroService::new(Arc::new(repo))) }
    }
}
