use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::{Set, Unchanged}, DatabaseConnection, DbErr, EntityTrait,
    QueryOrder, TransactionTrait,
};

use models::super_hero::{self, Entity as SuperHeroEntity};

use crate::errors::ServiceError;
use crate::super_hero::domain::NewSuperHero;

/// Persistent collection of heroes, queried by primary key or in full.
///
/// Mutating methods commit before they return.
#[async_trait]
pub trait SuperHeroRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<super_hero::Model>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<super_hero::Model>, ServiceError>;
    async fn insert(&self, hero: NewSuperHero) -> Result<super_hero::Model, ServiceError>;
    /// Overwrites every non-key column of the row identified by `hero.id`.
    async fn update(&self, hero: super_hero::Model) -> Result<super_hero::Model, ServiceError>;
    /// Returns `false` when no row had that id.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmSuperHeroRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmSuperHeroRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl SuperHeroRepository for SeaOrmSuperHeroRepository {
    async fn find_all(&self) -> Result<Vec<super_hero::Model>, ServiceError> {
        SuperHeroEntity::find()
            .order_by_asc(super_hero::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<super_hero::Model>, ServiceError> {
        SuperHeroEntity::find_by_id(id).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn insert(&self, hero: NewSuperHero) -> Result<super_hero::Model, ServiceError> {
        let txn = self.db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        let am = super_hero::ActiveModel {
            name: Set(hero.name),
            first_name: Set(hero.first_name),
            last_name: Set(hero.last_name),
            city: Set(hero.city),
            ..Default::default()
        };
        let created = am.insert(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(created)
    }

    async fn update(&self, hero: super_hero::Model) -> Result<super_hero::Model, ServiceError> {
        let txn = self.db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        let am = super_hero::ActiveModel {
            id: Unchanged(hero.id),
            name: Set(hero.name),
            first_name: Set(hero.first_name),
            last_name: Set(hero.last_name),
            city: Set(hero.city),
        };
        let updated = match am.update(&txn).await {
            Ok(m) => m,
            // row vanished between lookup and write
            Err(DbErr::RecordNotUpdated) => return Err(ServiceError::not_found("super_hero")),
            Err(e) => return Err(ServiceError::Db(e.to_string())),
        };
        txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        let res = SuperHeroEntity::delete_by_id(id).exec(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}
