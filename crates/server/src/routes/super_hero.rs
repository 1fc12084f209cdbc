use axum::{extract::{Path, State}, Json};
use serde::Deserialize;
use tracing::{debug, info};

use models::super_hero;
use service::super_hero::NewSuperHero;

use crate::{errors::JsonApiError, state::ServerState};

/// Create payload. `id` is accepted for compatibility and discarded.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSuperHeroInput {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
}

impl From<CreateSuperHeroInput> for NewSuperHero {
    fn from(input: CreateSuperHeroInput) -> Self {
        Self {
            name: input.name,
            first_name: input.first_name,
            last_name: input.last_name,
            city: input.city,
        }
    }
}

#[utoipa::path(
    get, path = "/api/SuperHero", tag = "super_hero",
    responses(
        (status = 200, description = "All heroes", body = [crate::openapi::SuperHeroDoc]),
        (status = 500, description = "Store Error")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<super_hero::Model>>, JsonApiError> {
    let heroes = state.heroes.list().await?;
    debug!(count = heroes.len(), "list super heroes");
    Ok(Json(heroes))
}

#[utoipa::path(
    get, path = "/api/SuperHero/{id}", tag = "super_hero",
    params(("id" = i32, Path, description = "Hero ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::SuperHeroDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<super_hero::Model>, JsonApiError> {
    Ok(Json(state.heroes.get(id).await?))
}

#[utoipa::path(
    post, path = "/api/SuperHero", tag = "super_hero",
    request_body = crate::openapi::CreateSuperHeroDoc,
    responses(
        (status = 200, description = "Created; all heroes", body = [crate::openapi::SuperHeroDoc]),
        (status = 500, description = "Store Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateSuperHeroInput>,
) -> Result<Json<Vec<super_hero::Model>>, JsonApiError> {
    if let Some(id) = input.id {
        debug!(id, "ignoring caller-supplied id on create");
    }
    info!(name = %input.name, city = %input.city, "super_hero_create_request");
    let heroes = state.heroes.create(input.into()).await?;
    Ok(Json(heroes))
}

#[utoipa::path(
    put, path = "/api/SuperHero", tag = "super_hero",
    request_body = crate::openapi::SuperHeroDoc,
    responses(
        (status = 200, description = "Updated; all heroes", body = [crate::openapi::SuperHeroDoc]),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Json(hero): Json<super_hero::Model>,
) -> Result<Json<Vec<super_hero::Model>>, JsonApiError> {
    info!(id = hero.id, "super_hero_update_request");
    let heroes = state.heroes.update(hero).await?;
    Ok(Json(heroes))
}

#[utoipa::path(
    delete, path = "/api/SuperHero/{id}", tag = "super_hero",
    params(("id" = i32, Path, description = "Hero ID")),
    responses(
        (status = 200, description = "Deleted; remaining heroes", body = [crate::openapi::SuperHeroDoc]),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Vec<super_hero::Model>>, JsonApiError> {
    info!(id, "super_hero_delete_request");
    let heroes = state.heroes.delete(id).await?;
    Ok(Json(heroes))
}
