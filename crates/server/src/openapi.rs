use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperHeroDoc {
    pub id: i32,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
}

#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSuperHeroDoc {
    /// Ignored; the store assigns the id.
    pub id: Option<i32>,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::super_hero::list,
        crate::routes::super_hero::get,
        crate::routes::super_hero::create,
        crate::routes::super_hero::update,
        crate::routes::super_hero::delete,
    ),
    components(
        schemas(
            HealthResponse,
            SuperHeroDoc,
            CreateSuperHeroDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "super_hero")
    )
)]
pub struct ApiDoc;
