pub mod domain;
pub mod repository;
pub mod service;

pub use domain::NewSuperHero;
pub use repository::{SeaOrmSuperHeroRepository, SuperHeroRepository};
pub use service::SuperHeroService;
