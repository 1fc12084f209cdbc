//! Service layer for the hero registry.
//! - `super_hero::repository` is the store seam; `super_hero::service` routes calls to it.
//! - Entity definitions live in the `models` crate.

pub mod errors;
pub mod super_hero;
#[cfg(test)]
pub mod test_support;
