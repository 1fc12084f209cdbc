pub mod db;
pub mod super_hero;
