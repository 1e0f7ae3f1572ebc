pub mod config;
pub mod delivery;
