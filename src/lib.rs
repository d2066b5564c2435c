//! fitcenter - member management service for a fitness center
//!
//! HTTP CRUD endpoints for member records backed by MySQL, with a workout
//! session relationship that gates deletion.

pub mod config;
pub mod db;
pub mod http_server;
pub mod schema;
