//! # HTTP Server Module
//!
//! Axum server exposing the member CRUD API.
//!
//! # Endpoints
//!
//! - `/` - Welcome page
//! - `/health` - Health check
//! - `/members` - Member records (list, get, create, update, delete)

pub mod errors;
pub mod member_routes;
pub mod server;
pub mod status_routes;

pub use errors::{ApiError, ApiResult};
pub use member_routes::{member_routes, MemberState};
pub use server::HttpServer;
