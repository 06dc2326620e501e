//! API layer - HTTP endpoints

pub mod ask;
pub mod error;
pub mod health;
pub mod json;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use router::create_router;
pub use state::AppState;
