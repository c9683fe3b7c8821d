mod error;
mod handlers;
mod ratelimit;
mod routes;
mod server;
mod session;
mod state;

pub use error::ApiError;
pub use ratelimit::RateLimiter;
pub use routes::create_router;
pub use server::{ApiServer, ServerConfig};
pub use session::SessionStore;
pub use state::AppState;
