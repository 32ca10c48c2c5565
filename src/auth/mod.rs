//! Bearer-token authentication

pub mod jwt;
pub mod middleware;
pub mod models;

pub use jwt::{Authenticator, Claims};
pub use middleware::{extract_bearer_token, require_auth};
pub use models::{LoginRequest, LoginResponse};
