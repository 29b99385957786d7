pub mod user;

pub use user::{LoginRequest, TokenResponse, User, UserResponse};
